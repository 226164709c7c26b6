// Copyright 2024 OctoFHIR Team
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Generic character-level tokenizer
//!
//! The tokenizer is configured with a keyword list, an operator list and
//! [`TokenizerOptions`], and turns the whole input into a flat token list:
//! - Zero-copy token values borrowed from the input
//! - Comments are emitted as tokens, whitespace is dropped
//! - Mark/reset position stack for non-destructive one-token lookahead
//! - Numbers followed by a unit are folded into a single quantity token
//! - Never fails: malformed input degrades to best-effort tokens

use super::chars::{is_digit, is_symbol_char, is_whitespace, is_word};
use super::span::Cursor;
use super::token::{Token, TokenCategory, TokenKind};
use rustc_hash::FxHashSet;

/// Scanning options
#[derive(Debug, Clone, Copy)]
pub struct TokenizerOptions {
    /// Treat `digits-...` as a date/time literal even without the `@` sigil
    pub date_time_literals: bool,
    /// Characters allowed to continue a symbol once started
    pub symbol_class: fn(char) -> bool,
}

impl TokenizerOptions {
    /// Default options: no bare date/time literals, word characters and `$` in symbols
    pub const fn new() -> Self {
        Self {
            date_time_literals: false,
            symbol_class: is_symbol_char,
        }
    }

    /// Enable or disable bare date/time literals
    pub const fn with_date_time_literals(mut self, enable: bool) -> Self {
        self.date_time_literals = enable;
        self
    }

    /// Replace the symbol character class
    pub const fn with_symbol_class(mut self, symbol_class: fn(char) -> bool) -> Self {
        self.symbol_class = symbol_class;
        self
    }
}

impl Default for TokenizerOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Single-use tokenizer over one input string
pub struct Tokenizer<'input> {
    input: &'input str,
    keywords: FxHashSet<Box<str>>,
    operators: FxHashSet<Box<str>>,
    options: TokenizerOptions,
    pos: Cursor,
    result: Vec<Token<'input>>,
    marks: Vec<Cursor>,
    peeking: bool,
}

impl<'input> Tokenizer<'input> {
    /// Create a tokenizer with default options
    pub fn new(input: &'input str, keywords: &[&str], operators: &[&str]) -> Self {
        Self::with_options(input, keywords, operators, TokenizerOptions::default())
    }

    /// Create a tokenizer with custom options
    pub fn with_options(
        input: &'input str,
        keywords: &[&str],
        operators: &[&str],
        options: TokenizerOptions,
    ) -> Self {
        Self {
            input,
            keywords: keywords.iter().map(|k| Box::from(*k)).collect(),
            operators: operators.iter().map(|o| Box::from(*o)).collect(),
            options,
            pos: Cursor::default(),
            result: Vec::with_capacity(input.len() / 4 + 1),
            marks: Vec::with_capacity(4),
            peeking: false,
        }
    }

    /// Consume the whole input and return the tokens in source order.
    ///
    /// The scan position is never rewound, so a second call returns an empty list.
    pub fn tokenize(&mut self) -> Vec<Token<'input>> {
        while self.pos.offset < self.input.len() {
            if let Some(token) = self.consume_token() {
                self.result.push(token);
            }
        }
        log::trace!(
            "tokenized {} bytes into {} tokens",
            self.input.len(),
            self.result.len()
        );
        std::mem::take(&mut self.result)
    }

    #[inline(always)]
    fn curr(&self) -> Option<char> {
        self.input[self.pos.offset..].chars().next()
    }

    #[inline(always)]
    fn peek(&self) -> Option<char> {
        self.input[self.pos.offset..].chars().nth(1)
    }

    #[inline(always)]
    fn prev(&self) -> Option<char> {
        self.input[..self.pos.offset].chars().next_back()
    }

    #[inline(always)]
    fn advance(&mut self) {
        if let Some(c) = self.curr() {
            self.pos.step(c);
        }
    }

    #[inline]
    fn consume_while(&mut self, condition: impl Fn(char) -> bool) -> &'input str {
        let start = self.pos.offset;
        while let Some(c) = self.curr() {
            if !condition(c) {
                break;
            }
            self.pos.step(c);
        }
        &self.input[start..self.pos.offset]
    }

    fn push_mark(&mut self) {
        self.marks.push(self.pos);
    }

    fn pop_mark_and_reset(&mut self) {
        if let Some(mark) = self.marks.pop() {
            self.pos = mark;
        }
    }

    /// Pop the innermost mark and build a token starting there
    fn build_token(&mut self, kind: TokenKind<'input>, value: &'input str) -> Token<'input> {
        let mark = self.marks.pop().unwrap_or(self.pos);
        Token::new(kind, value, mark.marker, mark.offset..self.pos.offset)
    }

    fn prev_token(&self) -> Option<&Token<'input>> {
        self.result.last()
    }

    /// Scan the next token and restore the position afterwards.
    ///
    /// A number scanned while peeking never looks further ahead, so the
    /// lookahead stays one token deep.
    fn peek_token(&mut self) -> Option<Token<'input>> {
        self.push_mark();
        let peeking = std::mem::replace(&mut self.peeking, true);
        let token = self.consume_token();
        self.peeking = peeking;
        self.pop_mark_and_reset();
        token
    }

    fn consume_token(&mut self) -> Option<Token<'input>> {
        self.consume_whitespace();

        let c = self.curr()?;
        self.push_mark();

        let next = self.peek();
        let token = if c == '/' && next == Some('*') {
            self.consume_multi_line_comment()
        } else if c == '/' && next == Some('/') {
            self.consume_single_line_comment()
        } else if c == '\'' || c == '"' {
            self.consume_string(c)
        } else if c == '`' {
            self.consume_backtick_symbol()
        } else if c == '@' {
            self.consume_date_time()
        } else if is_digit(c) {
            self.consume_number()
        } else if is_word(c) || (c == '$' && next.is_some_and(is_word)) {
            self.consume_symbol()
        } else {
            self.consume_operator()
        };

        log::trace!("{} {:?} at {}", token.id(), token.value, token.marker());
        Some(token)
    }

    fn consume_whitespace(&mut self) {
        self.consume_while(is_whitespace);
    }

    fn consume_multi_line_comment(&mut self) -> Token<'input> {
        let start = self.pos.offset;
        self.advance();
        self.advance();
        while let Some(c) = self.curr() {
            if c == '*' && self.peek() == Some('/') {
                self.advance();
                self.advance();
                break;
            }
            self.pos.step(c);
        }
        let value = &self.input[start..self.pos.offset];
        self.build_token(TokenKind::Category(TokenCategory::Comment), value)
    }

    fn consume_single_line_comment(&mut self) -> Token<'input> {
        let value = self.consume_while(|c| c != '\n');
        self.build_token(TokenKind::Category(TokenCategory::Comment), value)
    }

    /// Quoted string. A delimiter preceded by a backslash does not close the string.
    fn consume_string(&mut self, delimiter: char) -> Token<'input> {
        self.advance();
        let start = self.pos.offset;
        while let Some(c) = self.curr() {
            if c == delimiter && self.prev() != Some('\\') {
                break;
            }
            self.pos.step(c);
        }
        let value = &self.input[start..self.pos.offset];
        self.advance();
        self.build_token(TokenKind::Category(TokenCategory::String), value)
    }

    fn consume_backtick_symbol(&mut self) -> Token<'input> {
        self.advance();
        let value = self.consume_while(|c| c != '`');
        self.advance();
        self.build_token(TokenKind::Category(TokenCategory::Symbol), value)
    }

    fn consume_date_time(&mut self) -> Token<'input> {
        let start = self.pos.offset;
        self.advance(); // '@'
        self.consume_date_time_body();
        let value = &self.input[start..self.pos.offset];
        self.build_token(TokenKind::Category(TokenCategory::DateTime), value)
    }

    /// Date part, then an optional `T` time part with fraction and zone
    fn consume_date_time_body(&mut self) {
        self.consume_while(|c| is_digit(c) || c == '-');
        if self.curr() != Some('T') {
            return;
        }
        self.advance();
        self.consume_while(|c| is_digit(c) || c == ':');
        if self.curr() == Some('.') && self.peek().is_some_and(is_digit) {
            self.advance();
            self.consume_while(is_digit);
        }
        match self.curr() {
            Some('Z') => self.advance(),
            Some('+' | '-') => {
                self.advance();
                self.consume_while(|c| is_digit(c) || c == ':');
            }
            _ => {}
        }
    }

    fn consume_number(&mut self) -> Token<'input> {
        let start = self.pos.offset;
        self.consume_while(is_digit);
        if self.curr() == Some('.') && self.peek().is_some_and(is_digit) {
            self.advance();
            self.consume_while(is_digit);
        }

        if self.options.date_time_literals && self.curr() == Some('-') {
            // Bare date: rescan from the first digit as if an '@' preceded it
            if let Some(mark) = self.marks.last() {
                self.pos = *mark;
            }
            self.consume_date_time_body();
            let value = &self.input[start..self.pos.offset];
            log::debug!("reinterpreted number as date/time literal {value:?}");
            return self.build_token(TokenKind::Category(TokenCategory::DateTime), value);
        }

        let mut category = TokenCategory::Number;
        if !self.peeking
            && self.curr() == Some(' ')
            && self.peek_token().is_some_and(|t| t.is_unit())
        {
            category = TokenCategory::Quantity;
            self.consume_token();
        }

        let value = &self.input[start..self.pos.offset];
        if category == TokenCategory::Quantity {
            log::debug!("promoted number to quantity {value:?}");
        }
        self.build_token(TokenKind::Category(category), value)
    }

    fn consume_symbol(&mut self) -> Token<'input> {
        let start = self.pos.offset;
        // The first character was already vetted by dispatch
        self.advance();
        self.consume_while(self.options.symbol_class);
        let value = &self.input[start..self.pos.offset];

        let after_dot = self.prev_token().is_some_and(|t| t.value == ".");
        if !after_dot && self.keywords.contains(value) {
            self.build_token(TokenKind::Keyword(value), value)
        } else {
            self.build_token(TokenKind::Category(TokenCategory::Symbol), value)
        }
    }

    /// Two-character operator if configured, otherwise any single character
    fn consume_operator(&mut self) -> Token<'input> {
        let start = self.pos.offset;
        if let (Some(c), Some(next)) = (self.curr(), self.peek()) {
            let end = start + c.len_utf8() + next.len_utf8();
            let two = &self.input[start..end];
            if self.operators.contains(two) {
                self.advance();
                self.advance();
                return self.build_token(TokenKind::Operator(two), two);
            }
        }
        self.advance();
        let one = &self.input[start..self.pos.offset];
        self.build_token(TokenKind::Operator(one), one)
    }
}

/// Tokenize `input` in one call
pub fn tokenize<'input>(
    input: &'input str,
    keywords: &[&str],
    operators: &[&str],
    options: TokenizerOptions,
) -> Vec<Token<'input>> {
    Tokenizer::with_options(input, keywords, operators, options).tokenize()
}
