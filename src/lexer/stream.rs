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

//! Token stream with lookahead for downstream parsers

use super::token::{Token, TokenCategory};
use crate::error::{LexError, LexResult};

/// Token stream with lookahead capability
#[derive(Debug, Clone)]
pub struct TokenStream<'input> {
    tokens: Vec<Token<'input>>,
    position: usize,
}

impl<'input> TokenStream<'input> {
    /// Create a new token stream over every token, comments included
    pub fn new(tokens: Vec<Token<'input>>) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// Create a token stream with comment tokens removed
    pub fn without_comments(mut tokens: Vec<Token<'input>>) -> Self {
        tokens.retain(|t| !t.is_category(TokenCategory::Comment));
        Self::new(tokens)
    }

    /// Create a token stream, failing when there is nothing to consume
    pub fn non_empty(tokens: Vec<Token<'input>>) -> LexResult<Self> {
        if tokens.is_empty() {
            return Err(LexError::Empty);
        }
        Ok(Self::new(tokens))
    }

    /// Check if there are tokens left
    pub fn has_more(&self) -> bool {
        self.position < self.tokens.len()
    }

    /// Check if we're at the end of the stream
    pub fn is_eof(&self) -> bool {
        !self.has_more()
    }

    /// Peek at the current token without consuming
    pub fn peek(&self) -> Option<&Token<'input>> {
        self.tokens.get(self.position)
    }

    /// Peek at a token n positions ahead
    pub fn peek_ahead(&self, n: usize) -> Option<&Token<'input>> {
        self.tokens.get(self.position + n)
    }

    /// Get the current position in the stream
    pub fn position(&self) -> usize {
        self.position
    }

    /// Reset to a previous position
    pub fn reset_to(&mut self, position: usize) {
        self.position = position.min(self.tokens.len());
    }

    /// Tokens not consumed yet
    pub fn remaining(&self) -> &[Token<'input>] {
        &self.tokens[self.position..]
    }

    /// Consume a token if it matches the predicate
    pub fn consume_if<F>(&mut self, predicate: F) -> Option<Token<'input>>
    where
        F: FnOnce(&Token<'input>) -> bool,
    {
        if self.peek().is_some_and(predicate) {
            return self.next();
        }
        None
    }

    /// Consume the next token, which must have the given id
    pub fn consume(&mut self, id: &str) -> LexResult<Token<'input>> {
        self.expect(id, |t| t.is(id))
    }

    /// Consume the next token, which must have the given id and value
    pub fn consume_value(&mut self, id: &str, value: &str) -> LexResult<Token<'input>> {
        self.expect(&format!("{id} '{value}'"), |t| t.is(id) && t.value == value)
    }

    fn expect<F>(&mut self, expected: &str, predicate: F) -> LexResult<Token<'input>>
    where
        F: FnOnce(&Token<'input>) -> bool,
    {
        let Some(token) = self.peek() else {
            return Err(LexError::unexpected_end(expected));
        };
        if !predicate(token) {
            return Err(LexError::unexpected_token(
                expected,
                token.value,
                token.line,
                token.column,
            ));
        }
        let token = token.clone();
        self.position += 1;
        Ok(token)
    }
}

impl<'input> Iterator for TokenStream<'input> {
    type Item = Token<'input>;

    /// Consume and return the current token
    fn next(&mut self) -> Option<Self::Item> {
        let token = self.tokens.get(self.position).cloned();
        if token.is_some() {
            self.position += 1;
        }
        token
    }
}
