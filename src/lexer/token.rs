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

//! Token representation
//!
//! Tokens borrow their text from the input. Every token exposes one string
//! discriminant through [`Token::id`]: the category name for literals and
//! symbols, or the matched text itself for keywords and operators.

use super::span::Marker;
use once_cell::sync::Lazy;
use rustc_hash::FxHashSet;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::fmt;
use std::ops::Range;

/// Literal and symbol categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenCategory {
    /// Identifier that is not a keyword
    Symbol,
    /// Quoted string literal
    String,
    /// Integer or decimal literal
    Number,
    /// Number followed by a unit
    Quantity,
    /// Date, time or date/time literal
    DateTime,
    /// Single-line or multi-line comment
    Comment,
}

impl TokenCategory {
    /// Category name as used in token ids
    pub const fn as_str(self) -> &'static str {
        match self {
            TokenCategory::Symbol => "Symbol",
            TokenCategory::String => "String",
            TokenCategory::Number => "Number",
            TokenCategory::Quantity => "Quantity",
            TokenCategory::DateTime => "DateTime",
            TokenCategory::Comment => "Comment",
        }
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a token is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind<'input> {
    /// Literal or symbol
    Category(TokenCategory),
    /// Configured keyword, carrying its text
    Keyword(&'input str),
    /// Operator or punctuation, carrying its text
    Operator(&'input str),
}

impl<'input> TokenKind<'input> {
    /// External string discriminant
    #[inline]
    pub fn id(&self) -> &'input str {
        match self {
            TokenKind::Category(category) => category.as_str(),
            TokenKind::Keyword(text) | TokenKind::Operator(text) => text,
        }
    }
}

/// Time units that turn a preceding number into a quantity
static STANDARD_UNITS: Lazy<FxHashSet<&'static str>> = Lazy::new(|| {
    [
        "year",
        "years",
        "month",
        "months",
        "week",
        "weeks",
        "day",
        "days",
        "hour",
        "hours",
        "minute",
        "minutes",
        "second",
        "seconds",
        "millisecond",
        "milliseconds",
    ]
    .into_iter()
    .collect()
});

/// Check if a word is one of the calendar duration units
pub fn is_standard_unit(word: &str) -> bool {
    STANDARD_UNITS.contains(word)
}

/// A single lexical unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'input> {
    /// What the token is
    pub kind: TokenKind<'input>,
    /// Token text. Strings and backtick symbols exclude their delimiters.
    pub value: &'input str,
    /// Character index of the token start
    pub index: usize,
    /// Line of the token start (1-indexed)
    pub line: usize,
    /// Column of the token start (0-indexed)
    pub column: usize,
    start: usize,
    end: usize,
}

impl<'input> Token<'input> {
    pub(crate) fn new(
        kind: TokenKind<'input>,
        value: &'input str,
        marker: Marker,
        span: Range<usize>,
    ) -> Self {
        Self {
            kind,
            value,
            index: marker.index,
            line: marker.line,
            column: marker.column,
            start: span.start,
            end: span.end,
        }
    }

    /// External string discriminant (`"Symbol"`, `"String"`, a keyword, `"!="`, ...)
    #[inline]
    pub fn id(&self) -> &'input str {
        self.kind.id()
    }

    /// Check the token id
    #[inline]
    pub fn is(&self, id: &str) -> bool {
        self.id() == id
    }

    /// Check the token category
    #[inline]
    pub fn is_category(&self, category: TokenCategory) -> bool {
        self.kind == TokenKind::Category(category)
    }

    /// Start position of the token
    pub fn marker(&self) -> Marker {
        Marker::new(self.index, self.line, self.column)
    }

    /// Byte range of the source text covered by the token, delimiters included
    pub fn span(&self) -> Range<usize> {
        self.start..self.end
    }

    /// A string literal or a calendar unit symbol can follow a number to form a quantity
    pub(crate) fn is_unit(&self) -> bool {
        match self.kind {
            TokenKind::Category(TokenCategory::String) => true,
            TokenKind::Category(TokenCategory::Symbol) => is_standard_unit(self.value),
            _ => false,
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Category(category) => write!(f, "{category}({})", self.value),
            TokenKind::Keyword(text) | TokenKind::Operator(text) => f.write_str(text),
        }
    }
}

impl Serialize for Token<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Token", 5)?;
        state.serialize_field("id", self.id())?;
        state.serialize_field("value", self.value)?;
        state.serialize_field("index", &self.index)?;
        state.serialize_field("line", &self.line)?;
        state.serialize_field("column", &self.column)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(kind: TokenKind<'static>, value: &'static str) -> Token<'static> {
        Token::new(kind, value, Marker::START, 0..value.len())
    }

    #[test]
    fn test_token_ids() {
        assert_eq!(token(TokenKind::Category(TokenCategory::Symbol), "name").id(), "Symbol");
        assert_eq!(token(TokenKind::Keyword("true"), "true").id(), "true");
        assert_eq!(token(TokenKind::Operator("!="), "!=").id(), "!=");
        assert!(token(TokenKind::Operator("("), "(").is("("));
    }

    #[test]
    fn test_unit_detection() {
        assert!(token(TokenKind::Category(TokenCategory::String), "mg").is_unit());
        assert!(token(TokenKind::Category(TokenCategory::Symbol), "days").is_unit());
        assert!(token(TokenKind::Category(TokenCategory::Symbol), "millisecond").is_unit());
        assert!(!token(TokenKind::Category(TokenCategory::Symbol), "dyas").is_unit());
        assert!(!token(TokenKind::Keyword("days"), "days").is_unit());
        assert!(!token(TokenKind::Category(TokenCategory::Number), "5").is_unit());
    }

    #[test]
    fn test_token_serialization() {
        let token = Token::new(
            TokenKind::Operator("->"),
            "->",
            Marker::new(4, 2, 1),
            6..8,
        );
        let json = serde_json::to_value(&token).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": "->", "value": "->", "index": 4, "line": 2, "column": 1})
        );
    }

    #[test]
    fn test_token_display() {
        assert_eq!(
            token(TokenKind::Category(TokenCategory::Quantity), "5 days").to_string(),
            "Quantity(5 days)"
        );
        assert_eq!(token(TokenKind::Operator("<="), "<=").to_string(), "<=");
    }
}
