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

//! Error types for token consumers
//!
//! The tokenizer itself never fails. These errors are raised by the layer
//! that walks a token list and expects particular tokens in particular places.

use thiserror::Error;

/// Result type alias for token consumption
pub type LexResult<T> = std::result::Result<T, LexError>;

/// Errors raised while consuming a token sequence
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// The input contained nothing but whitespace
    #[error("could not tokenize")]
    Empty,

    /// The token list ran out while a token was still expected
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEnd {
        /// Description of the expected token
        expected: String,
    },

    /// A token did not match what the consumer expected
    #[error("expected {expected} but found '{found}' at {line}:{column}")]
    UnexpectedToken {
        /// Description of the expected token
        expected: String,
        /// Value of the token actually found
        found: String,
        /// Line of the offending token (1-indexed)
        line: usize,
        /// Column of the offending token (0-indexed)
        column: usize,
    },
}

impl LexError {
    /// Create an unexpected end error
    pub fn unexpected_end(expected: impl Into<String>) -> Self {
        Self::UnexpectedEnd {
            expected: expected.into(),
        }
    }

    /// Create an unexpected token error
    pub fn unexpected_token(
        expected: impl Into<String>,
        found: impl Into<String>,
        line: usize,
        column: usize,
    ) -> Self {
        Self::UnexpectedToken {
            expected: expected.into(),
            found: found.into(),
            line,
            column,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(LexError::Empty.to_string(), "could not tokenize");
        assert_eq!(
            LexError::unexpected_end("')'").to_string(),
            "unexpected end of input, expected ')'"
        );
        assert_eq!(
            LexError::unexpected_token("String", "=", 2, 4).to_string(),
            "expected String but found '=' at 2:4"
        );
    }
}
