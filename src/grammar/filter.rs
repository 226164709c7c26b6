//! `_filter` search parameter tokenizer
//!
//! Filter values such as token systems and URLs contain characters FHIRPath
//! symbols do not, so symbols run until whitespace, `]` or `)`. Bare dates
//! like `2021-01-01` are date/time literals.

use super::{FHIRPATH_KEYWORDS, Grammar};
use crate::lexer::chars::is_filter_symbol_char;
use crate::lexer::{Token, TokenizerOptions};

/// FHIRPath operators plus the filter comparison words
pub const FILTER_OPERATORS: &[&str] = &["!=", "!~", "<=", ">=", "{}", "->", "eq", "ne", "co"];

/// `_filter` search expressions
pub static FILTER: Grammar = Grammar::new(
    "filter",
    FHIRPATH_KEYWORDS,
    FILTER_OPERATORS,
    TokenizerOptions::new()
        .with_date_time_literals(true)
        .with_symbol_class(is_filter_symbol_char),
);

/// Tokenize a `_filter` expression
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    FILTER.tokenize(input)
}
