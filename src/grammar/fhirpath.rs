//! FHIRPath tokenizer

use super::{FHIRPATH_KEYWORDS, FHIRPATH_OPERATORS, Grammar};
use crate::lexer::{Token, TokenizerOptions};

/// FHIRPath expressions
pub static FHIRPATH: Grammar = Grammar::new(
    "fhirpath",
    FHIRPATH_KEYWORDS,
    FHIRPATH_OPERATORS,
    TokenizerOptions::new(),
);

/// Tokenize a FHIRPath expression
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    FHIRPATH.tokenize(input)
}
