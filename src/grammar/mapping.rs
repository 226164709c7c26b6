//! FHIR Mapping Language tokenizer

use super::{FHIRPATH_KEYWORDS, Grammar};
use crate::lexer::{Token, TokenizerOptions};

/// FHIRPath operators plus the mapping arrows, group type brackets and `==`
pub const MAPPING_OPERATORS: &[&str] = &[
    "!=", "!~", "<=", ">=", "{}", "->", "->", "<<", ">>", "==",
];

/// StructureMap / ConceptMap documents in the FHIR Mapping Language
pub static MAPPING: Grammar = Grammar::new(
    "mapping",
    FHIRPATH_KEYWORDS,
    MAPPING_OPERATORS,
    TokenizerOptions::new(),
);

/// Tokenize a FHIR Mapping Language document
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    MAPPING.tokenize(input)
}
