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

//! Lexical tokenizer for FHIR expression languages
//!
//! A generic, configurable character-level tokenizer and the grammar
//! vocabularies of FHIRPath, the FHIR Mapping Language and `_filter`
//! search expressions.
//!
//! ```
//! use octofhir_fhirlex::fhirpath;
//!
//! let tokens = fhirpath::tokenize("Patient.birthDate > @1970-01-01");
//! let ids: Vec<_> = tokens.iter().map(|t| t.id()).collect();
//! assert_eq!(ids, ["Symbol", ".", "Symbol", ">", "DateTime"]);
//! ```

pub mod error;
pub mod grammar;
pub mod lexer;

pub use error::{LexError, LexResult};
pub use grammar::{FHIRPATH, FILTER, Grammar, MAPPING, fhirpath, filter, mapping};
pub use lexer::{
    Marker, Token, TokenCategory, TokenKind, TokenStream, Tokenizer, TokenizerOptions,
};
