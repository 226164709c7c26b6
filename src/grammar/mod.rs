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

//! Grammar vocabularies layered over the generic tokenizer
//!
//! Each grammar is a fixed keyword list, operator list and option set.

pub mod fhirpath;
pub mod filter;
pub mod mapping;

use crate::error::LexResult;
use crate::lexer::{Token, TokenCategory, TokenStream, Tokenizer, TokenizerOptions};

pub use fhirpath::FHIRPATH;
pub use filter::FILTER;
pub use mapping::MAPPING;

/// Keywords shared by every FHIRPath-derived grammar
pub const FHIRPATH_KEYWORDS: &[&str] = &["true", "false"];

/// Multi-character operators of FHIRPath
pub const FHIRPATH_OPERATORS: &[&str] = &["!=", "!~", "<=", ">=", "{}", "->"];

/// Static tokenizer configuration for one language
#[derive(Debug, Clone, Copy)]
pub struct Grammar {
    /// Short grammar name
    pub name: &'static str,
    /// Words tokenized under their own id
    pub keywords: &'static [&'static str],
    /// Two-character operators
    pub operators: &'static [&'static str],
    /// Scanning options
    pub options: TokenizerOptions,
}

impl Grammar {
    /// Create a grammar
    pub const fn new(
        name: &'static str,
        keywords: &'static [&'static str],
        operators: &'static [&'static str],
        options: TokenizerOptions,
    ) -> Self {
        Self {
            name,
            keywords,
            operators,
            options,
        }
    }

    /// Create a tokenizer for `input`
    pub fn tokenizer<'input>(&self, input: &'input str) -> Tokenizer<'input> {
        Tokenizer::with_options(input, self.keywords, self.operators, self.options)
    }

    /// Tokenize `input`
    pub fn tokenize<'input>(&self, input: &'input str) -> Vec<Token<'input>> {
        self.tokenizer(input).tokenize()
    }

    /// Tokenize `input` into a comment-free stream, failing on empty input
    pub fn stream<'input>(&self, input: &'input str) -> LexResult<TokenStream<'input>> {
        let mut tokens = self.tokenize(input);
        tokens.retain(|t| !t.is_category(TokenCategory::Comment));
        TokenStream::non_empty(tokens)
    }

    /// Look up a built-in grammar by name
    pub fn by_name(name: &str) -> Option<&'static Grammar> {
        [&FHIRPATH, &MAPPING, &FILTER]
            .into_iter()
            .find(|g| g.name.eq_ignore_ascii_case(name))
    }
}
