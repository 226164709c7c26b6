//! Lexical analysis
//!
//! A generic, configurable tokenizer producing a flat token list, plus a
//! lookahead stream for the parsers that consume it.

#![warn(missing_docs)]

pub mod chars;
pub mod span;
pub mod stream;
pub mod token;
pub mod tokenizer;

pub use span::Marker;
pub use stream::TokenStream;
pub use token::{Token, TokenCategory, TokenKind, is_standard_unit};
pub use tokenizer::{Tokenizer, TokenizerOptions, tokenize};
