//! Tokenizer for the character/world/catalog DSL dialects.
//!
//! One lexer, one grammar of tokens, shared by all three file kinds — the
//! dialects differ only in which top-level blocks the parser accepts, not in
//! how bytes become tokens.

mod cursor;
mod error;
mod lexer;
mod token;

pub use error::LexError;
pub use lexer::Lexer;
pub use token::{LocatedToken, Token};
