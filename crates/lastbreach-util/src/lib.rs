//! Shared primitives used across the lastbreach pipeline crates.
//!
//! This crate plays the same role `faxc-util` plays for the compiler this
//! project is descended from: a small, dependency-light base every phase
//! crate sits on top of. Unlike a whole-program compiler, this runner has no
//! need for a concurrent, globally-shared symbol table or a multi-file
//! source map — every `.lbp`/`.lbw`/`.lbc` file is lexed and parsed in full
//! before the next one starts, on a single thread. The interner here is
//! therefore owned per lex/parse session rather than process-global.

pub mod source_loc;
pub mod symbol;

pub use source_loc::SourceLoc;
pub use symbol::{Interner, Symbol};
