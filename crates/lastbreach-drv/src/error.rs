//! Top-level error aggregation. `RunnerError` is a closed,
//! `thiserror`-derived taxonomy, not `anyhow`: `main` needs the variant to
//! pick an exit code, and `anyhow::Error` would erase it.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Lex(#[from] lastbreach_lex::LexError),

    #[error(transparent)]
    Parse(#[from] lastbreach_par::ParseError),

    #[error("{path}: no `character \"Name\" {{ ... }}` block found")]
    MissingCharacter { path: PathBuf },
}
