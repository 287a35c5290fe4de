use std::io;
use std::path::PathBuf;

use crate::tokenizer::TokenizeError;

/// Errors from the highlighting entry points.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid theme: {0}")]
    InvalidTheme(String),

    #[error("could not detect language for file: {}", path.display())]
    LanguageDetection { path: PathBuf },

    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Tokenize(#[from] TokenizeError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
