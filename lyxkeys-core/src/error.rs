//! Error types for the LyXKeys engine

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Empty key sequence")]
    EmptySequence,

    #[error("Binding table import error: {0}")]
    Import(#[from] serde_json::Error),

    #[error("Action sink failure: {0}")]
    Sink(String),
}

pub type Result<T> = std::result::Result<T, Error>;
