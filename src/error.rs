// src/error.rs

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HamlogError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Home directory not found")]
    HomeDirNotFound,

    #[error("Config error in {path:?}: {detail}")]
    Config { path: PathBuf, detail: String },

    #[error("The log session is closed; start a new session before logging")]
    SessionClosed,

    #[error("{path:?} is not a contact log (unexpected header)")]
    NotAContactLog { path: PathBuf },

    #[error("Malformed row at line {line}: {detail}")]
    MalformedRow { line: usize, detail: String },
}

pub type Result<T> = std::result::Result<T, HamlogError>;
