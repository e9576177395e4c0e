use crate::record::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CsError {
    /// None of the variables that could locate a directory root is set.
    #[error("could not find necessary environment variables (tried {})", .tried.join(", "))]
    Configuration { tried: Vec<&'static str> },

    #[error("no list file for '{name}' at {}", .path.display())]
    NoListFile { name: String, path: PathBuf },

    #[error("list file exists but is of wrong filetype: {}", .0.display())]
    WrongFileType(PathBuf),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("could not parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("{} is not a valid list document: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CsError {
    /// True for the "list does not exist yet" condition, which callers
    /// usually treat as an empty list rather than a failure.
    pub fn is_missing_list(&self) -> bool {
        matches!(self, CsError::NoListFile { .. })
    }
}

pub type Result<T> = std::result::Result<T, CsError>;
