//! # Record Collections
//!
//! The storage layer knows nothing about what a list contains. It only needs a
//! collection to be able to:
//!
//! - check itself ([`Validate`])
//! - convert to and from its portable form, which here is the serde data model
//!   encoded as JSON
//!
//! [`RecordCollection`] bundles both and is implemented automatically.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;

/// Raised by a collection whose content is malformed or semantically invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Anything [`crate::store::ListStorage`] can persist.
pub trait RecordCollection: Validate + Serialize + DeserializeOwned {}

impl<T: Validate + Serialize + DeserializeOwned> RecordCollection for T {}
