//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias.
//! Variants cover invalid parameters, unknown component types, missing components, empty
//! style pools and generic errors.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("component '{id}' has unknown type '{tag}'")]
    UnknownComponentType { id: String, tag: String },

    #[error("component '{id}' not found")]
    NotFound { id: String },

    #[error("component '{id}' has an empty '{pool}' pool")]
    EmptyPool { id: String, pool: &'static str },

    #[error("{0}")]
    Other(String),
}

impl From<String> for Error {
    fn from(value: String) -> Self {
        Error::Other(value)
    }
}

impl From<&str> for Error {
    fn from(value: &str) -> Self {
        Error::Other(value.to_owned())
    }
}
