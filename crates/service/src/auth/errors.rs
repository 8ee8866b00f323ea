use models::errors::ModelError;
use thiserror::Error;

use crate::errors::StoreError;

/// Business errors for auth workflows. The HTTP boundary reduces these to sentinels.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("validation failed: {0} is required")]
    InvalidField(&'static str),
    #[error("validation failed: age must be positive, got {0}")]
    InvalidAge(i32),
    #[error("email already registered")]
    DuplicateEmail,
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("hashing error: {0}")]
    Hash(String),
}

impl AuthError {
    /// Stable numeric code for logging
    pub fn code(&self) -> u16 {
        match self {
            AuthError::InvalidField(_) => 1001,
            AuthError::InvalidAge(_) => 1002,
            AuthError::DuplicateEmail => 1003,
            AuthError::InvalidCredentials => 1004,
            AuthError::Hash(_) => 1101,
        }
    }
}

impl From<ModelError> for AuthError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::BlankField(field) => AuthError::InvalidField(field),
            ModelError::InvalidAge(age) => AuthError::InvalidAge(age),
        }
    }
}

impl From<StoreError> for AuthError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::DuplicateEmail(_) => AuthError::DuplicateEmail,
        }
    }
}
