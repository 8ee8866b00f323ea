use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("validation error: {0} is required")]
    BlankField(&'static str),
    #[error("validation error: age must be positive, got {0}")]
    InvalidAge(i32),
}
