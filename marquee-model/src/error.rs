use std::fmt::{self, Display};

/// Errors produced by model constructors and validation routines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    InvalidRegion(String),
    InvalidReleaseType(i32),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::InvalidRegion(code) => {
                write!(f, "invalid region code: {code:?}")
            }
            ModelError::InvalidReleaseType(code) => {
                write!(f, "invalid release type code: {code}")
            }
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;
