use std::fmt::{self, Display};

/// Errors produced by model constructors and validation routines.
#[derive(Debug)]
pub enum ModelError {
    NotAnObject(&'static str),
    InvalidPageSize(usize),
    UnknownSemanticType(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::NotAnObject(found) => {
                write!(f, "expected a JSON object record, found {found}")
            }
            ModelError::InvalidPageSize(size) => {
                write!(f, "invalid page size: {size} (must be greater than zero)")
            }
            ModelError::UnknownSemanticType(name) => {
                write!(f, "unknown semantic type: {name}")
            }
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;
