use fleetdesk_model::ModelError;
use thiserror::Error;

use crate::source::SourceError;

#[derive(Error, Debug)]
pub enum TableError {
    #[error("Record source error: {0}")]
    Source(#[from] SourceError),

    #[error("Invalid model value: {0}")]
    Model(#[from] ModelError),

    #[error("Unknown screen: {0}")]
    UnknownScreen(String),
}

pub type Result<T> = std::result::Result<T, TableError>;
