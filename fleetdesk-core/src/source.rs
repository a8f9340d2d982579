//! Seam to the backend that owns the records.
//!
//! The table engine never talks to the REST API itself. A screen hands it the
//! result of a completed fetch and re-runs the pipeline in full whenever new
//! data arrives; the only feedback flowing back is success or failure.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use fleetdesk_model::{Record, RecordId};
use serde_json::Value;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("source unavailable: {0}")]
    Unavailable(String),

    #[error("record {0} not found")]
    NotFound(RecordId),

    #[error("operation not supported by this source: {0}")]
    Unsupported(&'static str),

    #[error("malformed payload: {0}")]
    Malformed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// List and delete access to one collection of records.
#[async_trait]
pub trait RecordSource: Send + Sync {
    async fn fetch_list(&self) -> Result<Vec<Record>, SourceError>;

    async fn delete_one(&self, id: &RecordId) -> Result<(), SourceError>;
}

#[async_trait]
impl<S: RecordSource + ?Sized> RecordSource for Arc<S> {
    async fn fetch_list(&self) -> Result<Vec<Record>, SourceError> {
        (**self).fetch_list().await
    }

    async fn delete_one(&self, id: &RecordId) -> Result<(), SourceError> {
        (**self).delete_one(id).await
    }
}

/// Records held in memory; deletes remove the first row with a matching id.
#[derive(Debug, Default)]
pub struct InMemorySource {
    records: RwLock<Vec<Record>>,
}

impl InMemorySource {
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    pub async fn insert(&self, record: Record) {
        self.records.write().await.push(record);
    }
}

#[async_trait]
impl RecordSource for InMemorySource {
    async fn fetch_list(&self) -> Result<Vec<Record>, SourceError> {
        Ok(self.records.read().await.clone())
    }

    async fn delete_one(&self, id: &RecordId) -> Result<(), SourceError> {
        let mut records = self.records.write().await;
        let position = records
            .iter()
            .position(|record| record.id().as_ref() == Some(id))
            .ok_or_else(|| SourceError::NotFound(id.clone()))?;
        records.remove(position);
        debug!(%id, remaining = records.len(), "deleted record");
        Ok(())
    }
}

/// Read-only source backed by a JSON export: an array of objects.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl RecordSource for JsonFileSource {
    async fn fetch_list(&self) -> Result<Vec<Record>, SourceError> {
        let bytes = tokio::fs::read(&self.path).await?;
        let payload: Value = serde_json::from_slice(&bytes)
            .map_err(|err| SourceError::Malformed(format!("{}: {err}", self.path.display())))?;
        parse_records(payload)
    }

    async fn delete_one(&self, _id: &RecordId) -> Result<(), SourceError> {
        Err(SourceError::Unsupported("delete on a JSON export"))
    }
}

/// Accept a bare array or an object wrapping it under `data`, the two shapes
/// the list endpoints return.
pub fn parse_records(payload: Value) -> Result<Vec<Record>, SourceError> {
    let rows = match payload {
        Value::Array(rows) => rows,
        Value::Object(mut envelope) => match envelope.remove("data") {
            Some(Value::Array(rows)) => rows,
            _ => {
                return Err(SourceError::Malformed(
                    "expected an array or an object with a `data` array".into(),
                ));
            }
        },
        _ => {
            return Err(SourceError::Malformed(
                "expected an array of records".into(),
            ));
        }
    };

    let total = rows.len();
    let records: Vec<Record> = rows
        .into_iter()
        .filter_map(|row| match Record::from_value(row) {
            Ok(record) => Some(record),
            Err(err) => {
                warn!(error = %err, "skipping non-object row");
                None
            }
        })
        .collect();

    if records.len() != total {
        debug!(kept = records.len(), total, "dropped malformed rows");
    }
    Ok(records)
}
