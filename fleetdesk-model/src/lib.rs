//! Core data model definitions shared across Fleetdesk crates.
#![allow(missing_docs)]

pub mod error;
pub mod field_path;
pub mod ids;
pub mod paging;
pub mod prelude;
pub mod record;
pub mod semantic;
pub mod sort;

// Intentionally curated re-exports for downstream consumers.
pub use error::{ModelError, Result as ModelResult};
pub use field_path::FieldPath;
pub use ids::RecordId;
pub use paging::{PageSize, PaginationState};
pub use record::Record;
pub use semantic::SemanticType;
pub use sort::{SortConfig, SortDirection};
