//! Convenience re-exports for crates that work with table rows.

pub use crate::{
    FieldPath, ModelError, PageSize, PaginationState, Record, RecordId,
    SemanticType, SortConfig, SortDirection,
};
