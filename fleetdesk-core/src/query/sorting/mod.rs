//! Type-aware, stable column sorting
//!
//! This module provides:
//! - The row and column-type traits the engine is generic over
//! - Sort key extraction with the lossy coercions for each semantic type
//! - [`sort`], which orders a slice by one column without touching the input

pub mod keys;
pub mod traits;


pub use keys::*;
pub use traits::*;

use fleetdesk_model::{FieldPath, SortConfig};
use tracing::trace;

/// Return a new vector ordered by `config`.
///
/// Keys are extracted once per row. The sort is stable in both directions:
/// descending reverses the comparator, so rows with equal keys keep their
/// input order either way. An unset key returns the rows unchanged.
pub fn sort<T, S>(records: &[T], config: &SortConfig, types: &S) -> Vec<T>
where
    T: TableRow + Clone,
    S: SemanticTypes + ?Sized,
{
    sorted_indices(records, config, types)
        .into_iter()
        .map(|idx| records[idx].clone())
        .collect()
}

/// The permutation [`sort`] applies, as indices into `records`.
pub fn sorted_indices<T, S>(records: &[T], config: &SortConfig, types: &S) -> Vec<usize>
where
    T: TableRow,
    S: SemanticTypes + ?Sized,
{
    let Some(key) = config.key.as_deref() else {
        return (0..records.len()).collect();
    };

    let semantic_type = types.semantic_type(key);
    let path = FieldPath::new(key);

    let mut keyed: Vec<(usize, ColumnKey)> = records
        .iter()
        .enumerate()
        .map(|(i, row)| (i, ColumnKey::extract(row.field(&path), semantic_type)))
        .collect();

    let descending = config.direction.is_descending();
    keyed.sort_by(|a, b| {
        if descending {
            b.1.cmp(&a.1)
        } else {
            a.1.cmp(&b.1)
        }
    });

    trace!(
        key,
        %semantic_type,
        direction = %config.direction,
        rows = records.len(),
        "sorted rows"
    );

    keyed.into_iter().map(|(i, _)| i).collect()
}
