//! Core traits for rows and column typing
//!
//! The table engine is generic over anything that can resolve a field path to
//! a JSON value, and over anything that can name the semantic type of a column.

use std::collections::HashMap;
use std::sync::Arc;

use fleetdesk_model::{FieldPath, Record, SemanticType};
use serde_json::Value;

/// A row the engine can read fields from.
pub trait TableRow {
    /// Resolve a (possibly nested) field. Missing levels yield `None`.
    fn field(&self, path: &FieldPath) -> Option<&Value>;
}

impl TableRow for Record {
    fn field(&self, path: &FieldPath) -> Option<&Value> {
        self.lookup(path)
    }
}

impl TableRow for Value {
    fn field(&self, path: &FieldPath) -> Option<&Value> {
        let mut current = self;
        let mut walked = false;
        for segment in path.segments() {
            current = current.as_object()?.get(segment)?;
            walked = true;
        }
        walked.then_some(current)
    }
}

impl<T: TableRow + ?Sized> TableRow for &T {
    fn field(&self, path: &FieldPath) -> Option<&Value> {
        (**self).field(path)
    }
}

impl<T: TableRow + ?Sized> TableRow for Arc<T> {
    fn field(&self, path: &FieldPath) -> Option<&Value> {
        (**self).field(path)
    }
}

/// Declares the semantic type of each sortable column.
///
/// Columns that are not declared sort as [`SemanticType::Text`].
pub trait SemanticTypes {
    fn semantic_type(&self, key: &str) -> SemanticType;
}

impl SemanticTypes for HashMap<String, SemanticType> {
    fn semantic_type(&self, key: &str) -> SemanticType {
        self.get(key).copied().unwrap_or_default()
    }
}

impl SemanticTypes for [(&str, SemanticType)] {
    fn semantic_type(&self, key: &str) -> SemanticType {
        self.iter()
            .find(|(name, _)| *name == key)
            .map(|(_, ty)| *ty)
            .unwrap_or_default()
    }
}

impl<const N: usize> SemanticTypes for [(&str, SemanticType); N] {
    fn semantic_type(&self, key: &str) -> SemanticType {
        self.as_slice().semantic_type(key)
    }
}

impl<S: SemanticTypes + ?Sized> SemanticTypes for &S {
    fn semantic_type(&self, key: &str) -> SemanticType {
        (**self).semantic_type(key)
    }
}

impl SemanticTypes for SemanticType {
    fn semantic_type(&self, _key: &str) -> SemanticType {
        *self
    }
}

/// Adapter turning a closure into [`SemanticTypes`].
#[derive(Debug, Clone, Copy)]
pub struct FnTypes<F>(pub F);

impl<F> SemanticTypes for FnTypes<F>
where
    F: Fn(&str) -> SemanticType,
{
    fn semantic_type(&self, key: &str) -> SemanticType {
        (self.0)(key)
    }
}
