//! Column declarations for a table screen.
//!
//! A schema names each column's semantic type, so comparators are chosen by
//! declaration instead of by sniffing values that may be null, and lists the
//! fields the search box looks at.

use fleetdesk_model::{FieldPath, SemanticType};
use serde::{Deserialize, Serialize};

use crate::query::sorting::SemanticTypes;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub key: FieldPath,
    pub label: String,
    pub semantic_type: SemanticType,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSchema {
    columns: Vec<Column>,
    search_fields: Vec<FieldPath>,
}

impl TableSchema {
    pub fn builder() -> TableSchemaBuilder {
        TableSchemaBuilder::default()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn search_fields(&self) -> &[FieldPath] {
        &self.search_fields
    }

    pub fn column(&self, key: &str) -> Option<&Column> {
        let path = FieldPath::new(key);
        self.columns.iter().find(|column| column.key == path)
    }
}

impl SemanticTypes for TableSchema {
    fn semantic_type(&self, key: &str) -> SemanticType {
        self.column(key)
            .map(|column| column.semantic_type)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default)]
pub struct TableSchemaBuilder {
    schema: TableSchema,
}

impl TableSchemaBuilder {
    pub fn column(mut self, key: &str, label: &str, semantic_type: SemanticType) -> Self {
        self.schema.columns.push(Column {
            key: FieldPath::new(key),
            label: label.to_string(),
            semantic_type,
        });
        self
    }

    pub fn text(self, key: &str, label: &str) -> Self {
        self.column(key, label, SemanticType::Text)
    }

    pub fn number(self, key: &str, label: &str) -> Self {
        self.column(key, label, SemanticType::Number)
    }

    pub fn boolean(self, key: &str, label: &str) -> Self {
        self.column(key, label, SemanticType::Boolean)
    }

    pub fn time(self, key: &str, label: &str) -> Self {
        self.column(key, label, SemanticType::TimeOfDay)
    }

    pub fn date(self, key: &str, label: &str) -> Self {
        self.column(key, label, SemanticType::Date)
    }

    /// Add a field the search box matches against.
    pub fn search(mut self, path: &str) -> Self {
        self.schema.search_fields.push(FieldPath::new(path));
        self
    }

    pub fn build(self) -> TableSchema {
        self.schema
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undeclared_columns_default_to_text() {
        let schema = TableSchema::builder()
            .number("amount", "Amount")
            .date("expense_date", "Date")
            .search("description")
            .build();

        assert_eq!(schema.semantic_type("amount"), SemanticType::Number);
        assert_eq!(schema.semantic_type("expense_date"), SemanticType::Date);
        assert_eq!(schema.semantic_type("description"), SemanticType::Text);
        assert_eq!(schema.search_fields(), [FieldPath::new("description")]);
    }
}
