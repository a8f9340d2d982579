use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::ModelError;

/// The intended meaning of a column's values, used to pick a comparator
/// independently of how the backend happens to encode them.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SemanticType {
    #[default]
    Text,
    Number,
    /// `true`, `"Yes"` and `"true"` are truthy; everything else is false.
    Boolean,
    /// `HH:MM:SS` or `HH:MM`.
    TimeOfDay,
    /// ISO-8601 date or timestamp.
    Date,
}

impl SemanticType {
    pub fn all() -> &'static [SemanticType] {
        use SemanticType::*;
        &[Text, Number, Boolean, TimeOfDay, Date]
    }

    pub fn label(&self) -> &'static str {
        match self {
            SemanticType::Text => "text",
            SemanticType::Number => "number",
            SemanticType::Boolean => "boolean",
            SemanticType::TimeOfDay => "time_of_day",
            SemanticType::Date => "date",
        }
    }
}

impl fmt::Display for SemanticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SemanticType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "string" => Ok(SemanticType::Text),
            "number" | "numeric" => Ok(SemanticType::Number),
            "boolean" | "bool" => Ok(SemanticType::Boolean),
            "time" | "time_of_day" => Ok(SemanticType::TimeOfDay),
            "date" => Ok(SemanticType::Date),
            other => Err(ModelError::UnknownSemanticType(other.to_string())),
        }
    }
}
