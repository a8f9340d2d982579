use std::fmt;

use serde::{Deserialize, Serialize};

/// Sort direction for a table column.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn is_descending(self) -> bool {
        matches!(self, SortDirection::Desc)
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Asc => f.write_str("asc"),
            SortDirection::Desc => f.write_str("desc"),
        }
    }
}

/// Active sort column and direction. `key: None` means input order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortConfig {
    pub key: Option<String>,
    pub direction: SortDirection,
}

impl SortConfig {
    pub fn by(key: impl Into<String>, direction: SortDirection) -> Self {
        SortConfig {
            key: Some(key.into()),
            direction,
        }
    }

    pub fn ascending(key: impl Into<String>) -> Self {
        Self::by(key, SortDirection::Asc)
    }

    pub fn descending(key: impl Into<String>) -> Self {
        Self::by(key, SortDirection::Desc)
    }

    pub fn is_active(&self) -> bool {
        self.key.is_some()
    }

    /// Column header click: the active key flips direction, a new key starts
    /// ascending.
    pub fn toggle(&mut self, key: &str) {
        if self.key.as_deref() == Some(key) {
            self.direction = self.direction.flipped();
        } else {
            self.key = Some(key.to_string());
            self.direction = SortDirection::Asc;
        }
    }

    pub fn toggled(mut self, key: &str) -> Self {
        self.toggle(key);
        self
    }
}
