//! Guard rails and soft warnings for loaded configuration.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::path::PathBuf;

use fleetdesk_core::Screen;
use thiserror::Error;
use tracing::warn;

use crate::models::{ScreenOverride, TableDefaults};

/// Hard failures: the dashboard cannot render tables with these values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigGuardRailError {
    #[error("page size options must be non-empty and non-zero, got {0:?}")]
    InvalidPageSizeOptions(Vec<usize>),

    #[error("page size {page_size} is not one of the selector options {options:?}")]
    PageSizeNotOffered {
        page_size: usize,
        options: Vec<usize>,
    },

    #[error("page window must be at least 1")]
    ZeroPageWindow,
}

/// Soft problems that were corrected or ignored while loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    UnknownScreen(String),
    OverridePageSizeIgnored { screen: Screen, page_size: usize },
    UnknownSortColumn { screen: Screen, column: String },
    MissingRecordsDir(PathBuf),
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigWarning::UnknownScreen(name) => {
                write!(f, "ignoring overrides for unknown screen `{name}`")
            }
            ConfigWarning::OverridePageSizeIgnored { screen, page_size } => write!(
                f,
                "{} page size {page_size} is not a selector option; using the default",
                screen.slug()
            ),
            ConfigWarning::UnknownSortColumn { screen, column } => write!(
                f,
                "{} default sort column `{column}` is not a declared column; \
                 it will sort as text",
                screen.slug()
            ),
            ConfigWarning::MissingRecordsDir(path) => write!(
                f,
                "records directory {} does not exist yet",
                path.display()
            ),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigWarnings(Vec<ConfigWarning>);

impl ConfigWarnings {
    pub fn push(&mut self, warning: ConfigWarning) {
        warn!(%warning, "configuration warning");
        self.0.push(warning);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConfigWarning> {
        self.0.iter()
    }
}

pub fn validate_table_defaults(
    table: &TableDefaults,
) -> Result<(), ConfigGuardRailError> {
    if table.page_size_options.is_empty() || table.page_size_options.contains(&0) {
        return Err(ConfigGuardRailError::InvalidPageSizeOptions(
            table.page_size_options.clone(),
        ));
    }
    if !table.offers(table.page_size) {
        return Err(ConfigGuardRailError::PageSizeNotOffered {
            page_size: table.page_size,
            options: table.page_size_options.clone(),
        });
    }
    if table.page_window == 0 {
        return Err(ConfigGuardRailError::ZeroPageWindow);
    }
    Ok(())
}

/// Key raw `[screens.*]` tables by [`Screen`], dropping what cannot apply.
pub fn resolve_screen_overrides(
    raw: BTreeMap<String, ScreenOverride>,
    table: &TableDefaults,
    warnings: &mut ConfigWarnings,
) -> HashMap<Screen, ScreenOverride> {
    let mut resolved = HashMap::new();

    for (name, mut overrides) in raw {
        let Ok(screen) = name.parse::<Screen>() else {
            warnings.push(ConfigWarning::UnknownScreen(name));
            continue;
        };

        if let Some(page_size) = overrides.page_size
            && !table.offers(page_size)
        {
            warnings.push(ConfigWarning::OverridePageSizeIgnored { screen, page_size });
            overrides.page_size = None;
        }

        if let Some(column) = overrides.sort.as_deref()
            && screen.schema().column(column).is_none()
        {
            warnings.push(ConfigWarning::UnknownSortColumn {
                screen,
                column: column.to_string(),
            });
        }

        resolved.insert(screen, overrides);
    }

    resolved
}
