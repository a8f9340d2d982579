pub mod sources;
pub mod table;

pub use sources::EnvConfig;
pub use table::{ScreenOverride, TableDefaults};

use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;

use fleetdesk_core::{Screen, query::TableRequest};
use fleetdesk_model::{PageSize, PaginationState, SortConfig};
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_RECORDS_DIR;

/// Resolved configuration after file, environment and validation.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub table: TableDefaults,
    pub screens: HashMap<Screen, ScreenOverride>,
    pub source: SourceConfig,
}

impl Config {
    /// Initial table request for a screen: defaults with the screen's
    /// override applied.
    pub fn request_for(&self, screen: Screen) -> TableRequest {
        let overrides = self.screens.get(&screen);

        let page_size = overrides
            .and_then(|o| o.page_size)
            .unwrap_or(self.table.page_size);
        let sort = overrides
            .and_then(|o| o.sort.as_ref().map(|key| (key, o.direction)))
            .map(|(key, direction)| SortConfig::by(key.clone(), direction))
            .unwrap_or_default();

        TableRequest {
            search: String::new(),
            sort,
            pagination: PaginationState::new(
                PageSize::new(page_size).unwrap_or_default(),
            ),
            page_window: self.table.page_window,
        }
    }

    /// Where the JSON export for a screen is expected.
    pub fn records_path(&self, screen: Screen) -> PathBuf {
        self.source.records_dir.join(format!("{}.json", screen.slug()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Directory holding one `<screen>.json` export per list screen.
    pub records_dir: PathBuf,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            records_dir: PathBuf::from(DEFAULT_RECORDS_DIR),
        }
    }
}

/// On-disk shape of `fleetdesk.toml`. Screen names stay strings here so an
/// unknown screen is a warning rather than a parse failure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ConfigFile {
    pub table: TableDefaults,
    pub source: SourceConfig,
    pub screens: BTreeMap<String, ScreenOverride>,
}
