use std::path::PathBuf;

use fleetdesk_core::Screen;
use fleetdesk_model::SortDirection;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone)]
/// One render of a list screen (`fleetdesk-table view`).
pub struct ViewOptions {
    pub screen: Screen,
    /// Read this export instead of `<records_dir>/<screen>.json`.
    pub records: Option<PathBuf>,
    pub search: Option<String>,
    pub sort: Option<String>,
    pub direction: Option<SortDirection>,
    pub page: usize,
    pub page_size: Option<usize>,
    pub format: OutputFormat,
}

impl ViewOptions {
    pub fn new(screen: Screen) -> Self {
        Self {
            screen,
            records: None,
            search: None,
            sort: None,
            direction: None,
            page: 1,
            page_size: None,
            format: OutputFormat::Text,
        }
    }
}
