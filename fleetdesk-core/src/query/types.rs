use fleetdesk_model::{PageSize, PaginationState, SortConfig};
use serde::{Deserialize, Serialize};

/// Number of page buttons rendered by the navigation controls.
pub const DEFAULT_PAGE_WINDOW: usize = 5;

/// Everything a list screen feeds into one render of its table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRequest {
    pub search: String,
    pub sort: SortConfig,
    pub pagination: PaginationState,
    pub page_window: usize,
}

impl TableRequest {
    pub fn with_page_size(page_size: PageSize) -> Self {
        Self {
            pagination: PaginationState::new(page_size),
            ..Self::default()
        }
    }
}

impl Default for TableRequest {
    fn default() -> Self {
        Self {
            search: String::new(),
            sort: SortConfig::default(),
            pagination: PaginationState::default(),
            page_window: DEFAULT_PAGE_WINDOW,
        }
    }
}
