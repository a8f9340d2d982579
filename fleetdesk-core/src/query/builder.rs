use super::types::*;
use fleetdesk_model::{PageSize, SortConfig, SortDirection};

/// Fluent API for building table requests
#[derive(Debug, Clone, Default)]
pub struct TableQueryBuilder {
    request: TableRequest,
}

impl TableQueryBuilder {
    /// Create a new request builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Free-text search over the screen's searchable fields
    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.request.search = text.into();
        self
    }

    /// Sort by a column in the given direction
    pub fn sort_by(mut self, key: impl Into<String>, direction: SortDirection) -> Self {
        self.request.sort = SortConfig::by(key, direction);
        self
    }

    /// Apply a header click to the current sort
    pub fn toggle_sort(mut self, key: &str) -> Self {
        self.request.sort.toggle(key);
        self
    }

    /// Keep the input order
    pub fn unsorted(mut self) -> Self {
        self.request.sort = SortConfig::default();
        self
    }

    pub fn page(mut self, page: usize) -> Self {
        self.request.pagination.current_page = page;
        self
    }

    pub fn page_size(mut self, page_size: PageSize) -> Self {
        self.request.pagination.page_size = page_size;
        self
    }

    /// Width of the page-number window
    pub fn page_window(mut self, width: usize) -> Self {
        self.request.page_window = width;
        self
    }

    pub fn build(self) -> TableRequest {
        self.request
    }
}
