use fleetdesk_core::query::DEFAULT_PAGE_WINDOW;
use fleetdesk_model::{PageSize, SortDirection};
use serde::{Deserialize, Serialize};

fn default_page_size_options() -> Vec<usize> {
    PageSize::OPTIONS.to_vec()
}

/// Table settings shared by every screen.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TableDefaults {
    /// Rows per page on first render. Must be one of `page_size_options`.
    pub page_size: usize,
    /// Choices offered by the page-size selector.
    #[serde(default = "default_page_size_options")]
    pub page_size_options: Vec<usize>,
    /// Number of page buttons shown in the pager.
    pub page_window: usize,
}

impl Default for TableDefaults {
    fn default() -> Self {
        Self {
            page_size: PageSize::DEFAULT.get(),
            page_size_options: default_page_size_options(),
            page_window: DEFAULT_PAGE_WINDOW,
        }
    }
}

impl TableDefaults {
    pub fn offers(&self, page_size: usize) -> bool {
        self.page_size_options.contains(&page_size)
    }
}

/// Per-screen adjustments under `[screens.<slug>]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ScreenOverride {
    pub page_size: Option<usize>,
    /// Column to sort by on first render.
    pub sort: Option<String>,
    pub direction: SortDirection,
}
