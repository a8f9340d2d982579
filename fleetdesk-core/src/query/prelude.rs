//! Intentional query crate surface consumed by list screens.

pub use super::builder::TableQueryBuilder;
pub use super::filtering::{FieldAccessor, filter};
pub use super::pagination::{PageSlice, page_window, paginate};
pub use super::pipeline::{TableState, TableView, run};
pub use super::sorting::{SemanticTypes, TableRow, sort};
pub use super::types::{DEFAULT_PAGE_WINDOW, TableRequest};
pub use fleetdesk_model::{PageSize, PaginationState, SortConfig, SortDirection};
