pub mod builder;
pub mod filtering;
pub mod pagination;
pub mod pipeline;
pub mod prelude;
pub mod sorting;
pub mod types;

pub use builder::TableQueryBuilder;
pub use filtering::{FieldAccessor, FnAccessor, filter};
pub use pagination::{PageSlice, page_window, paginate};
pub use pipeline::{TableState, TableView};
pub use sorting::*;
pub use types::*;
