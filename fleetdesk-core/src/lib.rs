//! # Fleetdesk Core
//!
//! Client-side table engine for the Fleetdesk administrative dashboard.
//!
//! Every list screen of the dashboard (projects, employees, equipment,
//! revenue, partners, shifts and the various transaction ledgers) renders an
//! already-fetched array of records through the same three pure stages:
//!
//! 1. [`query::filtering`]: case-insensitive substring search over the
//!    screen's searchable fields
//! 2. [`query::sorting`]: stable, type-aware ordering by one column
//! 3. [`query::pagination`]: page slicing and the page-number window
//!
//! [`query::pipeline`] fixes the order of those stages and provides
//! [`query::pipeline::TableState`], the small stateful wrapper that owns the
//! page-reset rules. [`screens`] declares the column types for every screen and
//! [`source`] is the seam to the REST backend that supplies the records.
//!
//! ## Examples
//!
//! ```
//! use fleetdesk_core::{
//!     query::pipeline::TableState,
//!     screens::Screen,
//! };
//! use fleetdesk_model::Record;
//! use serde_json::json;
//!
//! let records: Vec<Record> = [
//!     json!({ "id": 1, "shift_name": "Night", "start_time": "22:00" }),
//!     json!({ "id": 2, "shift_name": "Morning", "start_time": "06:00:00" }),
//! ]
//! .into_iter()
//! .map(|value| Record::from_value(value).unwrap())
//! .collect();
//!
//! let mut table = TableState::new(Screen::Shifts.schema());
//! table.set_records(records);
//! table.toggle_sort("start_time");
//!
//! let view = table.view();
//! assert_eq!(view.rows[0].get("shift_name"), Some(&json!("Morning")));
//! assert_eq!(view.page_window, vec![1]);
//! ```
#![allow(missing_docs)]

/// Records-backed list controller wiring a source to a table state
pub mod controller;

/// Error types and error handling utilities
pub mod error;

/// Filtering, sorting, pagination and their composition
pub mod query;

/// Column schemas for table screens
pub mod schema;

/// Catalog of the dashboard's list screens
pub mod screens;

/// Collaborator seam to the backend that supplies records
pub mod source;

pub use controller::ListController;
pub use error::{Result, TableError};
pub use schema::{Column, TableSchema, TableSchemaBuilder};
pub use screens::Screen;
pub use source::{InMemorySource, JsonFileSource, RecordSource, SourceError};
