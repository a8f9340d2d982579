//! Glue between a [`RecordSource`] and a [`TableState`].
//!
//! Mirrors what every list screen does by hand: fetch, render, and after a
//! delete, fetch again so the table reflects the backend.

use fleetdesk_model::{Record, RecordId};
use tracing::{debug, info};

use crate::query::pipeline::{TableState, TableView};
use crate::schema::TableSchema;
use crate::source::RecordSource;
use crate::Result;

pub struct ListController<S> {
    source: S,
    state: TableState<Record>,
}

impl<S: RecordSource> ListController<S> {
    pub fn new(source: S, schema: TableSchema) -> Self {
        Self::with_state(source, TableState::new(schema))
    }

    pub fn with_state(source: S, state: TableState<Record>) -> Self {
        Self { source, state }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn state(&self) -> &TableState<Record> {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut TableState<Record> {
        &mut self.state
    }

    /// Fetch the full list and replace the table rows. Returns the row count.
    ///
    /// On failure the previous rows stay in place.
    pub async fn refresh(&mut self) -> Result<usize> {
        let records = self.source.fetch_list().await?;
        let count = records.len();
        self.state.set_records(records);
        debug!(rows = count, "list refreshed");
        Ok(count)
    }

    /// Delete one record upstream, then refetch.
    pub async fn delete(&mut self, id: &RecordId) -> Result<usize> {
        self.source.delete_one(id).await?;
        info!(%id, "record deleted");
        self.refresh().await
    }

    pub fn view(&self) -> TableView<Record> {
        self.state.view()
    }
}

impl<S> std::fmt::Debug for ListController<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListController")
            .field("rows", &self.state.records().len())
            .field("request", self.state.request())
            .finish_non_exhaustive()
    }
}
