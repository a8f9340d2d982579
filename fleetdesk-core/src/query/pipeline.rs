//! Filter -> sort -> paginate composition and the stateful table wrapper.
//!
//! The stage order is fixed. Filtering first means the page count reflects the
//! search; sorting before slicing means a page shows the globally ordered
//! rows rather than an ordered page.

use fleetdesk_model::{PageSize, SortConfig};
use serde::Serialize;
use tracing::{debug, trace};

use super::filtering::filter;
use super::pagination::{PageSlice, paginate};
use super::sorting::{TableRow, sort};
use super::types::TableRequest;
use crate::schema::TableSchema;

/// What a list screen renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableView<T> {
    pub rows: Vec<T>,
    /// Rows before filtering.
    pub total_items: usize,
    /// Rows after filtering.
    pub filtered_items: usize,
    pub total_pages: usize,
    pub current_page: usize,
    pub page_window: Vec<usize>,
    pub range_label: String,
}

impl<T> TableView<T> {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Run one render of the pipeline. Pure: same inputs, same page.
pub fn run<T>(records: &[T], request: &TableRequest, schema: &TableSchema) -> TableView<T>
where
    T: TableRow + Clone,
{
    let rows: Vec<&T> = records.iter().collect();
    let filtered = filter(&rows, &request.search, schema.search_fields());
    let sorted = sort(&filtered, &request.sort, schema);
    let page: PageSlice<&T> = paginate(
        &sorted,
        request.pagination.page_size,
        request.pagination.current_page,
    );

    trace!(
        total = records.len(),
        filtered = sorted.len(),
        page = page.current_page,
        rows = page.items.len(),
        "rendered table page"
    );

    TableView {
        page_window: page.page_window(request.page_window),
        range_label: page.range_label(),
        total_items: records.len(),
        filtered_items: sorted.len(),
        total_pages: page.total_pages,
        current_page: page.current_page,
        rows: page.items.into_iter().cloned().collect(),
    }
}

/// Owns the rows and interaction state of one list screen.
///
/// Every transition that can shrink the visible set (new rows, new search
/// text, new page size) sends the cursor back to page 1, so a narrowing
/// search never leaves the table parked on a page that no longer exists.
/// Sorting keeps the page because it does not change the row count.
#[derive(Debug, Clone)]
pub struct TableState<T> {
    records: Vec<T>,
    schema: TableSchema,
    request: TableRequest,
}

impl<T> TableState<T>
where
    T: TableRow + Clone,
{
    pub fn new(schema: TableSchema) -> Self {
        Self::with_request(schema, TableRequest::default())
    }

    pub fn with_request(schema: TableSchema, request: TableRequest) -> Self {
        Self {
            records: Vec::new(),
            schema,
            request,
        }
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn schema(&self) -> &TableSchema {
        &self.schema
    }

    pub fn request(&self) -> &TableRequest {
        &self.request
    }

    pub fn search(&self) -> &str {
        &self.request.search
    }

    pub fn sort_config(&self) -> &SortConfig {
        &self.request.sort
    }

    pub fn current_page(&self) -> usize {
        self.request.pagination.current_page
    }

    pub fn page_size(&self) -> PageSize {
        self.request.pagination.page_size
    }

    /// Replace the rows, e.g. after a fetch completes.
    pub fn set_records(&mut self, records: Vec<T>) {
        debug!(rows = records.len(), "table rows replaced; page reset");
        self.records = records;
        self.request.pagination.reset();
    }

    /// Update the search text. Changing it resets to page 1.
    pub fn set_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        if query == self.request.search {
            return;
        }
        debug!(query = %query, "search changed; page reset");
        self.request.search = query;
        self.request.pagination.reset();
    }

    pub fn clear_query(&mut self) {
        self.set_query(String::new());
    }

    /// Column header click.
    pub fn toggle_sort(&mut self, key: &str) {
        self.request.sort.toggle(key);
        debug!(
            key,
            direction = %self.request.sort.direction,
            "sort toggled"
        );
    }

    pub fn set_sort(&mut self, sort: SortConfig) {
        self.request.sort = sort;
    }

    pub fn set_page_size(&mut self, page_size: PageSize) {
        if page_size == self.request.pagination.page_size {
            return;
        }
        debug!(%page_size, "page size changed; page reset");
        self.request.pagination.page_size = page_size;
        self.request.pagination.reset();
    }

    pub fn set_page_window(&mut self, width: usize) {
        self.request.page_window = width;
    }

    /// Rows left after the current search.
    pub fn filtered_len(&self) -> usize {
        let rows: Vec<&T> = self.records.iter().collect();
        filter(&rows, &self.request.search, self.schema.search_fields()).len()
    }

    pub fn total_pages(&self) -> usize {
        super::pagination::total_pages(self.filtered_len(), self.page_size())
    }

    /// Jump to `page`, clamped into `1..=total_pages`. Returns the page landed on.
    pub fn go_to_page(&mut self, page: usize) -> usize {
        let target = page.clamp(1, self.total_pages());
        if target != page {
            trace!(requested = page, target, "page request clamped");
        }
        self.request.pagination.current_page = target;
        target
    }

    pub fn next_page(&mut self) -> usize {
        self.go_to_page(self.current_page().saturating_add(1))
    }

    pub fn previous_page(&mut self) -> usize {
        self.go_to_page(self.current_page().saturating_sub(1))
    }

    pub fn view(&self) -> TableView<T> {
        run(&self.records, &self.request, &self.schema)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::Screen;
    use fleetdesk_model::{Record, SemanticType, SortDirection};
    use serde_json::{Value, json};

    fn schema() -> TableSchema {
        TableSchema::builder()
            .column("name", "Name", SemanticType::Text)
            .column("hours", "Hours", SemanticType::Number)
            .search("name")
            .build()
    }

    fn workers(n: usize) -> Vec<Record> {
        (1..=n)
            .map(|i| {
                let name = if i % 5 == 0 {
                    format!("Foreman {i}")
                } else {
                    format!("Operator {i}")
                };
                Record::from_value(json!({ "id": i, "name": name, "hours": (n - i) as u64 }))
                    .unwrap()
            })
            .collect()
    }

    fn ids(view: &TableView<Record>) -> Vec<Value> {
        view.rows
            .iter()
            .map(|row| row.get("id").cloned().unwrap_or(Value::Null))
            .collect()
    }

    #[test]
    fn filter_runs_before_pagination() {
        let request = TableRequest {
            search: "foreman".into(),
            pagination: fleetdesk_model::PaginationState::new(PageSize::new(10).unwrap()),
            ..TableRequest::default()
        };
        let view = run(&workers(47), &request, &schema());
        assert_eq!(view.filtered_items, 9);
        assert_eq!(view.total_items, 47);
        assert_eq!(view.total_pages, 1);
        assert_eq!(view.rows.len(), 9);
    }

    #[test]
    fn sort_runs_before_pagination() {
        let request = TableRequest {
            sort: SortConfig::ascending("hours"),
            ..TableRequest::default()
        };
        let view = run(&workers(25), &request, &schema());
        // Hours run 24..0, so ascending puts the last ids first.
        assert_eq!(view.rows.first().and_then(|r| r.get("id")), Some(&json!(25)));
        assert_eq!(view.rows.len(), 10);
        assert_eq!(view.page_window, vec![1, 2, 3]);
        assert_eq!(view.range_label, "1-10 of 25");
    }

    #[test]
    fn narrowing_search_resets_stale_page() {
        let mut table = TableState::new(schema());
        table.set_records(workers(47));
        assert_eq!(table.go_to_page(5), 5);
        assert_eq!(table.view().rows.len(), 7);

        table.set_query("foreman");
        assert_eq!(table.current_page(), 1);
        let view = table.view();
        assert_eq!(view.rows.len(), 9);
        assert!(!view.is_empty());
    }

    #[test]
    fn unchanged_query_keeps_page() {
        let mut table = TableState::new(schema());
        table.set_records(workers(47));
        table.go_to_page(3);
        table.set_query("");
        assert_eq!(table.current_page(), 3);
    }

    #[test]
    fn new_records_and_page_size_reset_page() {
        let mut table = TableState::new(schema());
        table.set_records(workers(47));
        table.go_to_page(4);
        table.set_records(workers(12));
        assert_eq!(table.current_page(), 1);

        table.go_to_page(2);
        table.set_page_size(PageSize::new(20).unwrap());
        assert_eq!(table.current_page(), 1);
        assert_eq!(table.total_pages(), 1);
    }

    #[test]
    fn sorting_keeps_page_and_follows_header_lifecycle() {
        let mut table = TableState::new(schema());
        table.set_records(workers(30));
        table.go_to_page(2);

        table.toggle_sort("hours");
        assert_eq!(table.current_page(), 2);
        assert_eq!(table.sort_config(), &SortConfig::ascending("hours"));

        table.toggle_sort("hours");
        assert_eq!(table.sort_config().direction, SortDirection::Desc);
        assert_eq!(
            ids(&table.view()),
            (11..=20).map(|i| json!(i)).collect::<Vec<_>>()
        );

        table.toggle_sort("name");
        assert_eq!(table.sort_config(), &SortConfig::ascending("name"));
    }

    #[test]
    fn navigation_is_clamped() {
        let mut table = TableState::new(schema());
        table.set_records(workers(25));
        assert_eq!(table.previous_page(), 1);
        assert_eq!(table.go_to_page(99), 3);
        assert_eq!(table.next_page(), 3);
        assert_eq!(table.go_to_page(0), 1);
    }

    #[test]
    fn view_is_deterministic() {
        let mut table = TableState::new(Screen::Employees.schema());
        table.set_records(workers(40));
        table.toggle_sort("name");
        assert_eq!(table.view(), table.view());
    }
}
