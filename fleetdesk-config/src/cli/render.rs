//! Plain-text table output.

use fleetdesk_core::query::{TableView, flag_of, text_of};
use fleetdesk_core::{Column, TableSchema};
use fleetdesk_model::{Record, SemanticType};
use serde_json::Value;

const EMPTY_MESSAGE: &str = "No matching records.";

/// Display form of one cell. Booleans read as Yes/No the way the dashboard
/// shows them; absent values render blank.
pub fn cell_text(column: &Column, record: &Record) -> String {
    let value = record.lookup(&column.key);
    match (value, column.semantic_type) {
        (None | Some(Value::Null), _) => String::new(),
        (Some(_), SemanticType::Boolean) => {
            let label = if flag_of(value) { "Yes" } else { "No" };
            label.to_string()
        }
        _ => text_of(value),
    }
}

pub fn render_table(schema: &TableSchema, view: &TableView<Record>) -> String {
    let columns = schema.columns();
    let header: Vec<String> =
        columns.iter().map(|column| column.label.clone()).collect();
    let rows: Vec<Vec<String>> = view
        .rows
        .iter()
        .map(|record| {
            columns
                .iter()
                .map(|column| cell_text(column, record))
                .collect()
        })
        .collect();

    let mut widths: Vec<usize> =
        header.iter().map(|label| label.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &header, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_line(&mut out, &rule, &widths);

    if rows.is_empty() {
        out.push_str(EMPTY_MESSAGE);
        out.push('\n');
    }
    for row in &rows {
        push_line(&mut out, row, &widths);
    }

    out.push('\n');
    out.push_str(&footer(view));
    out.push('\n');
    out
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}

/// `Showing 41-47 of 47 | page 3/3 | [1] [2] <3>`
pub fn footer<T>(view: &TableView<T>) -> String {
    let pages = view
        .page_window
        .iter()
        .map(|page| {
            if *page == view.current_page {
                format!("<{page}>")
            } else {
                format!("[{page}]")
            }
        })
        .collect::<Vec<_>>()
        .join(" ");

    let mut footer = format!(
        "Showing {} | page {}/{}",
        view.range_label, view.current_page, view.total_pages
    );
    if view.filtered_items != view.total_items {
        footer.push_str(&format!(" | filtered from {}", view.total_items));
    }
    if !pages.is_empty() {
        footer.push_str(" | ");
        footer.push_str(&pages);
    }
    footer
}
