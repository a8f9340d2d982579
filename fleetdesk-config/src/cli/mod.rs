//! Command implementations behind the `fleetdesk-table` binary.

pub mod options;
pub mod render;

pub use options::{OutputFormat, ViewOptions};

use std::io::Write;

use anyhow::{Context, Result, bail};
use fleetdesk_core::query::pipeline::TableState;
use fleetdesk_core::{JsonFileSource, ListController, Screen, SourceError, TableError};
use fleetdesk_model::{PageSize, SortConfig};
use tracing::{info, instrument};

use crate::{ConfigLoad, models::Config};

/// Load a screen's export, apply the requested search, sort and page, and
/// print the resulting page.
#[instrument(skip_all, fields(screen = %opts.screen))]
pub async fn run_view<W: Write>(
    config: &Config,
    opts: &ViewOptions,
    out: &mut W,
) -> Result<()> {
    let path = opts
        .records
        .clone()
        .unwrap_or_else(|| config.records_path(opts.screen));
    let schema = opts.screen.schema();
    let state =
        TableState::with_request(schema.clone(), config.request_for(opts.screen));
    let mut controller =
        ListController::with_state(JsonFileSource::new(&path), state);

    let loaded = controller.refresh().await.with_context(|| {
        format!("failed to load {} records from {}", opts.screen, path.display())
    })?;
    info!(rows = loaded, path = %path.display(), "records loaded");

    let table = controller.state_mut();
    if let Some(page_size) = opts.page_size {
        if !config.table.offers(page_size) {
            bail!(
                "page size {page_size} is not one of {:?}",
                config.table.page_size_options
            );
        }
        table.set_page_size(PageSize::new(page_size)?);
    }
    if let Some(search) = &opts.search {
        table.set_query(search.clone());
    }
    if let Some(key) = &opts.sort {
        let direction = opts.direction.unwrap_or_default();
        table.set_sort(SortConfig::by(key.clone(), direction));
    } else if let Some(direction) = opts.direction {
        let mut sort = table.sort_config().clone();
        sort.direction = direction;
        table.set_sort(sort);
    }
    table.go_to_page(opts.page);

    let view = controller.view();
    match opts.format {
        OutputFormat::Text => {
            write!(out, "{}", render::render_table(&schema, &view))?
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &view)?;
            writeln!(out)?;
        }
    }

    Ok(())
}

/// List every screen with its columns and searchable fields.
pub fn run_screens<W: Write>(out: &mut W) -> Result<()> {
    for screen in Screen::all() {
        let schema = screen.schema();
        writeln!(out, "{} ({})", screen.slug(), screen.label())?;
        for column in schema.columns() {
            writeln!(
                out,
                "  {:<24} {:<12} {}",
                column.key.to_string(),
                column.semantic_type.label(),
                column.label
            )?;
        }
        let search = schema
            .search_fields()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(out, "  search: {search}")?;
    }
    Ok(())
}

/// Report the resolved configuration and try every screen's export.
///
/// A missing export is fine (the screen is simply empty); an unreadable or
/// malformed one fails the check.
pub async fn run_check<W: Write>(load: &ConfigLoad, out: &mut W) -> Result<()> {
    let ConfigLoad {
        config,
        source,
        warnings,
    } = load;

    match source.path() {
        Some(path) => writeln!(out, "config: {}", path.display())?,
        None => writeln!(out, "config: built-in defaults")?,
    }
    writeln!(
        out,
        "table: page size {} of {:?}, window {}",
        config.table.page_size,
        config.table.page_size_options,
        config.table.page_window
    )?;
    writeln!(out, "records: {}", config.source.records_dir.display())?;

    if !warnings.is_empty() {
        writeln!(out, "Warnings:")?;
        for warning in warnings.iter() {
            writeln!(out, "  - {warning}")?;
        }
    }

    let mut failures = Vec::new();
    for screen in Screen::all() {
        let path = config.records_path(*screen);
        let mut controller = ListController::new(
            JsonFileSource::new(&path),
            screen.schema(),
        );
        match controller.refresh().await {
            Ok(rows) => writeln!(out, "[ok] {screen}: {rows} records")?,
            Err(TableError::Source(SourceError::Io(err)))
                if err.kind() == std::io::ErrorKind::NotFound =>
            {
                writeln!(out, "[skip] {screen}: no export at {}", path.display())?
            }
            Err(err) => failures.push(format!("{screen}: {err}")),
        }
    }

    if failures.is_empty() {
        writeln!(out, "All checks passed.")?;
        Ok(())
    } else {
        writeln!(out, "Configuration check encountered errors:")?;
        for failure in &failures {
            writeln!(out, "  - {failure}")?;
        }
        bail!("{} export(s) failed to load", failures.len())
    }
}
