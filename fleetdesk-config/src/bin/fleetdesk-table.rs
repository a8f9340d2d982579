use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use fleetdesk_config::{
    ConfigLoader,
    cli::{self, OutputFormat, ViewOptions},
};
use fleetdesk_core::Screen;
use fleetdesk_model::SortDirection;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "fleetdesk-table",
    about = "Search, sort and page Fleetdesk record exports"
)]
struct Cli {
    /// TOML configuration file (defaults to ./fleetdesk.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[arg(long, global = true, default_value = ".env")]
    env_file: PathBuf,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render one page of a list screen
    View {
        /// Screen slug, e.g. `shifts` or `diesel`
        screen: Screen,
        /// JSON export to read instead of <records_dir>/<screen>.json
        #[arg(long)]
        records: Option<PathBuf>,
        #[arg(long, short = 's')]
        search: Option<String>,
        /// Column key to sort by
        #[arg(long)]
        sort: Option<String>,
        #[arg(long, value_enum)]
        direction: Option<DirectionArg>,
        #[arg(long, short = 'p', default_value_t = 1)]
        page: usize,
        #[arg(long)]
        page_size: Option<usize>,
        #[arg(long, value_enum, default_value = "text")]
        format: FormatArg,
    },
    /// List screens with their columns and searchable fields
    Screens,
    /// Validate configuration and every screen's export
    Check,
}

#[derive(Clone, Copy, ValueEnum)]
enum DirectionArg {
    Asc,
    Desc,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

impl From<DirectionArg> for SortDirection {
    fn from(val: DirectionArg) -> Self {
        match val {
            DirectionArg::Asc => SortDirection::Asc,
            DirectionArg::Desc => SortDirection::Desc,
        }
    }
}

impl From<FormatArg> for OutputFormat {
    fn from(val: FormatArg) -> Self {
        match val {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let mut stdout = std::io::stdout().lock();

    if let Command::Screens = cli.command {
        return cli::run_screens(&mut stdout);
    }

    let mut loader = ConfigLoader::new().with_env_file(cli.env_file);
    if let Some(path) = cli.config {
        loader = loader.with_config_path(path);
    }
    let load = loader.load()?;

    match cli.command {
        Command::View {
            screen,
            records,
            search,
            sort,
            direction,
            page,
            page_size,
            format,
        } => {
            let opts = ViewOptions {
                records,
                search,
                sort,
                direction: direction.map(Into::into),
                page,
                page_size,
                format: format.into(),
                ..ViewOptions::new(screen)
            };
            cli::run_view(&load.config, &opts, &mut stdout).await?;
        }
        Command::Check => cli::run_check(&load, &mut stdout).await?,
        Command::Screens => {}
    }

    Ok(())
}
