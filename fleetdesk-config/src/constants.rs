/// Overrides `[table].page_size`.
pub const ENV_PAGE_SIZE: &str = "FLEETDESK_PAGE_SIZE";
/// Overrides `[table].page_window`.
pub const ENV_PAGE_WINDOW: &str = "FLEETDESK_PAGE_WINDOW";
/// Overrides `[source].records_dir`.
pub const ENV_RECORDS_DIR: &str = "FLEETDESK_RECORDS_DIR";
/// Path to the TOML config file when `--config` is not given.
pub const ENV_CONFIG_PATH: &str = "FLEETDESK_CONFIG_PATH";

pub const MANAGED_KEYS: &[&str] = &[
    ENV_PAGE_SIZE,
    ENV_PAGE_WINDOW,
    ENV_RECORDS_DIR,
    ENV_CONFIG_PATH,
];

/// Looked up in order when no explicit config path is provided.
pub const DEFAULT_CONFIG_CANDIDATES: &[&str] =
    &["fleetdesk.toml", "config/fleetdesk.toml"];

pub const DEFAULT_RECORDS_DIR: &str = "./exports";
