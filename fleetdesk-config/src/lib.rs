//! Shared configuration library for Fleetdesk.
//!
//! This crate centralizes table defaults (page size, page-size selector
//! options, page-number window), per-screen overrides, and where record
//! exports live. Values come from an optional TOML file and are then
//! overridden by the environment, optionally seeded from a `.env` file. The
//! `fleetdesk-table` binary builds on the same loader so there is a single
//! source of truth for defaults and validation rules.
#![allow(missing_docs)]

pub mod cli;
pub mod constants;
pub mod loader;
pub mod models;
pub mod validation;

pub use loader::{ConfigLoad, ConfigLoader, ConfigSource, error::ConfigLoadError};
pub use models::{Config, ScreenOverride, SourceConfig, TableDefaults};
pub use validation::{ConfigGuardRailError, ConfigWarning, ConfigWarnings};
