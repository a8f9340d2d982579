//! Resolve [`Config`] from defaults, an optional TOML file and the
//! environment, in that order of precedence (later wins).

pub mod error;

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::constants::{
    DEFAULT_CONFIG_CANDIDATES, ENV_PAGE_SIZE, ENV_PAGE_WINDOW,
};
use crate::models::{Config, ConfigFile, EnvConfig};
use crate::validation::{
    self, ConfigWarning, ConfigWarnings, resolve_screen_overrides,
};

use self::error::ConfigLoadError;

/// Where the file layer of the configuration came from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    #[default]
    Default,
    Explicit(PathBuf),
    EnvPath(PathBuf),
    File(PathBuf),
}

impl ConfigSource {
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigSource::Default => None,
            ConfigSource::Explicit(path)
            | ConfigSource::EnvPath(path)
            | ConfigSource::File(path) => Some(path),
        }
    }
}

#[derive(Debug)]
pub struct ConfigLoad {
    pub config: Config,
    pub source: ConfigSource,
    pub warnings: ConfigWarnings,
}

#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    env_file: Option<PathBuf>,
    env_vars: Option<HashMap<String, String>>,
    search_defaults: bool,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self {
            config_path: None,
            env_file: None,
            env_vars: None,
            search_defaults: true,
        }
    }
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use this file; a missing file is an error rather than a fallback.
    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.config_path = Some(path.into());
        self
    }

    /// Seed the environment from a dotenv file. Variables already set in the
    /// environment take precedence over the file.
    pub fn with_env_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.env_file = Some(path.into());
        self
    }

    /// Read variables from `vars` instead of the process environment.
    pub fn with_env_vars(mut self, vars: HashMap<String, String>) -> Self {
        self.env_vars = Some(vars);
        self
    }

    /// Skip probing `fleetdesk.toml` and `config/fleetdesk.toml`.
    pub fn without_default_candidates(mut self) -> Self {
        self.search_defaults = false;
        self
    }

    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let vars = self.gather_env()?;
        let env = EnvConfig::from_map(&vars);

        let source = self.resolve_source(&env)?;
        let file = match source.path() {
            Some(path) => read_config_file(path)?,
            None => ConfigFile::default(),
        };

        let mut warnings = ConfigWarnings::default();
        let config = compose(file, &env, &mut warnings)?;

        info!(
            source = ?source,
            page_size = config.table.page_size,
            page_window = config.table.page_window,
            records_dir = %config.source.records_dir.display(),
            warnings = warnings.len(),
            "configuration loaded"
        );

        Ok(ConfigLoad {
            config,
            source,
            warnings,
        })
    }

    fn gather_env(&self) -> Result<HashMap<String, String>, ConfigLoadError> {
        let mut vars = HashMap::new();

        if let Some(path) = &self.env_file {
            if path.exists() {
                for entry in dotenvy::from_path_iter(path)? {
                    let (key, value) = entry?;
                    vars.insert(key, value);
                }
                debug!(path = %path.display(), "read env file");
            } else {
                debug!(path = %path.display(), "env file not found; skipping");
            }
        }

        match &self.env_vars {
            Some(explicit) => vars.extend(explicit.clone()),
            None => vars.extend(std::env::vars()),
        }

        Ok(vars)
    }

    fn resolve_source(
        &self,
        env: &EnvConfig,
    ) -> Result<ConfigSource, ConfigLoadError> {
        let chosen = if let Some(explicit) = &self.config_path {
            ConfigSource::Explicit(explicit.clone())
        } else if let Some(from_env) = &env.config_path {
            ConfigSource::EnvPath(from_env.clone())
        } else if self.search_defaults {
            DEFAULT_CONFIG_CANDIDATES
                .iter()
                .map(PathBuf::from)
                .find(|candidate| candidate.exists())
                .map(ConfigSource::File)
                .unwrap_or_default()
        } else {
            ConfigSource::Default
        };

        if let Some(path) = chosen.path()
            && !path.exists()
        {
            return Err(ConfigLoadError::MissingConfig {
                path: path.to_path_buf(),
            });
        }

        Ok(chosen)
    }
}

fn read_config_file(path: &Path) -> Result<ConfigFile, ConfigLoadError> {
    let contents =
        fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    toml::from_str(&contents).map_err(|source| ConfigLoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn compose(
    file: ConfigFile,
    env: &EnvConfig,
    warnings: &mut ConfigWarnings,
) -> Result<Config, ConfigLoadError> {
    let ConfigFile {
        mut table,
        mut source,
        screens,
    } = file;

    if let Some(raw) = &env.page_size {
        table.page_size = parse_positive(ENV_PAGE_SIZE, raw)?;
    }
    if let Some(raw) = &env.page_window {
        table.page_window = parse_positive(ENV_PAGE_WINDOW, raw)?;
    }
    if let Some(dir) = &env.records_dir {
        source.records_dir = dir.clone();
    }

    validation::validate_table_defaults(&table)?;
    let screens = resolve_screen_overrides(screens, &table, warnings);

    if !source.records_dir.is_dir() {
        warnings.push(ConfigWarning::MissingRecordsDir(
            source.records_dir.clone(),
        ));
    }

    Ok(Config {
        table,
        screens,
        source,
    })
}

fn parse_positive(
    key: &'static str,
    raw: &str,
) -> Result<usize, ConfigLoadError> {
    raw.parse::<usize>()
        .ok()
        .filter(|value| *value > 0)
        .ok_or_else(|| ConfigLoadError::InvalidEnv {
            key,
            value: raw.to_string(),
        })
}
