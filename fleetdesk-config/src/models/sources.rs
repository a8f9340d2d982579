use std::collections::HashMap;
use std::path::PathBuf;

use crate::constants::{
    ENV_CONFIG_PATH, ENV_PAGE_SIZE, ENV_PAGE_WINDOW, ENV_RECORDS_DIR,
};

/// Raw values picked up from the environment. Numbers stay strings until
/// the loader applies them so a typo surfaces as an error naming the key.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EnvConfig {
    pub config_path: Option<PathBuf>,
    pub page_size: Option<String>,
    pub page_window: Option<String>,
    pub records_dir: Option<PathBuf>,
}

impl EnvConfig {
    pub fn from_map(vars: &HashMap<String, String>) -> Self {
        let get = |key: &str| {
            vars.get(key)
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
                .map(str::to_string)
        };

        Self {
            config_path: get(ENV_CONFIG_PATH).map(PathBuf::from),
            page_size: get(ENV_PAGE_SIZE),
            page_window: get(ENV_PAGE_WINDOW),
            records_dir: get(ENV_RECORDS_DIR).map(PathBuf::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_are_ignored() {
        let vars = HashMap::from([
            (ENV_PAGE_SIZE.to_string(), " 50 ".to_string()),
            (ENV_PAGE_WINDOW.to_string(), "   ".to_string()),
            ("UNRELATED".to_string(), "x".to_string()),
        ]);

        let env = EnvConfig::from_map(&vars);
        assert_eq!(env.page_size.as_deref(), Some("50"));
        assert_eq!(env.page_window, None);
        assert_eq!(env.records_dir, None);
    }
}
