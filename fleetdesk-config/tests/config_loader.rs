use std::{collections::HashMap, fs};

use fleetdesk_config::{
    ConfigGuardRailError, ConfigLoadError, ConfigLoader, ConfigSource,
    ConfigWarning,
};
use fleetdesk_core::Screen;
use fleetdesk_model::{PageSize, SortDirection};
use tempfile::tempdir;

fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn isolated() -> ConfigLoader {
    ConfigLoader::new()
        .without_default_candidates()
        .with_env_vars(HashMap::new())
}

#[test]
fn defaults_without_file_or_env() {
    let load = isolated().load().unwrap();

    assert_eq!(load.source, ConfigSource::Default);
    assert_eq!(load.config.table.page_size, 10);
    assert_eq!(load.config.table.page_size_options, PageSize::OPTIONS.to_vec());
    assert_eq!(load.config.table.page_window, 5);
    assert!(load.config.screens.is_empty());
}

#[test]
fn file_values_then_env_overrides() {
    let dir = tempdir().unwrap();
    let records = dir.path().join("exports");
    fs::create_dir_all(&records).unwrap();
    let path = dir.path().join("fleetdesk.toml");
    fs::write(
        &path,
        format!(
            r#"
[table]
page_size = 20
page_window = 3

[source]
records_dir = "{}"

[screens.shifts]
page_size = 50
sort = "start_time"
direction = "desc"
"#,
            records.display()
        ),
    )
    .unwrap();

    let load = isolated()
        .with_config_path(&path)
        .with_env_vars(vars(&[("FLEETDESK_PAGE_WINDOW", "7")]))
        .load()
        .unwrap();

    assert_eq!(load.source, ConfigSource::Explicit(path));
    assert_eq!(load.config.table.page_size, 20);
    assert_eq!(load.config.table.page_window, 7);
    assert!(load.warnings.is_empty(), "{:?}", load.warnings);

    let request = load.config.request_for(Screen::Shifts);
    assert_eq!(request.pagination.page_size.get(), 50);
    assert_eq!(request.pagination.current_page, 1);
    assert_eq!(request.sort.key.as_deref(), Some("start_time"));
    assert_eq!(request.sort.direction, SortDirection::Desc);
    assert_eq!(request.page_window, 7);

    let projects = load.config.request_for(Screen::Projects);
    assert_eq!(projects.pagination.page_size.get(), 20);
    assert!(!projects.sort.is_active());

    assert_eq!(
        load.config.records_path(Screen::Diesel),
        records.join("diesel.json")
    );
}

#[test]
fn env_file_seeds_values_and_process_env_wins() {
    let dir = tempdir().unwrap();
    let env_file = dir.path().join(".env");
    fs::write(
        &env_file,
        "FLEETDESK_PAGE_SIZE=50\nFLEETDESK_RECORDS_DIR=/srv/exports\n",
    )
    .unwrap();

    let load = isolated()
        .with_env_file(&env_file)
        .with_env_vars(vars(&[("FLEETDESK_PAGE_SIZE", "100")]))
        .load()
        .unwrap();

    assert_eq!(load.config.table.page_size, 100);
    assert_eq!(
        load.config.source.records_dir,
        std::path::PathBuf::from("/srv/exports")
    );
}

#[test]
fn config_path_from_env() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("custom.toml");
    fs::write(&path, "[table]\npage_size = 200\n").unwrap();

    let load = isolated()
        .with_env_vars(vars(&[(
            "FLEETDESK_CONFIG_PATH",
            path.to_str().unwrap(),
        )]))
        .load()
        .unwrap();

    assert_eq!(load.source, ConfigSource::EnvPath(path));
    assert_eq!(load.config.table.page_size, 200);
}

#[test]
fn missing_explicit_file_is_an_error() {
    let dir = tempdir().unwrap();
    let err = isolated()
        .with_config_path(dir.path().join("nope.toml"))
        .load()
        .unwrap_err();

    assert!(matches!(err, ConfigLoadError::MissingConfig { .. }));
}

#[test]
fn invalid_toml_reports_parse_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[table\npage_size = ").unwrap();

    let err = isolated().with_config_path(&path).load().unwrap_err();
    assert!(matches!(err, ConfigLoadError::Parse { .. }));
}

#[test]
fn non_numeric_env_value_is_rejected() {
    let err = isolated()
        .with_env_vars(vars(&[("FLEETDESK_PAGE_SIZE", "lots")]))
        .load()
        .unwrap_err();

    match err {
        ConfigLoadError::InvalidEnv { key, value } => {
            assert_eq!(key, "FLEETDESK_PAGE_SIZE");
            assert_eq!(value, "lots");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn page_size_outside_selector_fails_guard_rail() {
    let err = isolated()
        .with_env_vars(vars(&[("FLEETDESK_PAGE_SIZE", "25")]))
        .load()
        .unwrap_err();

    assert!(matches!(
        err,
        ConfigLoadError::GuardRail(ConfigGuardRailError::PageSizeNotOffered {
            page_size: 25,
            ..
        })
    ));
}

#[test]
fn unknown_screens_and_missing_dir_warn() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("fleetdesk.toml");
    fs::write(
        &path,
        format!(
            "[source]\nrecords_dir = \"{}\"\n\n[screens.timesheets]\npage_size = 20\n",
            dir.path().join("missing").display()
        ),
    )
    .unwrap();

    let load = isolated().with_config_path(&path).load().unwrap();
    let warnings: Vec<_> = load.warnings.iter().cloned().collect();

    assert_eq!(warnings.len(), 2);
    assert!(warnings.contains(&ConfigWarning::UnknownScreen(
        "timesheets".to_string()
    )));
    assert!(
        warnings
            .iter()
            .any(|w| matches!(w, ConfigWarning::MissingRecordsDir(_)))
    );
}
