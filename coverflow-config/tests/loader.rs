use std::fs;
use std::path::PathBuf;

use coverflow_config::{
    ConfigLoadError, ConfigLoader, ConfigSource, EnvSources,
};
use coverflow_core::{ConfigError, EasingKind, EngineConfig};

fn empty_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("temp dir")
}

#[test]
fn falls_back_to_defaults_when_nothing_is_configured() {
    let dir = empty_dir();
    let load = ConfigLoader::new()
        .with_search_dir(dir.path())
        .resolve(&EnvSources::default())
        .expect("defaults load");

    assert_eq!(load.source, ConfigSource::Default);
    assert_eq!(load.config, EngineConfig::default());
    assert!(load.warnings.is_empty());
}

#[test]
fn picks_up_coverflow_toml_from_search_dir() {
    let dir = empty_dir();
    let path = dir.path().join("coverflow.toml");
    fs::write(
        &path,
        r#"
[carousel]
item_width = 160.0
item_spacing = 8.0

[scrubber]
slot_count = 27
easing = "linear"
"#,
    )
    .expect("write config");

    let load = ConfigLoader::new()
        .with_search_dir(dir.path())
        .resolve(&EnvSources::default())
        .expect("file load");

    assert_eq!(load.source, ConfigSource::File(path));
    assert_eq!(load.config.carousel.item_width, 160.0);
    assert_eq!(load.config.carousel.metrics().stride(), 168.0);
    assert_eq!(load.config.scrubber.slot_count, 27);
    assert_eq!(load.config.scrubber.easing, EasingKind::Linear);
}

#[test]
fn env_path_beats_inline_json_and_default_file() {
    let dir = empty_dir();
    fs::write(dir.path().join("coverflow.toml"), "[scrubber]\nslot_count = 25\n")
        .expect("write default");
    let env_path = dir.path().join("override.json");
    fs::write(&env_path, r#"{ "scrubber": { "slot_count": 27 } }"#)
        .expect("write override");

    let env = EnvSources {
        config_path: Some(env_path.clone()),
        config_json: Some(r#"{ "scrubber": { "slot_count": 9 } }"#.into()),
    };
    let load = ConfigLoader::new()
        .with_search_dir(dir.path())
        .resolve(&env)
        .expect("env path load");

    assert_eq!(load.source, ConfigSource::EnvPath(env_path));
    assert_eq!(load.config.scrubber.slot_count, 27);
}

#[test]
fn inline_json_is_used_without_env_path() {
    let dir = empty_dir();
    let env = EnvSources {
        config_path: None,
        config_json: Some(r#"{ "scrubber": { "slot_count": 28 } }"#.into()),
    };
    let load = ConfigLoader::new()
        .with_search_dir(dir.path())
        .resolve(&env)
        .expect("inline load");

    assert_eq!(load.source, ConfigSource::EnvInline);
    assert_eq!(load.config.scrubber.slot_count, 28);
    // Even slot count is accepted but flagged
    assert_eq!(load.warnings.len(), 1);
}

#[test]
fn explicit_path_must_exist() {
    let dir = empty_dir();
    let missing: PathBuf = dir.path().join("nope.toml");
    let err = ConfigLoader::new()
        .with_config_path(&missing)
        .resolve(&EnvSources::default())
        .expect_err("missing explicit file");

    assert!(matches!(
        err,
        ConfigLoadError::MissingConfig { path } if path == missing
    ));
}

#[test]
fn invalid_values_fail_validation() {
    let dir = empty_dir();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "[scrubber]\nslot_count = 0\n").expect("write config");

    let err = ConfigLoader::new()
        .with_config_path(&path)
        .resolve(&EnvSources::default())
        .expect_err("zero slots");

    assert!(matches!(err, ConfigLoadError::Invalid(ConfigError::NoSlots)));
}

#[test]
fn malformed_file_reports_its_path() {
    let dir = empty_dir();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[scrubber\nslot_count = ").expect("write config");

    let err = ConfigLoader::new()
        .with_config_path(&path)
        .resolve(&EnvSources::default())
        .expect_err("malformed toml");

    match err {
        ConfigLoadError::Parse { origin, .. } => {
            assert!(origin.ends_with("broken.toml"), "{origin}")
        }
        other => panic!("unexpected error: {other}"),
    }
}
