//! Config files feeding the app.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use flames_engine::{App, ConfigError, DEFAULT_CALCULATION_DELAY, FlamesConfig};

fn write(dir: &tempfile::TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, contents).expect("write config");
    path
}

#[test]
fn config_file_drives_app_options() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        &dir,
        "[app]\nreduced_motion = true\n\n[calculation]\ndelay_ms = 40\n",
    );
    let config = FlamesConfig::load_from(&path).unwrap().unwrap();
    let app = App::new(config.ui_options_with(|_| None), config.calculation_delay());

    assert_eq!(app.calculation_delay(), Duration::from_millis(40));
    assert!(app.ui_options().reduced_motion);
    assert!(app.screen_effect().is_none());
}

#[test]
fn env_beats_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(&dir, "[app]\nreduced_motion = true\nascii_only = false\n");
    let config = FlamesConfig::load_from(&path).unwrap().unwrap();

    let options = config.ui_options_with(|name| match name {
        "FLAMES_REDUCED_MOTION" => Some("false".to_string()),
        "FLAMES_ASCII" => Some("true".to_string()),
        _ => None,
    });
    let app = App::new(options, config.calculation_delay());
    assert!(!app.ui_options().reduced_motion);
    assert!(app.ui_options().ascii_only);
    assert!(app.screen_effect().is_some());
}

#[test]
fn no_config_uses_defaults() {
    let app = App::from_config(None);
    assert_eq!(app.calculation_delay(), DEFAULT_CALCULATION_DELAY);
}

#[test]
fn unknown_keys_are_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(&dir, "[app]\ntheme = \"neon\"\n\n[extras]\nx = 1\n");
    assert!(FlamesConfig::load_from(&path).unwrap().is_some());
}

#[test]
fn broken_config_reports_its_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(&dir, "[calculation]\ndelay_ms = \"soon\"\n");
    let err = FlamesConfig::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert_eq!(err.path(), &path);
}
