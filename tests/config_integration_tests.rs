//! Integration tests for ConfigStore and the wrapper configuration file
//!
//! These tests verify:
//! - First-run default creation and round-tripping
//! - camelCase key layout of the written YAML
//! - Whole-file rejection of malformed content
//! - texturesPath validation against the filesystem

use camino::Utf8PathBuf;
use map2dif_wrapper::{ConfigStore, WrapperConfig, WrapperError};
use std::fs;
use tempfile::TempDir;

fn create_test_dir() -> (TempDir, Utf8PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let base = Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap();
    (temp_dir, base)
}

#[test]
fn test_first_run_creates_default_and_loads_it_back() {
    let (_temp_dir, base) = create_test_dir();
    let store = ConfigStore::new(&base);

    store.ensure_exists().unwrap();
    let loaded = store.load().unwrap();

    assert!(loaded.textures_path.is_none());
    assert!(loaded.copy_textures);
    assert!(!loaded.silent_mode);
}

#[test]
fn test_written_file_uses_camel_case_keys() {
    let (_temp_dir, base) = create_test_dir();
    let store = ConfigStore::new(&base);

    store.ensure_exists().unwrap();

    let contents = fs::read_to_string(store.config_path()).unwrap();
    assert!(contents.contains("texturesPath"));
    assert!(contents.contains("copyTextures: true"));
    assert!(contents.contains("silentMode: false"));
}

#[test]
fn test_ensure_exists_does_not_clobber_edits() {
    let (_temp_dir, base) = create_test_dir();
    let store = ConfigStore::new(&base);

    fs::write(
        store.config_path(),
        "texturesPath: C:\\game\\textures\ncopyTextures: false\nsilentMode: true\n",
    )
    .unwrap();

    store.ensure_exists().unwrap();
    let loaded = store.load().unwrap();

    assert_eq!(loaded.textures_path.as_deref(), Some("C:\\game\\textures"));
    assert!(!loaded.copy_textures);
    assert!(loaded.silent_mode);
}

#[test]
fn test_malformed_yaml_is_rejected_whole() {
    let (_temp_dir, base) = create_test_dir();
    let store = ConfigStore::new(&base);

    fs::write(store.config_path(), "copyTextures: true\n  bad indent: {{").unwrap();

    let err = store.load().unwrap_err();
    assert!(matches!(err, WrapperError::ConfigParse(_)));
    assert_eq!(err.to_string(), "The config file is invalid.");
}

#[test]
fn test_wrong_field_type_is_a_parse_error() {
    let (_temp_dir, base) = create_test_dir();
    let store = ConfigStore::new(&base);

    fs::write(store.config_path(), "copyTextures: sometimes\n").unwrap();

    let err = store.load().unwrap_err();
    assert!(matches!(err, WrapperError::ConfigParse(_)));
}

#[test]
fn test_validate_accepts_existing_directory() {
    let (_temp_dir, base) = create_test_dir();
    let store = ConfigStore::new(&base);

    let textures = base.join("textures");
    fs::create_dir_all(&textures).unwrap();

    let config = WrapperConfig {
        textures_path: Some(textures.to_string()),
        ..WrapperConfig::default()
    };

    store.validate(&config).unwrap();
}

#[test]
fn test_validate_rejects_unset_empty_and_missing_paths() {
    let (_temp_dir, base) = create_test_dir();
    let store = ConfigStore::new(&base);

    let unset = WrapperConfig::default();
    assert!(matches!(
        store.validate(&unset),
        Err(WrapperError::MissingTexturesPath)
    ));

    let empty = WrapperConfig {
        textures_path: Some(String::new()),
        ..WrapperConfig::default()
    };
    assert!(matches!(
        store.validate(&empty),
        Err(WrapperError::MissingTexturesPath)
    ));

    let missing = WrapperConfig {
        textures_path: Some(base.join("nope").to_string()),
        ..WrapperConfig::default()
    };
    let err = store.validate(&missing).unwrap_err();
    assert!(matches!(err, WrapperError::TexturesPathNotFound(_)));
    assert!(err.to_string().contains("could not be found"));
}

#[test]
fn test_validate_rejects_file_as_textures_path() {
    let (_temp_dir, base) = create_test_dir();
    let store = ConfigStore::new(&base);

    let file_path = base.join("not_a_dir.txt");
    fs::write(&file_path, "x").unwrap();

    let config = WrapperConfig {
        textures_path: Some(file_path.to_string()),
        ..WrapperConfig::default()
    };

    assert!(matches!(
        store.validate(&config),
        Err(WrapperError::TexturesPathNotFound(_))
    ));
}
