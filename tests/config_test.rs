// tests/config_test.rs
use ncs_pkg_bumper::config::{load_config, Config};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

#[test]
fn test_load_default_config() {
    let config = Config::default();
    assert_eq!(config.file_name, "package-meta-data.xml");
    assert_eq!(
        config.name_path().unwrap().to_string(),
        "/ncs-package/name"
    );
    assert_eq!(
        config.version_path().unwrap().to_string(),
        "/ncs-package/package-version"
    );
}

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
file_name = "pkg.xml"

[elements]
version = "/ncs-package/version"
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path())).unwrap();
    assert_eq!(config.file_name, "pkg.xml");
    assert_eq!(config.elements.name, "/ncs-package/name");
    assert_eq!(config.elements.version, "/ncs-package/version");
}

#[test]
fn test_load_fixture() {
    let config = load_config(Some(Path::new("tests/fixtures/ncs-bump.toml")))
        .expect("Failed to load test config");
    assert_eq!(config.file_name, "meta.xml");
    assert_eq!(config.name_path().unwrap().leaf(), "title");
    assert_eq!(config.version_path().unwrap().leaf(), "release");
}

#[test]
fn test_invalid_toml_is_config_error() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"file_name = [unterminated").unwrap();
    temp_file.flush().unwrap();

    let err = load_config(Some(temp_file.path())).unwrap_err();
    assert!(err.to_string().starts_with("Configuration error"));
}

#[test]
fn test_unknown_keys_are_ignored() {
    let config = Config::from_toml("colour = \"blue\"\n").unwrap();
    assert_eq!(config, Config::default());
}
