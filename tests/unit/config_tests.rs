// Configuration module unit tests

use imgproxy_url::config::*;
use imgproxy_url::{Error, Options, UrlBuilder};
use std::io::Write;
use tempfile::NamedTempFile;

const CONFIG_YAML: &str = r#"
proxy:
  base_url: "https://imgproxy.example.com"
  key: "0123456789abcdef0123456789abcdef"
  salt: "fedcba9876543210fedcba9876543210"
presets:
  thumbnail:
    resizing_type: fill
    width: 150
    height: 150
    gravity: sm
  hero:
    resize: [fit, 1920, 1080, true]
    quality: 85
    strip_metadata: true
"#;

fn write_config(yaml: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
    temp_file
        .write_all(yaml.as_bytes())
        .expect("Failed to write to temp file");
    temp_file.flush().expect("Failed to flush temp file");
    temp_file
}

#[test]
fn test_can_load_config_from_yaml_file_path() {
    let temp_file = write_config(CONFIG_YAML);

    let config = Config::from_file(temp_file.path()).expect("Failed to load config from file");
    config.validate().expect("Config should be valid");

    assert_eq!(config.proxy.base_url, "https://imgproxy.example.com");
    assert!(config.proxy.encode_source);
    assert_eq!(config.presets.len(), 2);
}

#[test]
fn test_returns_io_error_for_non_existent_file() {
    let result = Config::from_file("/tmp/this_file_definitely_does_not_exist_12345.yaml");
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_preset_builds_signed_url() {
    let temp_file = write_config(CONFIG_YAML);
    let config = Config::from_file(temp_file.path()).unwrap();

    let builder = UrlBuilder::from_config(&config.proxy).unwrap();
    let options = config.preset("thumbnail").unwrap();

    assert_eq!(
        builder.build_url("https://example.com/images/image.jpg", Some(&options), Some("webp")),
        "https://imgproxy.example.com/Q1fNo8NqQ5hXefRSPwoPBq8f3D1VGaaRE61rnr0C93c/resizing_type:fill/width:150/height:150/gravity:sm/aHR0cHM6Ly9leGFtcGxlLmNvbS9pbWFnZXMvaW1hZ2UuanBn.webp"
    );
}

#[test]
fn test_preset_matches_from_map() {
    let config = Config::from_yaml_with_env(CONFIG_YAML).unwrap();
    let from_preset = config.preset("hero").unwrap();

    let mut expected = Options::new();
    expected
        .set_resize("fit", Some(1920), Some(1080), Some(true), None)
        .set_quality(85)
        .set_strip_metadata(true);

    assert_eq!(from_preset, expected);
    assert_eq!(
        from_preset.to_string(),
        "resize:fit:1920:1080:1/quality:85/strip_metadata:1"
    );
}

#[test]
fn test_plain_mode_from_config() {
    let yaml = r#"
proxy:
  base_url: "https://imgproxy.example.com"
  encode_source: false
"#;
    let config = Config::from_yaml_with_env(yaml).unwrap();
    let builder = UrlBuilder::from_config(&config.proxy).unwrap();

    assert!(!builder.is_signed());
    assert_eq!(
        builder.build_url("https://example.com/a.jpg", None, None),
        "https://imgproxy.example.com/unsafe/plain/https://example.com/a.jpg"
    );
}

#[test]
fn test_env_substitution_in_file() {
    std::env::set_var("IMGPROXY_URL_TEST_FILE_SALT", "fedcba9876543210fedcba9876543210");
    let yaml = r#"
proxy:
  base_url: "https://imgproxy.example.com"
  key: "0123456789abcdef0123456789abcdef"
  salt: "${IMGPROXY_URL_TEST_FILE_SALT}"
"#;
    let temp_file = write_config(yaml);
    let config = Config::from_file(temp_file.path()).unwrap();

    assert_eq!(
        config.proxy.salt.as_deref(),
        Some("fedcba9876543210fedcba9876543210")
    );
    assert!(UrlBuilder::from_config(&config.proxy).unwrap().is_signed());
}

#[test]
fn test_preset_with_unusable_value_fails() {
    let yaml = r#"
proxy:
  base_url: "https://imgproxy.example.com"
presets:
  broken:
    width: {nested: 1}
"#;
    let config = Config::from_yaml_with_env(yaml).unwrap();
    let err = config.preset("broken").unwrap_err();
    assert!(err.to_string().contains("Preset 'broken' option 'width'"));
}
