//! Loading config.toml from disk.

use std::io::Write;

use stockfighter_cli::config::Config;
use stockfighter_cli::error::Error;

#[test]
fn load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[api]
key = "file-key"
base_url = "http://127.0.0.1:9999/ob/api"

[defaults]
venue = "TESTEX"
"#
    )
    .unwrap();

    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.api.base_url, "http://127.0.0.1:9999/ob/api");
    assert_eq!(config.api.timeout_secs, 30);
    assert_eq!(config.venue(None).unwrap(), "TESTEX");
    assert!(!config.api.key.is_empty());
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.toml");
    match Config::load(&path) {
        Err(Error::ConfigRead { path: p, .. }) => assert_eq!(p, path),
        other => panic!("expected ConfigRead, got {other:?}"),
    }
}

#[test]
fn malformed_toml_is_parse_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[api\nkey = ").unwrap();
    assert!(matches!(
        Config::load(file.path()),
        Err(Error::ConfigParse(_))
    ));
}
