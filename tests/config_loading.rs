// tests/config_loading.rs

use std::error::Error;
use std::io::Write;
use std::path::PathBuf;

use tempfile::NamedTempFile;

use check_dir_changes::config::load_from_path;
use check_dir_changes::errors::CheckError;

mod common;

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn full_config_parses_directories_and_excludes() -> TestResult {
    common::init_tracing();

    let mut file = NamedTempFile::new()?;
    write!(
        file,
        r#"
directories = ["/var/www", "/etc"]
excludes = ["/var/www/cache", "/var/www/tmp"]
"#
    )?;

    let cfg = load_from_path(file.path())?;

    assert_eq!(
        cfg.directories,
        vec![PathBuf::from("/var/www"), PathBuf::from("/etc")]
    );
    assert_eq!(cfg.excludes, vec!["/var/www/cache", "/var/www/tmp"]);
    Ok(())
}

#[test]
fn excludes_may_be_omitted() -> TestResult {
    common::init_tracing();

    let mut file = NamedTempFile::new()?;
    write!(file, r#"directories = ["/srv/data"]"#)?;

    let cfg = load_from_path(file.path())?;

    assert_eq!(cfg.directories, vec![PathBuf::from("/srv/data")]);
    assert!(cfg.excludes.is_empty());
    Ok(())
}

#[test]
fn empty_directory_list_is_legal() -> TestResult {
    common::init_tracing();

    let mut file = NamedTempFile::new()?;
    write!(file, "directories = []")?;

    let cfg = load_from_path(file.path())?;
    assert!(cfg.directories.is_empty());
    Ok(())
}

#[test]
fn missing_file_is_a_config_error_with_exit_code_2() {
    common::init_tracing();

    let result = load_from_path("/nonexistent/check_dir_changes/watch.toml");

    match result {
        Err(CheckError::Config(msg)) => {
            assert!(msg.contains("file not found or not readable"));
            assert!(msg.contains("/nonexistent/check_dir_changes/watch.toml"));
        }
        Err(e) => panic!("Expected Config error, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }

    let err = load_from_path("/nonexistent/check_dir_changes/watch.toml").unwrap_err();
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn toml_syntax_error_is_a_config_error_with_exit_code_2() -> TestResult {
    common::init_tracing();

    let mut file = NamedTempFile::new()?;
    write!(file, "directories = [unterminated")?;

    let err = load_from_path(file.path()).unwrap_err();

    assert!(matches!(err, CheckError::Toml(_)), "got: {:?}", err);
    assert!(err.to_string().starts_with("Configuration error:"));
    assert_eq!(err.exit_code(), 2);
    Ok(())
}

#[test]
fn missing_directories_key_is_a_config_error() -> TestResult {
    common::init_tracing();

    let mut file = NamedTempFile::new()?;
    write!(file, r#"excludes = ["/tmp"]"#)?;

    let err = load_from_path(file.path()).unwrap_err();

    assert!(matches!(err, CheckError::Toml(_)), "got: {:?}", err);
    assert_eq!(err.exit_code(), 2);
    Ok(())
}
