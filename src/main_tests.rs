use std::path::PathBuf;

use clap::Parser;
use docstring_guard::DocstringGuardError;
use docstring_guard::checker::FileReport;
use docstring_guard::cli::Cli;
use docstring_guard::config::Config;
use docstring_guard::output::{ColorMode, OutputFormat};
use docstring_guard::{EXIT_ERROR, EXIT_SUCCESS, EXIT_VIOLATIONS};

use crate::{apply_cli_overrides, exit_code, format_output, load_config};

fn missing(path: &str) -> FileReport {
    FileReport::failed(
        &PathBuf::from(path),
        DocstringGuardError::FileOpen {
            path: PathBuf::from(path),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        },
    )
}

#[test]
fn exit_codes_documented() {
    assert_eq!(EXIT_SUCCESS, 0);
    assert_eq!(EXIT_VIOLATIONS, 1);
    assert_eq!(EXIT_ERROR, 2);
}

#[test]
fn load_config_no_config_returns_default() {
    let config = load_config(None, true).unwrap();
    assert_eq!(config.scan.extensions, vec!["py"]);
}

#[test]
fn load_config_with_nonexistent_path_returns_error() {
    let result = load_config(Some(std::path::Path::new("nonexistent.toml")), false);
    assert!(result.is_err());
}

#[test]
fn cli_overrides_config() {
    let cli = Cli::parse_from([
        "docstring-guard",
        "-e",
        "--format",
        "json",
        "--ext",
        "pyi",
        "-x",
        "**/gen/**",
    ]);
    let mut config = Config::default();
    config.scan.exclude.push("**/build/**".to_string());
    apply_cli_overrides(&mut config, &cli);

    assert!(config.output.explain);
    assert!(!config.output.quote);
    assert_eq!(config.output.format, OutputFormat::Json);
    assert_eq!(config.scan.extensions, vec!["pyi"]);
    assert_eq!(config.scan.exclude, vec!["**/build/**", "**/gen/**"]);
}

#[test]
fn config_flags_survive_missing_cli_flags() {
    let cli = Cli::parse_from(["docstring-guard"]);
    let mut config = Config::default();
    config.output.range = true;
    apply_cli_overrides(&mut config, &cli);
    assert!(config.output.range);
    assert_eq!(config.output.format, OutputFormat::Text);
}

#[test]
fn exit_code_clean() {
    let reports = vec![FileReport::checked(&PathBuf::from("a.py"), Vec::new())];
    assert_eq!(exit_code(&reports), EXIT_SUCCESS);
    assert_eq!(exit_code(&[]), EXIT_SUCCESS);
}

#[test]
fn exit_code_failed_file() {
    let reports = vec![
        FileReport::checked(&PathBuf::from("a.py"), Vec::new()),
        missing("b.py"),
    ];
    assert_eq!(exit_code(&reports), EXIT_ERROR);
}

#[test]
fn format_output_selects_formatter() {
    let reports = vec![missing("b.py")];
    let mut config = Config::default();

    let text = format_output(&config, &reports, ColorMode::Never).unwrap();
    assert!(text.contains("Error opening file b.py"));

    config.output.format = OutputFormat::Json;
    let json = format_output(&config, &reports, ColorMode::Never).unwrap();
    assert!(json.contains("\"errors\": 1"));
}
