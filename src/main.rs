use std::path::Path;

use clap::Parser;

use docstring_guard::checker::{DocstringChecker, FileReport};
use docstring_guard::cli::Cli;
use docstring_guard::config::{Config, ConfigLoader, FileConfigLoader};
use docstring_guard::logging::init_logging;
use docstring_guard::output::{
    ColorMode, JsonFormatter, OutputFormat, OutputFormatter, TextFormatter,
};
use docstring_guard::scanner::{DirectoryScanner, GlobFilter};
use docstring_guard::{EXIT_ERROR, EXIT_SUCCESS, EXIT_VIOLATIONS};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let exit_code = match run(&cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_ERROR
        }
    };

    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> docstring_guard::Result<i32> {
    let mut config = load_config(cli.config.as_deref(), cli.no_config)?;
    apply_cli_overrides(&mut config, cli);

    let filter = GlobFilter::from_config(&config.scan)?;
    let files = DirectoryScanner::new(filter).resolve(&cli.paths)?;

    let reports = DocstringChecker::default().check_files(&files);

    let output = format_output(&config, &reports, cli.color.into())?;
    if output.ends_with('\n') {
        print!("{output}");
    } else {
        println!("{output}");
    }

    let violations: usize = reports.iter().map(|r| r.violations().len()).sum();
    let failures = reports.iter().filter(|r| r.is_failed()).count();
    tracing::info!(files = reports.len(), violations, failures, "check finished");

    Ok(exit_code(&reports))
}

fn load_config(path: Option<&Path>, no_config: bool) -> docstring_guard::Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    match path {
        Some(p) => loader.load_from_path(p),
        None => loader.load(),
    }
}

fn apply_cli_overrides(config: &mut Config, cli: &Cli) {
    config.output.explain |= cli.explain;
    config.output.range |= cli.range;
    config.output.quote |= cli.quote;
    if let Some(format) = cli.format {
        config.output.format = format;
    }
    if let Some(ext) = &cli.ext {
        config.scan.extensions.clone_from(ext);
    }
    config.scan.exclude.extend(cli.exclude.iter().cloned());
}

fn format_output(
    config: &Config,
    reports: &[FileReport],
    color_mode: ColorMode,
) -> docstring_guard::Result<String> {
    match config.output.format {
        OutputFormat::Text => TextFormatter::new(color_mode)
            .with_explain(config.output.explain)
            .with_range(config.output.range)
            .with_quote(config.output.quote)
            .format(reports),
        OutputFormat::Json => JsonFormatter.format(reports),
    }
}

fn exit_code(reports: &[FileReport]) -> i32 {
    if reports.iter().any(FileReport::has_violations) {
        EXIT_VIOLATIONS
    } else if reports.iter().any(FileReport::is_failed) {
        EXIT_ERROR
    } else {
        EXIT_SUCCESS
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
