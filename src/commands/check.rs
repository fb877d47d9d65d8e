use std::fs;
use std::path::Path;

use tracing::info;

use crate::cli::{CheckArgs, Cli};
use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::diagnostic::VerificationResult;
use crate::engine::RuleEngine;
use crate::output::{JsonFormatter, OutputFormat, OutputFormatter, ScanProgress, TextFormatter};
use crate::scanner::{DirectoryScanner, GlobFilter, collect_files, read_sources};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, EXIT_VIOLATIONS, Result};

use super::color_choice_to_mode;

#[must_use]
pub fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Load config, discover files, verify them and write the report.
///
/// # Errors
/// Returns an error for invalid configuration and for files or output that
/// cannot be read or written. Style violations are not errors; they select
/// the exit code.
pub fn run_check_impl(args: &CheckArgs, cli: &Cli) -> Result<i32> {
    // 1. Configuration, with command-line overrides on top
    let mut config = load_config(args.config.as_deref(), cli.no_config)?;
    apply_cli_overrides(&mut config, args);

    // 2. Rules are validated before any file is touched
    let engine = RuleEngine::new(&config.rules)?;

    // 3. Discover and read sources
    let filter = GlobFilter::new(config.scanner.extensions.clone(), &config.scanner.exclude)?;
    let scanner = DirectoryScanner::with_gitignore(filter, config.scanner.gitignore);
    let files = collect_files(&scanner, &args.paths)?;
    let sources = read_sources(&files)?;
    info!(files = sources.len(), rules = engine.registry().len(), "checking");

    // 4. Verify in parallel
    let progress = ScanProgress::new(sources.len() as u64, cli.quiet);
    let result = engine.verify_with_progress(&sources, || progress.inc());
    progress.finish();

    // 5. Report
    let report = format_report(&result, args.format, cli)?;
    write_output(&report, args.output.as_deref(), cli.quiet)?;
    info!(
        errors = result.error_count(),
        warnings = result.warning_count(),
        passed = result.passed(),
        "check finished"
    );

    Ok(if result.passed() {
        EXIT_SUCCESS
    } else {
        EXIT_VIOLATIONS
    })
}

/// Load the explicit config file, the local one, or defaults.
///
/// # Errors
/// Returns an error if the config file cannot be read or parsed.
pub fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    match config_path {
        Some(path) => loader.load_from_path(path),
        None => loader.load(),
    }
}

pub fn apply_cli_overrides(config: &mut Config, args: &CheckArgs) {
    if let Some(ext) = &args.ext {
        config.scanner.extensions.clone_from(ext);
    }
    config.scanner.exclude.extend(args.exclude.iter().cloned());
    if args.no_gitignore {
        config.scanner.gitignore = false;
    }
    if let Some(fail_on) = args.fail_on {
        config.rules.fail_on = fail_on;
    }
    if let Some(year) = args.year {
        config.rules.license_header.current_year = Some(year);
    }
}

fn format_report(result: &VerificationResult, format: OutputFormat, cli: &Cli) -> Result<String> {
    match format {
        OutputFormat::Text => {
            TextFormatter::with_verbose(color_choice_to_mode(cli.color), cli.verbose).format(result)
        }
        OutputFormat::Json => JsonFormatter.format(result),
    }
}

fn write_output(report: &str, output: Option<&Path>, quiet: bool) -> Result<()> {
    if let Some(path) = output {
        fs::write(path, report)?;
        if !quiet {
            eprintln!("Report written to {}", path.display());
        }
    } else {
        print!("{report}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
