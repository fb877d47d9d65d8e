use std::path::PathBuf;

use super::*;

fn check_args(args: &[&str]) -> CheckArgs {
    let argv = ["codingstyle-guard", "check"].iter().chain(args);
    match Cli::parse_from(argv).command {
        Commands::Check(args) => args,
        _ => panic!("Expected Check command"),
    }
}

#[test]
fn cli_check_default_path() {
    let args = check_args(&[]);

    assert_eq!(args.paths, vec![PathBuf::from(".")]);
    assert_eq!(args.format, OutputFormat::Text);
    assert!(args.fail_on.is_none());
    assert!(!args.no_gitignore);
}

#[test]
fn cli_check_with_paths() {
    let args = check_args(&["SrcLib", "Bundles"]);

    assert_eq!(args.paths, vec![PathBuf::from("SrcLib"), PathBuf::from("Bundles")]);
}

#[test]
fn cli_check_with_config() {
    let args = check_args(&["--config", "custom.toml"]);

    assert_eq!(args.config, Some(PathBuf::from("custom.toml")));
}

#[test]
fn cli_check_with_extensions() {
    let args = check_args(&["--ext", "cpp,hpp"]);

    assert_eq!(args.ext, Some(vec!["cpp".to_string(), "hpp".to_string()]));
}

#[test]
fn cli_check_with_excludes() {
    let args = check_args(&["-x", "**/build/**", "--exclude", "**/moc_*"]);

    assert_eq!(args.exclude, vec!["**/build/**", "**/moc_*"]);
}

#[test]
fn cli_check_json_output_file() {
    let args = check_args(&["--format", "json", "--output", "report.json"]);

    assert_eq!(args.format, OutputFormat::Json);
    assert_eq!(args.output, Some(PathBuf::from("report.json")));
}

#[test]
fn cli_check_fail_on_and_year() {
    let args = check_args(&["--fail-on", "warning", "--year", "2999", "--no-gitignore"]);

    assert_eq!(args.fail_on, Some(Severity::Warning));
    assert_eq!(args.year, Some(2999));
    assert!(args.no_gitignore);
}

#[test]
fn cli_check_rejects_unknown_format() {
    let result = Cli::try_parse_from(["codingstyle-guard", "check", "--format", "sarif"]);

    assert!(result.is_err());
}

#[test]
fn cli_global_flags() {
    let cli = Cli::parse_from(["codingstyle-guard", "-vv", "--color", "never", "check", "-q"]);

    assert_eq!(cli.verbose, 2);
    assert!(cli.quiet);
    assert!(matches!(cli.color, ColorChoice::Never));
    assert!(!cli.no_config);
}

#[test]
fn cli_init_defaults() {
    let cli = Cli::parse_from(["codingstyle-guard", "init"]);
    match cli.command {
        Commands::Init(args) => {
            assert_eq!(args.output, PathBuf::from(".codingstyle-guard.toml"));
            assert!(!args.force);
        }
        _ => panic!("Expected Init command"),
    }
}

#[test]
fn cli_rules_command() {
    let cli = Cli::parse_from(["codingstyle-guard", "rules"]);

    assert!(matches!(cli.command, Commands::Rules));
}
