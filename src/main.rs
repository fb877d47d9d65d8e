use clap::Parser;

use codingstyle_guard::cli::{Cli, Commands};
use codingstyle_guard::commands::{run_check, run_init, run_rules};
use codingstyle_guard::logging::init_tracing;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let exit_code = match &cli.command {
        Commands::Check(args) => run_check(args, &cli),
        Commands::Init(args) => run_init(args),
        Commands::Rules => run_rules(),
    };

    std::process::exit(exit_code);
}
