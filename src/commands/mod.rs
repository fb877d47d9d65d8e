pub mod check;
pub mod init;
pub mod rules;

pub use check::{apply_cli_overrides, load_config, run_check, run_check_impl};
pub use init::{generate_config_template, run_init, run_init_impl};
pub use rules::{format_rules, run_rules};

use crate::cli::ColorChoice;
use crate::output::ColorMode;

#[must_use]
pub const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}
