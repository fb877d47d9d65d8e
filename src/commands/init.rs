use std::fs;

use crate::cli::InitArgs;
use crate::config::DEFAULT_LICENSE_TEMPLATE;
use crate::{CodingStyleError, EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

#[must_use]
pub fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Writes the default configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(CodingStyleError::ConfigExists(output_path.clone()));
    }

    fs::write(output_path, generate_config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

/// Commented configuration equivalent to the built-in defaults.
#[must_use]
pub fn generate_config_template() -> String {
    format!(
        r#"# codingstyle-guard configuration file

[scanner]
# File extensions to verify
extensions = ["cpp", "cxx", "c", "hpp", "hxx", "h"]

# Glob patterns of files to skip
exclude = []

# Respect .gitignore files while walking directories
gitignore = true

[rules]
# Rules to run, in order. Also available: "forbidden-token", "file-size"
enabled = ["license-header", "header-guard", "include-order"]

# Lowest severity that fails the run: "error" or "warning"
fail_on = "error"

# Files matching these globs get the header-guard rule
headers = ["*.hpp", "*.hxx", "*.h"]

[rules.license-header]
# {{YEAR}} matches any four-digit year
template = '''
{DEFAULT_LICENSE_TEMPLATE}'''

# Require the banner years to mention this year
# current_year = 2024

[rules.header-guard]
# "path": __<PATH BELOW include/ OR src/>__, e.g. __FWA_AA_HPP__
# "template": built from `template` below
naming = "path"
# template = "__{{NAMESPACE}}_{{BASENAME}}_{{EXT}}__"

# Require `#endif // GUARD`
require_endif_comment = false

[rules.include-order]
# "local-first", "system-first", "no-mixing" or "any"
grouping = "local-first"
alphabetical = true
case_sensitive = true
# severity = "warning"

[rules.forbidden-token]
# Any of "tab", "crlf", "cr", "digraphs"
tokens = ["tab", "crlf"]
custom = []

[rules.file-size]
# Largest accepted file in bytes
max_size = 1048576
# Only limit binary files (content with NUL bytes)
binary_only = false
"#
    )
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
