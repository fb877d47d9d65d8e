use std::fmt::Write;

use crate::EXIT_SUCCESS;
use crate::config::DEFAULT_ENABLED_RULES;
use crate::rules::BUILTIN_RULES;

#[must_use]
pub fn run_rules() -> i32 {
    print!("{}", format_rules());
    EXIT_SUCCESS
}

/// One line per built-in rule; rules enabled by default are starred.
#[must_use]
pub fn format_rules() -> String {
    let width = BUILTIN_RULES.iter().map(|(id, _)| id.len()).max().unwrap_or(0);
    let mut output = String::new();
    for (id, description) in BUILTIN_RULES {
        let marker = if DEFAULT_ENABLED_RULES.contains(id) { '*' } else { ' ' };
        let _ = writeln!(output, "{marker} {id:<width$}  {description}");
    }
    output.push_str("\n* enabled by default\n");
    output
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod tests;
