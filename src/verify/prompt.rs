//! Confirmation prompt shown when the project already seems to use the
//! requested name.
//!
//! Skipped with `--yes`. On a non-interactive stdin the prompt is declined.

use crate::error::Result;
use colored::Colorize;
use std::io::{self, IsTerminal, Write};

/// Asks whether to continue although `name` already appears in the main
/// `CMakeLists.txt`.
///
/// # Returns
///
/// - `Ok(true)` if the user confirms or `assume_yes` is set
/// - `Ok(false)` if the user declines or stdin is not a terminal
///
/// # Errors
///
/// Returns `Err` only on I/O errors reading stdin.
pub fn confirm_name_reuse(name: &str, assume_yes: bool) -> Result<bool> {
    println!(
        "{} Project already appears to use name '{}'",
        "Warning:".yellow().bold(),
        name.yellow()
    );

    if assume_yes {
        log::info!("Continuing because --yes was given");
        return Ok(true);
    }

    if !io::stdin().is_terminal() {
        log::warn!("Non-interactive terminal detected. Use --yes to confirm automatically.");
        return Ok(false);
    }

    print!("{} {} ", "Continue anyway?".bold(), "(y/N)".dimmed());
    io::stdout().flush()?;

    let mut response = String::new();
    io::stdin().read_line(&mut response)?;

    let confirmed =
        response.trim().eq_ignore_ascii_case("y") || response.trim().eq_ignore_ascii_case("yes");

    if !confirmed {
        log::info!("Replacement cancelled by user");
    }

    Ok(confirmed)
}
