//! Shared helpers for command handlers.

use std::io::IsTerminal;

use homedash_core::Device;

use crate::error::CliError;

/// Prompt for confirmation, auto-approving if `--yes` was passed.
///
/// Without a terminal to ask on, `--yes` is mandatory.
pub fn confirm(message: &str, action: &str, yes_flag: bool) -> Result<bool, CliError> {
    if yes_flag {
        return Ok(true);
    }
    if !std::io::stdin().is_terminal() {
        return Err(CliError::NonInteractiveRequiresYes {
            action: action.into(),
        });
    }
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
    Ok(confirmed)
}

/// Components can only be attached to an active device.
pub fn require_active(device: &Device) -> Result<(), CliError> {
    if device.active {
        Ok(())
    } else {
        Err(CliError::Validation {
            field: "device".into(),
            reason: format!("'{}' is deactivated", device.id),
        })
    }
}

/// Print a status line to stderr unless `--quiet`.
pub fn notice(message: &str, quiet: bool) {
    if !quiet {
        eprintln!("{message}");
    }
}
