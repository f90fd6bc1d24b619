//! Shared helpers for command handlers.

use std::io::IsTerminal;

use heroes_core::Hero;

use crate::error::CliError;

/// Prompt for confirmation, auto-approving if `--yes` was passed.
///
/// Without a terminal and without `--yes` the prompt is refused.
pub fn confirm(message: &str, yes_flag: bool) -> Result<bool, CliError> {
    if yes_flag {
        return Ok(true);
    }
    if !std::io::stdin().is_terminal() {
        return Err(CliError::Validation {
            field: "confirmation".into(),
            reason: "destructive operation requires --yes when not interactive".into(),
        });
    }
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .map_err(|e| CliError::Validation {
            field: "confirmation".into(),
            reason: format!("prompt failed: {e}"),
        })?;
    Ok(confirmed)
}

/// Multi-line detail view of a hero.
pub fn hero_detail(hero: &Hero) -> String {
    format!("ID:    {}\nName:  {}", hero.id, hero.name)
}
