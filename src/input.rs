//! Menu input that must parse before the menu can continue

use crate::error::{PasswordRoastError, Result};
use crate::types::StrengthLevel;

/// Read strength levels from `next_input` until one parses.
///
/// Each parse failure goes to `on_error` and the input is requested again.
/// Errors from `next_input` itself (a cancelled prompt, closed stdin) are
/// returned unchanged.
pub fn read_strength_level<P, E>(mut next_input: P, mut on_error: E) -> Result<StrengthLevel>
where
    P: FnMut() -> Result<String>,
    E: FnMut(&PasswordRoastError),
{
    loop {
        let input = next_input()?;
        match input.parse::<StrengthLevel>() {
            Ok(level) => return Ok(level),
            Err(e) if e.is_recoverable() => {
                tracing::debug!(error = %e, "Rejected strength level input");
                on_error(&e);
            }
            Err(e) => return Err(e),
        }
    }
}
