//! Output formatting for a finished pick.
//!
//! Pure functions: (Pick, OutputFormat) → String.
//! No I/O, no side effects.

use crate::types::{OutputFormat, Pick};

/// Format a confirmed pick for stdout.
pub fn format_pick(pick: &Pick, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Human => Ok(pick.value.to_string()),
        OutputFormat::Json => serde_json::to_string_pretty(pick),
    }
}

// ============================================================================
// TESTS
// ============================================================================
