//! Core domain types shared outside the TUI layer.
//!
//! Validation errors for slider configuration, the result of a finished
//! pick, and the output format the CLI renders it in.

use serde::Serialize;

// ============================================================================
// VALIDATION
// ============================================================================

/// A slider configuration the renderer cannot draw faithfully.
///
/// Construction never fails; hosts call `Slider::validate` when they
/// want these preconditions checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SliderError {
    /// `min` must be strictly less than `max`.
    EmptyRange { min: i64, max: i64 },
    /// A zero step would make increment/decrement no-ops.
    ZeroStep,
    /// The track needs at least one cell.
    ZeroWidth,
    /// `value` was set outside `[min, max]` directly, bypassing `update`.
    ValueOutOfRange { value: i64, min: i64, max: i64 },
}

impl std::fmt::Display for SliderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SliderError::EmptyRange { min, max } => {
                write!(f, "Empty range: min ({}) must be less than max ({})", min, max)
            }
            SliderError::ZeroStep => write!(f, "Step must be greater than zero"),
            SliderError::ZeroWidth => write!(f, "Width must be greater than zero"),
            SliderError::ValueOutOfRange { value, min, max } => {
                write!(f, "Value {} is outside [{}, {}]", value, min, max)
            }
        }
    }
}

impl std::error::Error for SliderError {}

// ============================================================================
// PICK RESULT
// ============================================================================

/// How the picker session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The user confirmed this value.
    Picked(i64),
    /// The user backed out without choosing.
    Cancelled,
}

/// A confirmed pick, with the range it was chosen from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pick {
    pub value: i64,
    pub min: i64,
    pub max: i64,
}

/// Output format for reporting a pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Bare number, one line (pipe-friendly).
    #[default]
    Human,
    /// JSON object.
    Json,
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_range_message_names_both_bounds() {
        let err = SliderError::EmptyRange { min: 5, max: 5 };
        assert_eq!(err.to_string(), "Empty range: min (5) must be less than max (5)");
    }

    #[test]
    fn out_of_range_message_shows_interval() {
        let err = SliderError::ValueOutOfRange { value: 12, min: 0, max: 10 };
        assert_eq!(err.to_string(), "Value 12 is outside [0, 10]");
    }

    #[test]
    fn output_format_defaults_to_human() {
        assert_eq!(OutputFormat::default(), OutputFormat::Human);
    }
}
