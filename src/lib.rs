//! range-slider: pick an integer from a bounded range in the terminal.

pub mod report;
pub mod tui;
pub mod types;
