//! Slider widget and the picker built on it.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: Pure data types (Slider, Action, KeyMap, Transition)
//! - `update`: Pure transitions
//! - `view`: Pure rendering
//! - `theme`: Palette, glyphs, borders
//! - `run`: Effects (terminal, event loop)

pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;
