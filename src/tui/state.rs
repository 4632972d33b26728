//! Slider state algebra: pure types, zero effects.
//!
//! `Slider` is the whole configuration and the current value. Hosts own
//! it, set any field directly between renders, and replace their copy
//! with whatever `update` returns. Only `value` is meant to change in
//! response to input; every other field is configuration.
//!
//! Key bindings are a plain `KeyMap` value the host passes into key
//! mapping, so two sliders in one process never share bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Color;

use crate::types::{Outcome, SliderError};

use super::theme::{self, BorderStyle};

// ============================================================================
// SLIDER
// ============================================================================

/// An integer slider: range, step, current value, geometry and styling.
///
/// Preconditions (`min < max`, `step > 0`, `width > 0`,
/// `min <= value <= max`) are the host's to uphold; see `validate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slider {
    /// Lower bound (inclusive).
    pub min: i64,
    /// Upper bound (inclusive).
    pub max: i64,
    /// Amount added or removed per input event.
    pub step: i64,
    /// Currently selected value.
    pub value: i64,
    /// Track width in cells, excluding border and value labels.
    pub width: u16,
    /// Glyph drawn at the handle's column.
    pub handle_glyph: char,
    /// Glyph drawn on every other track cell.
    pub bar_glyph: char,

    /// Show the min/max label line.
    pub show_hi_lo: bool,
    /// Min/max labels above the track (needs `show_hi_lo`).
    pub show_top: bool,
    /// Min/max labels below the track (needs `show_hi_lo`).
    pub show_bottom: bool,
    /// Format the current value at all.
    pub show_value: bool,
    /// Current value left of the track (needs `show_value`).
    pub show_value_left: bool,
    /// Current value right of the track (needs `show_value`).
    pub show_value_right: bool,

    /// Color the track only up to the handle, leaving the rest unstyled.
    pub filling: bool,
    /// Foreground of the handle glyph.
    pub handle_color: Color,
    /// Foreground of the track glyphs.
    pub bar_color: Color,
    /// Labels and value text; `None` keeps the terminal's foreground.
    pub text_color: Option<Color>,
    /// Frame drawn around the whole block.
    pub border: BorderStyle,
}

impl Slider {
    /// Stock slider: 0..=10, step 1, value 0, 30 cells wide.
    pub fn new() -> Self {
        Slider {
            min: 0,
            max: 10,
            step: 1,
            value: 0,
            width: 30,
            handle_glyph: theme::HANDLE_GLYPH,
            bar_glyph: theme::BAR_GLYPH,
            show_hi_lo: false,
            show_top: true,
            show_bottom: true,
            show_value: true,
            show_value_left: false,
            show_value_right: false,
            filling: false,
            handle_color: theme::HANDLE_COLOR,
            bar_color: theme::BAR_COLOR,
            text_color: None,
            border: BorderStyle::Plain,
        }
    }

    /// Check the preconditions rendering and stepping rely on.
    pub fn validate(&self) -> Result<(), SliderError> {
        if self.min >= self.max {
            return Err(SliderError::EmptyRange {
                min: self.min,
                max: self.max,
            });
        }
        if self.step <= 0 {
            return Err(SliderError::ZeroStep);
        }
        if self.width == 0 {
            return Err(SliderError::ZeroWidth);
        }
        if !(self.min..=self.max).contains(&self.value) {
            return Err(SliderError::ValueOutOfRange {
                value: self.value,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

impl Default for Slider {
    fn default() -> Self {
        Slider::new()
    }
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic input, decoupled from physical keys.
///
/// `update` only reacts to `Increment` and `Decrement`; `Confirm` and
/// `Cancel` end a picker session and are handled by `handle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Increment,
    Decrement,
    Confirm,
    Cancel,
}

/// Result of a picker-level transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Keep going with this slider state.
    Slider(Slider),
    /// Session over.
    Finish(Outcome),
}

// ============================================================================
// KEY BINDINGS
// ============================================================================

/// A set of keys that trigger one action, plus its help label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub keys: Vec<KeyCode>,
    /// Short key hint shown in the footer, e.g. `→`.
    pub key_help: &'static str,
    /// What the action does, e.g. `increment`.
    pub desc: &'static str,
}

impl Binding {
    pub fn new(keys: Vec<KeyCode>, key_help: &'static str, desc: &'static str) -> Self {
        Binding { keys, key_help, desc }
    }

    /// Whether `code` is one of this binding's keys.
    pub fn matches(&self, code: KeyCode) -> bool {
        self.keys.contains(&code)
    }
}

/// Key bindings owned by the host and passed explicitly to `map_key`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMap {
    pub increment: Binding,
    pub decrement: Binding,
    pub confirm: Binding,
    pub cancel: Binding,
}

impl KeyMap {
    /// Map a terminal key event to an action.
    ///
    /// Ctrl+C always cancels, whatever the bindings say. Returns `None`
    /// for keys bound to nothing.
    pub fn action_for(&self, key: KeyEvent) -> Option<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Cancel);
        }

        [
            (&self.increment, Action::Increment),
            (&self.decrement, Action::Decrement),
            (&self.confirm, Action::Confirm),
            (&self.cancel, Action::Cancel),
        ]
        .into_iter()
        .find(|(binding, _)| binding.matches(key.code))
        .map(|(_, action)| action)
    }

    /// Footer text listing every binding, e.g. `[←] decrement  [→] increment`.
    pub fn help(&self) -> String {
        [&self.decrement, &self.increment, &self.confirm, &self.cancel]
            .iter()
            .map(|b| format!("[{}] {}", b.key_help, b.desc))
            .collect::<Vec<_>>()
            .join("  ")
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        KeyMap {
            increment: Binding::new(vec![KeyCode::Right, KeyCode::Char('l')], "→", "increment"),
            decrement: Binding::new(vec![KeyCode::Left, KeyCode::Char('h')], "←", "decrement"),
            confirm: Binding::new(vec![KeyCode::Enter], "Enter", "pick"),
            cancel: Binding::new(vec![KeyCode::Esc, KeyCode::Char('q')], "Esc", "cancel"),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
