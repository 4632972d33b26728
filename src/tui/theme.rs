//! Slider palette, glyphs and border styles.
//!
//! Pure data consumed by the rendering layer. The defaults give the
//! slider its stock look: a purple handle on a blue track, framed by a
//! plain single-line border.

use ratatui::style::{Color, Style};
use ratatui::symbols::border;
use ratatui::widgets::Block;

// ============================================================================
// GLYPHS
// ============================================================================

/// Default handle glyph (heavy vertical line).
pub const HANDLE_GLYPH: char = '┃';

/// Default track glyph (light horizontal line).
pub const BAR_GLYPH: char = '─';

// ============================================================================
// COLORS
// ============================================================================

/// Handle color: `#894593`.
pub const HANDLE_COLOR: Color = Color::Rgb(0x89, 0x45, 0x93);

/// Track color: `#5a32e2`.
pub const BAR_COLOR: Color = Color::Rgb(0x5a, 0x32, 0xe2);

/// Footer / help line.
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);

// ============================================================================
// BORDERS
// ============================================================================

/// Frame drawn around the rendered slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderStyle {
    /// No frame at all; the slider occupies only its content cells.
    None,
    /// Single-line box (`┌─┐`).
    #[default]
    Plain,
    /// Single-line box with rounded corners (`╭─╮`).
    Rounded,
    /// Double-line box (`╔═╗`).
    Double,
    /// Heavy-line box (`┏━┓`).
    Thick,
}

impl BorderStyle {
    /// Bordered block for this style, or `None` when no frame is drawn.
    pub fn block(self) -> Option<Block<'static>> {
        let set = match self {
            BorderStyle::None => return None,
            BorderStyle::Plain => border::PLAIN,
            BorderStyle::Rounded => border::ROUNDED,
            BorderStyle::Double => border::DOUBLE,
            BorderStyle::Thick => border::THICK,
        };
        Some(Block::bordered().border_set(set))
    }

    /// Cells the frame adds on each axis (one per side).
    pub fn thickness(self) -> u16 {
        match self {
            BorderStyle::None => 0,
            _ => 2,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_border_is_plain() {
        assert_eq!(BorderStyle::default(), BorderStyle::Plain);
        assert_eq!(BorderStyle::Plain.block(), Some(Block::bordered()));
    }

    #[test]
    fn no_border_has_no_block_and_no_thickness() {
        assert!(BorderStyle::None.block().is_none());
        assert_eq!(BorderStyle::None.thickness(), 0);
        assert_eq!(BorderStyle::Double.thickness(), 2);
    }

    #[test]
    fn default_palette_matches_stock_look() {
        assert_eq!(HANDLE_COLOR, Color::Rgb(137, 69, 147));
        assert_eq!(BAR_COLOR, Color::Rgb(90, 50, 226));
        assert_eq!(STYLE_HELP.fg, Some(Color::DarkGray));
    }
}
