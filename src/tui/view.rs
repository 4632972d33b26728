//! Pure rendering: map a Slider to styled ratatui text.
//!
//! `lines` builds the unframed content (label lines, value labels,
//! track and handle) as styled spans. `render` wraps it in the
//! configured border. The only effect is the caller writing the result
//! into a buffer, either through `Frame::render_widget` or the `Widget`
//! impl on `&Slider`.
//!
//! Value labels are right-padded to the widest of `min`/`max` so the
//! block keeps the same width as the handle moves.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Paragraph, Widget};

use super::state::Slider;

// ============================================================================
// GEOMETRY
// ============================================================================

/// Columns reserved for any printed numeral: the longer of `min` and
/// `max` in decimal, sign included.
pub fn label_width(slider: &Slider) -> usize {
    decimal_len(slider.min).max(decimal_len(slider.max))
}

fn decimal_len(n: i64) -> usize {
    n.to_string().len()
}

/// Column of the handle on the track: `floor(width * (value - min) / (max - min))`.
///
/// Always within `0..=width`. An empty or inverted range puts the handle
/// at column 0; values outside the range are pinned to the nearest end.
pub fn handle_position(slider: &Slider) -> u16 {
    let span = i128::from(slider.max) - i128::from(slider.min);
    if span <= 0 {
        return 0;
    }
    let offset = (i128::from(slider.value) - i128::from(slider.min)).clamp(0, span);
    // offset <= span, so the quotient never exceeds width
    (i128::from(slider.width) * offset / span) as u16
}

/// Size of the rendered block (columns, rows), border included.
pub fn rendered_size(slider: &Slider) -> (u16, u16) {
    let content = lines(slider);
    let width = content.iter().map(Line::width).max().unwrap_or(0);
    let frame = slider.border.thickness();
    (
        u16::try_from(width).unwrap_or(u16::MAX).saturating_add(frame),
        u16::try_from(content.len()).unwrap_or(u16::MAX).saturating_add(frame),
    )
}

// ============================================================================
// TEXT PIECES
// ============================================================================

fn text_style(slider: &Slider) -> Style {
    match slider.text_color {
        Some(color) => Style::new().fg(color),
        None => Style::new(),
    }
}

/// Current value, right-padded with spaces to `label_width` columns.
///
/// Empty when the value display is turned off.
pub fn value_label(slider: &Slider) -> String {
    if !slider.show_value {
        return String::new();
    }
    format!("{:<width$}", slider.value, width = label_width(slider))
}

fn value_left(slider: &Slider) -> bool {
    slider.show_value && slider.show_value_left
}

fn value_right(slider: &Slider) -> bool {
    slider.show_value && slider.show_value_right
}

/// Min/max label line: min flush left, max ending under the last track
/// cell, indented past the left value label when one is shown.
fn range_line(slider: &Slider) -> Line<'static> {
    let min = slider.min.to_string();
    let max = slider.max.to_string();
    let indent = if value_left(slider) { label_width(slider) + 1 } else { 0 };
    let track = usize::from(slider.width) + 1;
    let gap = track.saturating_sub(min.len() + max.len()).max(1);

    Line::from(Span::styled(
        format!("{}{}{}{}", " ".repeat(indent), min, " ".repeat(gap), max),
        text_style(slider),
    ))
}

/// Track of `width + 1` cells with the handle at `handle_position`.
///
/// In filling mode only the cells before the handle carry the bar
/// color; the rest keep the terminal's foreground.
fn track_spans(slider: &Slider) -> Vec<Span<'static>> {
    let position = usize::from(handle_position(slider));
    let after = usize::from(slider.width) - position;
    let bar_style = Style::new().fg(slider.bar_color);
    let rest_style = if slider.filling { Style::new() } else { bar_style };
    let bar = slider.bar_glyph.to_string();

    [
        Span::styled(bar.repeat(position), bar_style),
        Span::styled(slider.handle_glyph.to_string(), Style::new().fg(slider.handle_color)),
        Span::styled(bar.repeat(after), rest_style),
    ]
    .into_iter()
    .filter(|span| !span.content.is_empty())
    .collect()
}

fn bar_line(slider: &Slider) -> Line<'static> {
    let value = value_label(slider);
    let mut spans = Vec::new();

    if value_left(slider) {
        spans.push(Span::styled(format!("{} ", value), text_style(slider)));
    }
    spans.extend(track_spans(slider));
    if value_right(slider) {
        spans.push(Span::styled(format!(" {}", value), text_style(slider)));
    }

    Line::from(spans)
}

// ============================================================================
// RENDER
// ============================================================================

/// Unframed slider content, top to bottom.
pub fn lines(slider: &Slider) -> Vec<Line<'static>> {
    let range = slider.show_hi_lo.then(|| range_line(slider));
    let mut lines = Vec::with_capacity(3);

    if slider.show_top {
        lines.extend(range.clone());
    }
    lines.push(bar_line(slider));
    if slider.show_bottom {
        lines.extend(range);
    }

    lines
}

/// The full slider block: content wrapped in the configured border.
pub fn render(slider: &Slider) -> Paragraph<'static> {
    let paragraph = Paragraph::new(Text::from(lines(slider)));
    match slider.border.block() {
        Some(block) => paragraph.block(block),
        None => paragraph,
    }
}

impl Widget for &Slider {
    fn render(self, area: Rect, buf: &mut Buffer) {
        render(self).render(area, buf);
    }
}

// ============================================================================
// TESTS
// ============================================================================
