//! TUI effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! This is the only module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui.
//! Kept minimal: all intelligence lives in the pure layers.

use std::io;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::Span;
use ratatui::widgets::Paragraph;
use ratatui::{Frame, Terminal};
use tracing::info;

use crate::types::Outcome;

use super::state::{Action, KeyMap, Slider, Transition};
use super::theme;
use super::update::handle;
use super::view::rendered_size;

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action using the host's bindings.
///
/// Only presses count; release and repeat events some terminals report
/// are ignored.
pub fn map_key(keys: &KeyMap, key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    keys.action_for(key)
}

// ============================================================================
// LAYOUT
// ============================================================================

/// Center a block of `size` inside `area`, shrinking it if `area` is smaller.
pub fn centered(area: Rect, (width, height): (u16, u16)) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Draw the slider centered above a one-line help footer.
pub fn draw(slider: &Slider, keys: &KeyMap, frame: &mut Frame) {
    let chunks = Layout::vertical([
        Constraint::Min(0),    // slider
        Constraint::Length(1), // help
    ])
    .split(frame.area());

    frame.render_widget(slider, centered(chunks[0], rendered_size(slider)));

    let help = Paragraph::new(Span::styled(keys.help(), theme::STYLE_HELP));
    frame.render_widget(help, chunks[1]);
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the picker until the user confirms or cancels.
///
/// Sets up the terminal, renders the slider after every accepted key,
/// and restores the terminal before returning, on errors too.
pub fn run(slider: Slider, keys: &KeyMap) -> io::Result<Outcome> {
    install_panic_hook();
    let mut terminal = setup_terminal()?;
    info!(min = slider.min, max = slider.max, value = slider.value, "picker started");

    let outcome = event_loop(&mut terminal, slider, keys);

    restore_terminal()?;
    let outcome = outcome?;
    info!(?outcome, "picker finished");
    Ok(outcome)
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut slider: Slider,
    keys: &KeyMap,
) -> io::Result<Outcome> {
    loop {
        terminal.draw(|frame| draw(&slider, keys, frame))?;

        // Resize and mouse events only trigger a redraw
        let Event::Key(key) = event::read()? else {
            continue;
        };
        let Some(action) = map_key(keys, key) else {
            continue;
        };

        match handle(slider, &action) {
            Transition::Slider(next) => slider = next,
            Transition::Finish(outcome) => return Ok(outcome),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
