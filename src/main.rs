//! range-slider CLI
//!
//! Pick an integer from a bounded range with a terminal slider.

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::str::FromStr;

use clap::Parser;
use ratatui::style::Color;
use tracing_subscriber::filter::EnvFilter;

use range_slider::report::format_pick;
use range_slider::tui::run::run;
use range_slider::tui::state::{KeyMap, Slider};
use range_slider::tui::theme::BorderStyle;
use range_slider::types::{OutputFormat, Outcome, Pick};

/// Environment variable naming the log file when `--log-file` is not given.
const LOG_ENV: &str = "RANGE_SLIDER_LOG";

#[derive(Parser)]
#[command(name = "range-slider")]
#[command(about = "Pick an integer from a range with a terminal slider")]
#[command(version)]
#[command(allow_negative_numbers = true)]
struct Cli {
    #[command(flatten)]
    slider: SliderArgs,

    /// Output format for the picked value
    #[arg(long, value_enum, default_value = "human")]
    format: OutputFormatArg,

    /// Append logs to this file (default: $RANGE_SLIDER_LOG, else no logging)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(clap::Args)]
struct SliderArgs {
    /// Lowest selectable value [default: 0]
    #[arg(long)]
    min: Option<i64>,

    /// Highest selectable value [default: 10]
    #[arg(long)]
    max: Option<i64>,

    /// Amount moved per key press [default: 1]
    #[arg(long)]
    step: Option<i64>,

    /// Starting value [default: min]
    #[arg(long)]
    value: Option<i64>,

    /// Track width in cells [default: 30]
    #[arg(long)]
    width: Option<u16>,

    /// Handle glyph
    #[arg(long)]
    handle: Option<char>,

    /// Track glyph
    #[arg(long)]
    bar: Option<char>,

    /// Show min/max labels
    #[arg(long)]
    hi_lo: bool,

    /// Hide the min/max labels above the track
    #[arg(long)]
    no_top: bool,

    /// Hide the min/max labels below the track
    #[arg(long)]
    no_bottom: bool,

    /// Don't show the current value
    #[arg(long)]
    no_value: bool,

    /// Show the current value left of the track
    #[arg(long)]
    value_left: bool,

    /// Show the current value right of the track
    #[arg(long)]
    value_right: bool,

    /// Color the track only up to the handle
    #[arg(long)]
    fill: bool,

    /// Handle color (name or #rrggbb)
    #[arg(long, value_parser = parse_color)]
    handle_color: Option<Color>,

    /// Track color (name or #rrggbb)
    #[arg(long, value_parser = parse_color)]
    bar_color: Option<Color>,

    /// Label and value color (name or #rrggbb)
    #[arg(long, value_parser = parse_color)]
    text_color: Option<Color>,

    /// Border around the slider
    #[arg(long, value_enum, default_value = "plain")]
    border: BorderArg,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum BorderArg {
    None,
    Plain,
    Rounded,
    Double,
    Thick,
}

impl From<BorderArg> for BorderStyle {
    fn from(arg: BorderArg) -> Self {
        match arg {
            BorderArg::None => BorderStyle::None,
            BorderArg::Plain => BorderStyle::Plain,
            BorderArg::Rounded => BorderStyle::Rounded,
            BorderArg::Double => BorderStyle::Double,
            BorderArg::Thick => BorderStyle::Thick,
        }
    }
}

fn parse_color(s: &str) -> Result<Color, String> {
    Color::from_str(s).map_err(|_| format!("unknown color: {}", s))
}

impl SliderArgs {
    /// Overlay the given flags on the stock slider.
    fn into_slider(self) -> Slider {
        let stock = Slider::new();
        let min = self.min.unwrap_or(stock.min);

        Slider {
            min,
            max: self.max.unwrap_or(stock.max),
            step: self.step.unwrap_or(stock.step),
            value: self.value.unwrap_or(min),
            width: self.width.unwrap_or(stock.width),
            handle_glyph: self.handle.unwrap_or(stock.handle_glyph),
            bar_glyph: self.bar.unwrap_or(stock.bar_glyph),
            show_hi_lo: self.hi_lo,
            show_top: !self.no_top,
            show_bottom: !self.no_bottom,
            show_value: !self.no_value,
            show_value_left: self.value_left,
            show_value_right: self.value_right,
            filling: self.fill,
            handle_color: self.handle_color.unwrap_or(stock.handle_color),
            bar_color: self.bar_color.unwrap_or(stock.bar_color),
            text_color: self.text_color.or(stock.text_color),
            border: self.border.into(),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref());

    match cmd_pick(cli) {
        Ok(Outcome::Picked(_)) => ExitCode::SUCCESS,
        Ok(Outcome::Cancelled) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// LOGGING
// ============================================================================

/// Send logs to a file, if one was named. The TUI owns stdout and
/// stderr would bleed into the alternate screen, so there is no
/// fallback writer.
fn init_logging(path: Option<&Path>) {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => match std::env::var_os(LOG_ENV) {
            Some(p) => PathBuf::from(p),
            None => return,
        },
    };

    let file = match std::fs::OpenOptions::new().create(true).append(true).open(&path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Warning: cannot open log file {}: {}", path.display(), e);
            return;
        }
    };

    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_ansi(false)
        .with_writer(file)
        .init();
}

// ============================================================================
// PICK COMMAND
// ============================================================================

fn cmd_pick(cli: Cli) -> Result<Outcome, String> {
    let slider = cli.slider.into_slider();
    slider.validate().map_err(|e| e.to_string())?;

    let (min, max) = (slider.min, slider.max);
    let outcome = run(slider, &KeyMap::default()).map_err(|e| format!("Terminal error: {}", e))?;

    if let Outcome::Picked(value) = outcome {
        let pick = Pick { value, min, max };
        let out = format_pick(&pick, cli.format.into()).map_err(|e| e.to_string())?;
        println!("{}", out);
    }

    Ok(outcome)
}
