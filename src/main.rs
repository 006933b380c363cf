mod clock;
mod color;
mod controls;
mod descriptor;
mod graphics;
mod layout;
mod math;
mod renderer;
mod screen;
mod selection;
mod state;
mod widget;

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::{cursor, event, execute, terminal};
use log::LevelFilter;

use crate::clock::AnimationClock;
use crate::layout::View;
use crate::selection::{CircleColor, CircleSize, Selection, SelectionState, Target};
use crate::state::AppState;
use crate::widget::{Action, OrbitWidget};

/// How long to wait for input while the animation is stopped
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Three circles, two of them orbiting, customizable from a row of dropdowns
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Circle the initial selection applies to
    #[arg(long, value_enum, default_value_t = Target::Primary)]
    target: Target,

    /// Initial color of the selected circle
    #[arg(long, value_enum, default_value_t = CircleColor::Red)]
    color: CircleColor,

    /// Initial size of the selected circle
    #[arg(long, value_enum, default_value_t = CircleSize::Medium)]
    size: CircleSize,

    /// Pixels per density-independent unit [default: canvas height / 640]
    #[arg(long)]
    density: Option<f64>,

    /// Part of the screen to show
    #[arg(long, value_enum, default_value_t = View::Full)]
    view: View,

    /// Start with the debug overlay shown
    #[arg(long)]
    debug: bool,

    /// Where to write the log [default: <temp dir>/planets.log]
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log verbosity (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

impl Args {
    fn validate(&self) -> Result<()> {
        if let Some(density) = self.density {
            if !density.is_finite() || density <= 0.0 {
                bail!("--density must be a positive number, got {density}");
            }
        }
        Ok(())
    }

    fn selection(&self) -> Selection {
        Selection {
            target: self.target,
            color: self.color,
            size: self.size,
        }
    }
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    args.validate()?;
    init_logger(&args);

    let mut data = AppState {
        selection: SelectionState::new(args.selection()),
        clock: AnimationClock::new(),
        density: args.density,
        view: args.view,
        debug: args.debug,
        paused: false,
    };

    let (width, height) = terminal_size()?;
    log::info!(
        "starting {} {}: {}x{} view={:?} selection={} density={:?}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        width,
        height,
        data.view,
        data.selection.get(),
        data.density,
    );

    let mut widget = OrbitWidget::new(&mut data, width, height);
    let mut stdout = io::stdout();

    terminal::enable_raw_mode().context("Failed to enable raw mode")?;
    execute!(
        stdout,
        terminal::EnterAlternateScreen,
        cursor::Hide,
        event::EnableMouseCapture,
        event::EnableFocusChange,
        terminal::Clear(terminal::ClearType::All),
    )?;

    let result = run_loop(&mut stdout, &mut widget, &mut data);

    // Always restore terminal state.
    let _ = execute!(
        stdout,
        event::DisableFocusChange,
        event::DisableMouseCapture,
        cursor::Show,
        terminal::LeaveAlternateScreen,
    );
    let _ = terminal::disable_raw_mode();
    let _ = stdout.flush();

    log::info!("exiting after {} ticks", data.clock.ticks);
    result
}

fn run_loop(stdout: &mut io::Stdout, widget: &mut OrbitWidget, data: &mut AppState) -> Result<()> {
    widget.activate(Instant::now(), data);

    loop {
        widget.tick(Instant::now(), data);
        widget.sync_selection();
        if widget.needs_paint() {
            widget.paint(data);
            widget.present(stdout)?;
        }

        let timeout = widget.ticker().timeout(Instant::now()).unwrap_or(IDLE_POLL);
        if event::poll(timeout)? {
            let ev = event::read()?;
            if widget.event(&ev, data) == Action::Quit {
                break;
            }
        }
    }

    widget.deactivate();
    Ok(())
}

/// Terminal size as (columns, rows)
fn terminal_size() -> Result<(u16, u16)> {
    if let Some(size) = termsize::get() {
        return Ok((size.cols, size.rows));
    }
    terminal::size().context("Failed to query terminal size")
}

/// The terminal belongs to the UI, so log records go to a file.
fn init_logger(args: &Args) {
    if args.log_level == LevelFilter::Off {
        return;
    }

    let path = args
        .log_file
        .clone()
        .unwrap_or_else(|| std::env::temp_dir().join("planets.log"));
    let log_file = match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("warning: could not open log file {}: {e}", path.display());
            return;
        }
    };

    if let Err(e) =
        simplelog::WriteLogger::init(args.log_level, simplelog::Config::default(), log_file)
    {
        eprintln!("warning: could not initialize logger: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_initial_selection() {
        let args = Args::try_parse_from(["planets"]).unwrap();
        assert_eq!(args.selection(), Selection::default());
        assert_eq!(args.view, View::Full);
        assert_eq!(args.log_level, LevelFilter::Info);
        assert!(args.density.is_none());
        assert!(args.validate().is_ok());
    }

    #[test]
    fn parses_selection_flags_and_short_sizes() {
        let args = Args::try_parse_from([
            "planets", "--target", "fast", "--color", "none", "--size", "s", "--view", "canvas",
        ])
        .unwrap();
        assert_eq!(
            args.selection(),
            Selection {
                target: Target::Fast,
                color: CircleColor::None,
                size: CircleSize::Small,
            }
        );
        assert_eq!(args.view, View::Canvas);
    }

    #[test]
    fn rejects_unknown_colors() {
        assert!(Args::try_parse_from(["planets", "--color", "purple"]).is_err());
    }

    #[test]
    fn rejects_non_positive_density() {
        let args = Args::try_parse_from(["planets", "--density", "0"]).unwrap();
        assert!(args.validate().is_err());
        let args = Args::try_parse_from(["planets", "--density", "1.5"]).unwrap();
        assert!(args.validate().is_ok());
    }

    #[test]
    fn parses_log_level() {
        let args = Args::try_parse_from(["planets", "--log-level", "debug"]).unwrap();
        assert_eq!(args.log_level, LevelFilter::Debug);
    }
}
