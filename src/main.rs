use std::io;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;

use gridsnake::config::{FRAME_INTERVAL_MS, GridSize, MIN_TICK_INTERVAL_MS};
use gridsnake::game::{GameState, StepError};
use gridsnake::input::{self, Direction, GameInput};
use gridsnake::renderer;
use gridsnake::runtime::{TerminalSession, install_panic_hook};
use gridsnake::settings::{Settings, load_settings};
use gridsnake::theme::{self, Theme};

/// Below five columns the canonical reset pose puts head and food on the
/// same cell.
const MIN_GRID_EXTENT: u16 = 5;

#[derive(Debug, Parser)]
#[command(version, about = "Grid-based snake in the terminal")]
struct Cli {
    /// Board width in cells.
    #[arg(long)]
    width: Option<u16>,

    /// Board height in cells.
    #[arg(long)]
    height: Option<u16>,

    /// Milliseconds between simulation ticks.
    #[arg(long = "tick-ms")]
    tick_ms: Option<u64>,

    /// Color theme name.
    #[arg(long)]
    theme: Option<String>,

    /// Seed for deterministic food placement.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    let settings = match load_settings() {
        Ok(settings) => settings,
        Err(error) => {
            eprintln!("warning: ignoring unreadable settings file: {error}");
            Settings::default()
        }
    };

    let size = GridSize {
        width: cli.width.unwrap_or(settings.width).max(MIN_GRID_EXTENT),
        height: cli.height.unwrap_or(settings.height).max(MIN_GRID_EXTENT),
    };
    let tick_interval = Duration::from_millis(
        cli.tick_ms
            .unwrap_or(settings.tick_interval_ms)
            .max(MIN_TICK_INTERVAL_MS),
    );
    let theme_name = cli.theme.as_deref().unwrap_or(&settings.theme);
    let theme = match theme::theme_by_name(theme_name) {
        Some(theme) => theme,
        None => {
            eprintln!("warning: unknown theme {theme_name:?}, using {}", theme::THEMES[0].name);
            &theme::THEMES[0]
        }
    };

    let state = match cli.seed {
        Some(seed) => GameState::new_with_seed(size, seed),
        None => GameState::new(size),
    };

    install_panic_hook();
    let mut session = TerminalSession::enter()?;
    let fatal = run(&mut session, state, theme, tick_interval)?;
    drop(session);

    if let Some(error) = fatal {
        eprintln!("session ended: {error}");
    }
    Ok(())
}

/// Drives the simulation: one `step` per tick interval, rendering and
/// input polling at frame rate in between.
///
/// Returns `Ok(Some(_))` when a step failed fatally and the loop stopped.
fn run(
    session: &mut TerminalSession,
    mut state: GameState,
    theme: &Theme,
    tick_interval: Duration,
) -> io::Result<Option<StepError>> {
    // Travel direction actually fed to the core, and the most recent
    // request from the keyboard. Reversal requests are filtered here, at
    // the latch, never inside the core.
    let mut travel = Direction::Right;
    let mut requested = Direction::Right;
    let mut last_tick = Instant::now();

    loop {
        session
            .terminal_mut()
            .draw(|frame| renderer::render(frame, &state, theme))?;

        if let Some(event) = input::poll_input()? {
            match event {
                GameInput::Quit => return Ok(None),
                GameInput::Restart if !state.is_alive() => {
                    state.reset();
                    travel = Direction::Right;
                    requested = Direction::Right;
                    last_tick = Instant::now();
                }
                GameInput::Restart => {}
                GameInput::Direction(direction) => requested = direction,
            }
        }

        if state.is_alive() && last_tick.elapsed() >= tick_interval {
            if input::direction_change_is_valid(travel, requested) {
                travel = requested;
            }

            if let Err(error) = state.step(travel) {
                return Ok(Some(error));
            }
            last_tick = Instant::now();
        }

        thread::sleep(Duration::from_millis(FRAME_INTERVAL_MS));
    }
}
