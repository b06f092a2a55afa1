use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use snaze::config::{
    DEFAULT_FOOD_QUOTA, DEFAULT_LIVES, DEFAULT_TICK_INTERVAL_MS, FRAME_INTERVAL_MS,
    LEVEL_BANNER_MS, THEMES, Theme, theme_by_name,
};
use snaze::game::{GameState, TickResult};
use snaze::input::{self, SessionInput};
use snaze::level::{self, ParsedLevel};
use snaze::pathfinder;
use snaze::renderer::{self, SessionPhase};
use snaze::terminal_runtime::{self, SessionTerminal, TerminalSession};
use snaze::ui::hud::HudInfo;

#[derive(Debug, Parser)]
#[command(name = "snaze", version, about = "Self-driving maze Snake for the terminal")]
struct Cli {
    /// Lives the snake has in each level.
    #[arg(long, default_value_t = DEFAULT_LIVES, value_parser = clap::value_parser!(u32).range(1..))]
    lives: u32,

    /// Food pellets required to clear a level.
    #[arg(long, default_value_t = DEFAULT_FOOD_QUOTA, value_parser = clap::value_parser!(u32).range(1..))]
    food: u32,

    /// Directory with level files; the bundled levels are played when omitted.
    #[arg(long)]
    levels: Option<PathBuf>,

    /// Milliseconds between simulation ticks.
    #[arg(long = "tick-ms", default_value_t = DEFAULT_TICK_INTERVAL_MS, value_parser = clap::value_parser!(u64).range(1..))]
    tick_ms: u64,

    /// Food-placement seed; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Color theme.
    #[arg(long, default_value = "classic")]
    theme: String,
}

/// How the whole session ended.
#[derive(Debug)]
enum SessionOutcome {
    /// Every level was cleared.
    Victory,
    /// Lives ran out; the session stops without attempting later levels.
    Defeated { level_name: String },
    /// The user quit early.
    Quit,
}

/// How one level ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
enum LevelOutcome {
    Cleared,
    Defeated,
    Quit,
}

fn main() -> io::Result<ExitCode> {
    let cli = Cli::parse();

    let Some(theme) = theme_by_name(&cli.theme) else {
        let names: Vec<&str> = THEMES.iter().map(|theme| theme.name).collect();
        eprintln!(
            "Error: unknown theme '{}'; available: {}",
            cli.theme,
            names.join(", ")
        );
        return Ok(ExitCode::from(2));
    };

    let levels = load_levels(&cli)?;
    if levels.is_empty() {
        eprintln!("Error: no playable levels found");
        return Ok(ExitCode::FAILURE);
    }

    terminal_runtime::install_panic_hook();
    let mut session = TerminalSession::enter()?;
    let outcome = run(session.terminal_mut(), &cli, theme, levels)?;
    drop(session);

    match outcome {
        SessionOutcome::Victory => println!("CONGRATULATIONS, anaconda WON! Thanks for playing!"),
        SessionOutcome::Defeated { level_name } => println!("Game over at level: {level_name}"),
        SessionOutcome::Quit => {}
    }

    Ok(ExitCode::SUCCESS)
}

/// Loads and validates all level files up front, before the terminal enters
/// raw mode, so parse warnings stay readable. Malformed levels are skipped.
fn load_levels(cli: &Cli) -> io::Result<Vec<(String, ParsedLevel)>> {
    let sources = match &cli.levels {
        Some(dir) => level::levels_from_dir(dir)?,
        None => level::builtin_levels(),
    };

    let mut levels = Vec::with_capacity(sources.len());
    for source in sources {
        match level::parse_level(&source.text) {
            Ok(parsed) => levels.push((source.name, parsed)),
            Err(error) => eprintln!("Warning: skipping level {}: {error}", source.name),
        }
    }

    Ok(levels)
}

fn run(
    terminal: &mut SessionTerminal,
    cli: &Cli,
    theme: &Theme,
    levels: Vec<(String, ParsedLevel)>,
) -> io::Result<SessionOutcome> {
    let level_count = levels.len();
    let tick_interval = Duration::from_millis(cli.tick_ms);
    let mut finale: Option<(String, GameState)> = None;

    for (index, (name, parsed)) in levels.into_iter().enumerate() {
        let mut state = match cli.seed {
            Some(seed) => {
                GameState::new_with_seed(parsed, cli.lives, seed.wrapping_add(index as u64))
            }
            None => GameState::new(parsed, cli.lives),
        };

        let info = HudInfo {
            level_name: &name,
            level_number: index + 1,
            level_count,
            food_quota: cli.food,
            theme,
        };

        let outcome = play_level(
            terminal,
            &mut state,
            &info,
            tick_interval,
            index == 0,
        )?;

        match outcome {
            LevelOutcome::Cleared => finale = Some((name, state)),
            LevelOutcome::Defeated => {
                dismiss_screen(terminal, &state, SessionPhase::GameOver, &info)?;
                return Ok(SessionOutcome::Defeated { level_name: name });
            }
            LevelOutcome::Quit => return Ok(SessionOutcome::Quit),
        }
    }

    if let Some((name, state)) = &finale {
        let info = HudInfo {
            level_name: name,
            level_number: level_count,
            level_count,
            food_quota: cli.food,
            theme,
        };
        dismiss_screen(terminal, state, SessionPhase::Victory, &info)?;
    }

    Ok(SessionOutcome::Victory)
}

/// Runs one level to completion: render, poll flow-control keys, and on each
/// tick let the pathfinder choose before the engine moves.
fn play_level(
    terminal: &mut SessionTerminal,
    state: &mut GameState,
    info: &HudInfo<'_>,
    tick_interval: Duration,
    wait_for_start: bool,
) -> io::Result<LevelOutcome> {
    let mut phase = if wait_for_start {
        SessionPhase::Ready
    } else {
        SessionPhase::Running
    };
    let mut last_tick = Instant::now();
    let mut banner_deadline: Option<Instant> = None;

    loop {
        terminal.draw(|frame| renderer::render(frame, state, phase, info))?;

        if let Some(event) = input::poll_input()? {
            match (phase, event) {
                (_, SessionInput::Quit) => return Ok(LevelOutcome::Quit),
                (SessionPhase::Ready, SessionInput::Confirm) => {
                    phase = SessionPhase::Running;
                    last_tick = Instant::now();
                }
                (SessionPhase::Running, SessionInput::Pause) => phase = SessionPhase::Paused,
                (SessionPhase::Paused, SessionInput::Pause) => {
                    phase = SessionPhase::Running;
                    last_tick = Instant::now();
                }
                (SessionPhase::LevelComplete, SessionInput::Confirm) => {
                    return Ok(LevelOutcome::Cleared);
                }
                _ => {}
            }
        }

        if phase == SessionPhase::LevelComplete
            && banner_deadline.is_some_and(|deadline| Instant::now() >= deadline)
        {
            return Ok(LevelOutcome::Cleared);
        }

        if phase == SessionPhase::Running && last_tick.elapsed() >= tick_interval {
            let direction = pathfinder::next_direction(state);
            match state.tick(direction) {
                TickResult::AteFood if state.food_eaten >= info.food_quota => {
                    phase = SessionPhase::LevelComplete;
                    banner_deadline = Some(Instant::now() + Duration::from_millis(LEVEL_BANNER_MS));
                }
                TickResult::GameOver => return Ok(LevelOutcome::Defeated),
                TickResult::AteFood | TickResult::Moved | TickResult::Collided => {}
            }
            last_tick = Instant::now();
        }

        thread::sleep(Duration::from_millis(FRAME_INTERVAL_MS));
    }
}

/// Holds a terminal screen (game over, victory) until the user dismisses it.
fn dismiss_screen(
    terminal: &mut SessionTerminal,
    state: &GameState,
    phase: SessionPhase,
    info: &HudInfo<'_>,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| renderer::render(frame, state, phase, info))?;

        if let Some(event) = input::poll_input()? {
            match event {
                SessionInput::Quit | SessionInput::Confirm => return Ok(()),
                SessionInput::Pause => {}
            }
        }

        thread::sleep(Duration::from_millis(FRAME_INTERVAL_MS));
    }
}
