//! Sky Typer entry point
//!
//! Sets up logging, settings and the terminal, then runs the frame loop.

use std::fs::File;
use std::path::PathBuf;
use std::time::Instant;

use rand::Rng;

use sky_typer::consts::{MIN_COLS, MIN_ROWS};
use sky_typer::error::Result;
use sky_typer::render::{FrameBuffer, KeyInput, Terminal, terminal};
use sky_typer::settings::SETTINGS_FILE;
use sky_typer::sim::{GameSession, Terrain};
use sky_typer::{GameError, Settings, script};

const LOG_FILE: &str = "sky-typer.log";

/// The terminal is the game screen, so logs go to a file and only when
/// `RUST_LOG` asks for them.
fn init_logging() {
    if std::env::var_os("RUST_LOG").is_none() {
        return;
    }
    let Ok(file) = File::create(LOG_FILE) else {
        return;
    };
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
}

fn run() -> Result<()> {
    let mut settings = Settings::load(&PathBuf::from(SETTINGS_FILE))?;
    if let Some(path) = std::env::args_os().nth(1) {
        settings.text_path = PathBuf::from(path);
    }

    let size = terminal::size()?;
    if size.x < MIN_COLS as i32 || size.y < MIN_ROWS as i32 {
        return Err(GameError::TerminalTooSmall {
            cols: size.x as u16,
            rows: size.y as u16,
            min_cols: MIN_COLS,
            min_rows: MIN_ROWS,
        });
    }

    let terrain = match &settings.background_path {
        Some(path) => script::load_background(path)?,
        None => Terrain::sky(),
    };

    let seed = settings.seed.unwrap_or_else(|| rand::rng().random());
    let mut session = GameSession::new(terrain, size, &settings, seed);
    session.load_text(&settings.text_path);

    let mut term = Terminal::enter()?;
    let mut frame = FrameBuffer::new(size);
    let period = settings.frame_period();
    let mut last = Instant::now();

    log::info!("Game started");
    loop {
        let key = match terminal::poll_key()? {
            KeyInput::Quit => break,
            KeyInput::Char(c) => Some(c),
            KeyInput::None => None,
        };

        let now = Instant::now();
        let dt = now.duration_since(last).as_secs_f32();
        last = now;

        session.update(dt, key, &mut frame);
        term.present(&frame)?;

        std::thread::sleep(period);
    }
    log::info!("Exit with score {}", session.current_score());
    Ok(())
}

fn main() {
    init_logging();

    if let Err(e) = run() {
        eprintln!("Cannot init game. {e}");
        std::process::exit(1);
    }
}
