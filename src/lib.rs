//! Sky Typer - a terminal typing arcade game
//!
//! Core modules:
//! - `sim`: Clock-free simulation (word track, explosions, bee, session)
//! - `render`: Render surface abstraction and the crossterm terminal backend
//! - `script`: Text source (file loading and spawn scheduling)
//! - `settings`: Data-driven game tuning

pub mod error;
pub mod render;
pub mod script;
pub mod settings;
pub mod sim;

pub use error::GameError;
pub use settings::Settings;

use glam::IVec2;

/// Game configuration constants
pub mod consts {
    /// First grid row of the play field (rows above hold the HUD)
    pub const PLAY_TOP: i32 = 3;

    /// Smallest terminal the game will start in
    pub const MIN_COLS: u16 = 60;
    pub const MIN_ROWS: u16 = 24;

    /// Word scroll speed (rows per second, toward the top)
    pub const WORD_SPEED: i32 = 3;
    /// Bee flight speed (columns per second)
    pub const BEE_SPEED: i32 = 10;
    /// Seconds between explosion animation frames
    pub const EXPLOSION_INTERVAL: f32 = 0.1;

    /// Spawn gap between lines: MIN + uniform [0, VAR)
    pub const SPAWN_GAP_MIN: f32 = 2.0;
    pub const SPAWN_GAP_VAR: f32 = 5.0;

    /// Lines start this many columns left of the screen centre
    pub const TEXT_START_OFFSET: i32 = -19;
    /// Random horizontal jitter per line (± columns)
    pub const COLUMN_JITTER: i32 = 5;

    /// Host frame period in milliseconds
    pub const FRAME_MILLIS: u64 = 100;

    /// Shown when no text file can be read
    pub const FALLBACK_LINE: &str = "The quick brown fox jumps over the lazy dog.";
}

/// Scale an integer grid vector by a real factor, truncating toward zero.
///
/// Motion is integrated by accumulating time and stepping once the scaled
/// velocity reaches a whole cell, so a zero result means "not yet".
#[inline]
pub fn scale_trunc(v: IVec2, s: f32) -> IVec2 {
    IVec2::new((v.x as f32 * s) as i32, (v.y as f32 * s) as i32)
}
