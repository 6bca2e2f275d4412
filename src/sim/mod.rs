//! Simulation module
//!
//! All gameplay logic lives here. This module never reads a clock or touches
//! the terminal:
//! - Time arrives as a per-frame `dt`
//! - Seeded RNG only
//! - Drawing goes through `render::Surface`

pub mod bee;
pub mod explosion;
pub mod state;
pub mod terrain;
pub mod tick;
pub mod tokenizer;
pub mod track;
pub mod word;

pub use bee::{BEE_SIZE, BEE_SPRITE, EscortSprite};
pub use explosion::{EXPLOSION_FRAMES, Explosion, ExplosionSystem};
pub use state::GameSession;
pub use terrain::{SKY_SPRITE, Terrain};
pub use tick::{FrameInput, tick};
pub use tokenizer::{Token, Tokens, tokens};
pub use track::{TrackEvents, WordTrack, score_multiplier};
pub use word::{ColorTag, Word, WordState};
