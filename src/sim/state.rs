//! Game session: owns every piece of simulation state
//!
//! All randomness flows through the session RNG, so a seed plus the same
//! frame inputs reproduces a run exactly.

use std::path::Path;

use glam::IVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::bee::{BEE_SIZE, EscortSprite};
use super::explosion::ExplosionSystem;
use super::terrain::Terrain;
use super::tick::{FrameInput, tick};
use super::track::{TrackEvents, WordTrack};
use super::word::ColorTag;
use crate::render::{Surface, draw_session};
use crate::script;
use crate::settings::Settings;

/// Rows between the bottom of the terrain and the bee's start row
const BEE_CLEARANCE: i32 = 2;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameSession {
    /// Score, only ever increases
    pub score: u64,
    /// Simulation seconds since the session started
    pub elapsed: f32,
    /// Background used for collision and redraw
    pub terrain: Terrain,
    pub track: WordTrack,
    pub explosions: ExplosionSystem,
    pub bee: EscortSprite,
    /// When the parked bee takes off next
    pub bee_spawn: f32,
    /// Grid size (x = columns, y = rows)
    grid: IVec2,
    settings: Settings,
    pub(crate) rng: Pcg32,
}

impl GameSession {
    /// Create a session on a `grid` of columns x rows over `terrain`
    pub fn new(terrain: Terrain, grid: IVec2, settings: &Settings, seed: u64) -> Self {
        let text_start = IVec2::new(grid.x / 2 + settings.text_start_offset, grid.y);
        let track = WordTrack::new(
            text_start,
            IVec2::new(0, -settings.word_speed),
            grid.y,
            terrain.top(),
        );

        let bee_start = IVec2::new(
            -BEE_SIZE.x,
            terrain.top() + terrain.height() as i32 + BEE_CLEARANCE,
        );
        let bee = EscortSprite::new(bee_start, IVec2::new(settings.bee_speed, 0), grid);

        let mut session = Self {
            score: 0,
            elapsed: 0.0,
            terrain,
            track,
            explosions: ExplosionSystem::new(settings.explosion_interval),
            bee,
            bee_spawn: 0.0,
            grid,
            settings: settings.clone(),
            rng: Pcg32::seed_from_u64(seed),
        };
        session.bee_spawn = session.spawn_gap();
        log::info!("Session {}x{} seeded with {}", grid.x, grid.y, seed);
        session
    }

    /// Queue lines of text, each with the time it should appear
    pub fn load_lines<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = (S, f32)>,
        S: AsRef<str>,
    {
        let jitter = self.settings.column_jitter;
        for (line, spawn_time) in lines {
            let offset = if jitter > 0 {
                self.rng.random_range(-jitter..jitter)
            } else {
                0
            };
            self.track.add_line(line.as_ref(), spawn_time, offset);
        }
        log::info!("Loaded {} words", self.track.words().len());
    }

    /// Read the text at `path` and queue its lines. Spawn gaps come from
    /// the session RNG, after the bee's first take-off time.
    pub fn load_text(&mut self, path: &Path) {
        let lines = script::load_script(path, &self.settings, &mut self.rng);
        self.load_lines(lines);
    }

    /// Advance one frame and draw it
    pub fn update(&mut self, dt: f32, key: Option<char>, surface: &mut impl Surface) {
        tick(self, &FrameInput { key }, dt);
        draw_session(self, surface);
    }

    /// Every word has been typed or lost
    pub fn is_finished(&self) -> bool {
        self.track.is_finished()
    }

    pub fn current_score(&self) -> u64 {
        self.score
    }

    pub fn grid(&self) -> IVec2 {
        self.grid
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Random pause before the next bee flight
    pub(crate) fn spawn_gap(&mut self) -> f32 {
        let var = self.settings.spawn_gap_var;
        let extra = if var > 0.0 {
            self.rng.random_range(0.0..var)
        } else {
            0.0
        };
        self.settings.spawn_gap_min + extra
    }
}

/// The track's view of the session: score and explosions only
pub(crate) struct SessionEvents<'a> {
    pub score: &'a mut u64,
    pub explosions: &'a mut ExplosionSystem,
}

impl TrackEvents for SessionEvents<'_> {
    fn add_score(&mut self, amount: u64) {
        *self.score += amount;
    }

    fn spawn_explosion(&mut self, center: IVec2, color: ColorTag) {
        self.explosions.create(center, color);
    }
}
