//! The bee: a decorative sprite that flies across the sky
//!
//! While it flies, words may not rise above its trajectory row (see
//! `WordTrack::update`), so text queues up underneath it.

use glam::IVec2;
use rand::Rng;

use crate::scale_trunc;

/// Sprite size (x = columns, y = rows)
pub const BEE_SIZE: IVec2 = IVec2::new(8, 4);

pub const BEE_SPRITE: [&str; 4] = [
    "   __   ",
    "  (__\\_ ",
    "-{{_{|8)",
    "  (__/  ",
];

/// Vertical bobbing offsets, one entry per step
pub const FLAIR: [i32; 15] = [0, -1, -1, -1, -1, -1, -1, 0, 1, 1, 1, 1, 1, 0, 0];

/// Rows between the bottom of the sprite and the word ceiling
const TRAJECTORY_MARGIN: i32 = 2;

#[derive(Debug, Clone)]
pub struct EscortSprite {
    /// Where each flight begins
    start: IVec2,
    pos: IVec2,
    vel: IVec2,
    /// Index into `FLAIR`
    flair: usize,
    /// Time accumulated since the last step
    timer: f32,
    paused: bool,
    /// Grid size (x = columns, y = rows)
    grid: IVec2,
}

impl EscortSprite {
    /// A parked bee. Call `start` to launch it.
    pub fn new(start: IVec2, vel: IVec2, grid: IVec2) -> Self {
        Self {
            start,
            pos: start,
            vel,
            flair: 0,
            timer: 0.0,
            paused: true,
            grid,
        }
    }

    /// Reset to the start position with a fresh bobbing phase and fly
    pub fn start<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.pos = self.start;
        self.flair = rng.random_range(0..FLAIR.len());
        self.timer = 0.0;
        self.paused = false;
    }

    pub fn stop(&mut self) {
        self.paused = true;
    }

    pub fn in_motion(&self) -> bool {
        !self.paused
    }

    pub fn pos(&self) -> IVec2 {
        self.pos
    }

    /// Completely outside the grid in any direction
    pub fn is_finished(&self) -> bool {
        self.pos.y < -BEE_SIZE.y
            || self.pos.y > self.grid.y - 1
            || self.pos.x < -BEE_SIZE.x
            || self.pos.x > self.grid.x - 1
    }

    /// Words may not rise to or above this row while the bee flies
    pub fn trajectory_row(&self) -> i32 {
        self.start.y + TRAJECTORY_MARGIN + BEE_SIZE.y
    }

    /// Accumulate time and step once a whole cell of motion is due.
    /// Returns whether the bee moved.
    pub fn advance(&mut self, dt: f32) -> bool {
        if self.paused {
            return false;
        }

        self.timer += dt;
        let step = scale_trunc(self.vel, self.timer);
        if step == IVec2::ZERO {
            return false;
        }
        self.timer = 0.0;

        self.pos += step;
        self.flair = (self.flair + 1) % FLAIR.len();
        self.pos.y = self.start.y + FLAIR[self.flair];
        true
    }
}
