//! Explosion effects
//!
//! All explosions share one animation clock: when the interval elapses,
//! every live explosion moves to its next frame in lock-step.

use std::collections::VecDeque;

use glam::IVec2;

use super::word::ColorTag;
use crate::scale_trunc;

/// Explosion frame size (x = columns, y = rows)
pub const EXPLOSION_SIZE: IVec2 = IVec2::new(5, 3);

/// Animation frames, played in order; the last one is blank
pub const EXPLOSION_FRAMES: [[&str; 3]; 4] = [
    [" % % ", "% % %", " % % "],
    [" * * ", "* * *", " * * "],
    [" . . ", ". . .", " . . "],
    ["     ", "     ", "     "],
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Explosion {
    /// Top-left cell of the frame
    pub origin: IVec2,
    /// Index into `EXPLOSION_FRAMES`
    pub stage: usize,
    pub color: ColorTag,
}

impl Explosion {
    pub fn is_expired(&self) -> bool {
        self.stage >= EXPLOSION_FRAMES.len()
    }

    /// Rows of the current frame, or `None` once expired
    pub fn frame(&self) -> Option<&'static [&'static str; 3]> {
        let frames: &'static [[&'static str; 3]; 4] = &EXPLOSION_FRAMES;
        frames.get(self.stage)
    }
}

/// Oldest-first queue of live explosions
#[derive(Debug, Clone)]
pub struct ExplosionSystem {
    queue: VecDeque<Explosion>,
    timer: f32,
    interval: f32,
}

impl ExplosionSystem {
    pub fn new(interval: f32) -> Self {
        Self {
            queue: VecDeque::new(),
            timer: 0.0,
            interval,
        }
    }

    /// Start a new explosion centred on `center`
    pub fn create(&mut self, center: IVec2, color: ColorTag) {
        let origin = center - scale_trunc(EXPLOSION_SIZE, 0.5);
        self.queue.push_back(Explosion {
            origin,
            stage: 0,
            color,
        });
    }

    /// Accumulate time and, once the interval has passed, advance every
    /// explosion one frame. Returns whether a frame step happened.
    pub fn advance(&mut self, dt: f32) -> bool {
        self.timer += dt;
        if self.timer <= self.interval {
            return false;
        }
        self.timer = 0.0;

        for explosion in &mut self.queue {
            explosion.stage += 1;
        }
        // Retire from anywhere in the queue
        self.queue.retain(|e| !e.is_expired());
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = &Explosion> {
        self.queue.iter()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
