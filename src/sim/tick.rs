//! Per-frame simulation step
//!
//! Order matters: words move and collide before the keystroke is applied,
//! so a word that has just failed can no longer be typed.

use super::state::{GameSession, SessionEvents};

/// Input for a single frame
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    /// The key pressed this frame, if any
    pub key: Option<char>,
}

/// Advance the session by `dt` seconds of wall-clock time
pub fn tick(session: &mut GameSession, input: &FrameInput, dt: f32) {
    if session.is_finished() {
        return;
    }

    session.elapsed += dt;

    let ceiling = session
        .bee
        .in_motion()
        .then(|| session.bee.trajectory_row());

    let mut events = SessionEvents {
        score: &mut session.score,
        explosions: &mut session.explosions,
    };
    session
        .track
        .update(dt, session.elapsed, ceiling, &session.terrain, &mut events);
    session.track.resolve_input(input.key, &mut events);

    update_bee(session, dt);
    session.explosions.advance(dt);

    if session.is_finished() {
        log::info!("All words resolved, final score {}", session.score);
    }
}

/// Fly the bee, park it once it leaves the grid, and relaunch it when its
/// next spawn time comes round.
fn update_bee(session: &mut GameSession, dt: f32) {
    if !session.settings().bee_enabled {
        return;
    }

    session.bee.advance(dt);

    if session.bee.in_motion() && session.bee.is_finished() {
        session.bee.stop();
        session.bee_spawn = session.elapsed + session.spawn_gap();
        log::info!("Bee landed, next flight at {:.1}s", session.bee_spawn);
    }

    if !session.bee.in_motion() && session.elapsed > session.bee_spawn {
        session.bee.start(&mut session.rng);
        log::info!("Bee took off at {:.1}s", session.elapsed);
    }
}
