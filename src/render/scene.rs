//! Draws a game session onto a surface
//!
//! Layers, back to front: HUD, terrain, bee, explosions, words. The cursor
//! ends on the next character to type.

use glam::IVec2;

use super::{CellStyle, Surface};
use crate::sim::{
    BEE_SPRITE, ColorTag, EscortSprite, ExplosionSystem, GameSession, Terrain, Word, WordState,
    WordTrack,
};

pub const EXIT_HINT: &str = "Press ESC to exit.";

/// Redraw the whole session
pub fn draw_session(session: &GameSession, surface: &mut impl Surface) {
    surface.clear();
    draw_hud(session.score, surface);
    draw_terrain(&session.terrain, session.grid().x, surface);

    if session.is_finished() {
        let grid = session.grid();
        let text = format!("Finished! Score: {}", session.score);
        surface.put_str(grid / 2, &text, CellStyle::PLAIN);
        surface.set_cursor(None);
        return;
    }

    draw_bee(&session.bee, surface);
    draw_explosions(&session.explosions, surface);
    draw_words(&session.track, surface);
}

fn draw_hud(score: u64, surface: &mut impl Surface) {
    surface.put_str(IVec2::new(0, 0), EXIT_HINT, CellStyle::PLAIN);
    surface.put_str(
        IVec2::new(0, 1),
        &format!("Score: {score:>10}"),
        CellStyle::PLAIN,
    );
}

/// Terrain is tiled across the full width
fn draw_terrain(terrain: &Terrain, width: i32, surface: &mut impl Surface) {
    for row in 0..terrain.height() as i32 {
        let y = terrain.top() + row;
        for x in 0..width {
            let pos = IVec2::new(x, y);
            if let Some(ch) = terrain.cell(pos) {
                surface.put(pos, ch, CellStyle::PLAIN);
            }
        }
    }
}

fn draw_bee(bee: &EscortSprite, surface: &mut impl Surface) {
    if !bee.in_motion() {
        return;
    }
    let style = CellStyle::color(ColorTag::Bee);
    for (i, line) in BEE_SPRITE.iter().enumerate() {
        surface.put_str(bee.pos() + IVec2::new(0, i as i32), line, style);
    }
}

fn draw_explosions(explosions: &ExplosionSystem, surface: &mut impl Surface) {
    for explosion in explosions.iter() {
        let Some(frame) = explosion.frame() else {
            continue;
        };
        let style = CellStyle::color(explosion.color);
        for (i, line) in frame.iter().enumerate() {
            surface.put_str(explosion.origin + IVec2::new(0, i as i32), line, style);
        }
    }
}

fn draw_words(track: &WordTrack, surface: &mut impl Surface) {
    for word in &track.words()[track.current_index().min(track.words().len())..] {
        draw_word(word, surface);
    }

    let cursor = track
        .current()
        .filter(|w| w.state().is_active())
        .map(|w| w.pos + IVec2::new(w.typed as i32, 0));
    surface.set_cursor(cursor);
}

fn draw_word(word: &Word, surface: &mut impl Surface) {
    let state = word.state();
    match state {
        WordState::Init => surface.put_str(word.pos, &word.text, CellStyle::PLAIN),
        WordState::Error => {
            surface.put_str(word.pos, &word.text, CellStyle::color(state.color_tag()).bold())
        }
        WordState::InProgress => {
            let typed = CellStyle::color(state.color_tag()).bold();
            for (i, ch) in word.text.chars().enumerate() {
                let style = if i < word.typed { typed } else { CellStyle::PLAIN };
                surface.put(word.pos + IVec2::new(i as i32, 0), ch, style);
            }
        }
        WordState::Hidden | WordState::Complete | WordState::Failed => {}
    }
}
