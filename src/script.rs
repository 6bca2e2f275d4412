//! Text source
//!
//! Turns a text file into `(line, spawn_time)` pairs for the session, and
//! loads optional background art.

use std::fs;
use std::path::Path;

use rand::Rng;

use crate::consts::{FALLBACK_LINE, PLAY_TOP};
use crate::error::{GameError, Result};
use crate::settings::Settings;
use crate::sim::{Terrain, tokens};

/// The single line used when no text can be read
pub fn fallback() -> Vec<(String, f32)> {
    vec![(FALLBACK_LINE.to_string(), 0.0)]
}

/// Assign spawn times to `lines`. The first line appears at 0 and each
/// following line a random gap after the previous one.
pub fn schedule<I, S, R>(lines: I, settings: &Settings, rng: &mut R) -> Vec<(String, f32)>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
    R: Rng + ?Sized,
{
    let mut time = 0.0;
    let mut out = Vec::new();
    for (i, line) in lines.into_iter().enumerate() {
        if i > 0 {
            time += settings.spawn_gap_min;
            if settings.spawn_gap_var > 0.0 {
                time += rng.random_range(0.0..settings.spawn_gap_var);
            }
        }
        out.push((line.into(), time));
    }
    out
}

/// Read and schedule the text at `path`.
///
/// Falls back to a single built-in line when the file cannot be read or
/// holds no words at all.
pub fn load_script<R: Rng + ?Sized>(
    path: &Path,
    settings: &Settings,
    rng: &mut R,
) -> Vec<(String, f32)> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            log::warn!("Cannot read {}: {}; using fallback text", path.display(), e);
            return fallback();
        }
    };

    if text.lines().all(|line| tokens(line).next().is_none()) {
        log::warn!("{} has no words; using fallback text", path.display());
        return fallback();
    }

    let script = schedule(text.lines(), settings, rng);
    log::info!("Loaded {} lines from {}", script.len(), path.display());
    script
}

/// Background art from a text file, placed at the top of the play field
pub fn load_background(path: &Path) -> Result<Terrain> {
    let text = fs::read_to_string(path).map_err(|source| GameError::Background {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Terrain::from_text(PLAY_TOP, &text))
}
