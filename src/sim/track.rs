//! The word track: spawning, scrolling, collision and typing
//!
//! Words are stored in spawn order. Exactly one of them is "current": the
//! word the next keystroke is checked against. The current index only ever
//! moves forward, past words that are complete or failed.

use glam::IVec2;

use super::terrain::Terrain;
use super::tokenizer::tokens;
use super::word::{ColorTag, Word, WordState};
use crate::scale_trunc;

/// What the track may ask of its owner
pub trait TrackEvents {
    fn add_score(&mut self, amount: u64);
    fn spawn_explosion(&mut self, center: IVec2, color: ColorTag);
}

/// Points multiplier for finishing a word at `row` on a grid of `rows`.
///
/// Words rise from the bottom, so the earlier a word is typed the more it
/// is worth.
pub fn score_multiplier(row: i32, rows: i32) -> u64 {
    let row = row as f32;
    let rows = rows as f32;
    if row > rows * 0.75 {
        10
    } else if row > rows * 0.5 {
        5
    } else if row > rows * 0.25 {
        2
    } else {
        1
    }
}

#[derive(Debug, Clone)]
pub struct WordTrack {
    words: Vec<Word>,
    current: usize,
    /// Shared velocity of every word (cells per second)
    vel: IVec2,
    /// Time accumulated since the last step
    timer: f32,
    /// Where the first word of each line is placed, before jitter
    start: IVec2,
    /// Grid height, for score bands
    rows: i32,
    /// Words rising above this row have escaped
    near_boundary: i32,
}

impl WordTrack {
    pub fn new(start: IVec2, vel: IVec2, rows: i32, near_boundary: i32) -> Self {
        Self {
            words: Vec::new(),
            current: 0,
            vel,
            timer: 0.0,
            start,
            rows,
            near_boundary,
        }
    }

    /// Append one line of text. Each word keeps its column offset within
    /// the line; the whole line is shifted by `jitter` columns.
    ///
    /// Spawn times never go backwards: a line scheduled earlier than the
    /// previous one spawns with it.
    pub fn add_line(&mut self, line: &str, spawn_time: f32, jitter: i32) {
        let spawn_time = self
            .words
            .last()
            .map_or(spawn_time, |w| spawn_time.max(w.spawn_time));

        let mut col = self.start.x + jitter;
        for token in tokens(line) {
            col += token.gap as i32;
            let word = Word::new(token.text, IVec2::new(col, self.start.y), spawn_time);
            col += word.len as i32;
            self.words.push(word);
        }
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> Option<&Word> {
        self.words.get(self.current)
    }

    /// Every word has been typed or lost
    pub fn is_finished(&self) -> bool {
        self.current >= self.words.len()
    }

    /// Spawn, scroll and collide words.
    ///
    /// Motion is quantised: time accumulates until the velocity covers a
    /// whole cell, then every active word steps together and the timer
    /// restarts. `ceiling` is the bee's trajectory row while it flies; the
    /// current word may not rise to it, and words behind a blocked word
    /// queue up underneath.
    pub fn update(
        &mut self,
        dt: f32,
        elapsed: f32,
        ceiling: Option<i32>,
        terrain: &Terrain,
        events: &mut impl TrackEvents,
    ) {
        if self.is_finished() {
            return;
        }

        self.timer += dt;
        let step = scale_trunc(self.vel, self.timer);
        if step == IVec2::ZERO {
            return;
        }
        self.timer = 0.0;

        // Early wake: never leave the player waiting on the clock
        let mut shift = 0.0;
        let current = &mut self.words[self.current];
        if current.state() == WordState::Hidden && current.spawn_time > elapsed {
            shift = current.spawn_time - elapsed;
            current.spawn_time = elapsed;
            current.set_state(WordState::Init);
            log::debug!("Early wake for {:?}, {:.2}s ahead", current.text, shift);
        }

        let mut pinned_row: Option<i32> = None;
        for k in self.current..self.words.len() {
            let word = &mut self.words[k];
            if k != self.current {
                word.spawn_time -= shift;
            }

            if word.state() == WordState::Hidden && elapsed > word.spawn_time {
                word.set_state(WordState::Init);
            }
            if !word.state().is_active() {
                continue;
            }

            let mut next = word.pos + step;
            let blocked = if k == self.current {
                ceiling.is_some_and(|row| next.y <= row)
            } else {
                pinned_row.is_some_and(|row| next.y <= row)
            };
            if blocked {
                pinned_row = Some(word.pos.y);
                next.y = word.pos.y;
            }
            word.pos = next;
            if word.pos.y <= self.rows - 1 {
                word.entered = true;
            }

            // Words queued under the grid wait; anything else below it is lost
            let below = word.pos.y > self.rows - 1 && (word.entered || word.pos.y > word.origin.y);
            if word.pos.y < self.near_boundary || below || terrain.span_hits(word.pos, word.len) {
                log::debug!("{:?} lost at {}", word.text, word.pos);
                events.spawn_explosion(word.pos, ColorTag::Mistake);
                word.set_state(WordState::Failed);
                if k == self.current {
                    word.typed = word.len;
                }
            }
        }
    }

    /// Apply one keystroke to the current word.
    ///
    /// `None` and space are never mistakes. A failed current word is
    /// skipped here and swallows the keystroke.
    pub fn resolve_input(&mut self, key: Option<char>, events: &mut impl TrackEvents) {
        let rows = self.rows;
        let Some(word) = self.words.get_mut(self.current) else {
            return;
        };
        if word.state().is_terminal() {
            self.advance_past_resolved();
            return;
        }
        if word.state() == WordState::Hidden {
            return;
        }
        let Some(key) = key else {
            return;
        };

        if word.expected() == Some(key) {
            word.set_state(WordState::InProgress);
            word.typed += 1;
        } else if key != ' ' {
            word.set_state(WordState::Error);
            word.typed = 0;
            return;
        } else {
            return;
        }

        if word.is_fully_typed() {
            let multiplier = score_multiplier(word.pos.y, rows);
            events.add_score(word.len as u64 * multiplier);
            events.spawn_explosion(word.center(), ColorTag::Progress);
            word.set_state(WordState::Complete);
            log::debug!("{:?} typed at row {} (x{})", word.text, word.pos.y, multiplier);
            self.advance_past_resolved();
        }
    }

    /// Move the current index past every complete or failed word
    fn advance_past_resolved(&mut self) {
        while self
            .words
            .get(self.current)
            .is_some_and(|w| w.state().is_terminal())
        {
            self.current += 1;
            if let Some(next) = self.words.get_mut(self.current) {
                next.typed = 0;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use WordState::*;

    #[derive(Default)]
    struct Recorder {
        score: u64,
        explosions: Vec<(IVec2, ColorTag)>,
    }

    impl TrackEvents for Recorder {
        fn add_score(&mut self, amount: u64) {
            self.score += amount;
        }

        fn spawn_explosion(&mut self, center: IVec2, color: ColorTag) {
            self.explosions.push((center, color));
        }
    }

    const ROWS: i32 = 30;

    fn track() -> WordTrack {
        WordTrack::new(IVec2::new(10, ROWS), IVec2::new(0, -3), ROWS, 3)
    }

    fn open_sky() -> Terrain {
        Terrain::new::<&str>(3, &[])
    }

    /// Run one motion step (0.4s of word time) and return the new elapsed time
    fn step(t: &mut WordTrack, elapsed: f32, ceiling: Option<i32>, rec: &mut Recorder) -> f32 {
        let elapsed = elapsed + 0.4;
        t.update(0.4, elapsed, ceiling, &open_sky(), rec);
        elapsed
    }

    fn type_str(t: &mut WordTrack, s: &str, rec: &mut Recorder) {
        for c in s.chars() {
            t.resolve_input(Some(c), rec);
        }
    }

    #[test]
    fn test_add_line_keeps_column_offsets() {
        let mut t = track();
        t.add_line("the  quick fox", 0.0, 2);
        let cols: Vec<_> = t.words().iter().map(|w| w.origin.x).collect();
        assert_eq!(cols, vec![12, 17, 23]);
        assert!(t.words().iter().all(|w| w.origin.y == ROWS && w.state() == Hidden));
    }

    #[test]
    fn test_empty_line_adds_nothing() {
        let mut t = track();
        t.add_line("", 0.0, 0);
        t.add_line("   ", 1.0, 0);
        assert!(t.words().is_empty());
        assert!(t.is_finished());
    }

    #[test]
    fn test_spawn_times_never_decrease() {
        let mut t = track();
        t.add_line("a", 3.0, 0);
        t.add_line("b", 1.0, 0);
        assert_eq!(t.words()[1].spawn_time, 3.0);
    }

    #[test]
    fn test_no_motion_below_one_cell() {
        let mut t = track();
        t.add_line("cat", 0.0, 0);
        let mut rec = Recorder::default();
        t.update(0.2, 0.2, None, &open_sky(), &mut rec);
        assert_eq!(t.words()[0].state(), Hidden);
        assert_eq!(t.words()[0].pos.y, ROWS);
        // The remainder carries: 0.2 + 0.2 covers a cell
        t.update(0.2, 0.4, None, &open_sky(), &mut rec);
        assert_eq!(t.words()[0].state(), Init);
        assert_eq!(t.words()[0].pos.y, ROWS - 1);
    }

    #[test]
    fn test_scenario_typed_before_boundary() {
        let mut t = track();
        t.add_line("cat", 0.0, 0);
        let mut rec = Recorder::default();
        step(&mut t, 0.0, None, &mut rec);

        type_str(&mut t, "ca", &mut rec);
        assert_eq!(t.words()[0].state(), InProgress);
        assert_eq!(t.words()[0].typed, 2);

        t.resolve_input(Some('t'), &mut rec);
        assert_eq!(t.words()[0].state(), Complete);
        // Row 29 of 30 is in the top band
        assert_eq!(rec.score, 3 * 10);
        assert_eq!(rec.explosions, vec![(IVec2::new(11, ROWS - 1), ColorTag::Progress)]);
        assert_eq!(t.current_index(), 1);
        assert!(t.is_finished());
    }

    #[test]
    fn test_scenario_mistake_then_resume() {
        let mut t = track();
        t.add_line("cat", 0.0, 0);
        let mut rec = Recorder::default();
        step(&mut t, 0.0, None, &mut rec);

        t.resolve_input(Some('x'), &mut rec);
        assert_eq!(t.words()[0].state(), Error);
        assert_eq!(t.words()[0].typed, 0);

        t.resolve_input(Some('c'), &mut rec);
        assert_eq!(t.words()[0].state(), InProgress);
        assert_eq!(t.words()[0].typed, 1);
    }

    #[test]
    fn test_mistake_mid_word_restarts() {
        let mut t = track();
        t.add_line("cat", 0.0, 0);
        let mut rec = Recorder::default();
        step(&mut t, 0.0, None, &mut rec);

        type_str(&mut t, "cax", &mut rec);
        assert_eq!(t.words()[0].state(), Error);
        assert_eq!(t.words()[0].typed, 0);
        type_str(&mut t, "cat", &mut rec);
        assert_eq!(t.words()[0].state(), Complete);
    }

    #[test]
    fn test_space_and_no_input_are_not_mistakes() {
        let mut t = track();
        t.add_line("cat", 0.0, 0);
        let mut rec = Recorder::default();
        step(&mut t, 0.0, None, &mut rec);

        t.resolve_input(Some('c'), &mut rec);
        t.resolve_input(Some(' '), &mut rec);
        t.resolve_input(None, &mut rec);
        assert_eq!(t.words()[0].state(), InProgress);
        assert_eq!(t.words()[0].typed, 1);
    }

    #[test]
    fn test_hidden_word_ignores_input() {
        let mut t = track();
        t.add_line("cat", 5.0, 0);
        let mut rec = Recorder::default();
        t.resolve_input(Some('c'), &mut rec);
        assert_eq!(t.words()[0].state(), Hidden);
        assert_eq!(t.words()[0].typed, 0);
    }

    #[test]
    fn test_scenario_scrolls_past_boundary() {
        let mut t = track();
        t.add_line("cat", 0.0, 0);
        let mut rec = Recorder::default();
        let mut elapsed = 0.0;
        while t.words()[0].state() != Failed {
            elapsed = step(&mut t, elapsed, None, &mut rec);
            assert!(elapsed < 100.0, "word never failed");
        }
        assert_eq!(t.words()[0].pos.y, 2);
        assert_eq!(t.words()[0].typed, 3);
        // Failures explode on the first column
        assert_eq!(rec.explosions, vec![(IVec2::new(10, 2), ColorTag::Mistake)]);

        // The failed word is skipped without further typing
        t.resolve_input(None, &mut rec);
        assert_eq!(t.current_index(), 1);
        assert!(t.is_finished());
        assert_eq!(rec.score, 0);
    }

    #[test]
    fn test_failed_word_cannot_be_typed() {
        let mut t = track();
        t.add_line("a", 0.0, 0);
        t.add_line("b", 50.0, 0);
        let mut rec = Recorder::default();
        let mut elapsed = 0.0;
        while t.words()[0].state() != Failed {
            elapsed = step(&mut t, elapsed, None, &mut rec);
        }
        // The keystroke is swallowed by the skip
        t.resolve_input(Some('a'), &mut rec);
        assert_eq!(t.words()[0].state(), Failed);
        assert_eq!(t.current_index(), 1);
        assert_eq!(rec.score, 0);
    }

    #[test]
    fn test_terrain_collision() {
        let mut t = track();
        t.add_line("cat", 0.0, 0);
        let mut rec = Recorder::default();
        // Solid cell at row 20 (top 20), column 12
        let art = format!("{}#", " ".repeat(12));
        let terrain = Terrain::new(20, &[art.as_str()]);

        let mut elapsed = 0.0;
        while t.words()[0].state() != Failed {
            elapsed += 0.4;
            t.update(0.4, elapsed, None, &terrain, &mut rec);
            assert!(elapsed < 100.0, "word never collided");
        }
        assert_eq!(t.words()[0].pos.y, 20);
        assert_eq!(rec.explosions.len(), 1);
    }

    #[test]
    fn test_scenario_early_wake() {
        let mut t = track();
        t.add_line("a", 0.0, 0);
        t.add_line("b", 1.0, 0);
        t.add_line("c", 3.0, 0);
        let mut rec = Recorder::default();

        // First word appears and is typed at 0.4s
        let elapsed = step(&mut t, 0.0, None, &mut rec);
        t.resolve_input(Some('a'), &mut rec);
        assert_eq!(t.current_index(), 1);
        assert_eq!(t.words()[1].state(), Hidden);

        // Next step at 0.8s wakes "b" early and pulls "c" forward by 0.2s
        step(&mut t, elapsed, None, &mut rec);
        assert_eq!(t.words()[1].state(), Init);
        assert!(t.words()[1].spawn_time < 1.0);
        assert!((t.words()[2].spawn_time - 2.8).abs() < 1e-4);
        assert_eq!(t.words()[2].state(), Hidden);
    }

    #[test]
    fn test_pileup_under_the_bee() {
        let mut t = track();
        t.add_line("ab", 0.0, 0);
        t.add_line("cd", 0.5, 0);
        let mut rec = Recorder::default();
        let ceiling = Some(25);

        let mut elapsed = 0.0;
        for _ in 0..10 {
            elapsed = step(&mut t, elapsed, ceiling, &mut rec);
        }
        assert_eq!(t.words()[0].pos.y, 26);
        assert_eq!(t.words()[1].pos.y, 27);

        // Bee gone: the queue moves on together
        step(&mut t, elapsed, None, &mut rec);
        assert_eq!(t.words()[0].pos.y, 25);
        assert_eq!(t.words()[1].pos.y, 26);
    }

    #[test]
    fn test_word_sinking_below_the_grid_fails() {
        let mut t = WordTrack::new(IVec2::new(10, ROWS), IVec2::new(0, 3), ROWS, 3);
        t.add_line("cat", 0.0, 0);
        let mut rec = Recorder::default();
        step(&mut t, 0.0, None, &mut rec);

        assert_eq!(t.words()[0].state(), Failed);
        assert_eq!(t.words()[0].pos.y, ROWS + 1);
        assert_eq!(rec.explosions, vec![(IVec2::new(10, ROWS + 1), ColorTag::Mistake)]);
        t.resolve_input(None, &mut rec);
        assert!(t.is_finished());
    }

    #[test]
    fn test_queue_below_the_grid_waits() {
        let mut t = track();
        t.add_line("ab", 0.0, 0);
        t.add_line("cd", 0.0, 4);
        let mut rec = Recorder::default();

        // The bee path sits on the last grid row: nothing may enter yet
        let elapsed = step(&mut t, 0.0, Some(ROWS - 1), &mut rec);
        for word in t.words() {
            assert_eq!(word.state(), Init);
            assert_eq!(word.pos.y, ROWS);
            assert!(!word.entered);
        }
        assert!(rec.explosions.is_empty());

        step(&mut t, elapsed, None, &mut rec);
        for word in t.words() {
            assert_eq!(word.pos.y, ROWS - 1);
            assert!(word.entered);
        }
    }

    #[test]
    fn test_score_bands() {
        assert_eq!(score_multiplier(28, 32), 10);
        assert_eq!(score_multiplier(24, 32), 5);
        assert_eq!(score_multiplier(17, 32), 5);
        assert_eq!(score_multiplier(16, 32), 2);
        assert_eq!(score_multiplier(8, 32), 1);
    }

    #[test]
    fn test_completing_skips_words_that_already_failed() {
        let mut t = track();
        t.add_line("slow", 0.0, 0);
        t.add_line("x", 0.0, 20);
        t.add_line("ok", 0.0, 40);
        let mut rec = Recorder::default();
        // Only column 30 (where "x" sits) is solid, on row 28
        let art = format!("{}#", " ".repeat(30));
        let terrain = Terrain::new(28, &[art.as_str()]);

        let mut elapsed = 0.0;
        for _ in 0..2 {
            elapsed += 0.4;
            t.update(0.4, elapsed, None, &terrain, &mut rec);
        }
        assert!(t.words()[0].state().is_active());
        assert_eq!(t.words()[1].state(), Failed);
        assert!(t.words()[2].state().is_active());

        type_str(&mut t, "slow", &mut rec);
        assert_eq!(t.words()[0].state(), Complete);
        assert_eq!(t.current_index(), 2);
        assert_eq!(t.current().unwrap().typed, 0);
    }
}
