//! A single typeable word and its lifecycle

use glam::IVec2;

/// Lifecycle of a word on the track
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordState {
    /// Waiting for its spawn time; not drawn, not moving
    Hidden,
    /// Visible and scrolling, nothing typed yet
    Init,
    /// At least one correct character typed since the last mistake
    InProgress,
    /// The last character typed was wrong; progress was reset
    Error,
    /// Fully typed
    Complete,
    /// Hit the terrain or scrolled past the top
    Failed,
}

impl WordState {
    /// Complete and Failed words never change again
    pub fn is_terminal(self) -> bool {
        matches!(self, WordState::Complete | WordState::Failed)
    }

    /// Visible, moving and collidable
    pub fn is_active(self) -> bool {
        matches!(
            self,
            WordState::Init | WordState::InProgress | WordState::Error
        )
    }

    /// The legal edges of the word state machine. Staying put is always legal.
    pub fn can_transition_to(self, next: WordState) -> bool {
        use WordState::*;
        if self == next {
            return true;
        }
        match (self, next) {
            (Hidden, Init) => true,
            (Init | InProgress | Error, InProgress) => true,
            (Init | InProgress, Error) => true,
            (Init | InProgress | Error, Complete) => true,
            (Hidden | Init | InProgress | Error, Failed) => true,
            _ => false,
        }
    }

    /// Semantic colour used to draw a word in this state
    pub fn color_tag(self) -> ColorTag {
        match self {
            WordState::InProgress | WordState::Complete => ColorTag::Progress,
            WordState::Error | WordState::Failed => ColorTag::Mistake,
            WordState::Hidden | WordState::Init => ColorTag::Plain,
        }
    }
}

/// Semantic colours. The terminal maps these to real colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorTag {
    #[default]
    Plain,
    /// Correctly typed text and success explosions
    Progress,
    /// Mistakes, failed words and failure explosions
    Mistake,
    /// The bee
    Bee,
}

/// A word travelling up the screen
#[derive(Debug, Clone)]
pub struct Word {
    pub text: String,
    /// Number of characters in `text`
    pub len: usize,
    /// Where the word was placed when loaded
    pub origin: IVec2,
    /// Current grid position of the first character (x = column, y = row)
    pub pos: IVec2,
    /// Simulation time at which the word appears
    pub spawn_time: f32,
    /// Characters typed correctly so far, `0..=len`
    pub typed: usize,
    /// Has been inside the grid at least once
    pub entered: bool,
    state: WordState,
}

impl Word {
    pub fn new(text: &str, origin: IVec2, spawn_time: f32) -> Self {
        Self {
            text: text.to_string(),
            len: text.chars().count(),
            origin,
            pos: origin,
            spawn_time,
            typed: 0,
            entered: false,
            state: WordState::Hidden,
        }
    }

    pub fn state(&self) -> WordState {
        self.state
    }

    /// Move along a legal state edge
    pub fn set_state(&mut self, next: WordState) {
        debug_assert!(
            self.state.can_transition_to(next),
            "illegal word transition {:?} -> {:?} for {:?}",
            self.state,
            next,
            self.text
        );
        self.state = next;
    }

    /// The character the player must type next, if any
    pub fn expected(&self) -> Option<char> {
        self.text.chars().nth(self.typed)
    }

    pub fn is_fully_typed(&self) -> bool {
        self.typed >= self.len
    }

    /// Centre cell of the word, where a completed word explodes
    pub fn center(&self) -> IVec2 {
        self.pos + IVec2::new(self.len as i32 / 2, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use WordState::*;

    #[test]
    fn test_new_word_is_hidden() {
        let w = Word::new("cat", IVec2::new(4, 20), 1.5);
        assert_eq!(w.state(), Hidden);
        assert_eq!(w.len, 3);
        assert_eq!(w.pos, w.origin);
        assert_eq!(w.expected(), Some('c'));
    }

    #[test]
    fn test_legal_edges() {
        assert!(Hidden.can_transition_to(Init));
        assert!(Init.can_transition_to(InProgress));
        assert!(Init.can_transition_to(Error));
        assert!(InProgress.can_transition_to(Error));
        assert!(Error.can_transition_to(InProgress));
        assert!(InProgress.can_transition_to(Complete));
        assert!(Hidden.can_transition_to(Failed));
    }

    #[test]
    fn test_illegal_edges() {
        assert!(!Hidden.can_transition_to(Complete));
        assert!(!Hidden.can_transition_to(InProgress));
        assert!(!Complete.can_transition_to(Failed));
        assert!(!Failed.can_transition_to(Init));
        assert!(!InProgress.can_transition_to(Init));
    }

    #[test]
    fn test_center() {
        let w = Word::new("hello", IVec2::new(10, 7), 0.0);
        assert_eq!(w.center(), IVec2::new(12, 7));
    }
}
