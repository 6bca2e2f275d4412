//! Static background terrain and collision lookup
//!
//! The terrain is a block of character art anchored at a fixed grid row and
//! repeated horizontally across the whole width of the screen. Any non-blank
//! cell is solid.

use glam::IVec2;

use crate::consts::PLAY_TOP;

/// Built-in sky, 11 rows by 52 columns
pub const SKY_SPRITE: [&str; 11] = [
    "           __----_                                  ",
    "          (`......)                    _            ",
    "         (. _^ ^_ .)                :(`..)`         ",
    "        _(...)u( ..'`           :(........)         ",
    "     =(`(..... ......)      --  `.  (. ..).)        ",
    "   ((....(..__.:'-'       +(...)   ` _`..).)        ",
    "   `(.......).)         (.. ...)     (...)          ",
    "     ` __.:. ..)       (...(...)      `-'.-(`....)  ",
    "            --'         `-.__.'         :(.. ^ ^ .))",
    "                                       `(....)V .)) ",
    "                                         ...        ",
];

/// Immutable, horizontally tiled background
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Terrain {
    /// Grid row of the first art row
    top: i32,
    width: usize,
    rows: Vec<Vec<char>>,
}

impl Terrain {
    /// Build terrain from lines of art; short lines are padded with blanks
    pub fn new<S: AsRef<str>>(top: i32, lines: &[S]) -> Self {
        let width = lines
            .iter()
            .map(|l| l.as_ref().chars().count())
            .max()
            .unwrap_or(0);
        let rows = lines
            .iter()
            .map(|l| {
                let mut row: Vec<char> = l.as_ref().chars().collect();
                row.resize(width, ' ');
                row
            })
            .collect();
        Self { top, width, rows }
    }

    /// Parse art from a text blob, one art row per line
    pub fn from_text(top: i32, text: &str) -> Self {
        let lines: Vec<&str> = text.lines().collect();
        Self::new(top, &lines)
    }

    /// The default sky, anchored just below the HUD
    pub fn sky() -> Self {
        Self::new(PLAY_TOP, &SKY_SPRITE)
    }

    pub fn top(&self) -> i32 {
        self.top
    }

    pub fn height(&self) -> usize {
        if self.width == 0 { 0 } else { self.rows.len() }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Character at a grid position, with horizontal tiling.
    ///
    /// Returns `None` above or below the art block.
    pub fn cell(&self, pos: IVec2) -> Option<char> {
        if self.width == 0 {
            return None;
        }
        let row = pos.y - self.top;
        if row < 0 || row as usize >= self.rows.len() {
            return None;
        }
        let col = pos.x.rem_euclid(self.width as i32) as usize;
        Some(self.rows[row as usize][col])
    }

    /// Whether a grid cell is solid
    #[inline]
    pub fn is_solid(&self, pos: IVec2) -> bool {
        self.cell(pos).is_some_and(|c| c != ' ')
    }

    /// Whether any of `len` cells starting at `pos` and running right is solid
    pub fn span_hits(&self, pos: IVec2, len: usize) -> bool {
        (0..len as i32).any(|i| self.is_solid(pos + IVec2::new(i, 0)))
    }
}
