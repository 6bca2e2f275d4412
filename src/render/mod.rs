//! Rendering
//!
//! The simulation draws into a `Surface`: a grid of styled characters plus
//! a cursor. `FrameBuffer` is the in-memory surface; `Terminal` diffs frame
//! buffers onto the real terminal with crossterm.

pub mod frame;
pub mod scene;
pub mod terminal;

pub use frame::{Cell, FrameBuffer};
pub use scene::draw_session;
pub use terminal::{KeyInput, Terminal};

use glam::IVec2;

use crate::sim::ColorTag;

/// How a cell is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CellStyle {
    pub color: ColorTag,
    pub bold: bool,
}

impl CellStyle {
    pub const PLAIN: CellStyle = CellStyle {
        color: ColorTag::Plain,
        bold: false,
    };

    pub fn color(color: ColorTag) -> Self {
        Self { color, bold: false }
    }

    pub fn bold(self) -> Self {
        Self { bold: true, ..self }
    }
}

/// Something the game can draw on. Writes outside the surface are ignored.
pub trait Surface {
    /// Blank every cell and hide the cursor
    fn clear(&mut self);

    fn put(&mut self, pos: IVec2, ch: char, style: CellStyle);

    /// Where the text cursor sits, or `None` to hide it
    fn set_cursor(&mut self, pos: Option<IVec2>);

    fn put_str(&mut self, pos: IVec2, text: &str, style: CellStyle) {
        for (i, ch) in text.chars().enumerate() {
            self.put(pos + IVec2::new(i as i32, 0), ch, style);
        }
    }
}
