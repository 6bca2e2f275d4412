//! In-memory character grid

use glam::IVec2;

use super::{CellStyle, Surface};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Cell {
    pub const BLANK: Cell = Cell {
        ch: ' ',
        style: CellStyle::PLAIN,
    };
}

/// A full frame: one `Cell` per grid position, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    size: IVec2,
    cells: Vec<Cell>,
    cursor: Option<IVec2>,
}

impl FrameBuffer {
    /// A blank frame of `size` (x = columns, y = rows)
    pub fn new(size: IVec2) -> Self {
        let size = size.max(IVec2::ZERO);
        Self {
            size,
            cells: vec![Cell::BLANK; (size.x * size.y) as usize],
            cursor: None,
        }
    }

    pub fn size(&self) -> IVec2 {
        self.size
    }

    pub fn cursor(&self) -> Option<IVec2> {
        self.cursor
    }

    fn index(&self, pos: IVec2) -> Option<usize> {
        let inside = pos.x >= 0 && pos.y >= 0 && pos.x < self.size.x && pos.y < self.size.y;
        inside.then(|| (pos.y * self.size.x + pos.x) as usize)
    }

    pub fn get(&self, pos: IVec2) -> Option<Cell> {
        self.index(pos).map(|i| self.cells[i])
    }

    /// The characters of one row, for inspection
    pub fn row_text(&self, row: i32) -> String {
        (0..self.size.x)
            .filter_map(|x| self.get(IVec2::new(x, row)))
            .map(|c| c.ch)
            .collect()
    }

    /// Positions whose cells differ from `other`, row-major.
    /// Every position differs when the sizes do not match.
    pub fn diff<'a>(&'a self, other: Option<&'a FrameBuffer>) -> impl Iterator<Item = (IVec2, Cell)> + 'a {
        let same_size = other.is_some_and(|o| o.size == self.size);
        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            let changed = match other {
                Some(o) if same_size => o.cells[i] != *cell,
                _ => true,
            };
            let pos = IVec2::new(i as i32 % self.size.x, i as i32 / self.size.x);
            changed.then_some((pos, *cell))
        })
    }
}

impl Surface for FrameBuffer {
    fn clear(&mut self) {
        self.cells.fill(Cell::BLANK);
        self.cursor = None;
    }

    fn put(&mut self, pos: IVec2, ch: char, style: CellStyle) {
        if let Some(i) = self.index(pos) {
            self.cells[i] = Cell { ch, style };
        }
    }

    fn set_cursor(&mut self, pos: Option<IVec2>) {
        self.cursor = pos.filter(|p| self.index(*p).is_some());
    }
}
