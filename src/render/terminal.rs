//! Crossterm terminal backend
//!
//! Keeps the previously presented frame and only emits the cells that
//! changed, batched with `queue!` and flushed once per frame.

use std::io::{self, Stdout, Write};
use std::time::Duration;

use crossterm::{
    cursor::{self, MoveTo, SetCursorStyle},
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use glam::IVec2;

use super::{CellStyle, FrameBuffer};
use crate::sim::ColorTag;

/// Presentation colour for each semantic colour
pub fn color_for(tag: ColorTag) -> Color {
    match tag {
        ColorTag::Plain => Color::Reset,
        ColorTag::Progress => Color::Magenta,
        ColorTag::Mistake => Color::Red,
        ColorTag::Bee => Color::Yellow,
    }
}

/// One frame's worth of keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Char(char),
    Quit,
    None,
}

pub struct Terminal<W: Write> {
    out: W,
    /// Last presented frame
    back: Option<FrameBuffer>,
    /// Whether we own raw mode and the alternate screen
    owns_screen: bool,
}

impl Terminal<Stdout> {
    /// Switch the real terminal to raw mode on the alternate screen.
    /// Restored when the `Terminal` is dropped.
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        execute!(
            out,
            EnterAlternateScreen,
            Clear(ClearType::All),
            SetCursorStyle::SteadyBlock
        )?;
        Ok(Self {
            out,
            back: None,
            owns_screen: true,
        })
    }
}

impl<W: Write> Terminal<W> {
    /// Draw into any writer without touching terminal modes
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            back: None,
            owns_screen: false,
        }
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    /// Send the cells that changed since the last frame, then place the cursor
    pub fn present(&mut self, frame: &FrameBuffer) -> io::Result<()> {
        queue!(self.out, cursor::Hide)?;

        let mut style: Option<CellStyle> = None;
        for (pos, cell) in frame.diff(self.back.as_ref()) {
            queue!(self.out, MoveTo(pos.x as u16, pos.y as u16))?;
            if style != Some(cell.style) {
                queue!(
                    self.out,
                    SetAttribute(Attribute::Reset),
                    SetForegroundColor(color_for(cell.style.color))
                )?;
                if cell.style.bold {
                    queue!(self.out, SetAttribute(Attribute::Bold))?;
                }
                style = Some(cell.style);
            }
            queue!(self.out, Print(cell.ch))?;
        }
        queue!(self.out, SetAttribute(Attribute::Reset), ResetColor)?;

        if let Some(pos) = frame.cursor() {
            queue!(self.out, MoveTo(pos.x as u16, pos.y as u16), cursor::Show)?;
        }
        self.out.flush()?;

        self.back = Some(frame.clone());
        Ok(())
    }
}

impl<W: Write> Drop for Terminal<W> {
    fn drop(&mut self) {
        if self.owns_screen {
            let _ = execute!(
                self.out,
                SetCursorStyle::DefaultUserShape,
                cursor::Show,
                LeaveAlternateScreen
            );
            let _ = terminal::disable_raw_mode();
        }
    }
}

/// Current terminal size (x = columns, y = rows)
pub fn size() -> io::Result<IVec2> {
    let (cols, rows) = terminal::size()?;
    Ok(IVec2::new(cols as i32, rows as i32))
}

/// Take at most one key event without blocking
pub fn poll_key() -> io::Result<KeyInput> {
    if !event::poll(Duration::ZERO)? {
        return Ok(KeyInput::None);
    }
    let input = match event::read()? {
        Event::Key(key) if key.kind != KeyEventKind::Release => match key.code {
            KeyCode::Esc => KeyInput::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyInput::Quit,
            KeyCode::Char(c) => KeyInput::Char(c),
            _ => KeyInput::None,
        },
        _ => KeyInput::None,
    };
    Ok(input)
}
