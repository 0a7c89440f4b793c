//! TerminalRenderer: terminal mode control and full-screen redraws.
//!
//! `enter` puts the terminal into raw mode on the alternate screen with the
//! cursor hidden; `exit` undoes all of it. Every redraw clears the screen and
//! writes each glyph at its own cursor position.

use std::io::{self, Write};
use std::sync::Once;

use anyhow::{Context, Result};

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal, QueueableCommand,
};
use tracing::debug;

use crate::core::{Board, Snake};
use crate::frame::{Frame, Item, Sprite};
use crate::game_view::GameView;
use crate::types::{Position, BODY_GLYPH, FOOD_GLYPH, HEAD_GLYPH};
use term_snake_engine::{Display, Screen};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    view: GameView,
    frame: Frame,
    buf: Vec<u8>,
    entered: bool,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            view: GameView::default(),
            frame: Frame::new(),
            buf: Vec::with_capacity(16 * 1024),
            entered: false,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode().context("enabling raw mode")?;
        self.entered = true;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        debug!("terminal entered");
        Ok(())
    }

    /// Restore the terminal. Does nothing unless `enter` succeeded.
    pub fn exit(&mut self) -> Result<()> {
        if !self.entered {
            return Ok(());
        }
        self.entered = false;
        self.buf.clear();
        encode_restore_into(&mut self.buf)?;
        self.flush_buf()?;
        terminal::disable_raw_mode().context("disabling raw mode")?;
        debug!("terminal restored");
        Ok(())
    }

    pub fn is_entered(&self) -> bool {
        self.entered
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Display for TerminalRenderer {
    fn draw(&mut self, board: &Board, snake: &Snake, screen: Screen) -> Result<()> {
        self.view.render_into(board, snake, screen, &mut self.frame);
        self.buf.clear();
        encode_frame_into(&self.frame, &mut self.buf)?;
        self.flush_buf()
    }
}

impl Drop for TerminalRenderer {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}

/// Restore the terminal from a panic, before the message is printed.
///
/// Release builds abort on panic, which skips `Drop`; the hook still runs.
pub fn install_panic_hook() {
    static INSTALL: Once = Once::new();
    INSTALL.call_once(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let mut buf = Vec::new();
            if encode_restore_into(&mut buf).is_ok() {
                let mut stdout = io::stdout();
                let _ = stdout.write_all(&buf);
                let _ = stdout.flush();
            }
            let _ = terminal::disable_raw_mode();
            previous(info);
        }));
    });
}

/// Encode the terminal restore sequence into `out`.
fn encode_restore_into(out: &mut Vec<u8>) -> Result<()> {
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(terminal::EnableLineWrap)?;
    out.queue(cursor::Show)?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(terminal::LeaveAlternateScreen)?;
    Ok(())
}

/// Encode a full-frame redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_frame_into(frame: &Frame, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;

    for item in frame.items() {
        match *item {
            Item::Text { col, row, text } => {
                out.queue(cursor::MoveTo(col.saturating_sub(1), row.saturating_sub(1)))?;
                out.queue(Print(text))?;
            }
            Item::Sprite { pos, sprite } => {
                let (x, y) = cell_to_cursor(pos);
                out.queue(cursor::MoveTo(x, y))?;
                match sprite {
                    Sprite::Head => {
                        out.queue(Print(HEAD_GLYPH))?;
                    }
                    Sprite::Body => {
                        out.queue(Print(BODY_GLYPH))?;
                    }
                    Sprite::Food => {
                        out.queue(SetForegroundColor(Color::Green))?;
                        out.queue(Print(FOOD_GLYPH))?;
                        out.queue(ResetColor)?;
                    }
                }
            }
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// 1-indexed board cell to 0-indexed cursor column/row
fn cell_to_cursor(pos: Position) -> (u16, u16) {
    let x = u16::try_from(pos.x.saturating_sub(1)).unwrap_or(u16::MAX);
    let y = u16::try_from(pos.y.saturating_sub(1)).unwrap_or(u16::MAX);
    (x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoded(frame: &Frame) -> String {
        let mut out = Vec::new();
        encode_frame_into(frame, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn redraw_starts_with_clear_and_home() {
        let out = encoded(&Frame::new());
        assert!(out.starts_with("\x1b[2J\x1b[1;1H"));
    }

    #[test]
    fn sprites_are_position_addressed() {
        let mut frame = Frame::new();
        frame.push_sprite(Position::new(3, 2), Sprite::Head);
        frame.push_sprite(Position::new(7, 9), Sprite::Body);
        let out = encoded(&frame);

        let head = format!("\x1b[2;3H{}", HEAD_GLYPH);
        let body = format!("\x1b[9;7H{}", BODY_GLYPH);
        assert!(out.contains(&head), "{out:?}");
        assert!(out.contains(&body), "{out:?}");
    }

    #[test]
    fn text_is_written_verbatim() {
        let mut frame = Frame::new();
        frame.push_text(5, 1, "hello");
        assert!(encoded(&frame).contains("\x1b[1;5Hhello"));
    }

    #[test]
    fn cursor_conversion_is_zero_based() {
        assert_eq!(cell_to_cursor(Position::new(1, 1)), (0, 0));
        assert_eq!(cell_to_cursor(Position::new(80, 24)), (79, 23));
        assert_eq!(cell_to_cursor(Position::zero()), (0, 0));
    }

    #[test]
    fn exit_without_enter_is_noop() {
        let mut renderer = TerminalRenderer::new();
        assert!(!renderer.is_entered());
        renderer.exit().unwrap();
    }
}
