//! Collaborator interfaces the game loop drives.
//!
//! The loop never touches the terminal directly. Terminal size, key input and
//! drawing come in through these traits so the state machine can run under a
//! real terminal or a scripted test driver alike.

use anyhow::Result;

use crate::core::{Board, Snake};
use crate::types::Key;

/// Which screen a redraw shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Pre-game prompt plus the head glyph
    Landing,
    /// Food, body and head
    Playing,
}

/// Terminal geometry provider
pub trait Geometry {
    /// Current `(columns, rows)`; `(0, 0)` when the size cannot be read.
    fn size(&self) -> (u32, u32);
}

/// Non-blocking key source
pub trait InputSource {
    /// Next decoded key press, or `None` if nothing is pending.
    ///
    /// Must return immediately.
    fn poll_key(&mut self) -> Result<Option<Key>>;
}

/// Full-screen renderer
pub trait Display {
    fn draw(&mut self, board: &Board, snake: &Snake, screen: Screen) -> Result<()>;
}
