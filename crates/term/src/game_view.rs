//! GameView: maps board and snake into a [`Frame`].
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{Board, Snake};
use crate::frame::{Frame, Sprite};
use crate::types::LANDING_PROMPT;
use term_snake_engine::Screen;

/// Lays out the landing and playing screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    prompt: &'static str,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            prompt: LANDING_PROMPT,
        }
    }
}

impl GameView {
    /// Render the current game state into an existing frame.
    ///
    /// Callers can reuse one frame across redraws.
    pub fn render_into(&self, board: &Board, snake: &Snake, screen: Screen, frame: &mut Frame) {
        frame.clear();
        match screen {
            Screen::Landing => self.render_landing(snake, frame),
            Screen::Playing => self.render_playing(board, snake, frame),
        }
    }

    pub fn render(&self, board: &Board, snake: &Snake, screen: Screen) -> Frame {
        let mut frame = Frame::new();
        self.render_into(board, snake, screen, &mut frame);
        frame
    }

    /// Prompt on the top row, centred on the head's column, plus the head.
    fn render_landing(&self, snake: &Snake, frame: &mut Frame) {
        let head = snake.head();
        let half = (self.prompt.chars().count() / 2) as u32;
        let col = head.x.saturating_sub(half).max(1);
        frame.push_text(u16::try_from(col).unwrap_or(u16::MAX), 1, self.prompt);
        frame.push_sprite(head, Sprite::Head);
    }

    fn render_playing(&self, board: &Board, snake: &Snake, frame: &mut Frame) {
        if board.contains(board.food()) {
            frame.push_sprite(board.food(), Sprite::Food);
        }
        for seg in snake.iter().skip(1) {
            frame.push_sprite(seg.pos(), Sprite::Body);
        }
        // Head last so it stays visible over a stacked body.
        frame.push_sprite(snake.head(), Sprite::Head);
    }
}
