//! Board module - the playable area and the food position
//!
//! The board is sized from the terminal at game start and stays fixed for the
//! whole game. Coordinates: (x, y) where x ranges 1..=width (left to right),
//! y ranges 1..=height (top to bottom).

use rand::Rng;
use tracing::debug;

use crate::snake::Snake;
use crate::types::Position;

/// The playing field: dimensions, free-cell counter and food position
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    width: u32,
    height: u32,
    /// Cells not covered by the snake (width * height minus segment count)
    available_space: u32,
    food: Position,
}

impl Board {
    /// Create a board for a `width` x `height` terminal with no food placed
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            available_space: width.saturating_mul(height),
            food: Position::zero(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn available_space(&self) -> u32 {
        self.available_space
    }

    /// Current food position, (0, 0) when none has been placed
    pub fn food(&self) -> Position {
        self.food
    }

    /// Put the food at an explicit position.
    ///
    /// Gameplay always goes through [`Board::place_food`]; this exists for
    /// scripted scenarios.
    pub fn set_food(&mut self, pos: Position) {
        self.food = pos;
    }

    /// Check if position lies within [1, width] x [1, height]
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 1 && pos.y >= 1 && pos.x <= self.width && pos.y <= self.height
    }

    /// Record that one more cell is covered by the snake
    pub fn claim_cell(&mut self) {
        self.available_space = self.available_space.saturating_sub(1);
    }

    /// Choose a new food position.
    ///
    /// Starts from a uniformly random cell and scans forward (row-major,
    /// wrapping at the right edge and at the bottom) until the candidate shares
    /// neither a column nor a row with any segment. Returns `false` and leaves
    /// the food untouched when the board is full.
    ///
    /// The scan covers the board at most once. If every cell is excluded by the
    /// row/column rule, the first cell in scan order that no segment occupies
    /// is used instead.
    pub fn place_food<R: Rng + ?Sized>(&mut self, snake: &Snake, rng: &mut R) -> bool {
        self.place_food_excluding(snake, None, rng)
    }

    /// Like [`Board::place_food`], but the fallback also skips `reserved`.
    ///
    /// Feeding places food before the snake grows; the growth cell is free at
    /// that moment but is covered as soon as the new segment is added.
    pub fn place_food_excluding<R: Rng + ?Sized>(
        &mut self,
        snake: &Snake,
        reserved: Option<Position>,
        rng: &mut R,
    ) -> bool {
        if self.available_space <= 1 {
            debug!(available = self.available_space, "board full, food unchanged");
            return false;
        }

        let seed = Position::new(
            rng.gen_range(1..=self.width),
            rng.gen_range(1..=self.height),
        );

        let cells = u64::from(self.width) * u64::from(self.height);
        let mut candidate = seed;
        let mut fallback = None;

        for _ in 0..cells {
            if !snake.shares_row_or_column(candidate) {
                self.food = candidate;
                debug!(x = candidate.x, y = candidate.y, "food placed");
                return true;
            }
            if fallback.is_none() && reserved != Some(candidate) && !snake.occupies(candidate) {
                fallback = Some(candidate);
            }
            candidate = self.next_cell(candidate);
        }

        match fallback {
            Some(pos) => {
                self.food = pos;
                debug!(x = pos.x, y = pos.y, "food placed on shared row/column");
                true
            }
            None => false,
        }
    }

    /// Next cell in scan order, wrapping to column 1 and then to row 1
    fn next_cell(&self, pos: Position) -> Position {
        let mut next = Position::new(pos.x + 1, pos.y);
        if next.x > self.width {
            next.x = 1;
            next.y += 1;
            if next.y > self.height {
                next.y = 1;
            }
        }
        next
    }

    /// Zero every field; calling it twice is harmless
    pub fn teardown(&mut self) {
        self.width = 0;
        self.height = 0;
        self.available_space = 0;
        self.food = Position::zero();
    }
}
