//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the game rules and the state they act on.
//! It has **no dependencies** on terminal I/O, making it:
//!
//! - **Deterministic**: Same RNG seed produces identical food placement
//! - **Testable**: Every rule is exercised by plain unit tests
//! - **Portable**: Can run headless, under a scripted driver or in a benchmark
//!
//! # Module Structure
//!
//! - [`board`]: playable area, free-cell counter and food placement
//! - [`snake`]: the body as an index-linked chain of segments
//! - [`movement`]: per-tick advance plus boundary, collision and feeding checks
//!
//! # Game Rules
//!
//! - **Start**: 4 segments stacked on the board centre, not moving
//! - **Movement**: one cell per tick; each segment takes its predecessor's
//!   pre-tick position
//! - **Turning**: reversing straight into the body is ignored
//! - **Death**: leaving the board or running into the body
//! - **Food**: never placed on a row or column the snake occupies
//!
//! # Example
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use term_snake_core::movement::{tick, TickOutcome};
//! use term_snake_core::{Board, Snake};
//! use term_snake_types::{Direction, Position};
//!
//! let mut rng = StdRng::seed_from_u64(12345);
//! let mut board = Board::new(10, 10);
//! let mut snake = Snake::new(&mut board);
//!
//! snake.set_direction(Direction::Right);
//! board.set_food(Position::new(6, 5));
//!
//! assert_eq!(tick(&mut board, &mut snake, &mut rng), TickOutcome::Fed);
//! assert_eq!(snake.len(), 5);
//! ```

pub mod board;
pub mod movement;
pub mod snake;

pub use term_snake_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use movement::{Check, GameOverCause, TickOutcome};
pub use snake::{Segment, SegmentId, Snake};
