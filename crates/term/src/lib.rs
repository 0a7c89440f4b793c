//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. The pure
//! [`GameView`] turns board and snake into a [`Frame`] of positioned draw
//! commands; [`TerminalRenderer`] owns the terminal mode and flushes frames to
//! it; [`TerminalGeometry`] reports the live terminal size.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep frame layout testable without a terminal
//! - Always hand the terminal back in its original mode

pub mod frame;
pub mod game_view;
pub mod geometry;
pub mod renderer;

pub use term_snake_core as core;
pub use term_snake_types as types;

pub use frame::{Frame, Item, Sprite};
pub use game_view::GameView;
pub use geometry::TerminalGeometry;
pub use renderer::{encode_frame_into, install_panic_hook, TerminalRenderer};
