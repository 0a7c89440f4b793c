//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::Key`] and provides a
//! non-blocking [`TerminalInput`] that implements the engine's
//! [`term_snake_engine::InputSource`]. Arrow-key escape sequences are decoded
//! by crossterm.

pub mod map;
pub mod reader;

pub use term_snake_types as types;

pub use map::{handle_key_event, should_quit};
pub use reader::TerminalInput;
