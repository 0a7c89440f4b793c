//! Game loop module - the state machine that drives a play session.
//!
//! The engine sits between the pure rules in `term_snake_core` and the
//! terminal. It owns timing (one snake step every [`types::TICK_MS`]), applies
//! key presses, and moves the session through Landing, Idle, GameOver and
//! Exit. Terminal access is abstracted behind the traits in [`io`], so the
//! same loop runs under the crossterm front end and under scripted tests.

pub mod io;
pub mod session;

pub use term_snake_core as core;
pub use term_snake_types as types;

pub use io::{Display, Geometry, InputSource, Screen};
pub use session::{GameState, Session};
