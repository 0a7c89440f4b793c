//! Terminal snake (workspace facade crate).
//!
//! Exposes `term_snake::{core,engine,input,term,types}` while the
//! implementation lives in dedicated crates under `crates/`.

pub use term_snake_core as core;
pub use term_snake_engine as engine;
pub use term_snake_input as input;
pub use term_snake_term as term;
pub use term_snake_types as types;
