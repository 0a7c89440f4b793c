//! Non-blocking crossterm key reader.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event};

use crate::map::handle_key_event;
use crate::types::Key;
use term_snake_engine::InputSource;

/// Reads key presses from the terminal without blocking.
///
/// Requires raw mode to be enabled by the terminal renderer.
#[derive(Debug, Default)]
pub struct TerminalInput;

impl TerminalInput {
    pub fn new() -> Self {
        Self
    }

    /// Block until an event is pending or `timeout` elapses.
    ///
    /// Does not consume the event; the next [`InputSource::poll_key`] does.
    pub fn wait(&self, timeout: Duration) -> Result<bool> {
        Ok(event::poll(timeout)?)
    }
}

impl InputSource for TerminalInput {
    fn poll_key(&mut self) -> Result<Option<Key>> {
        // Drain events that carry no game key (resizes, releases, focus).
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if let Some(mapped) = handle_key_event(key) {
                    return Ok(Some(mapped));
                }
            }
        }
        Ok(None)
    }
}
