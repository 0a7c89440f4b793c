//! Scripted collaborators for driving a `Session` without a terminal.
#![allow(dead_code)]

use std::cell::Cell;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

use anyhow::Result;

use term_snake::core::{Board, Snake};
use term_snake::engine::{Display, GameState, Geometry, InputSource, Screen, Session};
use term_snake::types::{Key, Position, TICK_MS};

/// Terminal size that tests can change between steps
pub struct FakeGeometry(pub Cell<(u32, u32)>);

impl FakeGeometry {
    pub fn new(width: u32, height: u32) -> Self {
        Self(Cell::new((width, height)))
    }

    pub fn resize(&self, width: u32, height: u32) {
        self.0.set((width, height));
    }
}

impl Geometry for FakeGeometry {
    fn size(&self) -> (u32, u32) {
        self.0.get()
    }
}

/// Keys handed out one per poll
#[derive(Default)]
pub struct ScriptedInput(pub VecDeque<Key>);

impl ScriptedInput {
    pub fn push(&mut self, key: Key) {
        self.0.push_back(key);
    }
}

impl InputSource for ScriptedInput {
    fn poll_key(&mut self) -> Result<Option<Key>> {
        Ok(self.0.pop_front())
    }
}

/// What one redraw showed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawRecord {
    pub screen: Screen,
    pub head: Position,
    pub len: usize,
    pub food: Position,
}

#[derive(Default)]
pub struct RecordingDisplay {
    pub draws: Vec<DrawRecord>,
}

impl Display for RecordingDisplay {
    fn draw(&mut self, board: &Board, snake: &Snake, screen: Screen) -> Result<()> {
        self.draws.push(DrawRecord {
            screen,
            head: snake.head(),
            len: snake.len(),
            food: board.food(),
        });
        Ok(())
    }
}

/// Session plus its collaborators and a virtual clock
pub struct Harness {
    pub session: Session,
    pub geometry: FakeGeometry,
    pub input: ScriptedInput,
    pub display: RecordingDisplay,
    pub now: Instant,
}

impl Harness {
    pub fn new(width: u32, height: u32, seed: u64) -> Self {
        let geometry = FakeGeometry::new(width, height);
        let session = Session::new(&geometry, seed);
        Self {
            session,
            geometry,
            input: ScriptedInput::default(),
            display: RecordingDisplay::default(),
            now: Instant::now(),
        }
    }

    /// Run one loop iteration at the current virtual time
    pub fn step(&mut self) -> GameState {
        self.session
            .step(self.now, &mut self.input, &self.geometry, &mut self.display)
            .unwrap()
    }

    /// Advance the clock by one tick interval, then step
    pub fn tick(&mut self) -> GameState {
        self.now += Duration::from_millis(TICK_MS);
        self.step()
    }

    pub fn press(&mut self, key: Key) {
        self.input.push(key);
    }
}
