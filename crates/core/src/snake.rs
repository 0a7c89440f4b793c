//! Snake module - the body as a doubly linked chain of segments
//!
//! Segments live in an arena (`Vec<Segment>`) and link to their neighbours by
//! index. The head leads movement; every other segment follows the position
//! its predecessor held before the current tick.

use tracing::debug;

use crate::board::Board;
use crate::types::{Direction, Position, INITIAL_SEGMENTS};

/// Arena index of a segment
pub type SegmentId = usize;

/// One unit of the snake's body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pos: Position,
    /// Position at the start of the current tick
    prev_pos: Position,
    prev: Option<SegmentId>,
    next: Option<SegmentId>,
}

impl Segment {
    fn new(pos: Position) -> Self {
        Self {
            pos,
            prev_pos: pos,
            prev: None,
            next: None,
        }
    }

    pub fn pos(&self) -> Position {
        self.pos
    }

    pub fn prev_pos(&self) -> Position {
        self.prev_pos
    }

    /// Neighbour towards the head
    pub fn prev(&self) -> Option<SegmentId> {
        self.prev
    }

    /// Neighbour towards the tail
    pub fn next(&self) -> Option<SegmentId> {
        self.next
    }
}

/// The player's snake
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    segments: Vec<Segment>,
    head: Option<SegmentId>,
    tail: Option<SegmentId>,
    direction: Direction,
}

impl Snake {
    /// Create a snake of [`INITIAL_SEGMENTS`] segments stacked on the board's
    /// centre, not moving
    pub fn new(board: &mut Board) -> Self {
        let mut snake = Self {
            segments: Vec::with_capacity(INITIAL_SEGMENTS),
            head: None,
            tail: None,
            direction: Direction::None,
        };
        for _ in 0..INITIAL_SEGMENTS {
            snake.add_segment(board);
        }
        snake
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Head position, (0, 0) once the snake has been torn down
    pub fn head(&self) -> Position {
        self.head
            .map(|id| self.segments[id].pos)
            .unwrap_or_default()
    }

    /// Tail position, (0, 0) once the snake has been torn down
    pub fn tail(&self) -> Position {
        self.tail
            .map(|id| self.segments[id].pos)
            .unwrap_or_default()
    }

    /// Cell the next [`Snake::add_segment`] will fill: where the tail was
    /// before the current tick
    pub fn growth_cell(&self) -> Option<Position> {
        self.tail.map(|id| self.segments[id].prev_pos)
    }

    #[cfg(test)]
    pub(crate) fn head_id(&self) -> Option<SegmentId> {
        self.head
    }

    #[cfg(test)]
    pub(crate) fn tail_id(&self) -> Option<SegmentId> {
        self.tail
    }

    #[cfg(test)]
    pub(crate) fn segment(&self, id: SegmentId) -> Option<&Segment> {
        self.segments.get(id)
    }

    /// Segments from head to tail
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            snake: self,
            cursor: self.head,
            forward: true,
        }
    }

    /// Segments from tail to head
    pub fn iter_rev(&self) -> Iter<'_> {
        Iter {
            snake: self,
            cursor: self.tail,
            forward: false,
        }
    }

    /// Check if any segment sits exactly on `pos`
    pub fn occupies(&self, pos: Position) -> bool {
        self.iter().any(|seg| seg.pos == pos)
    }

    /// Check if any segment shares a column or a row with `pos`
    pub fn shares_row_or_column(&self, pos: Position) -> bool {
        self.iter().any(|seg| seg.pos.x == pos.x || seg.pos.y == pos.y)
    }

    /// Append one segment and claim a cell on the board.
    ///
    /// The first segment is placed at the board's centre. Later segments start
    /// where the tail was before the current tick, so growth extends the body
    /// without a gap.
    pub fn add_segment(&mut self, board: &mut Board) {
        let id = self.segments.len();
        match self.tail {
            None => {
                let centre = Position::new(board.width() / 2, board.height() / 2);
                self.segments.push(Segment::new(centre));
                self.head = Some(id);
            }
            Some(tail) => {
                let mut seg = Segment::new(self.segments[tail].prev_pos);
                seg.prev = Some(tail);
                self.segments.push(seg);
                self.segments[tail].next = Some(id);
            }
        }
        self.tail = Some(id);
        board.claim_cell();
    }

    /// Request a new direction.
    ///
    /// Returns `false` when the request is the exact reverse of the current
    /// direction and the snake has a body to run into.
    pub fn set_direction(&mut self, requested: Direction) -> bool {
        if self.len() > 1 && requested != Direction::None && requested == self.direction.opposite() {
            debug!(
                current = self.direction.as_str(),
                requested = requested.as_str(),
                "reverse direction rejected"
            );
            return false;
        }
        self.direction = requested;
        true
    }

    /// Move the snake one step.
    ///
    /// The head moves one cell in the current direction; each following segment
    /// takes the position its predecessor held before this step.
    pub fn advance(&mut self) {
        let Some(head) = self.head else {
            return;
        };

        let seg = &mut self.segments[head];
        seg.prev_pos = seg.pos;
        seg.pos = seg.pos.step(self.direction);

        let mut cursor = seg.next;
        while let Some(id) = cursor {
            let lead = match self.segments[id].prev {
                Some(prev) => self.segments[prev].prev_pos,
                None => break,
            };
            let seg = &mut self.segments[id];
            seg.prev_pos = seg.pos;
            seg.pos = lead;
            cursor = seg.next;
        }
    }

    /// Release every segment, tail first, zeroing positions on the way out
    pub fn teardown(&mut self) {
        let mut cursor = self.tail;
        while let Some(id) = cursor {
            let seg = &mut self.segments[id];
            seg.pos = Position::zero();
            seg.prev_pos = Position::zero();
            cursor = seg.prev;
            seg.prev = None;
            seg.next = None;
        }
        self.segments.clear();
        self.head = None;
        self.tail = None;
        self.direction = Direction::None;
    }
}

/// Iterator over the chain in either direction
pub struct Iter<'a> {
    snake: &'a Snake,
    cursor: Option<SegmentId>,
    forward: bool,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Segment;

    fn next(&mut self) -> Option<Self::Item> {
        let seg = self.snake.segments.get(self.cursor?)?;
        self.cursor = if self.forward { seg.next } else { seg.prev };
        Some(seg)
    }
}
