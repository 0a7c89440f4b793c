//! Frame types: the list of things one redraw puts on screen.

use crate::types::Position;

/// A board glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sprite {
    Head,
    Body,
    Food,
}

/// One positioned draw command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Item {
    /// A glyph at a 1-indexed board cell
    Sprite { pos: Position, sprite: Sprite },
    /// A text run starting at a 1-indexed terminal cell
    Text { col: u16, row: u16, text: &'static str },
}

/// Draw commands for one full-screen redraw, in paint order.
///
/// Later items overwrite earlier ones that share a cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    items: Vec<Item>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Remove all items, keeping the allocation
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn push_sprite(&mut self, pos: Position, sprite: Sprite) {
        self.items.push(Item::Sprite { pos, sprite });
    }

    pub fn push_text(&mut self, col: u16, row: u16, text: &'static str) {
        self.items.push(Item::Text { col, row, text });
    }

    /// Count sprites of one kind
    pub fn count(&self, kind: Sprite) -> usize {
        self.items
            .iter()
            .filter(|item| matches!(item, Item::Sprite { sprite, .. } if *sprite == kind))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_empties_the_frame() {
        let mut frame = Frame::new();
        assert!(frame.is_empty());

        frame.push_sprite(Position::new(2, 2), Sprite::Food);
        frame.push_text(1, 1, "x");
        assert_eq!(frame.len(), 2);
        assert_eq!(frame.count(Sprite::Food), 1);

        frame.clear();
        assert!(frame.is_empty());
    }
}
