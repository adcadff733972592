//! Grid cursor: which card a keyboard player is pointing at.

use crate::types::{grid_columns, Direction, Position};

/// Row-major cursor over `len` cards laid out in `columns` columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCursor {
    columns: usize,
    len: usize,
    index: Position,
}

impl GridCursor {
    /// Cursor at the first card. `columns` and `len` are raised to at least 1.
    pub fn new(columns: usize, len: usize) -> Self {
        Self {
            columns: columns.max(1),
            len: len.max(1),
            index: 0,
        }
    }

    /// Square-ish layout for `len` cards (4 columns for 16 cards).
    pub fn for_cards(len: usize) -> Self {
        Self::new(grid_columns(len), len)
    }

    pub fn position(&self) -> Position {
        self.index
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.len.div_ceil(self.columns)
    }

    /// Keep the cursor valid for a new deal of `len` cards.
    pub fn reset(&mut self, len: usize) {
        *self = Self::for_cards(len);
    }

    /// Move one step, wrapping within the row or column.
    pub fn step(&mut self, direction: Direction) {
        let rows = self.rows();
        let row = self.index / self.columns;
        let col = self.index % self.columns;
        // Cells in this row / column (the last row may be short).
        let row_len = (self.len - row * self.columns).min(self.columns);
        let col_len = if col < self.len - (rows - 1) * self.columns {
            rows
        } else {
            rows - 1
        };

        let (dx, dy) = direction.offset();
        let col = wrap(col, dx, row_len);
        let row = wrap(row, dy, col_len);
        self.index = row * self.columns + col;
    }
}

fn wrap(value: usize, delta: i8, len: usize) -> usize {
    if len == 0 {
        return value;
    }
    let len = len as isize;
    (value as isize + delta as isize).rem_euclid(len) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_is_four_by_four() {
        let cursor = GridCursor::for_cards(16);
        assert_eq!(cursor.columns(), 4);
        assert_eq!(cursor.rows(), 4);
        assert_eq!(GridCursor::for_cards(10).columns(), 4);
    }

    #[test]
    fn steps_and_wraps() {
        let mut cursor = GridCursor::for_cards(16);
        cursor.step(Direction::Right);
        assert_eq!(cursor.position(), 1);
        cursor.step(Direction::Down);
        assert_eq!(cursor.position(), 5);

        let mut cursor = GridCursor::for_cards(16);
        cursor.step(Direction::Left);
        assert_eq!(cursor.position(), 3);
        cursor.step(Direction::Up);
        assert_eq!(cursor.position(), 15);
    }

    #[test]
    fn short_last_row_is_respected() {
        // 10 cards in 4 columns: rows of 4, 4, 2.
        let mut cursor = GridCursor::for_cards(10);
        cursor.step(Direction::Up);
        assert_eq!(cursor.position(), 8);
        cursor.step(Direction::Left);
        assert_eq!(cursor.position(), 9);

        // Column 3 only has two cards.
        let mut cursor = GridCursor::for_cards(10);
        for _ in 0..3 {
            cursor.step(Direction::Right);
        }
        cursor.step(Direction::Up);
        assert_eq!(cursor.position(), 7);
        cursor.step(Direction::Down);
        assert_eq!(cursor.position(), 3);
    }

    #[test]
    fn reset_returns_to_origin() {
        let mut cursor = GridCursor::for_cards(16);
        cursor.step(Direction::Down);
        cursor.reset(16);
        assert_eq!(cursor.position(), 0);
    }
}
