//! Grid coordinates with toroidal wraparound, and the four headings.

use std::fmt;

/// A cell on the board, in screen coordinates (`y` grows downward).
///
/// Plain value type: two positions are the same cell iff they compare
/// equal. Coordinates are only meaningful once normalized onto a board
/// via [`wrap`](Position::wrap).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Column, `0..width` once wrapped.
    pub x: i32,
    /// Row, `0..height` once wrapped.
    pub y: i32,
}

impl Position {
    /// The `(0, 0)` cell, used as the degenerate spawn fallback.
    pub const ORIGIN: Position = Position { x: 0, y: 0 };

    /// Create a position from raw coordinates.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Normalize both axes onto a `width × height` torus.
    ///
    /// Uses the Euclidean remainder, so the result is non-negative for
    /// any input, including coordinates far outside the grid:
    /// `Position::new(-1, 0).wrap(10, 10)` is `(9, 0)`.
    ///
    /// Dimensions of zero are rejected at board construction, so this
    /// never divides by zero on a valid board.
    pub fn wrap(self, width: u32, height: u32) -> Self {
        Self {
            x: self.x.rem_euclid(width as i32),
            y: self.y.rem_euclid(height as i32),
        }
    }

    /// Offset one cell in `dir`, without wrapping.
    pub fn translate(self, dir: Direction) -> Self {
        let (dx, dy) = dir.offset();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the four unit headings a snake can hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// One cell up (`y - 1`).
    Up,
    /// One cell down (`y + 1`).
    Down,
    /// One cell left (`x - 1`).
    Left,
    /// One cell right (`x + 1`).
    Right,
}

impl Direction {
    /// All four headings, in declaration order. Index with a uniform
    /// `0..4` sample for a random turn.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The `(dx, dy)` unit offset for this heading.
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}
