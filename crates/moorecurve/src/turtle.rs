//! Turtle state shared by the string‑rewrite and recursive methods.

use crate::point::Coordinate;

/// Heading of the turtle cursor.
///
/// Successor order is clockwise: Up, Right, Down, Left.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Towards positive y.
    Up,
    /// Towards positive x.
    Right,
    /// Towards negative y.
    Down,
    /// Towards negative x.
    Left,
}

impl Direction {
    /// Unit step for this heading as `(dx, dy)`.
    fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, 1),
            Self::Right => (1, 0),
            Self::Down => (0, -1),
            Self::Left => (-1, 0),
        }
    }

    /// The heading after a clockwise quarter turn.
    fn clockwise(self) -> Self {
        match self {
            Self::Up => Self::Right,
            Self::Right => Self::Down,
            Self::Down => Self::Left,
            Self::Left => Self::Up,
        }
    }

    /// The heading after a counter‑clockwise quarter turn.
    fn counter_clockwise(self) -> Self {
        match self {
            Self::Up => Self::Left,
            Self::Left => Self::Down,
            Self::Down => Self::Right,
            Self::Right => Self::Up,
        }
    }
}

/// Cursor walking the grid, recording every visited point.
///
/// The turtle owns its output vector; callers drive it through the three
/// command operations and take the sequence back with
/// [`into_points`](Self::into_points) when the walk is complete.
#[derive(Debug)]
pub struct Turtle {
    /// Current cursor position.
    position: Coordinate,
    /// Current heading.
    heading: Direction,
    /// Every point visited so far, in order, starting with the start point.
    points: Vec<Coordinate>,
}

impl Turtle {
    /// Create a turtle at `start` facing [`Direction::Up`], with room for
    /// `capacity` points. The start point is recorded immediately.
    pub fn new(start: Coordinate, capacity: usize) -> Self {
        let mut points = Vec::with_capacity(capacity);
        points.push(start);
        Self {
            position: start,
            heading: Direction::Up,
            points,
        }
    }

    /// Turn a quarter to the right.
    pub fn turn_right(&mut self) {
        self.heading = self.heading.clockwise();
    }

    /// Turn a quarter to the left.
    pub fn turn_left(&mut self) {
        self.heading = self.heading.counter_clockwise();
    }

    /// Step one unit along the current heading and record the new position.
    pub fn forward(&mut self) {
        let (dx, dy) = self.heading.delta();
        self.position = self.position.stepped(dx, dy);
        self.points.push(self.position);
    }

    /// Consume the turtle and return the recorded point sequence.
    pub fn into_points(self) -> Vec<Coordinate> {
        self.points
    }
}
