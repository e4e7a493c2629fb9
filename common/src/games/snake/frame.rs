use super::types::{Direction, FieldSize, Point};

/// Read-only snapshot of the engine taken right after a tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SnakeFrame {
    pub tick: u64,
    pub round: u64,
    pub field_size: FieldSize,
    /// Head first.
    pub segments: Vec<Point>,
    pub head_direction: Direction,
    pub food: Point,
    pub score: u32,
    pub high_score: u32,
}

impl SnakeFrame {
    pub fn head(&self) -> Option<Point> {
        self.segments.first().copied()
    }
}
