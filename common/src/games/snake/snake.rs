use std::collections::{HashSet, VecDeque};

use super::types::{Direction, Point};

/// Snake body, head first. `body_set` mirrors `body` for O(1) lookups.
#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Point>,
    body_set: HashSet<Point>,
    direction: Direction,
}

impl Snake {
    /// Builds a straight snake of `length` cells with the head at `head`,
    /// the body trailing away from `direction`.
    pub fn new(head: Point, direction: Direction, length: usize) -> Self {
        let tail_direction = direction.opposite();
        let mut body = VecDeque::with_capacity(length);
        let mut cell = head;
        for _ in 0..length {
            body.push_back(cell);
            cell = cell.step(tail_direction);
        }
        Self::from_cells(body, direction)
    }

    pub(crate) fn from_cells(body: impl IntoIterator<Item = Point>, direction: Direction) -> Self {
        let body: VecDeque<Point> = body.into_iter().collect();
        let body_set = body.iter().copied().collect();
        Self {
            body,
            body_set,
            direction,
        }
    }

    pub fn head(&self) -> Point {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn tail(&self) -> Point {
        *self.body.back().expect("Snake body should never be empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub(crate) fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    pub fn contains(&self, point: Point) -> bool {
        self.body_set.contains(&point)
    }

    pub fn cells(&self) -> impl Iterator<Item = Point> + '_ {
        self.body.iter().copied()
    }

    /// Moves the head to `new_head`. The tail stays in place when `grow` is
    /// set, which lengthens the snake by one.
    pub(crate) fn advance(&mut self, new_head: Point, grow: bool) {
        self.body.push_front(new_head);
        self.body_set.insert(new_head);
        if grow {
            return;
        }
        if let Some(old_tail) = self.body.pop_back() {
            self.body_set.remove(&old_tail);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_snake_is_horizontal_behind_head() {
        let snake = Snake::new(Point::new(3, 3), Direction::Right, 3);

        let cells: Vec<Point> = snake.cells().collect();
        assert_eq!(
            cells,
            vec![Point::new(3, 3), Point::new(2, 3), Point::new(1, 3)]
        );
        assert_eq!(snake.head(), Point::new(3, 3));
        assert_eq!(snake.tail(), Point::new(1, 3));
    }

    #[test]
    fn test_advance_without_growth_keeps_length() {
        let mut snake = Snake::new(Point::new(3, 3), Direction::Right, 3);

        snake.advance(Point::new(4, 3), false);

        assert_eq!(snake.len(), 3);
        assert!(snake.contains(Point::new(4, 3)));
        assert!(!snake.contains(Point::new(1, 3)));
    }

    #[test]
    fn test_advance_with_growth_keeps_tail() {
        let mut snake = Snake::new(Point::new(3, 3), Direction::Right, 3);

        snake.advance(Point::new(4, 3), true);

        assert_eq!(snake.len(), 4);
        assert_eq!(snake.tail(), Point::new(1, 3));
    }
}
