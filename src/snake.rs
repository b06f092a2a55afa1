use std::collections::VecDeque;

use crate::grid::Position;

/// The snake's body: an ordered segment sequence with the head at the front.
///
/// The body is never empty. Segment uniqueness is maintained by the movement
/// engine, which refuses to advance onto an occupied cell.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
}

impl Snake {
    /// Creates a one-segment snake at `spawn`.
    #[must_use]
    pub fn new(spawn: Position) -> Self {
        let mut body = VecDeque::new();
        body.push_front(spawn);
        Self { body }
    }

    /// Creates a snake from explicit body segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Position>) -> Self {
        debug_assert!(!segments.is_empty());
        Self {
            body: VecDeque::from(segments),
        }
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Moves the head to `new_head`. The tail is kept when `grew` is set
    /// (food was eaten this tick) and dropped otherwise.
    pub fn advance(&mut self, new_head: Position, grew: bool) {
        self.body.push_front(new_head);
        if !grew {
            let _ = self.body.pop_back();
        }
    }

    /// Replaces the whole body with a single segment at `spawn`.
    /// Used after a non-fatal collision.
    pub fn reset_to(&mut self, spawn: Position) {
        self.body.clear();
        self.body.push_front(spawn);
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }

    /// Returns the tail segment (same as the head for a one-segment snake).
    #[must_use]
    pub fn tail(&self) -> Position {
        *self
            .body
            .back()
            .expect("snake body must always contain at least one segment")
    }
}

#[cfg(test)]
mod tests {
    use crate::grid::Position;

    use super::Snake;

    #[test]
    fn advance_without_growth_keeps_length() {
        let mut snake = Snake::new(Position { x: 2, y: 2 });

        snake.advance(Position { x: 3, y: 2 }, false);

        assert_eq!(snake.head(), Position { x: 3, y: 2 });
        assert_eq!(snake.len(), 1);
        assert!(!snake.occupies(Position { x: 2, y: 2 }));
    }

    #[test]
    fn advance_with_growth_keeps_previous_tail() {
        let mut snake = Snake::new(Position { x: 2, y: 2 });

        snake.advance(Position { x: 3, y: 2 }, true);

        assert_eq!(snake.len(), 2);
        assert_eq!(snake.head(), Position { x: 3, y: 2 });
        assert_eq!(snake.tail(), Position { x: 2, y: 2 });
    }

    #[test]
    fn occupies_checks_every_segment() {
        let snake = Snake::from_segments(vec![
            Position { x: 3, y: 1 },
            Position { x: 2, y: 1 },
            Position { x: 1, y: 1 },
        ]);

        assert!(snake.occupies(Position { x: 3, y: 1 }));
        assert!(snake.occupies(Position { x: 2, y: 1 }));
        assert!(snake.occupies(Position { x: 1, y: 1 }));
        assert!(!snake.occupies(Position { x: 4, y: 1 }));
    }

    #[test]
    fn reset_collapses_body_to_spawn() {
        let mut snake = Snake::from_segments(vec![
            Position { x: 3, y: 1 },
            Position { x: 2, y: 1 },
            Position { x: 1, y: 1 },
        ]);

        snake.reset_to(Position { x: 5, y: 5 });

        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Position { x: 5, y: 5 });
    }
}
