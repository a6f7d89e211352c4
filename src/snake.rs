use thiserror::Error;

use crate::config::GridSize;
use crate::input::Direction;

/// Grid position in logical cell coordinates.
///
/// Coordinates are signed so that one step off any board edge is still
/// representable; the occupancy model treats those cells as walls.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    /// Returns true when the cell lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }

    /// Returns the neighboring cell one step in `direction`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        match direction {
            Direction::Up => Self {
                x: self.x,
                y: self.y - 1,
            },
            Direction::Down => Self {
                x: self.x,
                y: self.y + 1,
            },
            Direction::Left => Self {
                x: self.x - 1,
                y: self.y,
            },
            Direction::Right => Self {
                x: self.x + 1,
                y: self.y,
            },
        }
    }
}

/// Growth was requested while the tail already holds `capacity` entries.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
#[error("snake tail is at capacity ({capacity} entries)")]
pub struct TailCapacityError {
    pub capacity: usize,
}

/// Snake body: a head cell plus an ordered run of tail directions.
///
/// Tail entry `i` encodes the direction from segment `i` back toward
/// segment `i + 1`, pointing away from the direction of travel, so the
/// body is reconstructed by walking the entries cumulatively from the
/// head. The snake itself is a passive data holder; classification of a
/// tick as death, growth, or plain move lives in the simulation step.
#[derive(Debug, Clone)]
pub struct Snake {
    head: Cell,
    tail: Vec<Direction>,
    capacity: usize,
}

impl Snake {
    /// Creates a single-segment snake (head only, empty tail).
    #[must_use]
    pub fn new(head: Cell, capacity: usize) -> Self {
        Self {
            head,
            tail: Vec::new(),
            capacity,
        }
    }

    /// Creates a snake from an explicit tail sequence.
    #[must_use]
    pub fn with_tail(head: Cell, tail: Vec<Direction>, capacity: usize) -> Self {
        debug_assert!(tail.len() <= capacity);
        Self {
            head,
            tail,
            capacity,
        }
    }

    /// Returns the current head cell.
    #[must_use]
    pub fn head(&self) -> Cell {
        self.head
    }

    /// Returns the tail direction sequence, nearest segment first.
    #[must_use]
    pub fn tail(&self) -> &[Direction] {
        &self.tail
    }

    /// Returns the total number of occupied segments (head included).
    #[must_use]
    pub fn len(&self) -> usize {
        self.tail.len() + 1
    }

    /// Returns false; a snake always has at least its head segment.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Reconstructs body cells lazily: the head, then each tail segment
    /// obtained by applying tail directions cumulatively.
    ///
    /// Pure with respect to the snake; yields exactly `len()` cells.
    pub fn segments(&self) -> impl Iterator<Item = Cell> + '_ {
        let mut cell = self.head;
        std::iter::once(self.head).chain(self.tail.iter().map(move |&direction| {
            cell = cell.step(direction);
            cell
        }))
    }

    /// Advances the head one step without growing.
    ///
    /// Every tail entry shifts one place away from the head and the slot
    /// behind the head records the reverse of the travel direction. An
    /// empty tail stays untouched.
    pub fn advance(&mut self, direction: Direction) {
        self.head = self.head.step(direction);
        if !self.tail.is_empty() {
            self.tail.pop();
            self.tail.insert(0, direction.opposite());
        }
    }

    /// Advances the head one step and keeps the previous tail, growing the
    /// body by one segment.
    pub fn grow(&mut self, direction: Direction) -> Result<(), TailCapacityError> {
        if self.tail.len() >= self.capacity {
            return Err(TailCapacityError {
                capacity: self.capacity,
            });
        }

        self.head = self.head.step(direction);
        self.tail.insert(0, direction.opposite());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GridSize;
    use crate::input::Direction;

    use super::{Cell, Snake};

    #[test]
    fn cell_bounds_predicate() {
        let bounds = GridSize {
            width: 5,
            height: 4,
        };

        assert!(Cell { x: 0, y: 0 }.is_within_bounds(bounds));
        assert!(Cell { x: 4, y: 3 }.is_within_bounds(bounds));
        assert!(!Cell { x: -1, y: 0 }.is_within_bounds(bounds));
        assert!(!Cell { x: 5, y: 0 }.is_within_bounds(bounds));
        assert!(!Cell { x: 0, y: 4 }.is_within_bounds(bounds));
    }

    #[test]
    fn segments_walk_tail_directions_from_head() {
        let snake = Snake::with_tail(
            Cell { x: 3, y: 3 },
            vec![Direction::Left, Direction::Left, Direction::Up],
            64,
        );

        let segments: Vec<Cell> = snake.segments().collect();
        assert_eq!(
            segments,
            vec![
                Cell { x: 3, y: 3 },
                Cell { x: 2, y: 3 },
                Cell { x: 1, y: 3 },
                Cell { x: 1, y: 2 },
            ]
        );
        assert_eq!(segments.len(), snake.len());
    }

    #[test]
    fn advance_moves_head_and_leaves_empty_tail_untouched() {
        let mut snake = Snake::new(Cell { x: 2, y: 2 }, 64);

        snake.advance(Direction::Right);

        assert_eq!(snake.head(), Cell { x: 3, y: 2 });
        assert!(snake.tail().is_empty());
    }

    #[test]
    fn advance_shifts_tail_and_records_reverse_travel() {
        let mut snake = Snake::with_tail(
            Cell { x: 3, y: 3 },
            vec![Direction::Left, Direction::Up],
            64,
        );

        snake.advance(Direction::Down);

        assert_eq!(snake.head(), Cell { x: 3, y: 4 });
        assert_eq!(snake.tail(), &[Direction::Up, Direction::Left]);
        assert_eq!(snake.len(), 3);
    }

    #[test]
    fn grow_keeps_every_previous_tail_entry() {
        let mut snake = Snake::with_tail(Cell { x: 3, y: 3 }, vec![Direction::Left], 64);

        snake.grow(Direction::Up).expect("capacity is not reached");

        assert_eq!(snake.head(), Cell { x: 3, y: 2 });
        assert_eq!(snake.tail(), &[Direction::Down, Direction::Left]);
        assert_eq!(snake.len(), 3);
    }

    #[test]
    fn grow_at_capacity_is_an_explicit_error() {
        let mut snake = Snake::with_tail(Cell { x: 3, y: 3 }, vec![Direction::Left], 1);

        let error = snake.grow(Direction::Up).expect_err("tail is full");

        assert_eq!(error.capacity, 1);
        // The failed growth must not have moved the head.
        assert_eq!(snake.head(), Cell { x: 3, y: 3 });
        assert_eq!(snake.len(), 2);
    }

    #[test]
    fn segments_are_restartable() {
        let snake = Snake::with_tail(Cell { x: 1, y: 1 }, vec![Direction::Right], 64);

        let first: Vec<Cell> = snake.segments().collect();
        let second: Vec<Cell> = snake.segments().collect();
        assert_eq!(first, second);
    }
}
