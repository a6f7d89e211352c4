use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

use crate::config::GridSize;
use crate::food::{self, PlacementError};
use crate::grid::Board;
use crate::input::Direction;
use crate::snake::{Cell, Snake, TailCapacityError};

/// How a tick was classified by the simulation step.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum StepOutcome {
    /// The head advanced into a free, non-food cell.
    Moved,
    /// The head reached the food cell; the body grew by one segment and
    /// new food was placed.
    Grew,
    /// The head would have entered an occupied cell (body or wall), or the
    /// session was already dead. Terminal until `reset`.
    Died,
}

/// A tick failed in a way that is fatal to the session.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum StepError {
    #[error(transparent)]
    FoodPlacement(#[from] PlacementError),
    #[error(transparent)]
    TailCapacity(#[from] TailCapacityError),
}

/// Complete mutable simulation state for one session.
///
/// Owns the snake, the food cell, the occupancy board, and the alive flag.
/// An external driver calls [`GameState::step`] once per logical tick and
/// [`GameState::reset`] when it observes `alive == false` and wants a
/// fresh session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Cell,
    board: Board,
    alive: bool,
    rng: StdRng,
}

impl GameState {
    /// Creates a session with an entropy-seeded RNG.
    #[must_use]
    pub fn new(size: GridSize) -> Self {
        Self::new_with_seed(size, rand::random())
    }

    /// Creates a deterministic session for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(size: GridSize, seed: u64) -> Self {
        let mut state = Self {
            snake: Snake::new(Cell { x: 0, y: 0 }, tail_capacity(size)),
            food: Cell { x: 0, y: 0 },
            board: Board::new(size),
            alive: true,
            rng: StdRng::seed_from_u64(seed),
        };
        state.reset();
        state
    }

    /// Restores the canonical starting layout and revives the session.
    ///
    /// The head starts at (0.4·width, 0.5·height) with a 0.3·width-long
    /// tail trailing off to the left, and food sits at (0.6·width,
    /// 0.5·height) — directly in the initial travel path.
    pub fn reset(&mut self) {
        let size = self.board.size();
        let tail_len = scaled(size.width, 0.3) as usize;

        self.alive = true;
        self.snake = Snake::with_tail(
            Cell {
                x: scaled(size.width, 0.4),
                y: scaled(size.height, 0.5),
            },
            vec![Direction::Left; tail_len],
            tail_capacity(size),
        );
        self.food = Cell {
            x: scaled(size.width, 0.6),
            y: scaled(size.height, 0.5),
        };
        self.board.clear_all();
    }

    /// Advances the simulation by one tick in the requested direction.
    ///
    /// The pre-move body is marked on the occupancy board, the candidate
    /// head cell is classified against it (death beats growth beats plain
    /// move), and the board is cleared again before returning. A dead
    /// session stays frozen and keeps reporting [`StepOutcome::Died`]
    /// until `reset`.
    ///
    /// The input direction is applied as-is: a reversal request on a
    /// snake with a non-empty tail runs the head into the first tail
    /// segment and dies. Callers that want classic arcade behavior filter
    /// reversals with [`crate::input::direction_change_is_valid`].
    pub fn step(&mut self, input: Direction) -> Result<StepOutcome, StepError> {
        if !self.alive {
            return Ok(StepOutcome::Died);
        }

        for cell in self.snake.segments() {
            self.board.set_occupied(cell, true);
        }

        let outcome = self.classify(input);
        self.board.clear_all();

        if outcome.is_err() {
            self.alive = false;
        }
        outcome
    }

    fn classify(&mut self, input: Direction) -> Result<StepOutcome, StepError> {
        let next = self.snake.head().step(input);

        if self.board.is_occupied(next) {
            self.alive = false;
            return Ok(StepOutcome::Died);
        }

        if next == self.food {
            // Food placement reads the pre-growth occupancy snapshot.
            let new_food = food::respawn(&mut self.rng, &self.board)?;
            self.snake.grow(input)?;
            self.food = new_food;
            return Ok(StepOutcome::Grew);
        }

        self.snake.advance(input);
        Ok(StepOutcome::Moved)
    }

    /// Returns true until the snake collides or a step fails fatally.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Returns the board dimensions.
    #[must_use]
    pub fn size(&self) -> GridSize {
        self.board.size()
    }
}

/// Maximum tail entries a board can hold: every cell minus the head's.
fn tail_capacity(size: GridSize) -> usize {
    size.total_cells().saturating_sub(1)
}

fn scaled(extent: u16, factor: f64) -> i32 {
    (f64::from(extent) * factor) as i32
}
