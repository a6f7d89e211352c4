use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};

/// Canonical movement directions.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// High-level input events consumed by the driver loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    Restart,
    Quit,
}

/// Returns whether a direction change is legal (no immediate 180° turns).
///
/// The simulation core passes any requested direction through unchecked; a
/// reversal fed into `step` collides with the first tail segment and kills
/// the snake. Suppressing reversals before they reach the core is the
/// driver's contract, and this predicate is how the driver honors it.
#[must_use]
pub fn direction_change_is_valid(current: Direction, next: Direction) -> bool {
    next != current.opposite()
}

/// Polls for one pending input event without blocking.
///
/// Returns `Ok(None)` when no relevant key press is pending.
pub fn poll_input() -> io::Result<Option<GameInput>> {
    if !event::poll(Duration::ZERO)? {
        return Ok(None);
    }

    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(map_key(key.code)),
        _ => Ok(None),
    }
}

fn map_key(code: KeyCode) -> Option<GameInput> {
    match code {
        KeyCode::Up | KeyCode::Char('w') => Some(GameInput::Direction(Direction::Up)),
        KeyCode::Down | KeyCode::Char('s') => Some(GameInput::Direction(Direction::Down)),
        KeyCode::Left | KeyCode::Char('a') => Some(GameInput::Direction(Direction::Left)),
        KeyCode::Right | KeyCode::Char('d') => Some(GameInput::Direction(Direction::Right)),
        KeyCode::Enter | KeyCode::Char('r') => Some(GameInput::Restart),
        KeyCode::Esc | KeyCode::Char('q') => Some(GameInput::Quit),
        _ => None,
    }
}
