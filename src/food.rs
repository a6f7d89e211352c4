use rand::Rng;
use thiserror::Error;

use crate::grid::Board;
use crate::snake::Cell;

/// No unoccupied cell was left to place food on.
///
/// This can only happen when the snake covers the whole board; it is fatal
/// to the session rather than a recoverable condition.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
#[error("no unoccupied cell left for food on a {width}x{height} board")]
pub struct PlacementError {
    pub width: u16,
    pub height: u16,
}

/// Picks a new food cell uniformly among the board's unoccupied cells.
///
/// The board must already be marked with the snake's current occupancy;
/// this function only reads it and never mutates snake or map state.
pub fn respawn<R: Rng + ?Sized>(rng: &mut R, board: &Board) -> Result<Cell, PlacementError> {
    let candidates: Vec<Cell> = board.free_cells().collect();

    if candidates.is_empty() {
        let size = board.size();
        return Err(PlacementError {
            width: size.width,
            height: size.height,
        });
    }

    Ok(candidates[rng.gen_range(0..candidates.len())])
}
