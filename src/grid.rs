use crate::config::GridSize;
use crate::snake::Cell;

/// Per-cell occupancy map over a fixed-size board.
///
/// Cells outside the board read as occupied, which makes the border an
/// implicit wall: wall collision and self collision share one predicate in
/// the simulation step. The map is only populated during a step's
/// classification pass and is cleared back to all-false before the step
/// returns.
#[derive(Debug, Clone)]
pub struct Board {
    size: GridSize,
    occupied: Vec<bool>,
}

impl Board {
    /// Creates an empty board of the given size.
    #[must_use]
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            occupied: vec![false; size.total_cells()],
        }
    }

    /// Returns the board dimensions.
    #[must_use]
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Returns true for occupied in-bounds cells and for every cell
    /// outside the board.
    #[must_use]
    pub fn is_occupied(&self, cell: Cell) -> bool {
        match self.index(cell) {
            Some(index) => self.occupied[index],
            None => true,
        }
    }

    /// Sets the occupancy bit of an in-bounds cell.
    ///
    /// Callers must pass an in-bounds cell; an out-of-bounds write is a
    /// contract violation and is ignored outside debug builds.
    pub fn set_occupied(&mut self, cell: Cell, occupied: bool) {
        debug_assert!(
            cell.is_within_bounds(self.size),
            "set_occupied out of bounds: {cell:?}"
        );

        if let Some(index) = self.index(cell) {
            self.occupied[index] = occupied;
        }
    }

    /// Resets every in-bounds cell's occupancy bit to false.
    pub fn clear_all(&mut self) {
        self.occupied.fill(false);
    }

    /// Iterates over all currently unoccupied cells in row-major order.
    pub fn free_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let width = i32::from(self.size.width);
        self.occupied
            .iter()
            .enumerate()
            .filter(|&(_, &occupied)| !occupied)
            .map(move |(index, _)| {
                let index = index as i32;
                Cell {
                    x: index % width,
                    y: index / width,
                }
            })
    }

    fn index(&self, cell: Cell) -> Option<usize> {
        if !cell.is_within_bounds(self.size) {
            return None;
        }

        let x = usize::try_from(cell.x).ok()?;
        let y = usize::try_from(cell.y).ok()?;
        Some(y * usize::from(self.size.width) + x)
    }
}
