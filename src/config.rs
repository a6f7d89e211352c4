/// Logical grid dimensions passed through the simulation as a named type.
///
/// Width and height are kept as `u16` so a board can never be large enough
/// to overflow cell arithmetic done in `i32`.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

/// Default board width in cells.
pub const DEFAULT_GRID_WIDTH: u16 = 30;

/// Default board height in cells.
pub const DEFAULT_GRID_HEIGHT: u16 = 30;

/// Default simulation tick interval in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 200;

/// Minimum accepted tick interval in milliseconds.
pub const MIN_TICK_INTERVAL_MS: u64 = 30;

/// Render/input poll interval in milliseconds.
pub const FRAME_INTERVAL_MS: u64 = 16;
