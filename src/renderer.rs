use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Block;

use crate::config::GridSize;
use crate::game::GameState;
use crate::snake::Cell;
use crate::theme::Theme;

/// Terminal columns used per logical board cell.
///
/// Two columns per cell keeps cells roughly square in most fonts.
const CELL_COLUMNS: u16 = 2;

/// Renders one full frame from immutable simulation state.
///
/// The renderer only reads the session: board size, segments reconstructed
/// from head + tail, the food cell, and the alive flag (which selects the
/// palette).
pub fn render(frame: &mut Frame<'_>, state: &GameState, theme: &Theme) {
    let palette = theme.palette(state.is_alive());
    let bounds = state.size();

    let title = if state.is_alive() {
        format!(" gridsnake · length {} ", state.snake.len())
    } else {
        format!(
            " gridsnake · died at length {} · r restarts, q quits ",
            state.snake.len()
        )
    };

    let block = Block::bordered().title(title);
    let area = frame.area();
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let buffer = frame.buffer_mut();

    for y in 0..i32::from(bounds.height) {
        for x in 0..i32::from(bounds.width) {
            let color = if (x + y) % 2 == 0 {
                palette.board_even
            } else {
                palette.board_odd
            };
            fill_cell(buffer, inner, bounds, Cell { x, y }, color);
        }
    }

    fill_cell(buffer, inner, bounds, state.food, palette.food);
    for segment in state.snake.segments() {
        fill_cell(buffer, inner, bounds, segment, palette.snake);
    }
}

fn fill_cell(buffer: &mut Buffer, inner: Rect, bounds: GridSize, cell: Cell, color: Color) {
    let Some((x, y)) = cell_to_terminal(inner, bounds, cell) else {
        return;
    };

    buffer.set_string(x, y, "  ", Style::new().bg(color));
}

/// Maps a logical cell to the top-left terminal column of its block.
///
/// Returns `None` for cells outside the board or clipped by a terminal
/// smaller than the board.
fn cell_to_terminal(inner: Rect, bounds: GridSize, cell: Cell) -> Option<(u16, u16)> {
    if !cell.is_within_bounds(bounds) {
        return None;
    }

    let x_offset = u16::try_from(cell.x).ok()?.checked_mul(CELL_COLUMNS)?;
    let y_offset = u16::try_from(cell.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x.saturating_add(CELL_COLUMNS - 1) >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;

    use crate::config::GridSize;
    use crate::snake::Cell;

    use super::cell_to_terminal;

    const BOUNDS: GridSize = GridSize {
        width: 10,
        height: 8,
    };

    #[test]
    fn cells_map_two_columns_apart() {
        let inner = Rect::new(1, 1, 40, 20);

        assert_eq!(
            cell_to_terminal(inner, BOUNDS, Cell { x: 0, y: 0 }),
            Some((1, 1))
        );
        assert_eq!(
            cell_to_terminal(inner, BOUNDS, Cell { x: 3, y: 2 }),
            Some((7, 3))
        );
    }

    #[test]
    fn out_of_bounds_cells_are_not_drawn() {
        let inner = Rect::new(0, 0, 40, 20);

        assert_eq!(cell_to_terminal(inner, BOUNDS, Cell { x: -1, y: 0 }), None);
        assert_eq!(cell_to_terminal(inner, BOUNDS, Cell { x: 10, y: 0 }), None);
    }

    #[test]
    fn cells_clipped_by_a_small_terminal_are_skipped() {
        let inner = Rect::new(0, 0, 6, 2);

        assert!(cell_to_terminal(inner, BOUNDS, Cell { x: 1, y: 1 }).is_some());
        assert_eq!(cell_to_terminal(inner, BOUNDS, Cell { x: 3, y: 0 }), None);
        assert_eq!(cell_to_terminal(inner, BOUNDS, Cell { x: 0, y: 2 }), None);
    }
}
