use super::lines::{Level, LinePort};
use crate::game::{Position, GRID_SIZE};

/// Drives exactly one cell of the panel.
///
/// The column drives are blanked before the row select moves, so no other
/// cell sees a low row and a high column while the lines change. The target
/// cell's column is asserted last and stays asserted until the next call.
pub fn drive_cell<P: LinePort>(port: &mut P, cell: Position) {
    for col in 0..GRID_SIZE {
        port.set_col(col, Level::Low);
    }
    for row in 0..GRID_SIZE {
        let level = if row == cell.row as usize {
            Level::Low
        } else {
            Level::High
        };
        port.set_row(row, level);
    }
    port.set_col(cell.col as usize, Level::High);
}

/// Returns every line to its idle level: columns low, rows high.
pub fn release_all<P: LinePort>(port: &mut P) {
    for col in 0..GRID_SIZE {
        port.set_col(col, Level::Low);
    }
    for row in 0..GRID_SIZE {
        port.set_row(row, Level::High);
    }
}
