use crate::game::{GameSession, Position, GRID_SIZE};

/// A full-panel bitmap, one bit per LED.
///
/// Bit `col` of `rows[row]` is the cell at `(row, col)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Frame {
    rows: [u8; GRID_SIZE],
}

impl Frame {
    /// Marks `cell` lit.
    pub fn set(&mut self, cell: Position) {
        self.rows[cell.row as usize] |= 1 << cell.col;
    }

    /// True iff `cell` is lit.
    pub fn contains(&self, cell: Position) -> bool {
        self.rows[cell.row as usize] & (1 << cell.col) != 0
    }

    /// Number of lit cells.
    pub fn lit_count(&self) -> usize {
        self.rows.iter().map(|bits| bits.count_ones() as usize).sum()
    }

    /// Iterates the lit cells in row-major order.
    pub fn iter_lit(&self) -> impl Iterator<Item = Position> + '_ {
        self.rows.iter().copied().enumerate().flat_map(|(row, bits)| {
            (0..GRID_SIZE as u8)
                .filter(move |col| bits & (1 << col) != 0)
                .map(move |col| Position::new(row as u8, col))
        })
    }

    /// Builds the frame for a session: every snake segment plus the fruit.
    pub fn compose(session: &GameSession) -> Self {
        let mut frame = Self::default();
        for segment in session.snake.segments() {
            frame.set(segment);
        }
        frame.set(session.fruit);
        frame
    }
}
