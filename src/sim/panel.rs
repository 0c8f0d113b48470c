use std::mem;

use crate::game::{Position, GRID_SIZE};
use crate::matrix::{Frame, Level, LinePort};

/// Software stand-in for the LED panel.
///
/// Line levels are modeled exactly as the hardware sees them: a cell lights
/// while its row select is low and its column drive is high. Every write
/// that produces such a coincidence latches the cell into an integration
/// buffer, the way persistence of vision fuses a scan pass into one steady
/// image. [`SimPanel::snapshot`] takes the integrated image and starts the
/// next one.
pub struct SimPanel {
    rows: [Level; GRID_SIZE],
    cols: [Level; GRID_SIZE],
    lit: Frame,
}

impl SimPanel {
    /// A panel with every line at its idle level.
    pub fn new() -> Self {
        Self {
            rows: [Level::High; GRID_SIZE],
            cols: [Level::Low; GRID_SIZE],
            lit: Frame::default(),
        }
    }

    /// The image integrated since the last snapshot.
    pub fn image(&self) -> &Frame {
        &self.lit
    }

    /// Takes the integrated image, leaving an empty integration buffer.
    pub fn snapshot(&mut self) -> Frame {
        mem::take(&mut self.lit)
    }

    fn latch_row(&mut self, row: usize) {
        for col in 0..GRID_SIZE {
            if self.cols[col] == Level::High {
                self.lit.set(Position::new(row as u8, col as u8));
            }
        }
    }

    fn latch_col(&mut self, col: usize) {
        for row in 0..GRID_SIZE {
            if self.rows[row] == Level::Low {
                self.lit.set(Position::new(row as u8, col as u8));
            }
        }
    }
}

impl Default for SimPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl LinePort for SimPanel {
    fn set_row(&mut self, row: usize, level: Level) {
        self.rows[row] = level;
        if level == Level::Low {
            self.latch_row(row);
        }
    }

    fn set_col(&mut self, col: usize, level: Level) {
        self.cols[col] = level;
        if level == Level::High {
            self.latch_col(col);
        }
    }
}
