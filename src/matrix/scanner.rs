use super::{
    addressing::{drive_cell, release_all},
    frame::Frame,
    lines::LinePort,
};

/// Cell-sequential scan driver for the panel.
///
/// One scan pass drives every lit cell of a frame once; repeating passes
/// fast enough makes the whole image appear steady to the eye.
pub struct MatrixScanner<P: LinePort> {
    port: P,
}

impl<P: LinePort> MatrixScanner<P> {
    /// Wraps a line port in a scanner.
    pub fn new(port: P) -> Self {
        Self { port }
    }

    /// Runs one scan pass over `frame` in row-major order.
    ///
    /// The last driven cell stays asserted until the next call; an empty
    /// frame releases every line instead.
    pub fn frame(&mut self, frame: &Frame) {
        if frame.lit_count() == 0 {
            self.clear();
            return;
        }
        for cell in frame.iter_lit() {
            drive_cell(&mut self.port, cell);
        }
    }

    /// Blanks the panel.
    pub fn clear(&mut self) {
        release_all(&mut self.port);
    }

    /// The underlying line port.
    pub fn port(&self) -> &P {
        &self.port
    }

    /// Mutable access to the underlying line port.
    pub fn port_mut(&mut self) -> &mut P {
        &mut self.port
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Position, GRID_SIZE};
    use crate::matrix::lines::Level;

    #[derive(Debug, Clone, Copy)]
    enum Op {
        Row(usize, Level),
        Col(usize, Level),
    }

    #[derive(Default)]
    struct RecordingPort {
        ops: Vec<Op>,
    }

    impl LinePort for RecordingPort {
        fn set_row(&mut self, row: usize, level: Level) {
            self.ops.push(Op::Row(row, level));
        }

        fn set_col(&mut self, col: usize, level: Level) {
            self.ops.push(Op::Col(col, level));
        }
    }

    fn coincident_cells(ops: &[Op]) -> Vec<Position> {
        let mut rows = [Level::High; GRID_SIZE];
        let mut cols = [Level::Low; GRID_SIZE];
        let mut lit = Vec::new();

        for op in ops {
            match *op {
                Op::Row(i, level) => rows[i] = level,
                Op::Col(i, level) => cols[i] = level,
            }
            for row in 0..GRID_SIZE {
                for col in 0..GRID_SIZE {
                    if rows[row] == Level::Low && cols[col] == Level::High {
                        lit.push(Position::new(row as u8, col as u8));
                    }
                }
            }
        }
        lit.dedup();
        lit
    }

    #[test]
    fn test_scan_pass_drives_each_lit_cell_once() {
        let mut frame = Frame::default();
        frame.set(Position::new(2, 2));
        frame.set(Position::new(2, 3));
        frame.set(Position::new(6, 0));

        let mut scanner = MatrixScanner::new(RecordingPort::default());
        scanner.frame(&frame);

        assert_eq!(
            coincident_cells(scanner.port().ops.as_slice()),
            vec![
                Position::new(2, 2),
                Position::new(2, 3),
                Position::new(6, 0)
            ]
        );
    }

    #[test]
    fn test_empty_frame_releases_lines() {
        let mut scanner = MatrixScanner::new(RecordingPort::default());
        let mut frame = Frame::default();
        frame.set(Position::new(4, 4));
        scanner.frame(&frame);
        scanner.frame(&Frame::default());

        let mut rows = [Level::High; GRID_SIZE];
        let mut cols = [Level::Low; GRID_SIZE];
        for op in &scanner.port().ops {
            match *op {
                Op::Row(i, level) => rows[i] = level,
                Op::Col(i, level) => cols[i] = level,
            }
        }
        assert_eq!(rows, [Level::High; GRID_SIZE]);
        assert_eq!(cols, [Level::Low; GRID_SIZE]);
    }
}
