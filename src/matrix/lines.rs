/// Logic level on a panel drive line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Low,
    High,
}

/// The set of drive lines for one scanned LED panel.
///
/// Row selects are active low and column drives are active high: an LED
/// lights exactly when its row line is [`Level::Low`] and its column line is
/// [`Level::High`]. Implementations map line indices to real output pins, a
/// shift register, or a test double; the scanning logic above this trait
/// never changes.
pub trait LinePort {
    /// Set the row select line `row` (0-based, top row first).
    fn set_row(&mut self, row: usize, level: Level);

    /// Set the column drive line `col` (0-based, leftmost column first).
    fn set_col(&mut self, col: usize, level: Level);
}
