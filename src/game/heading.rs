/// Direction of travel applied to the snake's head each physics tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heading {
    Up,
    Down,
    Left,
    Right,
}

impl Heading {
    /// Returns the per-tick delta `(row, col)` for this heading.
    ///
    /// Rows grow downward on the panel, so `Up` is `(-1, 0)` and `Down`
    /// is `(1, 0)`.
    pub fn delta(&self) -> (i8, i8) {
        match self {
            Heading::Up => (-1, 0),
            Heading::Down => (1, 0),
            Heading::Left => (0, -1),
            Heading::Right => (0, 1),
        }
    }
}
