use super::heading::Heading;

/// Side length of the square game grid (and of the LED panel).
pub const GRID_SIZE: usize = 8;

/// Maximum number of body segments; reaching it ends the game.
pub const SEGMENT_CAPACITY: usize = 12;

/// The snake's fixed starting segments, tail first.
const START_SEGMENTS: [Position; 2] = [Position::new(2, 2), Position::new(2, 3)];

/// A cell on the game grid, `row` and `col` each in `[0, 7]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Applies a `(row, col)` delta with toroidal wrap on each axis:
    /// stepping off one edge reappears on the opposite edge.
    pub fn wrapping_step(self, delta: (i8, i8)) -> Self {
        let row = (self.row as i8 + delta.0).rem_euclid(GRID_SIZE as i8) as u8;
        let col = (self.col as i8 + delta.1).rem_euclid(GRID_SIZE as i8) as u8;
        Self { row, col }
    }
}

/// The snake's body: a fixed-capacity circular buffer of positions.
///
/// `head` and `tail` are slot indices; the occupied range runs from `tail`
/// forward (wrapping at the buffer end) to `head` inclusive. `len` is the
/// growth gauge: it changes only through [`SnakeBody::grow`] and is compared
/// against [`SEGMENT_CAPACITY`] for the game-over condition, while movement
/// touches only the indices. Between ticks the occupied range holds exactly
/// `len` cells.
#[derive(Debug, Clone)]
pub struct SnakeBody {
    slots: [Position; SEGMENT_CAPACITY],
    head: usize,
    tail: usize,
    len: usize,
    /// Current direction of travel; written by input dispatch, read each tick.
    pub heading: Heading,
    /// Fruit consumed this game.
    pub score: u32,
}

impl SnakeBody {
    /// Creates the fixed two-segment starting snake, heading right.
    pub fn new() -> Self {
        let mut slots = [Position::new(0, 0); SEGMENT_CAPACITY];
        slots[..START_SEGMENTS.len()].copy_from_slice(&START_SEGMENTS);
        Self {
            slots,
            head: START_SEGMENTS.len() - 1,
            tail: 0,
            len: START_SEGMENTS.len(),
            heading: Heading::Right,
            score: 0,
        }
    }

    /// Number of occupied segments.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True once the body has reached [`SEGMENT_CAPACITY`].
    pub fn is_full(&self) -> bool {
        self.len >= SEGMENT_CAPACITY
    }

    /// The most recently added segment.
    pub fn head_position(&self) -> Position {
        self.slots[self.head]
    }

    /// Slot count from `tail` to `head` inclusive, following the ring.
    fn span(&self) -> usize {
        (self.head + SEGMENT_CAPACITY - self.tail) % SEGMENT_CAPACITY + 1
    }

    /// Iterates the occupied segments in tail-to-head order.
    ///
    /// The wrapped case (`head` below `tail` in index space) is handled here
    /// and nowhere else; callers never see buffer indices.
    pub fn segments(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.span()).map(move |i| self.slots[(self.tail + i) % SEGMENT_CAPACITY])
    }

    /// True iff `cell` is one of the occupied segments. O(len).
    pub fn occupies(&self, cell: Position) -> bool {
        self.segments().any(|segment| segment == cell)
    }

    /// Writes the wrapped `head + delta` cell into the next slot and advances
    /// the head index. The tail and `len` are untouched; the caller follows
    /// up with either [`SnakeBody::grow`] or [`SnakeBody::retract_tail`].
    ///
    /// Returns the new head position.
    pub fn advance_head(&mut self, delta: (i8, i8)) -> Position {
        let next = self.head_position().wrapping_step(delta);
        self.head = (self.head + 1) % SEGMENT_CAPACITY;
        self.slots[self.head] = next;
        next
    }

    /// Releases the oldest segment by advancing the tail index one slot.
    pub fn retract_tail(&mut self) {
        self.tail = (self.tail + 1) % SEGMENT_CAPACITY;
    }

    /// Records one segment of growth. Saturates at [`SEGMENT_CAPACITY`];
    /// the saturated state is read back as game-over, not an error.
    pub fn grow(&mut self) {
        self.len = (self.len + 1).min(SEGMENT_CAPACITY);
    }
}

impl Default for SnakeBody {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    #[test]
    fn test_wrapping_step() {
        let pos = Position::new(3, 3);
        assert_eq!(pos.wrapping_step((1, 0)), Position::new(4, 3));
        assert_eq!(pos.wrapping_step((-1, 0)), Position::new(2, 3));
        assert_eq!(pos.wrapping_step((0, 1)), Position::new(3, 4));
        assert_eq!(pos.wrapping_step((0, -1)), Position::new(3, 2));

        // Edge crossings land on the opposite edge.
        assert_eq!(Position::new(0, 5).wrapping_step((-1, 0)), Position::new(7, 5));
        assert_eq!(Position::new(7, 5).wrapping_step((1, 0)), Position::new(0, 5));
        assert_eq!(Position::new(5, 0).wrapping_step((0, -1)), Position::new(5, 7));
        assert_eq!(Position::new(5, 7).wrapping_step((0, 1)), Position::new(5, 0));
    }

    #[test]
    fn test_wrap_closure_all_headings_all_cells() {
        // Stepping never leaves the grid, from any cell in any direction.
        for row in 0..GRID_SIZE as u8 {
            for col in 0..GRID_SIZE as u8 {
                for heading in [Heading::Up, Heading::Down, Heading::Left, Heading::Right] {
                    let next = Position::new(row, col).wrapping_step(heading.delta());
                    assert!((next.row as usize) < GRID_SIZE);
                    assert!((next.col as usize) < GRID_SIZE);
                }
            }
        }
    }

    #[test]
    fn test_initial_configuration() {
        let body = SnakeBody::new();
        assert_eq!(body.len(), 2);
        assert_eq!(body.heading, Heading::Right);
        assert_eq!(body.score, 0);
        assert_eq!(body.head_position(), Position::new(2, 3));

        let segments: Vec<_> = body.segments().collect();
        assert_eq!(segments, vec![Position::new(2, 2), Position::new(2, 3)]);
    }

    #[test]
    fn test_advance_head_leaves_tail_and_len() {
        let mut body = SnakeBody::new();
        let new_head = body.advance_head(Heading::Right.delta());

        assert_eq!(new_head, Position::new(2, 4));
        assert_eq!(body.head_position(), new_head);
        assert_eq!(body.len(), 2); // len only moves through grow()
        // The old segments are still occupied until the tail retracts.
        assert!(body.occupies(Position::new(2, 2)));
        assert!(body.occupies(Position::new(2, 3)));
        assert!(body.occupies(Position::new(2, 4)));
    }

    #[test]
    fn test_retract_tail_releases_oldest() {
        let mut body = SnakeBody::new();
        body.advance_head(Heading::Right.delta());
        body.retract_tail();

        assert!(!body.occupies(Position::new(2, 2)));
        assert!(body.occupies(Position::new(2, 3)));
        assert!(body.occupies(Position::new(2, 4)));
        assert_eq!(body.segments().count(), body.len());
    }

    #[test]
    fn test_grow_saturates_at_capacity() {
        let mut body = SnakeBody::new();
        for _ in 0..SEGMENT_CAPACITY * 2 {
            body.grow();
        }
        assert_eq!(body.len(), SEGMENT_CAPACITY);
        assert!(body.is_full());
    }

    /// Drives the ring and a plain `VecDeque` model through the same move
    /// sequence and checks `occupies` over every grid cell at each step.
    #[test]
    fn test_occupies_matches_reference_model() {
        let mut body = SnakeBody::new();
        let mut model: VecDeque<Position> = body.segments().collect();

        // A path long enough to grow to capacity and wrap the buffer indices
        // several times over.
        let moves = [
            (Heading::Right, true),
            (Heading::Down, false),
            (Heading::Down, true),
            (Heading::Left, false),
            (Heading::Left, true),
            (Heading::Up, false),
            (Heading::Right, true),
            (Heading::Down, false),
            (Heading::Down, true),
            (Heading::Left, false),
            (Heading::Left, true),
            (Heading::Up, false),
            (Heading::Right, true),
            (Heading::Down, false),
            (Heading::Down, true),
            (Heading::Left, false),
            (Heading::Up, true),
            (Heading::Up, false),
            (Heading::Right, true),
            (Heading::Right, false),
            (Heading::Down, true),
            (Heading::Down, false),
        ];

        for (heading, eat) in moves {
            let new_head = body.advance_head(heading.delta());
            model.push_back(new_head);
            if eat && body.len() < SEGMENT_CAPACITY {
                body.grow();
            } else {
                body.retract_tail();
                model.pop_front();
            }

            assert_eq!(body.segments().count(), body.len());
            let expected: Vec<_> = model.iter().copied().collect();
            let actual: Vec<_> = body.segments().collect();
            assert_eq!(actual, expected);

            for row in 0..GRID_SIZE as u8 {
                for col in 0..GRID_SIZE as u8 {
                    let cell = Position::new(row, col);
                    assert_eq!(body.occupies(cell), model.contains(&cell), "{cell:?}");
                }
            }
        }
    }

    #[test]
    fn test_ring_indices_wrap_past_capacity() {
        let mut body = SnakeBody::new();
        // Far more moves than the buffer holds, so head and tail lap it and
        // the head index drops below the tail index along the way.
        for _ in 0..40 {
            body.advance_head(body.heading.delta());
            body.retract_tail();
            assert_eq!(body.segments().count(), body.len());
        }
        // 40 right-steps is five laps of the 8-wide grid, back to the start.
        let segments: Vec<_> = body.segments().collect();
        assert_eq!(segments, vec![Position::new(2, 2), Position::new(2, 3)]);
    }
}
