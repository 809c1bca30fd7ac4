//! Line scores for candidate evaluation
//!
//! A line is scored by its stone count and how many of its ends are open.
//! Open ends weigh an order of magnitude more than closed ones.

/// Point values for line patterns
pub struct LineScore;

impl LineScore {
    /// Five or more: wins regardless of ends
    pub const FIVE: i32 = 100_000;

    /// Open four: _OOOO_
    pub const OPEN_FOUR: i32 = 10_000;
    /// Closed four: XOOOO_ or _OOOOX
    pub const CLOSED_FOUR: i32 = 1_000;

    /// Open three: _OOO_
    pub const OPEN_THREE: i32 = 1_000;
    /// Closed three: XOOO_ or _OOOX
    pub const CLOSED_THREE: i32 = 100;

    /// Open two: _OO_
    pub const OPEN_TWO: i32 = 100;
    /// Closed two: XOO_ or _OOX
    pub const CLOSED_TWO: i32 = 10;
}

/// Map a line's `(count, open_ends)` to its point value.
///
/// Lines with both ends blocked are dead and score nothing unless they
/// already reach five. Single stones score nothing.
pub fn line_value(count: usize, open_ends: u8) -> i32 {
    match (count, open_ends) {
        (5.., _) => LineScore::FIVE,
        (4, 2) => LineScore::OPEN_FOUR,
        (4, 1) => LineScore::CLOSED_FOUR,
        (3, 2) => LineScore::OPEN_THREE,
        (3, 1) => LineScore::CLOSED_THREE,
        (2, 2) => LineScore::OPEN_TWO,
        (2, 1) => LineScore::CLOSED_TWO,
        _ => 0,
    }
}
