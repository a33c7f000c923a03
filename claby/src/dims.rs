use std::ops::{Add, Mul};

/// Position or size on a grid, stored as `(row, column)`.
///
/// Components are signed so that a step off the edge of a grid is still a
/// representable position, which the grid then rejects in its bounds check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dims(pub i32, pub i32);

impl Dims {
    pub fn all_odd(self) -> bool {
        self.0 % 2 != 0 && self.1 % 2 != 0
    }

    /// Both coordinates even, the wall slots where no passage is ever carved.
    pub fn all_even(self) -> bool {
        self.0 % 2 == 0 && self.1 % 2 == 0
    }

    pub fn product(self) -> i64 {
        self.0 as i64 * self.1 as i64
    }
}

impl Add for Dims {
    type Output = Dims;

    fn add(self, other: Dims) -> Dims {
        Dims(self.0 + other.0, self.1 + other.1)
    }
}

impl Mul<i32> for Dims {
    type Output = Dims;

    fn mul(self, other: i32) -> Dims {
        Dims(self.0 * other, self.1 * other)
    }
}

impl From<(u16, u16)> for Dims {
    fn from(tuple: (u16, u16)) -> Self {
        Dims(tuple.0 as i32, tuple.1 as i32)
    }
}
