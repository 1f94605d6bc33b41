use std::fmt;

use super::RouteError;

/// Limits on how many consecutive moves may be made in one direction.
///
/// A turn is only allowed once at least `min` moves have been made in the
/// current direction, and a run may never grow beyond `max` moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RunBounds {
    min: u32,
    max: u32,
}

impl RunBounds {
    /// At most three moves in a straight line, turn whenever.
    pub const CRUCIBLE: Self = Self { min: 1, max: 3 };

    /// Between four and ten moves in a straight line before turning or
    /// stopping.
    pub const ULTRA_CRUCIBLE: Self = Self { min: 4, max: 10 };

    pub fn new(min: u32, max: u32) -> Result<Self, RouteError> {
        if min < 1 || max < min {
            return Err(RouteError::InvalidRunBounds { min, max });
        }
        Ok(Self { min, max })
    }

    #[inline]
    pub fn min(&self) -> u32 {
        self.min
    }

    #[inline]
    pub fn max(&self) -> u32 {
        self.max
    }

    /// Returns true if a run of length `run` may continue straight.
    #[inline]
    pub fn can_continue(&self, run: u32) -> bool {
        run < self.max
    }

    /// Returns true if a run of length `run` is long enough to turn, or to
    /// stop.
    #[inline]
    pub fn can_turn(&self, run: u32) -> bool {
        run >= self.min
    }
}

impl fmt::Display for RunBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.min, self.max)
    }
}
