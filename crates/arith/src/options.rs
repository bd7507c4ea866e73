//! Options for the engine operations.
//!
//! Each options type starts from `new()` defaults and is customised with
//! `with_*` builders.

use almanac_calendar::Overflow;

use crate::anchor::RelativeTo;
use crate::mode::RoundingMode;
use crate::unit::Unit;

/// Options for [`add`](crate::add) and [`subtract`](crate::subtract).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddOptions {
    overflow: Overflow,
    relative_to: Option<RelativeTo>,
}

impl AddOptions {
    /// Defaults: `overflow = constrain`, no anchor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the policy for days past the end of a month.
    pub fn with_overflow(mut self, overflow: Overflow) -> Self {
        self.overflow = overflow;
        self
    }

    /// Sets the anchor used to balance the sum of two durations.
    pub fn with_relative_to(mut self, relative_to: RelativeTo) -> Self {
        self.relative_to = Some(relative_to);
        self
    }

    /// Returns the overflow policy.
    pub fn overflow(&self) -> Overflow {
        self.overflow
    }

    /// Returns the anchor, if any.
    pub fn relative_to(&self) -> Option<&RelativeTo> {
        self.relative_to.as_ref()
    }
}

/// Options for [`difference`](crate::difference).
///
/// # Example
///
/// ```
/// use almanac_arith::{DifferenceOptions, RoundingMode, Unit};
///
/// let options = DifferenceOptions::new()
///     .with_largest(Unit::Hour)
///     .with_smallest(Unit::Minute)
///     .with_increment(15)
///     .with_mode(RoundingMode::HalfExpand);
/// assert_eq!(options.largest(), Some(Unit::Hour));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DifferenceOptions {
    largest: Option<Unit>,
    smallest: Option<Unit>,
    increment: i64,
    mode: RoundingMode,
}

impl DifferenceOptions {
    /// Defaults: largest unit picked per kind, finest smallest unit of the
    /// kind, increment 1, `trunc`.
    pub fn new() -> Self {
        Self {
            largest: None,
            smallest: None,
            increment: 1,
            mode: RoundingMode::Trunc,
        }
    }

    /// Sets the coarsest unit of the result.
    pub fn with_largest(mut self, unit: Unit) -> Self {
        self.largest = Some(unit);
        self
    }

    /// Sets the finest unit of the result.
    pub fn with_smallest(mut self, unit: Unit) -> Self {
        self.smallest = Some(unit);
        self
    }

    /// Sets the rounding increment, in smallest units.
    pub fn with_increment(mut self, increment: i64) -> Self {
        self.increment = increment;
        self
    }

    /// Sets the rounding mode.
    pub fn with_mode(mut self, mode: RoundingMode) -> Self {
        self.mode = mode;
        self
    }

    /// Returns the largest unit; `None` means automatic.
    pub fn largest(&self) -> Option<Unit> {
        self.largest
    }

    /// Returns the smallest unit; `None` means the finest for the kind.
    pub fn smallest(&self) -> Option<Unit> {
        self.smallest
    }

    /// Returns the rounding increment.
    pub fn increment(&self) -> i64 {
        self.increment
    }

    /// Returns the rounding mode.
    pub fn mode(&self) -> RoundingMode {
        self.mode
    }
}

impl Default for DifferenceOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Options for [`round`](crate::round).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundOptions {
    smallest: Option<Unit>,
    largest: Option<Unit>,
    increment: i64,
    mode: RoundingMode,
    relative_to: Option<RelativeTo>,
}

impl RoundOptions {
    /// Rounds to `smallest` with increment 1 and `halfExpand`.
    pub fn new(smallest: Unit) -> Self {
        Self {
            smallest: Some(smallest),
            ..Self::default()
        }
    }

    /// Sets the finest unit of the result.
    pub fn with_smallest(mut self, unit: Unit) -> Self {
        self.smallest = Some(unit);
        self
    }

    /// Sets the coarsest unit of a rounded duration.
    pub fn with_largest(mut self, unit: Unit) -> Self {
        self.largest = Some(unit);
        self
    }

    /// Sets the rounding increment, in smallest units.
    pub fn with_increment(mut self, increment: i64) -> Self {
        self.increment = increment;
        self
    }

    /// Sets the rounding mode.
    pub fn with_mode(mut self, mode: RoundingMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the anchor for durations with calendar units.
    pub fn with_relative_to(mut self, relative_to: RelativeTo) -> Self {
        self.relative_to = Some(relative_to);
        self
    }

    /// Returns the smallest unit.
    pub fn smallest(&self) -> Option<Unit> {
        self.smallest
    }

    /// Returns the largest unit; `None` means automatic.
    pub fn largest(&self) -> Option<Unit> {
        self.largest
    }

    /// Returns the rounding increment.
    pub fn increment(&self) -> i64 {
        self.increment
    }

    /// Returns the rounding mode.
    pub fn mode(&self) -> RoundingMode {
        self.mode
    }

    /// Returns the anchor, if any.
    pub fn relative_to(&self) -> Option<&RelativeTo> {
        self.relative_to.as_ref()
    }
}

impl Default for RoundOptions {
    /// No units set, increment 1, `halfExpand`.
    fn default() -> Self {
        Self {
            smallest: None,
            largest: None,
            increment: 1,
            mode: RoundingMode::HalfExpand,
            relative_to: None,
        }
    }
}

/// Options for [`total`](crate::total).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TotalOptions {
    unit: Unit,
    relative_to: Option<RelativeTo>,
}

impl TotalOptions {
    /// Totals in `unit` without an anchor.
    pub fn new(unit: Unit) -> Self {
        Self {
            unit,
            relative_to: None,
        }
    }

    /// Sets the anchor for months and years.
    pub fn with_relative_to(mut self, relative_to: RelativeTo) -> Self {
        self.relative_to = Some(relative_to);
        self
    }

    /// Returns the unit.
    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// Returns the anchor, if any.
    pub fn relative_to(&self) -> Option<&RelativeTo> {
        self.relative_to.as_ref()
    }
}

/// Options for [`compare`](crate::compare).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompareOptions {
    relative_to: Option<RelativeTo>,
}

impl CompareOptions {
    /// No anchor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the anchor for durations with calendar units.
    pub fn with_relative_to(mut self, relative_to: RelativeTo) -> Self {
        self.relative_to = Some(relative_to);
        self
    }

    /// Returns the anchor, if any.
    pub fn relative_to(&self) -> Option<&RelativeTo> {
        self.relative_to.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let add = AddOptions::new();
        assert_eq!(add.overflow(), Overflow::Constrain);
        assert!(add.relative_to().is_none());

        let diff = DifferenceOptions::new();
        assert_eq!(diff.mode(), RoundingMode::Trunc);
        assert_eq!(diff.increment(), 1);
        assert_eq!(diff.largest(), None);

        let round = RoundOptions::new(Unit::Minute);
        assert_eq!(round.mode(), RoundingMode::HalfExpand);
        assert_eq!(round.smallest(), Some(Unit::Minute));
    }

    #[test]
    fn builders() {
        let anchor: RelativeTo = "2020-01-01".parse().unwrap();
        let total = TotalOptions::new(Unit::Year).with_relative_to(anchor.clone());
        assert_eq!(total.relative_to(), Some(&anchor));
        let add = AddOptions::new().with_overflow(Overflow::Reject);
        assert_eq!(add.overflow(), Overflow::Reject);
    }
}
