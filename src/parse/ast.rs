use super::parser::MAX_DICE;
use crate::common::*;
use std::fmt;

/// A parsed roll: `count` dice with `sides` faces, an optional keep mode, and a
/// flat modifier added after the dice are summed.
///
/// A pure modifier such as `"+3"` is a request with `count == 0` and
/// `sides == 0`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct RollRequest {
    count: UInt,
    sides: UInt,
    modifier: Int,
    keep: KeepMode,
}

impl RollRequest {
    /// Counts above [`MAX_DICE`] are clamped to it.
    pub const fn dice(count: UInt, sides: NonZeroUInt) -> Self {
        Self {
            count: if count > MAX_DICE { MAX_DICE } else { count },
            sides: sides.get(),
            modifier: 0,
            keep: KeepMode::None,
        }
    }

    pub const fn modifier_only(modifier: Int) -> Self {
        Self {
            count: 0,
            sides: 0,
            modifier,
            keep: KeepMode::None,
        }
    }

    pub const fn with_modifier(mut self, modifier: Int) -> Self {
        self.modifier = modifier;
        self
    }

    /// Advantage and disadvantage need at least two dice; on fewer the keep
    /// mode is dropped.
    pub const fn with_keep(mut self, keep: KeepMode) -> Self {
        self.keep = if self.count > 1 { keep } else { KeepMode::None };
        self
    }

    pub const fn count(&self) -> UInt {
        self.count
    }

    pub const fn sides(&self) -> UInt {
        self.sides
    }

    pub const fn modifier(&self) -> Int {
        self.modifier
    }

    pub const fn keep(&self) -> KeepMode {
        self.keep
    }

    /// The die to draw from, or `None` when nothing is rolled.
    pub fn die(&self) -> Option<NonZeroUInt> {
        if self.count == 0 {
            None
        } else {
            NonZeroUInt::new(self.sides)
        }
    }

    /// Canonical notation: `2d6+3`, `1d20`, or just the modifier when no dice
    /// are rolled. Keep modes are not echoed.
    pub fn formula(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for RollRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.die() {
            Some(sides) => {
                write!(f, "{}d{}", self.count, sides)?;
                fmt_signed(self.modifier, f)
            }
            None => fmt::Display::fmt(&self.modifier, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(count: UInt, sides: UInt) -> RollRequest {
        RollRequest::dice(count, NonZeroUInt::new(sides).unwrap())
    }

    #[test]
    fn test_formula() {
        assert_eq!(d(2, 6).with_modifier(3).formula(), "2d6+3");
        assert_eq!(d(1, 20).formula(), "1d20");
        assert_eq!(d(1, 4).with_modifier(-1).formula(), "1d4-1");
        assert_eq!(d(2, 20).with_keep(KeepMode::Highest).formula(), "2d20");
        assert_eq!(RollRequest::modifier_only(3).formula(), "3");
        assert_eq!(RollRequest::modifier_only(-2).formula(), "-2");
        assert_eq!(d(0, 6).with_modifier(2).formula(), "2");
    }

    #[test]
    fn test_keep_needs_two_dice() {
        assert_eq!(d(2, 20).with_keep(KeepMode::Lowest).keep(), KeepMode::Lowest);
        assert_eq!(d(1, 20).with_keep(KeepMode::Highest).keep(), KeepMode::None);
        assert_eq!(d(0, 20).with_keep(KeepMode::Highest).keep(), KeepMode::None);
    }

    #[test]
    fn test_count_is_capped() {
        assert_eq!(d(UInt::MAX, 6).count(), MAX_DICE);
        assert_eq!(d(MAX_DICE, 6).count(), MAX_DICE);
        assert_eq!(d(MAX_DICE + 1, 6).formula(), "1000d6");
    }
}
