use std::fmt;
use std::num::{NonZeroU32, NonZeroUsize};
pub use vec1::vec1;

/// Signed values: modifiers and totals.
pub type Int = i64;
/// Unsigned literals: dice counts, faces and die values.
pub type UInt = u32;
pub type NonZeroUInt = NonZeroU32;

pub type Num = NonZeroUsize;

pub type NonEmpty<T> = vec1::Vec1<T>;

/// Which single die survives a roll of two or more dice.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum KeepMode {
    #[default]
    None,
    /// `kh`, rolled with advantage.
    Highest,
    /// `kl`, rolled with disadvantage.
    Lowest,
}

impl KeepMode {
    pub const fn is_active(self) -> bool {
        !matches!(self, Self::None)
    }

    /// The label shown next to the kept die, if any.
    pub const fn label(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Highest => Some("Advantage"),
            Self::Lowest => Some("Disadvantage"),
        }
    }

    /// Picks the surviving face. Ties resolve to the first matching face.
    pub(crate) fn select(self, raw: &NonEmpty<UInt>) -> Option<UInt> {
        let first = *raw.first();
        match self {
            Self::None => None,
            Self::Highest => Some(raw.iter().copied().fold(first, UInt::max)),
            Self::Lowest => Some(raw.iter().copied().fold(first, UInt::min)),
        }
    }
}

impl fmt::Display for KeepMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::None => "",
            Self::Highest => "kh",
            Self::Lowest => "kl",
        };
        f.write_str(s)
    }
}

/// Writes a modifier the way formulas show it: `+3`, `-2`, or nothing for zero.
pub(crate) fn fmt_signed(modifier: Int, f: &mut impl fmt::Write) -> fmt::Result {
    match modifier {
        0 => Ok(()),
        m if m > 0 => write!(f, "+{}", m),
        m => write!(f, "{}", m),
    }
}
