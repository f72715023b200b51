use crate::common::{KeepMode, NonZeroUInt, UInt};
use crate::parse::ast::RollRequest;
use std::fmt;
use std::str::FromStr;

/// Rolls a table reaches for often enough to deserve a name.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Preset {
    D4,
    D6,
    D8,
    D10,
    D12,
    D20,
    D100,
    Advantage,
    Disadvantage,
    /// 4d6, keep highest. Note that only one die is kept.
    AbilityScore,
    Dagger,
    Shortsword,
    Longsword,
    Greatsword,
    Greataxe,
}

impl Preset {
    pub const ALL: &'static [Self] = &[
        Self::D4,
        Self::D6,
        Self::D8,
        Self::D10,
        Self::D12,
        Self::D20,
        Self::D100,
        Self::Advantage,
        Self::Disadvantage,
        Self::AbilityScore,
        Self::Dagger,
        Self::Shortsword,
        Self::Longsword,
        Self::Greatsword,
        Self::Greataxe,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::D4 => "d4",
            Self::D6 => "d6",
            Self::D8 => "d8",
            Self::D10 => "d10",
            Self::D12 => "d12",
            Self::D20 => "d20",
            Self::D100 => "d100",
            Self::Advantage => "advantage",
            Self::Disadvantage => "disadvantage",
            Self::AbilityScore => "ability",
            Self::Dagger => "dagger",
            Self::Shortsword => "shortsword",
            Self::Longsword => "longsword",
            Self::Greatsword => "greatsword",
            Self::Greataxe => "greataxe",
        }
    }

    pub const fn notation(self) -> &'static str {
        match self {
            Self::D4 | Self::Dagger => "1d4",
            Self::D6 | Self::Shortsword => "1d6",
            Self::D8 | Self::Longsword => "1d8",
            Self::D10 => "1d10",
            Self::D12 | Self::Greataxe => "1d12",
            Self::D20 => "1d20",
            Self::D100 => "1d100",
            Self::Advantage => "2d20kh1",
            Self::Disadvantage => "2d20kl1",
            Self::AbilityScore => "4d6kh3",
            Self::Greatsword => "2d6",
        }
    }

    pub fn request(self) -> RollRequest {
        let (count, sides, keep): (UInt, NonZeroUInt, KeepMode) = match self {
            Self::D4 | Self::Dagger => (1, nz::<4>(), KeepMode::None),
            Self::D6 | Self::Shortsword => (1, nz::<6>(), KeepMode::None),
            Self::D8 | Self::Longsword => (1, nz::<8>(), KeepMode::None),
            Self::D10 => (1, nz::<10>(), KeepMode::None),
            Self::D12 | Self::Greataxe => (1, nz::<12>(), KeepMode::None),
            Self::D20 => (1, nz::<20>(), KeepMode::None),
            Self::D100 => (1, nz::<100>(), KeepMode::None),
            Self::Advantage => (2, nz::<20>(), KeepMode::Highest),
            Self::Disadvantage => (2, nz::<20>(), KeepMode::Lowest),
            Self::AbilityScore => (4, nz::<6>(), KeepMode::Highest),
            Self::Greatsword => (2, nz::<6>(), KeepMode::None),
        };
        RollRequest::dice(count, sides).with_keep(keep)
    }
}

const fn nz<const N: UInt>() -> NonZeroUInt {
    NonZeroUInt::MIN.saturating_add(N - 1)
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(thiserror::Error, Debug, Clone, Eq, PartialEq)]
#[error("no preset named {0:?}")]
pub struct UnknownPreset(pub String);

impl FromStr for Preset {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownPreset(s.to_string()))
    }
}
