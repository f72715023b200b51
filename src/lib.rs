//! Dice notation for tabletop campaigns.
//!
//! Parse notation such as `2d6+3`, `d20` or `2d20kh1` into a [`RollRequest`],
//! then evaluate it against a [`Roller`] to get a [`RollResult`].
//!
//! ```
//! # use campaign_dice::Int;
//! let result = campaign_dice::roll("2d20kh1+5").unwrap();
//! assert_eq!(result.rolls().len(), 1);
//! assert_eq!(result.total(), Int::from(result.rolls()[0]) + 5);
//! assert_eq!(result.formula(), "2d20+5");
//! ```

mod common;
mod error;
pub mod history;
pub mod parse;
pub mod presets;
pub mod roll;
pub mod stringify;

pub use common::{vec1, Int, KeepMode, NonEmpty, NonZeroUInt, Num, UInt};
pub use error::InvalidNotation;
pub use history::RollHistory;
pub use parse::{ast::RollRequest, parse, MAX_DICE};
pub use presets::{Preset, UnknownPreset};
pub use roll::{evaluate, evaluate_with, RollContext, RollResult, Roller, ScriptedRoller};
pub use stringify::{MarkdownStringifier, SimpleStringifier, Stringifier, Stringify};

/// Parses and evaluates notation with the thread-local generator.
///
/// Returns [`InvalidNotation`] when the text is not dice notation; the caller
/// should ignore the attempt.
pub fn roll(notation: &str) -> Result<RollResult, InvalidNotation> {
    let request = parse(notation)?;
    Ok(evaluate(&request))
}
