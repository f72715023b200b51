pub mod ast;
mod lexer;
mod parser;

use crate::error::InvalidNotation;
use ast::RollRequest;

pub use parser::MAX_DICE;

/// Parses dice notation such as `2d6+3`, `d20`, `2d20kh1` or a bare modifier
/// like `+3`.
///
/// Case and whitespace are ignored.
///
/// # Examples
/// ```
/// # use campaign_dice::{parse, KeepMode};
/// let request = parse("2D20 kh1 + 5").unwrap();
/// assert_eq!(request.count(), 2);
/// assert_eq!(request.sides(), 20);
/// assert_eq!(request.modifier(), 5);
/// assert_eq!(request.keep(), KeepMode::Highest);
///
/// assert!(parse("2dx").is_err());
/// ```
pub fn parse(notation: &str) -> Result<RollRequest, InvalidNotation> {
    let normalised = normalise(notation);
    parser::Parser::new(&normalised).parse().map_err(|e| {
        tracing::debug!(notation, error = %e, "rejected dice notation");
        InvalidNotation::new(notation, e.span.start)
    })
}

fn normalise(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}
