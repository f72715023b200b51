/// The notation matched neither a dice term nor a plain modifier.
///
/// Callers should discard the attempt and leave prior state untouched.
/// `position` is a byte offset into the normalised input (lowercase, no
/// whitespace), pointing at the first token that could not be accepted.
#[derive(thiserror::Error, Debug, Clone, Eq, PartialEq)]
#[error("invalid dice notation {notation:?} (at position {position})")]
pub struct InvalidNotation {
    pub notation: String,
    pub position: usize,
}

impl InvalidNotation {
    pub(crate) fn new(notation: impl ToString, position: usize) -> Self {
        Self {
            notation: notation.to_string(),
            position,
        }
    }
}
