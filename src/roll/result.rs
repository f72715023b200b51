use crate::common::*;
use crate::parse::ast::RollRequest;
use std::fmt::{self, Write};

/// The outcome of evaluating a [`RollRequest`].
///
/// `rolls` holds the faces counted toward the total, `raw` every face drawn.
/// They differ only when advantage or disadvantage dropped dice.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct RollResult {
    request: RollRequest,
    raw: Vec<UInt>,
    rolls: Vec<UInt>,
    total: Int,
    formula: String,
    breakdown: String,
}

impl RollResult {
    pub(crate) fn modifier_only(request: RollRequest) -> Self {
        let modifier = request.modifier();
        Self {
            request,
            raw: Vec::new(),
            rolls: Vec::new(),
            total: modifier,
            formula: modifier.to_string(),
            breakdown: modifier.to_string(),
        }
    }

    pub(crate) fn from_faces(request: RollRequest, raw: NonEmpty<UInt>) -> Self {
        let kept = if raw.len() >= 2 {
            request.keep().select(&raw)
        } else {
            None
        };
        let rolls = match kept {
            Some(face) => vec![face],
            None => raw.to_vec(),
        };
        let total = rolls
            .iter()
            .copied()
            .map(Int::from)
            .sum::<Int>()
            .saturating_add(request.modifier());

        let breakdown = Breakdown {
            raw: &raw,
            kept: kept.zip(request.keep().label()),
            modifier: request.modifier(),
            total,
        }
        .to_string();

        Self {
            request,
            raw: raw.into_vec(),
            rolls,
            total,
            formula: request.formula(),
            breakdown,
        }
    }

    pub fn request(&self) -> &RollRequest {
        &self.request
    }

    /// Faces counted toward the total.
    pub fn rolls(&self) -> &[UInt] {
        &self.rolls
    }

    /// Every face drawn, in order, including any dropped by a keep mode.
    pub fn raw(&self) -> &[UInt] {
        &self.raw
    }

    pub fn total(&self) -> Int {
        self.total
    }

    pub fn modifier(&self) -> Int {
        self.request.modifier()
    }

    pub fn formula(&self) -> &str {
        &self.formula
    }

    pub fn breakdown(&self) -> &str {
        &self.breakdown
    }

    /// The surviving face and its label when advantage or disadvantage applied.
    pub fn kept(&self) -> Option<(UInt, &'static str)> {
        match (self.raw.len() >= 2, self.rolls.as_slice(), self.request.keep().label()) {
            (true, &[face], Some(label)) => Some((face, label)),
            _ => None,
        }
    }
}

impl fmt::Display for RollResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.breakdown)
    }
}

struct Breakdown<'a> {
    raw: &'a [UInt],
    kept: Option<(UInt, &'a str)>,
    modifier: Int,
    total: Int,
}

impl fmt::Display for Breakdown<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('[')?;
        for (i, face) in self.raw.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", face)?;
        }
        f.write_char(']')?;
        if let Some((face, label)) = self.kept {
            write!(f, "→{} ({})", face, label)?;
        }
        if self.modifier != 0 {
            f.write_char(' ')?;
            fmt_signed(self.modifier, f)?;
        }
        write!(f, " = {}", self.total)
    }
}
