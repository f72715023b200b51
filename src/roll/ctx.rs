use super::{result::RollResult, roller::Roller};
use crate::common::*;
use crate::error::InvalidNotation;
use crate::parse::{self, ast::RollRequest};

pub type DefaultRoller = rand::rngs::ThreadRng;

/// Evaluates roll requests against an owned [`Roller`].
///
/// The context holds no state besides the roller, so a seeded or scripted
/// roller gives fully reproducible results.
pub struct RollContext<R = DefaultRoller> {
    roller: R,
}

impl<R: Roller> RollContext<R> {
    pub fn new(roller: R) -> Self {
        Self { roller }
    }

    pub fn eval(&mut self, request: &RollRequest) -> RollResult {
        eval_with(&mut self.roller, request)
    }

    pub fn roll(&mut self, notation: &str) -> Result<RollResult, InvalidNotation> {
        let request = parse::parse(notation)?;
        Ok(self.eval(&request))
    }

    pub fn into_roller(self) -> R {
        self.roller
    }
}

impl Default for RollContext {
    fn default() -> Self {
        Self::new(rand::thread_rng())
    }
}

pub(crate) fn eval_with<R: Roller + ?Sized>(roller: &mut R, request: &RollRequest) -> RollResult {
    let (num, sides) = match (NonZeroUInt::new(request.count()), request.die()) {
        (Some(num), Some(sides)) => (num, sides),
        _ => return RollResult::modifier_only(*request),
    };
    let raw = roller.roll_many(num, sides);
    let result = RollResult::from_faces(*request, raw);
    tracing::trace!(
        formula = result.formula(),
        total = result.total(),
        breakdown = result.breakdown(),
        "evaluated roll"
    );
    result
}
