mod ctx;
mod result;
mod roller;

use crate::parse::ast::RollRequest;

pub use ctx::{DefaultRoller, RollContext};
pub use result::RollResult;
pub use roller::{Roller, ScriptedRoller};

/// Evaluates a request with the thread-local generator.
pub fn evaluate(request: &RollRequest) -> RollResult {
    evaluate_with(request, &mut rand::thread_rng())
}

/// Evaluates a request with a caller-supplied roller.
pub fn evaluate_with<R: Roller + ?Sized>(request: &RollRequest, roller: &mut R) -> RollResult {
    ctx::eval_with(roller, request)
}
