use crate::common::{NonEmpty, NonZeroUInt, UInt};
use rand::{
    distributions::{Distribution, Uniform},
    Rng,
};

/// A source of die faces.
///
/// Every [`rand::Rng`] is a `Roller`; [`ScriptedRoller`] replays fixed faces.
pub trait Roller {
    /// Draws one face in `1..=sides`.
    fn roll(&mut self, sides: NonZeroUInt) -> UInt;

    fn roll_many(&mut self, num: NonZeroUInt, sides: NonZeroUInt) -> NonEmpty<UInt> {
        let mut faces = NonEmpty::with_capacity(self.roll(sides), num.get() as usize);
        for _ in 1..num.get() {
            faces.push(self.roll(sides));
        }
        faces
    }
}

impl<R: Rng> Roller for R {
    fn roll(&mut self, sides: NonZeroUInt) -> UInt {
        self.gen_range(1..=sides.get())
    }

    fn roll_many(&mut self, num: NonZeroUInt, sides: NonZeroUInt) -> NonEmpty<UInt> {
        let distr = Uniform::new_inclusive(1, sides.get());
        let mut faces = NonEmpty::with_capacity(distr.sample(self), num.get() as usize);
        for _ in 1..num.get() {
            faces.push(distr.sample(self));
        }
        faces
    }
}

/// Replays a fixed sequence of faces, cycling once it runs out.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ScriptedRoller {
    faces: NonEmpty<UInt>,
    next: usize,
}

impl ScriptedRoller {
    /// Faces outside `1..=sides` of the die being rolled are clamped into
    /// range, and each clamp is logged as a warning.
    pub fn new(faces: NonEmpty<UInt>) -> Self {
        Self { faces, next: 0 }
    }
}

impl Roller for ScriptedRoller {
    fn roll(&mut self, sides: NonZeroUInt) -> UInt {
        let face = self.faces[self.next % self.faces.len()];
        self.next += 1;
        let clamped = face.clamp(1, sides.get());
        if clamped != face {
            tracing::warn!(face, sides = sides.get(), clamped, "scripted face out of range");
        }
        clamped
    }
}

#[cfg(test)]
pub(crate) use step::StepRoller;
