use crate::common::Num;
use crate::roll::RollResult;
use std::collections::VecDeque;

/// A bounded list of recent rolls, newest first.
///
/// The engine itself never records anything; callers that want a "recent
/// rolls" list keep one of these and push results into it.
#[derive(Debug, Clone)]
pub struct RollHistory {
    entries: VecDeque<RollResult>,
    capacity: Num,
}

impl RollHistory {
    pub const DEFAULT_CAPACITY: usize = 5;

    pub fn new(capacity: Num) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.get()),
            capacity,
        }
    }

    /// Records a roll, evicting the oldest one when full.
    pub fn push(&mut self, result: RollResult) {
        if self.entries.len() == self.capacity.get() {
            self.entries.pop_back();
        }
        self.entries.push_front(result);
    }

    pub fn latest(&self) -> Option<&RollResult> {
        self.entries.front()
    }

    /// Iterates from newest to oldest.
    pub fn iter(&self) -> impl Iterator<Item = &RollResult> + '_ {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for RollHistory {
    fn default() -> Self {
        Self::new(Num::MIN.saturating_add(Self::DEFAULT_CAPACITY - 1))
    }
}
