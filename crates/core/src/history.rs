//! Bounded history of recent values
//!
//! A fixed-capacity FIFO: pushing into a full history evicts the oldest value.
//! Duplicates occupy separate slots, so pushing `5` three times into a
//! capacity-3 history fills all three slots with `5`.

use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    values: VecDeque<u32>,
    capacity: usize,
}

impl History {
    /// Create an empty history holding at most `capacity` values
    pub fn new(capacity: usize) -> Self {
        Self {
            values: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Record a value, evicting the oldest one when full
    pub fn push(&mut self, value: u32) {
        if self.capacity == 0 {
            return;
        }
        if self.values.len() == self.capacity {
            self.values.pop_front();
        }
        self.values.push_back(value);
    }

    /// Check if `value` is among the recorded values.
    ///
    /// Slots not yet filled hold nothing, so a fresh history contains no value.
    pub fn contains(&self, value: u32) -> bool {
        self.values.contains(&value)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Forget every recorded value
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Recorded values, oldest first
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.values.iter().copied()
    }
}
