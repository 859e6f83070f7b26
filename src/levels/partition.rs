//! Beginner partition mode: split the target's items into two groups.
//!
//! Placement is decorative. It gates submission (every item must be placed)
//! but never changes the even/odd ground truth.

use serde::{Deserialize, Serialize};

/// One of the two named groups.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bucket {
    Group1,
    Group2,
}

impl Bucket {
    /// Translation key for the group heading.
    #[must_use]
    pub const fn as_key(self) -> &'static str {
        match self {
            Bucket::Group1 => "group_1",
            Bucket::Group2 => "group_2",
        }
    }
}

/// Placement of each item of the current target number.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partition {
    slots: Vec<Option<Bucket>>,
}

impl Partition {
    /// `items` unplaced items, one per unit of the target number.
    #[must_use]
    pub fn new(items: u32) -> Self {
        Self {
            slots: vec![None; items as usize],
        }
    }

    #[must_use]
    pub fn items(&self) -> usize {
        self.slots.len()
    }

    /// Put `item` in `bucket`, moving it if already placed.
    ///
    /// Returns false if `item` is out of range.
    pub fn place(&mut self, item: usize, bucket: Bucket) -> bool {
        match self.slots.get_mut(item) {
            Some(slot) => {
                *slot = Some(bucket);
                true
            }
            None => false,
        }
    }

    /// Take `item` back out of its group.
    pub fn remove(&mut self, item: usize) -> bool {
        match self.slots.get_mut(item) {
            Some(slot) => slot.take().is_some(),
            None => false,
        }
    }

    #[must_use]
    pub fn bucket_of(&self, item: usize) -> Option<Bucket> {
        self.slots.get(item).copied().flatten()
    }

    #[must_use]
    pub fn count(&self, bucket: Bucket) -> usize {
        self.slots.iter().filter(|s| **s == Some(bucket)).count()
    }

    #[must_use]
    pub fn unplaced(&self) -> usize {
        self.slots.iter().filter(|s| s.is_none()).count()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.unplaced() == 0
    }

    /// Both groups hold the same number of items.
    #[must_use]
    pub fn is_even_split(&self) -> bool {
        self.is_complete() && self.count(Bucket::Group1) == self.count(Bucket::Group2)
    }
}
