//! Player inventory bookkeeping.

use std::collections::BTreeMap;

use sandvox_core::BlockId;

/// Counted block storage. Entries are strictly positive; a count reaching
/// zero removes the key.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Inventory {
    counts: BTreeMap<BlockId, u32>,
}

impl Inventory {
    /// Create an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `block` currently held.
    pub fn count(&self, block: BlockId) -> u32 {
        self.counts.get(&block).copied().unwrap_or(0)
    }

    /// Whether at least `amount` of `block` is held.
    pub fn has(&self, block: BlockId, amount: u32) -> bool {
        self.count(block) >= amount
    }

    /// Returns true when nothing is held.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Add `amount` of `block`.
    pub fn add(&mut self, block: BlockId, amount: u32) {
        if amount == 0 {
            return;
        }
        *self.counts.entry(block).or_insert(0) += amount;
    }

    /// Remove exactly `amount` of `block`, all or nothing.
    ///
    /// Returns false and leaves the inventory untouched when fewer than
    /// `amount` are held.
    pub fn take(&mut self, block: BlockId, amount: u32) -> bool {
        let Some(held) = self.counts.get_mut(&block) else {
            return amount == 0;
        };
        if *held < amount {
            return false;
        }
        *held -= amount;
        if *held == 0 {
            self.counts.remove(&block);
        }
        true
    }

    /// Iterate over held blocks and their counts.
    pub fn iter(&self) -> impl Iterator<Item = (BlockId, u32)> + '_ {
        self.counts.iter().map(|(block, count)| (*block, *count))
    }
}
