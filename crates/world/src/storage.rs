//! Sparse voxel storage.

use std::collections::BTreeMap;

use sandvox_core::{BlockId, BlockPos};

/// Sparse block arena keyed by absolute position; absent entries mean air.
/// Uses BTreeMap for deterministic iteration order (critical for world
/// snapshot comparisons).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct VoxelStore {
    blocks: BTreeMap<BlockPos, BlockId>,
}

impl VoxelStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of occupied voxels.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Returns true when no voxel is occupied.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Fetch the block stored at `pos`, if any.
    pub fn get(&self, pos: BlockPos) -> Option<BlockId> {
        self.blocks.get(&pos).copied()
    }

    /// Store `block` at `pos`, overwriting any previous occupant.
    pub fn set(&mut self, pos: BlockPos, block: BlockId) {
        self.blocks.insert(pos, block);
    }

    /// Remove and return the block at `pos`.
    pub fn remove(&mut self, pos: BlockPos) -> Option<BlockId> {
        self.blocks.remove(&pos)
    }

    /// Iterate over occupied voxels in deterministic position order.
    pub fn iter(&self) -> impl Iterator<Item = (BlockPos, BlockId)> + '_ {
        self.blocks.iter().map(|(pos, block)| (*pos, *block))
    }
}
