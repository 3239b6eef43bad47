//! Tree decoration.

use sandvox_core::{blocks, BlockPos, Bounds};

use crate::storage::VoxelStore;

/// Number of log blocks in a trunk.
const TRUNK_HEIGHT: i32 = 4;

/// Canopy radius on each horizontal axis.
const CANOPY_RADIUS: i32 = 2;

/// Maximum Manhattan distance from the canopy center to a leaf.
const CANOPY_REACH: i32 = 4;

/// Grow a tree with its trunk base at `trunk_base`.
///
/// The trunk is a vertical log column; leaves fill a diamond-shaped canopy
/// centered three blocks above the trunk base, clipped to the world bounds and
/// overwriting whatever was there.
pub(crate) fn grow_tree(store: &mut VoxelStore, bounds: Bounds, trunk_base: BlockPos) {
    for dy in 0..TRUNK_HEIGHT {
        store.set(trunk_base.offset(0, dy, 0), blocks::LOG);
    }
    for dx in -CANOPY_RADIUS..=CANOPY_RADIUS {
        for dy in -1i32..=1 {
            for dz in -CANOPY_RADIUS..=CANOPY_RADIUS {
                if dx.abs() + dy.abs() + dz.abs() > CANOPY_REACH {
                    continue;
                }
                let leaf = trunk_base.offset(dx, 3 + dy, dz);
                if bounds.contains(leaf) {
                    store.set(leaf, blocks::LEAVES);
                }
            }
        }
    }
}
