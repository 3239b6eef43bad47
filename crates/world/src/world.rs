//! World volume and spatial query API.

use sandvox_core::{blocks, BlockId, BlockPos, Bounds};

use crate::map;
use crate::storage::VoxelStore;
use crate::terrain::TerrainGenerator;

/// A small procedurally generated voxel world.
///
/// Populated once at construction; mutated afterwards only through
/// [`World::set_block`] and [`World::remove_block`]. Two worlds generated with
/// identical bounds and seed hold identical voxel maps.
pub struct World {
    bounds: Bounds,
    seed: u64,
    sea_level: i32,
    voxels: VoxelStore,
}

impl World {
    /// Generate a world from validated bounds and a seed.
    pub fn generate(bounds: Bounds, seed: u64) -> Self {
        let sea_level = bounds.height / 3 + 2;
        let voxels = TerrainGenerator::new(bounds, seed, sea_level).generate();
        Self {
            bounds,
            seed,
            sea_level,
            voxels,
        }
    }

    /// World bounds.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Seed the terrain was generated from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Height below which columns are flooded with water.
    pub fn sea_level(&self) -> i32 {
        self.sea_level
    }

    /// A solid position close to the center of the map.
    pub fn spawn_position(&self) -> BlockPos {
        let center_x = self.bounds.width / 2;
        let center_z = self.bounds.depth / 2;
        BlockPos::new(center_x, self.column_height(center_x, center_z), center_z)
    }

    /// Highest y whose block at `(x, z)` is neither air nor water; 0 if the
    /// column holds no such block.
    pub fn column_height(&self, x: i32, z: i32) -> i32 {
        for y in (0..self.bounds.height).rev() {
            if let Some(block) = self.voxels.get(BlockPos::new(x, y, z)) {
                if block != blocks::AIR && block != blocks::WATER {
                    return y;
                }
            }
        }
        0
    }

    /// Block at `pos`.
    ///
    /// Unset in-bounds cells read as air. Out-of-bounds cells read as stone so
    /// nothing can walk past the world edge.
    pub fn get_block(&self, pos: BlockPos) -> BlockId {
        if !self.bounds.contains(pos) {
            return blocks::STONE;
        }
        self.voxels.get(pos).unwrap_or(blocks::AIR)
    }

    /// Store `block` at `pos` if inside bounds. Performs no legality checks;
    /// callers enforce placement rules.
    pub fn set_block(&mut self, pos: BlockPos, block: BlockId) -> bool {
        if !self.bounds.contains(pos) {
            return false;
        }
        self.voxels.set(pos, block);
        true
    }

    /// Remove and return the block at `pos`, if any.
    pub fn remove_block(&mut self, pos: BlockPos) -> Option<BlockId> {
        if !self.bounds.contains(pos) {
            return None;
        }
        self.voxels.remove(pos)
    }

    /// The in-bounds axis-aligned neighbors of `pos`, in +x, -x, +y, -y,
    /// +z, -z order.
    pub fn neighbors(&self, pos: BlockPos) -> impl Iterator<Item = BlockPos> + '_ {
        const DELTAS: [(i32, i32, i32); 6] = [
            (1, 0, 0),
            (-1, 0, 0),
            (0, 1, 0),
            (0, -1, 0),
            (0, 0, 1),
            (0, 0, -1),
        ];
        DELTAS
            .iter()
            .map(move |&(dx, dy, dz)| pos.offset(dx, dy, dz))
            .filter(|neighbor| self.bounds.contains(*neighbor))
    }

    /// ASCII top-down map centered on `center`.
    pub fn top_view(&self, center: BlockPos, radius: i32) -> String {
        map::render_top_view(self, center, radius)
    }

    /// One-line description of the block at `pos`.
    pub fn describe(&self, pos: BlockPos) -> String {
        let kind = self.get_block(pos).kind();
        format!("{}: {}", kind.name, kind.description)
    }

    /// Read-only view of the sparse voxel map.
    pub fn voxels(&self) -> &VoxelStore {
        &self.voxels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world(width: i32, depth: i32, height: i32, seed: u64) -> World {
        World::generate(Bounds::new(width, depth, height).unwrap(), seed)
    }

    #[test]
    fn identical_seeds_produce_identical_worlds() {
        let a = world(16, 16, 24, 1234);
        let b = world(16, 16, 24, 1234);
        assert_eq!(a.seed(), b.seed());
        assert_eq!(a.voxels(), b.voxels());
    }

    #[test]
    fn out_of_bounds_reads_as_stone() {
        let w = world(8, 8, 16, 99);
        assert_eq!(w.get_block(BlockPos::new(-1, 0, 0)), blocks::STONE);
        assert_eq!(w.get_block(BlockPos::new(0, 16, 0)), blocks::STONE);
        assert_eq!(w.get_block(BlockPos::new(0, 0, 8)), blocks::STONE);
    }

    #[test]
    fn column_height_points_at_a_solid_surface() {
        let w = world(8, 8, 16, 99);
        for x in 0..8 {
            for z in 0..8 {
                let height = w.column_height(x, z);
                assert!(height >= 0);
                let top = w.get_block(BlockPos::new(x, height, z));
                assert_ne!(top, blocks::AIR);
                assert_ne!(top, blocks::WATER);
            }
        }
    }

    #[test]
    fn spawn_sits_on_the_center_column_surface() {
        let w = world(10, 10, 20, 42);
        let spawn = w.spawn_position();
        assert_eq!(spawn.x, 5);
        assert_eq!(spawn.z, 5);
        assert_eq!(spawn.y, w.column_height(spawn.x, spawn.z));
    }

    #[test]
    fn water_fills_columns_below_sea_level() {
        let w = world(8, 8, 20, 7);
        let mut found_water = false;
        for x in 0..8 {
            for z in 0..8 {
                let height = w.column_height(x, z);
                if height >= w.sea_level() {
                    continue;
                }
                found_water = true;
                let flood_top = w.sea_level().min(w.bounds().height - 1);
                for y in (height + 1)..=flood_top {
                    assert_eq!(w.get_block(BlockPos::new(x, y, z)), blocks::WATER);
                }
            }
        }
        assert!(found_water, "expected at least one body of water");
    }

    #[test]
    fn set_and_remove_respect_bounds() {
        let mut w = world(8, 8, 16, 3);
        let inside = BlockPos::new(2, 12, 2);
        let outside = BlockPos::new(8, 0, 0);
        assert!(w.set_block(inside, blocks::PLANKS));
        assert_eq!(w.get_block(inside), blocks::PLANKS);
        assert!(!w.set_block(outside, blocks::PLANKS));
        assert_eq!(w.remove_block(inside), Some(blocks::PLANKS));
        assert_eq!(w.remove_block(inside), None);
        assert_eq!(w.remove_block(outside), None);
    }

    #[test]
    fn neighbors_follow_the_fixed_order_and_stay_in_bounds() {
        let w = world(8, 8, 16, 3);
        let neighbors: Vec<_> = w.neighbors(BlockPos::new(1, 1, 1)).collect();
        assert_eq!(
            neighbors,
            vec![
                BlockPos::new(2, 1, 1),
                BlockPos::new(0, 1, 1),
                BlockPos::new(1, 2, 1),
                BlockPos::new(1, 0, 1),
                BlockPos::new(1, 1, 2),
                BlockPos::new(1, 1, 0),
            ]
        );
        let corner: Vec<_> = w.neighbors(BlockPos::new(0, 0, 0)).collect();
        assert_eq!(
            corner,
            vec![
                BlockPos::new(1, 0, 0),
                BlockPos::new(0, 1, 0),
                BlockPos::new(0, 0, 1),
            ]
        );
    }

    #[test]
    fn describe_names_the_block() {
        let mut w = world(8, 8, 16, 3);
        let pos = BlockPos::new(1, 14, 1);
        w.set_block(pos, blocks::LOG);
        assert_eq!(
            w.describe(pos),
            "Oak Log: A sturdy log that can be turned into planks."
        );
    }
}
