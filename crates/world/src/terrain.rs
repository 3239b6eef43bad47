//! Deterministic terrain synthesis.
//!
//! Every column derives its surface height and decoration rolls purely from
//! its own `(x, z)` coordinates and the world seed, so generation order never
//! influences the result.

use rand::Rng;
use sandvox_core::{blocks, column_rng, BlockPos, Bounds, NoiseDomain};
use tracing::{debug, instrument};

use crate::storage::VoxelStore;
use crate::trees::grow_tree;

/// Chance that an eligible column grows a tree.
const TREE_PROBABILITY: f64 = 0.05;

/// Terrain generator that fills a sparse store column by column.
pub(crate) struct TerrainGenerator {
    bounds: Bounds,
    seed: u64,
    sea_level: i32,
}

impl TerrainGenerator {
    pub(crate) fn new(bounds: Bounds, seed: u64, sea_level: i32) -> Self {
        Self {
            bounds,
            seed,
            sea_level,
        }
    }

    /// Generate the full world volume.
    #[instrument(skip(self), fields(seed = self.seed, width = self.bounds.width, depth = self.bounds.depth, height = self.bounds.height))]
    pub(crate) fn generate(&self) -> VoxelStore {
        let mut store = VoxelStore::new();
        let mut trees = 0usize;
        for x in 0..self.bounds.width {
            for z in 0..self.bounds.depth {
                let surface = self.surface_height(x, z);
                self.fill_column(&mut store, x, z, surface);

                // Flood the column up to the sea level where the terrain dips
                // below it.
                if surface < self.sea_level {
                    let flood_top = self.sea_level.min(self.bounds.height - 1);
                    for y in (surface + 1)..=flood_top {
                        store.set(BlockPos::new(x, y, z), blocks::WATER);
                    }
                }

                if self.should_plant_tree(x, z, surface) {
                    grow_tree(&mut store, self.bounds, BlockPos::new(x, surface + 1, z));
                    trees += 1;
                }
            }
        }
        debug!(voxels = store.len(), trees, "terrain generation complete");
        store
    }

    /// Surface height of the column at `(x, z)`, clamped to `[1, height - 2]`.
    ///
    /// Coarse ridges from two sine waves plus a small per-column jitter.
    fn surface_height(&self, x: i32, z: i32) -> i32 {
        let ridge = ((x as f64 + self.seed as f64) * 0.25).sin()
            + ((z as f64 - self.seed as f64) * 0.3).cos();
        let mut rng = column_rng(self.seed, x, z, NoiseDomain::SurfaceJitter);
        let jitter = rng.gen_range(-1.5..=1.5);
        let height = (self.sea_level as f64 + ridge * 1.5 + jitter) as i32;
        height.clamp(1, self.bounds.height - 2)
    }

    /// Fill one column from bedrock to its surface block.
    fn fill_column(&self, store: &mut VoxelStore, x: i32, z: i32, surface: i32) {
        for y in 0..=surface {
            let block = if y == surface {
                if surface >= self.sea_level {
                    blocks::GRASS
                } else {
                    blocks::SAND
                }
            } else if y >= surface - 3 {
                blocks::DIRT
            } else {
                blocks::STONE
            };
            store.set(BlockPos::new(x, y, z), block);
        }
    }

    /// Roll the independent per-column tree chance.
    fn should_plant_tree(&self, x: i32, z: i32, surface: i32) -> bool {
        if surface < self.sea_level || surface + 5 >= self.bounds.height {
            return false;
        }
        let mut rng = column_rng(self.seed, x, z, NoiseDomain::TreePlacement);
        rng.gen::<f64>() < TREE_PROBABILITY
    }
}
