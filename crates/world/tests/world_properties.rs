//! Property tests for world generation and spatial queries.

use proptest::prelude::*;
use sandvox_core::{blocks, BlockPos, Bounds};
use sandvox_world::World;

fn arb_bounds() -> impl Strategy<Value = Bounds> {
    (1i32..=24, 1i32..=24, 5i32..=32)
        .prop_map(|(width, depth, height)| Bounds::new(width, depth, height).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn generation_is_deterministic(bounds in arb_bounds(), seed in any::<u64>()) {
        let first = World::generate(bounds, seed);
        let second = World::generate(bounds, seed);
        prop_assert_eq!(first.voxels(), second.voxels());
    }

    #[test]
    fn get_block_never_fails_out_of_bounds(
        bounds in arb_bounds(),
        seed in any::<u64>(),
        x in -64i32..64,
        y in -64i32..64,
        z in -64i32..64,
    ) {
        let world = World::generate(bounds, seed);
        let pos = BlockPos::new(x, y, z);
        let block = world.get_block(pos);
        if !bounds.contains(pos) {
            prop_assert_eq!(block, blocks::STONE);
        }
    }

    #[test]
    fn every_column_has_a_solid_surface(bounds in arb_bounds(), seed in any::<u64>()) {
        let world = World::generate(bounds, seed);
        for x in 0..bounds.width {
            for z in 0..bounds.depth {
                let height = world.column_height(x, z);
                prop_assert!(height >= 0);
                let top = world.get_block(BlockPos::new(x, height, z));
                prop_assert_ne!(top, blocks::AIR);
                prop_assert_ne!(top, blocks::WATER);
            }
        }
    }

    #[test]
    fn water_reaches_the_sea_level(bounds in arb_bounds(), seed in any::<u64>()) {
        let world = World::generate(bounds, seed);
        for x in 0..bounds.width {
            for z in 0..bounds.depth {
                let height = world.column_height(x, z);
                if height >= world.sea_level() {
                    continue;
                }
                let flood_top = world.sea_level().min(bounds.height - 1);
                for y in (height + 1)..=flood_top {
                    prop_assert_eq!(
                        world.get_block(BlockPos::new(x, y, z)),
                        blocks::WATER,
                        "dry cell at ({}, {}, {})", x, y, z
                    );
                }
            }
        }
    }
}
