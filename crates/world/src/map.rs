//! ASCII top-down map rendering.

use sandvox_core::{blocks, BlockId, BlockPos};

use crate::world::World;

/// Render the top-down view around `center`.
///
/// Rows run from `dz = radius` down to `dz = -radius`, columns from
/// `dx = -radius` to `dx = radius`. Out-of-bounds cells and columns holding
/// nothing but air render as blanks.
pub(crate) fn render_top_view(world: &World, center: BlockPos, radius: i32) -> String {
    let mut lines = Vec::with_capacity((radius * 2 + 1) as usize);
    for dz in (-radius..=radius).rev() {
        let mut row = String::new();
        for dx in -radius..=radius {
            let x = center.x + dx;
            let z = center.z + dz;
            if !world.bounds().contains_column(x, z) {
                row.push(' ');
                continue;
            }
            row.push(top_symbol(world, x, z));
        }
        lines.push(row);
    }
    lines.join("\n")
}

/// Symbol of the topmost non-air block in the column, or a blank.
fn top_symbol(world: &World, x: i32, z: i32) -> char {
    for y in (0..world.bounds().height).rev() {
        match world.voxels().get(BlockPos::new(x, y, z)) {
            Some(block) if block != blocks::AIR => return symbol(block),
            _ => {}
        }
    }
    ' '
}

fn symbol(block: BlockId) -> char {
    match block {
        blocks::GRASS => '▒',
        blocks::SAND => '.',
        blocks::DIRT => '░',
        blocks::STONE => '■',
        blocks::WATER => '~',
        blocks::LOG => '|',
        blocks::LEAVES => '*',
        blocks::PLANKS => '#',
        _ => '?',
    }
}
