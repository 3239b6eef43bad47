#![warn(missing_docs)]
//! Core primitives shared across the workspace.

mod block;
mod error;
mod pos;

use rand::{rngs::StdRng, SeedableRng};

// Re-export commonly used types
pub use block::{blocks, BlockId, BlockKind};
pub use error::GameError;
pub use pos::{BlockPos, Bounds, Direction};

/// Randomness domains used during world generation.
///
/// Each domain hashes the column coordinates with its own multipliers so the
/// jitter stream and the tree-placement stream never correlate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoiseDomain {
    /// Per-column surface height jitter.
    SurfaceJitter,
    /// Per-column tree placement roll.
    TreePlacement,
}

/// Helper to derive a reproducible RNG for a single world column.
///
/// The seed is a pure function of `(world_seed, x, z, domain)`; no generation
/// order can leak into it, which keeps regenerated worlds byte-identical.
pub fn column_rng(world_seed: u64, x: i32, z: i32, domain: NoiseDomain) -> StdRng {
    let (mul_x, mul_z) = match domain {
        NoiseDomain::SurfaceJitter => (0x9e37_79b9_7f4a_7c15_u64, 0xc2b2_ae3d_27d4_eb4f_u64),
        NoiseDomain::TreePlacement => (0xd6e8_feb8_6659_fd93_u64, 0xa076_1d64_78bd_642f_u64),
    };
    let seed = (x as i64 as u64)
        .wrapping_mul(mul_x)
        .wrapping_add((z as i64 as u64).wrapping_mul(mul_z))
        ^ world_seed;
    StdRng::seed_from_u64(seed)
}
