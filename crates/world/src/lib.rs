//! Voxel world: sparse storage, deterministic terrain synthesis, spatial
//! queries, and the player interaction rules built on top of them.

mod crafting;
mod inventory;
mod map;
mod player;
mod storage;
mod terrain;
mod trees;
mod world;

pub use crafting::{can_craft, craft, recipe_for, Recipe};
pub use inventory::Inventory;
pub use player::{Player, STARTING_PLANKS};
pub use storage::VoxelStore;
pub use world::World;
