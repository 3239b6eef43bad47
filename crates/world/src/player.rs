//! Player state and interaction rules.

use sandvox_core::{blocks, BlockId, BlockPos, Direction};

use crate::crafting;
use crate::inventory::Inventory;
use crate::world::World;

/// Planks every new player starts with, enough for a first shelter.
pub const STARTING_PLANKS: u32 = 8;

/// The player: a position and an inventory.
///
/// Holds no reference to the world; every interaction borrows it explicitly,
/// so a session can own both side by side.
#[derive(Debug, Clone)]
pub struct Player {
    position: BlockPos,
    inventory: Inventory,
}

impl Player {
    /// Spawn one block above the world's spawn surface with the starting kit.
    pub fn spawn(world: &World) -> Self {
        let mut inventory = Inventory::new();
        inventory.add(blocks::PLANKS, STARTING_PLANKS);
        Self {
            position: world.spawn_position().offset(0, 1, 0),
            inventory,
        }
    }

    /// Current position.
    pub fn position(&self) -> BlockPos {
        self.position
    }

    /// Carried blocks.
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Attempt to move one step.
    ///
    /// Vertical moves require the destination cell to be air or water.
    /// Horizontal moves snap to the surface of the destination column
    /// (climbing or dropping as needed) and fail when the column is outside
    /// the world or its surface would be above the build limit. Returns false
    /// without mutating on failure.
    pub fn try_move(&mut self, world: &World, direction: Direction) -> bool {
        let dest = self.position.step(direction);
        if !direction.is_horizontal() {
            if world.get_block(dest).replaceable() {
                self.position = dest;
                return true;
            }
            return false;
        }
        if !world.bounds().contains_column(dest.x, dest.z) {
            return false;
        }
        let surface_y = world.column_height(dest.x, dest.z) + 1;
        if surface_y >= world.bounds().height {
            return false;
        }
        self.position = BlockPos::new(dest.x, surface_y, dest.z);
        true
    }

    /// Break the adjacent block in `direction` and pocket it.
    ///
    /// Air and water cannot be harvested; returns the id of the removed
    /// block otherwise.
    pub fn harvest(&mut self, world: &mut World, direction: Direction) -> Option<BlockId> {
        let target = self.position.step(direction);
        if world.get_block(target).replaceable() {
            return None;
        }
        let removed = world.remove_block(target)?;
        self.inventory.add(removed, 1);
        Some(removed)
    }

    /// Place one `block` from the inventory into the adjacent cell.
    ///
    /// Requires a held block and an air or water target; fails silently
    /// otherwise.
    pub fn place(&mut self, world: &mut World, block: BlockId, direction: Direction) -> bool {
        let target = self.position.step(direction);
        if !self.inventory.has(block, 1) {
            return false;
        }
        if !world.get_block(target).replaceable() {
            return false;
        }
        if !world.set_block(target, block) {
            return false;
        }
        self.inventory.take(block, 1);
        true
    }

    /// Craft `block` from carried resources.
    pub fn craft(&mut self, block: BlockId) -> bool {
        crafting::craft(block, &mut self.inventory)
    }

    /// Textual description of the blocks around the player.
    pub fn describe_surroundings(&self, world: &World) -> String {
        let head = world.get_block(self.position);
        let ground = world.get_block(self.position.offset(0, -1, 0));
        let below = world.get_block(self.position.offset(0, -2, 0));
        [
            format!("You are standing above {}.", ground.name().to_lowercase()),
            format!("There is {} at head height.", head.name().to_lowercase()),
            format!("Beneath you lies {}.", below.name().to_lowercase()),
        ]
        .join(" \n")
    }

    /// Inventory listing sorted by block key.
    pub fn inventory_summary(&self) -> String {
        if self.inventory.is_empty() {
            return "Your inventory is empty.".to_string();
        }
        let mut held: Vec<_> = self.inventory.iter().collect();
        held.sort_by_key(|(block, _)| block.key());
        let parts: Vec<_> = held
            .into_iter()
            .map(|(block, count)| format!("{} x {}", count, block.name()))
            .collect();
        format!("You carry: {}", parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sandvox_core::Bounds;

    fn session(seed: u64) -> (World, Player) {
        let world = World::generate(Bounds::new(12, 12, 20).unwrap(), seed);
        let player = Player::spawn(&world);
        (world, player)
    }

    #[test]
    fn spawn_kit_holds_eight_planks() {
        let (world, player) = session(1);
        assert_eq!(player.inventory().count(blocks::PLANKS), 8);
        let spawn = world.spawn_position();
        assert_eq!(player.position(), spawn.offset(0, 1, 0));
    }

    #[test]
    fn horizontal_movement_snaps_to_the_destination_surface() {
        let (world, mut player) = session(1);
        let origin = player.position();
        assert!(player.try_move(&world, Direction::North));
        let pos = player.position();
        assert_ne!(pos, origin);
        assert_eq!(pos.z, origin.z - 1);
        assert_eq!(pos.y, world.column_height(pos.x, pos.z) + 1);
    }

    #[test]
    fn moving_up_into_a_solid_block_fails() {
        let (mut world, mut player) = session(2);
        let above = player.position().offset(0, 1, 0);
        world.set_block(above, blocks::STONE);
        let before = player.position();
        assert!(!player.try_move(&world, Direction::Up));
        assert_eq!(player.position(), before);
    }

    #[test]
    fn moving_up_through_air_succeeds() {
        let (mut world, mut player) = session(2);
        let above = player.position().offset(0, 1, 0);
        world.remove_block(above);
        assert!(player.try_move(&world, Direction::Up));
        assert_eq!(player.position(), above);
    }

    #[test]
    fn walking_off_the_map_edge_fails() {
        let world = World::generate(Bounds::new(12, 12, 20).unwrap(), 1);
        let mut player = Player::spawn(&world);
        let mut steps = 0;
        while player.try_move(&world, Direction::West) {
            steps += 1;
            assert!(steps <= 12, "player escaped the world");
        }
        let stuck_at = player.position();
        assert_eq!(stuck_at.x, 0);
        assert!(!player.try_move(&world, Direction::West));
        assert_eq!(player.position(), stuck_at);
    }

    #[test]
    fn harvest_and_place_round_trip() {
        let (mut world, mut player) = session(1);
        let target = player.position().offset(0, 1, 0);
        world.set_block(target, blocks::LOG);
        assert_eq!(player.harvest(&mut world, Direction::Up), Some(blocks::LOG));
        assert_eq!(player.inventory().count(blocks::LOG), 1);
        assert!(player.place(&mut world, blocks::LOG, Direction::Up));
        assert_eq!(world.get_block(target), blocks::LOG);
        assert_eq!(player.inventory().count(blocks::LOG), 0);
    }

    #[test]
    fn harvesting_air_or_water_yields_nothing() {
        let (mut world, mut player) = session(1);
        let target = player.position().offset(0, 1, 0);
        world.remove_block(target);
        assert_eq!(player.harvest(&mut world, Direction::Up), None);
        world.set_block(target, blocks::WATER);
        assert_eq!(player.harvest(&mut world, Direction::Up), None);
        assert_eq!(world.get_block(target), blocks::WATER);
    }

    #[test]
    fn placing_without_stock_or_into_solid_fails_silently() {
        let (mut world, mut player) = session(1);
        let target = player.position().offset(0, 1, 0);
        world.remove_block(target);
        assert!(!player.place(&mut world, blocks::STONE, Direction::Up));
        world.set_block(target, blocks::DIRT);
        assert!(!player.place(&mut world, blocks::PLANKS, Direction::Up));
        assert_eq!(player.inventory().count(blocks::PLANKS), 8);
    }

    #[test]
    fn crafting_through_the_player_updates_the_inventory() {
        let (mut world, mut player) = session(1);
        assert!(!player.craft(blocks::PLANKS));
        let target = player.position().offset(0, 1, 0);
        world.set_block(target, blocks::LOG);
        player.harvest(&mut world, Direction::Up);
        assert!(player.craft(blocks::PLANKS));
        assert_eq!(player.inventory().count(blocks::PLANKS), 12);
        assert_eq!(player.inventory().count(blocks::LOG), 0);
    }

    #[test]
    fn inventory_summary_is_sorted_by_block_key() {
        let (mut world, mut player) = session(1);
        let target = player.position().offset(0, 1, 0);
        world.set_block(target, blocks::LOG);
        player.harvest(&mut world, Direction::Up);
        assert_eq!(
            player.inventory_summary(),
            "You carry: 1 x Oak Log, 8 x Oak Planks"
        );
    }
}
