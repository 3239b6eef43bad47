//! High level façade exposing the sandbox through textual commands.

use sandvox_core::{Bounds, GameError};
use sandvox_world::{Player, World};
use tracing::debug;

use crate::commands::{self, GameCommand};
use crate::config::GameConfig;

/// Radius of the map shown by the `look` command.
const LOOK_RADIUS: i32 = 4;

/// One interactive session: a world and the player exploring it.
pub struct Game {
    world: World,
    player: Player,
}

impl Game {
    /// Create a session from startup configuration.
    ///
    /// Fails only on invalid world dimensions. An unset seed is drawn
    /// randomly so every unconfigured session gets a fresh world.
    pub fn new(config: &GameConfig) -> Result<Self, GameError> {
        let bounds = Bounds::new(config.width, config.depth, config.height)?;
        let seed = config.seed.unwrap_or_else(rand::random);
        let world = World::generate(bounds, seed);
        let player = Player::spawn(&world);
        debug!(seed, spawn = %player.position(), "session created");
        Ok(Self { world, player })
    }

    /// Execute one command line and return the response text.
    ///
    /// Malformed input degrades to an error message; this never fails.
    pub fn execute(&mut self, line: &str) -> String {
        match commands::parse_command(line) {
            Ok(Some(command)) => self.run(command),
            Ok(None) => String::new(),
            Err(err) => err.to_string(),
        }
    }

    fn run(&mut self, command: GameCommand) -> String {
        match command {
            GameCommand::Quit => "Thanks for playing!".to_string(),
            GameCommand::Help => commands::help_text(),
            GameCommand::Look => {
                let description = self.player.describe_surroundings(&self.world);
                let map_view = self.world.top_view(self.player.position(), LOOK_RADIUS);
                format!("{description}\n\n{map_view}")
            }
            GameCommand::Map { radius } => self.world.top_view(self.player.position(), radius),
            GameCommand::Move { direction } => {
                if self.player.try_move(&self.world, direction) {
                    format!("You move {direction} to {}.", self.player.position())
                } else {
                    "You cannot move in that direction.".to_string()
                }
            }
            GameCommand::Harvest { direction } => {
                match self.player.harvest(&mut self.world, direction) {
                    Some(block) => format!("You gather one {}.", block.name()),
                    None => "There is nothing to harvest there.".to_string(),
                }
            }
            GameCommand::Place { block, direction } => {
                if self.player.place(&mut self.world, block, direction) {
                    format!("You place a {}.", block.name())
                } else {
                    "You cannot place a block there.".to_string()
                }
            }
            GameCommand::Inventory => self.player.inventory_summary(),
            GameCommand::Craft { block } => {
                if self.player.craft(block) {
                    format!("You craft {}.", block.name())
                } else {
                    "You do not have the resources to craft that.".to_string()
                }
            }
            GameCommand::Where => format!("You are at {}.", self.player.position()),
        }
    }

    /// The session's world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The session's player.
    pub fn player(&self) -> &Player {
        &self.player
    }
}
