//! Text command parsing.
//!
//! One input line becomes one [`GameCommand`]. Every malformed input maps to
//! a [`CommandError`] whose message is shown to the player verbatim; nothing
//! here panics or propagates.

use std::fmt;

use sandvox_core::{BlockId, Direction};

/// Smallest map radius the `map` command accepts.
const MIN_MAP_RADIUS: i32 = 1;
/// Largest map radius the `map` command accepts.
const MAX_MAP_RADIUS: i32 = 10;
/// Radius used when `map` is given no argument.
const DEFAULT_MAP_RADIUS: i32 = 6;

/// Human-readable parse failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandError {
    message: String,
}

impl CommandError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CommandError {}

/// A fully parsed player command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    Quit,
    Help,
    Look,
    Map { radius: i32 },
    Move { direction: Direction },
    Harvest { direction: Direction },
    Place { block: BlockId, direction: Direction },
    Inventory,
    Craft { block: BlockId },
    Where,
}

/// Parse one input line. Empty input parses to `None`.
///
/// The first token is case-insensitive and may use any of the documented
/// aliases.
pub fn parse_command(line: &str) -> Result<Option<GameCommand>, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let mut parts = line.split_whitespace();
    let action = parts.next().unwrap_or_default().to_ascii_lowercase();
    let args: Vec<&str> = parts.collect();

    let command = match action.as_str() {
        "quit" | "exit" => GameCommand::Quit,
        "help" | "?" => GameCommand::Help,
        "look" | "see" => GameCommand::Look,
        "map" => GameCommand::Map {
            radius: parse_radius(&args)?,
        },
        "move" | "walk" | "go" => GameCommand::Move {
            direction: parse_required_direction(
                &args,
                "Move where? Try north, south, east or west.",
            )?,
        },
        "harvest" | "mine" | "break" | "dig" => GameCommand::Harvest {
            direction: parse_optional_direction(args.first())?,
        },
        "place" | "build" => {
            let Some(&block) = args.first() else {
                return Err(CommandError::new("Place what?"));
            };
            GameCommand::Place {
                block: parse_block(block)?,
                direction: parse_optional_direction(args.get(1))?,
            }
        }
        "inventory" | "inv" => GameCommand::Inventory,
        "craft" => {
            let Some(&block) = args.first() else {
                return Err(CommandError::new("Craft what?"));
            };
            GameCommand::Craft {
                block: parse_block(block)?,
            }
        }
        "where" | "pos" => GameCommand::Where,
        _ => {
            return Err(CommandError::new(format!(
                "I do not understand '{line}'. Type 'help' for options."
            )))
        }
    };
    Ok(Some(command))
}

/// The command reference shown by `help`.
pub fn help_text() -> String {
    [
        "Commands:",
        "  look                - describe nearby blocks",
        "  map [radius]        - show a top-down map around you",
        "  move <dir>          - walk north, south, east or west",
        "  harvest [dir]       - break the block in a direction",
        "  place <block> [dir] - place a block if you have one",
        "  craft <block>       - craft items if you have the resources",
        "  inventory           - list carried blocks",
        "  where               - show your current position",
        "  quit                - exit the game",
    ]
    .join("\n")
}

fn parse_radius(args: &[&str]) -> Result<i32, CommandError> {
    let Some(&raw) = args.first() else {
        return Ok(DEFAULT_MAP_RADIUS);
    };
    let radius: i32 = raw
        .parse()
        .map_err(|_| CommandError::new("Map radius must be a number."))?;
    Ok(radius.clamp(MIN_MAP_RADIUS, MAX_MAP_RADIUS))
}

fn parse_required_direction(args: &[&str], missing: &str) -> Result<Direction, CommandError> {
    let Some(&token) = args.first() else {
        return Err(CommandError::new(missing));
    };
    Direction::parse(token).map_err(|err| CommandError::new(err.to_string()))
}

fn parse_optional_direction(token: Option<&&str>) -> Result<Direction, CommandError> {
    match token {
        Some(token) => Direction::parse(token).map_err(|err| CommandError::new(err.to_string())),
        None => Ok(Direction::Up),
    }
}

fn parse_block(token: &str) -> Result<BlockId, CommandError> {
    BlockId::parse(token).map_err(|_| CommandError::new(format!("Unknown block type '{token}'.")))
}
