//! Integer block coordinates, world bounds, and cardinal directions.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::GameError;

/// Absolute position of one voxel.
///
/// Ordered so it can key a deterministic map; the ordering itself carries no
/// gameplay meaning.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct BlockPos {
    /// West-east axis.
    pub x: i32,
    /// Vertical axis.
    pub y: i32,
    /// North-south axis (north is negative z).
    pub z: i32,
}

impl BlockPos {
    /// Create a position from its components.
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Offset this position by a delta on each axis.
    pub fn offset(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.z + dz)
    }

    /// The adjacent position one step in `direction`.
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy, dz) = direction.delta();
        self.offset(dx, dy, dz)
    }
}

impl fmt::Display for BlockPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Extent of the world volume. Valid coordinates satisfy
/// `0 <= x < width`, `0 <= y < height`, `0 <= z < depth`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    /// X extent.
    pub width: i32,
    /// Z extent.
    pub depth: i32,
    /// Y extent. Must exceed 4 so a column always fits dirt and surface layers.
    pub height: i32,
}

impl Bounds {
    /// Validate and create world bounds.
    pub fn new(width: i32, depth: i32, height: i32) -> Result<Self, GameError> {
        if width <= 0 || depth <= 0 || height <= 4 {
            return Err(GameError::InvalidWorldDimensions {
                width,
                depth,
                height,
            });
        }
        Ok(Self {
            width,
            depth,
            height,
        })
    }

    /// Whether `pos` lies inside the world volume.
    pub fn contains(&self, pos: BlockPos) -> bool {
        (0..self.width).contains(&pos.x)
            && (0..self.height).contains(&pos.y)
            && (0..self.depth).contains(&pos.z)
    }

    /// Whether the column `(x, z)` lies inside the world footprint.
    pub fn contains_column(&self, x: i32, z: i32) -> bool {
        (0..self.width).contains(&x) && (0..self.depth).contains(&z)
    }
}

/// One of the six axis-aligned movement directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Negative z.
    North,
    /// Positive z.
    South,
    /// Positive x.
    East,
    /// Negative x.
    West,
    /// Positive y.
    Up,
    /// Negative y.
    Down,
}

impl Direction {
    /// All directions in a stable order.
    pub const ALL: [Direction; 6] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::Up,
        Direction::Down,
    ];

    /// Unit offset of this direction.
    pub fn delta(self) -> (i32, i32, i32) {
        match self {
            Direction::North => (0, 0, -1),
            Direction::South => (0, 0, 1),
            Direction::East => (1, 0, 0),
            Direction::West => (-1, 0, 0),
            Direction::Up => (0, 1, 0),
            Direction::Down => (0, -1, 0),
        }
    }

    /// Lowercase token used by the text protocol.
    pub fn token(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }

    /// Whether this direction moves within the horizontal plane.
    pub fn is_horizontal(self) -> bool {
        !matches!(self, Direction::Up | Direction::Down)
    }

    /// Parse a direction token. The match is case-insensitive.
    pub fn parse(token: &str) -> Result<Self, GameError> {
        let normalized = token.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|direction| direction.token() == normalized)
            .ok_or_else(|| GameError::UnknownDirection(token.to_string()))
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
