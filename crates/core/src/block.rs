//! Fixed catalog of block kinds.
//!
//! The catalog is compiled in and never changes at runtime. Voxels store a
//! compact [`BlockId`]; the catalog resolves ids to their properties and
//! string keys used by the text protocol.

use serde::{Deserialize, Serialize};

use crate::GameError;

/// Compact identifier indexing the fixed block catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BlockId(u16);

/// Named ids for every catalog entry.
pub mod blocks {
    use super::BlockId;

    /// Empty space.
    pub const AIR: BlockId = BlockId(0);
    /// Grass-covered topsoil.
    pub const GRASS: BlockId = BlockId(1);
    /// Plain soil.
    pub const DIRT: BlockId = BlockId(2);
    /// Solid rock.
    pub const STONE: BlockId = BlockId(3);
    /// Still water.
    pub const WATER: BlockId = BlockId(4);
    /// Loose sand.
    pub const SAND: BlockId = BlockId(5);
    /// Tree trunk section.
    pub const LOG: BlockId = BlockId(6);
    /// Tree foliage.
    pub const LEAVES: BlockId = BlockId(7);
    /// Crafted wooden boards.
    pub const PLANKS: BlockId = BlockId(8);
}

/// Static properties of one block kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockKind {
    /// Stable string key used by commands and the recipe table.
    pub key: &'static str,
    /// Human friendly name.
    pub name: &'static str,
    /// Rough approximation of how hard the block is to break.
    pub hardness: f32,
    /// Whether the block obstructs movement.
    pub solid: bool,
    /// Short blurb describing the block.
    pub description: &'static str,
}

/// Catalog entries, indexed by [`BlockId`].
const CATALOG: [BlockKind; 9] = [
    BlockKind {
        key: "air",
        name: "Air",
        hardness: 0.0,
        solid: false,
        description: "Empty space.",
    },
    BlockKind {
        key: "grass",
        name: "Grass",
        hardness: 0.6,
        solid: true,
        description: "Soft topsoil covered with fresh grass.",
    },
    BlockKind {
        key: "dirt",
        name: "Dirt",
        hardness: 0.5,
        solid: true,
        description: "Soil that is easy to dig through.",
    },
    BlockKind {
        key: "stone",
        name: "Stone",
        hardness: 1.5,
        solid: true,
        description: "Solid rock deep below the surface.",
    },
    BlockKind {
        key: "water",
        name: "Water",
        hardness: 100.0,
        solid: false,
        description: "A splash of refreshing water.",
    },
    BlockKind {
        key: "sand",
        name: "Sand",
        hardness: 0.4,
        solid: true,
        description: "Grains of crushed stone gathered near the shore.",
    },
    BlockKind {
        key: "log",
        name: "Oak Log",
        hardness: 1.0,
        solid: true,
        description: "A sturdy log that can be turned into planks.",
    },
    BlockKind {
        key: "leaves",
        name: "Oak Leaves",
        hardness: 0.2,
        solid: false,
        description: "Foliage rustling in the wind.",
    },
    BlockKind {
        key: "planks",
        name: "Oak Planks",
        hardness: 1.2,
        solid: true,
        description: "Refined wood boards perfect for building shelters.",
    },
];

impl BlockId {
    /// Resolve this id to its catalog entry.
    pub fn kind(self) -> &'static BlockKind {
        &CATALOG[self.0 as usize]
    }

    /// Stable string key of this block kind.
    pub fn key(self) -> &'static str {
        self.kind().key
    }

    /// Human friendly name of this block kind.
    pub fn name(self) -> &'static str {
        self.kind().name
    }

    /// Look up a block by string key. The match is case-insensitive.
    pub fn parse(key: &str) -> Result<Self, GameError> {
        CATALOG
            .iter()
            .position(|kind| kind.key.eq_ignore_ascii_case(key.trim()))
            .map(|index| BlockId(index as u16))
            .ok_or_else(|| GameError::UnknownBlock(key.to_string()))
    }

    /// Whether a player or a placed block may occupy this cell.
    pub fn replaceable(self) -> bool {
        matches!(self, blocks::AIR | blocks::WATER)
    }

    /// Iterate over every catalog id.
    pub fn all() -> impl Iterator<Item = BlockId> {
        (0..CATALOG.len()).map(|index| BlockId(index as u16))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(BlockId::parse("stone").unwrap(), blocks::STONE);
        assert_eq!(BlockId::parse("STONE").unwrap(), blocks::STONE);
        assert_eq!(BlockId::parse("Planks").unwrap(), blocks::PLANKS);
    }

    #[test]
    fn parse_rejects_unknown_keys() {
        let err = BlockId::parse("obsidian").unwrap_err();
        assert_eq!(err, GameError::UnknownBlock("obsidian".to_string()));
    }

    #[test]
    fn catalog_keys_are_unique_and_lowercase() {
        for id in BlockId::all() {
            assert_eq!(id.key(), id.key().to_lowercase());
            let matches = BlockId::all().filter(|other| other.key() == id.key()).count();
            assert_eq!(matches, 1, "duplicate key {}", id.key());
        }
    }

    #[test]
    fn catalog_properties_match_the_design() {
        assert_eq!(blocks::AIR.kind().hardness, 0.0);
        assert!(!blocks::AIR.kind().solid);
        assert!(!blocks::WATER.kind().solid);
        assert!(!blocks::LEAVES.kind().solid);
        assert_eq!(blocks::GRASS.kind().hardness, 0.6);
        assert_eq!(blocks::DIRT.kind().hardness, 0.5);
        assert_eq!(blocks::STONE.kind().hardness, 1.5);
        assert_eq!(blocks::WATER.kind().hardness, 100.0);
        assert_eq!(blocks::SAND.kind().hardness, 0.4);
        assert_eq!(blocks::LOG.kind().hardness, 1.0);
        assert_eq!(blocks::LEAVES.kind().hardness, 0.2);
        assert_eq!(blocks::PLANKS.kind().hardness, 1.2);
        assert!(blocks::GRASS.kind().solid);
        assert!(blocks::PLANKS.kind().solid);
    }

    #[test]
    fn only_air_and_water_are_replaceable() {
        for id in BlockId::all() {
            let expected = id == blocks::AIR || id == blocks::WATER;
            assert_eq!(id.replaceable(), expected, "{}", id.key());
        }
    }
}
