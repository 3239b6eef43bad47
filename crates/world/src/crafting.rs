//! Crafting over a fixed recipe table.

use sandvox_core::{blocks, BlockId};

use crate::inventory::Inventory;

/// A crafting recipe consuming inputs from an inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recipe {
    /// Block produced.
    pub output: BlockId,
    /// Units produced per craft.
    pub output_count: u32,
    /// Required inputs as (block, count) pairs.
    pub inputs: &'static [(BlockId, u32)],
}

impl Recipe {
    /// Whether `inventory` holds every required input.
    pub fn can_craft(&self, inventory: &Inventory) -> bool {
        self.inputs
            .iter()
            .all(|&(block, count)| inventory.has(block, count))
    }
}

/// The fixed recipe table. New recipes yield one unit unless stated
/// otherwise; planks are the exception at four per log.
const RECIPES: &[Recipe] = &[Recipe {
    output: blocks::PLANKS,
    output_count: 4,
    inputs: &[(blocks::LOG, 1)],
}];

/// Look up the recipe producing `output`.
pub fn recipe_for(output: BlockId) -> Option<&'static Recipe> {
    RECIPES.iter().find(|recipe| recipe.output == output)
}

/// Whether `inventory` can craft `output`.
pub fn can_craft(output: BlockId, inventory: &Inventory) -> bool {
    recipe_for(output).is_some_and(|recipe| recipe.can_craft(inventory))
}

/// Craft `output`, consuming inputs and adding the yield to `inventory`.
///
/// Returns false and leaves the inventory untouched when the recipe is
/// unknown or the inputs are insufficient.
pub fn craft(output: BlockId, inventory: &mut Inventory) -> bool {
    let Some(recipe) = recipe_for(output) else {
        return false;
    };
    if !recipe.can_craft(inventory) {
        return false;
    }
    for &(block, count) in recipe.inputs {
        // can_craft guaranteed availability.
        inventory.take(block, count);
    }
    inventory.add(recipe.output, recipe.output_count);
    true
}
