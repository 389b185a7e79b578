// src/resolver.rs

//! Recipe resolution: recursive expansion with multiplicity propagation
//!
//! Resolving a recipe substitutes every composite reference until only
//! ingredients remain, producing the total quantity of each base
//! ingredient and the total cook time. Aggregation is purely additive:
//! an ingredient reachable through several paths contributes the sum of
//! each path's local quantity times the accumulated multiplier.
//!
//! Resolution is a pure read traversal over the cookbook. It never
//! mutates the store and never returns a partial aggregate: the first
//! missing reference or cycle discards everything accumulated so far.

use std::collections::{HashMap, HashSet};

use serde::Serialize;
use thiserror::Error;

use crate::cookbook::{Cookbook, Entry};
use crate::name::CanonicalName;

/// The flattened result of resolving a recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Canonical name of the resolved recipe
    pub name: String,
    /// Total preparation time across the whole expansion
    #[serde(rename = "cookTime")]
    pub total_cook_time: u64,
    /// Base-ingredient totals, in no guaranteed order
    pub ingredients: Vec<IngredientTotal>,
}

/// Total quantity of one base ingredient in a resolved recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngredientTotal {
    pub name: String,
    pub quantity: u64,
}

/// Failures surfaced by [`resolve`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The queried name has no matching cookbook entry
    #[error("a recipe named {0:?} cannot be found")]
    NotFound(String),
    /// The queried name exists but denotes an ingredient
    #[error("{0} is not a recipe name")]
    NotARecipe(CanonicalName),
    /// A transitive component reference is absent from the cookbook.
    /// Deliberately does not say which one; the whole traversal is
    /// discarded rather than reported piecemeal.
    #[error("the recipe contains an item that is not in the cookbook")]
    IncompleteRecipe,
    /// A recipe reaches itself through its own components
    #[error("{0} refers to itself through its components")]
    CyclicDefinition(CanonicalName),
}

/// Resolve a recipe into its flattened ingredient totals.
///
/// The query must already be canonical; the boundary normalizes before
/// calling. Checks presence and kind first ([`ResolveError::NotFound`],
/// [`ResolveError::NotARecipe`]), then expands recursively.
pub fn resolve(cookbook: &Cookbook, name: &CanonicalName) -> Result<Summary, ResolveError> {
    match cookbook.get(name) {
        None => return Err(ResolveError::NotFound(name.to_string())),
        Some(Entry::Ingredient { .. }) => return Err(ResolveError::NotARecipe(name.clone())),
        Some(Entry::Recipe { .. }) => {}
    }

    let mut totals: HashMap<CanonicalName, u64> = HashMap::new();
    let mut in_progress: HashSet<CanonicalName> = HashSet::new();
    let total_cook_time = expand(cookbook, name, 1, &mut totals, &mut in_progress)?;

    let ingredients = totals
        .into_iter()
        .map(|(name, quantity)| IngredientTotal {
            name: name.into_string(),
            quantity,
        })
        .collect();

    Ok(Summary {
        name: name.to_string(),
        total_cook_time,
        ingredients,
    })
}

/// Expand one item, adding `multiplier` worth of its base ingredients
/// into `totals` and returning the cook time it contributes.
///
/// `in_progress` holds the recipe names on the current expansion path;
/// a name recurring there is a cyclic definition. Errors short-circuit
/// on the first failing component.
fn expand(
    cookbook: &Cookbook,
    name: &CanonicalName,
    multiplier: u64,
    totals: &mut HashMap<CanonicalName, u64>,
    in_progress: &mut HashSet<CanonicalName>,
) -> Result<u64, ResolveError> {
    let entry = cookbook.get(name).ok_or(ResolveError::IncompleteRecipe)?;

    match entry {
        Entry::Ingredient { cook_time } => {
            *totals.entry(name.clone()).or_insert(0) += multiplier;
            Ok(cook_time * multiplier)
        }
        Entry::Recipe { components } => {
            if !in_progress.insert(name.clone()) {
                return Err(ResolveError::CyclicDefinition(name.clone()));
            }

            let mut time = 0u64;
            for component in components {
                time += expand(
                    cookbook,
                    &component.name,
                    component.quantity * multiplier,
                    totals,
                    in_progress,
                )?;
            }

            in_progress.remove(name);
            Ok(time)
        }
    }
}
