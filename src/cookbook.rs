// src/cookbook.rs

//! The cookbook: entry definitions, the registration validator, and the store
//!
//! The store maps canonical names to entries. Entries are written only
//! through [`Cookbook::register`], which validates a raw request before
//! inserting, so the store never contains data the resolver cannot safely
//! process: names are canonical, registered names are unique, cook times
//! are non-negative, and a recipe never lists the same component twice.
//!
//! An entry, once registered, is immutable for the life of the process.
//! There is no update or delete operation.

use std::collections::{HashMap, HashSet};

use serde::Deserialize;
use thiserror::Error;

use crate::name::{normalize, CanonicalName};

/// A component reference within a recipe.
///
/// The name is canonical: [`Cookbook::register`] normalizes component
/// names at registration time so resolution lookups always use the same
/// key space as the store itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    pub name: CanonicalName,
    pub quantity: u64,
}

/// A cookbook entry: an atomic ingredient or a composite recipe.
///
/// Closed variant set; every consumer matches exhaustively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// Atomic item with a fixed preparation duration
    Ingredient { cook_time: u64 },
    /// Composite item defined by a multiset of named sub-items
    Recipe { components: Vec<Component> },
}

/// A component as supplied by the caller, nothing normalized yet
#[derive(Debug, Clone, Deserialize)]
pub struct RawComponent {
    pub name: String,
    pub quantity: u64,
}

/// A registration request, exactly as supplied over the boundary.
///
/// `kind` stays a free-form string here so an unrecognized type is
/// rejected by the validator (in its documented position in the rule
/// order) rather than by deserialization.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryRequest {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub name: String,
    pub cook_time: Option<i64>,
    #[serde(default)]
    pub required_items: Vec<RawComponent>,
}

/// Reasons a registration is rejected.
///
/// Validation applies rules in a fixed order and the first failing rule
/// wins, so the reason reported for a multiply-invalid request is
/// deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegisterError {
    #[error("name cannot be empty")]
    EmptyName,
    #[error("type can only be \"recipe\" or \"ingredient\", got {0:?}")]
    UnknownType(String),
    #[error("cookTime can only be greater than or equal to 0")]
    NegativeCookTime,
    #[error("entry names must be unique, {0} is already registered")]
    DuplicateName(CanonicalName),
    #[error("recipe requiredItems can only have one element per name, {0:?} repeats")]
    DuplicateComponent(String),
}

/// The process-wide item store.
///
/// Created empty at startup and mutated only by [`Cookbook::register`].
/// The struct itself is not synchronized; the server wraps it in a
/// read-write lock so resolutions run concurrently while registration
/// is exclusive.
#[derive(Debug, Default)]
pub struct Cookbook {
    entries: HashMap<CanonicalName, Entry>,
}

impl Cookbook {
    /// Create an empty cookbook
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up an entry by canonical name
    pub fn get(&self, name: &CanonicalName) -> Option<&Entry> {
        self.entries.get(name)
    }

    /// Check whether a canonical name is registered
    pub fn contains(&self, name: &CanonicalName) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of registered entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the cookbook is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Validate a registration request and insert the entry on success.
    ///
    /// Rules, in order (first failure wins):
    /// 1. The name must survive normalization
    /// 2. The kind must be `ingredient` or `recipe`
    /// 3. An ingredient's cook time must be non-negative
    /// 4. The canonical name must not already be registered
    /// 5. A recipe's component list must not repeat a name (compared as
    ///    supplied, before normalization)
    ///
    /// On success the store gains exactly one entry; on rejection it is
    /// untouched. Component names are normalized before storage; a
    /// component name that normalizes to nothing is rejected as
    /// [`RegisterError::EmptyName`]. A missing `cookTime` registers an
    /// ingredient with cook time 0.
    pub fn register(&mut self, request: &EntryRequest) -> Result<CanonicalName, RegisterError> {
        let canonical = normalize(&request.name).map_err(|_| RegisterError::EmptyName)?;

        let kind = match request.kind.as_str() {
            "ingredient" => EntryKind::Ingredient,
            "recipe" => EntryKind::Recipe,
            other => return Err(RegisterError::UnknownType(other.to_string())),
        };

        if kind == EntryKind::Ingredient {
            if let Some(cook_time) = request.cook_time {
                if cook_time < 0 {
                    return Err(RegisterError::NegativeCookTime);
                }
            }
        }

        if self.entries.contains_key(&canonical) {
            return Err(RegisterError::DuplicateName(canonical));
        }

        let entry = match kind {
            EntryKind::Ingredient => Entry::Ingredient {
                cook_time: request.cook_time.unwrap_or(0) as u64,
            },
            EntryKind::Recipe => {
                let mut seen = HashSet::new();
                for item in &request.required_items {
                    if !seen.insert(item.name.as_str()) {
                        return Err(RegisterError::DuplicateComponent(item.name.clone()));
                    }
                }

                let components = request
                    .required_items
                    .iter()
                    .map(|item| {
                        let name =
                            normalize(&item.name).map_err(|_| RegisterError::EmptyName)?;
                        Ok(Component {
                            name,
                            quantity: item.quantity,
                        })
                    })
                    .collect::<Result<Vec<_>, RegisterError>>()?;

                Entry::Recipe { components }
            }
        };

        self.entries.insert(canonical.clone(), entry);
        Ok(canonical)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    Ingredient,
    Recipe,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ingredient(name: &str, cook_time: i64) -> EntryRequest {
        EntryRequest {
            kind: "ingredient".to_string(),
            name: name.to_string(),
            cook_time: Some(cook_time),
            required_items: Vec::new(),
        }
    }

    fn recipe(name: &str, items: &[(&str, u64)]) -> EntryRequest {
        EntryRequest {
            kind: "recipe".to_string(),
            name: name.to_string(),
            cook_time: None,
            required_items: items
                .iter()
                .map(|(name, quantity)| RawComponent {
                    name: name.to_string(),
                    quantity: *quantity,
                })
                .collect(),
        }
    }

    #[test]
    fn test_register_ingredient() {
        let mut cookbook = Cookbook::new();
        let name = cookbook.register(&ingredient("beef-mince", 5)).unwrap();
        assert_eq!(name.as_str(), "Beef Mince");
        assert_eq!(
            cookbook.get(&name),
            Some(&Entry::Ingredient { cook_time: 5 })
        );
    }

    #[test]
    fn test_register_empty_name() {
        let mut cookbook = Cookbook::new();
        let result = cookbook.register(&ingredient("123!!!", 5));
        assert_eq!(result, Err(RegisterError::EmptyName));
        assert!(cookbook.is_empty());
    }

    #[test]
    fn test_register_unknown_type() {
        let mut cookbook = Cookbook::new();
        let mut request = ingredient("Egg", 5);
        request.kind = "pan".to_string();
        assert_eq!(
            cookbook.register(&request),
            Err(RegisterError::UnknownType("pan".to_string()))
        );
    }

    #[test]
    fn test_register_negative_cook_time() {
        let mut cookbook = Cookbook::new();
        assert_eq!(
            cookbook.register(&ingredient("Egg", -1)),
            Err(RegisterError::NegativeCookTime)
        );
        // Zero is fine
        cookbook.register(&ingredient("Egg", 0)).unwrap();
    }

    #[test]
    fn test_register_missing_cook_time_defaults_to_zero() {
        let mut cookbook = Cookbook::new();
        let mut request = ingredient("Water", 0);
        request.cook_time = None;
        let name = cookbook.register(&request).unwrap();
        assert_eq!(
            cookbook.get(&name),
            Some(&Entry::Ingredient { cook_time: 0 })
        );
    }

    #[test]
    fn test_register_duplicate_name_across_spellings() {
        let mut cookbook = Cookbook::new();
        cookbook.register(&ingredient("Tomato Soup", 3)).unwrap();
        // Different raw spelling, same canonical key
        let result = cookbook.register(&ingredient("tomato_soup", 4));
        assert!(matches!(result, Err(RegisterError::DuplicateName(_))));
        assert_eq!(cookbook.len(), 1);
    }

    #[test]
    fn test_register_duplicate_component() {
        let mut cookbook = Cookbook::new();
        let result = cookbook.register(&recipe("Omelette", &[("Egg", 1), ("Egg", 2)]));
        assert_eq!(
            result,
            Err(RegisterError::DuplicateComponent("Egg".to_string()))
        );
        assert!(cookbook.is_empty());
    }

    #[test]
    fn test_register_normalizes_component_names() {
        let mut cookbook = Cookbook::new();
        let name = cookbook
            .register(&recipe("Burger", &[("beef-mince", 1), ("bread_roll", 2)]))
            .unwrap();

        match cookbook.get(&name).unwrap() {
            Entry::Recipe { components } => {
                let names: Vec<&str> =
                    components.iter().map(|c| c.name.as_str()).collect();
                assert_eq!(names, vec!["Beef Mince", "Bread Roll"]);
            }
            Entry::Ingredient { .. } => panic!("expected a recipe"),
        }
    }

    #[test]
    fn test_register_component_name_empty_after_normalization() {
        let mut cookbook = Cookbook::new();
        let result = cookbook.register(&recipe("Mystery Dish", &[("???", 1)]));
        assert_eq!(result, Err(RegisterError::EmptyName));
        assert!(cookbook.is_empty());
    }

    #[test]
    fn test_duplicate_component_checked_before_component_normalization() {
        let mut cookbook = Cookbook::new();
        // The raw list repeats "Egg"; the unnormalizable "!!" earlier in the
        // list must not mask the duplicate, since the duplicate scan runs
        // over the whole list first.
        let result = cookbook.register(&recipe(
            "Strange Pie",
            &[("!!", 1), ("Egg", 1), ("Egg", 2)],
        ));
        assert_eq!(
            result,
            Err(RegisterError::DuplicateComponent("Egg".to_string()))
        );
    }

    #[test]
    fn test_recipe_kind_ignores_cook_time_sign() {
        let mut cookbook = Cookbook::new();
        // Rule 3 only applies to ingredients
        let mut request = recipe("Stew", &[("Water", 1)]);
        request.cook_time = Some(-5);
        cookbook.register(&request).unwrap();
    }
}
