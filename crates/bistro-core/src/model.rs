//! Domain records: ingredients, menu items, and seasonal menus.
//!
//! Records are plain data. Identifiers and creation timestamps are assigned
//! by the store; the `New*` and `*Changes` types are the validated shapes a
//! form hands over for persistence.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::ids::{IngredientId, ItemId, MenuId, UserId};

// ============================================================================
// Ingredient
// ============================================================================

/// A named ingredient, referenced by items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Store-assigned id.
    pub id: IngredientId,
    /// Display name.
    pub name: String,
}

impl Ingredient {
    /// Human-readable label.
    pub fn label(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A validated ingredient ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewIngredient {
    /// Display name.
    pub name: String,
}

impl NewIngredient {
    /// Creates a new ingredient change-set.
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self { name: name.into() }
    }
}

// ============================================================================
// Item
// ============================================================================

/// A dish authored by a chef.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Store-assigned id.
    pub id: ItemId,
    /// Display name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// The authoring user. Always present.
    pub chef: UserId,
    /// Set once when the item is stored.
    pub created_date: DateTime<Utc>,
    /// Whether the item is a standard (always offered) dish.
    pub standard: bool,
    /// Ingredients used by the item.
    pub ingredients: BTreeSet<IngredientId>,
}

impl Item {
    /// Human-readable label.
    pub fn label(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A validated item ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    /// Display name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// The authoring user.
    pub chef: UserId,
    /// Standard-dish flag.
    pub standard: bool,
    /// Ingredients to attach.
    pub ingredients: BTreeSet<IngredientId>,
}

impl NewItem {
    /// Creates an item change-set with no ingredients and `standard` unset.
    pub fn new<N, D>(name: N, description: D, chef: UserId) -> Self
    where
        N: Into<String>,
        D: Into<String>,
    {
        Self {
            name: name.into(),
            description: description.into(),
            chef,
            standard: false,
            ingredients: BTreeSet::new(),
        }
    }

    /// Builds a new item from submitted fields, attributed to `chef`.
    pub fn from_changes(changes: ItemChanges, chef: UserId) -> Self {
        Self {
            name: changes.name,
            description: changes.description,
            chef,
            standard: changes.standard,
            ingredients: changes.ingredients,
        }
    }

    /// Sets the standard-dish flag.
    pub fn with_standard(mut self, standard: bool) -> Self {
        self.standard = standard;
        self
    }

    /// Sets the ingredient set.
    pub fn with_ingredients<I>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = IngredientId>,
    {
        self.ingredients = ingredients.into_iter().collect();
        self
    }
}

/// Submitter-editable fields of an item.
///
/// `chef` and `created_date` are not part of an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemChanges {
    /// Display name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Standard-dish flag.
    pub standard: bool,
    /// Replacement ingredient set.
    pub ingredients: BTreeSet<IngredientId>,
}

// ============================================================================
// Menu
// ============================================================================

/// A seasonal grouping of items with an optional expiration date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Menu {
    /// Store-assigned id.
    pub id: MenuId,
    /// Free-text season label. Not unique.
    pub season: String,
    /// Items offered on the menu.
    pub items: BTreeSet<ItemId>,
    /// Set once when the menu is stored.
    pub created_date: DateTime<Utc>,
    /// When the menu stops being offered. `None` never expires.
    pub expiration_date: Option<DateTime<Utc>>,
}

impl Menu {
    /// Human-readable label.
    pub fn label(&self) -> &str {
        &self.season
    }

    /// Whether the menu is still offered at `now`.
    ///
    /// A menu expiring exactly at `now` is no longer current.
    pub fn is_current(&self, now: DateTime<Utc>) -> bool {
        match self.expiration_date {
            None => true,
            Some(expires) => expires > now,
        }
    }
}

impl fmt::Display for Menu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A validated menu ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMenu {
    /// Season label.
    pub season: String,
    /// Items to attach.
    pub items: BTreeSet<ItemId>,
    /// Optional expiration.
    pub expiration_date: Option<DateTime<Utc>>,
}

impl NewMenu {
    /// Creates a menu change-set with no items and no expiration.
    pub fn new<S: Into<String>>(season: S) -> Self {
        Self {
            season: season.into(),
            items: BTreeSet::new(),
            expiration_date: None,
        }
    }

    /// Sets the expiration date.
    pub fn expiring_at(mut self, at: DateTime<Utc>) -> Self {
        self.expiration_date = Some(at);
        self
    }

    /// Sets the item set.
    pub fn with_items<I>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = ItemId>,
    {
        self.items = items.into_iter().collect();
        self
    }
}

/// Submitter-editable fields of a menu.
pub type MenuChanges = NewMenu;
