//! Bistro Core: domain model shared by every Bistro crate.
//!
//! This crate has no internal Bistro dependencies.
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`ids`]: Store-assigned identifiers for each entity type
//! - [`model`]: `Ingredient`, `Item`, `Menu` and their change-sets
//! - [`clock`]: Injectable source of "now"

pub mod clock;
pub mod error;
pub mod ids;
pub mod model;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{Error, Result};
pub use ids::{IngredientId, ItemId, MenuId, UserId};
pub use model::{
    Ingredient, Item, ItemChanges, Menu, MenuChanges, NewIngredient, NewItem, NewMenu,
};
