//! The storage collaborator contract.

use async_trait::async_trait;
use std::collections::BTreeSet;

use bistro_core::{
    Ingredient, IngredientId, Item, ItemChanges, ItemId, Menu, MenuChanges, MenuId,
    NewIngredient, NewItem, NewMenu,
};

use crate::Result;
use crate::query::MenuFilter;

/// Persistence for ingredients, items, and menus.
///
/// Implementations assign ids and creation timestamps, keep each write
/// atomic at the single-record level, and reject associations that name
/// records which do not exist ([`Error::UnknownReference`]).
///
/// Lookups by id return `Ok(None)` for absent records; updates and deletes
/// of absent records fail with [`Error::NotFound`].
///
/// [`Error::UnknownReference`]: crate::Error::UnknownReference
/// [`Error::NotFound`]: crate::Error::NotFound
#[async_trait]
pub trait Store: Send + Sync + 'static {
    // ------------------------------------------------------------------
    // Ingredients
    // ------------------------------------------------------------------

    /// Stores a new ingredient.
    async fn create_ingredient(&self, new: NewIngredient) -> Result<Ingredient>;

    /// Looks up one ingredient.
    async fn ingredient(&self, id: IngredientId) -> Result<Option<Ingredient>>;

    /// Every ingredient, by ascending id.
    async fn ingredients(&self) -> Result<Vec<Ingredient>>;

    /// The ingredients among `ids` that exist, by ascending id.
    async fn ingredients_by_ids(&self, ids: &BTreeSet<IngredientId>) -> Result<Vec<Ingredient>>;

    /// Deletes an ingredient and detaches it from every item.
    async fn delete_ingredient(&self, id: IngredientId) -> Result<()>;

    // ------------------------------------------------------------------
    // Items
    // ------------------------------------------------------------------

    /// Stores a new item, stamping its creation date.
    async fn create_item(&self, new: NewItem) -> Result<Item>;

    /// Looks up one item.
    async fn item(&self, id: ItemId) -> Result<Option<Item>>;

    /// Every item, by ascending id.
    async fn items(&self) -> Result<Vec<Item>>;

    /// The items among `ids` that exist, by ascending id.
    async fn items_by_ids(&self, ids: &BTreeSet<ItemId>) -> Result<Vec<Item>>;

    /// Replaces an item's editable fields. Chef and creation date are kept.
    async fn update_item(&self, id: ItemId, changes: ItemChanges) -> Result<Item>;

    /// Adds ingredients to an item's set.
    async fn add_ingredients(&self, id: ItemId, ingredients: &[IngredientId]) -> Result<Item>;

    /// Deletes an item and removes it from every menu.
    async fn delete_item(&self, id: ItemId) -> Result<()>;

    // ------------------------------------------------------------------
    // Menus
    // ------------------------------------------------------------------

    /// Stores a new menu, stamping its creation date.
    async fn create_menu(&self, new: NewMenu) -> Result<Menu>;

    /// Looks up one menu.
    async fn menu(&self, id: MenuId) -> Result<Option<Menu>>;

    /// Replaces a menu's editable fields. The creation date is kept.
    async fn update_menu(&self, id: MenuId, changes: MenuChanges) -> Result<Menu>;

    /// Adds items to a menu's set.
    async fn add_items(&self, id: MenuId, items: &[ItemId]) -> Result<Menu>;

    /// Deletes a menu. Its items are left in place.
    async fn delete_menu(&self, id: MenuId) -> Result<()>;

    /// Menus matching `filter`, in default listing order.
    async fn list_menus(&self, filter: MenuFilter) -> Result<Vec<Menu>>;
}
