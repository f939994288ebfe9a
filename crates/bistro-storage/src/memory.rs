//! In-memory [`Store`] implementation.
//!
//! All tables live behind one `tokio::sync::RwLock`, so every write is
//! applied atomically and readers always see a consistent snapshot. Ids come
//! from one counter per table and are never reused.

use async_trait::async_trait;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::Arc;
use tokio::sync::RwLock;

use bistro_core::{
    Clock, Ingredient, IngredientId, Item, ItemChanges, ItemId, Menu, MenuChanges, MenuId,
    NewIngredient, NewItem, NewMenu, SystemClock,
};

use crate::query::{MenuFilter, listing_order};
use crate::{Error, Result, Store};

#[derive(Default)]
struct Tables {
    ingredients: BTreeMap<IngredientId, Ingredient>,
    items: BTreeMap<ItemId, Item>,
    menus: BTreeMap<MenuId, Menu>,
    next_ingredient: u64,
    next_item: u64,
    next_menu: u64,
}

impl Tables {
    fn check_ingredients<'a, I>(&self, ids: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a IngredientId>,
    {
        for id in ids {
            if !self.ingredients.contains_key(id) {
                return Err(Error::unknown_reference(IngredientId::entity(), id.get()));
            }
        }
        Ok(())
    }

    fn check_items<'a, I>(&self, ids: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a ItemId>,
    {
        for id in ids {
            if !self.items.contains_key(id) {
                return Err(Error::unknown_reference(ItemId::entity(), id.get()));
            }
        }
        Ok(())
    }
}

/// A [`Store`] kept entirely in process memory.
pub struct MemoryStore {
    tables: RwLock<Tables>,
    clock: Arc<dyn Clock>,
}

impl MemoryStore {
    /// Creates an empty store stamping records with the system clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Creates an empty store stamping records with `clock`.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            tables: RwLock::new(Tables::default()),
            clock,
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryStore").finish_non_exhaustive()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn create_ingredient(&self, new: NewIngredient) -> Result<Ingredient> {
        let mut tables = self.tables.write().await;
        tables.next_ingredient += 1;
        let ingredient = Ingredient {
            id: IngredientId::new(tables.next_ingredient),
            name: new.name,
        };
        tables.ingredients.insert(ingredient.id, ingredient.clone());
        log::debug!("Created ingredient {} '{}'", ingredient.id, ingredient.name);
        Ok(ingredient)
    }

    async fn ingredient(&self, id: IngredientId) -> Result<Option<Ingredient>> {
        Ok(self.tables.read().await.ingredients.get(&id).cloned())
    }

    async fn ingredients(&self) -> Result<Vec<Ingredient>> {
        Ok(self.tables.read().await.ingredients.values().cloned().collect())
    }

    async fn ingredients_by_ids(&self, ids: &BTreeSet<IngredientId>) -> Result<Vec<Ingredient>> {
        let tables = self.tables.read().await;
        Ok(ids
            .iter()
            .filter_map(|id| tables.ingredients.get(id).cloned())
            .collect())
    }

    async fn delete_ingredient(&self, id: IngredientId) -> Result<()> {
        let mut tables = self.tables.write().await;
        if tables.ingredients.remove(&id).is_none() {
            return Err(Error::not_found(IngredientId::entity(), id.get()));
        }
        for item in tables.items.values_mut() {
            item.ingredients.remove(&id);
        }
        log::debug!("Deleted ingredient {id}");
        Ok(())
    }

    async fn create_item(&self, new: NewItem) -> Result<Item> {
        let mut tables = self.tables.write().await;
        tables.check_ingredients(&new.ingredients)?;
        tables.next_item += 1;
        let item = Item {
            id: ItemId::new(tables.next_item),
            name: new.name,
            description: new.description,
            chef: new.chef,
            created_date: self.clock.now(),
            standard: new.standard,
            ingredients: new.ingredients,
        };
        tables.items.insert(item.id, item.clone());
        log::debug!("Created item {} '{}' by {}", item.id, item.name, item.chef);
        Ok(item)
    }

    async fn item(&self, id: ItemId) -> Result<Option<Item>> {
        Ok(self.tables.read().await.items.get(&id).cloned())
    }

    async fn items(&self) -> Result<Vec<Item>> {
        Ok(self.tables.read().await.items.values().cloned().collect())
    }

    async fn items_by_ids(&self, ids: &BTreeSet<ItemId>) -> Result<Vec<Item>> {
        let tables = self.tables.read().await;
        Ok(ids
            .iter()
            .filter_map(|id| tables.items.get(id).cloned())
            .collect())
    }

    async fn update_item(&self, id: ItemId, changes: ItemChanges) -> Result<Item> {
        let mut tables = self.tables.write().await;
        tables.check_ingredients(&changes.ingredients)?;
        let item = tables
            .items
            .get_mut(&id)
            .ok_or_else(|| Error::not_found(ItemId::entity(), id.get()))?;
        item.name = changes.name;
        item.description = changes.description;
        item.standard = changes.standard;
        item.ingredients = changes.ingredients;
        log::debug!("Updated item {id}");
        Ok(item.clone())
    }

    async fn add_ingredients(&self, id: ItemId, ingredients: &[IngredientId]) -> Result<Item> {
        let mut tables = self.tables.write().await;
        tables.check_ingredients(ingredients)?;
        let item = tables
            .items
            .get_mut(&id)
            .ok_or_else(|| Error::not_found(ItemId::entity(), id.get()))?;
        item.ingredients.extend(ingredients.iter().copied());
        Ok(item.clone())
    }

    async fn delete_item(&self, id: ItemId) -> Result<()> {
        let mut tables = self.tables.write().await;
        if tables.items.remove(&id).is_none() {
            return Err(Error::not_found(ItemId::entity(), id.get()));
        }
        for menu in tables.menus.values_mut() {
            menu.items.remove(&id);
        }
        log::debug!("Deleted item {id}");
        Ok(())
    }

    async fn create_menu(&self, new: NewMenu) -> Result<Menu> {
        let mut tables = self.tables.write().await;
        tables.check_items(&new.items)?;
        tables.next_menu += 1;
        let menu = Menu {
            id: MenuId::new(tables.next_menu),
            season: new.season,
            items: new.items,
            created_date: self.clock.now(),
            expiration_date: new.expiration_date,
        };
        tables.menus.insert(menu.id, menu.clone());
        log::debug!("Created menu {} '{}'", menu.id, menu.season);
        Ok(menu)
    }

    async fn menu(&self, id: MenuId) -> Result<Option<Menu>> {
        Ok(self.tables.read().await.menus.get(&id).cloned())
    }

    async fn update_menu(&self, id: MenuId, changes: MenuChanges) -> Result<Menu> {
        let mut tables = self.tables.write().await;
        tables.check_items(&changes.items)?;
        let menu = tables
            .menus
            .get_mut(&id)
            .ok_or_else(|| Error::not_found(MenuId::entity(), id.get()))?;
        menu.season = changes.season;
        menu.items = changes.items;
        menu.expiration_date = changes.expiration_date;
        log::debug!("Updated menu {id}");
        Ok(menu.clone())
    }

    async fn add_items(&self, id: MenuId, items: &[ItemId]) -> Result<Menu> {
        let mut tables = self.tables.write().await;
        tables.check_items(items)?;
        let menu = tables
            .menus
            .get_mut(&id)
            .ok_or_else(|| Error::not_found(MenuId::entity(), id.get()))?;
        menu.items.extend(items.iter().copied());
        Ok(menu.clone())
    }

    async fn delete_menu(&self, id: MenuId) -> Result<()> {
        let mut tables = self.tables.write().await;
        if tables.menus.remove(&id).is_none() {
            return Err(Error::not_found(MenuId::entity(), id.get()));
        }
        log::debug!("Deleted menu {id}");
        Ok(())
    }

    async fn list_menus(&self, filter: MenuFilter) -> Result<Vec<Menu>> {
        let tables = self.tables.read().await;
        let mut menus: Vec<Menu> = tables
            .menus
            .values()
            .filter(|menu| filter.matches(menu))
            .cloned()
            .collect();
        menus.sort_by(listing_order);
        Ok(menus)
    }
}
