//! Menu listing and eager-loading detail reads.
//!
//! The public listing shows only *current* menus: those with no expiration
//! date or one strictly later than the evaluation moment. Menus are filtered
//! on their own expiration; an item that also sits on an expired menu is
//! listed only under the current ones.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use bistro_core::{Ingredient, Item, ItemId, Menu, MenuId};

use crate::{Error, Result, Store};

// ============================================================================
// Filtering and ordering
// ============================================================================

/// Which menus a listing returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuFilter {
    /// Every menu.
    All,
    /// Menus still current at the given moment.
    CurrentAt(DateTime<Utc>),
}

impl MenuFilter {
    /// Whether `menu` passes the filter.
    pub fn matches(&self, menu: &Menu) -> bool {
        match self {
            MenuFilter::All => true,
            MenuFilter::CurrentAt(now) => menu.is_current(*now),
        }
    }
}

/// Default menu ordering.
///
/// Menus that never expire come first, then by expiration date descending,
/// then by ascending id.
pub fn listing_order(a: &Menu, b: &Menu) -> Ordering {
    match (a.expiration_date, b.expiration_date) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(x), Some(y)) => y.cmp(&x),
    }
    .then_with(|| a.id.cmp(&b.id))
}

// ============================================================================
// Eager-loaded read models
// ============================================================================

/// A menu with its items loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuWithItems {
    /// The menu record.
    pub menu: Menu,
    /// Its items, by ascending id.
    pub items: Vec<Item>,
}

/// An item with its ingredients loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemWithIngredients {
    /// The item record.
    pub item: Item,
    /// Its ingredients, by ascending id.
    pub ingredients: Vec<Ingredient>,
}

/// Lists current menus at `now`, each with its items.
///
/// Items for every listed menu are fetched in a single batched lookup.
pub async fn current_menus<S>(store: &S, now: DateTime<Utc>) -> Result<Vec<MenuWithItems>>
where
    S: Store + ?Sized,
{
    let menus = store.list_menus(MenuFilter::CurrentAt(now)).await?;
    let wanted: BTreeSet<ItemId> = menus.iter().flat_map(|m| m.items.iter().copied()).collect();
    let loaded: BTreeMap<ItemId, Item> = store
        .items_by_ids(&wanted)
        .await?
        .into_iter()
        .map(|item| (item.id, item))
        .collect();

    log::debug!(
        "Listing {} current menu(s) with {} item(s)",
        menus.len(),
        loaded.len()
    );

    Ok(menus
        .into_iter()
        .map(|menu| {
            let items = menu
                .items
                .iter()
                .filter_map(|id| loaded.get(id).cloned())
                .collect();
            MenuWithItems { menu, items }
        })
        .collect())
}

/// Loads one menu with its items.
pub async fn menu_detail<S>(store: &S, id: MenuId) -> Result<MenuWithItems>
where
    S: Store + ?Sized,
{
    let menu = store
        .menu(id)
        .await?
        .ok_or_else(|| Error::not_found(MenuId::entity(), id.get()))?;
    let items = store.items_by_ids(&menu.items).await?;
    Ok(MenuWithItems { menu, items })
}

/// Loads one item with its ingredients.
pub async fn item_detail<S>(store: &S, id: ItemId) -> Result<ItemWithIngredients>
where
    S: Store + ?Sized,
{
    let item = store
        .item(id)
        .await?
        .ok_or_else(|| Error::not_found(ItemId::entity(), id.get()))?;
    let ingredients = store.ingredients_by_ids(&item.ingredients).await?;
    Ok(ItemWithIngredients { item, ingredients })
}
