//! Route table and helpers shared by the page handlers.
//!
//! Every write page follows the same flow: a GET shows the form, a POST
//! either persists and answers `303 See Other` to the detail page, or
//! re-renders the form (200) with the submitted values and field errors.

pub mod health;
pub mod ingredients;
pub mod items;
pub mod menus;

use axum::Router;
use axum::body::Bytes;
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::get;

use bistro_forms::{Choice, FormData};

use crate::{AppState, Result};

/// View listing the current menus.
pub const MENU_LIST_VIEW: &str = "menu/menu_list.html";
/// View showing one menu.
pub const MENU_DETAIL_VIEW: &str = "menu/menu_detail.html";
/// View for creating or editing a menu.
pub const MENU_FORM_VIEW: &str = "menu/menu_form.html";
/// View showing one item.
pub const ITEM_DETAIL_VIEW: &str = "menu/item_detail.html";
/// View for creating or editing an item.
pub const ITEM_FORM_VIEW: &str = "menu/item_form.html";
/// View listing ingredients with the add form.
pub const INGREDIENT_LIST_VIEW: &str = "menu/ingredient_list.html";

/// Builds the page routes. State is supplied by the caller.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(menus::menu_list))
        .route("/menu/new/", get(menus::new_menu).post(menus::create_menu))
        .route("/menu/{id}/", get(menus::menu_detail))
        .route(
            "/menu/{id}/edit/",
            get(menus::edit_menu).post(menus::update_menu),
        )
        .route("/menu/item/new/", get(items::new_item).post(items::create_item))
        .route("/menu/item/{id}/", get(items::item_detail))
        .route(
            "/menu/item/{id}/edit/",
            get(items::edit_item).post(items::update_item),
        )
        .route(
            "/menu/ingredients/",
            get(ingredients::ingredient_list).post(ingredients::create_ingredient),
        )
        .route("/healthz", get(health::health))
}

/// Decodes an `application/x-www-form-urlencoded` body.
pub(crate) fn read_form(body: &Bytes) -> FormData {
    FormData::from_urlencoded(body)
}

/// `303 See Other` to `location`.
pub(crate) fn see_other(location: &str) -> Response {
    Redirect::to(location).into_response()
}

/// Every item as a selectable option.
pub(crate) async fn item_choices(state: &AppState) -> Result<Vec<Choice>> {
    Ok(state
        .store
        .items()
        .await?
        .into_iter()
        .map(|item| Choice::new(item.id.get(), item.name))
        .collect())
}

/// Every ingredient as a selectable option.
pub(crate) async fn ingredient_choices(state: &AppState) -> Result<Vec<Choice>> {
    Ok(state
        .store
        .ingredients()
        .await?
        .into_iter()
        .map(|ingredient| Choice::new(ingredient.id.get(), ingredient.name))
        .collect())
}
