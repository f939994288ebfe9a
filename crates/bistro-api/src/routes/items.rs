//! Item pages: detail, create, and edit.
//!
//! The chef of a new item is the acting user; edits keep the original chef
//! and creation date.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::response::Response;
use serde::Serialize;

use bistro_core::{Item, ItemId, NewItem};
use bistro_forms::{FormData, FormErrors, FormView, ItemForm};
use bistro_storage::ItemWithIngredients;

use super::{ITEM_DETAIL_VIEW, ITEM_FORM_VIEW, ingredient_choices, read_form, see_other};
use crate::extract::{CurrentUser, parse_id};
use crate::{AppState, Error, Result};

#[derive(Serialize)]
struct ItemDetailContext {
    item: ItemWithIngredients,
}

#[derive(Serialize)]
struct ItemFormContext {
    form: FormView,
    item: Option<Item>,
}

/// Location of an item's detail page.
pub fn item_url(id: ItemId) -> String {
    format!("/menu/item/{id}/")
}

/// `GET /menu/item/{id}/`
pub async fn item_detail(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> Result<Response> {
    let id: ItemId = parse_id(&raw)?;
    let item = bistro_storage::item_detail(state.store.as_ref(), id).await?;
    state.render(ITEM_DETAIL_VIEW, &ItemDetailContext { item })
}

/// `GET /menu/item/new/`
pub async fn new_item(State(state): State<AppState>, _user: CurrentUser) -> Result<Response> {
    let form = ItemForm::new(ingredient_choices(&state).await?);
    render_form(&state, &form, FormData::new(), FormErrors::new(), None)
}

/// `POST /menu/item/new/`
pub async fn create_item(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    body: Bytes,
) -> Result<Response> {
    let data = read_form(&body);
    let form = ItemForm::new(ingredient_choices(&state).await?);
    match form.validate(&data, &state.validation_context()) {
        Ok(changes) => {
            let item = state
                .store
                .create_item(NewItem::from_changes(changes, user.user_id()))
                .await?;
            tracing::info!(item_id = %item.id, chef = %item.chef, "Item created");
            Ok(see_other(&item_url(item.id)))
        }
        Err(errors) => {
            tracing::debug!(errors = %errors, "Item submission rejected");
            render_form(&state, &form, data, errors, None)
        }
    }
}

/// `GET /menu/item/{id}/edit/`
pub async fn edit_item(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(raw): Path<String>,
) -> Result<Response> {
    let item = load_item(&state, &raw).await?;
    let form = ItemForm::new(ingredient_choices(&state).await?);
    let initial = ItemForm::initial(&item);
    render_form(&state, &form, initial, FormErrors::new(), Some(item))
}

/// `POST /menu/item/{id}/edit/`
pub async fn update_item(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(raw): Path<String>,
    body: Bytes,
) -> Result<Response> {
    let item = load_item(&state, &raw).await?;
    let data = read_form(&body);
    let form = ItemForm::new(ingredient_choices(&state).await?);
    match form.validate(&data, &state.validation_context()) {
        Ok(changes) => {
            let item = state.store.update_item(item.id, changes).await?;
            tracing::info!(item_id = %item.id, user = %user.subject, "Item updated");
            Ok(see_other(&item_url(item.id)))
        }
        Err(errors) => {
            tracing::debug!(item_id = %item.id, errors = %errors, "Item edit rejected");
            render_form(&state, &form, data, errors, Some(item))
        }
    }
}

async fn load_item(state: &AppState, raw: &str) -> Result<Item> {
    let id: ItemId = parse_id(raw)?;
    state
        .store
        .item(id)
        .await?
        .ok_or_else(|| Error::not_found(ItemId::entity(), id))
}

fn render_form(
    state: &AppState,
    form: &ItemForm,
    data: FormData,
    errors: FormErrors,
    item: Option<Item>,
) -> Result<Response> {
    let context = ItemFormContext {
        form: form.view(data, errors),
        item,
    };
    state.render(ITEM_FORM_VIEW, &context)
}
