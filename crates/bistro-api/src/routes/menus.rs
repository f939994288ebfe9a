//! Menu pages: current listing, detail, create, and edit.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::response::Response;
use serde::Serialize;

use bistro_core::{Menu, MenuId};
use bistro_forms::{FormData, FormErrors, FormView, MenuForm};
use bistro_storage::{MenuWithItems, current_menus};

use super::{MENU_DETAIL_VIEW, MENU_FORM_VIEW, MENU_LIST_VIEW, item_choices, read_form, see_other};
use crate::extract::{CurrentUser, parse_id};
use crate::{AppState, Error, Result};

#[derive(Serialize)]
struct MenuListContext {
    menus: Vec<MenuWithItems>,
}

#[derive(Serialize)]
struct MenuDetailContext {
    menu: MenuWithItems,
}

#[derive(Serialize)]
struct MenuFormContext {
    form: FormView,
    menu: Option<Menu>,
}

/// Location of a menu's detail page.
pub fn menu_url(id: MenuId) -> String {
    format!("/menu/{id}/")
}

/// `GET /`: menus that are still current, each with its items.
pub async fn menu_list(State(state): State<AppState>) -> Result<Response> {
    let menus = current_menus(state.store.as_ref(), state.now()).await?;
    state.render(MENU_LIST_VIEW, &MenuListContext { menus })
}

/// `GET /menu/{id}/`
pub async fn menu_detail(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> Result<Response> {
    let id: MenuId = parse_id(&raw)?;
    let menu = bistro_storage::menu_detail(state.store.as_ref(), id).await?;
    state.render(MENU_DETAIL_VIEW, &MenuDetailContext { menu })
}

/// `GET /menu/new/`: an empty menu form.
pub async fn new_menu(State(state): State<AppState>, _user: CurrentUser) -> Result<Response> {
    let form = MenuForm::new(item_choices(&state).await?);
    render_form(&state, &form, FormData::new(), FormErrors::new(), None)
}

/// `POST /menu/new/`
pub async fn create_menu(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    body: Bytes,
) -> Result<Response> {
    let data = read_form(&body);
    let form = MenuForm::new(item_choices(&state).await?);
    match form.validate(&data, &state.validation_context()) {
        Ok(changes) => {
            let menu = state.store.create_menu(changes).await?;
            tracing::info!(menu_id = %menu.id, season = %menu.season, user = %user.subject, "Menu created");
            Ok(see_other(&menu_url(menu.id)))
        }
        Err(errors) => {
            tracing::debug!(errors = %errors, "Menu submission rejected");
            render_form(&state, &form, data, errors, None)
        }
    }
}

/// `GET /menu/{id}/edit/`: the form pre-populated from the stored menu.
pub async fn edit_menu(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(raw): Path<String>,
) -> Result<Response> {
    let menu = load_menu(&state, &raw).await?;
    let form = MenuForm::new(item_choices(&state).await?);
    let initial = MenuForm::initial(&menu);
    render_form(&state, &form, initial, FormErrors::new(), Some(menu))
}

/// `POST /menu/{id}/edit/`
pub async fn update_menu(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(raw): Path<String>,
    body: Bytes,
) -> Result<Response> {
    let menu = load_menu(&state, &raw).await?;
    let data = read_form(&body);
    let form = MenuForm::new(item_choices(&state).await?);
    match form.validate(&data, &state.validation_context()) {
        Ok(changes) => {
            let menu = state.store.update_menu(menu.id, changes).await?;
            tracing::info!(menu_id = %menu.id, user = %user.subject, "Menu updated");
            Ok(see_other(&menu_url(menu.id)))
        }
        Err(errors) => {
            tracing::debug!(menu_id = %menu.id, errors = %errors, "Menu edit rejected");
            render_form(&state, &form, data, errors, Some(menu))
        }
    }
}

async fn load_menu(state: &AppState, raw: &str) -> Result<Menu> {
    let id: MenuId = parse_id(raw)?;
    state
        .store
        .menu(id)
        .await?
        .ok_or_else(|| Error::not_found(MenuId::entity(), id))
}

fn render_form(
    state: &AppState,
    form: &MenuForm,
    data: FormData,
    errors: FormErrors,
    menu: Option<Menu>,
) -> Result<Response> {
    let context = MenuFormContext {
        form: form.view(data, errors),
        menu,
    };
    state.render(MENU_FORM_VIEW, &context)
}
