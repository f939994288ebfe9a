//! Ingredient list with an inline add form.

use axum::body::Bytes;
use axum::extract::State;
use axum::response::Response;
use serde::Serialize;

use bistro_core::Ingredient;
use bistro_forms::{FormData, FormErrors, FormView, IngredientForm};

use super::{INGREDIENT_LIST_VIEW, read_form, see_other};
use crate::extract::CurrentUser;
use crate::{AppState, Result};

/// Location of the ingredient list.
pub const INGREDIENTS_URL: &str = "/menu/ingredients/";

#[derive(Serialize)]
struct IngredientListContext {
    ingredients: Vec<Ingredient>,
    form: FormView,
}

/// `GET /menu/ingredients/`
pub async fn ingredient_list(State(state): State<AppState>) -> Result<Response> {
    render_list(&state, FormData::new(), FormErrors::new()).await
}

/// `POST /menu/ingredients/`
pub async fn create_ingredient(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    body: Bytes,
) -> Result<Response> {
    let data = read_form(&body);
    match IngredientForm.validate(&data, &state.validation_context()) {
        Ok(new) => {
            let ingredient = state.store.create_ingredient(new).await?;
            tracing::info!(
                ingredient_id = %ingredient.id,
                name = %ingredient.name,
                user = %user.subject,
                "Ingredient created"
            );
            Ok(see_other(INGREDIENTS_URL))
        }
        Err(errors) => {
            tracing::debug!(errors = %errors, "Ingredient submission rejected");
            render_list(&state, data, errors).await
        }
    }
}

async fn render_list(state: &AppState, data: FormData, errors: FormErrors) -> Result<Response> {
    let context = IngredientListContext {
        ingredients: state.store.ingredients().await?,
        form: IngredientForm.view(data, errors),
    };
    state.render(INGREDIENT_LIST_VIEW, &context)
}
