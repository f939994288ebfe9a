//! Standalone ingredient form.

use bistro_core::NewIngredient;

use crate::schema::{FieldSpec, FormSchema, ValidationContext};
use crate::{FormData, FormErrors, FormView, bind};

/// Longest accepted ingredient name.
pub const NAME_MAX_LEN: usize = 200;

/// Validates the `name` of a new ingredient.
#[derive(Debug, Clone, Copy, Default)]
pub struct IngredientForm;

impl IngredientForm {
    /// The field schema.
    pub fn schema(&self) -> FormSchema {
        FormSchema::new().field(FieldSpec::text("name", NAME_MAX_LEN))
    }

    /// Validates a submission into an ingredient change-set.
    pub fn validate(
        &self,
        data: &FormData,
        ctx: &ValidationContext,
    ) -> Result<NewIngredient, FormErrors> {
        let bound = bind(&self.schema(), data, ctx)?;
        Ok(NewIngredient::new(bound.text("name")))
    }

    /// Render model.
    pub fn view(&self, data: FormData, errors: FormErrors) -> FormView {
        FormView::new(&self.schema(), data, errors)
    }
}
