//! Menu item creation/edit form.

use bistro_core::{IngredientId, Item, ItemChanges};

use crate::schema::{Choice, FieldSpec, FormSchema, ValidationContext};
use crate::{FormData, FormErrors, FormView, bind};

/// Longest accepted item name.
pub const NAME_MAX_LEN: usize = 200;

/// Longest accepted item description.
pub const DESCRIPTION_MAX_LEN: usize = 255;

/// Validates `name`, `description`, `standard`, and `ingredients`.
///
/// The chef is not a form field; handlers attribute the item to the acting
/// user.
#[derive(Debug, Clone, Default)]
pub struct ItemForm {
    ingredients: Vec<Choice>,
}

impl ItemForm {
    /// Creates a form whose `ingredients` field offers `ingredients`.
    pub fn new(ingredients: Vec<Choice>) -> Self {
        Self { ingredients }
    }

    /// The field schema.
    pub fn schema(&self) -> FormSchema {
        FormSchema::new()
            .field(FieldSpec::text("name", NAME_MAX_LEN))
            .field(FieldSpec::text("description", DESCRIPTION_MAX_LEN))
            .field(FieldSpec::boolean("standard"))
            .field(FieldSpec::multiple_choice(
                "ingredients",
                self.ingredients.iter().map(|choice| choice.id),
            ))
    }

    /// Validates a submission into item fields.
    pub fn validate(
        &self,
        data: &FormData,
        ctx: &ValidationContext,
    ) -> Result<ItemChanges, FormErrors> {
        let bound = bind(&self.schema(), data, ctx)?;
        Ok(ItemChanges {
            name: bound.text("name"),
            description: bound.text("description"),
            standard: bound.boolean("standard"),
            ingredients: bound
                .choices("ingredients")
                .into_iter()
                .map(IngredientId::new)
                .collect(),
        })
    }

    /// Form values pre-populated from an existing item.
    pub fn initial(item: &Item) -> FormData {
        let mut data = FormData::new()
            .with("name", item.name.clone())
            .with("description", item.description.clone());
        if item.standard {
            data.set("standard", "on");
        }
        for id in &item.ingredients {
            data.append("ingredients", id.to_string());
        }
        data
    }

    /// Render model for an empty, pre-populated, or rejected form.
    pub fn view(&self, data: FormData, errors: FormErrors) -> FormView {
        FormView::new(&self.schema(), data, errors)
            .with_choices("ingredients", self.ingredients.clone())
    }
}
