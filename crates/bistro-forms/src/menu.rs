//! Menu creation/edit form.

use bistro_core::{ItemId, Menu, MenuChanges};

use crate::schema::{Choice, FieldSpec, FieldValue, FormSchema, ValidationContext};
use crate::{FormData, FormErrors, FormView, bind};

/// Rejection message for an expiration date that is not in the future.
pub const EXPIRATION_IN_PAST: &str = "Expiration date must be greater than today's date";

/// Longest accepted season label.
pub const SEASON_MAX_LEN: usize = 20;

/// Validates `season`, `expiration_date`, and `items` for a menu write.
#[derive(Debug, Clone, Default)]
pub struct MenuForm {
    items: Vec<Choice>,
}

impl MenuForm {
    /// Creates a form whose `items` field offers `items`.
    pub fn new(items: Vec<Choice>) -> Self {
        Self { items }
    }

    /// The field schema.
    pub fn schema(&self) -> FormSchema {
        FormSchema::new()
            .field(FieldSpec::text("season", SEASON_MAX_LEN))
            .field(FieldSpec::datetime("expiration_date").validate(expiration_after_now))
            .field(
                FieldSpec::multiple_choice("items", self.items.iter().map(|choice| choice.id))
                    .required(true),
            )
    }

    /// Validates a submission into a menu change-set.
    pub fn validate(
        &self,
        data: &FormData,
        ctx: &ValidationContext,
    ) -> Result<MenuChanges, FormErrors> {
        let bound = bind(&self.schema(), data, ctx)?;
        Ok(MenuChanges {
            season: bound.text("season"),
            items: bound.choices("items").into_iter().map(ItemId::new).collect(),
            expiration_date: bound.datetime("expiration_date"),
        })
    }

    /// Form values pre-populated from an existing menu.
    pub fn initial(menu: &Menu) -> FormData {
        let mut data = FormData::new().with("season", menu.season.clone());
        if let Some(at) = menu.expiration_date {
            data.set("expiration_date", at.to_rfc3339());
        }
        for id in &menu.items {
            data.append("items", id.to_string());
        }
        data
    }

    /// Render model for an empty, pre-populated, or rejected form.
    pub fn view(&self, data: FormData, errors: FormErrors) -> FormView {
        FormView::new(&self.schema(), data, errors).with_choices("items", self.items.clone())
    }
}

/// The expiration date, when given, must be strictly later than now.
fn expiration_after_now(value: &FieldValue, ctx: &ValidationContext) -> Result<(), String> {
    match value {
        FieldValue::DateTime(at) if *at <= ctx.now => Err(EXPIRATION_IN_PAST.to_string()),
        _ => Ok(()),
    }
}
