//! # bistro-forms
//!
//! Validation layer for Bistro writes.
//!
//! Each form is described by an explicit [`FormSchema`]: a list of fields
//! with a kind, a required flag, and validator functions. The generic
//! [`bind`] routine turns raw submitted [`FormData`] into typed
//! [`BoundValues`] or per-field [`FormErrors`]. Concrete forms
//! ([`MenuForm`], [`ItemForm`], [`IngredientForm`]) build their schema,
//! bind, and convert the result into a `bistro-core` change-set.
//!
//! Nothing here touches storage; a successful validation only produces an
//! in-memory change-set.

pub mod bind;
pub mod data;
pub mod datetime;
pub mod errors;
pub mod ingredient;
pub mod item;
pub mod menu;
pub mod schema;
pub mod view;

pub use bind::{BoundValues, bind};
pub use data::FormData;
pub use errors::FormErrors;
pub use ingredient::IngredientForm;
pub use item::ItemForm;
pub use menu::{EXPIRATION_IN_PAST, MenuForm};
pub use schema::{Choice, FieldKind, FieldSpec, FieldValue, FormSchema, ValidationContext, Validator};
pub use view::FormView;
