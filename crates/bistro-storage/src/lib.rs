//! # bistro-storage
//!
//! Storage collaborator for the Bistro menu service.
//!
//! - [`Store`]: async CRUD per entity type, many-to-many association
//!   management, batched lookups, and filtered menu listing
//! - [`MemoryStore`]: in-process implementation behind a single `RwLock`
//! - [`query`]: the current-menu listing and eager-loading detail reads

#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod error;
pub mod memory;
pub mod query;
pub mod traits;

pub use error::{Error, Result};
pub use memory::MemoryStore;
pub use query::{
    ItemWithIngredients, MenuFilter, MenuWithItems, current_menus, item_detail, menu_detail,
};
pub use traits::Store;
