//! In-memory shopping list.
//!
//! [`ListStore`] owns the ordered item sequence and the single
//! "which item is being edited" flag. All mutations are synchronous; the
//! presentation layer serializes user intents before calling in.

mod item;
mod store;
mod validation;

pub use item::{ItemState, ShoppingItem};
pub use store::ListStore;
pub use validation::{
    format_quantity, parse_quantity, parse_quantity_or_zero, validate_name, AddError,
};
