use super::item::ShoppingItem;
use super::validation::{parse_quantity, parse_quantity_or_zero, validate_name, AddError};

/// Ordered collection of shopping items plus the edit-mode protocol.
///
/// Insertion order is creation order. A new id is one past the largest id
/// currently present, so ids are unique at any point in time. Deleting the
/// newest item frees its id for the next add.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListStore {
    items: Vec<ShoppingItem>,
}

impl ListStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from existing items, as-is. Used to seed state in tests
    /// and demos; flags are not normalized.
    pub fn from_items(items: Vec<ShoppingItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[ShoppingItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&ShoppingItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// The item currently in edit mode, if any.
    pub fn editing(&self) -> Option<&ShoppingItem> {
        self.items.iter().find(|item| item.is_editing)
    }

    /// Validate and append a new item.
    ///
    /// On rejection the list is untouched and the error says which of the
    /// name and quantity checks failed.
    pub fn add(
        &mut self,
        name: &str,
        quantity_text: &str,
        address: Option<&str>,
    ) -> Result<&[ShoppingItem], AddError> {
        let name = validate_name(name);
        let quantity = parse_quantity(quantity_text);
        let (name, quantity) = match (name, quantity) {
            (Some(name), Some(quantity)) => (name, quantity),
            (name, quantity) => {
                let err = AddError::from_checks(name.is_some(), quantity.is_some())
                    .unwrap_or(AddError::InvalidNameAndQuantity);
                tracing::debug!(error = %err, "add rejected");
                return Err(err);
            }
        };

        let id = self.next_id();
        self.items
            .push(ShoppingItem::new(id, name, quantity, address.unwrap_or_default()));
        tracing::debug!(id, name, quantity, "item added");
        Ok(&self.items)
    }

    /// Id for the next added item: one past the largest current id. This is
    /// `len() + 1` until something is deleted.
    pub fn next_id(&self) -> u32 {
        self.items.iter().map(|item| item.id).max().unwrap_or(0) + 1
    }

    /// Put `id` into edit mode and every other item out of it.
    ///
    /// Rewrites the flag on all items so a list with several stale editing
    /// flags ends up with exactly one. Only the first item with `id` is
    /// flagged, even in a seeded list that repeats ids. Unknown ids leave the
    /// list untouched.
    pub fn begin_edit(&mut self, id: u32) {
        let Some(target) = self.items.iter().position(|item| item.id == id) else {
            tracing::debug!(id, "begin_edit: no such item");
            return;
        };
        for (index, item) in self.items.iter_mut().enumerate() {
            item.is_editing = index == target;
        }
        tracing::debug!(id, "edit started");
    }

    /// Leave edit mode and overwrite name and quantity of `id`.
    ///
    /// Editing is cleared on every item even when `id` does not exist. An
    /// unparseable quantity is stored as `0.0` instead of rejecting the edit.
    pub fn commit_edit(&mut self, id: u32, name: &str, quantity_text: &str) {
        for item in &mut self.items {
            item.is_editing = false;
        }

        let quantity = parse_quantity_or_zero(quantity_text);
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.name = name.to_string();
                item.quantity = quantity;
                tracing::debug!(id, quantity, "edit committed");
            }
            None => tracing::debug!(id, "commit_edit: no such item"),
        }
    }

    /// Remove the first item with `id`. An in-progress edit of that item is
    /// discarded with it.
    pub fn delete(&mut self, id: u32) -> Option<ShoppingItem> {
        let index = self.items.iter().position(|item| item.id == id)?;
        let removed = self.items.remove(index);
        tracing::debug!(id, "item deleted");
        Some(removed)
    }
}
