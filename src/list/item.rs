use super::validation::format_quantity;

/// One shopping-list entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ShoppingItem {
    /// Unique among current items; one past the largest id at creation.
    pub id: u32,
    pub name: String,
    pub quantity: f64,
    /// Formatted address attached during creation, empty when none.
    pub address: String,
    /// Transient UI flag. At most one item in a list has it set.
    pub is_editing: bool,
}

/// Per-item edit state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemState {
    Viewing,
    Editing,
}

impl ShoppingItem {
    pub fn new(id: u32, name: impl Into<String>, quantity: f64, address: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            address: address.into(),
            is_editing: false,
        }
    }

    pub fn state(&self) -> ItemState {
        if self.is_editing {
            ItemState::Editing
        } else {
            ItemState::Viewing
        }
    }

    pub fn has_address(&self) -> bool {
        !self.address.is_empty()
    }

    /// Quantity as shown in the list (`1.0`, `2.5`).
    pub fn quantity_label(&self) -> String {
        format_quantity(self.quantity)
    }
}
