use pumpkin_data::InventoryAction;

/// What kind of click a player made on a menu item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClickType {
    Left,
    ShiftLeft,
    Right,
    Other,
}

impl ClickType {
    #[must_use]
    pub const fn from_inventory_action(action: InventoryAction) -> Self {
        match action {
            InventoryAction::PickupAll
            | InventoryAction::PlaceSome
            | InventoryAction::PlaceAll
            | InventoryAction::SwapWithCursor => Self::Left,
            InventoryAction::PickupHalf | InventoryAction::PlaceOne => Self::Right,
            InventoryAction::MoveToOtherInventory => Self::ShiftLeft,
            _ => Self::Other,
        }
    }

    /// Only a plain left click. Shift clicks and unclassified actions are excluded.
    #[must_use]
    pub const fn is_left_click(&self) -> bool {
        matches!(self, Self::Left)
    }

    #[must_use]
    pub const fn is_right_click(&self) -> bool {
        matches!(self, Self::Right)
    }

    #[must_use]
    pub const fn is_shift_click(&self) -> bool {
        matches!(self, Self::ShiftLeft)
    }
}

impl From<InventoryAction> for ClickType {
    fn from(action: InventoryAction) -> Self {
        Self::from_inventory_action(action)
    }
}
