use pumpkin_inventory::InventoryError;
use thiserror::Error;

use crate::menu::MenuId;

#[derive(Error, Debug)]
pub enum MenuError {
    #[error("a menu must have between 1 and 6 rows, got {0}")]
    InvalidRows(u8),
    #[error("slot {slot} is out of bounds for a menu of size {size}")]
    InvalidSlot { slot: usize, size: usize },
    #[error("item not attached to a menu")]
    NotAttached,
    #[error("item is already attached to menu {0}")]
    AlreadyAttached(MenuId),
    #[error("menu {0} has been destroyed")]
    Destroyed(MenuId),
    #[error(transparent)]
    Inventory(#[from] InventoryError),
    #[error("invalid menu config: {0}")]
    Config(#[from] serde_json::Error),
}
