mod error;
pub mod inventory;
pub mod item_stack;

pub use error::InventoryError;
pub use inventory::{Inventory, SharedInventory, SimpleInventory};
pub use item_stack::ItemStack;
