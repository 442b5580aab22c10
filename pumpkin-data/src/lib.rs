pub mod inventory_action;
pub mod item;
pub mod screen;

pub use inventory_action::{InventoryAction, SlotType};
