use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum InventoryError {
    #[error("slot {slot} is out of bounds for an inventory of size {size}")]
    InvalidSlot { slot: usize, size: usize },
}
