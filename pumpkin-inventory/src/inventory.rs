use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{InventoryError, ItemStack};

/// Inventories are shared between the screen that shows them and whatever owns them.
pub type SharedInventory = Arc<Mutex<dyn Inventory>>;

static EMPTY_STACK: ItemStack = ItemStack::EMPTY;

pub trait Inventory: Send + Sync {
    fn size(&self) -> usize;

    fn is_empty(&self) -> bool {
        (0..self.size()).all(|slot| self.get_stack(slot).is_empty())
    }

    /// Out of bounds slots read as empty.
    fn get_stack(&self, slot: usize) -> &ItemStack;

    fn set_stack(&mut self, slot: usize, stack: ItemStack) -> Result<(), InventoryError>;

    /// Takes the stack out of `slot`, leaving it empty.
    fn remove_stack(&mut self, slot: usize) -> Result<ItemStack, InventoryError>;

    fn clear(&mut self) {
        for slot in 0..self.size() {
            // The slot is always in bounds here
            let _ = self.remove_stack(slot);
        }
    }
}

/// A plain fixed size inventory, used to back menu screens.
#[derive(Debug, Clone)]
pub struct SimpleInventory {
    items: Vec<ItemStack>,
}

impl SimpleInventory {
    pub fn new(size: usize) -> Self {
        Self {
            items: vec![ItemStack::EMPTY; size],
        }
    }

    pub fn shared(size: usize) -> SharedInventory {
        Arc::new(Mutex::new(Self::new(size)))
    }

    fn check_slot(&self, slot: usize) -> Result<(), InventoryError> {
        if slot < self.items.len() {
            Ok(())
        } else {
            Err(InventoryError::InvalidSlot {
                slot,
                size: self.items.len(),
            })
        }
    }
}

impl Inventory for SimpleInventory {
    fn size(&self) -> usize {
        self.items.len()
    }

    fn get_stack(&self, slot: usize) -> &ItemStack {
        self.items.get(slot).unwrap_or(&EMPTY_STACK)
    }

    fn set_stack(&mut self, slot: usize, stack: ItemStack) -> Result<(), InventoryError> {
        self.check_slot(slot)?;
        self.items[slot] = stack;
        Ok(())
    }

    fn remove_stack(&mut self, slot: usize) -> Result<ItemStack, InventoryError> {
        self.check_slot(slot)?;
        Ok(std::mem::take(&mut self.items[slot]))
    }
}
