use std::sync::Arc;

use pumpkin_data::{InventoryAction, SlotType};

use crate::host::Viewer;
use crate::menu::MenuId;

pub trait Cancellable {
    fn cancelled(&self) -> bool;

    fn set_cancelled(&mut self, cancelled: bool);
}

/// Fired when a player clicks inside an open screen.
#[derive(Clone)]
pub struct InventoryClickEvent {
    /// The player who clicked.
    pub player: Arc<dyn Viewer>,
    /// The menu behind the open screen, `None` for any other inventory.
    pub holder: Option<MenuId>,
    pub action: InventoryAction,
    pub slot_type: SlotType,
    /// The clicked slot counted across the whole screen, player inventory included.
    pub raw_slot: i32,
    cancelled: bool,
}

impl InventoryClickEvent {
    #[must_use]
    pub fn new(
        player: Arc<dyn Viewer>,
        holder: Option<MenuId>,
        action: InventoryAction,
        slot_type: SlotType,
        raw_slot: i32,
    ) -> Self {
        Self {
            player,
            holder,
            action,
            slot_type,
            raw_slot,
            cancelled: false,
        }
    }
}

impl Cancellable for InventoryClickEvent {
    fn cancelled(&self) -> bool {
        self.cancelled
    }

    fn set_cancelled(&mut self, cancelled: bool) {
        self.cancelled = cancelled;
    }
}

/// Fired when a player's screen is closed, by them or by the server.
#[derive(Clone)]
pub struct InventoryCloseEvent {
    pub player: Arc<dyn Viewer>,
    pub holder: Option<MenuId>,
    cancelled: bool,
}

impl InventoryCloseEvent {
    #[must_use]
    pub fn new(player: Arc<dyn Viewer>, holder: Option<MenuId>) -> Self {
        Self {
            player,
            holder,
            cancelled: false,
        }
    }
}

impl Cancellable for InventoryCloseEvent {
    fn cancelled(&self) -> bool {
        self.cancelled
    }

    fn set_cancelled(&mut self, cancelled: bool) {
        self.cancelled = cancelled;
    }
}

/// Fired when a player leaves the server.
#[derive(Clone)]
pub struct PlayerQuitEvent {
    pub player: Arc<dyn Viewer>,
    /// The menu behind the player's open screen, if they had one open.
    pub open_inventory: Option<MenuId>,
}

impl PlayerQuitEvent {
    #[must_use]
    pub fn new(player: Arc<dyn Viewer>, open_inventory: Option<MenuId>) -> Self {
        Self {
            player,
            open_inventory,
        }
    }
}
