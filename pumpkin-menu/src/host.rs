use std::sync::Arc;

use async_trait::async_trait;
use futures::future::BoxFuture;
use pumpkin_data::screen::WindowType;
use pumpkin_inventory::{SharedInventory, SimpleInventory};
use tokio::sync::{Mutex, mpsc};
use uuid::Uuid;

use crate::menu::MenuId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerKind {
    Player,
    /// Anything else that can look at a screen, e.g. a fake player from another plugin.
    Other,
}

/// Someone who can have a menu open.
#[async_trait]
pub trait Viewer: Send + Sync {
    fn uuid(&self) -> Uuid;

    fn kind(&self) -> ViewerKind {
        ViewerKind::Player
    }

    /// Sends the open screen packet for `menu` and starts tracking `inventory`.
    async fn open_screen(
        &self,
        menu: MenuId,
        window_type: WindowType,
        title: &str,
        inventory: &SharedInventory,
    );

    /// Closes whatever screen is open. The server fires a close event afterwards.
    async fn close_screen(&self);

    /// Resends every slot the client can see.
    async fn sync_inventory(&self);
}

pub trait InventoryFactory: Send + Sync {
    fn create_inventory(
        &self,
        holder: MenuId,
        window_type: WindowType,
        title: &str,
    ) -> SharedInventory;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SimpleInventoryFactory;

impl InventoryFactory for SimpleInventoryFactory {
    fn create_inventory(
        &self,
        _holder: MenuId,
        window_type: WindowType,
        _title: &str,
    ) -> SharedInventory {
        SimpleInventory::shared(window_type.size())
    }
}

pub type ScheduledTask = BoxFuture<'static, ()>;

/// Defers work to the next server tick.
pub trait TickScheduler: Send + Sync {
    fn run_next_tick(&self, task: ScheduledTask);
}

/// A FIFO of tasks for the next tick. The server calls [`TickQueue::tick`] once per tick.
pub struct TickQueue {
    sender: mpsc::UnboundedSender<ScheduledTask>,
    receiver: Mutex<mpsc::UnboundedReceiver<ScheduledTask>>,
}

impl TickQueue {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self {
            sender,
            receiver: Mutex::new(receiver),
        }
    }

    /// Runs everything that was queued before this call. Tasks queued while
    /// ticking wait for the next tick.
    pub async fn tick(&self) -> usize {
        let mut due = Vec::new();
        {
            let mut receiver = self.receiver.lock().await;
            while let Ok(task) = receiver.try_recv() {
                due.push(task);
            }
        }

        let count = due.len();
        for task in due {
            task.await;
        }
        count
    }
}

impl Default for TickQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl TickScheduler for TickQueue {
    fn run_next_tick(&self, task: ScheduledTask) {
        // We own the receiver, so the channel can't be closed
        let _ = self.sender.send(task);
    }
}

/// The server side services menus depend on.
#[derive(Clone)]
pub struct HostServices {
    pub inventories: Arc<dyn InventoryFactory>,
    pub scheduler: Arc<dyn TickScheduler>,
}

impl HostServices {
    pub fn new(inventories: Arc<dyn InventoryFactory>, scheduler: Arc<dyn TickScheduler>) -> Self {
        Self {
            inventories,
            scheduler,
        }
    }

    /// Simple inventories driven by `queue`.
    pub fn with_tick_queue(queue: Arc<TickQueue>) -> Self {
        Self::new(Arc::new(SimpleInventoryFactory), queue)
    }
}
