use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use pumpkin_data::screen::WindowType;
use pumpkin_inventory::SharedInventory;
use uuid::Uuid;

use crate::host::{HostServices, TickQueue, Viewer, ViewerKind};
use crate::menu::MenuId;
use crate::registry::MenuRegistry;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Open(MenuId),
    Close,
    Sync,
}

pub struct TestViewer {
    uuid: Uuid,
    kind: ViewerKind,
    calls: Mutex<Vec<Call>>,
}

impl TestViewer {
    pub fn player() -> Arc<Self> {
        Self::with_kind(ViewerKind::Player)
    }

    pub fn with_kind(kind: ViewerKind) -> Arc<Self> {
        Arc::new(Self {
            uuid: Uuid::new_v4(),
            kind,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Viewer for TestViewer {
    fn uuid(&self) -> Uuid {
        self.uuid
    }

    fn kind(&self) -> ViewerKind {
        self.kind
    }

    async fn open_screen(
        &self,
        menu: MenuId,
        _window_type: WindowType,
        _title: &str,
        _inventory: &SharedInventory,
    ) {
        self.calls.lock().unwrap().push(Call::Open(menu));
    }

    async fn close_screen(&self) {
        self.calls.lock().unwrap().push(Call::Close);
    }

    async fn sync_inventory(&self) {
        self.calls.lock().unwrap().push(Call::Sync);
    }
}

pub fn registry() -> (MenuRegistry, Arc<TickQueue>) {
    let queue = Arc::new(TickQueue::new());
    let registry = MenuRegistry::new(HostServices::with_tick_queue(queue.clone()));
    (registry, queue)
}
