use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Weak};

use async_trait::async_trait;
use pumpkin_data::screen::WindowType;
use pumpkin_inventory::{ItemStack, SharedInventory};
use tokio::sync::{Mutex, OnceCell};
use uuid::Uuid;

use crate::click::ClickType;
use crate::error::MenuError;
use crate::host::{HostServices, Viewer, ViewerKind};
use crate::item::{ItemId, MenuItem};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MenuId(Uuid);

impl MenuId {
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for MenuId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Called when a player closes a menu.
#[async_trait]
pub trait MenuCloseBehaviour: Send + Sync {
    async fn on_close(
        &self,
        player: &Arc<dyn Viewer>,
        menu: &Arc<Menu>,
        bypass_close_behaviour: bool,
    );
}

/// Runs a closure on close.
pub struct CloseFn<F>(pub F);

#[async_trait]
impl<F> MenuCloseBehaviour for CloseFn<F>
where
    F: Fn(&Arc<dyn Viewer>, &Arc<Menu>, bool) + Send + Sync,
{
    async fn on_close(
        &self,
        player: &Arc<dyn Viewer>,
        menu: &Arc<Menu>,
        bypass_close_behaviour: bool,
    ) {
        (self.0)(player, menu, bypass_close_behaviour);
    }
}

struct MenuState {
    items: HashMap<usize, MenuItem>,
    viewers: HashMap<Uuid, Arc<dyn Viewer>>,
    exit_on_click_outside: bool,
    close_behaviour: Option<Arc<dyn MenuCloseBehaviour>>,
    bypass_close_behaviour: bool,
    destroyed: bool,
}

/// A chest-like screen of clickable [`MenuItem`]s.
///
/// Menus are shared: every change shows up for all viewers. Clone a menu through
/// the registry to get a copy that can be changed per player.
pub struct Menu {
    id: MenuId,
    title: String,
    window_type: WindowType,
    parent: Option<Weak<Menu>>,
    host: HostServices,
    inventory: OnceCell<SharedInventory>,
    state: Mutex<MenuState>,
}

impl Menu {
    pub(crate) fn new(
        title: String,
        window_type: WindowType,
        parent: Option<&Arc<Menu>>,
        host: HostServices,
        exit_on_click_outside: bool,
    ) -> Arc<Self> {
        Arc::new(Self {
            id: MenuId::new(),
            title,
            window_type,
            parent: parent.map(Arc::downgrade),
            host,
            inventory: OnceCell::new(),
            state: Mutex::new(MenuState {
                items: HashMap::new(),
                viewers: HashMap::new(),
                exit_on_click_outside,
                close_behaviour: None,
                bypass_close_behaviour: false,
                destroyed: false,
            }),
        })
    }

    pub fn id(&self) -> MenuId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn window_type(&self) -> WindowType {
        self.window_type
    }

    pub fn rows(&self) -> u8 {
        self.window_type.rows()
    }

    pub fn size(&self) -> usize {
        self.window_type.size()
    }

    /// The menu to go back to. `None` if there is none or it is gone.
    pub fn parent(&self) -> Option<Arc<Menu>> {
        self.parent.as_ref().and_then(Weak::upgrade)
    }

    /// The backing inventory, created on first use.
    pub async fn inventory(&self) -> SharedInventory {
        self.inventory
            .get_or_init(|| async {
                self.host
                    .inventories
                    .create_inventory(self.id, self.window_type, &self.title)
            })
            .await
            .clone()
    }

    fn check_slot(&self, slot: usize) -> Result<(), MenuError> {
        if slot < self.size() {
            Ok(())
        } else {
            Err(MenuError::InvalidSlot {
                slot,
                size: self.size(),
            })
        }
    }

    fn index(x: usize, y: usize) -> usize {
        y * WindowType::COLUMNS + x
    }

    /// Places `item` at `slot`. Returns `false` if the slot is already taken.
    pub async fn add_item(&self, mut item: MenuItem, slot: usize) -> Result<bool, MenuError> {
        self.check_slot(slot)?;
        if let Some(owner) = item.menu() {
            return Err(MenuError::AlreadyAttached(owner));
        }
        let inventory = self.inventory().await;

        let mut state = self.state.lock().await;
        if state.destroyed {
            return Err(MenuError::Destroyed(self.id));
        }
        let mut inventory = inventory.lock().await;
        if state.items.contains_key(&slot) || !inventory.get_stack(slot).is_empty() {
            return Ok(false);
        }

        inventory.set_stack(slot, item.render())?;
        item.attach(self.id, slot);
        state.items.insert(slot, item);
        Ok(true)
    }

    /// `x` is the column from the left, `y` the row from the top.
    pub async fn add_item_at(&self, item: MenuItem, x: usize, y: usize) -> Result<bool, MenuError> {
        self.add_item(item, Self::index(x, y)).await
    }

    /// Removes the item at `slot` and hands it back detached.
    pub async fn take_item(&self, slot: usize) -> Result<Option<MenuItem>, MenuError> {
        self.check_slot(slot)?;
        let inventory = self.inventory().await;

        let mut state = self.state.lock().await;
        if state.destroyed {
            return Err(MenuError::Destroyed(self.id));
        }
        let Some(mut item) = state.items.remove(&slot) else {
            return Ok(None);
        };
        inventory.lock().await.remove_stack(slot)?;
        item.detach(self.id);
        Ok(Some(item))
    }

    /// Returns `false` if there was nothing to remove.
    pub async fn remove_item(&self, slot: usize) -> Result<bool, MenuError> {
        Ok(self.take_item(slot).await?.is_some())
    }

    pub async fn remove_item_at(&self, x: usize, y: usize) -> Result<bool, MenuError> {
        self.remove_item(Self::index(x, y)).await
    }

    /// A copy of the item at `slot`.
    pub async fn item(&self, slot: usize) -> Option<MenuItem> {
        self.state.lock().await.items.get(&slot).cloned()
    }

    pub async fn item_at(&self, x: usize, y: usize) -> Option<MenuItem> {
        self.item(Self::index(x, y)).await
    }

    /// Copies of all items, ordered by slot.
    pub async fn items(&self) -> Vec<MenuItem> {
        let state = self.state.lock().await;
        let mut items: Vec<_> = state.items.values().cloned().collect();
        items.sort_by_key(|item| item.slot());
        items
    }

    /// Changes the icon of the item at `slot` and redraws it right away.
    /// Returns `false` if the slot is empty.
    pub async fn set_item_icon(&self, slot: usize, icon: ItemStack) -> Result<bool, MenuError> {
        self.redraw_icon(slot, None, icon).await
    }

    /// Like [`Menu::set_item_icon`], but only if `slot` still holds the item `id`.
    pub(crate) async fn set_icon_of(
        &self,
        id: ItemId,
        slot: usize,
        icon: ItemStack,
    ) -> Result<bool, MenuError> {
        self.redraw_icon(slot, Some(id), icon).await
    }

    async fn redraw_icon(
        &self,
        slot: usize,
        expected: Option<ItemId>,
        icon: ItemStack,
    ) -> Result<bool, MenuError> {
        self.check_slot(slot)?;
        let inventory = self.inventory().await;

        let mut state = self.state.lock().await;
        if state.destroyed {
            return Err(MenuError::Destroyed(self.id));
        }
        let Some(item) = state.items.get_mut(&slot) else {
            return Ok(false);
        };
        if expected.is_some_and(|id| id != item.id()) {
            return Ok(false);
        }
        item.replace_icon(icon);
        inventory.lock().await.set_stack(slot, item.render())?;
        Ok(true)
    }

    /// Edits the item at `slot` in place. Text and description changes are only
    /// drawn once the item is redrawn, e.g. by [`Menu::set_item_icon`].
    pub async fn edit_item<R>(
        &self,
        slot: usize,
        edit: impl FnOnce(&mut MenuItem) -> R,
    ) -> Option<R> {
        let mut state = self.state.lock().await;
        state.items.get_mut(&slot).map(edit)
    }

    /// Runs the click behaviour of the item at `slot`, if there still is one.
    pub async fn select_item(
        self: &Arc<Self>,
        player: &Arc<dyn Viewer>,
        slot: usize,
        click_type: ClickType,
    ) {
        let behaviour = {
            let state = self.state.lock().await;
            match state.items.get(&slot) {
                Some(item) => item.behaviour(),
                None => return,
            }
        };
        behaviour.on_click(player, click_type, self, slot).await;
    }

    /// Opens the menu for `player` unless they are already looking at it.
    ///
    /// Don't use this to go from one menu to another in the same tick, the client
    /// ends up with a broken screen. Use [`Menu::switch_to`] instead.
    pub async fn open(&self, player: &Arc<dyn Viewer>) -> Result<(), MenuError> {
        let inventory = self.inventory().await;
        {
            let mut state = self.state.lock().await;
            if state.destroyed {
                return Err(MenuError::Destroyed(self.id));
            }
            if state.viewers.contains_key(&player.uuid()) {
                return Ok(());
            }
            state.viewers.insert(player.uuid(), player.clone());
        }

        log::debug!("Opening menu {} for {}", self.id, player.uuid());
        player
            .open_screen(self.id, self.window_type, &self.title, &inventory)
            .await;
        Ok(())
    }

    pub async fn close(&self, player: &Arc<dyn Viewer>) {
        if self.detach_viewer(player.uuid()).await {
            player.close_screen().await;
        }
    }

    /// Stops tracking a viewer without touching their screen.
    pub(crate) async fn detach_viewer(&self, uuid: Uuid) -> bool {
        self.state.lock().await.viewers.remove(&uuid).is_some()
    }

    /// Closes this menu now and opens `other` on the next tick.
    pub async fn switch_to(&self, player: &Arc<dyn Viewer>, other: &Arc<Menu>) {
        self.close(player).await;

        log::debug!(
            "Switching {} from menu {} to {} next tick",
            player.uuid(),
            self.id,
            other.id
        );
        let player = player.clone();
        let other = other.clone();
        self.host.scheduler.run_next_tick(Box::pin(async move {
            if let Err(err) = other.open(&player).await {
                log::warn!("Could not switch {} to menu: {err}", player.uuid());
            }
        }));
    }

    /// Resends the menu to everyone looking at it.
    pub async fn update_for_viewers(&self) {
        for viewer in self.viewers().await {
            viewer.sync_inventory().await;
        }
    }

    pub async fn viewers(&self) -> Vec<Arc<dyn Viewer>> {
        self.state.lock().await.viewers.values().cloned().collect()
    }

    pub async fn viewer_count(&self) -> usize {
        self.state.lock().await.viewers.len()
    }

    pub async fn is_viewing(&self, uuid: Uuid) -> bool {
        self.state.lock().await.viewers.contains_key(&uuid)
    }

    pub async fn exit_on_click_outside(&self) -> bool {
        self.state.lock().await.exit_on_click_outside
    }

    pub async fn set_exit_on_click_outside(&self, exit: bool) {
        self.state.lock().await.exit_on_click_outside = exit;
    }

    pub async fn close_behaviour(&self) -> Option<Arc<dyn MenuCloseBehaviour>> {
        self.state.lock().await.close_behaviour.clone()
    }

    pub async fn set_close_behaviour(&self, behaviour: Option<Arc<dyn MenuCloseBehaviour>>) {
        self.state.lock().await.close_behaviour = behaviour;
    }

    pub async fn bypass_close_behaviour(&self) -> bool {
        self.state.lock().await.bypass_close_behaviour
    }

    pub async fn set_bypass_close_behaviour(&self, bypass: bool) {
        self.state.lock().await.bypass_close_behaviour = bypass;
    }

    pub async fn is_destroyed(&self) -> bool {
        self.state.lock().await.destroyed
    }

    /// Closes the menu for everyone and drops its items. The menu can't be used afterwards.
    ///
    /// Players get the close behaviour run here, since the menu is already gone from the
    /// registry by the time their close event arrives.
    pub(crate) async fn destroy(self: &Arc<Self>) {
        let (close_behaviour, bypass) = {
            let state = self.state.lock().await;
            (state.close_behaviour.clone(), state.bypass_close_behaviour)
        };

        for viewer in self.viewers().await {
            match viewer.kind() {
                ViewerKind::Player => {
                    self.close(&viewer).await;
                    if let Some(behaviour) = &close_behaviour {
                        behaviour.on_close(&viewer, self, bypass).await;
                    }
                }
                ViewerKind::Other => viewer.close_screen().await,
            }
        }

        let mut state = self.state.lock().await;
        state.destroyed = true;
        state.viewers.clear();
        state.close_behaviour = None;
        for (_, mut item) in state.items.drain() {
            item.detach(self.id);
        }
        drop(state);

        if let Some(inventory) = self.inventory.get() {
            inventory.lock().await.clear();
        }
    }

    /// Copies title, size, flags and close behaviour, plus a fresh copy of every item.
    pub(crate) async fn duplicate(&self, host: HostServices) -> Result<Arc<Menu>, MenuError> {
        let (exit_on_click_outside, close_behaviour, items) = {
            let state = self.state.lock().await;
            if state.destroyed {
                return Err(MenuError::Destroyed(self.id));
            }
            let items: Vec<_> = state
                .items
                .iter()
                .map(|(slot, item)| (*slot, item.duplicate()))
                .collect();
            (
                state.exit_on_click_outside,
                state.close_behaviour.clone(),
                items,
            )
        };

        let parent = self.parent();
        let copy = Menu::new(
            self.title.clone(),
            self.window_type,
            parent.as_ref(),
            host,
            exit_on_click_outside,
        );
        copy.set_close_behaviour(close_behaviour).await;
        for (slot, item) in items {
            copy.add_item(item, slot).await?;
        }
        Ok(copy)
    }
}

impl fmt::Debug for Menu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Menu")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("window_type", &self.window_type)
            .finish_non_exhaustive()
    }
}
