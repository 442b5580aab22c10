use std::collections::HashMap;
use std::sync::Arc;

use pumpkin_data::screen::WindowType;
use pumpkin_data::{InventoryAction, SlotType};
use pumpkin_inventory::ItemStack;
use tokio::sync::RwLock;

use crate::click::ClickType;
use crate::config::MenuConfig;
use crate::error::MenuError;
use crate::event::{Cancellable, InventoryClickEvent, InventoryCloseEvent, PlayerQuitEvent};
use crate::host::{HostServices, ViewerKind};
use crate::item::{MenuItem, MenuItemBehaviour};
use crate::menu::{Menu, MenuId};

/// What a click on a menu screen should do once the event has been cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickRoute {
    /// Drops and placements are swallowed.
    Ignore,
    /// Clicked outside of the menu and the menu closes on that.
    Close,
    Stay,
    Select { slot: usize, click_type: ClickType },
}

/// Decides what a click on a menu screen of `inventory_size` slots does.
pub fn route_click(
    action: InventoryAction,
    slot_type: SlotType,
    raw_slot: i32,
    inventory_size: usize,
    exit_on_click_outside: bool,
) -> ClickRoute {
    let close_or_stay = if exit_on_click_outside {
        ClickRoute::Close
    } else {
        ClickRoute::Stay
    };

    if action.is_drop()
        || action.is_place()
        || matches!(
            action,
            InventoryAction::CollectToCursor | InventoryAction::Unknown
        )
    {
        return ClickRoute::Ignore;
    }

    if slot_type == SlotType::Outside {
        return close_or_stay;
    }

    let Ok(slot) = usize::try_from(raw_slot) else {
        return ClickRoute::Stay;
    };
    if slot < inventory_size {
        if action == InventoryAction::Nothing {
            ClickRoute::Stay
        } else {
            ClickRoute::Select {
                slot,
                click_type: ClickType::from(action),
            }
        }
    } else {
        // A click in the player's own inventory below the menu
        close_or_stay
    }
}

/// Creates menus and feeds them the server's inventory events.
pub struct MenuRegistry {
    config: MenuConfig,
    host: HostServices,
    menus: RwLock<HashMap<MenuId, Arc<Menu>>>,
}

impl MenuRegistry {
    pub fn new(host: HostServices) -> Self {
        Self::with_config(host, MenuConfig::default())
    }

    pub fn with_config(host: HostServices, config: MenuConfig) -> Self {
        Self {
            config,
            host,
            menus: RwLock::new(HashMap::new()),
        }
    }

    pub fn config(&self) -> &MenuConfig {
        &self.config
    }

    pub async fn create_menu(&self, title: &str, rows: u8) -> Result<Arc<Menu>, MenuError> {
        self.register(title, rows, None).await
    }

    /// A menu whose back navigation leads to `parent`.
    pub async fn create_sub_menu(
        &self,
        title: &str,
        rows: u8,
        parent: &Arc<Menu>,
    ) -> Result<Arc<Menu>, MenuError> {
        self.register(title, rows, Some(parent)).await
    }

    async fn register(
        &self,
        title: &str,
        rows: u8,
        parent: Option<&Arc<Menu>>,
    ) -> Result<Arc<Menu>, MenuError> {
        let window_type = WindowType::from_rows(rows).ok_or(MenuError::InvalidRows(rows))?;
        let menu = Menu::new(
            title.to_string(),
            window_type,
            parent,
            self.host.clone(),
            self.config.exit_on_click_outside,
        );
        log::debug!("Created menu {} \"{title}\" with {rows} rows", menu.id());
        self.menus.write().await.insert(menu.id(), menu.clone());
        Ok(menu)
    }

    /// An independent copy of `menu`, meant to be changed for a single player.
    /// Destroy it once it is no longer needed.
    pub async fn clone_menu(&self, menu: &Arc<Menu>) -> Result<Arc<Menu>, MenuError> {
        let copy = menu.duplicate(self.host.clone()).await?;
        log::debug!("Cloned menu {} into {}", menu.id(), copy.id());
        self.menus.write().await.insert(copy.id(), copy.clone());
        Ok(copy)
    }

    /// Closes `menu` for all viewers and forgets it. Don't keep references to it around.
    ///
    /// The menu is unregistered first, so the close events the host fires for it are
    /// ignored and the close behaviour runs exactly once per player, from here.
    pub async fn destroy_menu(&self, menu: &Arc<Menu>) {
        self.menus.write().await.remove(&menu.id());
        menu.destroy().await;
        log::debug!("Destroyed menu {}", menu.id());
    }

    pub async fn menu(&self, id: MenuId) -> Option<Arc<Menu>> {
        self.menus.read().await.get(&id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.menus.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.menus.read().await.is_empty()
    }

    /// A text item using the configured default icon.
    pub fn text_item(
        &self,
        text: impl Into<String>,
        behaviour: impl MenuItemBehaviour + 'static,
    ) -> MenuItem {
        MenuItem::new(ItemStack::from(self.config.default_icon_item()), behaviour).with_text(text)
    }

    /// Changes the icon of a placed item and redraws it.
    pub async fn set_item_icon(
        &self,
        item: &mut MenuItem,
        icon: ItemStack,
    ) -> Result<(), MenuError> {
        let (Some(menu_id), Some(slot)) = (item.menu(), item.slot()) else {
            log::warn!("Tried to change the icon of detached menu item {}", item.id());
            return Err(MenuError::NotAttached);
        };
        let menu = self
            .menu(menu_id)
            .await
            .ok_or(MenuError::Destroyed(menu_id))?;
        if !menu.set_icon_of(item.id(), slot, icon.clone()).await? {
            log::warn!("Menu item {} is no longer in slot {slot}", item.id());
            return Err(MenuError::NotAttached);
        }
        item.replace_icon(icon);
        Ok(())
    }

    pub async fn on_inventory_click(&self, event: &mut InventoryClickEvent) {
        let Some(menu_id) = event.holder else {
            return;
        };

        event.set_cancelled(true);
        if self.config.sync_on_click {
            event.player.sync_inventory().await;
        }

        let Some(menu) = self.menu(menu_id).await else {
            log::debug!("Click in destroyed menu {menu_id}");
            return;
        };
        if event.player.kind() != ViewerKind::Player {
            return;
        }

        let route = route_click(
            event.action,
            event.slot_type,
            event.raw_slot,
            menu.size(),
            menu.exit_on_click_outside().await,
        );
        log::debug!(
            "{:?} by {} in menu {menu_id}: {route:?}",
            event.action,
            event.player.uuid()
        );
        match route {
            ClickRoute::Ignore | ClickRoute::Stay => {}
            ClickRoute::Close => menu.close(&event.player).await,
            ClickRoute::Select { slot, click_type } => {
                menu.select_item(&event.player, slot, click_type).await;
            }
        }
    }

    pub async fn on_inventory_close(&self, event: &InventoryCloseEvent) {
        if event.cancelled() || event.player.kind() != ViewerKind::Player {
            return;
        }
        let Some(menu_id) = event.holder else {
            return;
        };
        let Some(menu) = self.menu(menu_id).await else {
            return;
        };

        menu.detach_viewer(event.player.uuid()).await;
        if let Some(behaviour) = menu.close_behaviour().await {
            let bypass = menu.bypass_close_behaviour().await;
            behaviour.on_close(&event.player, &menu, bypass).await;
        }
    }

    /// Closes the quitting player's menu without running its close behaviour.
    pub async fn on_player_quit(&self, event: &PlayerQuitEvent) {
        let Some(menu_id) = event.open_inventory else {
            return;
        };
        let Some(menu) = self.menu(menu_id).await else {
            return;
        };

        menu.set_bypass_close_behaviour(true).await;
        menu.set_close_behaviour(None).await;
        // Close the screen even if we lost track of the viewer
        menu.detach_viewer(event.player.uuid()).await;
        event.player.close_screen().await;
    }
}

#[cfg(test)]
mod test {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use pumpkin_data::item::Item;
    use pumpkin_data::{InventoryAction, SlotType};
    use pumpkin_inventory::ItemStack;

    use super::{ClickRoute, MenuRegistry, route_click};
    use crate::click::ClickType;
    use crate::config::MenuConfig;
    use crate::error::MenuError;
    use crate::event::InventoryCloseEvent;
    use crate::host::{HostServices, TickQueue, Viewer, ViewerKind};
    use crate::item::{MenuItem, Unclickable};
    use crate::menu::{CloseFn, Menu};
    use crate::test_util::{Call, TestViewer, registry};

    #[test]
    fn ignored_actions() {
        for action in [
            InventoryAction::DropAllCursor,
            InventoryAction::DropAllSlot,
            InventoryAction::DropOneCursor,
            InventoryAction::DropOneSlot,
            InventoryAction::PlaceAll,
            InventoryAction::PlaceOne,
            InventoryAction::PlaceSome,
            InventoryAction::CollectToCursor,
            InventoryAction::Unknown,
        ] {
            assert_eq!(
                route_click(action, SlotType::Container, 0, 27, true),
                ClickRoute::Ignore,
                "{action:?}"
            );
            assert_eq!(
                route_click(action, SlotType::Outside, -999, 27, true),
                ClickRoute::Ignore,
                "{action:?}"
            );
        }
    }

    #[test]
    fn outside_clicks() {
        assert_eq!(
            route_click(InventoryAction::Nothing, SlotType::Outside, -999, 27, true),
            ClickRoute::Close
        );
        assert_eq!(
            route_click(InventoryAction::Nothing, SlotType::Outside, -999, 27, false),
            ClickRoute::Stay
        );
    }

    #[test]
    fn clicks_in_the_player_inventory() {
        assert_eq!(
            route_click(InventoryAction::PickupAll, SlotType::Container, 27, 27, true),
            ClickRoute::Close
        );
        assert_eq!(
            route_click(InventoryAction::PickupAll, SlotType::Quickbar, 60, 27, false),
            ClickRoute::Stay
        );
    }

    #[test]
    fn clicks_on_menu_slots() {
        assert_eq!(
            route_click(InventoryAction::PickupAll, SlotType::Container, 0, 27, false),
            ClickRoute::Select {
                slot: 0,
                click_type: ClickType::Left
            }
        );
        assert_eq!(
            route_click(InventoryAction::PickupHalf, SlotType::Container, 26, 27, false),
            ClickRoute::Select {
                slot: 26,
                click_type: ClickType::Right
            }
        );
        assert_eq!(
            route_click(InventoryAction::HotbarSwap, SlotType::Container, 4, 27, false),
            ClickRoute::Select {
                slot: 4,
                click_type: ClickType::Other
            }
        );
        assert_eq!(
            route_click(InventoryAction::Nothing, SlotType::Container, 4, 27, true),
            ClickRoute::Stay
        );
        assert_eq!(
            route_click(InventoryAction::PickupAll, SlotType::Container, -1, 27, true),
            ClickRoute::Stay
        );
    }

    #[tokio::test]
    async fn invalid_rows() {
        let (registry, _) = registry();
        assert!(matches!(
            registry.create_menu("Empty", 0).await,
            Err(MenuError::InvalidRows(0))
        ));
        assert!(matches!(
            registry.create_menu("Huge", 7).await,
            Err(MenuError::InvalidRows(7))
        ));
        assert!(registry.is_empty().await);
    }

    #[tokio::test]
    async fn create_and_lookup() {
        let (registry, _) = registry();
        let menu = registry.create_menu("Shop", 6).await.unwrap();
        assert_eq!(menu.title(), "Shop");
        assert_eq!(menu.rows(), 6);
        assert_eq!(menu.size(), 54);
        assert!(menu.parent().is_none());
        assert!(!menu.exit_on_click_outside().await);
        assert!(Arc::ptr_eq(&registry.menu(menu.id()).await.unwrap(), &menu));
        assert_eq!(registry.len().await, 1);
    }

    #[tokio::test]
    async fn config_defaults_apply() {
        let config = MenuConfig {
            exit_on_click_outside: true,
            default_icon: "minecraft:book".to_string(),
            sync_on_click: false,
        };
        let registry = MenuRegistry::with_config(
            HostServices::with_tick_queue(Arc::new(TickQueue::new())),
            config,
        );
        let menu = registry.create_menu("Configured", 1).await.unwrap();
        assert!(menu.exit_on_click_outside().await);

        let item = registry.text_item("Rules", Unclickable);
        assert_eq!(item.icon().item, Item::BOOK);
        assert_eq!(item.text(), Some("Rules"));
    }

    #[tokio::test]
    async fn sub_menu_keeps_its_parent() {
        let (registry, _) = registry();
        let main = registry.create_menu("Main", 3).await.unwrap();
        let sub = registry.create_sub_menu("Sub", 1, &main).await.unwrap();
        assert!(Arc::ptr_eq(&sub.parent().unwrap(), &main));
    }

    #[tokio::test]
    async fn clone_is_independent() {
        let (registry, _) = registry();
        let original = registry.create_menu("Original", 2).await.unwrap();
        original.set_exit_on_click_outside(true).await;
        original
            .add_item(MenuItem::from_text("A", Unclickable), 0)
            .await
            .unwrap();
        original
            .add_item(MenuItem::from_text("B", Unclickable), 9)
            .await
            .unwrap();

        let copy = registry.clone_menu(&original).await.unwrap();
        assert_ne!(copy.id(), original.id());
        assert_eq!(copy.title(), "Original");
        assert_eq!(copy.rows(), 2);
        assert!(copy.exit_on_click_outside().await);
        assert_eq!(copy.items().await.len(), 2);

        let copied = copy.item(9).await.unwrap();
        assert_ne!(copied.id(), original.item(9).await.unwrap().id());
        assert_eq!(copied.menu(), Some(copy.id()));

        assert!(copy.remove_item(9).await.unwrap());
        assert!(original.item(9).await.is_some());
        assert!(original.item(0).await.is_some());
        assert_eq!(original.items().await.len(), 2);

        copy.edit_item(0, |item| item.add_description("Only in the copy"))
            .await
            .unwrap();
        assert!(original.item(0).await.unwrap().descriptions().is_empty());
        assert_eq!(registry.len().await, 2);
    }

    #[tokio::test]
    async fn destroy_closes_for_everyone() {
        let (registry, _) = registry();
        let menu = registry.create_menu("Doomed", 1).await.unwrap();
        menu.add_item(MenuItem::from_text("A", Unclickable), 0)
            .await
            .unwrap();
        let player = TestViewer::player();
        let other = TestViewer::with_kind(ViewerKind::Other);
        menu.open(&(player.clone() as Arc<dyn Viewer>)).await.unwrap();
        menu.open(&(other.clone() as Arc<dyn Viewer>)).await.unwrap();

        registry.destroy_menu(&menu).await;
        assert_eq!(player.calls().last(), Some(&Call::Close));
        assert_eq!(other.calls().last(), Some(&Call::Close));
        assert_eq!(menu.viewer_count().await, 0);
        assert!(menu.is_destroyed().await);
        assert!(menu.items().await.is_empty());
        assert!(registry.menu(menu.id()).await.is_none());

        let player: Arc<dyn Viewer> = player;
        assert!(matches!(
            menu.open(&player).await,
            Err(MenuError::Destroyed(_))
        ));
        assert!(menu.add_item(MenuItem::from_text("B", Unclickable), 1).await.is_err());
        assert!(registry.clone_menu(&menu).await.is_err());
    }

    #[tokio::test]
    async fn item_icon_through_the_registry() {
        let (registry, _) = registry();
        let menu = registry.create_menu("Icons", 1).await.unwrap();

        let mut detached = MenuItem::unclickable(ItemStack::from(Item::PAPER));
        assert!(matches!(
            registry
                .set_item_icon(&mut detached, ItemStack::from(Item::CLOCK))
                .await,
            Err(MenuError::NotAttached)
        ));

        menu.add_item(detached, 7).await.unwrap();
        let mut placed = menu.item(7).await.unwrap();
        registry
            .set_item_icon(&mut placed, ItemStack::from(Item::CLOCK))
            .await
            .unwrap();
        assert_eq!(placed.icon().item, Item::CLOCK);
        let inventory = menu.inventory().await;
        assert_eq!(inventory.lock().await.get_stack(7).item, Item::CLOCK);
    }

    #[tokio::test]
    async fn stale_item_copy_leaves_the_new_occupant_alone() {
        let (registry, _) = registry();
        let menu = registry.create_menu("Icons", 1).await.unwrap();
        menu.add_item(MenuItem::from_text("A", Unclickable), 0)
            .await
            .unwrap();
        let mut stale = menu.item(0).await.unwrap();

        menu.remove_item(0).await.unwrap();
        menu.add_item(MenuItem::from_text("B", Unclickable), 0)
            .await
            .unwrap();

        assert!(matches!(
            registry
                .set_item_icon(&mut stale, ItemStack::from(Item::CLOCK))
                .await,
            Err(MenuError::NotAttached)
        ));
        let occupant = menu.item(0).await.unwrap();
        assert_eq!(occupant.text(), Some("B"));
        assert_eq!(occupant.icon().item, Item::PAPER);
        let inventory = menu.inventory().await;
        assert_eq!(inventory.lock().await.get_stack(0).item, Item::PAPER);
        assert_eq!(stale.icon().item, Item::PAPER);
    }

    #[tokio::test]
    async fn destroy_runs_the_close_behaviour_once() {
        let (registry, _) = registry();
        let menu = registry.create_menu("Hooked", 1).await.unwrap();
        let closes = Arc::new(AtomicUsize::new(0));
        let counter = closes.clone();
        menu.set_close_behaviour(Some(Arc::new(CloseFn(
            move |_: &Arc<dyn Viewer>, _: &Arc<Menu>, bypass: bool| {
                assert!(!bypass);
                counter.fetch_add(1, Ordering::SeqCst);
            },
        ))))
        .await;
        let player: Arc<dyn Viewer> = TestViewer::player();
        let other: Arc<dyn Viewer> = TestViewer::with_kind(ViewerKind::Other);
        menu.open(&player).await.unwrap();
        menu.open(&other).await.unwrap();

        registry.destroy_menu(&menu).await;
        assert_eq!(closes.load(Ordering::SeqCst), 1);

        // The close event the host fires for the forced close
        registry
            .on_inventory_close(&InventoryCloseEvent::new(player.clone(), Some(menu.id())))
            .await;
        assert_eq!(closes.load(Ordering::SeqCst), 1);
    }
}
