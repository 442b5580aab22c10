use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use pumpkin_data::item::Item;
use pumpkin_inventory::ItemStack;
use uuid::Uuid;

use crate::click::ClickType;
use crate::host::Viewer;
use crate::menu::{Menu, MenuId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemId(Uuid);

impl ItemId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// What happens when a player clicks a menu item.
#[async_trait]
pub trait MenuItemBehaviour: Send + Sync {
    async fn on_click(
        &self,
        player: &Arc<dyn Viewer>,
        click_type: ClickType,
        menu: &Arc<Menu>,
        slot: usize,
    );
}

/// Does nothing when clicked.
#[derive(Debug, Default, Clone, Copy)]
pub struct Unclickable;

#[async_trait]
impl MenuItemBehaviour for Unclickable {
    async fn on_click(
        &self,
        _player: &Arc<dyn Viewer>,
        _click_type: ClickType,
        _menu: &Arc<Menu>,
        _slot: usize,
    ) {
    }
}

/// Runs a closure on click.
pub struct ClickFn<F>(pub F);

#[async_trait]
impl<F> MenuItemBehaviour for ClickFn<F>
where
    F: Fn(&Arc<dyn Viewer>, ClickType) + Send + Sync,
{
    async fn on_click(
        &self,
        player: &Arc<dyn Viewer>,
        click_type: ClickType,
        _menu: &Arc<Menu>,
        _slot: usize,
    ) {
        (self.0)(player, click_type);
    }
}

/// Switches the player back to the parent menu, or closes the menu if there is none.
#[derive(Debug, Default, Clone, Copy)]
pub struct BackButton;

#[async_trait]
impl MenuItemBehaviour for BackButton {
    async fn on_click(
        &self,
        player: &Arc<dyn Viewer>,
        _click_type: ClickType,
        menu: &Arc<Menu>,
        _slot: usize,
    ) {
        match menu.parent() {
            Some(parent) => menu.switch_to(player, &parent).await,
            None => menu.close(player).await,
        }
    }
}

/// One clickable cell of a [`Menu`].
///
/// Items are built detached and handed to [`Menu::add_item`], which assigns their
/// slot for good. Cloning keeps the identity; use [`MenuItem::duplicate`] for an
/// independent copy.
#[derive(Clone)]
pub struct MenuItem {
    id: ItemId,
    icon: ItemStack,
    text: Option<String>,
    descriptions: Vec<String>,
    number: u8,
    slot: Option<usize>,
    menu: Option<MenuId>,
    behaviour: Arc<dyn MenuItemBehaviour>,
}

impl MenuItem {
    pub fn new(icon: ItemStack, behaviour: impl MenuItemBehaviour + 'static) -> Self {
        Self {
            id: ItemId::new(),
            icon,
            text: None,
            descriptions: Vec::new(),
            number: 1,
            slot: None,
            menu: None,
            behaviour: Arc::new(behaviour),
        }
    }

    /// A paper icon showing `text` on mouse over.
    pub fn from_text(text: impl Into<String>, behaviour: impl MenuItemBehaviour + 'static) -> Self {
        Self::new(ItemStack::from(Item::PAPER), behaviour).with_text(text)
    }

    pub fn unclickable(icon: ItemStack) -> Self {
        Self::new(icon, Unclickable)
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// 1 shows no number.
    #[must_use]
    pub fn with_number(mut self, number: u8) -> Self {
        self.number = number.max(1);
        self
    }

    #[must_use]
    pub fn with_descriptions(mut self, lines: Vec<String>) -> Self {
        self.descriptions = lines;
        self
    }

    /// Same data and behaviour under a new identity, not attached to any menu.
    #[must_use]
    pub fn duplicate(&self) -> Self {
        Self {
            id: ItemId::new(),
            slot: None,
            menu: None,
            ..self.clone()
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn icon(&self) -> &ItemStack {
        &self.icon
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn set_text(&mut self, text: Option<String>) {
        self.text = text;
    }

    pub fn number(&self) -> u8 {
        self.number
    }

    pub fn descriptions(&self) -> &[String] {
        &self.descriptions
    }

    /// Lines are not wrapped, split long descriptions yourself.
    pub fn set_descriptions(&mut self, lines: Vec<String>) {
        self.descriptions = lines;
    }

    pub fn add_description(&mut self, line: impl Into<String>) {
        self.descriptions.push(line.into());
    }

    pub fn slot(&self) -> Option<usize> {
        self.slot
    }

    pub fn menu(&self) -> Option<MenuId> {
        self.menu
    }

    pub fn is_attached(&self) -> bool {
        self.menu.is_some()
    }

    pub(crate) fn behaviour(&self) -> Arc<dyn MenuItemBehaviour> {
        self.behaviour.clone()
    }

    pub(crate) fn attach(&mut self, menu: MenuId, slot: usize) {
        debug_assert!(self.slot.is_none(), "menu item {} placed twice", self.id);
        self.menu = Some(menu);
        self.slot = Some(slot);
    }

    pub(crate) fn detach(&mut self, menu: MenuId) {
        if self.menu == Some(menu) {
            self.menu = None;
            self.slot = None;
        }
    }

    pub(crate) fn replace_icon(&mut self, icon: ItemStack) {
        self.icon = icon;
    }

    /// The stack actually shown in the menu.
    pub fn render(&self) -> ItemStack {
        let mut stack = self.icon.clone();
        stack.lore.extend(self.descriptions.iter().cloned());
        if let Some(text) = &self.text {
            stack.custom_name = Some(text.clone());
        }
        if self.number > 1 {
            stack.item_count = self.number;
        }
        stack
    }
}

impl fmt::Debug for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuItem")
            .field("id", &self.id)
            .field("icon", &self.icon)
            .field("text", &self.text)
            .field("descriptions", &self.descriptions)
            .field("number", &self.number)
            .field("slot", &self.slot)
            .field("menu", &self.menu)
            .finish_non_exhaustive()
    }
}
