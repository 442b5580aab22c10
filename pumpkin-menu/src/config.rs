use pumpkin_data::item::Item;
use serde::{Deserialize, Serialize};

use crate::error::MenuError;

/// Defaults applied by a [`crate::MenuRegistry`] to everything it creates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// Whether new menus close when a player clicks outside of them.
    pub exit_on_click_outside: bool,
    /// Registry key of the icon used by text only menu items.
    pub default_icon: String,
    /// Resync the clicking player's inventory after every menu click.
    pub sync_on_click: bool,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            exit_on_click_outside: false,
            default_icon: Item::PAPER.registry_key.to_string(),
            sync_on_click: true,
        }
    }
}

impl MenuConfig {
    pub fn from_json(json: &str) -> Result<Self, MenuError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Unknown keys fall back to paper.
    pub fn default_icon_item(&self) -> Item {
        Item::from_registry_key(&self.default_icon).unwrap_or_else(|| {
            log::warn!(
                "Unknown default menu icon {}, using paper",
                self.default_icon
            );
            Item::PAPER
        })
    }
}
