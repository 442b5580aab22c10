//! Clickable chest menus for players.
//!
//! A [`MenuRegistry`] creates [`Menu`]s and turns the server's inventory events into
//! calls on the [`MenuItem`]s placed in them.

pub mod click;
pub mod config;
mod error;
pub mod event;
pub mod host;
pub mod item;
pub mod menu;
pub mod registry;

#[cfg(test)]
pub(crate) mod test_util;

pub use click::ClickType;
pub use config::MenuConfig;
pub use error::MenuError;
pub use host::{HostServices, TickQueue, Viewer, ViewerKind};
pub use item::{BackButton, ClickFn, MenuItem, MenuItemBehaviour, Unclickable};
pub use menu::{CloseFn, Menu, MenuCloseBehaviour, MenuId};
pub use registry::{ClickRoute, MenuRegistry, route_click};
