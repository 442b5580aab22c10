use pumpkin_data::item::Item;

/// A stack of items together with the display components menus care about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemStack {
    pub item: Item,
    pub item_count: u8,
    pub custom_name: Option<String>,
    pub lore: Vec<String>,
}

impl ItemStack {
    pub const EMPTY: ItemStack = ItemStack {
        item: Item::AIR,
        item_count: 0,
        custom_name: None,
        lore: Vec::new(),
    };

    pub fn new(item_count: u8, item: Item) -> Self {
        Self {
            item,
            item_count,
            custom_name: None,
            lore: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.item_count == 0 || self.item == Item::AIR
    }

    pub fn with_custom_name(mut self, name: impl Into<String>) -> Self {
        self.custom_name = Some(name.into());
        self
    }

    pub fn with_lore(mut self, lore: Vec<String>) -> Self {
        self.lore = lore;
        self
    }
}

impl Default for ItemStack {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl From<Item> for ItemStack {
    fn from(item: Item) -> Self {
        Self::new(1, item)
    }
}

#[cfg(test)]
mod test {
    use pumpkin_data::item::Item;

    use super::ItemStack;

    #[test]
    fn empty_stacks() {
        assert!(ItemStack::EMPTY.is_empty());
        assert!(ItemStack::new(0, Item::PAPER).is_empty());
        assert!(ItemStack::new(5, Item::AIR).is_empty());
        assert!(!ItemStack::from(Item::PAPER).is_empty());
    }
}
