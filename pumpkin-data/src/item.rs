/// A static item type. Menus only need a handful of them as icons.
#[derive(Debug, Clone, Copy)]
pub struct Item {
    pub id: u16,
    pub registry_key: &'static str,
}

impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Item {}

impl Item {
    pub const AIR: Item = Item {
        id: 0,
        registry_key: "minecraft:air",
    };
    pub const STONE: Item = Item {
        id: 1,
        registry_key: "minecraft:stone",
    };
    pub const BARRIER: Item = Item {
        id: 471,
        registry_key: "minecraft:barrier",
    };
    pub const ARROW: Item = Item {
        id: 802,
        registry_key: "minecraft:arrow",
    };
    pub const DIAMOND: Item = Item {
        id: 804,
        registry_key: "minecraft:diamond",
    };
    pub const PAPER: Item = Item {
        id: 947,
        registry_key: "minecraft:paper",
    };
    pub const BOOK: Item = Item {
        id: 948,
        registry_key: "minecraft:book",
    };
    pub const CLOCK: Item = Item {
        id: 977,
        registry_key: "minecraft:clock",
    };

    pub fn from_registry_key(key: &str) -> Option<Self> {
        let key = key.strip_prefix("minecraft:").unwrap_or(key);
        ITEMS_BY_KEY.get(key).copied()
    }
}

static ITEMS_BY_KEY: phf::Map<&'static str, Item> = phf::phf_map! {
    "air" => Item::AIR,
    "stone" => Item::STONE,
    "barrier" => Item::BARRIER,
    "arrow" => Item::ARROW,
    "diamond" => Item::DIAMOND,
    "paper" => Item::PAPER,
    "book" => Item::BOOK,
    "clock" => Item::CLOCK,
};

#[cfg(test)]
mod test {
    use super::Item;

    #[test]
    fn lookup_with_and_without_namespace() {
        assert_eq!(Item::from_registry_key("minecraft:paper"), Some(Item::PAPER));
        assert_eq!(Item::from_registry_key("paper"), Some(Item::PAPER));
        assert_eq!(Item::from_registry_key("minecraft:unobtainium"), None);
    }
}
