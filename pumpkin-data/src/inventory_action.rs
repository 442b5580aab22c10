/// What a click inside a container would do to the clicked slot and the cursor,
/// as resolved by the server from the raw click packet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InventoryAction {
    Nothing,
    PickupAll,
    PickupSome,
    PickupHalf,
    PickupOne,
    PlaceAll,
    PlaceSome,
    PlaceOne,
    SwapWithCursor,
    DropAllCursor,
    DropOneCursor,
    DropAllSlot,
    DropOneSlot,
    MoveToOtherInventory,
    HotbarMoveAndReadd,
    HotbarSwap,
    CloneStack,
    CollectToCursor,
    Unknown,
}

impl InventoryAction {
    /// Actions that drop items out of the screen.
    pub const fn is_drop(&self) -> bool {
        matches!(
            self,
            Self::DropAllCursor | Self::DropOneCursor | Self::DropAllSlot | Self::DropOneSlot
        )
    }

    /// Actions that put the cursor stack down into a slot.
    pub const fn is_place(&self) -> bool {
        matches!(self, Self::PlaceAll | Self::PlaceSome | Self::PlaceOne)
    }
}

/// The region of the screen a click landed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotType {
    Result,
    Crafting,
    Armor,
    Container,
    Quickbar,
    /// Outside of the screen border.
    Outside,
    Fuel,
}
