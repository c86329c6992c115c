//! Register slot addressing.
//!
//! A register file is a flat array of 64-bit cells. Nodes refer to cells by
//! absolute byte offset, always a multiple of `SLOT_SIZE`.

/// Width of one register cell in bytes.
pub const SLOT_SIZE: u32 = 8;

/// Absolute byte offset of a register slot.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct SlotOffset(u32);

impl SlotOffset {
    pub const ZERO: Self = Self(0);

    /// Offset of the `index`-th slot.
    #[inline]
    pub fn from_index(index: u32) -> Self {
        Self(index * SLOT_SIZE)
    }

    /// Byte offset into the register file.
    #[inline]
    pub fn bytes(self) -> u32 {
        self.0
    }

    /// Slot count corresponding to this offset.
    #[inline]
    pub fn index(self) -> u32 {
        self.0 / SLOT_SIZE
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// The offset one slot below, or `None` at slot zero.
    #[inline]
    pub fn prev(self) -> Option<Self> {
        self.0.checked_sub(SLOT_SIZE).map(Self)
    }

    /// The offset one slot above.
    #[inline]
    pub fn next(self) -> Self {
        Self(self.0 + SLOT_SIZE)
    }
}

impl std::fmt::Display for SlotOffset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// Length bookkeeping of a container node.
///
/// Fixed arrays know their length at compile time and store it as a count;
/// slices and maps keep the runtime length in a register.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Length {
    /// Compile-time element count. Not a register.
    Count(u32),
    /// Register holding the runtime length.
    Slot(SlotOffset),
}

impl Length {
    /// Number shown in disassembly: the count itself, or the slot index.
    pub fn display_value(self) -> u32 {
        match self {
            Length::Count(n) => n,
            Length::Slot(offset) => offset.index(),
        }
    }

    pub fn slot(self) -> Option<SlotOffset> {
        match self {
            Length::Count(_) => None,
            Length::Slot(offset) => Some(offset),
        }
    }
}
