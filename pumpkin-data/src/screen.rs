/// Generic container screens. Every row is [`WindowType::COLUMNS`] slots wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowType {
    Generic9x1,
    Generic9x2,
    Generic9x3,
    Generic9x4,
    Generic9x5,
    Generic9x6,
}

impl WindowType {
    pub const COLUMNS: usize = 9;
    pub const MAX_ROWS: u8 = 6;

    pub const fn from_rows(rows: u8) -> Option<Self> {
        match rows {
            1 => Some(Self::Generic9x1),
            2 => Some(Self::Generic9x2),
            3 => Some(Self::Generic9x3),
            4 => Some(Self::Generic9x4),
            5 => Some(Self::Generic9x5),
            6 => Some(Self::Generic9x6),
            _ => None,
        }
    }

    pub const fn rows(&self) -> u8 {
        match self {
            Self::Generic9x1 => 1,
            Self::Generic9x2 => 2,
            Self::Generic9x3 => 3,
            Self::Generic9x4 => 4,
            Self::Generic9x5 => 5,
            Self::Generic9x6 => 6,
        }
    }

    /// Number of slots in the container part of the screen.
    pub const fn size(&self) -> usize {
        self.rows() as usize * Self::COLUMNS
    }
}
