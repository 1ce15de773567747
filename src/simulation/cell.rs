/// State of a single grid position.
///
/// Only two values are representable; external integer matrices are
/// decoded through [`Cell::from_raw`].
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Dead = 0,
    Alive = 1,
}

impl Cell {
    /// Glyph used by the terminal renderer for a live cell
    pub const ALIVE_GLYPH: char = '#';
    /// Glyph used by the terminal renderer for a dead cell
    pub const DEAD_GLYPH: char = '.';

    #[inline]
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    /// The opposite state
    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            Cell::Dead => Cell::Alive,
            Cell::Alive => Cell::Dead,
        }
    }

    /// Decode an integer cell: 0 is dead, anything else is alive
    pub fn from_raw(value: i64) -> Self {
        if value == 0 {
            Cell::Dead
        } else {
            Cell::Alive
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Cell::Dead => Self::DEAD_GLYPH,
            Cell::Alive => Self::ALIVE_GLYPH,
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }
}
