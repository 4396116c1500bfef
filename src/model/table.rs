use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Table number as printed on the floor plan; also the lookup key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TableNumber(pub u32);

impl From<u32> for TableNumber {
    fn from(number: u32) -> Self {
        Self(number)
    }
}

impl Display for TableNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "table {}", self.0)
    }
}

/// A table with a fixed number of seats.
///
/// Immutable once registered. Reservations refer to it by [`TableNumber`] only, so
/// removing a table leaves existing reservations for that number untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub number: TableNumber,
    pub seats: u32,
}

impl Table {
    pub fn new(number: impl Into<TableNumber>, seats: u32) -> Self {
        Self {
            number: number.into(),
            seats,
        }
    }

    /// Whether a party of `party_size` fits at this table.
    pub fn fits(&self, party_size: u32) -> bool {
        self.seats >= party_size
    }
}
