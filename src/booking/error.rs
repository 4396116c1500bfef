//! Error types for the booking core.

use crate::model::{ReservationId, TableNumber};
use chrono::NaiveDateTime;
use thiserror::Error;

/// Failures of table and reservation operations.
///
/// Every variant is recoverable: the caller can retry with different input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BookingError {
    /// No table registered under this number.
    #[error("Table not found: {0}")]
    TableNotFound(TableNumber),

    /// A table with this number is already registered.
    #[error("Table already exists: {0}")]
    DuplicateTable(TableNumber),

    /// No active reservation has this id.
    #[error("Reservation not found: {0}")]
    ReservationNotFound(ReservationId),

    /// Every table large enough is booked for part of the requested window.
    #[error("No table with at least {party_size} seats is free from {start} to {end}")]
    NoAvailableTable {
        party_size: u32,
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
}
