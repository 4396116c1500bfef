use crate::model::{OrderItem, TableNumber};
use chrono::{NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Identifier issued by a reservation store. Starts at 1 and is never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ReservationId(pub u32);

impl From<u32> for ReservationId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ReservationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "reservation_{}", self.0)
    }
}

/// `start + duration`, saturating at the last representable instant.
pub(crate) fn window_end(start: NaiveDateTime, duration: TimeDelta) -> NaiveDateTime {
    start
        .checked_add_signed(duration)
        .unwrap_or(NaiveDateTime::MAX)
}

/// A booked table for a time window.
///
/// Created only through [`ReservationManager::create`](crate::booking::ReservationManager::create),
/// which picks the table. The window is half-open: `[start, end)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    pub id: ReservationId,
    pub holder_name: String,
    /// Plain value, not a live reference to the table.
    pub table_number: TableNumber,
    pub start: NaiveDateTime,
    pub duration: TimeDelta,
    pub orders: Vec<OrderItem>,
    pub comments: Vec<String>,
}

impl Reservation {
    /// Creates a reservation with no orders and no comments.
    pub fn new(
        id: ReservationId,
        holder_name: impl Into<String>,
        table_number: TableNumber,
        start: NaiveDateTime,
        duration: TimeDelta,
    ) -> Self {
        Self {
            id,
            holder_name: holder_name.into(),
            table_number,
            start,
            duration,
            orders: Vec::new(),
            comments: Vec::new(),
        }
    }

    /// Exclusive end of the window.
    pub fn end(&self) -> NaiveDateTime {
        window_end(self.start, self.duration)
    }

    /// Whether `[start, end)` shares any instant with this reservation.
    pub fn overlaps(&self, start: NaiveDateTime, end: NaiveDateTime) -> bool {
        self.start < end && start < self.end()
    }
}

/// Payload for booking a table.
#[derive(Debug, Clone, PartialEq)]
pub struct ReservationRequest {
    pub holder_name: String,
    pub party_size: u32,
    pub start: NaiveDateTime,
    pub duration: TimeDelta,
}

impl ReservationRequest {
    pub fn new(
        holder_name: impl Into<String>,
        party_size: u32,
        start: NaiveDateTime,
        duration: TimeDelta,
    ) -> Self {
        Self {
            holder_name: holder_name.into(),
            party_size,
            start,
            duration,
        }
    }

    pub fn end(&self) -> NaiveDateTime {
        window_end(self.start, self.duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 14)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn test_end_is_start_plus_duration() {
        let r = Reservation::new(
            ReservationId(1),
            "Maya",
            TableNumber(4),
            at(19, 30),
            TimeDelta::minutes(90),
        );
        assert_eq!(r.end(), at(21, 0));
        assert!(r.orders.is_empty());
        assert!(r.comments.is_empty());
    }

    #[test]
    fn test_overlap_is_half_open() {
        let r = Reservation::new(
            ReservationId(1),
            "Maya",
            TableNumber(4),
            at(12, 0),
            TimeDelta::hours(1),
        );
        assert!(r.overlaps(at(12, 30), at(13, 30)));
        assert!(r.overlaps(at(11, 0), at(12, 1)));
        assert!(r.overlaps(at(12, 15), at(12, 45)));
        assert!(r.overlaps(at(11, 0), at(14, 0)));
        // Touching boundaries do not overlap.
        assert!(!r.overlaps(at(13, 0), at(14, 0)));
        assert!(!r.overlaps(at(11, 0), at(12, 0)));
    }

    #[test]
    fn test_end_saturates_at_last_instant() {
        let start = NaiveDateTime::MAX - TimeDelta::minutes(30);
        let r = Reservation::new(
            ReservationId(1),
            "Maya",
            TableNumber(4),
            start,
            TimeDelta::hours(1),
        );
        assert_eq!(r.end(), NaiveDateTime::MAX);
        assert!(r.overlaps(start, NaiveDateTime::MAX));
    }
}
