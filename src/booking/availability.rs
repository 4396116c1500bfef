use super::{BookingError, ReservationStore, TableRegistry};
use crate::model::{Table, TableNumber};
use chrono::NaiveDateTime;
use tracing::debug;

/// First-fit table search over a registry and a store.
///
/// Candidates are tried in registration order and the first one with no
/// overlapping reservation wins. Spare seats are not minimised.
pub struct AvailabilityResolver<'a> {
    tables: &'a TableRegistry,
    reservations: &'a ReservationStore,
}

impl<'a> AvailabilityResolver<'a> {
    pub fn new(tables: &'a TableRegistry, reservations: &'a ReservationStore) -> Self {
        Self {
            tables,
            reservations,
        }
    }

    pub fn find_available_table(
        &self,
        party_size: u32,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<&'a Table, BookingError> {
        let tables = self.tables;
        tables
            .with_seats_at_least(party_size)
            .find(|table| self.is_free(table.number, start, end))
            .ok_or_else(|| {
                debug!(party_size, %start, %end, "No table available");
                BookingError::NoAvailableTable {
                    party_size,
                    start,
                    end,
                }
            })
    }

    /// Whether no reservation on `number` overlaps `[start, end)`.
    pub fn is_free(&self, number: TableNumber, start: NaiveDateTime, end: NaiveDateTime) -> bool {
        !self
            .reservations
            .find_by_table(number)
            .any(|r| r.overlaps(start, end))
    }
}
