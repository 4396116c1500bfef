//! The restaurant's floor plan.

use super::BookingError;
use crate::model::{Table, TableNumber};

/// Registered tables, kept in registration order.
///
/// Registration order is the tie-break when several tables could take a party, so it
/// is preserved across removals.
#[derive(Debug, Clone, Default)]
pub struct TableRegistry {
    tables: Vec<Table>,
}

impl TableRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a table. Seat counts are validated by the caller.
    pub fn add(&mut self, number: TableNumber, seats: u32) -> Result<Table, BookingError> {
        if self.tables.iter().any(|t| t.number == number) {
            return Err(BookingError::DuplicateTable(number));
        }
        let table = Table::new(number, seats);
        self.tables.push(table);
        Ok(table)
    }

    /// Unregisters a table. Reservations for it are left as they are.
    pub fn remove(&mut self, number: TableNumber) -> Result<Table, BookingError> {
        let index = self
            .tables
            .iter()
            .position(|t| t.number == number)
            .ok_or(BookingError::TableNotFound(number))?;
        Ok(self.tables.remove(index))
    }

    pub fn find_by_number(&self, number: TableNumber) -> Result<&Table, BookingError> {
        self.tables
            .iter()
            .find(|t| t.number == number)
            .ok_or(BookingError::TableNotFound(number))
    }

    /// Tables with at least `seats` seats, in registration order.
    pub fn with_seats_at_least(&self, seats: u32) -> impl Iterator<Item = &Table> + '_ {
        self.tables.iter().filter(move |t| t.fits(seats))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Table> + '_ {
        self.tables.iter()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers<'a>(tables: impl Iterator<Item = &'a Table>) -> Vec<u32> {
        tables.map(|t| t.number.0).collect()
    }

    #[test]
    fn test_add_rejects_duplicate_number() {
        let mut registry = TableRegistry::new();
        registry.add(TableNumber(1), 4).unwrap();

        assert_eq!(
            registry.add(TableNumber(1), 6),
            Err(BookingError::DuplicateTable(TableNumber(1)))
        );
        // The original table is untouched.
        assert_eq!(registry.find_by_number(TableNumber(1)).unwrap().seats, 4);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_remove_and_lookup_missing() {
        let mut registry = TableRegistry::new();
        registry.add(TableNumber(3), 2).unwrap();

        assert_eq!(registry.remove(TableNumber(3)).unwrap(), Table::new(TableNumber(3), 2));
        assert!(registry.is_empty());
        assert_eq!(
            registry.remove(TableNumber(3)),
            Err(BookingError::TableNotFound(TableNumber(3)))
        );
        assert_eq!(
            registry.find_by_number(TableNumber(3)),
            Err(BookingError::TableNotFound(TableNumber(3)))
        );
    }

    #[test]
    fn test_seat_filter_keeps_registration_order() {
        let mut registry = TableRegistry::new();
        for (number, seats) in [(7, 6), (2, 2), (5, 4), (1, 8)] {
            registry.add(TableNumber(number), seats).unwrap();
        }

        assert_eq!(numbers(registry.with_seats_at_least(4)), [7, 5, 1]);
        assert_eq!(numbers(registry.with_seats_at_least(1)), [7, 2, 5, 1]);
        assert_eq!(numbers(registry.with_seats_at_least(9)), Vec::<u32>::new());

        registry.remove(TableNumber(5)).unwrap();
        assert_eq!(numbers(registry.iter()), [7, 2, 1]);
    }
}
