use super::BookingError;
use crate::model::{Reservation, ReservationId, TableNumber};
use chrono::NaiveDateTime;

/// Active reservations in insertion order, plus the id counter.
///
/// The store does no validation of its own. It cannot see the tables, so overlap
/// and capacity checks belong to [`ReservationManager`](super::ReservationManager).
#[derive(Debug, Clone)]
pub struct ReservationStore {
    reservations: Vec<Reservation>,
    next_id: u32,
}

impl Default for ReservationStore {
    fn default() -> Self {
        Self {
            reservations: Vec::new(),
            next_id: 1,
        }
    }
}

impl ReservationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current counter value and advances it.
    pub fn next_id(&mut self) -> ReservationId {
        let id = ReservationId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn insert(&mut self, reservation: Reservation) {
        self.reservations.push(reservation);
    }

    /// Removes a reservation. Its id is never issued again.
    pub fn remove(&mut self, id: ReservationId) -> Result<Reservation, BookingError> {
        let index = self
            .reservations
            .iter()
            .position(|r| r.id == id)
            .ok_or(BookingError::ReservationNotFound(id))?;
        Ok(self.reservations.remove(index))
    }

    pub fn find_by_id(&self, id: ReservationId) -> Result<&Reservation, BookingError> {
        self.reservations
            .iter()
            .find(|r| r.id == id)
            .ok_or(BookingError::ReservationNotFound(id))
    }

    pub fn find_by_id_mut(&mut self, id: ReservationId) -> Result<&mut Reservation, BookingError> {
        self.reservations
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(BookingError::ReservationNotFound(id))
    }

    pub fn find_by_table(&self, number: TableNumber) -> impl Iterator<Item = &Reservation> + '_ {
        self.reservations
            .iter()
            .filter(move |r| r.table_number == number)
    }

    pub fn find_by_name<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Reservation> + 'a {
        self.reservations.iter().filter(move |r| r.holder_name == name)
    }

    pub fn find_by_start(&self, start: NaiveDateTime) -> impl Iterator<Item = &Reservation> + '_ {
        self.reservations.iter().filter(move |r| r.start == start)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Reservation> + '_ {
        self.reservations.iter()
    }

    pub fn len(&self) -> usize {
        self.reservations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reservations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeDelta};

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 14)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn book(store: &mut ReservationStore, name: &str, table: u32, start: NaiveDateTime) -> ReservationId {
        let id = store.next_id();
        store.insert(Reservation::new(
            id,
            name,
            TableNumber(table),
            start,
            TimeDelta::hours(1),
        ));
        id
    }

    fn ids<'a>(found: impl Iterator<Item = &'a Reservation>) -> Vec<u32> {
        found.map(|r| r.id.0).collect()
    }

    #[test]
    fn test_ids_start_at_one_and_are_never_reused() {
        let mut store = ReservationStore::new();
        let first = book(&mut store, "Ana", 1, at(12, 0));
        let second = book(&mut store, "Ben", 1, at(13, 0));
        assert_eq!((first, second), (ReservationId(1), ReservationId(2)));

        store.remove(second).unwrap();
        store.remove(first).unwrap();
        assert!(store.is_empty());

        assert_eq!(book(&mut store, "Cy", 1, at(12, 0)), ReservationId(3));
    }

    #[test]
    fn test_remove_unknown_id() {
        let mut store = ReservationStore::new();
        book(&mut store, "Ana", 1, at(12, 0));

        assert_eq!(
            store.remove(ReservationId(999)),
            Err(BookingError::ReservationNotFound(ReservationId(999)))
        );
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_filters_keep_insertion_order() {
        let mut store = ReservationStore::new();
        book(&mut store, "Ana", 2, at(19, 0));
        book(&mut store, "Ben", 1, at(12, 0));
        book(&mut store, "Ana", 1, at(19, 0));
        book(&mut store, "Dee", 2, at(21, 0));

        assert_eq!(ids(store.find_by_table(TableNumber(1))), [2, 3]);
        assert_eq!(ids(store.find_by_table(TableNumber(2))), [1, 4]);
        assert_eq!(ids(store.find_by_name("Ana")), [1, 3]);
        assert_eq!(ids(store.find_by_start(at(19, 0))), [1, 3]);

        // Empty results are not errors.
        assert_eq!(ids(store.find_by_name("Zed")), Vec::<u32>::new());
        assert_eq!(ids(store.find_by_table(TableNumber(9))), Vec::<u32>::new());

        store.remove(ReservationId(1)).unwrap();
        assert_eq!(ids(store.iter()), [2, 3, 4]);
    }

    #[test]
    fn test_find_by_id_mut_edits_in_place() {
        let mut store = ReservationStore::new();
        let id = book(&mut store, "Ana", 1, at(12, 0));

        store
            .find_by_id_mut(id)
            .unwrap()
            .comments
            .push("window seat".to_string());

        assert_eq!(store.find_by_id(id).unwrap().comments, ["window seat"]);
        assert!(store.find_by_id_mut(ReservationId(5)).is_err());
    }
}
