use super::{AvailabilityResolver, BookingError, ReservationStore, TableRegistry};
use crate::model::reservation::window_end;
use crate::model::{OrderItem, Reservation, ReservationId, Table, TableNumber};
use chrono::{NaiveDateTime, TimeDelta};
use tracing::{debug, info};

/// One restaurant's tables and reservations, and the operations that keep them
/// consistent.
///
/// A reservation is either active (in the store) or cancelled (gone). No tombstone is
/// kept for cancelled ones; their ids are simply never issued again.
///
/// `create` reads the existing reservations and then inserts, so the caller must
/// hold `&mut self` across the whole call. Inside the crate that is the restaurant
/// actor, which runs one action at a time.
#[derive(Debug, Clone, Default)]
pub struct ReservationManager {
    tables: TableRegistry,
    reservations: ReservationStore,
}

impl ReservationManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Books the first free table that seats the party.
    ///
    /// Nothing is changed when no table qualifies.
    pub fn create(
        &mut self,
        holder_name: impl Into<String>,
        party_size: u32,
        start: NaiveDateTime,
        duration: TimeDelta,
    ) -> Result<Reservation, BookingError> {
        let end = window_end(start, duration);
        let table_number = AvailabilityResolver::new(&self.tables, &self.reservations)
            .find_available_table(party_size, start, end)?
            .number;

        let id = self.reservations.next_id();
        let reservation = Reservation::new(id, holder_name, table_number, start, duration);
        info!(%id, %table_number, party_size, %start, %end, "Reservation created");
        self.reservations.insert(reservation.clone());
        Ok(reservation)
    }

    pub fn cancel(&mut self, id: ReservationId) -> Result<Reservation, BookingError> {
        let cancelled = self.reservations.remove(id)?;
        info!(%id, table_number = %cancelled.table_number, "Reservation cancelled");
        Ok(cancelled)
    }

    pub fn attach_order(
        &mut self,
        id: ReservationId,
        item: OrderItem,
    ) -> Result<&Reservation, BookingError> {
        let reservation = self.reservations.find_by_id_mut(id)?;
        debug!(%id, item = item.name(), "Order attached");
        reservation.orders.push(item);
        Ok(&*reservation)
    }

    pub fn attach_comment(
        &mut self,
        id: ReservationId,
        text: impl Into<String>,
    ) -> Result<&Reservation, BookingError> {
        let reservation = self.reservations.find_by_id_mut(id)?;
        reservation.comments.push(text.into());
        debug!(%id, "Comment attached");
        Ok(&*reservation)
    }

    /// Ordered items of a reservation, in the order they were attached.
    pub fn billable_items(&self, id: ReservationId) -> Result<&[OrderItem], BookingError> {
        Ok(&self.reservations.find_by_id(id)?.orders)
    }

    pub fn add_table(&mut self, number: TableNumber, seats: u32) -> Result<Table, BookingError> {
        let table = self.tables.add(number, seats)?;
        info!(%number, seats, "Table added");
        Ok(table)
    }

    /// Reservations already made for this table are kept.
    pub fn remove_table(&mut self, number: TableNumber) -> Result<Table, BookingError> {
        let table = self.tables.remove(number)?;
        info!(%number, "Table removed");
        Ok(table)
    }

    pub fn find_available_table(
        &self,
        party_size: u32,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<&Table, BookingError> {
        AvailabilityResolver::new(&self.tables, &self.reservations)
            .find_available_table(party_size, start, end)
    }

    pub fn tables(&self) -> &TableRegistry {
        &self.tables
    }

    pub fn reservations(&self) -> &ReservationStore {
        &self.reservations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Course, DrinkSize};
    use chrono::NaiveDate;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 14)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn one_table(seats: u32) -> ReservationManager {
        let mut manager = ReservationManager::new();
        manager.add_table(TableNumber(1), seats).unwrap();
        manager
    }

    #[test]
    fn test_single_table_lunch_sequence() {
        let mut manager = one_table(4);
        let hour = TimeDelta::hours(1);

        let a = manager.create("A", 2, at(12, 0), hour).unwrap();
        assert_eq!(a.id, ReservationId(1));
        assert_eq!(a.table_number, TableNumber(1));

        let b = manager.create("B", 2, at(12, 30), hour);
        assert!(matches!(b, Err(BookingError::NoAvailableTable { .. })));

        let c = manager.create("C", 2, at(13, 0), hour).unwrap();
        assert_eq!(c.id, ReservationId(2));

        manager.cancel(a.id).unwrap();

        // Still overlaps C.
        let b = manager.create("B", 2, at(12, 30), hour);
        assert!(matches!(b, Err(BookingError::NoAvailableTable { .. })));

        let d = manager.create("D", 2, at(12, 0), hour).unwrap();
        assert_eq!(d.id, ReservationId(3));
        assert_eq!(d.table_number, TableNumber(1));
    }

    #[test]
    fn test_party_too_large_for_any_table() {
        let mut manager = one_table(4);

        let result = manager.create("Big group", 6, at(20, 0), TimeDelta::hours(2));
        assert_eq!(
            result,
            Err(BookingError::NoAvailableTable {
                party_size: 6,
                start: at(20, 0),
                end: at(22, 0),
            })
        );
        assert!(manager.reservations().is_empty());
    }

    #[test]
    fn test_unknown_ids() {
        let mut manager = one_table(4);
        let missing = ReservationId(999);

        assert_eq!(
            manager.cancel(missing),
            Err(BookingError::ReservationNotFound(missing))
        );
        assert!(manager.attach_comment(missing, "hello").is_err());
        assert!(manager.billable_items(missing).is_err());
        assert!(manager
            .attach_order(missing, OrderItem::bread("Focaccia", 4.0))
            .is_err());
    }

    #[test]
    fn test_failed_create_does_not_consume_an_id() {
        let mut manager = one_table(2);

        manager.create("A", 4, at(12, 0), TimeDelta::hours(1)).unwrap_err();
        let ok = manager.create("A", 2, at(12, 0), TimeDelta::hours(1)).unwrap();
        assert_eq!(ok.id, ReservationId(1));
    }

    #[test]
    fn test_cancel_frees_only_table() {
        let mut manager = one_table(4);
        let first = manager.create("A", 4, at(19, 0), TimeDelta::hours(2)).unwrap();

        assert!(manager.create("B", 3, at(20, 0), TimeDelta::hours(1)).is_err());
        manager.cancel(first.id).unwrap();

        let second = manager.create("B", 3, at(20, 0), TimeDelta::hours(1)).unwrap();
        assert_eq!(second.id, ReservationId(2));
        assert_eq!(second.table_number, TableNumber(1));
    }

    #[test]
    fn test_removing_table_keeps_its_reservations() {
        let mut manager = one_table(4);
        let booked = manager.create("A", 2, at(12, 0), TimeDelta::hours(1)).unwrap();

        manager.remove_table(TableNumber(1)).unwrap();

        let kept = manager.reservations().find_by_id(booked.id).unwrap();
        assert_eq!(kept.table_number, TableNumber(1));
        assert!(manager.tables().is_empty());
        assert!(manager.create("B", 2, at(15, 0), TimeDelta::hours(1)).is_err());
    }

    #[test]
    fn test_orders_and_comments_accumulate() {
        let mut manager = one_table(4);
        let id = manager
            .create("A", 2, at(12, 0), TimeDelta::hours(1))
            .unwrap()
            .id;

        manager
            .attach_order(id, OrderItem::course(Course::MainCourse, "Risotto", 18.0))
            .unwrap();
        manager
            .attach_order(id, OrderItem::drink("Lemonade", 4.0, true, DrinkSize::Large))
            .unwrap();
        let reservation = manager.attach_comment(id, "Allergic to nuts").unwrap();
        assert_eq!(reservation.comments, ["Allergic to nuts"]);

        let names: Vec<_> = manager
            .billable_items(id)
            .unwrap()
            .iter()
            .map(OrderItem::name)
            .collect();
        assert_eq!(names, ["Risotto", "Lemonade"]);
    }

    #[test]
    fn test_random_bookings_never_double_book() {
        let mut manager = ReservationManager::new();
        for (number, seats) in [(1, 2), (2, 4), (3, 4), (4, 6), (5, 8)] {
            manager.add_table(TableNumber(number), seats).unwrap();
        }

        // Fixed-seed linear congruential generator.
        let mut seed: u64 = 0x2545_f491;
        let mut next = move |bound: u64| {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            (seed >> 33) % bound
        };

        let mut booked = 0;
        for round in 0..400 {
            let party = next(9) as u32 + 1;
            let start = at(11, 0) + TimeDelta::minutes(15 * next(40) as i64);
            let duration = TimeDelta::minutes(30 + 15 * next(8) as i64);

            if let Ok(r) = manager.create(format!("guest {round}"), party, start, duration) {
                let seats = manager.tables().find_by_number(r.table_number).unwrap().seats;
                assert!(seats >= party);
                booked += 1;
            }
            if round % 7 == 0 {
                let first = manager.reservations().iter().next().map(|r| r.id);
                if let Some(id) = first {
                    manager.cancel(id).unwrap();
                }
            }
        }
        assert!(booked > 0);

        let all: Vec<_> = manager.reservations().iter().collect();
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                if a.table_number == b.table_number {
                    assert!(!a.overlaps(b.start, b.end()), "{} overlaps {}", a.id, b.id);
                }
            }
        }
        let ids: Vec<_> = all.iter().map(|r| r.id).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }
}
