//! Custom actions for the Restaurant actor.
//!
//! Every table and reservation operation of a restaurant is one [`RestaurantAction`],
//! executed by [`ActorEntity::handle_action`](resource_actor::ActorEntity::handle_action)
//! while the actor holds the restaurant exclusively.
//!
//! See [`impl ActorEntity for Restaurant`](crate::model::Restaurant#impl-ActorEntity-for-Restaurant)
//! for the implementation.

use crate::model::{OrderItem, Reservation, ReservationId, ReservationRequest, Table, TableNumber};
use chrono::NaiveDateTime;

/// Table and reservation operations on one restaurant.
#[derive(Debug, Clone)]
pub enum RestaurantAction {
    /// Registers a table.
    ///
    /// # Errors
    /// `InvalidSeats` for zero seats, `DuplicateTable` if the number is taken.
    AddTable { number: TableNumber, seats: u32 },
    /// Unregisters a table; its reservations stay.
    RemoveTable(TableNumber),
    GetTable(TableNumber),
    /// All tables in registration order.
    ListTables,
    /// Tables seating at least this many, in registration order.
    TablesWithSeats(u32),
    /// Runs the first-fit search without booking anything.
    ///
    /// # Errors
    /// `InvalidWindow` unless `end` is after `start`.
    FindAvailableTable {
        party_size: u32,
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
    /// Books the first free table that seats the party.
    ///
    /// # Errors
    /// `InvalidPartySize`, `MealTooShort`, `InvalidWindow` or `NoAvailableTable`.
    Reserve(ReservationRequest),
    Cancel(ReservationId),
    AttachOrder {
        reservation: ReservationId,
        item: OrderItem,
    },
    AttachComment {
        reservation: ReservationId,
        text: String,
    },
    GetReservation(ReservationId),
    /// Active reservations in booking order.
    ListReservations,
    ReservationsByName(String),
    ReservationsByTable(TableNumber),
    ReservationsByStart(NaiveDateTime),
    BillableItems(ReservationId),
}

/// Results from RestaurantActions - variants match 1:1 with RestaurantAction
#[derive(Debug, Clone)]
pub enum RestaurantActionResult {
    AddTable(Table),
    RemoveTable(Table),
    GetTable(Table),
    ListTables(Vec<Table>),
    TablesWithSeats(Vec<Table>),
    FindAvailableTable(Table),
    /// The new reservation, with its id and assigned table.
    Reserve(Reservation),
    /// The reservation as it was when cancelled.
    Cancel(Reservation),
    AttachOrder(Reservation),
    AttachComment(Reservation),
    GetReservation(Reservation),
    ListReservations(Vec<Reservation>),
    ReservationsByName(Vec<Reservation>),
    ReservationsByTable(Vec<Reservation>),
    ReservationsByStart(Vec<Reservation>),
    BillableItems(Vec<OrderItem>),
}
