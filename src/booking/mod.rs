//! Synchronous booking core: tables, reservations and first-fit allocation.
//!
//! Nothing here is thread-aware. [`ReservationManager`] needs exclusive access for
//! every mutating call; the restaurant actor provides it.

pub mod availability;
pub mod error;
pub mod manager;
pub mod reservations;
pub mod tables;

pub use availability::AvailabilityResolver;
pub use error::BookingError;
pub use manager::ReservationManager;
pub use reservations::ReservationStore;
pub use tables::TableRegistry;
