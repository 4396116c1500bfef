//! # Table Booking
//!
//! A reservation and table-allocation engine for restaurants, built on single-writer
//! actors.
//!
//! Each restaurant has a floor plan of tables with fixed seat counts and a book of
//! reservations. A reservation asks for a party size and a time window; the engine
//! gives it the first registered table that seats the party and has no booking
//! overlapping the window. Windows are half-open, so a reservation ending at 13:00
//! and one starting at 13:00 can share a table.
//!
//! ## Module Tour
//!
//! ### 1. The Core ([`booking`])
//! Synchronous and thread-unaware. [`TableRegistry`](booking::TableRegistry),
//! [`ReservationStore`](booking::ReservationStore), the first-fit
//! [`AvailabilityResolver`](booking::AvailabilityResolver) and the
//! [`ReservationManager`](booking::ReservationManager) that ties them together.
//!
//! ### 2. The Actor ([`restaurant_actor`])
//! [`Restaurant`](model::Restaurant) implements
//! [`ActorEntity`](resource_actor::ActorEntity), so every restaurant lives inside one
//! [`ResourceActor`](resource_actor::ResourceActor). The actor runs one request at a
//! time, which makes "check the table is free, then book it" a single step even with
//! many concurrent callers.
//!
//! ### 3. The Interface ([`clients`])
//! [`RestaurantClient`](clients::RestaurantClient) hides message passing behind one
//! async method per operation and hands back [`RestaurantError`](restaurant_actor::RestaurantError)
//! kinds callers can match on.
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! [`RestaurantSystem`](lifecycle::RestaurantSystem) starts and stops the actor;
//! [`SystemConfig`](lifecycle::SystemConfig) reads settings from the environment.
//!
//! ## Quick Start
//!
//! ```rust
//! use table_booking::lifecycle::{RestaurantSystem, SystemConfig};
//! use table_booking::model::{ReservationRequest, TableNumber};
//! use chrono::{NaiveDate, TimeDelta};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let system = RestaurantSystem::with_config(SystemConfig::default());
//!     let client = &system.restaurant_client;
//!
//!     let id = client.create_restaurant("Trattoria").await?;
//!     client.add_table(id, TableNumber(1), 4).await?;
//!
//!     let noon = NaiveDate::from_ymd_opt(2024, 6, 14)
//!         .and_then(|d| d.and_hms_opt(12, 0, 0))
//!         .ok_or("bad date")?;
//!     let request = ReservationRequest::new("Maya", 2, noon, TimeDelta::hours(1));
//!     let reservation = client.reserve(id, request).await?;
//!     assert_eq!(reservation.table_number, TableNumber(1));
//!
//!     system.shutdown().await?;
//!     Ok(())
//! }
//! ```
//!
//! ### Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod booking;
pub mod clients;
pub mod lifecycle;
pub mod model;
pub mod restaurant_actor;
