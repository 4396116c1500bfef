//! # Restaurant Actor
//!
//! All restaurants live in one [`ResourceActor`]. It processes one request at a time,
//! so the availability check and the insert inside a reservation never interleave with
//! another request, and two guests can never be given the same table for overlapping
//! windows.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](resource_actor::ActorEntity) implementation for [`Restaurant`]
//! - [`error`] - [`RestaurantError`]
//! - [`actions`] - [`RestaurantAction`] and [`RestaurantActionResult`]
//! - [`new()`] - creates the actor and its generic client
//!
//! ## Usage
//!
//! ```rust
//! use table_booking::clients::RestaurantClient;
//! use table_booking::model::TableNumber;
//! use table_booking::restaurant_actor;
//! use chrono::TimeDelta;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = restaurant_actor::new(32);
//!     let client = RestaurantClient::new(generic_client, TimeDelta::minutes(30));
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client.create_restaurant("Trattoria").await?;
//!     client.add_table(id, TableNumber(1), 4).await?;
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::Restaurant;
use resource_actor::{ResourceActor, ResourceClient};

/// Creates a new Restaurant actor and its client.
pub fn new(mailbox_capacity: usize) -> (ResourceActor<Restaurant>, ResourceClient<Restaurant>) {
    ResourceActor::new(mailbox_capacity)
}
