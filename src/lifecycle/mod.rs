//! # System Lifecycle
//!
//! Starting, configuring and stopping the booking engine.
//!
//! [`RestaurantSystem`] spawns the restaurant actor and exposes a
//! [`RestaurantClient`](crate::clients::RestaurantClient). Shutdown is channel-driven:
//! once the last client is dropped the actor's mailbox closes, the actor logs its final
//! state and its task ends.
//!
//! [`SystemConfig`] carries the mailbox size, the default minimum meal time and the
//! default log directive, read from `BOOKING_*` environment variables.
//!
//! Tracing is installed separately with
//! [`setup_tracing`], once per process:
//!
//! ```bash
//! RUST_LOG=info cargo run      # state changes
//! RUST_LOG=debug cargo run     # full payloads
//! ```

pub mod config;
pub mod restaurant_system;
pub mod tracing;

pub use config::*;
pub use restaurant_system::*;
pub use self::tracing::setup_tracing;
