//! Type-safe wrappers around [`ResourceClient`](resource_actor::ResourceClient).

pub mod restaurant_client;

pub use restaurant_client::*;
