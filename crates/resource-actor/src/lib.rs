//! # Resource Actor
//!
//! Single-writer actors for collections of stateful resources, built on Tokio.
//!
//! A [`ResourceActor<T>`] owns every `T` it manages and processes requests from its
//! mailbox strictly one after another. Callers never touch the state directly; they send
//! requests through a cloneable [`ResourceClient<T>`]. Serialising all requests through
//! one task is what makes compound operations safe: an entity action that reads its own
//! state, decides, and writes back cannot interleave with any other request on the same
//! actor, with no lock in sight.
//!
//! ## Layers
//!
//! 1. **Entity** ([`ActorEntity`]): the domain type, its DTOs, action vocabulary, error
//!    type and lifecycle hooks.
//! 2. **Runtime** ([`ResourceActor`]): mailbox loop, id issuance, ordered store,
//!    uniqueness check, tracing.
//! 3. **Interface** ([`ResourceClient`], [`ActorClient`]): typed request/response calls
//!    and the shared read/delete plumbing for domain clients.
//!
//! ## Example
//!
//! ```rust
//! use resource_actor::{ActorEntity, FrameworkError, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Shift { id: u32, waiter: String, covers: u32 }
//!
//! #[derive(Debug)] struct ShiftCreate { waiter: String }
//! #[derive(Debug)] enum ShiftAction { Seat(u32) }
//! #[derive(Debug, thiserror::Error)] #[error("shift error")] struct ShiftError;
//!
//! #[async_trait]
//! impl ActorEntity for Shift {
//!     type Id = u32;
//!     type Create = ShiftCreate;
//!     type Update = ();
//!     type Action = ShiftAction;
//!     type ActionResult = u32;
//!     type Context = ();
//!     type Error = ShiftError;
//!
//!     fn from_create_params(id: u32, params: ShiftCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, waiter: params.waiter, covers: 0 })
//!     }
//!
//!     fn unique_key(&self) -> Option<String> {
//!         Some(self.waiter.clone())
//!     }
//!
//!     async fn on_update(&mut self, _: (), _: &()) -> Result<(), Self::Error> { Ok(()) }
//!
//!     async fn handle_action(&mut self, action: ShiftAction, _: &()) -> Result<u32, Self::Error> {
//!         match action {
//!             ShiftAction::Seat(guests) => {
//!                 self.covers += guests;
//!                 Ok(self.covers)
//!             }
//!         }
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Shift>::new(8);
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client.create(ShiftCreate { waiter: "Noa".into() }).await.unwrap();
//!     assert_eq!(client.perform_action(id, ShiftAction::Seat(4)).await.unwrap(), 4);
//!
//!     let again = client.create(ShiftCreate { waiter: "Noa".into() }).await;
//!     assert!(matches!(again, Err(FrameworkError::AlreadyExists(_))));
//! }
//! ```
//!
//! ## Context injection
//!
//! Collaborators are passed to [`ResourceActor::run`] rather than to the constructor, so
//! actors can be created first and wired afterwards, in any order.
//!
//! ## Testing
//!
//! See [`mock`] for a scripted [`MockClient`](mock::MockClient) and for raw-receiver
//! helpers that let a test play the actor's part.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
