//! # ActorEntity Trait
//!
//! The contract a resource type fulfils so that a [`ResourceActor`](crate::ResourceActor)
//! can own a collection of it. The trait fixes the identifier, the DTOs for creation and
//! update, the resource-specific action vocabulary and the error type, and offers async
//! hooks around every lifecycle step.
//!
//! Only [`ActorEntity::from_create_params`], [`ActorEntity::on_update`] and
//! [`ActorEntity::handle_action`] are required. The remaining hooks default to `Ok(())`,
//! and [`ActorEntity::unique_key`] defaults to `None` (no uniqueness constraint).

use async_trait::async_trait;
use std::fmt::{Debug, Display};

/// A resource that can be owned and mutated by a [`ResourceActor`](crate::ResourceActor).
///
/// # Identifiers
/// Ids are issued by the actor from a `u32` counter that starts at 1 and only moves
/// forward, so `Id` must be constructible from `u32`. The store keeps entities ordered
/// by id, which makes listings follow creation order.
///
/// # Context
/// `Context` is handed to [`ResourceActor::run`](crate::ResourceActor::run) and then
/// passed by reference into every hook. Use `()` when the entity has no collaborators.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Identifier issued by the actor.
    type Id: Ord + Clone + Send + Sync + Display + Debug + From<u32>;

    /// Payload for creating a new instance.
    type Create: Send + Sync + Debug;

    /// Payload for updating an existing instance.
    type Update: Send + Sync + Debug;

    /// Resource-specific operations beyond CRUD.
    type Action: Send + Sync + Debug;

    /// Result of a custom action.
    type ActionResult: Send + Sync + Debug;

    /// Collaborators injected at `run()` time.
    type Context: Send + Sync;

    /// Error raised by constructors, hooks and actions.
    ///
    /// The actor boxes it into [`FrameworkError::EntityError`](crate::FrameworkError::EntityError);
    /// domain clients can downcast it back to the concrete type.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Builds the entity from the issued id and the creation payload.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Natural key that must be unique across the collection.
    ///
    /// When this returns `Some(key)` and another stored entity reports the same key,
    /// the create request fails with [`FrameworkError::AlreadyExists`](crate::FrameworkError::AlreadyExists)
    /// and nothing is stored.
    fn unique_key(&self) -> Option<String> {
        None
    }

    /// Runs after construction and before the entity is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies an update payload in place.
    async fn on_update(&mut self, update: Self::Update, ctx: &Self::Context)
        -> Result<(), Self::Error>;

    /// Runs before the entity is removed. An error keeps the entity in the store.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Executes a resource-specific action against this entity.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
