//! # Framework Errors
//!
//! Failures raised by the actor plumbing itself. Entity errors travel inside
//! [`FrameworkError::EntityError`] untouched so callers can recover the concrete type.

/// Errors that can occur within the actor framework.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    /// The actor's mailbox is closed; the actor task has stopped.
    #[error("Actor closed")]
    ActorClosed,
    /// The actor dropped the response channel without answering.
    #[error("Actor dropped response channel")]
    ActorDropped,
    /// No entity with this id.
    #[error("Item not found: {0}")]
    NotFound(String),
    /// Another entity already holds this unique key.
    #[error("Item already exists: {0}")]
    AlreadyExists(String),
    /// The entity rejected the request.
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}
