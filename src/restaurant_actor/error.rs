//! Error types for the Restaurant actor.

use crate::booking::BookingError;
use chrono::NaiveDateTime;
use thiserror::Error;

/// Errors that can occur during restaurant operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RestaurantError {
    /// No restaurant with this name or id.
    #[error("Restaurant not found: {0}")]
    NotFound(String),

    /// A restaurant with this name already exists.
    #[error("Restaurant already exists: {0}")]
    AlreadyExists(String),

    /// Restaurant names must not be blank.
    #[error("Invalid restaurant name: {0:?}")]
    InvalidName(String),

    /// A table, reservation or allocation failure from the booking core.
    #[error(transparent)]
    Booking(#[from] BookingError),

    /// Tables need at least one seat.
    #[error("Invalid seat count: {0}")]
    InvalidSeats(u32),

    /// Parties need at least one guest.
    #[error("Party size must be at least 1")]
    InvalidPartySize,

    /// The minimum meal time itself must be positive.
    #[error("Invalid minimum meal time: {0} minutes")]
    InvalidMinMealTime(i64),

    /// The booking is shorter than the restaurant's minimum meal time.
    #[error("Meal too short: requested {requested_minutes} minutes, minimum is {minimum_minutes}")]
    MealTooShort {
        requested_minutes: i64,
        minimum_minutes: i64,
    },

    /// The window ends before it starts, or its end is past the last representable time.
    #[error("Invalid booking window starting at {0}")]
    InvalidWindow(NaiveDateTime),

    /// The actor answered with a result for a different action.
    #[error("Unexpected action result: {0}")]
    UnexpectedResult(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for RestaurantError {
    fn from(msg: String) -> Self {
        RestaurantError::ActorCommunicationError(msg)
    }
}
