use crate::booking::ReservationManager;
use chrono::TimeDelta;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Shortest meal a reservation may be booked for, unless configured otherwise.
pub const DEFAULT_MIN_MEAL_TIME_MINUTES: i64 = 30;

/// Type-safe identifier for Restaurants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RestaurantId(pub u32);

impl From<u32> for RestaurantId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for RestaurantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "restaurant_{}", self.0)
    }
}

/// A restaurant: its floor plan, its reservation book and its house rules.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](resource_actor::ActorEntity) trait, so all
/// restaurants live inside one [`ResourceActor`](resource_actor::ResourceActor).
/// Every table and reservation operation on a restaurant runs as a single action on
/// that actor.
///
/// See [`impl ActorEntity for Restaurant`](#impl-ActorEntity-for-Restaurant) for:
/// - Creation parameters ([`RestaurantCreate`])
/// - Update parameters ([`RestaurantUpdate`])
/// - Custom actions ([`RestaurantAction`](crate::restaurant_actor::RestaurantAction))
#[derive(Debug, Clone)]
pub struct Restaurant {
    pub id: RestaurantId,
    pub name: String,
    pub min_meal_time: TimeDelta,
    bookings: ReservationManager,
}

impl Restaurant {
    /// Creates a restaurant with no tables and no reservations.
    pub fn new(id: RestaurantId, name: impl Into<String>, min_meal_time: TimeDelta) -> Self {
        Self {
            id,
            name: name.into(),
            min_meal_time,
            bookings: ReservationManager::new(),
        }
    }

    /// Tables and reservations of this restaurant.
    pub fn bookings(&self) -> &ReservationManager {
        &self.bookings
    }

    pub(crate) fn bookings_mut(&mut self) -> &mut ReservationManager {
        &mut self.bookings
    }
}

/// Payload for opening a new restaurant.
#[derive(Debug, Clone)]
pub struct RestaurantCreate {
    pub name: String,
    pub min_meal_time: TimeDelta,
}

impl RestaurantCreate {
    /// Uses [`DEFAULT_MIN_MEAL_TIME_MINUTES`].
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            min_meal_time: TimeDelta::minutes(DEFAULT_MIN_MEAL_TIME_MINUTES),
        }
    }

    pub fn with_min_meal_time(mut self, min_meal_time: TimeDelta) -> Self {
        self.min_meal_time = min_meal_time;
        self
    }
}

/// Payload for changing house rules.
#[derive(Debug, Clone, Default)]
pub struct RestaurantUpdate {
    pub min_meal_time: Option<TimeDelta>,
}
