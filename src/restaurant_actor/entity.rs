//! ActorEntity trait implementation for the Restaurant domain type.
//!
//! This module contains the [`ActorEntity`] implementation that lets [`Restaurant`] be
//! managed by the generic [`ResourceActor`](resource_actor::ResourceActor). Values
//! entering a restaurant are checked here before the booking core sees them.

use super::actions::{RestaurantAction, RestaurantActionResult};
use super::error::RestaurantError;
use crate::model::{
    ReservationRequest, Restaurant, RestaurantCreate, RestaurantId, RestaurantUpdate,
};
use async_trait::async_trait;
use chrono::TimeDelta;
use resource_actor::ActorEntity;
use tracing::warn;

fn check_min_meal_time(min_meal_time: TimeDelta) -> Result<TimeDelta, RestaurantError> {
    if min_meal_time <= TimeDelta::zero() {
        return Err(RestaurantError::InvalidMinMealTime(
            min_meal_time.num_minutes(),
        ));
    }
    Ok(min_meal_time)
}

impl Restaurant {
    /// Rejects requests the booking core must never see.
    fn check_request(&self, request: &ReservationRequest) -> Result<(), RestaurantError> {
        if request.party_size == 0 {
            return Err(RestaurantError::InvalidPartySize);
        }
        if request.duration <= TimeDelta::zero() || request.duration < self.min_meal_time {
            return Err(RestaurantError::MealTooShort {
                requested_minutes: request.duration.num_minutes(),
                minimum_minutes: self.min_meal_time.num_minutes(),
            });
        }
        if request.start.checked_add_signed(request.duration).is_none() {
            return Err(RestaurantError::InvalidWindow(request.start));
        }
        Ok(())
    }
}

#[async_trait]
impl ActorEntity for Restaurant {
    type Id = RestaurantId;
    type Create = RestaurantCreate;
    type Update = RestaurantUpdate;
    type Action = RestaurantAction;
    type ActionResult = RestaurantActionResult;
    type Context = ();
    type Error = RestaurantError;

    fn from_create_params(id: RestaurantId, params: RestaurantCreate) -> Result<Self, Self::Error> {
        let name = params.name.trim();
        if name.is_empty() {
            return Err(RestaurantError::InvalidName(params.name));
        }
        let min_meal_time = check_min_meal_time(params.min_meal_time)?;
        Ok(Self::new(id, name, min_meal_time))
    }

    /// Restaurant names are unique.
    fn unique_key(&self) -> Option<String> {
        Some(self.name.clone())
    }

    async fn on_update(
        &mut self,
        update: RestaurantUpdate,
        _ctx: &(),
    ) -> Result<(), Self::Error> {
        if let Some(min_meal_time) = update.min_meal_time {
            self.min_meal_time = check_min_meal_time(min_meal_time)?;
        }
        Ok(())
    }

    /// Handles custom actions for the Restaurant entity.
    ///
    /// # Actions
    /// - `AddTable`, `RemoveTable`: change the floor plan
    /// - `Reserve`, `Cancel`, `AttachOrder`, `AttachComment`: change the reservation book
    /// - everything else is a read
    async fn handle_action(
        &mut self,
        action: RestaurantAction,
        _ctx: &(),
    ) -> Result<RestaurantActionResult, Self::Error> {
        use RestaurantAction as A;
        use RestaurantActionResult as R;

        let result = match action {
            A::AddTable { number, seats } => {
                if seats == 0 {
                    warn!(restaurant = %self.id, %number, "Rejected table without seats");
                    return Err(RestaurantError::InvalidSeats(seats));
                }
                R::AddTable(self.bookings_mut().add_table(number, seats)?)
            }
            A::RemoveTable(number) => R::RemoveTable(self.bookings_mut().remove_table(number)?),
            A::GetTable(number) => R::GetTable(*self.bookings().tables().find_by_number(number)?),
            A::ListTables => R::ListTables(self.bookings().tables().iter().copied().collect()),
            A::TablesWithSeats(seats) => R::TablesWithSeats(
                self.bookings()
                    .tables()
                    .with_seats_at_least(seats)
                    .copied()
                    .collect(),
            ),
            A::FindAvailableTable {
                party_size,
                start,
                end,
            } => {
                if end <= start {
                    return Err(RestaurantError::InvalidWindow(start));
                }
                R::FindAvailableTable(
                    *self
                        .bookings()
                        .find_available_table(party_size, start, end)?,
                )
            }
            A::Reserve(request) => {
                if let Err(e) = self.check_request(&request) {
                    warn!(restaurant = %self.id, error = %e, "Rejected reservation request");
                    return Err(e);
                }
                R::Reserve(self.bookings_mut().create(
                    request.holder_name,
                    request.party_size,
                    request.start,
                    request.duration,
                )?)
            }
            A::Cancel(id) => R::Cancel(self.bookings_mut().cancel(id)?),
            A::AttachOrder { reservation, item } => {
                R::AttachOrder(self.bookings_mut().attach_order(reservation, item)?.clone())
            }
            A::AttachComment { reservation, text } => {
                R::AttachComment(self.bookings_mut().attach_comment(reservation, text)?.clone())
            }
            A::GetReservation(id) => {
                R::GetReservation(self.bookings().reservations().find_by_id(id)?.clone())
            }
            A::ListReservations => {
                R::ListReservations(self.bookings().reservations().iter().cloned().collect())
            }
            A::ReservationsByName(name) => R::ReservationsByName(
                self.bookings()
                    .reservations()
                    .find_by_name(&name)
                    .cloned()
                    .collect(),
            ),
            A::ReservationsByTable(number) => R::ReservationsByTable(
                self.bookings()
                    .reservations()
                    .find_by_table(number)
                    .cloned()
                    .collect(),
            ),
            A::ReservationsByStart(start) => R::ReservationsByStart(
                self.bookings()
                    .reservations()
                    .find_by_start(start)
                    .cloned()
                    .collect(),
            ),
            A::BillableItems(id) => R::BillableItems(self.bookings().billable_items(id)?.to_vec()),
        };
        Ok(result)
    }
}
