//! # Restaurant Client
//!
//! Provides a high-level API for interacting with the `Restaurant` actor.
//! It wraps a `ResourceClient<Restaurant>` and exposes one method per restaurant
//! operation, each returning the exact payload of its action result.
use crate::model::{
    OrderItem, Reservation, ReservationId, ReservationRequest, Restaurant, RestaurantCreate,
    RestaurantId, RestaurantUpdate, Table, TableNumber,
};
use crate::restaurant_actor::{RestaurantAction, RestaurantActionResult, RestaurantError};
use async_trait::async_trait;
use chrono::{NaiveDateTime, TimeDelta};
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Unwraps the result variant an action is expected to produce.
macro_rules! expect_result {
    ($result:expr, $variant:ident) => {
        match $result {
            RestaurantActionResult::$variant(value) => Ok(value),
            other => Err(RestaurantError::UnexpectedResult(format!(
                "expected {}, got {other:?}",
                stringify!($variant)
            ))),
        }
    };
}

/// Client for interacting with the Restaurant actor.
///
/// Restaurants are addressed by [`RestaurantId`] for table and reservation calls and
/// by name for lookup and deletion.
#[derive(Clone)]
pub struct RestaurantClient {
    inner: ResourceClient<Restaurant>,
    default_min_meal_time: TimeDelta,
}

#[async_trait]
impl ActorClient<Restaurant> for RestaurantClient {
    type Error = RestaurantError;

    fn inner(&self) -> &ResourceClient<Restaurant> {
        &self.inner
    }

    /// Recovers the entity's own error from the framework wrapper.
    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::EntityError(source) => match source.downcast::<RestaurantError>() {
                Ok(error) => *error,
                Err(other) => RestaurantError::ActorCommunicationError(other.to_string()),
            },
            FrameworkError::NotFound(id) => RestaurantError::NotFound(id),
            FrameworkError::AlreadyExists(name) => RestaurantError::AlreadyExists(name),
            e @ (FrameworkError::ActorClosed | FrameworkError::ActorDropped) => {
                RestaurantError::ActorCommunicationError(e.to_string())
            }
        }
    }
}

impl RestaurantClient {
    /// `default_min_meal_time` applies to restaurants created by
    /// [`create_restaurant`](Self::create_restaurant).
    pub fn new(inner: ResourceClient<Restaurant>, default_min_meal_time: TimeDelta) -> Self {
        Self {
            inner,
            default_min_meal_time,
        }
    }

    async fn act(
        &self,
        id: RestaurantId,
        action: RestaurantAction,
    ) -> Result<RestaurantActionResult, RestaurantError> {
        self.inner
            .perform_action(id, action)
            .await
            .map_err(Self::map_error)
    }

    /// Opens a restaurant with the default minimum meal time.
    #[instrument(skip(self))]
    pub async fn create_restaurant(&self, name: &str) -> Result<RestaurantId, RestaurantError> {
        self.create_restaurant_with(
            RestaurantCreate::new(name).with_min_meal_time(self.default_min_meal_time),
        )
        .await
    }

    #[instrument(skip(self))]
    pub async fn create_restaurant_with(
        &self,
        params: RestaurantCreate,
    ) -> Result<RestaurantId, RestaurantError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Looks a restaurant up by name. Surrounding whitespace is ignored, as on creation.
    #[instrument(skip(self))]
    pub async fn find_restaurant(&self, name: &str) -> Result<Restaurant, RestaurantError> {
        let name = name.trim();
        self.list()
            .await?
            .into_iter()
            .find(|r| r.name == name)
            .ok_or_else(|| RestaurantError::NotFound(name.to_string()))
    }

    /// Every restaurant, in creation order.
    pub async fn list_restaurants(&self) -> Result<Vec<Restaurant>, RestaurantError> {
        self.list().await
    }

    /// Closes a restaurant together with its tables and reservations.
    #[instrument(skip(self))]
    pub async fn delete_restaurant(&self, name: &str) -> Result<(), RestaurantError> {
        let restaurant = self.find_restaurant(name).await?;
        self.delete(restaurant.id).await
    }

    #[instrument(skip(self))]
    pub async fn set_min_meal_time(
        &self,
        id: RestaurantId,
        min_meal_time: TimeDelta,
    ) -> Result<Restaurant, RestaurantError> {
        let update = RestaurantUpdate {
            min_meal_time: Some(min_meal_time),
        };
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn add_table(
        &self,
        id: RestaurantId,
        number: TableNumber,
        seats: u32,
    ) -> Result<Table, RestaurantError> {
        let result = self
            .act(id, RestaurantAction::AddTable { number, seats })
            .await?;
        expect_result!(result, AddTable)
    }

    #[instrument(skip(self))]
    pub async fn remove_table(
        &self,
        id: RestaurantId,
        number: TableNumber,
    ) -> Result<Table, RestaurantError> {
        let result = self.act(id, RestaurantAction::RemoveTable(number)).await?;
        expect_result!(result, RemoveTable)
    }

    pub async fn table(
        &self,
        id: RestaurantId,
        number: TableNumber,
    ) -> Result<Table, RestaurantError> {
        let result = self.act(id, RestaurantAction::GetTable(number)).await?;
        expect_result!(result, GetTable)
    }

    /// All tables in registration order.
    pub async fn tables(&self, id: RestaurantId) -> Result<Vec<Table>, RestaurantError> {
        let result = self.act(id, RestaurantAction::ListTables).await?;
        expect_result!(result, ListTables)
    }

    pub async fn tables_with_seats(
        &self,
        id: RestaurantId,
        seats: u32,
    ) -> Result<Vec<Table>, RestaurantError> {
        let result = self.act(id, RestaurantAction::TablesWithSeats(seats)).await?;
        expect_result!(result, TablesWithSeats)
    }

    /// The table a reservation for this party and window would get, without booking it.
    #[instrument(skip(self))]
    pub async fn find_available_table(
        &self,
        id: RestaurantId,
        party_size: u32,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Table, RestaurantError> {
        let action = RestaurantAction::FindAvailableTable {
            party_size,
            start,
            end,
        };
        let result = self.act(id, action).await?;
        expect_result!(result, FindAvailableTable)
    }

    /// Books the first free table that seats the party.
    #[instrument(skip(self))]
    pub async fn reserve(
        &self,
        id: RestaurantId,
        request: ReservationRequest,
    ) -> Result<Reservation, RestaurantError> {
        debug!("Sending request");
        let result = self.act(id, RestaurantAction::Reserve(request)).await?;
        expect_result!(result, Reserve)
    }

    #[instrument(skip(self))]
    pub async fn cancel(
        &self,
        id: RestaurantId,
        reservation: ReservationId,
    ) -> Result<Reservation, RestaurantError> {
        let result = self.act(id, RestaurantAction::Cancel(reservation)).await?;
        expect_result!(result, Cancel)
    }

    #[instrument(skip(self))]
    pub async fn attach_order(
        &self,
        id: RestaurantId,
        reservation: ReservationId,
        item: OrderItem,
    ) -> Result<Reservation, RestaurantError> {
        let result = self
            .act(id, RestaurantAction::AttachOrder { reservation, item })
            .await?;
        expect_result!(result, AttachOrder)
    }

    #[instrument(skip(self))]
    pub async fn attach_comment(
        &self,
        id: RestaurantId,
        reservation: ReservationId,
        text: &str,
    ) -> Result<Reservation, RestaurantError> {
        let action = RestaurantAction::AttachComment {
            reservation,
            text: text.to_string(),
        };
        let result = self.act(id, action).await?;
        expect_result!(result, AttachComment)
    }

    pub async fn reservation(
        &self,
        id: RestaurantId,
        reservation: ReservationId,
    ) -> Result<Reservation, RestaurantError> {
        let result = self
            .act(id, RestaurantAction::GetReservation(reservation))
            .await?;
        expect_result!(result, GetReservation)
    }

    /// Active reservations in booking order.
    pub async fn reservations(&self, id: RestaurantId) -> Result<Vec<Reservation>, RestaurantError> {
        let result = self.act(id, RestaurantAction::ListReservations).await?;
        expect_result!(result, ListReservations)
    }

    pub async fn reservations_by_name(
        &self,
        id: RestaurantId,
        name: &str,
    ) -> Result<Vec<Reservation>, RestaurantError> {
        let action = RestaurantAction::ReservationsByName(name.to_string());
        let result = self.act(id, action).await?;
        expect_result!(result, ReservationsByName)
    }

    pub async fn reservations_by_table(
        &self,
        id: RestaurantId,
        number: TableNumber,
    ) -> Result<Vec<Reservation>, RestaurantError> {
        let result = self
            .act(id, RestaurantAction::ReservationsByTable(number))
            .await?;
        expect_result!(result, ReservationsByTable)
    }

    pub async fn reservations_by_start(
        &self,
        id: RestaurantId,
        start: NaiveDateTime,
    ) -> Result<Vec<Reservation>, RestaurantError> {
        let result = self
            .act(id, RestaurantAction::ReservationsByStart(start))
            .await?;
        expect_result!(result, ReservationsByStart)
    }

    /// Ordered items for the bill, in the order they were attached.
    #[instrument(skip(self))]
    pub async fn billable_items(
        &self,
        id: RestaurantId,
        reservation: ReservationId,
    ) -> Result<Vec<OrderItem>, RestaurantError> {
        let result = self
            .act(id, RestaurantAction::BillableItems(reservation))
            .await?;
        expect_result!(result, BillableItems)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::BookingError;
    use chrono::NaiveDate;
    use resource_actor::mock::{create_mock_client, expect_action, expect_create};

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 14)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_restaurant_uses_default_meal_time() {
        let (client, mut receiver) = create_mock_client::<Restaurant>(10);
        let client = RestaurantClient::new(client, TimeDelta::minutes(45));

        let task = tokio::spawn(async move { client.create_restaurant("Bistro").await });

        let (params, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(params.name, "Bistro");
        assert_eq!(params.min_meal_time, TimeDelta::minutes(45));
        responder.send(Ok(RestaurantId(3))).unwrap();

        assert_eq!(task.await.unwrap().unwrap(), RestaurantId(3));
    }

    #[tokio::test]
    async fn test_reserve_sends_request_and_returns_reservation() {
        let (client, mut receiver) = create_mock_client::<Restaurant>(10);
        let client = RestaurantClient::new(client, TimeDelta::minutes(30));

        let request = ReservationRequest::new("Ana", 2, at(12, 0), TimeDelta::hours(1));
        let task = tokio::spawn(async move { client.reserve(RestaurantId(1), request).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, RestaurantId(1));
        let sent = match action {
            RestaurantAction::Reserve(request) => request,
            other => panic!("Expected Reserve action, got {other:?}"),
        };
        assert_eq!(sent.party_size, 2);

        let booked = Reservation::new(
            ReservationId(1),
            sent.holder_name,
            TableNumber(5),
            sent.start,
            sent.duration,
        );
        responder
            .send(Ok(RestaurantActionResult::Reserve(booked.clone())))
            .unwrap();

        assert_eq!(task.await.unwrap().unwrap(), booked);
    }

    #[tokio::test]
    async fn test_entity_error_is_downcast() {
        let (client, mut receiver) = create_mock_client::<Restaurant>(10);
        let client = RestaurantClient::new(client, TimeDelta::minutes(30));

        let task = tokio::spawn(async move { client.cancel(RestaurantId(1), ReservationId(9)).await });

        let (_, _, responder) = expect_action(&mut receiver).await.unwrap();
        let error = RestaurantError::Booking(BookingError::ReservationNotFound(ReservationId(9)));
        responder
            .send(Err(FrameworkError::EntityError(Box::new(error.clone()))))
            .unwrap();

        assert_eq!(task.await.unwrap().unwrap_err(), error);
    }

    #[tokio::test]
    async fn test_mismatched_result_is_reported() {
        let (client, mut receiver) = create_mock_client::<Restaurant>(10);
        let client = RestaurantClient::new(client, TimeDelta::minutes(30));

        let task = tokio::spawn(async move { client.tables(RestaurantId(1)).await });

        let (_, _, responder) = expect_action(&mut receiver).await.unwrap();
        responder
            .send(Ok(RestaurantActionResult::ListReservations(vec![])))
            .unwrap();

        assert!(matches!(
            task.await.unwrap(),
            Err(RestaurantError::UnexpectedResult(_))
        ));
    }

    #[test]
    fn test_framework_errors_map_to_kinds() {
        assert_eq!(
            RestaurantClient::map_error(FrameworkError::NotFound("restaurant_4".into())),
            RestaurantError::NotFound("restaurant_4".into())
        );
        assert_eq!(
            RestaurantClient::map_error(FrameworkError::AlreadyExists("Bistro".into())),
            RestaurantError::AlreadyExists("Bistro".into())
        );
        assert!(matches!(
            RestaurantClient::map_error(FrameworkError::ActorClosed),
            RestaurantError::ActorCommunicationError(_)
        ));
        let foreign = FrameworkError::EntityError(Box::new(std::io::Error::other("disk")));
        assert_eq!(
            RestaurantClient::map_error(foreign),
            RestaurantError::ActorCommunicationError("disk".into())
        );
    }
}
