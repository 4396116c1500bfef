use chrono::{NaiveDate, TimeDelta};
use resource_actor::mock::MockClient;
use resource_actor::FrameworkError;
use table_booking::booking::BookingError;
use table_booking::clients::RestaurantClient;
use table_booking::model::{
    Restaurant, RestaurantId, ReservationId, ReservationRequest, Table, TableNumber,
};
use table_booking::restaurant_actor::{RestaurantActionResult, RestaurantError};

fn client(mock: &MockClient<Restaurant>) -> RestaurantClient {
    RestaurantClient::new(mock.client(), TimeDelta::minutes(30))
}

fn restaurant(id: u32, name: &str) -> Restaurant {
    Restaurant::new(RestaurantId(id), name, TimeDelta::minutes(30))
}

#[tokio::test]
async fn test_find_restaurant_by_name() {
    let mut mock = MockClient::<Restaurant>::new();
    mock.expect_list()
        .return_ok(vec![restaurant(1, "Alpha"), restaurant(2, "Beta")]);
    mock.expect_list().return_ok(vec![restaurant(1, "Alpha")]);

    let client = client(&mock);
    assert_eq!(
        client.find_restaurant("Beta").await.unwrap().id,
        RestaurantId(2)
    );
    assert_eq!(
        client.find_restaurant("Beta").await.unwrap_err(),
        RestaurantError::NotFound("Beta".to_string())
    );

    mock.verify();
}

#[tokio::test]
async fn test_delete_restaurant_resolves_name_first() {
    let mut mock = MockClient::<Restaurant>::new();
    mock.expect_list().return_ok(vec![restaurant(7, "Gamma")]);
    mock.expect_delete(RestaurantId(7)).return_ok(());

    client(&mock).delete_restaurant("Gamma").await.unwrap();
    mock.verify();
}

#[tokio::test]
async fn test_duplicate_name_surfaces_as_already_exists() {
    let mut mock = MockClient::<Restaurant>::new();
    mock.expect_create()
        .return_err(FrameworkError::AlreadyExists("Alpha".to_string()));

    assert_eq!(
        client(&mock).create_restaurant("Alpha").await.unwrap_err(),
        RestaurantError::AlreadyExists("Alpha".to_string())
    );
    mock.verify();
}

#[tokio::test]
async fn test_booking_error_keeps_its_kind() {
    let mut mock = MockClient::<Restaurant>::new();
    let start = NaiveDate::from_ymd_opt(2024, 6, 14)
        .unwrap()
        .and_hms_opt(20, 0, 0)
        .unwrap();
    let end = start + TimeDelta::hours(2);
    let refusal = RestaurantError::Booking(BookingError::NoAvailableTable {
        party_size: 12,
        start,
        end,
    });
    mock.expect_action(RestaurantId(1))
        .return_err(FrameworkError::EntityError(Box::new(refusal.clone())));

    let request = ReservationRequest::new("Big table", 12, start, TimeDelta::hours(2));
    let result = client(&mock).reserve(RestaurantId(1), request).await;
    assert_eq!(result.unwrap_err(), refusal);
    mock.verify();
}

#[tokio::test]
async fn test_action_results_are_unwrapped() {
    let mut mock = MockClient::<Restaurant>::new();
    mock.expect_action(RestaurantId(1))
        .return_ok(RestaurantActionResult::AddTable(Table::new(TableNumber(4), 6)));
    mock.expect_action(RestaurantId(1))
        .return_ok(RestaurantActionResult::ListTables(vec![Table::new(TableNumber(4), 6)]));

    let client = client(&mock);
    let table = client
        .add_table(RestaurantId(1), TableNumber(4), 6)
        .await
        .unwrap();
    assert_eq!(table, Table::new(TableNumber(4), 6));
    assert_eq!(
        client.tables(RestaurantId(1)).await.unwrap(),
        [Table::new(TableNumber(4), 6)]
    );
    mock.verify();
}

#[tokio::test]
async fn test_request_for_wrong_restaurant_is_reported() {
    let mut mock = MockClient::<Restaurant>::new();
    mock.expect_action(RestaurantId(1))
        .return_ok(RestaurantActionResult::Cancel(
            table_booking::model::Reservation::new(
                ReservationId(1),
                "Ana",
                TableNumber(1),
                NaiveDate::from_ymd_opt(2024, 6, 14)
                    .unwrap()
                    .and_hms_opt(12, 0, 0)
                    .unwrap(),
                TimeDelta::hours(1),
            ),
        ));

    let result = client(&mock)
        .cancel(RestaurantId(2), ReservationId(1))
        .await;
    assert!(matches!(
        result,
        Err(RestaurantError::ActorCommunicationError(_))
    ));

    let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| mock.verify()));
    assert!(outcome.is_err());
}
