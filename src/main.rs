//! Demo run of the booking engine: one restaurant, a lunch rush and a cancellation.

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use table_booking::lifecycle::{setup_tracing, RestaurantSystem, SystemConfig};
use table_booking::model::{Course, DrinkSize, OrderItem, ReservationRequest, TableNumber};
use table_booking::restaurant_actor::RestaurantError;
use tracing::{info, warn, Instrument};

fn lunch_at(hour: u32, minute: u32) -> Result<NaiveDateTime, Box<dyn std::error::Error>> {
    NaiveDate::from_ymd_opt(2024, 6, 14)
        .and_then(|day| day.and_hms_opt(hour, minute, 0))
        .ok_or_else(|| format!("invalid time {hour}:{minute:02}").into())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = SystemConfig::from_env();
    setup_tracing(&config.log_directive);

    info!("Starting restaurant system");
    let system = RestaurantSystem::with_config(config);
    let client = system.restaurant_client.clone();

    let id = client.create_restaurant("Trattoria").await?;
    for (number, seats) in [(1, 2), (2, 4), (3, 4), (4, 8)] {
        client.add_table(id, TableNumber(number), seats).await?;
    }

    let span = tracing::info_span!("lunch_rush", restaurant = %id);
    async {
        let hour = TimeDelta::hours(1);
        let guests = [
            ("Maya", 2, lunch_at(12, 0)?),
            ("Omer", 4, lunch_at(12, 0)?),
            ("Lior", 3, lunch_at(12, 30)?),
            ("Dana", 4, lunch_at(12, 30)?),
            ("Yoni", 6, lunch_at(13, 0)?),
            ("Tal", 10, lunch_at(13, 0)?),
        ];

        for (name, party_size, start) in guests {
            let request = ReservationRequest::new(name, party_size, start, hour);
            match client.reserve(id, request).await {
                Ok(r) => info!(reservation = %r.id, table = %r.table_number, name, "Booked"),
                Err(RestaurantError::Booking(e)) => warn!(name, error = %e, "Turned away"),
                Err(e) => return Err(e.into()),
            }
        }
        Ok::<_, Box<dyn std::error::Error>>(())
    }
    .instrument(span)
    .await?;

    let maya = client
        .reservations_by_name(id, "Maya")
        .await?
        .into_iter()
        .next()
        .ok_or("Maya has no reservation")?;
    client
        .attach_order(id, maya.id, OrderItem::course(Course::MainCourse, "Risotto", 58.0))
        .await?;
    client
        .attach_order(id, maya.id, OrderItem::drink("Lemonade", 14.0, true, DrinkSize::Large))
        .await?;
    client.attach_comment(id, maya.id, "Window seat if possible").await?;

    let items = client.billable_items(id, maya.id).await?;
    let subtotal: f64 = items.iter().map(OrderItem::price).sum();
    info!(reservation = %maya.id, items = items.len(), subtotal, "Items ready for the bill");

    let cancelled = client.cancel(id, maya.id).await?;
    info!(reservation = %cancelled.id, table = %cancelled.table_number, "Cancelled");

    for r in client.reservations(id).await? {
        info!(
            reservation = %r.id,
            table = %r.table_number,
            holder = %r.holder_name,
            start = %r.start,
            end = %r.end(),
            "Active reservation"
        );
    }

    drop(client);
    system.shutdown().await?;
    Ok(())
}
