use super::SystemConfig;
use crate::clients::RestaurantClient;
use crate::restaurant_actor;
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

/// The runtime orchestrator of the booking engine.
///
/// Owns the task running the restaurant actor and hands out [`RestaurantClient`]s.
/// Every restaurant shares that one actor, so all table and reservation changes are
/// applied one at a time in arrival order.
///
/// # Example
///
/// ```ignore
/// let system = RestaurantSystem::new();
/// let id = system.restaurant_client.create_restaurant("Trattoria").await?;
/// system.shutdown().await?;
/// ```
pub struct RestaurantSystem {
    /// Client for interacting with the Restaurant actor
    pub restaurant_client: RestaurantClient,

    handles: Vec<JoinHandle<()>>,
}

impl RestaurantSystem {
    /// Starts the system with [`SystemConfig::from_env`]. Must be called inside a
    /// tokio runtime.
    pub fn new() -> Self {
        Self::with_config(SystemConfig::from_env())
    }

    pub fn with_config(config: SystemConfig) -> Self {
        let (actor, generic_client) = restaurant_actor::new(config.mailbox_capacity);
        let restaurant_client = RestaurantClient::new(generic_client, config.min_meal_time());
        let handle = tokio::spawn(actor.run(()));

        info!(
            mailbox_capacity = config.mailbox_capacity,
            min_meal_time_minutes = config.min_meal_time_minutes,
            "Restaurant system started"
        );
        Self {
            restaurant_client,
            handles: vec![handle],
        }
    }

    /// Drops the system's client and waits for the actor to stop.
    ///
    /// The actor stops once every clone of the client is gone, so clones handed
    /// out earlier must be dropped first or this waits forever.
    pub async fn shutdown(self) -> Result<(), JoinError> {
        info!("Shutting down system...");
        drop(self.restaurant_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(e);
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

impl Default for RestaurantSystem {
    fn default() -> Self {
        Self::new()
    }
}
