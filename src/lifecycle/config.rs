use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

use crate::model::DEFAULT_MIN_MEAL_TIME_MINUTES;

/// Requests that may queue in the restaurant actor's mailbox.
pub const DEFAULT_MAILBOX_CAPACITY: usize = 32;
/// Tracing directive used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_DIRECTIVE: &str = "info";

/// Runtime settings of a [`RestaurantSystem`](super::RestaurantSystem).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemConfig {
    pub mailbox_capacity: usize,
    /// Minimum meal time given to restaurants created without one.
    pub min_meal_time_minutes: i64,
    pub log_directive: String,
}

impl Default for SystemConfig {
    fn default() -> Self {
        SystemConfig {
            mailbox_capacity: DEFAULT_MAILBOX_CAPACITY,
            min_meal_time_minutes: DEFAULT_MIN_MEAL_TIME_MINUTES,
            log_directive: DEFAULT_LOG_DIRECTIVE.to_string(),
        }
    }
}

impl SystemConfig {
    /// Creates a SystemConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `BOOKING_MAILBOX_CAPACITY`: actor mailbox size
    /// - `BOOKING_MIN_MEAL_MINUTES`: default minimum meal time in minutes
    /// - `BOOKING_LOG`: default tracing directive (e.g. "debug")
    ///
    /// Unparseable or non-positive values are ignored.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env), reading variables through `var`.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = SystemConfig::default();

        if let Some(capacity) = var("BOOKING_MAILBOX_CAPACITY") {
            if let Ok(capacity) = capacity.trim().parse::<usize>() {
                if capacity > 0 {
                    config.mailbox_capacity = capacity;
                }
            }
        }

        if let Some(minutes) = var("BOOKING_MIN_MEAL_MINUTES") {
            if let Ok(minutes) = minutes.trim().parse::<i64>() {
                if minutes > 0 {
                    config.min_meal_time_minutes = minutes;
                }
            }
        }

        if let Some(directive) = var("BOOKING_LOG") {
            if !directive.trim().is_empty() {
                config.log_directive = directive.trim().to_string();
            }
        }

        config
    }

    pub fn min_meal_time(&self) -> TimeDelta {
        TimeDelta::minutes(self.min_meal_time_minutes)
    }
}
