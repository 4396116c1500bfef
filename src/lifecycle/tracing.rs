//! # Tracing Setup
//!
//! Every actor logs through `tracing` with structured fields. The request kind and the
//! entity type (`entity_type = "Restaurant"`) are fields rather than module targets,
//! so output stays short:
//!
//! ```text
//! INFO Actor started entity_type="Restaurant"
//! INFO Created entity_type="Restaurant" id=restaurant_1 size=1
//! WARN Action failed entity_type="Restaurant" id=restaurant_1 error=No table with at least 6 seats is free ...
//! ```
//!
//! `RUST_LOG` takes precedence over the directive passed to [`setup_tracing`]:
//!
//! ```bash
//! RUST_LOG=debug cargo run     # payloads of every request
//! RUST_LOG=warn cargo run      # rejected requests only
//! ```

use tracing_subscriber::EnvFilter;

/// Installs the global compact subscriber.
///
/// `default_directive` (e.g. `"info"`) is used when `RUST_LOG` is unset or invalid.
/// Call once per process.
pub fn setup_tracing(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_installs_global_subscriber() {
        setup_tracing("table_booking=debug");
        assert!(::tracing::dispatcher::has_been_set());
    }
}
