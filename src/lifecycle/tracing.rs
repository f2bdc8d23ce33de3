//! # Observability & Tracing
//!
//! Structured logging for the whole service.
//!
//! ## What Gets Traced
//!
//! - **Actor lifecycle**: startup (with seeded size) and shutdown
//! - **Store operations**: Create, List, Get, Update, Delete with `entity_type` and `id`
//! - **Client calls**: `#[instrument]` spans around order client methods
//! - **HTTP**: one span per request from `tower_http::trace::TraceLayer`
//!
//! ## Usage Examples
//!
//! ```bash
//! # Default level comes from --log-level / ORDER_API_LOG
//! cargo run
//!
//! # RUST_LOG wins when set
//! RUST_LOG=debug cargo run
//! RUST_LOG=order_api::framework=debug,tower_http=info cargo run
//! ```
//!
//! With `debug`, payloads are logged once on entry:
//!
//! ```text
//! DEBUG create_order: create_order called payload=OrderPayload { .. }
//! DEBUG Create entity_type="Order" params=OrderPayload { .. }
//! INFO Created entity_type="Order" id=5f0c... size=3
//! ```

use tracing_subscriber::EnvFilter;

/// Initializes the global subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `default_directive` (e.g. `"info"`)
/// is used.
pub fn setup_tracing(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
