//! # System Lifecycle
//!
//! Starting, seeding and stopping the order actor, plus logging setup.
//!
//! ## Graceful Shutdown
//!
//! 1. **Stop accepting requests** - the HTTP server drains and drops its router,
//!    releasing the client clones it held
//! 2. **Drop the last client** - [`OrderSystem::shutdown`] drops its own copy
//! 3. **Actor exits** - `receiver.recv()` returns `None`, the final store size is logged
//! 4. **Await completion** - the actor's task handle is joined

pub mod order_system;
pub mod tracing;

pub use self::order_system::*;
pub use self::tracing::setup_tracing;
