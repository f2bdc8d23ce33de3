//! HTTP surface: router, handlers, wire types and error mapping.
//!
//! | Method | Path | Success |
//! |---|---|---|
//! | GET | `/orders` | 200 `{data: [Order]}` |
//! | POST | `/orders` | 201 `{data: Order}` |
//! | GET | `/orders/:orderId` | 200 `{data: Order}` |
//! | PUT | `/orders/:orderId` | 200 `{data: Order}` |
//! | DELETE | `/orders/:orderId` | 204 |
//! | GET | `/dishes` | 200 `{data: [MenuItem]}` |

pub mod api_types;
pub mod error;
pub mod routes;
pub mod state;

pub use routes::build_router;
pub use state::AppState;
