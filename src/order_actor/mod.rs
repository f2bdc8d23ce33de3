//! # Order Actor
//!
//! The resource actor that owns every order.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Order`]
//! - [`validation`] - the ordered rule pipelines for create and update payloads
//! - [`error`] - [`OrderError`] and its [`ErrorKind`] classification
//! - [`new()`] - factory that creates the actor and its client
//!
//! ## Usage
//!
//! ```rust
//! use order_api::clients::OrderClient;
//! use order_api::model::OrderPayload;
//! use order_api::order_actor;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = order_actor::new(32);
//!     let client = OrderClient::new(generic_client);
//!     tokio::spawn(actor.run(()));
//!
//!     let payload: OrderPayload = serde_json::from_value(json!({
//!         "deliverTo": "1 Main St",
//!         "mobileNumber": "555-0100",
//!         "dishes": [{ "name": "Soup", "quantity": 1 }]
//!     }))?;
//!     let order = client.create_order(payload).await?;
//!     assert_eq!(client.list_orders().await?, vec![order]);
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;
pub mod validation;

pub use error::*;

use crate::framework::{ResourceActor, ResourceClient};
use crate::model::{Order, OrderId};

/// Creates a new Order actor and its client. Ids are random hex strings.
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, ResourceClient<Order>) {
    ResourceActor::new(buffer_size, OrderId::generate)
}
