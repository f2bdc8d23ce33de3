//! # Order Client
//!
//! High-level API over the order actor. Validation and state rules run inside
//! the actor; this client only translates results back into [`OrderError`].
use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Order, OrderId, OrderPayload};
use crate::order_actor::OrderError;
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, payload))]
    pub async fn create_order(&self, payload: OrderPayload) -> Result<Order, OrderError> {
        debug!(fields = ?payload.field_names(), "create_order called");
        let order = self.inner.create(payload).await.map_err(Self::map_error)?;
        info!(order_id = %order.id, "Order created");
        Ok(order)
    }

    pub async fn list_orders(&self) -> Result<Vec<Order>, OrderError> {
        self.list().await
    }

    pub async fn find_order(&self, id: OrderId) -> Result<Order, OrderError> {
        self.find(id).await
    }

    #[instrument(skip(self, payload))]
    pub async fn update_order(
        &self,
        id: OrderId,
        payload: OrderPayload,
    ) -> Result<Order, OrderError> {
        debug!(fields = ?payload.field_names(), "update_order called");
        self.inner.update(id, payload).await.map_err(Self::map_error)
    }

    pub async fn delete_order(&self, id: OrderId) -> Result<(), OrderError> {
        self.delete(id).await
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.into_entity_error::<OrderError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => OrderError::NotFound(id),
            Err(FrameworkError::EntityError(other)) => {
                OrderError::ActorCommunication(other.to_string())
            }
            Err(other) => OrderError::ActorCommunication(other.to_string()),
        }
    }

    fn not_found(id: &OrderId) -> Self::Error {
        OrderError::NotFound(id.to_string())
    }
}
