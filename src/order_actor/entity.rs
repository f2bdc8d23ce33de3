//! [`ActorEntity`] implementation for [`Order`].
//!
//! Every rule that depends on the stored state (delivered orders are frozen,
//! only pending orders can be deleted) lives in these hooks, so it is checked
//! and acted on within one actor turn.

use crate::framework::ActorEntity;
use crate::model::{Order, OrderId, OrderPayload, OrderStatus};
use crate::order_actor::{validation, OrderError};
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderPayload;
    type Update = OrderPayload;
    type Context = ();
    type Error = OrderError;

    fn id(&self) -> &OrderId {
        &self.id
    }

    fn from_create_params(id: OrderId, params: OrderPayload) -> Result<Self, Self::Error> {
        let draft = validation::validate_create(&params)?;
        Ok(Order::from_draft(id, draft))
    }

    /// Validates the payload, then refuses to touch a delivered order.
    async fn on_update(
        &mut self,
        update: OrderPayload,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        let draft = validation::validate_update(&self.id, &update)?;
        if self.status == OrderStatus::Delivered {
            return Err(OrderError::Delivered);
        }
        self.apply(draft);
        Ok(())
    }

    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        if self.status != OrderStatus::Pending {
            return Err(OrderError::NotPending);
        }
        Ok(())
    }
}
