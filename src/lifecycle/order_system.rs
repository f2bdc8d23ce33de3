use crate::clients::OrderClient;
use crate::model::Order;
use tracing::{error, info};

/// Owns the running order actor and the client used to reach it.
pub struct OrderSystem {
    pub order_client: OrderClient,

    handle: tokio::task::JoinHandle<()>,
}

impl OrderSystem {
    /// Creates the order actor, preloads `seed`, and spawns it.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn start(buffer_size: usize, seed: Vec<Order>) -> Self {
        let (order_actor, generic_client) = crate::order_actor::new(buffer_size);
        let handle = tokio::spawn(order_actor.with_entities(seed).run(()));

        Self {
            order_client: OrderClient::new(generic_client),
            handle,
        }
    }

    /// Drops this system's client and waits for the actor to drain.
    ///
    /// Any other clones of the client (e.g. inside a router) must be dropped
    /// first, or this waits for them.
    pub async fn shutdown(self) -> Result<(), tokio::task::JoinError> {
        info!("Shutting down order system...");

        // The actor's receive loop ends once the last sender is gone.
        drop(self.order_client);

        if let Err(e) = self.handle.await {
            error!(error = %e, "Order actor task failed");
            return Err(e);
        }

        info!("Order system shutdown complete.");
        Ok(())
    }
}
