//! Shared state handed to every handler.

use crate::clients::OrderClient;
use crate::model::MenuItem;

pub struct AppState {
    /// Handle to the order actor.
    pub orders: OrderClient,
    /// The read-only dish catalog.
    pub menu: Vec<MenuItem>,
}

impl AppState {
    pub fn new(orders: OrderClient, menu: Vec<MenuItem>) -> Self {
        Self { orders, menu }
    }
}
