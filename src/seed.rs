//! Startup data: orders to preload into the actor and the dish catalog.
//!
//! ```json
//! {
//!   "orders": [{ "id": "1", "deliverTo": "...", "mobileNumber": "...",
//!                "status": "pending", "dishes": [{ "name": "...", "quantity": 1 }] }],
//!   "dishes": [{ "id": "d1", "name": "...", "price": 12.5 }]
//! }
//! ```

use crate::model::{MenuItem, Order};
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub orders: Vec<Order>,
    #[serde(default)]
    pub dishes: Vec<MenuItem>,
}

/// Reads and checks a seed file.
///
/// Seeded orders must satisfy the same invariants as created ones: unique
/// ids, at least one dish, positive quantities.
pub fn load(path: &Path) -> Result<SeedData> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("read seed file {}", path.display()))?;
    let seed: SeedData = serde_json::from_str(&raw)
        .with_context(|| format!("parse seed file {}", path.display()))?;
    check(&seed)?;
    Ok(seed)
}

fn check(seed: &SeedData) -> Result<()> {
    let mut ids = HashSet::new();
    for order in &seed.orders {
        if !ids.insert(order.id.as_str()) {
            bail!("SEED_DUPLICATE_ID: order {} appears more than once", order.id);
        }
        if order.dishes.is_empty() {
            bail!("SEED_INVALID_ORDER: order {} has no dishes", order.id);
        }
        if let Some(index) = order.dishes.iter().position(|dish| dish.quantity == 0) {
            bail!("SEED_INVALID_ORDER: order {} dish {index} has quantity 0", order.id);
        }
    }
    Ok(())
}
