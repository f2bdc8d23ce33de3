use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A dish as it appears inside an order, with the requested quantity.
///
/// Only `quantity` is typed and checked (see
/// [`crate::order_actor::validation`]). Every other field the caller sent
/// (`id`, `name`, `price`, anything else) is kept verbatim in `details` and
/// written back out unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    pub quantity: u64,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl Dish {
    pub fn new(quantity: u64) -> Self {
        Self {
            quantity,
            details: Map::new(),
        }
    }

    /// Adds or replaces a descriptive field.
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.details.insert(key.to_string(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.details.get(key)
    }
}

/// An entry in the read-only dish catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub image_url: String,
}
