//! Represents a customer order.
//!
//! # Actor Framework
//! [`Order`] implements the [`ActorEntity`](crate::framework::ActorEntity)
//! trait (see [`crate::order_actor::entity`]), so a
//! [`ResourceActor`](crate::framework::ResourceActor) owns every instance.
//!
//! - Creation and update payloads: [`OrderPayload`]
//! - Validated form of a payload: [`OrderDraft`]

use crate::model::Dish;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::Display;
use std::str::FromStr;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub String);

impl OrderId {
    /// A new random id: 32 lowercase hex characters.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for OrderId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for OrderId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where an order is in its delivery lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Preparing,
    OutForDelivery,
    Delivered,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::OutForDelivery => "out-for-delivery",
            OrderStatus::Delivered => "delivered",
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no [`OrderStatus`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown order status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for OrderStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub deliver_to: String,
    pub mobile_number: String,
    pub status: OrderStatus,
    pub dishes: Vec<Dish>,
}

impl Order {
    /// Builds a stored order from an id and a validated draft.
    pub fn from_draft(id: OrderId, draft: OrderDraft) -> Self {
        Self {
            id,
            deliver_to: draft.deliver_to,
            mobile_number: draft.mobile_number,
            status: draft.status,
            dishes: draft.dishes,
        }
    }

    /// Overwrites every mutable field. The id never changes.
    pub fn apply(&mut self, draft: OrderDraft) {
        self.deliver_to = draft.deliver_to;
        self.mobile_number = draft.mobile_number;
        self.status = draft.status;
        self.dishes = draft.dishes;
    }
}

/// The mutable fields of an order after validation.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDraft {
    pub deliver_to: String,
    pub mobile_number: String,
    pub status: OrderStatus,
    pub dishes: Vec<Dish>,
}

/// The `data` object of a create or update request, before validation.
///
/// Every field is kept as raw JSON so the validation rules can tell a missing
/// field from an empty or mistyped one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderPayload {
    pub id: Option<Value>,
    pub deliver_to: Option<Value>,
    pub mobile_number: Option<Value>,
    pub status: Option<Value>,
    pub dishes: Option<Value>,
}

impl OrderPayload {
    /// Names of the fields the caller sent, for logging without the values.
    pub fn field_names(&self) -> Vec<&'static str> {
        [
            ("id", &self.id),
            ("deliverTo", &self.deliver_to),
            ("mobileNumber", &self.mobile_number),
            ("status", &self.status),
            ("dishes", &self.dishes),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_some())
        .map(|(name, _)| name)
        .collect()
    }
}
