//! Validation pipeline for order payloads.
//!
//! Each rule is a pure function over a [`Submission`]. A verb's rules are an
//! ordered slice run by [`dispatch`], which stops at the first failure, so the
//! caller always hears about the earliest problem in rule order.
//!
//! Field presence follows JSON truthiness: `null`, `false`, `0` and `""`
//! count as missing, while arrays and objects (even empty ones) count as
//! present. An empty `dishes` array therefore passes [`has_dishes`] and is
//! caught by [`dishes_not_empty`].

use crate::model::{Dish, OrderDraft, OrderId, OrderPayload, OrderStatus};
use crate::order_actor::OrderError;
use serde_json::Value;

/// What a rule gets to look at: the payload, plus the route id on update.
#[derive(Debug, Clone, Copy)]
pub struct Submission<'a> {
    pub payload: &'a OrderPayload,
    pub route_id: Option<&'a OrderId>,
}

/// A single validation step.
pub type Rule = fn(&Submission<'_>) -> Result<(), OrderError>;

pub const CREATE_RULES: &[Rule] = &[
    has_deliver_to,
    has_mobile_number,
    has_dishes,
    dishes_not_empty,
    dish_quantities_valid,
    status_valid_if_present,
];

pub const UPDATE_RULES: &[Rule] = &[
    has_deliver_to,
    has_mobile_number,
    has_status,
    has_dishes,
    id_matches_route,
    dishes_not_empty,
    dish_quantities_valid,
    status_valid,
];

/// Runs `rules` in order, halting on the first error.
pub fn dispatch(rules: &[Rule], submission: &Submission<'_>) -> Result<(), OrderError> {
    rules.iter().try_for_each(|rule| rule(submission))
}

/// Validates a create payload. An absent status defaults to pending.
pub fn validate_create(payload: &OrderPayload) -> Result<OrderDraft, OrderError> {
    let submission = Submission {
        payload,
        route_id: None,
    };
    dispatch(CREATE_RULES, &submission)?;
    draft(payload)
}

/// Validates an update payload against the id in the route.
pub fn validate_update(route_id: &OrderId, payload: &OrderPayload) -> Result<OrderDraft, OrderError> {
    let submission = Submission {
        payload,
        route_id: Some(route_id),
    };
    dispatch(UPDATE_RULES, &submission)?;
    draft(payload)
}

// --- Rules ---

pub fn has_deliver_to(s: &Submission<'_>) -> Result<(), OrderError> {
    require(&s.payload.deliver_to, "deliverTo")
}

pub fn has_mobile_number(s: &Submission<'_>) -> Result<(), OrderError> {
    require(&s.payload.mobile_number, "mobileNumber")
}

pub fn has_status(s: &Submission<'_>) -> Result<(), OrderError> {
    require(&s.payload.status, "status")
}

pub fn has_dishes(s: &Submission<'_>) -> Result<(), OrderError> {
    require(&s.payload.dishes, "dishes")
}

pub fn dishes_not_empty(s: &Submission<'_>) -> Result<(), OrderError> {
    match &s.payload.dishes {
        Some(Value::Array(dishes)) if !dishes.is_empty() => Ok(()),
        _ => Err(OrderError::NoDishes),
    }
}

pub fn dish_quantities_valid(s: &Submission<'_>) -> Result<(), OrderError> {
    let Some(Value::Array(dishes)) = &s.payload.dishes else {
        return Ok(());
    };
    match dishes
        .iter()
        .position(|dish| dish.get("quantity").and_then(positive_quantity).is_none())
    {
        Some(index) => Err(OrderError::InvalidQuantity(index)),
        None => Ok(()),
    }
}

pub fn id_matches_route(s: &Submission<'_>) -> Result<(), OrderError> {
    let (Some(body_id), Some(route_id)) = (&s.payload.id, s.route_id) else {
        return Ok(());
    };
    if !is_truthy(body_id) {
        return Ok(());
    }
    match body_id {
        Value::String(id) if id == route_id.as_str() => Ok(()),
        other => Err(OrderError::IdMismatch {
            body: display_value(other),
            route: route_id.to_string(),
        }),
    }
}

pub fn status_valid(s: &Submission<'_>) -> Result<(), OrderError> {
    parse_status(s.payload.status.as_ref()).map(|_| ())
}

pub fn status_valid_if_present(s: &Submission<'_>) -> Result<(), OrderError> {
    match &s.payload.status {
        Some(status) if is_truthy(status) => status_valid(s),
        _ => Ok(()),
    }
}

// --- Helpers ---

/// JSON truthiness: `null`, `false`, `0`, `NaN` and `""` are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// A quantity is a whole number greater than zero.
/// `2.0` counts; `2.5`, `"2"` and `-1` do not.
pub fn positive_quantity(value: &Value) -> Option<u64> {
    let Value::Number(n) = value else {
        return None;
    };
    if let Some(q) = n.as_u64() {
        return (q > 0).then_some(q);
    }
    let f = n.as_f64()?;
    // 2^64 as f64; anything at or above it does not fit.
    (f.fract() == 0.0 && f > 0.0 && f < 18_446_744_073_709_551_616.0).then_some(f as u64)
}

fn require(field: &Option<Value>, name: &'static str) -> Result<(), OrderError> {
    match field {
        Some(value) if is_truthy(value) => Ok(()),
        _ => Err(OrderError::MissingField(name)),
    }
}

fn parse_status(value: Option<&Value>) -> Result<OrderStatus, OrderError> {
    match value {
        Some(Value::String(s)) => s.parse().map_err(|_| OrderError::InvalidStatus),
        _ => Err(OrderError::InvalidStatus),
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn text(field: &Option<Value>, name: &'static str) -> Result<String, OrderError> {
    match field {
        Some(Value::String(s)) => Ok(s.clone()),
        _ => Err(OrderError::Malformed(format!("Order {name} must be a string"))),
    }
}

/// Splits a dish into its checked quantity and the untouched remaining fields.
fn dish(index: usize, value: &Value) -> Result<Dish, OrderError> {
    let Value::Object(fields) = value else {
        return Err(OrderError::InvalidQuantity(index));
    };
    let quantity = fields
        .get("quantity")
        .and_then(positive_quantity)
        .ok_or(OrderError::InvalidQuantity(index))?;
    let mut details = fields.clone();
    details.remove("quantity");
    Ok(Dish { quantity, details })
}

/// Converts a payload that passed its rules into typed fields.
fn draft(payload: &OrderPayload) -> Result<OrderDraft, OrderError> {
    let status = match &payload.status {
        Some(status) if is_truthy(status) => parse_status(Some(status))?,
        _ => OrderStatus::default(),
    };
    let dishes = match &payload.dishes {
        Some(Value::Array(dishes)) => dishes
            .iter()
            .enumerate()
            .map(|(index, value)| dish(index, value))
            .collect::<Result<Vec<_>, _>>()?,
        _ => return Err(OrderError::NoDishes),
    };

    Ok(OrderDraft {
        deliver_to: text(&payload.deliver_to, "deliverTo")?,
        mobile_number: text(&payload.mobile_number, "mobileNumber")?,
        status,
        dishes,
    })
}
