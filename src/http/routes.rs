//! Axum router and HTTP handlers.
//!
//! `build_router` is the single entry point; `main.rs` attaches middleware
//! layers on top so the tests in `tests/` can drive the bare router.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, OriginalUri, Path, State},
    http::{Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use tracing::info;

use crate::{
    http::{
        api_types::{DataResponse, ErrorResponse, OrderRequest},
        state::AppState,
    },
    model::{MenuItem, Order, OrderId},
    order_actor::OrderError,
};

type OrderBody = Result<Json<OrderRequest>, JsonRejection>;

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

/// Build the complete application router wired to the given shared state.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/orders",
            get(list).post(create).fallback(method_not_allowed),
        )
        .route(
            "/orders/:orderId",
            get(read)
                .put(update)
                .delete(destroy)
                .fallback(method_not_allowed),
        )
        .route("/dishes", get(list_dishes).fallback(method_not_allowed))
        .fallback(not_found)
        .with_state(state)
}

// ---------------------------------------------------------------------------
// GET /orders
// ---------------------------------------------------------------------------

pub(crate) async fn list(
    State(st): State<Arc<AppState>>,
) -> Result<Json<DataResponse<Vec<Order>>>, OrderError> {
    let orders = st.orders.list_orders().await?;
    Ok(Json(DataResponse::new(orders)))
}

// ---------------------------------------------------------------------------
// POST /orders
// ---------------------------------------------------------------------------

pub(crate) async fn create(
    State(st): State<Arc<AppState>>,
    body: OrderBody,
) -> Result<impl IntoResponse, OrderError> {
    let Json(request) = body?;
    let order = st.orders.create_order(request.into_payload()).await?;

    info!(order_id = %order.id, "orders/create");
    Ok((StatusCode::CREATED, Json(DataResponse::new(order))))
}

// ---------------------------------------------------------------------------
// GET /orders/:orderId
// ---------------------------------------------------------------------------

pub(crate) async fn read(
    State(st): State<Arc<AppState>>,
    Path(order_id): Path<String>,
) -> Result<Json<DataResponse<Order>>, OrderError> {
    let order = st.orders.find_order(OrderId::from(order_id)).await?;
    Ok(Json(DataResponse::new(order)))
}

// ---------------------------------------------------------------------------
// PUT /orders/:orderId
// ---------------------------------------------------------------------------

/// Existence is checked before the body is looked at, so an unknown id is a
/// 404 even when the body would not parse.
pub(crate) async fn update(
    State(st): State<Arc<AppState>>,
    Path(order_id): Path<String>,
    body: OrderBody,
) -> Result<Json<DataResponse<Order>>, OrderError> {
    let id = OrderId::from(order_id);
    let request = match body {
        Ok(Json(request)) => request,
        Err(rejection) => {
            st.orders.find_order(id).await?;
            return Err(rejection.into());
        }
    };

    let order = st.orders.update_order(id, request.into_payload()).await?;

    info!(order_id = %order.id, status = %order.status, "orders/update");
    Ok(Json(DataResponse::new(order)))
}

// ---------------------------------------------------------------------------
// DELETE /orders/:orderId
// ---------------------------------------------------------------------------

pub(crate) async fn destroy(
    State(st): State<Arc<AppState>>,
    Path(order_id): Path<String>,
) -> Result<StatusCode, OrderError> {
    let id = OrderId::from(order_id);
    st.orders.delete_order(id.clone()).await?;

    info!(order_id = %id, "orders/delete");
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// GET /dishes
// ---------------------------------------------------------------------------

pub(crate) async fn list_dishes(
    State(st): State<Arc<AppState>>,
) -> Json<DataResponse<Vec<MenuItem>>> {
    Json(DataResponse::new(st.menu.clone()))
}

// ---------------------------------------------------------------------------
// Fallbacks
// ---------------------------------------------------------------------------

pub(crate) async fn method_not_allowed(
    method: Method,
    OriginalUri(uri): OriginalUri,
) -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorResponse::new(format!(
            "{method} not allowed for {}",
            uri.path()
        ))),
    )
}

pub(crate) async fn not_found(OriginalUri(uri): OriginalUri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new(format!("Path not found: {}", uri.path()))),
    )
}
