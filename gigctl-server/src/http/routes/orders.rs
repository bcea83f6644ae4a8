//! Order endpoints
//!
//! Dates travel as `YYYY-MM-DD` strings in both directions.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};

use crate::db::repos::OrderRepo;
use crate::http::error::ApiError;
use crate::http::extractors::{EntityId, JsonBody};
use crate::http::server::AppState;
use crate::models::{Order, OrderFields};

/// GET /orders - list all orders
async fn list_orders(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Order>>, ApiError> {
    let orders = OrderRepo::new(&state.pool).list().await?;
    Ok(Json(orders))
}

/// POST /orders - create an order
async fn create_order(
    State(state): State<Arc<AppState>>,
    JsonBody(fields): JsonBody<OrderFields>,
) -> Result<StatusCode, ApiError> {
    OrderRepo::new(&state.pool).create(&fields).await?;
    Ok(StatusCode::CREATED)
}

/// GET /orders/{id} - get a single order
async fn get_order(
    State(state): State<Arc<AppState>>,
    EntityId(id): EntityId,
) -> Result<Json<Order>, ApiError> {
    let order = OrderRepo::new(&state.pool).get(id).await?;
    Ok(Json(order))
}

/// PUT /orders/{id} - replace every field of an order
async fn replace_order(
    State(state): State<Arc<AppState>>,
    EntityId(id): EntityId,
    JsonBody(fields): JsonBody<OrderFields>,
) -> Result<StatusCode, ApiError> {
    OrderRepo::new(&state.pool).replace(id, &fields).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /orders/{id} - delete an order
async fn delete_order(
    State(state): State<Arc<AppState>>,
    EntityId(id): EntityId,
) -> Result<StatusCode, ApiError> {
    let repo = OrderRepo::new(&state.pool);
    repo.get(id).await?;
    repo.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Order routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/orders", get(list_orders).post(create_order))
        .route(
            "/orders/{id}",
            get(get_order).put(replace_order).delete(delete_order),
        )
}
