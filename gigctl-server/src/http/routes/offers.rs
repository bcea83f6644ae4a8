//! Offer endpoints

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};

use crate::db::repos::OfferRepo;
use crate::http::error::ApiError;
use crate::http::extractors::{EntityId, JsonBody};
use crate::http::server::AppState;
use crate::models::{Offer, OfferFields};

/// GET /offers
async fn list_offers(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Offer>>, ApiError> {
    let offers = OfferRepo::new(&state.pool).list().await?;
    Ok(Json(offers))
}

/// POST /offers
async fn create_offer(
    State(state): State<Arc<AppState>>,
    JsonBody(fields): JsonBody<OfferFields>,
) -> Result<StatusCode, ApiError> {
    OfferRepo::new(&state.pool).create(&fields).await?;
    Ok(StatusCode::CREATED)
}

/// GET /offers/{id}
async fn get_offer(
    State(state): State<Arc<AppState>>,
    EntityId(id): EntityId,
) -> Result<Json<Offer>, ApiError> {
    let offer = OfferRepo::new(&state.pool).get(id).await?;
    Ok(Json(offer))
}

/// PUT /offers/{id} - both `order_id` and `executor_id` are overwritten
async fn replace_offer(
    State(state): State<Arc<AppState>>,
    EntityId(id): EntityId,
    JsonBody(fields): JsonBody<OfferFields>,
) -> Result<StatusCode, ApiError> {
    OfferRepo::new(&state.pool).replace(id, &fields).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /offers/{id}
async fn delete_offer(
    State(state): State<Arc<AppState>>,
    EntityId(id): EntityId,
) -> Result<StatusCode, ApiError> {
    let repo = OfferRepo::new(&state.pool);
    repo.get(id).await?;
    repo.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Offer routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/offers", get(list_offers).post(create_offer))
        .route(
            "/offers/{id}",
            get(get_offer).put(replace_offer).delete(delete_offer),
        )
}
