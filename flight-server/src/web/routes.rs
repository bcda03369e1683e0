//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use chrono::Local;
use serde_json::Value;
use tower_http::cors::CorsLayer;

use crate::offers::{DetailedResult, SearchResult};
use crate::service::ServiceError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/airports", get(search_airports))
        .route("/api/flights", get(search_flights))
        .route("/api/flights/:offer_id/details", get(flight_details))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Keyword airport search, proxied to the provider.
async fn search_airports(
    State(state): State<AppState>,
    Query(req): Query<AirportSearchRequest>,
) -> Result<Json<Value>, AppError> {
    let keyword = req
        .keyword()
        .map_err(|message| AppError::BadRequest { message })?;

    let response = state.flights.airport_search(keyword).await?;
    Ok(Json(response))
}

/// Search flight offers.
async fn search_flights(
    State(state): State<AppState>,
    Query(req): Query<FlightSearchRequest>,
) -> Result<Json<Vec<SearchResult>>, AppError> {
    let today = Local::now().date_naive();
    let query = req
        .into_query(today)
        .map_err(|message| AppError::BadRequest { message })?;

    let results = state.flights.search(&query).await?;
    Ok(Json(results))
}

/// Full detail view of one previously searched offer.
async fn flight_details(
    State(state): State<AppState>,
    Path(offer_id): Path<String>,
) -> Result<Json<DetailedResult>, AppError> {
    let details = state.flights.offer_details(&offer_id).await?;
    Ok(Json(details))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<ServiceError> for AppError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::OfferNotFound { .. } => AppError::NotFound {
                message: e.to_string(),
            },
            // Provider failures stay opaque to clients
            ServiceError::Provider(provider) => {
                tracing::error!(error = %provider, "provider request failed");
                AppError::Internal {
                    message: "Flight search is currently unavailable".to_string(),
                }
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        tracing::warn!(status = %status, message = %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let err: AppError = ServiceError::OfferNotFound {
            offer_id: "42".to_string(),
        }
        .into();

        match err {
            AppError::NotFound { message } => {
                assert!(message.contains("42"));
                assert!(message.contains("new search"));
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn provider_error_maps_to_opaque_500() {
        let err: AppError = ServiceError::Provider(crate::amadeus::AmadeusError::Api {
            status: 502,
            message: "upstream secret detail".to_string(),
        })
        .into();

        match err {
            AppError::Internal { message } => {
                assert!(!message.contains("upstream secret detail"));
            }
            other => panic!("expected Internal, got {other:?}"),
        }
    }
}
