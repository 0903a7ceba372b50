//! Router and handlers for the calculator API.

use axum::{
    Router,
    extract::{Form, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
};
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::error;

use crate::config::ServerConfig;
use crate::subscribe::{Lead, forward_lead};
use crate::tdu::Tdu;

/// Shared handler state: configuration plus one reused HTTP client for the
/// subscription forward. Nothing here mutates per request.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ServerConfig>,
    http: reqwest::Client,
}

impl AppState {
    /// Creates new API state.
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
            http: reqwest::Client::new(),
        }
    }
}

/// Creates the calculator API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/calculate", post(calculate))
        .route("/api/tdu", get(tdu_table))
        .route("/api/tdu/lookup", get(tdu_lookup))
        .route("/api/subscribe", post(subscribe))
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

/// Evaluate a plan. The whole body is handed to the engine; validation
/// messages come back verbatim as the `error` field.
async fn calculate(Json(body): Json<Value>) -> impl IntoResponse {
    match truerate_engine::evaluate(&body) {
        Ok(eval) => {
            let true_rate = round2(*eval.true_rate_cents());
            let bill = round2(*eval.total_bill());
            (
                StatusCode::OK,
                Json(json!({
                    "true_rate_cents": true_rate,
                    "true_rate_display": eval.true_rate_display(),
                    "bill_amount": bill,
                    "bill_amount_display": eval.bill_display(),
                })),
            )
        }
        Err(e) => (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": e.message()})),
        ),
    }
}

/// The static delivery-fee table, in dropdown order.
async fn tdu_table() -> impl IntoResponse {
    let fees: Vec<_> = Tdu::all().iter().map(Tdu::fees).collect();
    (StatusCode::OK, Json(json!({"tdus": fees})))
}

#[derive(Debug, Deserialize)]
struct LookupQuery {
    zip: String,
}

/// Guess the TDU for a zip code. An unrecognized but well-formed zip is a
/// successful lookup with no match (the UI falls back to "Custom / Other").
async fn tdu_lookup(Query(query): Query<LookupQuery>) -> impl IntoResponse {
    let zip = query.zip.trim();
    if zip.len() != 5 || !zip.bytes().all(|b| b.is_ascii_digit()) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Enter a valid 5-digit zip code to continue."})),
        );
    }

    match Tdu::from_zip(zip) {
        Some(tdu) => (
            StatusCode::OK,
            Json(json!({"zip": zip, "tdu": tdu, "fees": tdu.fees()})),
        ),
        None => (StatusCode::OK, Json(json!({"zip": zip, "tdu": null}))),
    }
}

/// Capture a lead and forward it to the subscription service.
async fn subscribe(State(state): State<AppState>, Form(lead): Form<Lead>) -> impl IntoResponse {
    if !lead.is_well_formed() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Enter a valid email address and 5-digit zip code."})),
        );
    }

    match forward_lead(&state.http, state.config.subscribe_url.as_deref(), &lead).await {
        Ok(()) => (StatusCode::OK, Json(json!({"status": "ok"}))),
        Err(e) => {
            error!(error = %e, "lead forward failed");
            (
                StatusCode::BAD_GATEWAY,
                Json(json!({"error": "Unable to save your subscription. Try again later."})),
            )
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::round2;

    #[test]
    fn round2_matches_display_precision() {
        assert_eq!(round2(24.2222), 24.22);
        assert_eq!(round2(15.166_666), 15.17);
        assert_eq!(round2(17.4), 17.4);
    }
}
