use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use uuid::Uuid;

use crate::core::prelude::*;
use crate::domain::prelude::*;
use crate::scoring;

/// Module for models for the receipts API.
///
/// This module includes the response bodies for the process and points
/// endpoints; the submitted receipt itself travels as a
/// [`ReceiptDraft`](crate::domain::receipt::ReceiptDraft).
///
pub mod models {
    use serde::{Deserialize, Serialize};

    #[derive(Deserialize, Serialize, Debug)]
    pub struct ProcessResponse {
        pub id: String,
    }

    #[derive(Deserialize, Serialize, Debug)]
    pub struct PointsResponse {
        pub points: u64,
    }
}

/// Errors surfaced by the receipts endpoints.
///
/// Both variants are recovered at the boundary and mapped to a plain-text
/// client response; neither is ever fatal to the process.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("the receipt is invalid: {0}")]
    InvalidReceipt(#[from] ReceiptError),

    #[error("receipt not found")]
    NotFound,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::InvalidReceipt(reason) => {
                tracing::debug!(%reason, "rejected receipt submission");
                (StatusCode::BAD_REQUEST, "The receipt is invalid.").into_response()
            }
            ApiError::NotFound => {
                (StatusCode::NOT_FOUND, "Receipt not found.").into_response()
            }
        }
    }
}

/// The endpoint serving a sample receipt payload.
pub async fn sample() -> Json<ReceiptDraft> {
    Json(ReceiptDraft::from(&Receipt::simple_mock()))
}

/// The endpoint for submitting a receipt.
///
/// Validates the draft, computes its points, and files the scored receipt in
/// the store. Responds with the identifier the receipt was filed under; an
/// invalid draft is rejected before anything is stored.
///
pub async fn process(
    State(state): State<AppState>,
    Json(draft): Json<ReceiptDraft>,
) -> Result<(StatusCode, Json<models::ProcessResponse>), ApiError> {
    let receipt = draft.validate()?;
    let points = scoring::compute_points(&receipt);
    let id = state.store.put(receipt, points).await;

    tracing::info!(%id, points, "receipt scored");
    let body = models::ProcessResponse { id: id.to_string() };
    Ok((StatusCode::CREATED, Json(body)))
}

/// The endpoint for retrieving the points awarded to a stored receipt.
///
/// An identifier that was never issued is reported as not found; a malformed
/// identifier cannot name an entry either, so it gets the same answer.
pub async fn points(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<models::PointsResponse>, ApiError> {
    let id = Uuid::parse_str(&id).map_err(|_| ApiError::NotFound)?;
    let points = state.store.get(&id).await.ok_or(ApiError::NotFound)?;

    Ok(Json(models::PointsResponse { points }))
}
