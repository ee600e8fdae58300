//! HTTP handlers.

use crate::error::ExtractError;
use crate::extract::extract_invoice;
use crate::invoice::InvoiceData;
use crate::server::state::AppState;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use std::sync::Arc;

/// Request body for `POST /extract`.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractRequest {
    /// Base64-encoded file content.
    pub data: String,
    /// Declared file extension, e.g. "pdf".
    pub ext: String,
}

/// Liveness probe.
pub async fn health() -> &'static str {
    "OK"
}

/// Extract structured invoice data from an uploaded document.
pub async fn extract(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ExtractRequest>,
) -> Result<Json<InvoiceData>, ExtractError> {
    let invoice = extract_invoice(&req.data, &req.ext, &state.config, &state.http).await?;
    Ok(Json(invoice))
}
