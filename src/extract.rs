//! Extraction entry point: drive one payload through the whole pipeline.
//!
//! The flow is strictly linear — decode, render, encode, model call — with
//! no shared state between requests. Everything a stage needs travels in as
//! arguments, which is what lets the HTTP layer stay a thin adapter and the
//! tests exercise the pipeline without a server.

use crate::config::ExtractionConfig;
use crate::error::ExtractError;
use crate::invoice::InvoiceData;
use crate::pipeline::{decode, encode, llm, render};
use std::time::Instant;
use tracing::{debug, info};

/// Extract structured invoice data from a base64-encoded PDF payload.
///
/// # Arguments
/// * `data` — base64-encoded file content
/// * `ext` — declared file extension (currently only "pdf" is accepted)
/// * `config` — process-wide extraction configuration
/// * `client` — shared HTTP client carrying the API timeout
///
/// # Errors
/// Client errors ([`ExtractError::is_client_error`]) for a bad payload;
/// processing errors for an unusable PDF; upstream errors when the model
/// call fails. No partial results: either a parsed [`InvoiceData`] or an
/// error.
pub async fn extract_invoice(
    data: &str,
    ext: &str,
    config: &ExtractionConfig,
    client: &reqwest::Client,
) -> Result<InvoiceData, ExtractError> {
    let total_start = Instant::now();

    // ── Step 1: Validate and decode the payload ──────────────────────────
    let pdf_bytes = decode::decode_payload(data, ext)?;

    // ── Step 2: Rasterise page 1 ─────────────────────────────────────────
    let render_start = Instant::now();
    let page = render::render_first_page(pdf_bytes, config).await?;
    debug!("Rendered page 1 in {}ms", render_start.elapsed().as_millis());

    // ── Step 3: Encode for transport ─────────────────────────────────────
    let image_b64 = encode::encode_image(&page, config)?;

    // ── Step 4: Ask the model ────────────────────────────────────────────
    let llm_start = Instant::now();
    let mut invoice = llm::extract_from_image(client, config, &image_b64).await?;
    debug!("Model call took {}ms", llm_start.elapsed().as_millis());

    // The response passes through as-is, except a missing document type is
    // filled in so callers can always dispatch on it.
    if invoice.document_type.is_none() {
        invoice.document_type = Some("invoice".to_string());
    }

    info!(
        "Extraction complete in {}ms ({} line items)",
        total_start.elapsed().as_millis(),
        invoice.line_items.len()
    );

    Ok(invoice)
}
