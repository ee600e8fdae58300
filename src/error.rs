//! Error types for the invoice2json library.
//!
//! One taxonomy covers the whole request pipeline, split along the same line
//! the HTTP surface draws:
//!
//! * **Client errors** — the caller sent something we refuse to process
//!   (unknown extension, malformed base64). These map to HTTP 400; the
//!   request never reached the renderer.
//!
//! * **Processing errors** — the payload decoded but could not be turned
//!   into an image (corrupt PDF, zero pages, rasteriser or encoder failure).
//!   These map to HTTP 500 with a fixed, non-leaky message.
//!
//! * **Upstream errors** — the model API call failed (transport, non-2xx
//!   status, unusable completion). These map to HTTP 500 with the upstream
//!   detail surfaced, since the caller can do nothing else with them.
//!
//! The HTTP status mapping itself lives in [`crate::server::error`]; this
//! module only classifies.

use thiserror::Error;

/// All errors returned by the invoice2json library.
#[derive(Debug, Error)]
pub enum ExtractError {
    // ── Client errors ─────────────────────────────────────────────────────
    /// The declared file extension is not in the supported set.
    #[error("Unsupported file extension '{ext}'. Allowed extensions: pdf")]
    UnsupportedFormat { ext: String },

    /// The payload is not valid standard base64.
    #[error("Invalid base64 payload: {detail}")]
    InvalidEncoding { detail: String },

    // ── Processing errors ─────────────────────────────────────────────────
    /// pdfium could not parse the decoded bytes as a PDF document.
    #[error("Uploaded bytes are not a valid PDF: {detail}")]
    CorruptPdf { detail: String },

    /// The PDF parsed but contains no pages to render.
    #[error("Uploaded PDF has no pages")]
    EmptyPdf,

    /// pdfium returned an error while rasterising page 1.
    #[error("Rasterisation failed for page 1: {detail}")]
    RasterisationFailed { detail: String },

    /// The JPEG encoder rejected the rendered page.
    #[error("Image encoding failed: {0}")]
    ImageEncodingFailed(#[from] image::ImageError),

    // ── Upstream errors ───────────────────────────────────────────────────
    /// The HTTP request to the model API failed at the transport level.
    #[error("Model API request failed: {detail}")]
    UpstreamRequest { detail: String },

    /// The model API call exceeded the configured timeout.
    #[error("Model API call timed out after {secs}s")]
    UpstreamTimeout { secs: u64 },

    /// The model API answered with a non-success status.
    #[error("Model API returned HTTP {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    /// The completion text could not be parsed as invoice JSON.
    #[error("Model response is not valid JSON: {detail}")]
    UpstreamInvalidJson { detail: String },

    // ── Config errors ─────────────────────────────────────────────────────
    /// No API credential in the environment; checked once at startup.
    #[error("OpenAI API key is missing. Set OPENAI_API_KEY in the environment.")]
    MissingApiKey,

    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Catch-all ─────────────────────────────────────────────────────────
    /// Unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ExtractError {
    /// True for errors caused by the request itself (the HTTP 400 branch).
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ExtractError::UnsupportedFormat { .. } | ExtractError::InvalidEncoding { .. }
        )
    }

    /// True for failures of the external model API.
    pub fn is_upstream_error(&self) -> bool {
        matches!(
            self,
            ExtractError::UpstreamRequest { .. }
                | ExtractError::UpstreamTimeout { .. }
                | ExtractError::UpstreamStatus { .. }
                | ExtractError::UpstreamInvalidJson { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_format_display() {
        let e = ExtractError::UnsupportedFormat { ext: "docx".into() };
        let msg = e.to_string();
        assert!(msg.contains("docx"), "got: {msg}");
        assert!(msg.contains("pdf"));
    }

    #[test]
    fn upstream_status_display() {
        let e = ExtractError::UpstreamStatus {
            status: 429,
            body: "rate limited".into(),
        };
        assert!(e.to_string().contains("429"));
        assert!(e.to_string().contains("rate limited"));
    }

    #[test]
    fn client_error_classification() {
        assert!(ExtractError::InvalidEncoding {
            detail: "bad pad".into()
        }
        .is_client_error());
        assert!(ExtractError::UnsupportedFormat { ext: "png".into() }.is_client_error());
        assert!(!ExtractError::EmptyPdf.is_client_error());
        assert!(!ExtractError::UpstreamTimeout { secs: 60 }.is_client_error());
    }

    #[test]
    fn upstream_error_classification() {
        assert!(ExtractError::UpstreamInvalidJson {
            detail: "trailing comma".into()
        }
        .is_upstream_error());
        assert!(!ExtractError::EmptyPdf.is_upstream_error());
    }
}
