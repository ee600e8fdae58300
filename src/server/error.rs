//! HTTP mapping for [`ExtractError`].
//!
//! The wire contract is deliberately coarse:
//!
//! | Error class       | Status | Detail                                        |
//! |-------------------|--------|-----------------------------------------------|
//! | client errors     | 400    | fixed message naming what was wrong           |
//! | processing errors | 500    | fixed message, internals only in the log      |
//! | upstream errors   | 500    | the upstream failure detail, surfaced         |
//!
//! Processing details (pdfium error strings, file paths) never reach the
//! client; they are logged server-side instead.

use crate::error::ExtractError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Fixed 400 message for a payload that is not valid base64.
pub const DETAIL_INVALID_BASE64: &str = "Invalid base64-encoded file data.";

/// Fixed 400 message for an extension outside the supported set.
pub const DETAIL_UNSUPPORTED_EXT: &str = "Unsupported file extension. Allowed extensions: pdf.";

/// Fixed 500 message for any failure between decode and model call.
pub const DETAIL_PDF_FAILURE: &str = "Failed to process the uploaded PDF.";

impl IntoResponse for ExtractError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            ExtractError::InvalidEncoding { detail } => {
                tracing::warn!("Invalid base64 payload: {}", detail);
                (StatusCode::BAD_REQUEST, DETAIL_INVALID_BASE64.to_string())
            }
            ExtractError::UnsupportedFormat { ext } => {
                tracing::warn!("Unsupported file extension: '{}'", ext);
                (StatusCode::BAD_REQUEST, DETAIL_UNSUPPORTED_EXT.to_string())
            }
            ExtractError::CorruptPdf { .. }
            | ExtractError::EmptyPdf
            | ExtractError::RasterisationFailed { .. }
            | ExtractError::ImageEncodingFailed(_) => {
                tracing::error!("PDF processing failed: {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    DETAIL_PDF_FAILURE.to_string(),
                )
            }
            e if e.is_upstream_error() => {
                tracing::error!("Upstream model call failed: {}", self);
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
            _ => {
                tracing::error!("Internal error: {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error.".to_string(),
                )
            }
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: ExtractError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn client_errors_map_to_400() {
        assert_eq!(
            status_of(ExtractError::InvalidEncoding {
                detail: "pad".into()
            }),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(ExtractError::UnsupportedFormat { ext: "png".into() }),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn processing_and_upstream_errors_map_to_500() {
        assert_eq!(
            status_of(ExtractError::EmptyPdf),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_of(ExtractError::UpstreamStatus {
                status: 502,
                body: "bad gateway".into()
            }),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
