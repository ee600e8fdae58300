//! Payload decoding: extension validation and base64 → raw PDF bytes.
//!
//! The declared extension is checked before the payload is touched, so an
//! unsupported format is rejected without paying for a base64 decode of a
//! potentially large body. Extensions arrive in the wild as "pdf", "PDF",
//! ".pdf" or with stray whitespace; all normalise to the same token.

use crate::error::ExtractError;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use tracing::debug;

/// File extensions the service accepts.
pub const ALLOWED_EXTENSIONS: &[&str] = &["pdf"];

/// Normalise a user-supplied extension: trim whitespace and dots, lowercase.
pub fn normalize_ext(ext: &str) -> String {
    ext.trim().trim_matches('.').to_ascii_lowercase()
}

/// Validate the extension and decode the base64 payload into raw bytes.
///
/// # Errors
/// * [`ExtractError::UnsupportedFormat`] when the normalised extension is
///   not in [`ALLOWED_EXTENSIONS`]
/// * [`ExtractError::InvalidEncoding`] when the payload is not valid
///   standard base64
pub fn decode_payload(data: &str, ext: &str) -> Result<Vec<u8>, ExtractError> {
    let ext = normalize_ext(ext);
    if !ALLOWED_EXTENSIONS.contains(&ext.as_str()) {
        return Err(ExtractError::UnsupportedFormat { ext });
    }

    let bytes = STANDARD
        .decode(data.trim())
        .map_err(|e| ExtractError::InvalidEncoding {
            detail: e.to_string(),
        })?;

    debug!("Decoded payload: {} bytes", bytes.len());
    Ok(bytes)
}
