//! Model interaction: build the vision request and parse the completion.
//!
//! This module is intentionally thin — all prompt text lives in
//! [`crate::prompts`] and all output cleanup in [`crate::pipeline::sanitize`],
//! so either can change without touching the wire handling here.
//!
//! One request per extraction, no retries: every attempt bills real money
//! upstream, and the caller gets an honest failure instead of a silently
//! tripled invoice-processing cost. The shared client carries the
//! configured timeout, so a hung upstream surfaces as
//! [`ExtractError::UpstreamTimeout`] rather than a stuck request.

use crate::config::ExtractionConfig;
use crate::error::ExtractError;
use crate::invoice::InvoiceData;
use crate::pipeline::sanitize;
use crate::prompts;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, warn};

/// Completion envelope returned by OpenAI-compatible chat endpoints.
/// Only the fields we read are modelled.
#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

/// Send a page image to the model and parse the completion as invoice data.
///
/// ## Message layout
///
/// 1. **System message** — the extraction role framing
/// 2. **User message** — the fixed schema instruction as a text part, plus
///    the page as a `data:image/jpeg;base64,…` image part
pub async fn extract_from_image(
    client: &reqwest::Client,
    config: &ExtractionConfig,
    image_b64: &str,
) -> Result<InvoiceData, ExtractError> {
    let payload = json!({
        "model": config.model,
        "messages": [
            {
                "role": "system",
                "content": prompts::SYSTEM_PROMPT
            },
            {
                "role": "user",
                "content": [
                    {
                        "type": "text",
                        "text": prompts::EXTRACTION_PROMPT
                    },
                    {
                        "type": "image_url",
                        "image_url": {
                            "url": format!("data:image/jpeg;base64,{}", image_b64)
                        }
                    }
                ]
            }
        ],
        "max_tokens": config.max_tokens
    });

    let response = client
        .post(&config.api_url)
        .bearer_auth(&config.api_key)
        .json(&payload)
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                ExtractError::UpstreamTimeout {
                    secs: config.api_timeout_secs,
                }
            } else {
                ExtractError::UpstreamRequest {
                    detail: e.to_string(),
                }
            }
        })?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ExtractError::UpstreamRequest {
            detail: e.to_string(),
        })?;

    if !status.is_success() {
        warn!("Model API returned HTTP {}", status);
        return Err(ExtractError::UpstreamStatus {
            status: status.as_u16(),
            body,
        });
    }

    let envelope: ChatResponse =
        serde_json::from_str(&body).map_err(|e| ExtractError::UpstreamInvalidJson {
            detail: format!("Malformed completion envelope: {}", e),
        })?;

    let content = envelope
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .filter(|c| !c.trim().is_empty())
        .ok_or_else(|| ExtractError::UpstreamInvalidJson {
            detail: "Completion contains no message content".into(),
        })?;

    debug!("Model returned {} bytes of completion text", content.len());
    parse_completion(&content)
}

/// Clean the completion text and deserialise it into [`InvoiceData`].
pub fn parse_completion(content: &str) -> Result<InvoiceData, ExtractError> {
    let cleaned = sanitize::clean_model_json(content);

    let value: Value =
        serde_json::from_str(&cleaned).map_err(|e| ExtractError::UpstreamInvalidJson {
            detail: e.to_string(),
        })?;

    let value = sanitize::normalize_nulls(value);

    serde_json::from_value(value).map_err(|e| ExtractError::UpstreamInvalidJson {
        detail: format!("Completion does not fit the invoice schema: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_completion() {
        let content = r#"{"document_type": "invoice", "line_items": []}"#;
        let data = parse_completion(content).unwrap();
        assert_eq!(data.document_type.as_deref(), Some("invoice"));
    }

    #[test]
    fn parses_fenced_completion_with_grouped_digits() {
        let content = "```json\n{\"totals\": {\"grand_total\": 1,234.50}}\n```";
        let data = parse_completion(content).unwrap();
        assert_eq!(data.totals.unwrap().grand_total, Some(1234.50));
    }

    #[test]
    fn null_strings_become_absent_fields() {
        let content = r#"{"document_type": "null", "invoice_metadata": {"invoice_number": "NA"}}"#;
        let data = parse_completion(content).unwrap();
        assert!(data.document_type.is_none());
        assert!(data.invoice_metadata.unwrap().invoice_number.is_none());
    }

    #[test]
    fn null_valued_lists_do_not_fail_the_schema() {
        let content = r#"{"line_items": [{"description": "x", "sub_items": null}], "totals": {"taxes": null, "partial_totals": null}}"#;
        let data = parse_completion(content).unwrap();
        assert_eq!(data.line_items[0].description.as_deref(), Some("x"));
        assert!(data.line_items[0].sub_items.is_empty());
        assert!(data.totals.unwrap().taxes.is_empty());
    }

    #[test]
    fn rejects_non_json_completion() {
        let err = parse_completion("Sorry, I cannot read this image.").unwrap_err();
        assert!(matches!(err, ExtractError::UpstreamInvalidJson { .. }));
    }
}
