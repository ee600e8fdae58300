//! Configuration for invoice extraction.
//!
//! All behaviour is controlled through [`ExtractionConfig`], built via its
//! [`ExtractionConfigBuilder`] or loaded from the process environment with
//! [`ExtractionConfig::from_env`]. One immutable struct, constructed once at
//! startup and passed explicitly into each component — there are no hidden
//! module-level singletons, which keeps every request independent and makes
//! two runs diffable from their logged config alone.
//!
//! The API credential is validated here, at construction time: a missing key
//! fails the process at startup rather than surfacing as a 500 on the first
//! request.

use crate::error::ExtractError;
use std::fmt;

/// Default chat-completions endpoint. Overridable so tests can point the
/// client at a local mock server.
pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Default vision model used for extraction.
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// Configuration for PDF-to-invoice extraction.
///
/// # Example
/// ```rust
/// use invoice2json::ExtractionConfig;
///
/// let config = ExtractionConfig::builder()
///     .api_key("sk-test")
///     .model("gpt-4o-mini")
///     .jpeg_quality(80)
///     .build()
///     .unwrap();
/// assert_eq!(config.model, "gpt-4o-mini");
/// ```
#[derive(Clone)]
pub struct ExtractionConfig {
    /// API credential sent as a bearer token. Required; never logged.
    pub api_key: String,

    /// Chat-completions endpoint URL. Default: [`DEFAULT_API_URL`].
    pub api_url: String,

    /// Model identifier. Default: [`DEFAULT_MODEL`].
    pub model: String,

    /// Maximum tokens the model may generate. Default: 4095.
    ///
    /// A fully populated invoice schema with many line items runs to roughly
    /// 2,000 output tokens; 4095 leaves headroom without unbounded cost.
    pub max_tokens: usize,

    /// Width of the image sent to the model, in pixels. Default: 800.
    pub render_width: u32,

    /// Height of the image sent to the model, in pixels. Default: 800.
    ///
    /// Pages are resized to exactly `render_width × render_height` before
    /// JPEG encoding. 800×800 keeps the request body small while leaving
    /// invoice text legible to current vision models.
    pub render_height: u32,

    /// Cap on the longest edge pdfium may rasterise, in pixels. Default: 2000.
    ///
    /// Independent of the final resize: an A0 poster page would otherwise
    /// rasterise to tens of thousands of pixels per side before being scaled
    /// down. The cap bounds peak memory regardless of physical page size.
    pub max_rendered_pixels: u32,

    /// JPEG quality for the transported image, 1–100. Default: 70.
    pub jpeg_quality: u8,

    /// Timeout for the model API call in seconds. Default: 60.
    ///
    /// Applied to the shared HTTP client. A single vision completion rarely
    /// exceeds 30s; anything past the timeout is reported as an upstream
    /// failure rather than hanging the request.
    pub api_timeout_secs: u64,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_url: DEFAULT_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: 4095,
            render_width: 800,
            render_height: 800,
            max_rendered_pixels: 2000,
            jpeg_quality: 70,
            api_timeout_secs: 60,
        }
    }
}

impl fmt::Debug for ExtractionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtractionConfig")
            .field("api_key", &"<redacted>")
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("render_width", &self.render_width)
            .field("render_height", &self.render_height)
            .field("max_rendered_pixels", &self.max_rendered_pixels)
            .field("jpeg_quality", &self.jpeg_quality)
            .field("api_timeout_secs", &self.api_timeout_secs)
            .finish()
    }
}

impl ExtractionConfig {
    /// Create a new builder for `ExtractionConfig`.
    pub fn builder() -> ExtractionConfigBuilder {
        ExtractionConfigBuilder {
            config: Self::default(),
        }
    }

    /// Build a configuration from the process environment.
    ///
    /// `OPENAI_API_KEY` is required and its absence is a startup error.
    /// Optional overrides: `INVOICE2JSON_API_URL`, `INVOICE2JSON_MODEL`,
    /// `INVOICE2JSON_API_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, ExtractError> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or(ExtractError::MissingApiKey)?;

        let mut builder = Self::builder().api_key(api_key);

        if let Ok(url) = std::env::var("INVOICE2JSON_API_URL") {
            builder = builder.api_url(url);
        }
        if let Ok(model) = std::env::var("INVOICE2JSON_MODEL") {
            builder = builder.model(model);
        }
        if let Ok(secs) = std::env::var("INVOICE2JSON_API_TIMEOUT_SECS") {
            let secs: u64 = secs.parse().map_err(|_| {
                ExtractError::InvalidConfig(format!(
                    "INVOICE2JSON_API_TIMEOUT_SECS must be an integer, got '{}'",
                    secs
                ))
            })?;
            builder = builder.api_timeout_secs(secs);
        }

        builder.build()
    }
}

/// Builder for [`ExtractionConfig`].
#[derive(Debug)]
pub struct ExtractionConfigBuilder {
    config: ExtractionConfig,
}

impl ExtractionConfigBuilder {
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = key.into();
        self
    }

    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.config.api_url = url.into();
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config.model = model.into();
        self
    }

    pub fn max_tokens(mut self, n: usize) -> Self {
        self.config.max_tokens = n.max(1);
        self
    }

    pub fn render_size(mut self, width: u32, height: u32) -> Self {
        self.config.render_width = width.max(100);
        self.config.render_height = height.max(100);
        self
    }

    pub fn max_rendered_pixels(mut self, px: u32) -> Self {
        self.config.max_rendered_pixels = px.max(100);
        self
    }

    pub fn jpeg_quality(mut self, quality: u8) -> Self {
        self.config.jpeg_quality = quality.clamp(1, 100);
        self
    }

    pub fn api_timeout_secs(mut self, secs: u64) -> Self {
        self.config.api_timeout_secs = secs.max(1);
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<ExtractionConfig, ExtractError> {
        let c = &self.config;
        if c.api_key.trim().is_empty() {
            return Err(ExtractError::MissingApiKey);
        }
        if c.api_url.trim().is_empty() {
            return Err(ExtractError::InvalidConfig("api_url must not be empty".into()));
        }
        if c.jpeg_quality == 0 || c.jpeg_quality > 100 {
            return Err(ExtractError::InvalidConfig(format!(
                "jpeg_quality must be 1–100, got {}",
                c.jpeg_quality
            )));
        }
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ExtractionConfig::builder()
            .api_key("sk-test")
            .build()
            .unwrap();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.render_width, 800);
        assert_eq!(config.render_height, 800);
        assert_eq!(config.jpeg_quality, 70);
        assert_eq!(config.api_timeout_secs, 60);
    }

    #[test]
    fn missing_api_key_fails() {
        let err = ExtractionConfig::builder().build().unwrap_err();
        assert!(matches!(err, ExtractError::MissingApiKey));
    }

    #[test]
    fn jpeg_quality_clamped() {
        let config = ExtractionConfig::builder()
            .api_key("sk-test")
            .jpeg_quality(250)
            .build()
            .unwrap();
        assert_eq!(config.jpeg_quality, 100);

        let config = ExtractionConfig::builder()
            .api_key("sk-test")
            .jpeg_quality(0)
            .build()
            .unwrap();
        assert_eq!(config.jpeg_quality, 1);
    }

    #[test]
    fn render_size_has_floor() {
        let config = ExtractionConfig::builder()
            .api_key("sk-test")
            .render_size(10, 10)
            .build()
            .unwrap();
        assert_eq!(config.render_width, 100);
        assert_eq!(config.render_height, 100);
    }

    #[test]
    fn debug_redacts_api_key() {
        let config = ExtractionConfig::builder()
            .api_key("sk-very-secret")
            .build()
            .unwrap();
        let dbg = format!("{:?}", config);
        assert!(!dbg.contains("sk-very-secret"));
        assert!(dbg.contains("<redacted>"));
    }
}
