//! # invoice2json
//!
//! Extract structured invoice data from PDFs using Vision Language Models.
//!
//! ## Why this crate?
//!
//! Template- and regex-based invoice parsers break on every new vendor
//! layout. Instead this crate rasterises the first page of the document and
//! lets a vision model read it as a human would, returning a typed JSON
//! structure (metadata, line items, totals, payment slip) that tolerates
//! whatever extra fields a given invoice carries.
//!
//! ## Pipeline Overview
//!
//! ```text
//! POST /extract {data, ext}
//!  │
//!  ├─ 1. Decode   validate extension, base64 → PDF bytes
//!  ├─ 2. Render   rasterise page 1 via pdfium (CPU-bound, spawn_blocking)
//!  ├─ 3. Encode   resize → JPEG → base64
//!  ├─ 4. VLM      one chat-completions call with the fixed schema prompt
//!  ├─ 5. Sanitize strip fences / quotes / grouped digits, null strings
//!  └─ 6. Respond  typed InvoiceData, unknown fields passed through
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use invoice2json::{extract_invoice, ExtractionConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Fails fast if OPENAI_API_KEY is not set.
//!     let config = ExtractionConfig::from_env()?;
//!     let client = reqwest::Client::new();
//!     let invoice = extract_invoice(&pdf_base64(), "pdf", &config, &client).await?;
//!     println!("{}", serde_json::to_string_pretty(&invoice)?);
//!     Ok(())
//! }
//! # fn pdf_base64() -> String { String::new() }
//! ```
//!
//! ## Running the server
//!
//! The `cli` feature (default) builds the `invoice2json` binary:
//!
//! ```text
//! OPENAI_API_KEY=sk-… invoice2json --port 5050
//! ```
//!
//! Disable `cli` when using only the library:
//! ```toml
//! invoice2json = { version = "0.1", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod error;
pub mod extract;
pub mod invoice;
pub mod pipeline;
pub mod prompts;
pub mod server;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{ExtractionConfig, ExtractionConfigBuilder};
pub use error::ExtractError;
pub use extract::extract_invoice;
pub use invoice::{
    BankDetails, InvoiceData, InvoiceMetadata, LineItem, PartyDetails, PaymentSlip, Totals,
};
pub use server::{router, AppState};
