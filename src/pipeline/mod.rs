//! Pipeline stages for PDF-to-invoice extraction.
//!
//! Each submodule implements exactly one transformation step.
//! Keeping stages separate makes each independently testable and lets us
//! swap implementations (e.g. switch rendering backend) without touching
//! other stages.
//!
//! ## Data Flow
//!
//! ```text
//! decode ──▶ render ──▶ encode ──▶ llm ──▶ sanitize
//! (base64)   (pdfium)   (jpeg+b64) (VLM)   (cleanup)
//! ```
//!
//! 1. [`decode`]   — validate the declared extension and decode the base64
//!    payload to raw PDF bytes
//! 2. [`render`]   — rasterise page 1; runs in `spawn_blocking` because
//!    pdfium is not async-safe
//! 3. [`encode`]   — resize, JPEG-encode and base64-wrap the page image for
//!    the multimodal request body
//! 4. [`llm`]      — drive the single model API call; the only stage with
//!    network I/O
//! 5. [`sanitize`] — deterministic cleanup of model quirks (json fences,
//!    curly quotes, grouped digits, "null" strings)

pub mod decode;
pub mod encode;
pub mod llm;
pub mod render;
pub mod sanitize;
