//! PDF rasterisation: render page 1 to a `DynamicImage` via pdfium.
//!
//! ## Why spawn_blocking?
//!
//! The `pdfium-render` crate wraps the pdfium C++ library, which uses
//! thread-local state internally and is not safe to call from async
//! contexts. `tokio::task::spawn_blocking` moves the work onto the blocking
//! thread pool, so a slow render never stalls the server's worker threads.
//!
//! ## Why a temp file?
//!
//! pdfium opens documents from a file-system path. Each request writes its
//! decoded bytes to a uniquely named `NamedTempFile`; the file is removed
//! when the handle drops, on every exit path of the blocking closure,
//! including errors. Two concurrent requests never touch the same artefact.

use crate::config::ExtractionConfig;
use crate::error::ExtractError;
use image::DynamicImage;
use pdfium_render::prelude::*;
use std::io::Write;
use tracing::debug;

/// Rasterise the first page of a PDF into an image.
///
/// This runs inside `spawn_blocking` since pdfium operations are CPU-bound.
pub async fn render_first_page(
    pdf_bytes: Vec<u8>,
    config: &ExtractionConfig,
) -> Result<DynamicImage, ExtractError> {
    let max_pixels = config.max_rendered_pixels;

    tokio::task::spawn_blocking(move || render_first_page_blocking(&pdf_bytes, max_pixels))
        .await
        .map_err(|e| ExtractError::Internal(format!("Render task panicked: {}", e)))?
}

/// Blocking implementation of first-page rendering.
fn render_first_page_blocking(
    pdf_bytes: &[u8],
    max_pixels: u32,
) -> Result<DynamicImage, ExtractError> {
    let mut temp = tempfile::Builder::new()
        .prefix("invoice2json-")
        .suffix(".pdf")
        .tempfile()
        .map_err(|e| ExtractError::Internal(format!("Failed to create temp file: {}", e)))?;
    temp.write_all(pdf_bytes)
        .and_then(|_| temp.flush())
        .map_err(|e| ExtractError::Internal(format!("Failed to write temp file: {}", e)))?;

    let pdfium = Pdfium::default();

    let document = pdfium
        .load_pdf_from_file(temp.path(), None)
        .map_err(|e| ExtractError::CorruptPdf {
            detail: format!("{:?}", e),
        })?;

    let pages = document.pages();
    let total_pages = pages.len() as usize;
    if total_pages == 0 {
        return Err(ExtractError::EmptyPdf);
    }
    debug!("PDF loaded: {} pages, rendering page 1", total_pages);

    let render_config = PdfRenderConfig::new()
        .set_target_width(max_pixels as i32)
        .set_maximum_height(max_pixels as i32);

    let page = pages.get(0).map_err(|e| ExtractError::RasterisationFailed {
        detail: format!("{:?}", e),
    })?;

    let bitmap =
        page.render_with_config(&render_config)
            .map_err(|e| ExtractError::RasterisationFailed {
                detail: format!("{:?}", e),
            })?;

    let image = bitmap.as_image();
    debug!("Rendered page 1 → {}x{} px", image.width(), image.height());

    Ok(image)
}
