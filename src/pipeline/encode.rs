//! Image encoding: `DynamicImage` → base64 JPEG for the API request body.
//!
//! The rendered page is resized to a fixed square and JPEG-compressed before
//! transport. JPEG at quality 70 is a deliberate trade: invoices are mostly
//! large type on white, which survives lossy compression well, and the
//! smaller body keeps request latency and upload limits comfortable. The
//! resize to `render_width × render_height` ignores aspect ratio — the
//! model reads text fine on a mildly stretched page, and a fixed size makes
//! token cost per request predictable.

use crate::config::ExtractionConfig;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::DynamicImage;
use std::io::Cursor;
use tracing::debug;

/// Resize and JPEG-encode a rendered page, returning base64 for transport.
pub fn encode_image(
    img: &DynamicImage,
    config: &ExtractionConfig,
) -> Result<String, image::ImageError> {
    // JPEG has no alpha channel; pdfium renders RGBA.
    let resized = DynamicImage::ImageRgb8(
        img.resize_exact(config.render_width, config.render_height, FilterType::Triangle)
            .to_rgb8(),
    );

    let mut buf = Vec::new();
    let mut cursor = Cursor::new(&mut buf);
    let encoder = JpegEncoder::new_with_quality(&mut cursor, config.jpeg_quality);
    resized.write_with_encoder(encoder)?;

    let b64 = STANDARD.encode(&buf);
    debug!("Encoded page image → {} bytes base64", b64.len());

    Ok(b64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn test_config() -> ExtractionConfig {
        crate::config::ExtractionConfig::builder()
            .api_key("sk-test")
            .render_size(100, 100)
            .build()
            .unwrap()
    }

    #[test]
    fn encode_small_image() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(10, 10, Rgba([255, 0, 0, 255])));
        let b64 = encode_image(&img, &test_config()).expect("encode should succeed");
        assert!(!b64.is_empty());

        // Round-trip: the base64 must decode back to the exact JPEG bytes.
        let decoded = STANDARD.decode(&b64).expect("valid base64");
        let again = STANDARD.encode(&decoded);
        assert_eq!(again, b64);

        // JPEG SOI marker.
        assert_eq!(&decoded[..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn output_matches_configured_size() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(37, 91, Rgba([0, 0, 255, 255])));
        let b64 = encode_image(&img, &test_config()).unwrap();
        let jpeg = STANDARD.decode(&b64).unwrap();
        let reloaded = image::load_from_memory(&jpeg).expect("decodable JPEG");
        assert_eq!(reloaded.width(), 100);
        assert_eq!(reloaded.height(), 100);
    }

    #[test]
    fn encoding_is_deterministic() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(20, 20, Rgba([9, 120, 33, 255])));
        let config = test_config();
        let a = encode_image(&img, &config).unwrap();
        let b = encode_image(&img, &config).unwrap();
        assert_eq!(a, b);
    }
}
