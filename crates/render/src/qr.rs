//! QR payload encoding to a grayscale bitmap.
//!
//! Error correction is fixed at level M and the quiet zone is disabled; the
//! surrounding cell already provides whitespace. The bitmap is at least
//! `resolution` pixels square (module-aligned, so usually slightly larger).

use qrcode::{EcLevel, QrCode};

use crate::error::EncodeError;

/// An 8-bit grayscale bitmap, row-major, 0 = black.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrBitmap {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Row-major pixel data, one byte per pixel.
    pub pixels: Vec<u8>,
}

/// Encode one payload at the given resolution.
pub fn encode(payload: &str, resolution: u32) -> Result<QrBitmap, EncodeError> {
    let code = QrCode::with_error_correction_level(payload, EcLevel::M).map_err(|source| {
        EncodeError {
            payload: payload.to_string(),
            source,
        }
    })?;

    let img = code
        .render::<image::Luma<u8>>()
        .quiet_zone(false)
        .min_dimensions(resolution, resolution)
        .build();

    let (width, height) = img.dimensions();
    Ok(QrBitmap {
        width,
        height,
        pixels: img.into_raw(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bitmap_is_square_and_at_least_the_resolution() {
        let bmp = encode("A01•1", 256).unwrap();
        assert_eq!(bmp.width, bmp.height);
        assert!(bmp.width >= 256);
        assert_eq!(bmp.pixels.len(), (bmp.width * bmp.height) as usize);
    }

    #[test]
    fn bitmap_contains_both_black_and_white() {
        let bmp = encode("Z12•4", 64).unwrap();
        assert!(bmp.pixels.iter().any(|&p| p == 0));
        assert!(bmp.pixels.iter().any(|&p| p == 255));
    }

    #[test]
    fn identical_payloads_encode_identically() {
        assert_eq!(encode("A01•1", 128).unwrap(), encode("A01•1", 128).unwrap());
    }

    #[test]
    fn oversized_payload_is_an_encode_error() {
        // Well past the byte-mode capacity of the largest QR version.
        let payload = "x".repeat(8000);
        let err = encode(&payload, 128).unwrap_err();
        assert_eq!(err.payload, payload);
    }
}
