// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Screenshot validation and binarization ahead of OCR.

use std::io::Cursor;

use image::{DynamicImage, GrayImage, ImageFormat, Luma};
use lesewerk_core::error::{LesewerkError, Result};
use tracing::{debug, info, instrument};

/// Check that `bytes` hold a JPEG, PNG, BMP, or TIFF image no larger than
/// `max_bytes`, returning the sniffed format.
pub fn validate_image(bytes: &[u8], max_bytes: u64) -> Result<ImageFormat> {
    let size = bytes.len() as u64;
    if size > max_bytes {
        return Err(LesewerkError::ImageTooLarge {
            size,
            max: max_bytes,
        });
    }

    let format = image::guess_format(bytes)
        .map_err(|_| LesewerkError::UnsupportedImage("unrecognised image data".into()))?;

    match format {
        ImageFormat::Jpeg | ImageFormat::Png | ImageFormat::Bmp | ImageFormat::Tiff => {
            Ok(format)
        }
        other => Err(LesewerkError::UnsupportedImage(format!("{other:?}"))),
    }
}

/// Convert to black-and-white with a fixed global threshold and re-encode as
/// PNG.
///
/// Grey uses the Rec. 601 weights (0.299 R + 0.587 G + 0.114 B); alpha is
/// ignored.
#[instrument(skip(bytes), fields(data_len = bytes.len()))]
pub fn binarize(bytes: &[u8], threshold: u8) -> Result<Vec<u8>> {
    let image = image::load_from_memory(bytes).map_err(|err| {
        LesewerkError::ImageError(format!("failed to decode screenshot: {err}"))
    })?;
    info!(
        width = image.width(),
        height = image.height(),
        "Binarizing screenshot"
    );

    let rgb = image.to_rgb8();
    let output = GrayImage::from_fn(rgb.width(), rgb.height(), |x, y| {
        let [r, g, b] = rgb.get_pixel(x, y).0;
        let gray = 0.299 * f32::from(r) + 0.587 * f32::from(g) + 0.114 * f32::from(b);
        Luma([if gray > f32::from(threshold) { 255 } else { 0 }])
    });

    let mut encoded = Cursor::new(Vec::new());
    DynamicImage::ImageLuma8(output)
        .write_to(&mut encoded, ImageFormat::Png)
        .map_err(|err| LesewerkError::ImageError(format!("failed to encode PNG: {err}")))?;

    let encoded = encoded.into_inner();
    debug!(encoded_len = encoded.len(), "Binarization complete");
    Ok(encoded)
}
