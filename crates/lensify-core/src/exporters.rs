//! Image exporters
//!
//! Encode processed images to JPEG, either as in-memory buffers for callers
//! that package their own responses, or directly to disk.

use crate::decoders::DecodedImage;
use std::path::Path;

/// A processed image ready to hand back to the caller.
///
/// Ephemeral: held only until the encoded bytes are returned or written out.
#[derive(Debug, Clone)]
pub struct ProcessedResult {
    /// Output filename
    pub filename: String,

    /// Encoded JPEG bytes
    pub data: Vec<u8>,
}

/// Quantize a working-range image to 8-bit RGB bytes.
///
/// Values are clamped to 0.0-1.0 before scaling, so out-of-range arithmetic
/// upstream can never wrap past 0 or 255.
pub fn quantize_rgb8(image: &DecodedImage) -> Vec<u8> {
    image
        .data
        .iter()
        .map(|&v| (v.clamp(0.0, 1.0) * 255.0).round() as u8)
        .collect()
}

/// Encode a processed image to an in-memory JPEG buffer
pub fn encode_jpeg(image: &DecodedImage, quality: u8) -> Result<Vec<u8>, String> {
    if image.channels != 3 {
        return Err(format!(
            "JPEG export only supports 3-channel RGB, got {} channels",
            image.channels
        ));
    }

    let rgb = quantize_rgb8(image);
    let mut buffer = Vec::new();

    let mut encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut buffer, quality);
    encoder
        .encode(
            &rgb,
            image.width,
            image.height,
            image::ExtendedColorType::Rgb8,
        )
        .map_err(|e| format!("Failed to encode JPEG: {}", e))?;

    Ok(buffer)
}

/// Encode a processed image into a named result ready for packaging
pub fn encode_result(
    image: &DecodedImage,
    filename: &str,
    quality: u8,
) -> Result<ProcessedResult, String> {
    let data = encode_jpeg(image, quality)?;
    Ok(ProcessedResult {
        filename: filename.to_string(),
        data,
    })
}

/// Encode a processed image and write it to a file
pub fn export_jpeg<P: AsRef<Path>>(
    image: &DecodedImage,
    path: P,
    quality: u8,
) -> Result<(), String> {
    let path = path.as_ref();
    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| format!("Invalid output path: {}", path.display()))?;

    let result = encode_result(image, filename, quality)?;

    std::fs::write(path, &result.data).map_err(|e| format!("Failed to write JPEG file: {}", e))
}
