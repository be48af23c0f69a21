//! Image decoders
//!
//! Decode JPEG and PNG sources into the in-memory working representation.


use std::path::Path;

/// Decoded image data
///
/// Pixels are interleaved row-major RGB as f32 in the 0.0-1.0 range. Sources
/// with fewer channels (grayscale, indexed) are expanded to RGB on decode, so
/// `channels` is always 3 for images produced by this module.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    /// Image width in pixels
    pub width: u32,

    /// Image height in pixels
    pub height: u32,

    /// Interleaved RGB data (f32, 0.0-1.0 range)
    pub data: Vec<f32>,

    /// Number of channels (3 after decode)
    pub channels: u8,

    /// Whether the source image was grayscale before expansion to RGB
    pub source_is_grayscale: bool,
}

impl DecodedImage {
    /// Number of pixels in the image.
    pub fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }
}

/// Supported file extensions for decoding
pub const DECODE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// Decode an image from a file path
pub fn decode_image<P: AsRef<Path>>(path: P) -> Result<DecodedImage, String> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .ok_or_else(|| "No file extension found".to_string())?;

    match extension.as_str() {
        "jpg" | "jpeg" | "png" => {
            let dynamic = image::open(path)
                .map_err(|e| format!("Failed to decode {}: {}", path.display(), e))?;
            Ok(from_dynamic(dynamic))
        }
        _ => Err(format!("Unsupported file format: {}", extension)),
    }
}

/// Decode an image from an in-memory byte buffer
///
/// Format is sniffed from the data itself, for callers that receive uploads
/// rather than files on disk.
pub fn decode_bytes(bytes: &[u8]) -> Result<DecodedImage, String> {
    let dynamic =
        image::load_from_memory(bytes).map_err(|e| format!("Failed to decode image data: {}", e))?;
    Ok(from_dynamic(dynamic))
}

/// Expand a decoded frame to interleaved RGB f32.
fn from_dynamic(dynamic: image::DynamicImage) -> DecodedImage {
    let source_is_grayscale = matches!(
        dynamic.color(),
        image::ColorType::L8 | image::ColorType::La8 | image::ColorType::L16 | image::ColorType::La16
    );

    let rgb = dynamic.to_rgb8();
    let width = rgb.width();
    let height = rgb.height();
    let data: Vec<f32> = rgb.into_raw().iter().map(|&v| v as f32 / 255.0).collect();

    DecodedImage {
        width,
        height,
        data,
        channels: 3,
        source_is_grayscale,
    }
}
