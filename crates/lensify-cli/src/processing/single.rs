//! Single image processing shared by the apply and batch commands.

use std::path::{Path, PathBuf};

use lensify_core::decoders::DecodedImage;
use lensify_core::{apply_effect, apply_effect_seeded};

/// Options shared across every image in a run.
#[derive(Debug, Clone)]
pub struct ProcessingParams {
    /// Catalog name of the effect to apply
    pub effect: String,

    /// JPEG encoding quality (1-100)
    pub quality: u8,

    /// Fixed seed for stochastic effects; None draws fresh entropy per image
    pub seed: Option<u64>,

    /// Suppress per-image output
    pub silent: bool,
}

/// Apply the configured effect to a decoded image and write the JPEG result.
///
/// Returns the output path on success.
pub fn process_single_image(
    decoded: DecodedImage,
    output_path: &Path,
    params: &ProcessingParams,
) -> Result<PathBuf, String> {
    let processed = match params.seed {
        Some(seed) => apply_effect_seeded(&params.effect, &decoded, seed)?,
        None => apply_effect(&params.effect, &decoded)?,
    };

    lensify_core::exporters::export_jpeg(&processed, output_path, params.quality)?;

    if !params.silent {
        println!("  Saved {}", output_path.display());
    }

    Ok(output_path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn image_fixture() -> DecodedImage {
        DecodedImage {
            width: 12,
            height: 8,
            data: vec![0.4; 12 * 8 * 3],
            channels: 3,
            source_is_grayscale: false,
        }
    }

    #[test]
    fn test_process_single_image_writes_output() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("out.jpg");

        let params = ProcessingParams {
            effect: "warm".to_string(),
            quality: 95,
            seed: None,
            silent: true,
        };

        let written = process_single_image(image_fixture(), &out, &params).unwrap();
        assert_eq!(written, out);
        assert!(out.exists());

        let decoded = lensify_core::decoders::decode_image(&out).unwrap();
        assert_eq!(decoded.width, 12);
        assert_eq!(decoded.height, 8);
    }

    #[test]
    fn test_process_single_image_unknown_effect() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("out.jpg");

        let params = ProcessingParams {
            effect: "nope".to_string(),
            quality: 95,
            seed: None,
            silent: true,
        };

        let result = process_single_image(image_fixture(), &out, &params);
        assert!(result.is_err());
        assert!(!out.exists());
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let dir = tempdir().unwrap();
        let out_a = dir.path().join("a.jpg");
        let out_b = dir.path().join("b.jpg");

        let params = ProcessingParams {
            effect: "grain".to_string(),
            quality: 95,
            seed: Some(77),
            silent: true,
        };

        process_single_image(image_fixture(), &out_a, &params).unwrap();
        process_single_image(image_fixture(), &out_b, &params).unwrap();

        let bytes_a = std::fs::read(&out_a).unwrap();
        let bytes_b = std::fs::read(&out_b).unwrap();
        assert_eq!(bytes_a, bytes_b);
    }
}
