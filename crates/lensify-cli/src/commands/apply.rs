use std::path::PathBuf;
use std::time::Instant;

use lensify_cli::{determine_output_path, process_single_image, ProcessingParams};

/// Execute the apply command for a single image.
///
/// Decodes the input, applies the named effect, and writes the JPEG result.
pub fn cmd_apply(
    input: PathBuf,
    out: Option<PathBuf>,
    effect: String,
    quality: Option<u8>,
    seed: Option<u64>,
    silent: bool,
    verbose: bool,
) -> Result<(), String> {
    let start_time = Instant::now();

    lensify_core::config::set_verbose(verbose);
    if verbose {
        lensify_core::config::log_config_usage();
    }

    // Refuse unknown names before touching the input file
    if lensify_core::find_effect(&effect).is_none() {
        return Err(format!(
            "Unknown effect: {} (run `lensify effects` for the catalog)",
            effect
        ));
    }

    if !silent {
        println!("Applying {} to {}...", effect, input.display());
    }

    // Decode input image
    if !silent {
        println!("Decoding image...");
    }
    let decoded = lensify_core::decoders::decode_image(&input)?;
    if !silent {
        let color_mode = if decoded.source_is_grayscale {
            "expanded from grayscale"
        } else {
            "RGB"
        };
        println!(
            "  Image: {}x{}, {} channels ({})",
            decoded.width, decoded.height, decoded.channels, color_mode
        );
    }

    let quality = quality.unwrap_or(lensify_core::config::effect_defaults().jpeg_quality);
    let output_path = determine_output_path(&input, &out, &effect)?;

    let params = ProcessingParams {
        effect,
        quality,
        seed,
        silent,
    };

    process_single_image(decoded, &output_path, &params)?;

    if !silent {
        println!("Done in {:.2}s", start_time.elapsed().as_secs_f64());
    }

    Ok(())
}
