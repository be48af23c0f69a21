use rayon::prelude::*;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use lensify_cli::{
    determine_output_path, expand_inputs, process_single_image, ProcessingParams,
};

/// Process a set of inputs in parallel with one shared effect.
#[allow(clippy::too_many_arguments)]
pub fn cmd_batch(
    inputs: Vec<PathBuf>,
    effect: String,
    out: Option<PathBuf>,
    recursive: bool,
    quality: Option<u8>,
    seed: Option<u64>,
    threads: Option<usize>,
    silent: bool,
    verbose: bool,
) -> Result<(), String> {
    let batch_start = Instant::now();

    lensify_core::config::set_verbose(verbose);
    if verbose {
        lensify_core::config::log_config_usage();
    }

    if lensify_core::find_effect(&effect).is_none() {
        return Err(format!(
            "Unknown effect: {} (run `lensify effects` for the catalog)",
            effect
        ));
    }

    if inputs.is_empty() {
        return Err("No input files or directories specified".to_string());
    }

    // Expand directories to file lists
    let inputs = expand_inputs(&inputs, recursive)?;

    if inputs.is_empty() {
        return Err("No supported image files found (supported: .jpg, .jpeg, .png)".to_string());
    }

    if !silent {
        println!("Found {} image files to process", inputs.len());
    }

    // Configure thread pool if specified
    if let Some(num_threads) = threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .map_err(|e| format!("Failed to configure thread pool: {}", e))?;
        if !silent {
            println!("Using {} threads for parallel processing", num_threads);
        }
    }

    // Determine output directory
    let output_dir = out.clone().unwrap_or_else(|| PathBuf::from("."));
    if !output_dir.exists() {
        std::fs::create_dir_all(&output_dir)
            .map_err(|e| format!("Failed to create output directory: {}", e))?;
    }

    let quality = quality.unwrap_or(lensify_core::config::effect_defaults().jpeg_quality);

    // Suppress per-image output in batch mode
    let params = ProcessingParams {
        effect: effect.clone(),
        quality,
        seed: None,
        silent: true,
    };

    if !silent {
        println!("\nProcessing {} files in parallel...\n", inputs.len());
    }

    // Progress tracking
    let processed_count = AtomicUsize::new(0);
    let total_files = inputs.len();

    // Process files in parallel
    let results: Vec<Result<(PathBuf, f64), String>> = inputs
        .par_iter()
        .enumerate()
        .map(|(index, input)| {
            let file_start = Instant::now();

            let decoded = lensify_core::decoders::decode_image(input)
                .map_err(|e| format!("{}: {}", input.display(), e))?;

            let output_path = determine_output_path(input, &Some(output_dir.clone()), &effect)?;

            // A fixed seed still gives every file distinct (but reproducible)
            // draws: each file derives its own stream from the batch seed
            let file_params = ProcessingParams {
                seed: seed.map(|s| s.wrapping_add(index as u64)),
                ..params.clone()
            };

            process_single_image(decoded, &output_path, &file_params)
                .map_err(|e| format!("{}: {}", input.display(), e))?;

            let file_elapsed = file_start.elapsed().as_secs_f64();

            // Update progress
            let count = processed_count.fetch_add(1, Ordering::SeqCst) + 1;
            if !silent {
                println!(
                    "  [{}/{}] {} ({:.2}s)",
                    count,
                    total_files,
                    output_path.display(),
                    file_elapsed
                );
            }

            Ok((output_path, file_elapsed))
        })
        .collect();

    // Summarize results
    let mut succeeded = 0;
    let mut failures = Vec::new();
    for result in &results {
        match result {
            Ok(_) => succeeded += 1,
            Err(e) => failures.push(e.clone()),
        }
    }

    if !silent {
        println!(
            "\nProcessed {}/{} files in {:.2}s",
            succeeded,
            total_files,
            batch_start.elapsed().as_secs_f64()
        );
    }

    if !failures.is_empty() {
        for failure in &failures {
            eprintln!("[WARN] {}", failure);
        }
        return Err(format!("{} of {} files failed", failures.len(), total_files));
    }

    Ok(())
}
