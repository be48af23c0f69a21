//! Input file handling and path utilities.

use std::path::{Path, PathBuf};

/// Supported image extensions for processing
pub const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// Determine the output path for a processed image
///
/// # Arguments
/// * `input` - Input file path
/// * `out` - Optional output directory or file path
/// * `effect` - Effect name, embedded in the generated filename
///
/// # Returns
/// The full output path for the processed JPEG
pub fn determine_output_path(
    input: &Path,
    out: &Option<PathBuf>,
    effect: &str,
) -> Result<PathBuf, String> {
    if let Some(out_path) = out {
        // If out is a directory, use input filename with the effect suffix
        if out_path.is_dir() {
            let filename = input
                .file_stem()
                .ok_or("Invalid input filename")?
                .to_string_lossy();
            Ok(out_path.join(format!("{}_{}.jpg", filename, effect)))
        } else {
            // Use the specified path as-is
            Ok(out_path.clone())
        }
    } else {
        // Use input directory with modified filename
        let filename = input
            .file_stem()
            .ok_or("Invalid input filename")?
            .to_string_lossy();
        let parent = input.parent().unwrap_or(Path::new("."));
        Ok(parent.join(format!("{}_{}.jpg", filename, effect)))
    }
}

/// Expand a list of inputs (files and directories) into a list of image files.
///
/// Directories are scanned for supported image files (.jpg, .jpeg, .png).
/// If `recursive` is true, subdirectories are also scanned. The result is
/// sorted so batch runs visit files in a stable order.
pub fn expand_inputs(inputs: &[PathBuf], recursive: bool) -> Result<Vec<PathBuf>, String> {
    let mut files = Vec::new();

    for input in inputs {
        if input.is_dir() {
            collect_images_from_dir(input, recursive, &mut files)?;
        } else if input.exists() {
            files.push(input.clone());
        } else {
            return Err(format!("Input not found: {}", input.display()));
        }
    }

    files.sort();
    Ok(files)
}

fn collect_images_from_dir(
    dir: &Path,
    recursive: bool,
    files: &mut Vec<PathBuf>,
) -> Result<(), String> {
    let entries = std::fs::read_dir(dir)
        .map_err(|e| format!("Failed to read directory {}: {}", dir.display(), e))?;

    for entry in entries {
        let entry = entry.map_err(|e| format!("Failed to read directory entry: {}", e))?;
        let path = entry.path();

        if path.is_dir() {
            if recursive {
                collect_images_from_dir(&path, recursive, files)?;
            }
        } else if has_supported_extension(&path) {
            files.push(path);
        }
    }

    Ok(())
}

fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .map(|e| SUPPORTED_EXTENSIONS.contains(&e.as_str()))
        .unwrap_or(false)
}
