//! Shared utilities for lensify-cli
//!
//! Reusable processing functions split out of the binary so the command
//! implementations and tests can share them.

pub mod processing;

// Re-export commonly used items at the crate root for convenience
pub use processing::{
    determine_output_path, expand_inputs, process_single_image, ProcessingParams,
    SUPPORTED_EXTENSIONS,
};
