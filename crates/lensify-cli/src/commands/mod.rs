//! Command implementations for the lensify CLI.

mod apply;
mod batch;
mod effects;

// Re-export all command functions
pub use apply::cmd_apply;
pub use batch::cmd_batch;
pub use effects::cmd_effects;
