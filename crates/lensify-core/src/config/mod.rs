//! Effect engine configuration management.
//!
//! Provides configuration loading, global verbose flag management, and the
//! tunable defaults for encoding and the stochastic effect family.

mod defaults;

pub use defaults::EffectDefaults;

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;

use serde::Deserialize;

// Global verbose flag for controlling debug output
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set the global verbose flag. When true, debug messages will be printed.
pub fn set_verbose(verbose: bool) {
    VERBOSE.store(verbose, Ordering::SeqCst);
}

/// Check if verbose mode is enabled.
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

/// Print a message to stderr only if verbose mode is enabled.
#[macro_export]
macro_rules! verbose_println {
    ($($arg:tt)*) => {
        if $crate::config::is_verbose() {
            eprintln!($($arg)*);
        }
    };
}

/// Canonical list of candidate config file names we search for on disk.
const CONFIG_FILENAMES: &[&str] = &["lensify.yml", "lensify.yaml"];

/// Environment variable that overrides the config search path.
const CONFIG_ENV_VAR: &str = "LENSIFY_CONFIG";

/// Top-level configuration file structure.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct LensifyConfig {
    pub defaults: EffectDefaults,
}

/// Public handle that stores the loaded configuration, its source path, and warnings.
pub struct LensifyConfigHandle {
    pub config: LensifyConfig,
    pub source: Option<PathBuf>,
    pub warnings: Vec<String>,
}

impl LensifyConfigHandle {
    fn with_config(mut config: LensifyConfig, source: Option<PathBuf>, mut warnings: Vec<String>) -> Self {
        warnings.extend(config.defaults.sanitize());
        Self {
            config,
            source,
            warnings,
        }
    }
}

static CONFIG: OnceLock<LensifyConfigHandle> = OnceLock::new();

/// Get the process-wide configuration handle, loading it on first use.
pub fn effect_config_handle() -> &'static LensifyConfigHandle {
    CONFIG.get_or_init(load_config)
}

/// Shortcut for the loaded effect defaults.
pub fn effect_defaults() -> &'static EffectDefaults {
    &effect_config_handle().config.defaults
}

/// Report where the active configuration came from (verbose mode only).
pub fn log_config_usage() {
    let handle = effect_config_handle();
    match &handle.source {
        Some(path) => verbose_println!("Config loaded from {}", path.display()),
        None => verbose_println!("Config: using built-in defaults"),
    }
    for warning in &handle.warnings {
        eprintln!("[WARN] {}", warning);
    }
}

fn load_config() -> LensifyConfigHandle {
    // Explicit path from the environment wins
    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        let path = PathBuf::from(env_path);
        return match read_config_file(&path) {
            Ok(config) => LensifyConfigHandle::with_config(config, Some(path), Vec::new()),
            Err(e) => LensifyConfigHandle::with_config(
                LensifyConfig::default(),
                None,
                vec![format!(
                    "Ignoring {} from {}: {}",
                    path.display(),
                    CONFIG_ENV_VAR,
                    e
                )],
            ),
        };
    }

    // Otherwise search the working directory
    for filename in CONFIG_FILENAMES {
        let path = Path::new(filename);
        if path.exists() {
            return match read_config_file(path) {
                Ok(config) => {
                    LensifyConfigHandle::with_config(config, Some(path.to_path_buf()), Vec::new())
                }
                Err(e) => LensifyConfigHandle::with_config(
                    LensifyConfig::default(),
                    None,
                    vec![format!("Ignoring {}: {}", path.display(), e)],
                ),
            };
        }
    }

    LensifyConfigHandle::with_config(LensifyConfig::default(), None, Vec::new())
}

fn read_config_file(path: &Path) -> Result<LensifyConfig, String> {
    let contents =
        std::fs::read_to_string(path).map_err(|e| format!("Failed to read config file: {}", e))?;

    serde_yaml::from_str(&contents).map_err(|e| format!("Failed to parse config YAML: {}", e))
}
