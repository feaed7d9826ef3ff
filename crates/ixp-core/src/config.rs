//! Environment-driven pipeline configuration.

use std::path::PathBuf;

use crate::ConfigError;

/// Tunables for the enrichment pipeline. Everything has a default; the
/// pipeline must run with zero configuration.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub data_dir: PathBuf,
    /// Batch-mode input (raw submissions).
    pub raw_path: PathBuf,
    /// Batch-mode output (enriched catalog).
    pub enhanced_path: PathBuf,
    pub log_level: String,
    /// Cosine similarity above which two questions are near-duplicates.
    pub dedupe_threshold: f32,
    pub max_highlights: usize,
}

/// Load pipeline configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading
/// env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a set env var has an invalid value.
pub fn load_config() -> Result<PipelineConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_config_from_env()
}

/// Load pipeline configuration from env vars already in the process.
///
/// Unlike [`load_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a set env var has an invalid value.
pub fn load_config_from_env() -> Result<PipelineConfig, ConfigError> {
    build_config(|key| std::env::var(key))
}

/// Build configuration using the provided env-var lookup function.
///
/// The parsing/validation logic is decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup.
fn build_config<F>(lookup: F) -> Result<PipelineConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_f32 = |var: &str, default: &str| -> Result<f32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<f32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let data_dir = PathBuf::from(or_default("IXP_DATA_DIR", "./data"));

    let raw_path = lookup("IXP_RAW_PATH")
        .map_or_else(|_| data_dir.join("raw_data.json"), PathBuf::from);
    let enhanced_path = lookup("IXP_ENHANCED_PATH")
        .map_or_else(|_| data_dir.join("enhanced_gfg_data.json"), PathBuf::from);

    let log_level = or_default("IXP_LOG_LEVEL", "info");

    let dedupe_threshold = parse_f32("IXP_DEDUPE_THRESHOLD", "0.8")?;
    if !(dedupe_threshold > 0.0 && dedupe_threshold <= 1.0) {
        return Err(ConfigError::InvalidEnvVar {
            var: "IXP_DEDUPE_THRESHOLD".to_string(),
            reason: format!("{dedupe_threshold} is not in (0, 1]"),
        });
    }

    let max_highlights = parse_usize("IXP_MAX_HIGHLIGHTS", "8")?;

    Ok(PipelineConfig {
        data_dir,
        raw_path,
        enhanced_path,
        log_level,
        dedupe_threshold,
        max_highlights,
    })
}
