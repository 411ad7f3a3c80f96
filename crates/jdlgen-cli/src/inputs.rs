//! Configuration and input file discovery

use anyhow::{Context, Result};
use jdlgen_core::CodegenConfig;
use jdlgen_logging::ReloadHandle;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Configuration file picked up from the working directory
pub const DEFAULT_CONFIG_FILE: &str = "jdlgen.toml";

/// Load the configuration and apply its log level
///
/// An explicit path must exist; otherwise `./jdlgen.toml` is used when present
/// and built-in defaults when not. `--verbose` keeps debug logging regardless
/// of the configured level.
pub fn load_config(path: Option<PathBuf>, verbose: bool) -> Result<CodegenConfig> {
    let config = match path {
        Some(path) => CodegenConfig::from_file(&path)
            .with_context(|| format!("failed to load configuration {}", path.display()))?,
        None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
            CodegenConfig::from_file(DEFAULT_CONFIG_FILE)
                .with_context(|| format!("failed to load configuration {DEFAULT_CONFIG_FILE}"))?
        }
        None => CodegenConfig::default(),
    };

    let handle = ReloadHandle::global();
    if !verbose && handle.is_initialized() {
        handle.reload_level(config.log_level())?;
    }

    Ok(config)
}

/// Input files for a run
///
/// Explicit paths are used as given. Without any, every `*.json` file in the
/// configured input directory is used, sorted by name.
pub fn jdl_inputs(explicit: Vec<PathBuf>, config: &CodegenConfig) -> Result<Vec<PathBuf>> {
    if !explicit.is_empty() {
        return Ok(explicit);
    }

    let dir = config.input_dir();
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read input directory {}", dir.display()))?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            paths.push(path);
        }
    }
    paths.sort();

    if paths.is_empty() {
        anyhow::bail!("no JDL JSON files found in {}", dir.display());
    }

    debug!(count = paths.len(), dir = %dir.display(), "discovered JDL inputs");
    Ok(paths)
}
