//! Catalog file discovery and loading.

use crate::config::catalog::Catalog;
use crate::config::schema::CatalogConfig;
use crate::error::{Result, ToolpickError};
use std::fs;
use std::path::{Path, PathBuf};

/// File name used when no `--config` path is given.
pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";

/// Resolve the catalog path.
///
/// An explicit path wins; otherwise `config.yaml` in the working directory.
pub fn resolve_config_path(override_path: Option<&Path>, cwd: &Path) -> PathBuf {
    match override_path {
        Some(path) if path.is_absolute() => path.to_path_buf(),
        Some(path) => cwd.join(path),
        None => cwd.join(DEFAULT_CONFIG_FILE),
    }
}

/// Parse YAML content into the raw catalog schema.
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
///
/// An empty, comments-only or null (`~`) document is an empty catalog.
pub fn parse_config(content: &str, source_path: &Path) -> Result<CatalogConfig> {
    let config: Option<CatalogConfig> =
        serde_yaml::from_str(content).map_err(|e| ToolpickError::ConfigParseError {
            path: source_path.to_path_buf(),
            message: e.to_string(),
        })?;
    Ok(config.unwrap_or_default())
}

/// Parse and validate YAML content into a [`Catalog`].
pub fn parse_catalog(content: &str, source_path: &Path) -> Result<Catalog> {
    let config = parse_config(content, source_path)?;
    Catalog::from_config(config)
}

/// Load a catalog file.
///
/// Either the whole catalog loads or an error is returned; there is no
/// partially loaded state.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
/// Returns `ConfigValidationError` if a tool lacks a required field.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ToolpickError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ToolpickError::Io(e)
        }
    })?;

    let catalog = parse_catalog(&content, path)?;
    tracing::debug!(
        "Loaded catalog from {}: {} categories, {} tools",
        path.display(),
        catalog.category_count(),
        catalog.tool_count()
    );
    Ok(catalog)
}
