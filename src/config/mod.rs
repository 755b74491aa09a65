//! Catalog loading, parsing, and validation.
//!
//! This module handles everything between the YAML file on disk and the
//! typed [`Catalog`] the rest of the application works with:
//! - Raw file schema in [`schema`]
//! - Validation in [`validator`]
//! - The typed catalog in [`catalog`]
//! - File loading in [`loader`]
//! - Remote updates in [`remote`]
//!
//! # Example
//!
//! ```
//! use toolpick::config::load_catalog;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let path = temp.path().join("config.yaml");
//! fs::write(
//!     &path,
//!     "categories:\n  - name: Editors\n    options:\n      - id: vim\n        label: Vim\n        script: apt-get install -y vim\n",
//! )
//! .unwrap();
//!
//! let catalog = load_catalog(&path).unwrap();
//! assert_eq!(catalog.tool_count(), 1);
//! ```

pub mod catalog;
pub mod loader;
pub mod remote;
pub mod schema;
pub mod validator;

pub use catalog::{Catalog, Category, Tool};
pub use loader::{
    load_catalog, parse_catalog, parse_config, resolve_config_path, DEFAULT_CONFIG_FILE,
};
pub use remote::{CatalogUpdater, CONFIG_URL_ENV};
pub use schema::{CatalogConfig, CategoryConfig, ToolConfig};
pub use validator::{validate, validate_config, ValidationError};

/// Starter catalog written by `toolpick init`.
pub const STARTER_CATALOG: &str = include_str!("starter.yaml");
