//! Catalog file schema.
//!
//! These structs map one-to-one onto the YAML catalog format. Every field a
//! tool needs is optional here so that the validator can report all missing
//! fields at once; the strongly typed [`Catalog`](super::Catalog) is only
//! built after validation succeeds.

use serde::{Deserialize, Serialize};

/// Root of a catalog file.
///
/// ```yaml
/// app_name: Developer Environment Setup
/// categories:
///   - name: Languages
///     description: Programming language toolchains
///     options:
///       - id: python
///         label: Python 3 + pip
///         script: apt-get install -y python3 python3-pip
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Title shown on the welcome header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_name: Option<String>,

    /// Line shown under the title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,

    /// Catalog version shown on the welcome header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_version: Option<String>,

    /// Categories in display order.
    pub categories: Vec<CategoryConfig>,
}

/// A category as written in the catalog file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// Tools in display order.
    pub options: Vec<ToolConfig>,
}

/// A tool entry as written in the catalog file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    /// Identifier, unique across the whole catalog.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Checkbox label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Shell snippet that installs the tool.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script: Option<String>,
}
