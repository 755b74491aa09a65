//! Validated, strongly typed tool catalog.

use serde::Serialize;

use crate::config::schema::CatalogConfig;
use crate::config::validator::validate;
use crate::error::{Result, ToolpickError};

/// A single installable tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tool {
    /// Identifier, unique within the catalog.
    pub id: String,
    /// Checkbox label.
    pub label: String,
    /// Shell snippet that installs the tool.
    pub script: String,
}

/// A named group of tools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub name: String,
    pub description: String,
    pub tools: Vec<Tool>,
}

/// The full set of categories and tools loaded from configuration.
///
/// A `Catalog` can only be built from a [`CatalogConfig`] that passed
/// validation, so every tool has a unique, non-empty id, label and script.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Catalog {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_version: Option<String>,
    pub categories: Vec<Category>,
}

impl Catalog {
    /// Validate a parsed config and build the typed catalog.
    ///
    /// # Errors
    ///
    /// Returns `ConfigValidationError` listing every rule that failed.
    pub fn from_config(config: CatalogConfig) -> Result<Self> {
        validate(&config)?;

        let categories = config
            .categories
            .into_iter()
            .map(|category| Category {
                name: category.name.unwrap_or_default().trim().to_string(),
                description: category.description.trim().to_string(),
                tools: category
                    .options
                    .into_iter()
                    .map(|tool| Tool {
                        id: tool.id.unwrap_or_default().trim().to_string(),
                        label: tool.label.unwrap_or_default().trim().to_string(),
                        script: tool.script.unwrap_or_default(),
                    })
                    .collect(),
            })
            .collect();

        Ok(Self {
            app_name: config.app_name,
            subtitle: config.subtitle,
            app_version: config.app_version,
            categories,
        })
    }

    /// Title for the welcome header.
    pub fn title(&self) -> &str {
        self.app_name.as_deref().unwrap_or("Developer Environment Setup")
    }

    /// All tools in catalog order (category order, then tool order).
    pub fn tools(&self) -> impl Iterator<Item = &Tool> {
        self.categories.iter().flat_map(|c| c.tools.iter())
    }

    /// Look up a tool by id.
    pub fn tool(&self, id: &str) -> Option<&Tool> {
        self.tools().find(|t| t.id == id)
    }

    /// Whether a tool with this id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.tool(id).is_some()
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    pub fn tool_count(&self) -> usize {
        self.categories.iter().map(|c| c.tools.len()).sum()
    }

    /// Resolve user-supplied ids, failing on the first unknown one.
    ///
    /// # Errors
    ///
    /// Returns `UnknownTool` for an id that is not in the catalog.
    pub fn require_tools<'a, I>(&self, ids: I) -> Result<Vec<&Tool>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        ids.into_iter()
            .map(|id| {
                self.tool(id).ok_or_else(|| ToolpickError::UnknownTool {
                    id: id.to_string(),
                })
            })
            .collect()
    }
}

impl TryFrom<CatalogConfig> for Catalog {
    type Error = ToolpickError;

    fn try_from(config: CatalogConfig) -> Result<Self> {
        Self::from_config(config)
    }
}
