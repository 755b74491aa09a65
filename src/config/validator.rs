//! Catalog validation rules.
//!
//! This module validates a parsed catalog before it is used:
//! - Categories must have a name
//! - Tools must have a non-empty id, label and script
//! - Tool ids must be unique across the catalog
//! - Tool ids must not contain whitespace or commas

use crate::config::schema::CatalogConfig;
use crate::error::{Result, ToolpickError};
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Ids are passed as comma-separated CLI values, so they stay shell-friendly.
static TOOL_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_.+-]*$").expect("valid tool id regex"));

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
    /// Category name (or position) the error belongs to
    pub category: Option<String>,
    /// Tool id if error is tool-specific
    pub tool: Option<String>,
}

/// Validate a catalog and return all errors.
///
/// Collects every error instead of stopping at the first one, so a broken
/// catalog can be fixed in one pass.
pub fn validate_config(config: &CatalogConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    errors.extend(validate_categories(config));
    errors.extend(validate_tools(config));
    errors.extend(validate_unique_ids(config));

    errors
}

fn category_label(index: usize, name: Option<&str>) -> String {
    match name {
        Some(name) if !name.trim().is_empty() => name.to_string(),
        _ => format!("#{}", index + 1),
    }
}

fn validate_categories(config: &CatalogConfig) -> Vec<ValidationError> {
    config
        .categories
        .iter()
        .enumerate()
        .filter(|(_, category)| {
            category
                .name
                .as_deref()
                .is_none_or(|name| name.trim().is_empty())
        })
        .map(|(index, _)| ValidationError {
            rule: "missing-category-name".to_string(),
            message: format!("Category #{} must have a 'name'", index + 1),
            category: Some(category_label(index, None)),
            tool: None,
        })
        .collect()
}

fn validate_tools(config: &CatalogConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (cat_index, category) in config.categories.iter().enumerate() {
        let cat_name = category_label(cat_index, category.name.as_deref());

        for (tool_index, tool) in category.options.iter().enumerate() {
            let id = tool.id.as_deref().map(str::trim).unwrap_or_default();
            let subject = if id.is_empty() {
                format!("Option #{} in category '{}'", tool_index + 1, cat_name)
            } else {
                format!("Tool '{}'", id)
            };

            let mut missing = |field: &str, value: Option<&str>| {
                if value.is_none_or(|v| v.trim().is_empty()) {
                    errors.push(ValidationError {
                        rule: format!("missing-{}", field),
                        message: format!("{} must have a non-empty '{}'", subject, field),
                        category: Some(cat_name.clone()),
                        tool: (!id.is_empty()).then(|| id.to_string()),
                    });
                }
            };

            missing("id", tool.id.as_deref());
            missing("label", tool.label.as_deref());
            missing("script", tool.script.as_deref());

            if !id.is_empty() && !TOOL_ID.is_match(id) {
                errors.push(ValidationError {
                    rule: "invalid-id".to_string(),
                    message: format!(
                        "Tool id '{}' may only contain letters, digits, '_', '.', '+' and '-'",
                        id
                    ),
                    category: Some(cat_name.clone()),
                    tool: Some(id.to_string()),
                });
            }
        }
    }

    errors
}

fn validate_unique_ids(config: &CatalogConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();

    for (cat_index, category) in config.categories.iter().enumerate() {
        for tool in &category.options {
            let Some(id) = tool.id.as_deref().map(str::trim) else {
                continue;
            };
            if id.is_empty() {
                continue;
            }
            if !seen.insert(id) && reported.insert(id) {
                errors.push(ValidationError {
                    rule: "duplicate-id".to_string(),
                    message: format!("Tool id '{}' is defined more than once", id),
                    category: Some(category_label(cat_index, category.name.as_deref())),
                    tool: Some(id.to_string()),
                });
            }
        }
    }

    errors
}

/// Validate and return Result (for convenience).
///
/// # Errors
///
/// Returns `ConfigValidationError` if any validation rules fail.
pub fn validate(config: &CatalogConfig) -> Result<()> {
    let errors = validate_config(config);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(ToolpickError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}
