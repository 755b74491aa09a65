//! Catalog and preferences loading shared by several commands.

use std::path::Path;

use crate::config::{load_catalog, Catalog, CatalogUpdater};
use crate::error::{Result, ToolpickError};
use crate::state::Preferences;
use crate::ui::UserInterface;

use super::dispatcher::CommandContext;

/// Exit code when the catalog file does not exist.
pub const EXIT_CONFIG_NOT_FOUND: i32 = 2;

/// Refresh the catalog if a URL is configured, then load it.
///
/// Returns `Ok(None)` after reporting a missing catalog; callers exit with
/// [`EXIT_CONFIG_NOT_FOUND`].
pub fn open_catalog(ctx: &CommandContext, ui: &mut dyn UserInterface) -> Result<Option<Catalog>> {
    if let Some(url) = &ctx.update_url {
        refresh_catalog(url, &ctx.config_path, ui);
    }

    match load_catalog(&ctx.config_path) {
        Ok(catalog) => {
            tracing::debug!(
                "Loaded {} categories, {} tools from {}",
                catalog.category_count(),
                catalog.tool_count(),
                ctx.config_path.display()
            );
            Ok(Some(catalog))
        }
        Err(ToolpickError::ConfigNotFound { path }) => {
            ui.error(&format!(
                "No catalog found at {}. Run 'toolpick init' first.",
                path.display()
            ));
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Download the catalog from `url` over `local_path`.
///
/// Any failure leaves the local file alone and is announced as a warning.
/// Returns whether the local file was replaced.
pub fn refresh_catalog(url: &str, local_path: &Path, ui: &mut dyn UserInterface) -> bool {
    let mut spinner = ui.start_spinner(&format!("Checking {} for catalog updates", url));

    match CatalogUpdater::default_timeout().and_then(|updater| updater.update(url, local_path)) {
        Ok(()) => {
            spinner.finish_success("Catalog updated");
            true
        }
        Err(e) => {
            spinner.finish_error("Catalog update failed");
            tracing::warn!("Catalog update failed: {}", e);
            ui.warning(&format!("{}. Using the local catalog.", e));
            false
        }
    }
}

/// Load preferences, falling back to defaults with a warning.
pub fn load_preferences(ctx: &CommandContext, ui: &mut dyn UserInterface) -> Preferences {
    let Some(path) = &ctx.preferences_path else {
        tracing::debug!("No preferences location available");
        return Preferences::default();
    };

    match Preferences::load(path) {
        Ok(prefs) => prefs,
        Err(e) => {
            ui.warning(&format!("{}. Using default preferences.", e));
            Preferences::default()
        }
    }
}
