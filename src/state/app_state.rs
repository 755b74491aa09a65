//! Session state: the catalog, what is checked, and saved preferences.

use std::path::{Path, PathBuf};

use crate::config::{Catalog, Tool};
use crate::error::Result;
use crate::script::{write_script, ScriptAssembler};
use crate::shell::{DetachedProcess, LaunchReport, TerminalLauncher};

use super::{Preferences, SelectionSet};

/// Everything one interactive session works with.
///
/// All mutation goes through these methods so the selection can never
/// hold an id the catalog does not know.
#[derive(Debug, Clone)]
pub struct AppState {
    catalog: Catalog,
    selection: SelectionSet,
    preferences: Preferences,
    preferences_path: Option<PathBuf>,
    last_script: Option<String>,
}

impl AppState {
    /// Start a session with nothing selected.
    pub fn new(catalog: Catalog, preferences: Preferences, preferences_path: Option<PathBuf>) -> Self {
        Self {
            catalog,
            selection: SelectionSet::new(),
            preferences,
            preferences_path,
            last_script: None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    pub fn preferences_path(&self) -> Option<&Path> {
        self.preferences_path.as_deref()
    }

    /// Selected tools in catalog order.
    pub fn selected_tools(&self) -> Vec<&Tool> {
        self.selection.tools_in(&self.catalog)
    }

    pub fn has_selection(&self) -> bool {
        !self.selection.is_empty()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.contains(id)
    }

    /// Flip a tool. Returns whether it is selected afterwards.
    ///
    /// Unknown ids are ignored and report `false`.
    pub fn toggle(&mut self, id: &str) -> bool {
        if !self.catalog.contains(id) {
            tracing::debug!("Ignoring toggle of unknown tool '{}'", id);
            return false;
        }
        self.last_script = None;
        self.selection.toggle(id)
    }

    /// Check a tool. Returns `false` for unknown ids.
    pub fn select(&mut self, id: &str) -> bool {
        if !self.catalog.contains(id) {
            tracing::debug!("Ignoring selection of unknown tool '{}'", id);
            return false;
        }
        self.last_script = None;
        self.selection.insert(id);
        true
    }

    /// Uncheck a tool. Returns `true` if it was selected.
    pub fn deselect(&mut self, id: &str) -> bool {
        let removed = self.selection.remove(id);
        if removed {
            self.last_script = None;
        }
        removed
    }

    /// Replace the whole selection. Unknown ids are skipped.
    pub fn set_selection<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.selection.clear();
        self.last_script = None;
        for id in ids {
            self.select(id.as_ref());
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
        self.last_script = None;
    }

    /// Swap in a freshly loaded catalog.
    ///
    /// Returns the ids that were dropped from the selection because the
    /// new catalog no longer has them.
    pub fn replace_catalog(&mut self, catalog: Catalog) -> Vec<String> {
        self.catalog = catalog;
        self.last_script = None;
        let stale = self.selection.retain_known(&self.catalog);
        if !stale.is_empty() {
            tracing::debug!("Dropped stale selections: {}", stale.join(", "));
        }
        stale
    }

    /// Assemble the script for the current selection and remember it.
    pub fn generate_script(&mut self) -> &str {
        let script = ScriptAssembler::for_catalog(&self.catalog).assemble(&self.catalog, &self.selection);
        self.last_script.insert(script)
    }

    /// The script from the last [`generate_script`](Self::generate_script),
    /// if the selection has not changed since.
    pub fn last_script(&self) -> Option<&str> {
        self.last_script.as_deref()
    }

    fn current_script(&mut self) -> String {
        match &self.last_script {
            Some(script) => script.clone(),
            None => self.generate_script().to_string(),
        }
    }

    /// Write the script for the current selection to `path`.
    ///
    /// # Errors
    ///
    /// Returns `ScriptWriteError` if the file cannot be written. The
    /// selection is left untouched either way.
    pub fn save_script(&mut self, path: &Path) -> Result<PathBuf> {
        let script = self.current_script();
        write_script(path, &script)
    }

    /// Change "don't show on startup" and save right away.
    ///
    /// The in-memory value changes even if saving fails.
    ///
    /// # Errors
    ///
    /// Returns `PreferencesError` if the file cannot be written.
    pub fn set_hide_on_startup(&mut self, hide: bool) -> Result<()> {
        self.preferences.set_hide_on_startup(hide);
        match &self.preferences_path {
            Some(path) => self.preferences.save(path),
            None => {
                tracing::warn!("No preferences location; setting kept for this session only");
                Ok(())
            }
        }
    }

    /// Open the current script in a new terminal window.
    ///
    /// # Errors
    ///
    /// Returns `ScriptWriteError` or `LaunchError` from the launcher.
    pub fn launch_script(
        &mut self,
        launcher: &TerminalLauncher,
        process: &dyn DetachedProcess,
    ) -> Result<LaunchReport> {
        let script = self.current_script();
        launcher.launch(&script, process)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_catalog;
    use crate::error::ToolpickError;
    use std::fs;
    use tempfile::TempDir;

    const CATALOG: &str = r#"
categories:
  - name: Languages
    options:
      - id: node
        label: Node.js
        script: apt-get install -y nodejs
      - id: python
        label: Python
        script: apt-get install -y python3
  - name: Editors
    options:
      - id: vim
        label: Vim
        script: apt-get install -y vim
"#;

    fn state() -> AppState {
        let catalog = parse_catalog(CATALOG, Path::new("config.yaml")).unwrap();
        AppState::new(catalog, Preferences::default(), None)
    }

    #[test]
    fn toggle_flips_selection() {
        let mut state = state();
        assert!(state.toggle("vim"));
        assert!(state.is_selected("vim"));
        assert!(!state.toggle("vim"));
        assert!(!state.is_selected("vim"));
    }

    #[test]
    fn unknown_ids_are_no_ops() {
        let mut state = state();
        assert!(!state.select("ghost"));
        assert!(!state.toggle("ghost"));
        assert!(!state.has_selection());
    }

    #[test]
    fn deselect_reports_whether_removed() {
        let mut state = state();
        state.select("node");
        assert!(state.deselect("node"));
        assert!(!state.deselect("node"));
    }

    #[test]
    fn set_selection_replaces_and_filters() {
        let mut state = state();
        state.select("vim");
        state.set_selection(["python", "ghost"]);
        let ids: Vec<&str> = state.selection().iter().collect();
        assert_eq!(ids, ["python"]);
    }

    #[test]
    fn selected_tools_follow_catalog_order() {
        let mut state = state();
        state.select("vim");
        state.select("node");
        let ids: Vec<&str> = state.selected_tools().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["node", "vim"]);
    }

    #[test]
    fn replace_catalog_prunes_stale_ids() {
        let mut state = state();
        state.set_selection(["node", "vim"]);

        let smaller = parse_catalog(
            "categories:\n  - name: Editors\n    options:\n      - {id: vim, label: Vim, script: 'true'}\n",
            Path::new("config.yaml"),
        )
        .unwrap();
        let stale = state.replace_catalog(smaller);

        assert_eq!(stale, ["node"]);
        assert!(state.is_selected("vim"));
        assert!(!state.generate_script().contains("nodejs"));
    }

    #[test]
    fn script_follows_catalog_order_not_check_order() {
        let mut state = state();
        state.select("vim");
        state.select("python");
        state.select("node");

        let script = state.generate_script();
        let node = script.find("apt-get install -y nodejs").unwrap();
        let python = script.find("apt-get install -y python3").unwrap();
        let vim = script.find("apt-get install -y vim").unwrap();
        assert!(node < python && python < vim);
    }

    #[test]
    fn generate_script_is_cached_until_selection_changes() {
        let mut state = state();
        state.select("python");
        state.generate_script();
        assert!(state.last_script().unwrap().contains("apt-get install -y python3"));

        state.select("vim");
        assert!(state.last_script().is_none());
    }

    #[test]
    fn clear_selection_yields_header_only() {
        let mut state = state();
        state.set_selection(["node", "python"]);
        state.clear_selection();
        let header = ScriptAssembler::for_catalog(state.catalog()).header();
        assert_eq!(state.generate_script(), header);
    }

    #[test]
    fn save_script_writes_current_selection() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("install-dev-env.sh");
        let mut state = state();
        state.select("vim");

        state.save_script(&path).unwrap();
        assert!(fs::read_to_string(&path).unwrap().contains("apt-get install -y vim"));
    }

    #[test]
    fn failed_save_keeps_selection() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing").join("install.sh");
        let mut state = state();
        state.select("vim");

        let err = state.save_script(&path).unwrap_err();
        assert!(matches!(err, ToolpickError::ScriptWriteError { .. }));
        assert!(state.is_selected("vim"));
    }

    #[test]
    fn set_hide_on_startup_saves_immediately() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("user_settings.ini");
        let catalog = parse_catalog(CATALOG, Path::new("config.yaml")).unwrap();
        let mut state = AppState::new(catalog, Preferences::default(), Some(path.clone()));

        state.set_hide_on_startup(true).unwrap();

        assert!(Preferences::load(&path).unwrap().hide_on_startup());
    }

    #[test]
    fn set_hide_on_startup_changes_memory_even_when_save_fails() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("file");
        fs::write(&blocker, "").unwrap();
        let path = blocker.join("user_settings.ini");
        let catalog = parse_catalog(CATALOG, Path::new("config.yaml")).unwrap();
        let mut state = AppState::new(catalog, Preferences::default(), Some(path));

        assert!(state.set_hide_on_startup(true).is_err());
        assert!(state.preferences().hide_on_startup());
    }
}
