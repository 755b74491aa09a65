//! Builds the installation script from a catalog and a selection.

use crate::config::{Catalog, Tool};
use crate::state::SelectionSet;

/// Prerequisites installed once by the header, before any snippet runs.
pub const BASE_PACKAGES: &[&str] = &[
    "apt-transport-https",
    "ca-certificates",
    "gnupg",
    "lsb-release",
    "curl",
    "wget",
    "software-properties-common",
    "python3",
    "python3-venv",
    "unzip",
    "zip",
];

const RULE_WIDTH: usize = 70;

/// Assembles bash scripts from catalog snippets.
///
/// Snippets always appear in catalog order (category order, then tool order
/// within a category), never in the order the user checked them. The header
/// runs `apt-get update` exactly once no matter how many tools are selected.
#[derive(Debug, Clone)]
pub struct ScriptAssembler {
    generator: String,
}

impl Default for ScriptAssembler {
    fn default() -> Self {
        Self::new("toolpick")
    }
}

impl ScriptAssembler {
    /// Create an assembler; `generator` is named in the header comment.
    pub fn new(generator: impl Into<String>) -> Self {
        Self {
            generator: generator.into(),
        }
    }

    /// Assembler whose header names the catalog's title.
    pub fn for_catalog(catalog: &Catalog) -> Self {
        Self::new(catalog.title())
    }

    /// The fixed preamble every generated script starts with.
    pub fn header(&self) -> String {
        [
            "#!/usr/bin/env bash".to_string(),
            format!("# Generated by {}", self.generator),
            "# Review this script before running it: sudo -E ./install-dev-env.sh".to_string(),
            "set -e".to_string(),
            String::new(),
            "# Root check".to_string(),
            r#"if [ "$(id -u)" != "0" ]; then"#.to_string(),
            r#"  echo "Please run as root: sudo -E $0""#.to_string(),
            "  exit 1".to_string(),
            "fi".to_string(),
            String::new(),
            "# Capture the invoking user (not root)".to_string(),
            "SUDO_USER=${SUDO_USER:-$USER}".to_string(),
            "export DEBIAN_FRONTEND=noninteractive".to_string(),
            String::new(),
            r#"echo "Starting system update...""#.to_string(),
            "apt-get update".to_string(),
            format!("apt-get install -y {}", BASE_PACKAGES.join(" ")),
            String::new(),
            "#".repeat(RULE_WIDTH),
            String::new(),
        ]
        .join("\n")
    }

    /// Build the full script.
    ///
    /// An empty selection, or one whose ids are all unknown to the catalog,
    /// yields exactly [`header`](Self::header).
    pub fn assemble(&self, catalog: &Catalog, selection: &SelectionSet) -> String {
        let mut script = self.header();

        let mut any = false;
        for category in &catalog.categories {
            let selected: Vec<&Tool> = category
                .tools
                .iter()
                .filter(|t| selection.contains(&t.id))
                .collect();
            if selected.is_empty() {
                continue;
            }

            script.push_str(&format!("\n# --- {} ---\n", category.name));
            for tool in selected {
                script.push_str(&Self::tool_block(tool));
            }
            any = true;
        }

        if any {
            script.push_str(&Self::footer());
        }

        script
    }

    fn tool_block(tool: &Tool) -> String {
        format!(
            "\necho 'Installing: {}...'\n{}\n",
            escape_single_quoted(&tool.label),
            tool.script.trim()
        )
    }

    fn footer() -> String {
        [
            String::new(),
            "#".repeat(RULE_WIDTH),
            "# Cleanup".to_string(),
            "echo 'Running cleanup...'".to_string(),
            "apt-get autoremove -y".to_string(),
            "apt-get clean".to_string(),
            String::new(),
            r#"echo "Installation complete! Please restart your terminal or log out and back in.""#
                .to_string(),
            String::new(),
        ]
        .join("\n")
    }
}

/// Escape text for use inside a single-quoted bash string.
fn escape_single_quoted(text: &str) -> String {
    text.replace('\'', r"'\''")
}
