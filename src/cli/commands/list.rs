//! List command implementation.
//!
//! The `toolpick list` command prints categories and tools in catalog order.

use crate::cli::args::ListArgs;
use crate::config::Catalog;
use crate::error::Result;
use crate::ui::theme::ToolpickTheme;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandContext, CommandResult};
use super::loading::{open_catalog, EXIT_CONFIG_NOT_FOUND};

/// The list command implementation.
pub struct ListCommand {
    ctx: CommandContext,
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(ctx: CommandContext, args: ListArgs) -> Self {
        Self { ctx, args }
    }

    pub fn args(&self) -> &ListArgs {
        &self.args
    }

    fn show_text(catalog: &Catalog, ui: &mut dyn UserInterface) {
        let theme = ToolpickTheme::detect();

        ui.show_header(catalog.title());
        for category in &catalog.categories {
            let description = if category.description.is_empty() {
                String::new()
            } else {
                format!(" {}", theme.dim.apply_to(format!("- {}", category.description)))
            };
            ui.message(&format!(
                "  {}{}",
                theme.category.apply_to(&category.name),
                description
            ));

            let width = category.tools.iter().map(|t| t.id.len()).max().unwrap_or(0);
            for tool in &category.tools {
                ui.message(&format!(
                    "    {:<width$}  {}",
                    tool.id,
                    tool.label,
                    width = width
                ));
            }
        }

        ui.message(&format!(
            "\n{} categories, {} tools",
            catalog.category_count(),
            catalog.tool_count()
        ));
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(catalog) = open_catalog(&self.ctx, ui)? else {
            return Ok(CommandResult::failure(EXIT_CONFIG_NOT_FOUND));
        };

        if self.args.json {
            let json = serde_json::to_string_pretty(&catalog)
                .map_err(|e| anyhow::anyhow!("Failed to serialize catalog: {}", e))?;
            println!("{}", json);
        } else {
            Self::show_text(&catalog, ui);
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    const CATALOG: &str = r#"
categories:
  - name: Languages
    description: Runtimes
    options:
      - {id: node, label: Node.js, script: apt-get install -y nodejs}
      - {id: python, label: Python, script: apt-get install -y python3}
  - name: Editors
    options:
      - {id: vim, label: Vim, script: apt-get install -y vim}
"#;

    fn setup() -> (TempDir, CommandContext) {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("config.yaml"), CATALOG).unwrap();
        let ctx = CommandContext::new(temp.path());
        (temp, ctx)
    }

    #[test]
    fn lists_tools_in_catalog_order() {
        let (_temp, ctx) = setup();
        let mut ui = MockUI::new();

        ListCommand::new(ctx, ListArgs::default())
            .execute(&mut ui)
            .unwrap();

        let position = |needle: &str| ui.messages().iter().position(|m| m.contains(needle));
        assert!(position("Languages") < position("node"));
        assert!(position("node") < position("python"));
        assert!(position("python") < position("Editors"));
        assert!(ui.has_message("2 categories, 3 tools"));
    }

    #[test]
    fn shows_descriptions() {
        let (_temp, ctx) = setup();
        let mut ui = MockUI::new();

        ListCommand::new(ctx, ListArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert!(ui.has_message("Runtimes"));
    }

    #[test]
    fn missing_catalog_exits_with_code_two() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        let result = ListCommand::new(CommandContext::new(temp.path()), ListArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert_eq!(result.exit_code, 2);
    }
}
