//! Library integration tests.

use toolpick::ToolpickError;

#[test]
fn error_types_are_public() {
    let err = ToolpickError::UnknownTool {
        id: "test".into(),
    };
    assert!(err.to_string().contains("test"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> toolpick::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use toolpick::cli::{Cli, Commands};

    let cli = Cli::parse_from(["toolpick", "generate", "--select", "git,vim"]);

    if let Some(Commands::Generate(args)) = cli.command {
        assert_eq!(args.select, vec!["git", "vim"]);
    } else {
        panic!("Expected Generate command");
    }
}

#[test]
fn ui_types_are_public() {
    use toolpick::ui::{MockUI, OutputMode, UserInterface};

    let mut ui = MockUI::new();
    ui.message("hello");
    assert_eq!(ui.output_mode(), OutputMode::Normal);
}
