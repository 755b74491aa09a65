//! Running a generated script in a new terminal window.
//!
//! Launching is fire-and-forget: the terminal process is spawned and
//! forgotten. Its exit code and output are never observed, and there is no
//! timeout or retry.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::{Result, ToolpickError};
use crate::script::write_script;

use super::platform::{find_executable, is_elevated};

/// Temp file the script is written to before launching.
pub const LAUNCH_SCRIPT_NAME: &str = "install_dev_env.sh";

/// Spawns a process without waiting for it.
///
/// Implementations must return as soon as the process has started. The
/// caller never awaits completion and never sees the process output.
pub trait DetachedProcess {
    /// Start `program` with `args`.
    fn spawn_detached(&self, program: &Path, args: &[String]) -> std::io::Result<()>;
}

/// Spawns real OS processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemProcess;

impl DetachedProcess for SystemProcess {
    fn spawn_detached(&self, program: &Path, args: &[String]) -> std::io::Result<()> {
        let child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        tracing::debug!("Spawned {} (pid {})", program.display(), child.id());
        Ok(())
    }
}

/// Terminal emulators tried in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalKind {
    GnomeTerminal,
    Konsole,
    Xfce4Terminal,
    LxTerminal,
    Xterm,
}

impl TerminalKind {
    /// Default search order.
    pub const ALL: [TerminalKind; 5] = [
        TerminalKind::GnomeTerminal,
        TerminalKind::Konsole,
        TerminalKind::Xfce4Terminal,
        TerminalKind::LxTerminal,
        TerminalKind::Xterm,
    ];

    /// Executable name.
    pub fn program(&self) -> &'static str {
        match self {
            TerminalKind::GnomeTerminal => "gnome-terminal",
            TerminalKind::Konsole => "konsole",
            TerminalKind::Xfce4Terminal => "xfce4-terminal",
            TerminalKind::LxTerminal => "lxterminal",
            TerminalKind::Xterm => "xterm",
        }
    }

    /// Arguments that make this terminal run `command` through bash.
    pub fn args(&self, command: &str) -> Vec<String> {
        let bash = |flag: &str| {
            vec![
                flag.to_string(),
                "/bin/bash".to_string(),
                "-c".to_string(),
                command.to_string(),
            ]
        };

        match self {
            TerminalKind::GnomeTerminal => bash("--"),
            TerminalKind::Konsole | TerminalKind::Xterm => bash("-e"),
            TerminalKind::Xfce4Terminal => bash("-x"),
            // lxterminal only accepts a single command string
            TerminalKind::LxTerminal => vec![
                "-e".to_string(),
                format!("/bin/bash -c {}", shell_quote(command)),
            ],
        }
    }
}

/// Outcome of a successful launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchReport {
    /// Terminal that was started.
    pub terminal: TerminalKind,
    /// Where the script was written.
    pub script_path: PathBuf,
}

/// Writes a script to a temp file and opens it in a terminal.
#[derive(Debug, Clone)]
pub struct TerminalLauncher {
    candidates: Vec<TerminalKind>,
    script_path: PathBuf,
    search_path: Option<OsString>,
    elevated: bool,
}

impl Default for TerminalLauncher {
    fn default() -> Self {
        Self {
            candidates: TerminalKind::ALL.to_vec(),
            script_path: std::env::temp_dir().join(LAUNCH_SCRIPT_NAME),
            search_path: None,
            elevated: is_elevated(),
        }
    }
}

impl TerminalLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write the script somewhere other than the temp dir.
    pub fn with_script_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.script_path = path.into();
        self
    }

    /// Search this `PATH`-style list instead of the process `PATH`.
    pub fn with_search_path(mut self, path: impl Into<OsString>) -> Self {
        self.search_path = Some(path.into());
        self
    }

    /// Restrict or reorder the terminals to try.
    pub fn with_candidates(mut self, candidates: Vec<TerminalKind>) -> Self {
        self.candidates = candidates;
        self
    }

    /// Treat the current process as root (or not).
    pub fn with_elevated(mut self, elevated: bool) -> Self {
        self.elevated = elevated;
        self
    }

    pub fn script_path(&self) -> &Path {
        &self.script_path
    }

    /// Shell command the terminal runs.
    pub fn command_line(&self) -> String {
        let script = shell_quote(&self.script_path.to_string_lossy());
        let run = if self.elevated {
            script
        } else {
            format!("sudo -E {}", script)
        };
        format!("{}; echo; echo Press ENTER to exit; read", run)
    }

    /// First available terminal and its full path.
    pub fn find_terminal(&self) -> Option<(TerminalKind, PathBuf)> {
        self.candidates.iter().find_map(|kind| {
            find_executable(kind.program(), self.search_path.as_deref()).map(|p| (*kind, p))
        })
    }

    /// Write `script` and start it in the first terminal found.
    ///
    /// # Errors
    ///
    /// Returns `ScriptWriteError` if the temp file cannot be written and
    /// `LaunchError` if no terminal exists or spawning fails.
    pub fn launch(&self, script: &str, process: &dyn DetachedProcess) -> Result<LaunchReport> {
        write_script(&self.script_path, script)?;

        let (terminal, program) =
            self.find_terminal()
                .ok_or_else(|| ToolpickError::LaunchError {
                    message: format!(
                        "Could not find a terminal emulator. Run the script manually: sudo -E {}",
                        self.script_path.display()
                    ),
                })?;

        let args = terminal.args(&self.command_line());
        process
            .spawn_detached(&program, &args)
            .map_err(|e| ToolpickError::LaunchError {
                message: format!("{} failed to start: {}", terminal.program(), e),
            })?;

        tracing::info!(
            "Launched {} in {}",
            self.script_path.display(),
            terminal.program()
        );

        Ok(LaunchReport {
            terminal,
            script_path: self.script_path.clone(),
        })
    }
}

/// Quote a string for bash using single quotes.
fn shell_quote(text: &str) -> String {
    format!("'{}'", text.replace('\'', r"'\''"))
}
