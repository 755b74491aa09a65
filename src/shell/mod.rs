//! Platform probes and the terminal launcher.

pub mod launcher;
pub mod platform;

pub use launcher::{
    DetachedProcess, LaunchReport, SystemProcess, TerminalKind, TerminalLauncher,
    LAUNCH_SCRIPT_NAME,
};
pub use platform::{find_executable, is_ci, is_elevated};
