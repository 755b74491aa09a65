//! Session state and user preferences.
//!
//! [`AppState`] is the single owner of everything that changes while the
//! app runs. Selections live only in memory; preferences are persisted.

pub mod app_state;
pub mod preferences;
pub mod selection;

pub use app_state::AppState;
pub use preferences::{parse_bool, Preferences, GENERAL_SECTION, HIDE_ON_STARTUP, PREFERENCES_FILE};
pub use selection::SelectionSet;
