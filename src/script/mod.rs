//! Installation script generation.
//!
//! - [`assembler`] turns a catalog and a selection into script text
//! - [`writer`] puts that text on disk

pub mod assembler;
pub mod writer;

pub use assembler::{ScriptAssembler, BASE_PACKAGES};
pub use writer::{write_script, DEFAULT_SCRIPT_NAME};
