//! Caption Themes Library
//!
//! Validated caption color themes with a `"default"` fallback, plus the
//! `capthemes` command-line front end.

pub mod cli;

// Re-export the workspace crates under short names
pub use capthemes_core as core;
pub use capthemes_registry as registry;

// Re-export main entry points
pub use cli::{execute, run, Args, Command};
