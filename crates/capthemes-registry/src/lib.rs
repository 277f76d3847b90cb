//! # capthemes-registry - Theme Registry
//!
//! Turns theme definition documents into a validated, read-only
//! [`ThemeRegistry`] and resolves lookups with a `"default"` fallback.
//!
//! ## Public API
//!
//! - [`ThemeRegistry`] - Immutable theme table (`get_theme`, `get_role_colors`,
//!   `list_theme_names`)
//! - [`ThemeDefinitions`] - Unvalidated definitions parsed from TOML
//! - [`SharedRegistry`] - `arc-swap` handle for publishing a rebuilt registry
//! - [`load_registry()`] - Built-in themes plus `.capthemes/themes.toml`
//! - [`init_config_dir()`] - Write a starter overrides document

pub mod config;
pub mod definitions;
pub mod registry;
pub mod shared;

pub use config::{init_config_dir, load_registry, overrides_path, CONFIG_DIR, THEMES_FILENAME};
pub use definitions::{RoleDef, ThemeDef, ThemeDefinitions};
pub use registry::{ThemeRegistry, DEFAULT_THEME};
pub use shared::SharedRegistry;
