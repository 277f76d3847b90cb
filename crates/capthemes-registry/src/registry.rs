//! Validated theme table with default fallback
//!
//! A [`ThemeRegistry`] is built once, fully validated, and then only read.
//! Lookups of unknown theme names resolve to the `"default"` theme instead of
//! failing, so a typo in a user-selected theme never blocks caption rendering.

use capthemes_core::prelude::*;
use capthemes_core::{Role, RoleColors, Theme};
use std::collections::BTreeMap;

use crate::definitions::ThemeDefinitions;

/// Name of the fallback theme every registry must contain
pub const DEFAULT_THEME: &str = "default";

/// Immutable mapping from theme name to validated [`Theme`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeRegistry {
    /// The fallback theme, held apart so resolving it can never miss
    default: Theme,
    /// Every other theme, keyed by exact (case-sensitive) name
    themes: BTreeMap<String, Theme>,
}

impl ThemeRegistry {
    /// Build the registry from the built-in theme definitions.
    pub fn initialize() -> Result<Self> {
        Self::from_definitions(&ThemeDefinitions::builtin()?)
    }

    /// Build a registry from arbitrary definitions, validating all of them.
    pub fn from_definitions(defs: &ThemeDefinitions) -> Result<Self> {
        let mut themes = defs.validate()?;
        let default = themes
            .remove(DEFAULT_THEME)
            .ok_or(ConfigError::MissingDefaultTheme)?;

        info!("Theme registry ready with {} theme(s)", themes.len() + 1);

        Ok(Self { default, themes })
    }

    /// Look up a theme, falling back to `"default"` for unknown names.
    pub fn get_theme(&self, name: &str) -> &Theme {
        self.resolve_or_default(name)
    }

    /// Colors for one role of a theme.
    ///
    /// Unknown theme names fall back like [`get_theme`](Self::get_theme); an
    /// unknown role string is an [`Error::InvalidRole`].
    pub fn get_role_colors(&self, name: &str, role: &str) -> Result<&RoleColors> {
        let role: Role = role.parse()?;
        Ok(self.role_colors(name, role))
    }

    pub fn role_colors(&self, name: &str, role: Role) -> &RoleColors {
        self.resolve_or_default(name).role(role)
    }

    /// All registered theme names in lexicographic order.
    pub fn list_theme_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .themes
            .keys()
            .map(String::as_str)
            .chain(std::iter::once(DEFAULT_THEME))
            .collect();
        names.sort_unstable();
        names
    }

    /// Whether `name` is registered, i.e. a lookup would not fall back.
    pub fn contains(&self, name: &str) -> bool {
        name == DEFAULT_THEME || self.themes.contains_key(name)
    }

    pub fn default_theme(&self) -> &Theme {
        &self.default
    }

    pub fn len(&self) -> usize {
        self.themes.len() + 1
    }

    /// Always false: the default theme is always present.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Substitute the default theme for names that are not registered.
    fn resolve_or_default(&self, name: &str) -> &Theme {
        if name == DEFAULT_THEME {
            return &self.default;
        }
        match self.themes.get(name) {
            Some(theme) => theme,
            None => {
                debug!("Unknown theme '{}', using '{}'", name, DEFAULT_THEME);
                &self.default
            }
        }
    }
}
