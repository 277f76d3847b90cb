//! Raw theme definition documents
//!
//! Definitions are parsed from TOML into an all-optional model first, then
//! checked field by field. That way a missing role or color is reported with
//! the theme, role, and field it belongs to instead of as a generic
//! deserialization failure.

use capthemes_core::prelude::*;
use capthemes_core::{ColorValue, Role, RoleColors, Theme};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// The themes compiled into the binary
const BUILTIN_THEMES: &str = include_str!("builtin_themes.toml");

/// A single role as written in a definition document
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RoleDef {
    #[serde(default)]
    pub color: Option<String>,

    #[serde(default)]
    pub shadow: Option<String>,
}

impl RoleDef {
    pub fn new(color: impl Into<String>, shadow: impl Into<String>) -> Self {
        Self {
            color: Some(color.into()),
            shadow: Some(shadow.into()),
        }
    }
}

/// A single theme as written in a definition document
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeDef {
    #[serde(default)]
    pub primary: Option<RoleDef>,

    #[serde(default)]
    pub secondary: Option<RoleDef>,
}

impl ThemeDef {
    pub fn new(primary: RoleDef, secondary: RoleDef) -> Self {
        Self {
            primary: Some(primary),
            secondary: Some(secondary),
        }
    }
}

/// Unvalidated theme definitions keyed by theme name
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct ThemeDefinitions {
    themes: BTreeMap<String, ThemeDef>,
}

impl ThemeDefinitions {
    /// Parse the built-in theme document.
    pub fn builtin() -> Result<Self> {
        Self::parse("built-in themes", BUILTIN_THEMES)
    }

    /// Parse a TOML definition document. `source_name` only feeds error messages.
    pub fn parse(source_name: &str, content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::parse(source_name, e.to_string()))
    }

    /// Read and parse an overrides document from disk.
    pub fn load_overrides(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let defs = Self::parse(&path.display().to_string(), &content)?;
        debug!("Loaded {} theme override(s) from {:?}", defs.len(), path);
        Ok(defs)
    }

    pub fn insert(&mut self, name: impl Into<String>, def: ThemeDef) -> Option<ThemeDef> {
        self.themes.insert(name.into(), def)
    }

    pub fn get(&self, name: &str) -> Option<&ThemeDef> {
        self.themes.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.themes.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    /// Layer `overrides` on top of these definitions.
    ///
    /// A theme present in both is replaced wholesale, so the override must be
    /// complete on its own. Nothing is ever removed.
    pub fn merge(&mut self, overrides: ThemeDefinitions) {
        for (name, def) in overrides.themes {
            if self.themes.insert(name.clone(), def).is_some() {
                debug!("Theme '{}' overridden", name);
            } else {
                debug!("Theme '{}' added", name);
            }
        }
    }

    /// Check every definition and build the validated table.
    ///
    /// Fails on the first problem found; themes are visited in name order so
    /// the reported error is deterministic.
    pub fn validate(&self) -> std::result::Result<BTreeMap<String, Theme>, ConfigError> {
        let mut table = BTreeMap::new();
        for (name, def) in &self.themes {
            if name.is_empty() {
                return Err(ConfigError::EmptyThemeName);
            }
            let primary = validate_role(name, Role::Primary, def.primary.as_ref())?;
            let secondary = validate_role(name, Role::Secondary, def.secondary.as_ref())?;
            table.insert(name.clone(), Theme::new(name.clone(), primary, secondary));
        }
        Ok(table)
    }
}

fn validate_role(
    theme: &str,
    role: Role,
    def: Option<&RoleDef>,
) -> std::result::Result<RoleColors, ConfigError> {
    let def = def.ok_or_else(|| ConfigError::MissingRole {
        theme: theme.to_string(),
        role,
    })?;
    let color = validate_color(theme, role, "color", def.color.as_deref())?;
    let shadow = validate_color(theme, role, "shadow", def.shadow.as_deref())?;
    Ok(RoleColors::new(color, shadow))
}

fn validate_color(
    theme: &str,
    role: Role,
    field: &'static str,
    value: Option<&str>,
) -> std::result::Result<ColorValue, ConfigError> {
    let value = value.ok_or_else(|| ConfigError::MissingColor {
        theme: theme.to_string(),
        role,
        field,
    })?;
    ColorValue::parse(value).map_err(|e| {
        warn!("Rejected {} {} for theme '{}': {}", role, field, theme, e);
        ConfigError::InvalidColor {
            theme: theme.to_string(),
            role,
            field,
            value: e.value,
        }
    })
}
