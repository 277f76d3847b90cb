//! Theme and role types
//!
//! A [`Theme`] always carries both roles and each role always carries both
//! colors; partially specified themes never get past the registry loader.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::color::ColorValue;
use crate::error::Error;

/// Rendering layer within a theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Main caption text
    Primary,
    /// Alternate/contrast caption text
    Secondary,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Primary, Role::Secondary];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Primary => "primary",
            Role::Secondary => "secondary",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = Error;

    /// Role names are matched exactly; anything else is a caller bug.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "primary" => Ok(Role::Primary),
            "secondary" => Ok(Role::Secondary),
            other => Err(Error::invalid_role(other)),
        }
    }
}

/// Foreground color and its outline/shadow color for one role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleColors {
    pub color: ColorValue,
    pub shadow: ColorValue,
}

impl RoleColors {
    pub fn new(color: ColorValue, shadow: ColorValue) -> Self {
        Self { color, shadow }
    }
}

/// A named caption theme
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub primary: RoleColors,
    pub secondary: RoleColors,
}

impl Theme {
    pub fn new(name: impl Into<String>, primary: RoleColors, secondary: RoleColors) -> Self {
        Self {
            name: name.into(),
            primary,
            secondary,
        }
    }

    pub fn role(&self, role: Role) -> &RoleColors {
        match role {
            Role::Primary => &self.primary,
            Role::Secondary => &self.secondary,
        }
    }
}
