//! Hex RGB color values

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;

/// Matches `#RRGGBB`, either case.
static HEX_COLOR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("Invalid hex color regex"));

/// Returned when a string is not a `#RRGGBB` color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{value}' is not a #RRGGBB hex color")]
pub struct InvalidColorValue {
    pub value: String,
}

/// A 6-digit hex RGB color with a leading `#`.
///
/// Input is accepted in either case and stored lowercase, so `#FFFFFF` and
/// `#ffffff` produce equal values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ColorValue(String);

impl ColorValue {
    /// Parse and normalize a color string.
    pub fn parse(input: &str) -> Result<Self, InvalidColorValue> {
        if Self::is_valid(input) {
            Ok(Self(input.to_ascii_lowercase()))
        } else {
            Err(InvalidColorValue {
                value: input.to_string(),
            })
        }
    }

    /// Check whether `input` matches `#[0-9A-Fa-f]{6}`.
    pub fn is_valid(input: &str) -> bool {
        HEX_COLOR_REGEX.is_match(input)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ColorValue {
    type Err = InvalidColorValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ColorValue {
    type Error = InvalidColorValue;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ColorValue> for String {
    fn from(value: ColorValue) -> Self {
        value.0
    }
}

impl AsRef<str> for ColorValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for ColorValue {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ColorValue {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
