//! Error types for theme loading and lookup

use thiserror::Error;

use crate::theme::Role;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to initialize: {0}")]
    Init(String),

    // ─────────────────────────────────────────────────────────────
    // Theme Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid theme configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid role '{role}': expected \"primary\" or \"secondary\"")]
    InvalidRole { role: String },
}

/// Structural or syntactic problems in theme definitions.
///
/// Only produced while a registry is being built; a registry that exists
/// has passed every one of these checks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Failed to parse theme definitions from {source_name}: {message}")]
    Parse {
        source_name: String,
        message: String,
    },

    #[error("Theme definitions contain an empty theme name")]
    EmptyThemeName,

    #[error("Theme '{theme}' is missing its {role} role")]
    MissingRole { theme: String, role: Role },

    #[error("Theme '{theme}' {role} role is missing its {field}")]
    MissingColor {
        theme: String,
        role: Role,
        field: &'static str,
    },

    #[error("Theme '{theme}' {role} {field} '{value}' is not a #RRGGBB hex color")]
    InvalidColor {
        theme: String,
        role: Role,
        field: &'static str,
        value: String,
    },

    #[error("Theme definitions must include a \"default\" theme")]
    MissingDefaultTheme,
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn init(message: impl Into<String>) -> Self {
        Self::Init(message.into())
    }

    pub fn invalid_role(role: impl Into<String>) -> Self {
        Self::InvalidRole { role: role.into() }
    }

    /// Create a [`ConfigError::Parse`] wrapped in [`Error::Config`].
    pub fn parse(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Config(ConfigError::Parse {
            source_name: source_name.into(),
            message: message.into(),
        })
    }

    /// Check if this error came from invalid theme definitions
    pub fn is_config_error(&self) -> bool {
        matches!(self, Error::Config(_))
    }

    /// Check if this error should stop the process before any caption is rendered
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::Config(_) | Error::Init(_))
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}
