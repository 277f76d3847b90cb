//! # capthemes-core - Core Color and Theme Types
//!
//! Foundation crate for Caption Themes. Provides the validated color type,
//! theme/role types, error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, regex, tracing).
//!
//! ## Public API
//!
//! ### Colors (`color`)
//! - [`ColorValue`] - `#rrggbb` color, normalized to lowercase on parse
//!
//! ### Themes (`theme`)
//! - [`Theme`] - Named theme with `primary` and `secondary` roles
//! - [`RoleColors`] - Foreground color plus shadow/outline color
//! - [`Role`] - `primary` or `secondary`
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Error enum with `fatal` classification
//! - [`ConfigError`] - Invalid theme definition details
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use capthemes_core::prelude::*;
//! ```

pub mod color;
pub mod error;
pub mod logging;
pub mod theme;

/// Prelude for common imports used throughout all Caption Themes crates
pub mod prelude {
    pub use super::error::{ConfigError, Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

pub use color::{ColorValue, InvalidColorValue};
pub use error::{ConfigError, Error, Result, ResultExt};
pub use theme::{Role, RoleColors, Theme};
