//! Project theme overrides in `.capthemes/themes.toml`

use capthemes_core::prelude::*;
use std::path::{Path, PathBuf};

use crate::definitions::ThemeDefinitions;
use crate::registry::ThemeRegistry;

pub const CONFIG_DIR: &str = ".capthemes";
pub const THEMES_FILENAME: &str = "themes.toml";

const STARTER_CONTENT: &str = r##"# Caption Themes - project theme overrides
#
# Each table adds a theme, or replaces the built-in theme with the same name.
# A theme needs both roles and each role needs both colors (#RRGGBB).
# Built-in themes cannot be removed.
#
# [spiderman.primary]
# color = "#d00000"
# shadow = "#0044aa"
#
# [spiderman.secondary]
# color = "#0044aa"
# shadow = "#d00000"
"##;

/// Path of the overrides document for a project
pub fn overrides_path(project_path: &Path) -> PathBuf {
    project_path.join(CONFIG_DIR).join(THEMES_FILENAME)
}

/// Build the registry for a project: built-ins plus any overrides.
///
/// A missing overrides file is not an error. A malformed one is, since the
/// resulting registry could not be trusted.
pub fn load_registry(project_path: &Path) -> Result<ThemeRegistry> {
    let mut defs = ThemeDefinitions::builtin()?;

    let path = overrides_path(project_path);
    if path.exists() {
        let overrides = ThemeDefinitions::load_overrides(&path)?;
        defs.merge(overrides);
    } else {
        debug!("No theme overrides at {:?}, using built-ins", path);
    }

    ThemeRegistry::from_definitions(&defs)
        .with_context(|| format!("Invalid themes after applying {}", path.display()))
}

/// Create `.capthemes/themes.toml` with commented examples if it is missing.
///
/// Returns the path of the overrides document.
pub fn init_config_dir(project_path: &Path) -> Result<PathBuf> {
    let dir = project_path.join(CONFIG_DIR);

    if !dir.exists() {
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
    }

    let path = dir.join(THEMES_FILENAME);
    if !path.exists() {
        std::fs::write(&path, STARTER_CONTENT)?;
        info!("Created {:?}", path);
    }

    Ok(path)
}
