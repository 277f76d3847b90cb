//! Hot-swappable registry handle
//!
//! Readers take a snapshot and keep using it for as long as they like. A
//! reload builds and validates a complete new registry first and only then
//! publishes it, so no reader ever sees a half-updated table.

use arc_swap::ArcSwap;
use capthemes_core::prelude::*;
use std::path::Path;
use std::sync::Arc;

use crate::config::load_registry;
use crate::registry::ThemeRegistry;

/// Shared, atomically replaceable [`ThemeRegistry`]
#[derive(Debug)]
pub struct SharedRegistry {
    current: ArcSwap<ThemeRegistry>,
}

impl SharedRegistry {
    pub fn new(registry: ThemeRegistry) -> Self {
        Self {
            current: ArcSwap::from_pointee(registry),
        }
    }

    /// The registry as currently published.
    pub fn snapshot(&self) -> Arc<ThemeRegistry> {
        self.current.load_full()
    }

    /// Replace the whole registry.
    pub fn publish(&self, registry: ThemeRegistry) {
        info!("Publishing theme registry with {} theme(s)", registry.len());
        self.current.store(Arc::new(registry));
    }

    /// Rebuild from built-ins plus the project's overrides and publish.
    ///
    /// On failure the previously published registry stays in place.
    pub fn reload_from(&self, project_path: &Path) -> Result<()> {
        match load_registry(project_path) {
            Ok(registry) => {
                self.publish(registry);
                Ok(())
            }
            Err(e) => {
                warn!("Theme reload failed, keeping current registry: {}", e);
                Err(e)
            }
        }
    }
}

impl From<ThemeRegistry> for SharedRegistry {
    fn from(registry: ThemeRegistry) -> Self {
        Self::new(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CONFIG_DIR, THEMES_FILENAME};
    use crate::definitions::{RoleDef, ThemeDef, ThemeDefinitions};
    use tempfile::tempdir;

    fn write_overrides(project: &Path, content: &str) {
        let dir = project.join(CONFIG_DIR);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(THEMES_FILENAME), content).unwrap();
    }

    #[test]
    fn test_snapshot_survives_publish() {
        let shared = SharedRegistry::new(ThemeRegistry::initialize().unwrap());
        let before = shared.snapshot();

        let mut defs = ThemeDefinitions::builtin().unwrap();
        defs.insert(
            "batman",
            ThemeDef::new(
                RoleDef::new("#222222", "#ffffff"),
                RoleDef::new("#ffffff", "#222222"),
            ),
        );
        shared.publish(ThemeRegistry::from_definitions(&defs).unwrap());

        assert_eq!(before.get_theme("batman").primary.color, "#fdff00");
        assert_eq!(
            shared.snapshot().get_theme("batman").primary.color,
            "#222222"
        );
    }

    #[test]
    fn test_reload_from_applies_overrides() {
        let temp = tempdir().unwrap();
        let shared = SharedRegistry::new(ThemeRegistry::initialize().unwrap());
        assert!(!shared.snapshot().contains("venom"));

        write_overrides(
            temp.path(),
            r##"
[venom.primary]
color = "#000000"
shadow = "#ffffff"

[venom.secondary]
color = "#ffffff"
shadow = "#000000"
"##,
        );
        shared.reload_from(temp.path()).unwrap();

        assert!(shared.snapshot().contains("venom"));
    }

    #[test]
    fn test_failed_reload_keeps_previous() {
        let temp = tempdir().unwrap();
        let shared = SharedRegistry::new(ThemeRegistry::initialize().unwrap());
        let before = shared.snapshot();

        write_overrides(temp.path(), "[venom.primary]\ncolor = \"#00000\"\n");
        let err = shared.reload_from(temp.path()).unwrap_err();

        assert!(err.is_config_error());
        assert_eq!(*shared.snapshot(), *before);
    }

    #[test]
    fn test_concurrent_readers_see_whole_tables() {
        let shared = SharedRegistry::new(ThemeRegistry::initialize().unwrap());

        let mut defs = ThemeDefinitions::builtin().unwrap();
        defs.insert(
            "thor",
            ThemeDef::new(
                RoleDef::new("#010101", "#020202"),
                RoleDef::new("#020202", "#010101"),
            ),
        );
        let replacement = ThemeRegistry::from_definitions(&defs).unwrap();

        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    for _ in 0..1_000 {
                        let snapshot = shared.snapshot();
                        let thor = snapshot.get_theme("thor");
                        // Primary and secondary must come from the same table
                        assert_eq!(thor.primary.color, thor.secondary.shadow);
                        assert_eq!(snapshot.len(), 12);
                    }
                });
            }
            scope.spawn(|| {
                for _ in 0..100 {
                    shared.publish(replacement.clone());
                    shared.publish(ThemeRegistry::initialize().unwrap());
                }
            });
        });
    }
}
