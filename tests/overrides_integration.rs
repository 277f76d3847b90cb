//! Project overrides layered over the built-in themes

use caption_themes::core::{ConfigError, Error};
use caption_themes::registry::{load_registry, SharedRegistry, CONFIG_DIR, THEMES_FILENAME};
use std::path::Path;
use tempfile::tempdir;

fn install_fixture(project: &Path) {
    let dir = project.join(CONFIG_DIR);
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join(THEMES_FILENAME), include_str!("fixtures/themes.toml")).unwrap();
}

#[test]
fn test_fixture_overrides_apply() {
    let temp = tempdir().unwrap();
    install_fixture(temp.path());

    let registry = load_registry(temp.path()).unwrap();

    assert_eq!(registry.len(), 13);
    let spiderman = registry.get_role_colors("spiderman", "primary").unwrap();
    assert_eq!(spiderman.color, "#d00000");
    assert_eq!(spiderman.shadow, "#0044aa");

    // Replaced wholesale
    let batman = registry.get_theme("batman");
    assert_eq!(batman.primary.color, "#000000");
    assert_eq!(batman.secondary.color, "#fdff00");
}

#[test]
fn test_overrides_keep_default_fallback() {
    let temp = tempdir().unwrap();
    install_fixture(temp.path());

    let registry = load_registry(temp.path()).unwrap();
    assert_eq!(registry.get_theme("venom"), registry.default_theme());
}

#[test]
fn test_shared_registry_reload_publishes_overrides() {
    let temp = tempdir().unwrap();
    let shared = SharedRegistry::new(load_registry(temp.path()).unwrap());
    let before = shared.snapshot();

    install_fixture(temp.path());
    shared.reload_from(temp.path()).unwrap();

    assert!(!before.contains("spiderman"));
    assert!(shared.snapshot().contains("spiderman"));
}

#[test]
fn test_invalid_color_in_overrides_is_fatal() {
    let temp = tempdir().unwrap();
    let dir = temp.path().join(CONFIG_DIR);
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(
        dir.join(THEMES_FILENAME),
        r##"
[ghost.primary]
color = "#fff"
shadow = "#000000"

[ghost.secondary]
color = "#000000"
shadow = "#ffffff"
"##,
    )
    .unwrap();

    let err = load_registry(temp.path()).unwrap_err();
    assert!(err.is_fatal());
    assert!(matches!(
        err,
        Error::Config(ConfigError::InvalidColor { ref value, .. }) if value == "#fff"
    ));
}
