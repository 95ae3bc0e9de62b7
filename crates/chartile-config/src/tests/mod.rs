use super::*;

#[test]
fn default_config_has_expected_tick_rate() {
    let config = AppConfig::default();
    assert_eq!(config.tick_rate_ms(), 250);
}

#[test]
fn default_config_has_all_general_fields() {
    let config = AppConfig::default();
    assert_eq!(config.general.tick_rate_ms, 250);
    assert_eq!(config.general.default_layout, "single");
    assert!(config.general.mouse_enabled);
    assert_eq!(config.general.pixels_per_col, 10);
    assert_eq!(config.general.pixels_per_row, 20);
}

#[test]
fn parse_general_from_toml() {
    let raw = r#"
[general]
tick_rate_ms = 100
default_layout = "quad-sq-v"
"#;
    let config: AppConfig = toml::from_str(raw).unwrap();
    assert_eq!(config.general.tick_rate_ms, 100);
    assert_eq!(config.general.default_layout, "quad-sq-v");
    assert_eq!(config.general.pixels_per_col, 10);
}

#[test]
fn kebab_case_aliases_accepted() {
    let raw = r##"
[general]
tick-rate-ms = 125
pixels-per-row = 24

[theme]
border-active = "#ffffff"
"##;
    let config: AppConfig = toml::from_str(raw).unwrap();
    assert_eq!(config.general.tick_rate_ms, 125);
    assert_eq!(config.general.pixels_per_row, 24);
    assert_eq!(config.theme.border_active, "#ffffff");
}

#[test]
fn partial_toml_only_general_merges_with_defaults() {
    let mut base = AppConfig::default();
    let user_toml = r#"
[general]
tick_rate_ms = 500
"#;
    let user: AppConfig = toml::from_str(user_toml).unwrap();
    base.merge(user);

    assert_eq!(base.general.tick_rate_ms, 500);
    assert!(!base.keybindings.global.is_empty());
    assert_eq!(base.keybindings.global.get("quit").unwrap(), "ctrl+q");
}

#[test]
fn embedded_defaults_parse() {
    let config: AppConfig = toml::from_str(DEFAULT_CONFIG).unwrap();
    // global group
    assert_eq!(config.keybindings.global.get("quit").unwrap(), "ctrl+q");
    assert_eq!(config.keybindings.global.get("layout_switcher").unwrap(), "space");
    // tabs group
    assert_eq!(config.keybindings.tabs.get("new_tab").unwrap(), "alt+t");
    assert_eq!(config.keybindings.tabs.get("close_tab").unwrap(), "alt+c");
    // frames group
    assert_eq!(config.keybindings.frames.get("next_frame").unwrap(), "]");
    // layout hotkeys use the layouts' kebab-case names
    assert_eq!(config.keybindings.layouts.get("single").unwrap(), "1");
    assert_eq!(config.keybindings.layouts.get("quad-sq-h").unwrap(), "7");
}

#[test]
fn embedded_defaults_validate_cleanly() {
    let config = AppConfig::default();
    assert!(validate_keybindings(&config.keybindings).is_empty());
    assert!(check_collisions(&config.keybindings).is_empty());
}

#[test]
fn user_keybindings_merge_per_key() {
    let mut base = AppConfig::default();
    let user_toml = r#"
[keybindings.global]
quit = "ctrl+c"

[keybindings.tabs]
rename_tab = "alt+r"
"#;
    let user: AppConfig = toml::from_str(user_toml).unwrap();
    base.merge(user);

    assert_eq!(base.keybindings.global.get("quit").unwrap(), "ctrl+c");
    // untouched defaults survive
    assert_eq!(base.keybindings.global.get("layout_switcher").unwrap(), "space");
    assert_eq!(base.keybindings.tabs.get("new_tab").unwrap(), "alt+t");
    // new user-only entries land in the map
    assert_eq!(base.keybindings.tabs.get("rename_tab").unwrap(), "alt+r");
}

#[test]
fn theme_defaults_have_four_series_colors() {
    let config = AppConfig::default();
    assert_eq!(config.theme.series.len(), 4);
    assert!(config.theme.series.iter().all(|s| s.starts_with('#')));
}

#[test]
fn save_and_load_from_round_trip() {
    let dir = std::env::temp_dir().join("chartile-config-test");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("config.toml");

    let mut config = AppConfig::default();
    config.general.tick_rate_ms = 333;
    config.save(&path).unwrap();

    let loaded = AppConfig::load_from(&path).unwrap();
    assert_eq!(loaded.general.tick_rate_ms, 333);

    std::fs::remove_file(&path).ok();
}
