use super::*;

use std::collections::HashMap;

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn defaults_without_file_or_env() {
    let settings = load_settings_from(None, env_from(&[]));
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.nav_page_size, 8);
    assert_eq!(settings.browser_page_size, 12);
    assert_eq!(settings.default_design, "214");
}

#[test]
fn file_values_override_defaults() {
    let raw = r#"
bind_addr = "0.0.0.0:8080"
site_root = "/srv/zen"
catalog_path = "/srv/zen/designs.json"
nav_page_size = 10
browser_page_size = "24"
"#;
    let settings = load_settings_from(Some(raw), env_from(&[]));
    assert_eq!(settings.server_bind, "0.0.0.0:8080");
    assert_eq!(settings.site_root, PathBuf::from("/srv/zen"));
    assert_eq!(settings.catalog_path, PathBuf::from("/srv/zen/designs.json"));
    assert_eq!(settings.nav_page_size, 10);
    assert_eq!(settings.browser_page_size, 24);
    assert_eq!(settings.locales_dir, PathBuf::from("locales"));
}

#[test]
fn env_overrides_file_and_app_prefix_wins() {
    let raw = "bind_addr = \"0.0.0.0:8080\"\nnav_page_size = 10\n";
    let env = env_from(&[
        ("PORT", "4000"),
        ("APP__NAV_PAGE_SIZE", "6"),
        ("SITE_ROOT", "/plain"),
        ("APP__SITE_ROOT", "/prefixed"),
    ]);
    let settings = load_settings_from(Some(raw), env);
    assert_eq!(settings.server_bind, "0.0.0.0:4000");
    assert_eq!(settings.nav_page_size, 6);
    assert_eq!(settings.site_root, PathBuf::from("/prefixed"));
}

#[test]
fn explicit_bind_beats_port() {
    let env = env_from(&[("PORT", "4000"), ("SERVER_BIND", "127.0.0.1:9000")]);
    let settings = load_settings_from(None, env);
    assert_eq!(settings.server_bind, "127.0.0.1:9000");
}

#[test]
fn unparsable_values_keep_earlier_ones() {
    let env = env_from(&[("APP__BROWSER_PAGE_SIZE", "lots")]);
    let settings = load_settings_from(Some("this is [not toml"), env);
    assert_eq!(settings, Settings::default());

    let settings = load_settings_from(Some("nav_page_size = -3\n"), env_from(&[]));
    assert_eq!(settings.nav_page_size, 8);
}

#[test]
fn validation_rejects_zero_page_sizes() {
    let mut settings = Settings::default();
    validate_settings(&settings).expect("defaults are valid");

    settings.nav_page_size = 0;
    assert!(validate_settings(&settings).is_err());

    let settings = Settings {
        browser_page_size: 0,
        ..Settings::default()
    };
    assert!(validate_settings(&settings).is_err());

    let settings = Settings {
        default_design: " ".into(),
        ..Settings::default()
    };
    assert!(validate_settings(&settings).is_err());
}
