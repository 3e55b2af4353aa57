use std::{fs, path::PathBuf};

use anyhow::bail;
use serde::Deserialize;
use tracing::warn;

const CONFIG_FILE: &str = "gallery.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub server_bind: String,
    pub site_root: PathBuf,
    pub catalog_path: PathBuf,
    pub locales_dir: PathBuf,
    pub default_design: String,
    pub nav_page_size: usize,
    pub browser_page_size: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_bind: "127.0.0.1:3000".into(),
            site_root: PathBuf::from("."),
            catalog_path: PathBuf::from("data/designs.json"),
            locales_dir: PathBuf::from("locales"),
            default_design: "214".into(),
            nav_page_size: 8,
            browser_page_size: 12,
        }
    }
}

pub fn load_settings() -> Settings {
    let file_cfg = fs::read_to_string(CONFIG_FILE).ok();
    load_settings_from(file_cfg.as_deref(), |key| std::env::var(key).ok())
}

/// Defaults, then `gallery.toml`, then environment. Later sources win; an
/// unparsable value keeps the earlier one.
pub fn load_settings_from(
    file_cfg: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
) -> Settings {
    let mut settings = Settings::default();

    if let Some(raw) = file_cfg {
        match raw.parse::<toml::Table>() {
            Ok(table) => apply_file_config(&mut settings, &table),
            Err(error) => warn!(%error, file = CONFIG_FILE, "ignoring unparsable config file"),
        }
    }

    if let Some(port) = env("PORT") {
        settings.server_bind = format!("0.0.0.0:{}", port.trim());
    }
    if let Some(v) = env("SERVER_BIND") {
        settings.server_bind = v;
    }
    if let Some(v) = env("APP__BIND_ADDR") {
        settings.server_bind = v;
    }

    if let Some(v) = env("SITE_ROOT") {
        settings.site_root = v.into();
    }
    if let Some(v) = env("APP__SITE_ROOT") {
        settings.site_root = v.into();
    }

    if let Some(v) = env("CATALOG_PATH") {
        settings.catalog_path = v.into();
    }
    if let Some(v) = env("APP__CATALOG_PATH") {
        settings.catalog_path = v.into();
    }

    if let Some(v) = env("LOCALES_DIR") {
        settings.locales_dir = v.into();
    }
    if let Some(v) = env("APP__LOCALES_DIR") {
        settings.locales_dir = v.into();
    }

    if let Some(v) = env("APP__DEFAULT_DESIGN") {
        settings.default_design = v;
    }

    if let Some(v) = env("APP__NAV_PAGE_SIZE") {
        if let Ok(parsed) = v.trim().parse::<usize>() {
            settings.nav_page_size = parsed;
        }
    }
    if let Some(v) = env("APP__BROWSER_PAGE_SIZE") {
        if let Ok(parsed) = v.trim().parse::<usize>() {
            settings.browser_page_size = parsed;
        }
    }

    settings
}

fn apply_file_config(settings: &mut Settings, table: &toml::Table) {
    if let Some(v) = table_str(table, "bind_addr") {
        settings.server_bind = v.to_string();
    }
    if let Some(v) = table_str(table, "site_root") {
        settings.site_root = v.into();
    }
    if let Some(v) = table_str(table, "catalog_path") {
        settings.catalog_path = v.into();
    }
    if let Some(v) = table_str(table, "locales_dir") {
        settings.locales_dir = v.into();
    }
    if let Some(v) = table_str(table, "default_design") {
        settings.default_design = v.to_string();
    }
    if let Some(v) = table_usize(table, "nav_page_size") {
        settings.nav_page_size = v;
    }
    if let Some(v) = table_usize(table, "browser_page_size") {
        settings.browser_page_size = v;
    }
}

fn table_str<'a>(table: &'a toml::Table, key: &str) -> Option<&'a str> {
    table.get(key).and_then(toml::Value::as_str)
}

fn table_usize(table: &toml::Table, key: &str) -> Option<usize> {
    match table.get(key)? {
        toml::Value::Integer(v) => usize::try_from(*v).ok(),
        toml::Value::String(v) => v.trim().parse().ok(),
        _ => None,
    }
}

pub fn validate_settings(settings: &Settings) -> anyhow::Result<()> {
    if settings.nav_page_size == 0 {
        bail!("nav_page_size must be at least 1");
    }
    if settings.browser_page_size == 0 {
        bail!("browser_page_size must be at least 1");
    }
    if settings.default_design.trim().is_empty() {
        bail!("default_design must not be empty");
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
