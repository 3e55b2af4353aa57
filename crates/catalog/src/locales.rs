use anyhow::{Context, Result};
use std::{collections::HashMap, fs, path::Path, sync::Arc};

use shared::locale::Locale;

/// Page strings keyed by language code, with English as the fallback.
#[derive(Debug, Clone)]
pub struct LocaleStore {
    fallback: Arc<Locale>,
    by_lang: HashMap<String, Arc<Locale>>,
}

impl LocaleStore {
    pub fn english_only() -> Result<Self> {
        let english = Locale::english().context("bundled English locale is invalid")?;
        Ok(Self {
            fallback: Arc::new(english),
            by_lang: HashMap::new(),
        })
    }

    /// Loads every `<lang>.toml` in `dir`. A missing directory leaves only the
    /// bundled English strings; malformed files are skipped.
    pub fn load(dir: &Path) -> Result<Self> {
        let mut store = Self::english_only()?;

        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(error) => {
                tracing::debug!(dir = %dir.display(), %error, "no locale directory; serving English only");
                return Ok(store);
            }
        };

        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("toml") {
                continue;
            }
            let Some(lang) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };

            let parsed = fs::read_to_string(&path)
                .map_err(anyhow::Error::from)
                .and_then(|raw| Locale::from_toml_str(&raw).map_err(anyhow::Error::from));
            match parsed {
                Ok(locale) => {
                    store.insert(lang, locale);
                }
                Err(error) => {
                    tracing::warn!(path = %path.display(), %error, "skipping malformed locale file");
                }
            }
        }

        Ok(store)
    }

    pub fn insert(&mut self, lang: &str, locale: Locale) {
        self.by_lang.insert(lang.to_ascii_lowercase(), Arc::new(locale));
    }

    /// Unknown or absent languages resolve to English.
    pub fn get(&self, lang: Option<&str>) -> &Locale {
        lang.and_then(|lang| self.by_lang.get(&lang.to_ascii_lowercase()))
            .unwrap_or(&self.fallback)
    }

    pub fn languages(&self) -> Vec<&str> {
        let mut langs: Vec<&str> = self.by_lang.keys().map(String::as_str).collect();
        langs.sort_unstable();
        langs
    }
}

#[cfg(test)]
#[path = "tests/locales_tests.rs"]
mod tests;
