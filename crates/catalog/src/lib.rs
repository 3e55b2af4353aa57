use anyhow::{bail, Context, Result};
use std::{collections::HashSet, fs, path::Path, sync::Arc};

use shared::domain::DesignRecord;

mod locales;

pub use locales::LocaleStore;

/// The full list of submissions, oldest first. Loaded once and never mutated;
/// clones share the same records.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Arc<[DesignRecord]>,
}

impl Catalog {
    pub fn new(records: Vec<DesignRecord>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            if record.id.as_str().trim().is_empty() {
                bail!("catalog entry {index} has an empty id");
            }
            if !seen.insert(&record.id) {
                bail!("catalog entry {index} repeats design id '{}'", record.id);
            }
        }

        Ok(Self {
            records: records.into(),
        })
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        let records: Vec<DesignRecord> = serde_json::from_str(raw)
            .context("catalog must be an array of [id, name, designer, designer_url]")?;
        Self::new(records)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read catalog '{}'", path.display()))?;
        let catalog = Self::from_json_str(&raw)
            .with_context(|| format!("failed to parse catalog '{}'", path.display()))?;
        tracing::debug!(path = %path.display(), designs = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[DesignRecord] {
        &self.records
    }

    pub fn newest(&self) -> Option<&DesignRecord> {
        self.records.last()
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
