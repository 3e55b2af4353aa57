use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DesignId(pub String);

impl DesignId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DesignId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DesignId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// One gallery submission. Catalog order is submission order, oldest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawDesignRecord", into = "RawDesignRecord")]
pub struct DesignRecord {
    pub id: DesignId,
    pub name: String,
    pub designer: String,
    pub designer_url: String,
}

impl DesignRecord {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        designer: impl Into<String>,
        designer_url: impl Into<String>,
    ) -> Self {
        Self {
            id: DesignId(id.into()),
            name: name.into(),
            designer: designer.into(),
            designer_url: designer_url.into(),
        }
    }
}

// On disk a record is the positional tuple `[id, name, designer, designer_url]`.
type RawDesignRecord = (String, String, String, String);

impl From<RawDesignRecord> for DesignRecord {
    fn from((id, name, designer, designer_url): RawDesignRecord) -> Self {
        Self::new(id, name, designer, designer_url)
    }
}

impl From<DesignRecord> for RawDesignRecord {
    fn from(record: DesignRecord) -> Self {
        (
            record.id.0,
            record.name,
            record.designer,
            record.designer_url,
        )
    }
}

pub fn is_all_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}
