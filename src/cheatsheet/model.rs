use crate::record::{Validate, ValidationError};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

pub const FORMAT_VERSION: u32 = 1;

/// A single cheat sheet item: a clue and the answer it should bring to mind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub oid: u32,
    pub clue: String,
    pub answer: String,
    /// The primary context this entry belongs to (e.g. "git", "vim").
    pub primary: String,
    #[serde(default)]
    pub tags: BTreeSet<String>,
}

impl Entry {
    pub fn new(
        clue: impl Into<String>,
        answer: impl Into<String>,
        primary: impl Into<String>,
    ) -> Self {
        Self {
            oid: 0,
            clue: clue.into(),
            answer: answer.into(),
            primary: primary.into(),
            tags: BTreeSet::new(),
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheatSheet {
    pub version: u32,
    #[serde(rename = "items")]
    pub entries: Vec<Entry>,
}

impl Default for CheatSheet {
    fn default() -> Self {
        Self {
            version: FORMAT_VERSION,
            entries: Vec::new(),
        }
    }
}

impl CheatSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry, assigning it the oid after the highest in use. Returns that oid.
    pub fn add_entry(&mut self, mut entry: Entry) -> Result<u32, ValidationError> {
        let highest = self.entries.iter().map(|e| e.oid).max().unwrap_or(0);
        let oid = highest
            .checked_add(1)
            .ok_or_else(|| ValidationError::new(format!("no oid left after {}", highest)))?;
        entry.oid = oid;
        self.entries.push(entry);
        Ok(oid)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct primaries, sorted.
    pub fn primaries(&self) -> BTreeSet<&str> {
        self.entries.iter().map(|e| e.primary.as_str()).collect()
    }
}

impl Validate for Entry {
    fn validate(&self) -> Result<(), ValidationError> {
        let required = [
            ("clue", &self.clue),
            ("answer", &self.answer),
            ("primary", &self.primary),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ValidationError::new(format!(
                    "entry {}: {} must not be empty",
                    self.oid, field
                )));
            }
        }
        if self.tags.iter().any(|t| t.trim().is_empty()) {
            return Err(ValidationError::new(format!(
                "entry {}: tags must not be empty",
                self.oid
            )));
        }
        Ok(())
    }
}

impl Validate for CheatSheet {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.version != FORMAT_VERSION {
            return Err(ValidationError::new(format!(
                "unsupported list version {}",
                self.version
            )));
        }
        let mut seen = HashSet::with_capacity(self.entries.len());
        for entry in &self.entries {
            entry.validate()?;
            if !seen.insert(entry.oid) {
                return Err(ValidationError::new(format!(
                    "duplicate entry oid {}",
                    entry.oid
                )));
            }
        }
        Ok(())
    }
}
