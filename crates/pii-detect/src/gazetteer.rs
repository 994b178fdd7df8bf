//! Dictionary-backed person detector
//!
//! Stands in for a statistical NER model when all that is known is a list of names.

use crate::entities::PERSON_TAG;
use pii_core::{EntityDetector, EntitySpan, Error, Result};
use regex::Regex;

pub struct GazetteerDetector {
    names: Vec<String>,
    pattern: Option<Regex>,
}

impl GazetteerDetector {
    /// Build from a list of names. Blank entries are dropped, duplicates collapsed.
    pub fn new(names: Vec<String>, case_insensitive: bool) -> Result<Self> {
        let mut names: Vec<String> = names
            .into_iter()
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .collect();

        // Longest first so "Jane Doe" wins over "Jane" at the same position
        names.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        names.dedup();

        let pattern = if names.is_empty() {
            None
        } else {
            let alternation = names
                .iter()
                .map(|n| regex::escape(n))
                .collect::<Vec<_>>()
                .join("|");
            let flags = if case_insensitive { "(?i)" } else { "" };

            let regex = Regex::new(&format!(r"{}\b(?:{})\b", flags, alternation))
                .map_err(|e| Error::EntityDetection(format!("Invalid gazetteer: {}", e)))?;
            Some(regex)
        };

        Ok(Self { names, pattern })
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl EntityDetector for GazetteerDetector {
    fn detect(&self, text: &str) -> Result<Vec<EntitySpan>> {
        let Some(pattern) = &self.pattern else {
            return Ok(Vec::new());
        };

        Ok(pattern
            .find_iter(text)
            .map(|m| EntitySpan::new(PERSON_TAG, m.as_str(), m.start()))
            .collect())
    }
}
