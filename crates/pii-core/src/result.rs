use crate::mapping::{Mapping, restore};
use serde::{Deserialize, Serialize};

/// Outcome of one redaction run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedactionResult {
    pub input: String,
    pub output: String,
    pub mapping: Mapping,
}

impl RedactionResult {
    /// Redacted output with every placeholder swapped back for its value
    pub fn restore(&self) -> String {
        restore(&self.output, &self.mapping)
    }
}
