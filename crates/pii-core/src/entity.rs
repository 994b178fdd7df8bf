//! Entity capability seam and the tagged document

use crate::Result;
use serde::{Deserialize, Serialize};

/// A span tagged by an entity recognizer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntitySpan {
    pub tag: String,
    pub text: String,
    /// Byte offset of `text` in the original input
    #[serde(default)]
    pub offset: usize,
    /// Recognizer confidence, when the capability reports one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

impl EntitySpan {
    pub fn new(tag: impl Into<String>, text: impl Into<String>, offset: usize) -> Self {
        Self {
            tag: tag.into(),
            text: text.into(),
            offset,
            score: None,
        }
    }

    pub fn with_score(mut self, score: f64) -> Self {
        self.score = Some(score);
        self
    }
}

/// External named-entity capability: tag spans of the given text
pub trait EntityDetector: Send + Sync {
    fn detect(&self, text: &str) -> Result<Vec<EntitySpan>>;
}

impl<F> EntityDetector for F
where
    F: Fn(&str) -> Result<Vec<EntitySpan>> + Send + Sync,
{
    fn detect(&self, text: &str) -> Result<Vec<EntitySpan>> {
        self(text)
    }
}

/// Original input plus the spans tagged on it, computed once
#[derive(Debug, Clone)]
pub struct Document {
    text: String,
    entities: Vec<EntitySpan>,
}

impl Document {
    /// Tag `text` with the capability. Capability failures are returned as-is.
    pub fn new(text: impl Into<String>, detector: &dyn EntityDetector) -> Result<Self> {
        let text = text.into();
        let entities = detector.detect(&text)?;
        Ok(Self { text, entities })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn entities(&self) -> &[EntitySpan] {
        &self.entities
    }

    /// Spans carrying `tag`, in capability order
    pub fn tagged<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a EntitySpan> + 'a {
        self.entities.iter().filter(move |span| span.tag == tag)
    }
}
