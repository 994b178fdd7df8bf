use pii_core::{Document, EntityDetector, Label, Mapping, RedactionResult, Result};
use pii_detect::{PatternDetector, person_names};

/// Redacts one document.
///
/// Entity spans are computed once, from the original text, when the redactor is built.
/// Pattern matches are computed per pass from the working text as left by earlier passes.
pub struct Redactor {
    document: Document,
    patterns: PatternDetector,
    output: String,
    mapping: Mapping,
}

impl Redactor {
    /// Tag `input` with the entity capability. A capability failure aborts construction.
    pub fn new(input: impl Into<String>, detector: &dyn EntityDetector) -> Result<Self> {
        let document = Document::new(input, detector)?;
        let output = document.text().to_string();

        Ok(Self {
            document,
            patterns: PatternDetector::new(),
            output,
            mapping: Mapping::new(),
        })
    }

    /// Run all passes in order and snapshot the result.
    ///
    /// Running again re-applies the passes to the current working text; placeholder
    /// indices restart at 1 and reused keys overwrite their previous values.
    pub fn run(&mut self) -> RedactionResult {
        for label in Label::PASS_ORDER {
            let values = self.detect(label);
            tracing::debug!(label = %label, matches = values.len(), "Redaction pass");

            let working = std::mem::take(&mut self.output);
            let (working, entries) = apply_pass(working, &values, label);
            self.output = working;
            self.mapping.extend(entries);
        }

        RedactionResult {
            input: self.document.text().to_string(),
            output: self.output.clone(),
            mapping: self.mapping.clone(),
        }
    }

    pub fn input(&self) -> &str {
        self.document.text()
    }

    fn detect(&self, label: Label) -> Vec<String> {
        match label {
            Label::Name => person_names(&self.document),
            _ => self.patterns.detect(label, &self.output),
        }
    }
}

/// Substitute `values` into `working`, numbering placeholders from 1.
///
/// Every literal occurrence of a value is replaced. A value seen twice still gets its
/// own placeholder and mapping entry even though the second replacement changes nothing.
pub fn apply_pass(
    mut working: String,
    values: &[String],
    label: Label,
) -> (String, Vec<(String, String)>) {
    let mut entries = Vec::with_capacity(values.len());
    let mut index = 0;

    for value in values {
        if value.is_empty() {
            tracing::warn!(label = %label, "Skipping empty detected value");
            continue;
        }

        index += 1;
        let placeholder = label.placeholder(index);

        if working.contains(value.as_str()) {
            working = working.replace(value.as_str(), &format!("[{}]", placeholder));
            tracing::trace!(placeholder = %placeholder, "Substituted");
        } else {
            tracing::debug!(placeholder = %placeholder, "Value no longer present in text");
        }

        entries.push((placeholder, value.clone()));
    }

    (working, entries)
}

/// Build a redactor for `input` and run it once
pub fn redact(input: impl Into<String>, detector: &dyn EntityDetector) -> Result<RedactionResult> {
    let mut redactor = Redactor::new(input, detector)?;
    Ok(redactor.run())
}
