use pii_core::Document;

/// Tag the entity capability uses for people
pub const PERSON_TAG: &str = "PERSON";

/// Person names tagged on the original document, in capability order.
///
/// Confidence scores are carried on the spans but not consulted.
pub fn person_names(document: &Document) -> Vec<String> {
    let names: Vec<String> = document
        .tagged(PERSON_TAG)
        .map(|span| span.text.clone())
        .collect();

    tracing::trace!(
        entities = document.entities().len(),
        people = names.len(),
        "Filtered person spans"
    );

    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use pii_core::{EntitySpan, Result};

    #[test]
    fn test_only_person_spans() {
        let detector = |_: &str| -> Result<Vec<EntitySpan>> {
            Ok(vec![
                EntitySpan::new("ORGANIZATION", "Acme", 0),
                EntitySpan::new("PERSON", "Jane Doe", 10).with_score(0.2),
                EntitySpan::new("LOCATION", "Paris", 30),
                EntitySpan::new("PERSON", "John", 40),
            ])
        };

        let doc = Document::new("irrelevant", &detector).unwrap();
        assert_eq!(person_names(&doc), vec!["Jane Doe", "John"]);
    }

    #[test]
    fn test_no_entities() {
        let detector = |_: &str| -> Result<Vec<EntitySpan>> { Ok(Vec::new()) };

        let doc = Document::new("", &detector).unwrap();
        assert!(person_names(&doc).is_empty());
    }
}
