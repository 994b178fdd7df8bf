use anyhow::{Context, Result};
use pii_core::{Mapping, RedactionResult, restore};
use std::path::Path;

use crate::cli::RestoreArgs;

pub fn handle(args: RestoreArgs) -> Result<()> {
    let text = super::read_input(args.text, args.file.as_deref())?;
    let mapping = load_mapping(&args.mapping)?;

    print!("{}", restore(&text, &mapping));
    Ok(())
}

/// Accepts either a bare mapping object or a full redaction result
fn load_mapping(path: &Path) -> Result<Mapping> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read mapping {}", path.display()))?;

    if let Ok(result) = serde_json::from_str::<RedactionResult>(&content) {
        return Ok(result.mapping);
    }

    let mapping = serde_json::from_str::<Mapping>(&content)
        .with_context(|| format!("Invalid mapping in {}", path.display()))?;
    Ok(mapping)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_bare_mapping() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mapping.json");
        std::fs::write(&path, r#"{"NAME_1":"Jane Doe","EMAIL_1":"jane@example.com"}"#).unwrap();

        let mapping = load_mapping(&path).unwrap();
        assert_eq!(
            restore("[NAME_1] <[EMAIL_1]>", &mapping),
            "Jane Doe <jane@example.com>"
        );
    }

    #[test]
    fn test_load_full_result() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("result.json");
        std::fs::write(
            &path,
            r#"{"input":"ssn 123-45-6789","output":"ssn [SOCIAL_SECURITY_NUMBER_1]","mapping":{"SOCIAL_SECURITY_NUMBER_1":"123-45-6789"}}"#,
        )
        .unwrap();

        let mapping = load_mapping(&path).unwrap();
        assert_eq!(mapping.len(), 1);
        assert_eq!(mapping.get("SOCIAL_SECURITY_NUMBER_1"), Some("123-45-6789"));
    }

    #[test]
    fn test_invalid_mapping() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, r#"["EMAIL_1"]"#).unwrap();

        assert!(load_mapping(&path).is_err());
    }
}
