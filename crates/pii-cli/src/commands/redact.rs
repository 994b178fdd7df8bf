use anyhow::{Context, Result};
use pii_config::Config;
use pii_core::RedactionResult;
use pii_detect::GazetteerDetector;

use crate::cli::RedactArgs;

pub fn handle(args: RedactArgs, config: &Config) -> Result<()> {
    let input = super::read_input(args.text, args.file.as_deref())?;
    let result = run(input, args.names, config)?;

    if let Some(path) = &args.mapping_out {
        let json = serde_json::to_string_pretty(&result.mapping)?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write mapping to {}", path.display()))?;
        tracing::info!(entries = result.mapping.len(), path = %path.display(), "Wrote mapping");
    }

    if args.text_only {
        print!("{}", result.output);
    } else if config.output.pretty {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", serde_json::to_string(&result)?);
    }

    Ok(())
}

/// Redact `input` using the configured gazetteer plus any extra names
fn run(input: String, extra_names: Vec<String>, config: &Config) -> Result<RedactionResult> {
    let mut names = config.names.gazetteer.clone();
    names.extend(extra_names);

    let detector = GazetteerDetector::new(names, config.names.case_insensitive)?;
    tracing::debug!(names = detector.names().len(), "Gazetteer ready");

    Ok(pii_engine::redact(input, &detector)?)
}
