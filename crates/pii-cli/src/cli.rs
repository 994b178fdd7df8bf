use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pii")]
#[command(about = "Redact personal information from text", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: platform config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Redact PII and print the result with its placeholder mapping
    Redact(RedactArgs),

    /// Put original values back into redacted text
    Restore(RestoreArgs),
}

#[derive(Args, Debug)]
pub struct RedactArgs {
    /// Text to redact (reads stdin when neither TEXT nor --file is given)
    pub text: Option<String>,

    /// Read text from a file
    #[arg(long, conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Person name to redact, in addition to the configured gazetteer
    #[arg(long = "name")]
    pub names: Vec<String>,

    /// Write the mapping as JSON to this file
    #[arg(long)]
    pub mapping_out: Option<PathBuf>,

    /// Print only the redacted text
    #[arg(long)]
    pub text_only: bool,
}

#[derive(Args, Debug)]
pub struct RestoreArgs {
    /// Redacted text (reads stdin when neither TEXT nor --file is given)
    pub text: Option<String>,

    /// Read redacted text from a file
    #[arg(long, conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Mapping JSON, or a full redaction result
    #[arg(long)]
    pub mapping: PathBuf,
}
