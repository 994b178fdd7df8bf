//! Redaction pipeline: runs the detectors in pass order and builds the placeholder mapping

pub mod redactor;

pub use redactor::{Redactor, apply_pass, redact};
