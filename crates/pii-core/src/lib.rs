//! Core domain models for the PII filter
//!
//! This crate contains:
//! - Labels and placeholder tokens
//! - The ordered placeholder mapping and re-identification
//! - The entity capability seam and the tagged document

pub mod entity;
pub mod error;
pub mod label;
pub mod mapping;
pub mod result;

pub use entity::{Document, EntityDetector, EntitySpan};
pub use error::{Error, Result};
pub use label::Label;
pub use mapping::{Mapping, restore};
pub use result::RedactionResult;
