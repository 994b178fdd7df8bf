//! PII detectors: regex matchers for structured values and the person-name adapter

pub mod entities;
pub mod gazetteer;
pub mod patterns;

pub use entities::{PERSON_TAG, person_names};
pub use gazetteer::GazetteerDetector;
pub use patterns::PatternDetector;
