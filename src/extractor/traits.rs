//! Extractor trait definition

use crate::extractor::types::ParsedArtifact;

/// Trait for pulling structured fields out of an artifact identifier
///
/// An artifact that does not have the shape an extractor expects yields
/// `None`. Whether that is harmless or fatal is up to the strategy.
pub trait Extractor: Send + Sync {
    fn extract(&self, artifact: &str) -> Option<ParsedArtifact>;
}
