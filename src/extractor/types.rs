//! Common types for extractors

/// One artifact as seen by a single convention
///
/// Only the fields the convention knows about are filled in; the rest stay
/// empty. Built fresh on every strategy call and never shared.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedArtifact {
    /// The untouched identifier (URL or path)
    pub artifact: String,
    /// Last path segment of the identifier
    pub base_name: String,
    /// Kernel release (e.g., "5.4.0-5", "5.4", "4.19.202")
    pub kernel_version: String,
    /// Package build revision (e.g., "5.4.68-1", "33", "5.3.18-24.9")
    pub package_version: String,
    /// Backport suffix (e.g., "~18.04.1") when present
    pub backport: Option<String>,
}

impl ParsedArtifact {
    pub fn is_backport(&self) -> bool {
        self.backport.is_some()
    }
}
