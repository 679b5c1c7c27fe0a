//! Strategy trait definition

use crate::strategy::error::GroupingError;
use crate::strategy::kind::StrategyKind;

/// One build unit: the artifacts a single kernel module build needs
pub type Group = Vec<String>;

/// Trait for distribution-specific grouping logic
///
/// Each distribution packages kernel build inputs differently:
/// - Debian: kbuild + arch headers + common headers, matched by version lineage
/// - Ubuntu: arch + all header pairs, newest revision wins
/// - COS: one directory per build
///
/// Implementations are stateless; the same instance can serve any number of
/// calls, from any thread.
pub trait Strategy: Send + Sync {
    /// Returns the kind this strategy implements
    fn kind(&self) -> StrategyKind;

    /// Group a flat artifact listing into build units
    ///
    /// The input is never modified. Identical input order yields identical
    /// output. Any error aborts the whole call.
    fn group(&self, artifacts: &[String]) -> Result<Vec<Group>, GroupingError>;
}
