//! Single-artifact strategy
//!
//! Each artifact is its own build unit: `[a, b, c] -> [[a], [b], [c]]`.

use crate::strategy::error::GroupingError;
use crate::strategy::kind::StrategyKind;
use crate::strategy::traits::{Group, Strategy};

pub struct SingleStrategy;

impl Strategy for SingleStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Single
    }

    fn group(&self, artifacts: &[String]) -> Result<Vec<Group>, GroupingError> {
        Ok(artifacts.iter().map(|a| vec![a.clone()]).collect())
    }
}
