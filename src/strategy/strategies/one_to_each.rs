//! Anchor-to-each strategy
//!
//! The first artifact is shared by every build unit and paired with each of
//! the others in turn: `[a, b, c] -> [[a, b], [a, c]]`.

use crate::strategy::error::GroupingError;
use crate::strategy::kind::StrategyKind;
use crate::strategy::traits::{Group, Strategy};

pub struct OneToEachStrategy;

impl Strategy for OneToEachStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::OneToEach
    }

    fn group(&self, artifacts: &[String]) -> Result<Vec<Group>, GroupingError> {
        let Some((anchor, rest)) = artifacts.split_first() else {
            return Err(GroupingError::Precondition {
                strategy: self.kind(),
                reason: "no anchor package".to_string(),
            });
        };

        Ok(rest
            .iter()
            .map(|artifact| vec![anchor.clone(), artifact.clone()])
            .collect())
    }
}
