//! Anchor-to-pairs strategy
//!
//! The first artifact is shared by every build unit and joined with each
//! consecutive pair of the others: `[a, b, c, d, e] -> [[a, b, c], [a, d, e]]`.

use crate::strategy::error::GroupingError;
use crate::strategy::kind::StrategyKind;
use crate::strategy::traits::{Group, Strategy};

pub struct OneToPairsStrategy;

impl Strategy for OneToPairsStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::OneToPairs
    }

    fn group(&self, artifacts: &[String]) -> Result<Vec<Group>, GroupingError> {
        if artifacts.len() < 3 || artifacts.len() % 2 == 0 {
            return Err(GroupingError::Precondition {
                strategy: self.kind(),
                reason: format!(
                    "expected an anchor plus an even number of packages, got {}",
                    artifacts.len()
                ),
            });
        }

        let anchor = &artifacts[0];
        Ok(artifacts[1..]
            .chunks_exact(2)
            .map(|pair| vec![anchor.clone(), pair[0].clone(), pair[1].clone()])
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn anchor_is_joined_with_each_pair() {
        let groups = OneToPairsStrategy
            .group(&strings(&["a", "b", "c", "d", "e"]))
            .unwrap();

        assert_eq!(groups, vec![vec!["a", "b", "c"], vec!["a", "d", "e"]]);
    }

    #[rstest]
    #[case(&[])]
    #[case(&["a"])]
    #[case(&["a", "b"])]
    #[case(&["a", "b", "c", "d"])]
    fn bad_package_count_is_a_precondition_violation(#[case] artifacts: &[&str]) {
        let err = OneToPairsStrategy.group(&strings(artifacts)).unwrap_err();

        assert!(matches!(
            err,
            GroupingError::Precondition {
                strategy: StrategyKind::OneToPairs,
                ..
            }
        ));
    }
}
