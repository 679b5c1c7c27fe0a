//! Container-Optimized OS strategy
//!
//! COS publishes one directory per build, holding the kernel sources and,
//! for newer builds, a headers archive:
//!
//! ```text
//! [foo/kernel-src.tar.gz, bar/kernel-src.tar.gz, foo/kernel-headers.tgz]
//!   -> [[foo/kernel-src.tar.gz, foo/kernel-headers.tgz], [bar/kernel-src.tar.gz]]
//! ```

use tracing::debug;

use crate::extractor::path::{base_name, parent_dir};
use crate::strategy::error::GroupingError;
use crate::strategy::kind::StrategyKind;
use crate::strategy::traits::{Group, Strategy};

pub struct CosStrategy {
    source_name: String,
}

impl CosStrategy {
    pub fn new(source_name: impl Into<String>) -> Self {
        Self {
            source_name: source_name.into(),
        }
    }
}

impl Strategy for CosStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Cos
    }

    fn group(&self, artifacts: &[String]) -> Result<Vec<Group>, GroupingError> {
        // Descending order puts kernel-src ahead of kernel-headers in each directory
        let mut sorted = artifacts.to_vec();
        sorted.sort_by(|a, b| b.cmp(a));

        let mut groups: Vec<Group> = Vec::new();
        let mut current: Group = Vec::new();

        for artifact in sorted {
            if let Some(first) = current.first()
                && parent_dir(first) != parent_dir(&artifact)
            {
                groups.push(std::mem::take(&mut current));
            }

            if current.is_empty() && base_name(&artifact) != self.source_name {
                return Err(GroupingError::Malformed {
                    artifact,
                    expected: format!("first entry in directory to be {}", self.source_name),
                });
            }

            current.push(artifact);
        }

        if !current.is_empty() {
            groups.push(current);
        }

        debug!("Grouped {} COS artifacts into {} groups", artifacts.len(), groups.len());
        Ok(groups)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_COS_SOURCE_NAME;

    fn strategy() -> CosStrategy {
        CosStrategy::new(DEFAULT_COS_SOURCE_NAME)
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn groups_sources_with_optional_headers_per_directory() {
        let artifacts = strings(&[
            "dirA/kernel-src.tar.gz",
            "dirA/kernel-headers.tgz",
            "dirB/kernel-src.tar.gz",
        ]);

        let groups = strategy().group(&artifacts).unwrap();

        assert_eq!(
            groups,
            vec![
                vec!["dirB/kernel-src.tar.gz"],
                vec!["dirA/kernel-src.tar.gz", "dirA/kernel-headers.tgz"],
            ]
        );
    }

    #[test]
    fn input_order_does_not_matter() {
        let artifacts = strings(&[
            "gs://cos-tools/16108.403.42/kernel-headers.tgz",
            "gs://cos-tools/15359.109.0/kernel-src.tar.gz",
            "gs://cos-tools/16108.403.42/kernel-src.tar.gz",
        ]);
        let mut reversed = artifacts.clone();
        reversed.reverse();

        assert_eq!(
            strategy().group(&artifacts).unwrap(),
            strategy().group(&reversed).unwrap()
        );
    }

    #[test]
    fn input_is_left_untouched() {
        let artifacts = strings(&["a/kernel-src.tar.gz", "b/kernel-src.tar.gz"]);
        let before = artifacts.clone();

        strategy().group(&artifacts).unwrap();

        assert_eq!(artifacts, before);
    }

    #[test]
    fn directory_without_sources_first_is_malformed() {
        let artifacts = strings(&["dirA/kernel-src.tar.gz", "dirB/kernel-headers.tgz"]);

        let err = strategy().group(&artifacts).unwrap_err();

        assert_eq!(
            err,
            GroupingError::Malformed {
                artifact: "dirB/kernel-headers.tgz".to_string(),
                expected: "first entry in directory to be kernel-src.tar.gz".to_string(),
            }
        );
    }

    #[test]
    fn source_name_is_configurable() {
        let artifacts = strings(&["dirA/linux.tar.gz"]);

        let groups = CosStrategy::new("linux.tar.gz").group(&artifacts).unwrap();

        assert_eq!(groups, vec![vec!["dirA/linux.tar.gz"]]);
    }

    #[test]
    fn trailing_slash_keeps_entry_in_its_directory() {
        let artifacts = strings(&["dirA/kernel-headers.tgz", "dirA/kernel-src.tar.gz/"]);

        let groups = strategy().group(&artifacts).unwrap();

        assert_eq!(
            groups,
            vec![vec!["dirA/kernel-src.tar.gz/", "dirA/kernel-headers.tgz"]]
        );
    }
}
