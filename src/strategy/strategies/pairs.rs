//! Ubuntu pairs strategy
//!
//! Ubuntu ships each kernel as an arch-specific and an `all` header package
//! sharing `<version>.<revision>`. Packages with newer revisions replace
//! older ones, and every version must end up with exactly two packages.
//!
//! ```text
//! [4.4.0-1031.40_amd64, 4.4.0-1031.40_all, 4.4.0-1031.50_amd64, 4.4.0-1031.50_all,
//!  4.4.0-1069.79_amd64, 4.4.0-1069.79_all]
//!   -> [[4.4.0-1031.50_amd64, 4.4.0-1031.50_all], [4.4.0-1069.79_amd64, 4.4.0-1069.79_all]]
//! ```
//!
//! Backports (`~16.04.1`) of supported releases are kept as versions of
//! their own. Other backports share the base version key and lose against
//! non-backport packages of the same revision, whatever the listing order.

use std::cmp::Ordering;

use indexmap::IndexMap;
use tracing::debug;

use crate::extractor::traits::Extractor;
use crate::extractor::types::ParsedArtifact;
use crate::extractor::ubuntu::UbuntuRevisionExtractor;
use crate::strategy::error::GroupingError;
use crate::strategy::kind::StrategyKind;
use crate::strategy::traits::{Group, Strategy};
use crate::version::compare_versions;

pub struct PairsStrategy {
    extractor: UbuntuRevisionExtractor,
    supported_backports: Vec<String>,
}

/// Packages currently held for one version key
#[derive(Debug)]
struct Revision {
    packages: Vec<ParsedArtifact>,
    revision: String,
    backport: bool,
}

impl Revision {
    fn starting_with(parsed: ParsedArtifact) -> Self {
        Self {
            revision: parsed.package_version.clone(),
            backport: parsed.is_backport(),
            packages: vec![parsed],
        }
    }

    fn contains_file(&self, base_name: &str) -> bool {
        self.packages.iter().any(|p| p.base_name == base_name)
    }
}

impl PairsStrategy {
    pub fn new(supported_backports: Vec<String>) -> Self {
        Self {
            extractor: UbuntuRevisionExtractor::new(),
            supported_backports,
        }
    }

    fn version_key(&self, parsed: &ParsedArtifact) -> String {
        match &parsed.backport {
            Some(suffix)
                if self
                    .supported_backports
                    .iter()
                    .any(|release| suffix.contains(release.as_str())) =>
            {
                format!("{}{}", parsed.kernel_version, suffix)
            }
            _ => parsed.kernel_version.clone(),
        }
    }
}

impl Strategy for PairsStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Pairs
    }

    fn group(&self, artifacts: &[String]) -> Result<Vec<Group>, GroupingError> {
        let mut versions: IndexMap<String, Revision> = IndexMap::new();

        for artifact in artifacts {
            let parsed =
                self.extractor
                    .extract(artifact)
                    .ok_or_else(|| GroupingError::Malformed {
                        artifact: artifact.clone(),
                        expected: "<version>.<revision>[~<backport>]_".to_string(),
                    })?;
            let key = self.version_key(&parsed);

            let Some(held) = versions.get_mut(&key) else {
                versions.insert(key, Revision::starting_with(parsed));
                continue;
            };

            match compare_versions(&held.revision, &parsed.package_version) {
                Ordering::Greater => {}
                Ordering::Less => *held = Revision::starting_with(parsed),
                Ordering::Equal => {
                    if held.contains_file(&parsed.base_name) {
                        continue;
                    }
                    if !parsed.is_backport() && held.backport {
                        debug!("Dropping backports of {} in favor of {}", key, artifact);
                        *held = Revision::starting_with(parsed);
                    } else if parsed.is_backport() == held.backport {
                        held.packages.push(parsed);
                    }
                }
            }
        }

        versions
            .into_iter()
            .map(|(key, held)| {
                if held.packages.len() != 2 {
                    return Err(GroupingError::Incomplete {
                        key,
                        reason: format!(
                            "unpaired package at revision {}: {:?}",
                            held.revision,
                            held.packages
                                .iter()
                                .map(|p| p.artifact.as_str())
                                .collect::<Vec<_>>()
                        ),
                    });
                }
                Ok(held.packages.into_iter().map(|p| p.artifact).collect())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PairsConfig;

    fn strategy() -> PairsStrategy {
        PairsStrategy::new(PairsConfig::default().supported_backports)
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn newer_revision_replaces_older_one() {
        let artifacts = strings(&[
            "4.4.0-1031.40_amd64",
            "4.4.0-1031.40_all",
            "4.4.0-1031.50_amd64",
            "4.4.0-1031.50_all",
            "4.4.0-1069.79_amd64",
            "4.4.0-1069.79_all",
        ]);

        let groups = strategy().group(&artifacts).unwrap();

        assert_eq!(
            groups,
            vec![
                vec!["4.4.0-1031.50_amd64", "4.4.0-1031.50_all"],
                vec!["4.4.0-1069.79_amd64", "4.4.0-1069.79_all"],
            ]
        );
    }

    #[test]
    fn older_revision_listed_later_is_ignored() {
        let artifacts = strings(&[
            "4.4.0-1031.50_amd64",
            "4.4.0-1031.50_all",
            "4.4.0-1031.40_amd64",
            "4.4.0-1031.40_all",
        ]);

        let groups = strategy().group(&artifacts).unwrap();

        assert_eq!(groups, vec![vec!["4.4.0-1031.50_amd64", "4.4.0-1031.50_all"]]);
    }

    #[test]
    fn revisions_compare_numerically() {
        let artifacts = strings(&[
            "4.4.0-1031.9_amd64",
            "4.4.0-1031.9_all",
            "4.4.0-1031.10_amd64",
            "4.4.0-1031.10_all",
        ]);

        let groups = strategy().group(&artifacts).unwrap();

        assert_eq!(groups, vec![vec!["4.4.0-1031.10_amd64", "4.4.0-1031.10_all"]]);
    }

    #[test]
    fn duplicate_file_from_another_pool_is_not_counted_twice() {
        let artifacts = strings(&[
            "http://archive.ubuntu.com/pool/linux-headers-5.4.0-1031-aws_5.4.0-1031.33_amd64.deb",
            "http://security.ubuntu.com/pool/linux-headers-5.4.0-1031-aws_5.4.0-1031.33_amd64.deb",
            "http://archive.ubuntu.com/pool/linux-aws-headers-5.4.0-1031_5.4.0-1031.33_all.deb",
        ]);

        let groups = strategy().group(&artifacts).unwrap();

        assert_eq!(
            groups,
            vec![vec![
                "http://archive.ubuntu.com/pool/linux-headers-5.4.0-1031-aws_5.4.0-1031.33_amd64.deb",
                "http://archive.ubuntu.com/pool/linux-aws-headers-5.4.0-1031_5.4.0-1031.33_all.deb",
            ]]
        );
    }

    #[test]
    fn non_backport_listed_after_backports_wins() {
        let artifacts = strings(&[
            "5.4.0-1031.33~18.04.1_amd64",
            "5.4.0-1031.33~18.04.1_all",
            "5.4.0-1031.33_amd64",
            "5.4.0-1031.33_all",
        ]);

        let groups = strategy().group(&artifacts).unwrap();

        assert_eq!(groups, vec![vec!["5.4.0-1031.33_amd64", "5.4.0-1031.33_all"]]);
    }

    #[test]
    fn non_backport_listed_before_backports_wins() {
        let artifacts = strings(&[
            "5.4.0-1031.33_amd64",
            "5.4.0-1031.33_all",
            "5.4.0-1031.33~18.04.1_amd64",
            "5.4.0-1031.33~18.04.1_all",
        ]);

        let groups = strategy().group(&artifacts).unwrap();

        assert_eq!(groups, vec![vec!["5.4.0-1031.33_amd64", "5.4.0-1031.33_all"]]);
    }

    #[test]
    fn supported_backports_get_their_own_group() {
        let artifacts = strings(&[
            "4.15.0-1021.22_amd64",
            "4.15.0-1021.22_all",
            "4.15.0-1021.22~16.04.1_amd64",
            "4.15.0-1021.22~16.04.1_all",
        ]);

        let groups = strategy().group(&artifacts).unwrap();

        assert_eq!(
            groups,
            vec![
                vec!["4.15.0-1021.22_amd64", "4.15.0-1021.22_all"],
                vec!["4.15.0-1021.22~16.04.1_amd64", "4.15.0-1021.22~16.04.1_all"],
            ]
        );
    }

    #[test]
    fn unpaired_version_is_incomplete() {
        let artifacts = strings(&[
            "4.4.0-1031.40_amd64",
            "4.4.0-1031.40_all",
            "4.4.0-1069.79_amd64",
        ]);

        let err = strategy().group(&artifacts).unwrap_err();

        assert!(matches!(
            err,
            GroupingError::Incomplete { ref key, .. } if key == "4.4.0-1069"
        ));
        assert!(err.to_string().contains("unpaired package"));
    }

    #[test]
    fn artifact_without_revision_is_malformed() {
        let artifacts = strings(&["4.4.0-1031.40_amd64", "linux-headers_amd64.deb"]);

        let err = strategy().group(&artifacts).unwrap_err();

        assert_eq!(
            err,
            GroupingError::Malformed {
                artifact: "linux-headers_amd64.deb".to_string(),
                expected: "<version>.<revision>[~<backport>]_".to_string(),
            }
        );
    }
}
