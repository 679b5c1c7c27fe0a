//! SUSE strategy
//!
//! Matches the arch specific (`x86_64`) and the arch-independent (`noarch`)
//! devel package of each kernel through their shared version token.

use indexmap::IndexMap;

use crate::extractor::suse::SuseVersionExtractor;
use crate::extractor::traits::Extractor;
use crate::strategy::error::GroupingError;
use crate::strategy::kind::StrategyKind;
use crate::strategy::traits::{Group, Strategy};

pub struct SuseStrategy {
    extractor: SuseVersionExtractor,
}

impl SuseStrategy {
    pub fn new() -> Self {
        Self {
            extractor: SuseVersionExtractor::new(),
        }
    }
}

impl Default for SuseStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for SuseStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Suse
    }

    fn group(&self, artifacts: &[String]) -> Result<Vec<Group>, GroupingError> {
        let mut versions: IndexMap<String, Group> = IndexMap::new();

        for artifact in artifacts {
            let parsed =
                self.extractor
                    .extract(artifact)
                    .ok_or_else(|| GroupingError::Malformed {
                        artifact: artifact.clone(),
                        expected: "a SUSE kernel version".to_string(),
                    })?;

            versions
                .entry(parsed.package_version)
                .or_insert_with(|| Vec::with_capacity(2))
                .push(artifact.clone());
        }

        versions
            .into_iter()
            .map(|(version, pair)| {
                if pair.len() != 2 {
                    return Err(GroupingError::Incomplete {
                        key: version,
                        reason: format!("unpaired package {:?}", pair),
                    });
                }
                Ok(pair)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn pairs_noarch_with_arch_package_of_same_version() {
        let artifacts = strings(&[
            "https://download.opensuse.org/x86_64/kernel-default-devel-5.3.18-24.9.1.x86_64.rpm",
            "https://download.opensuse.org/x86_64/kernel-default-devel-5.3.18-24.12.1.x86_64.rpm",
            "https://download.opensuse.org/noarch/kernel-devel-5.3.18-24.12.1.noarch.rpm",
            "https://download.opensuse.org/noarch/kernel-devel-5.3.18-24.9.1.noarch.rpm",
        ]);

        let groups = SuseStrategy::new().group(&artifacts).unwrap();

        assert_eq!(
            groups,
            vec![
                vec![
                    "https://download.opensuse.org/x86_64/kernel-default-devel-5.3.18-24.9.1.x86_64.rpm",
                    "https://download.opensuse.org/noarch/kernel-devel-5.3.18-24.9.1.noarch.rpm",
                ],
                vec![
                    "https://download.opensuse.org/x86_64/kernel-default-devel-5.3.18-24.12.1.x86_64.rpm",
                    "https://download.opensuse.org/noarch/kernel-devel-5.3.18-24.12.1.noarch.rpm",
                ],
            ]
        );
    }

    #[test]
    fn version_with_single_package_is_incomplete() {
        let artifacts = strings(&[
            "kernel-default-devel-5.3.18-24.9.1.x86_64.rpm",
            "kernel-devel-5.3.18-24.9.1.noarch.rpm",
            "kernel-default-devel-5.3.18-24.12.1.x86_64.rpm",
        ]);

        let err = SuseStrategy::new().group(&artifacts).unwrap_err();

        assert!(matches!(
            err,
            GroupingError::Incomplete { ref key, .. } if key == "5.3.18-24.12"
        ));
    }

    #[test]
    fn version_with_three_packages_is_incomplete() {
        let artifacts = strings(&[
            "kernel-default-devel-5.3.18-24.9.1.x86_64.rpm",
            "kernel-devel-5.3.18-24.9.1.noarch.rpm",
            "kernel-azure-devel-5.3.18-24.9.1.x86_64.rpm",
        ]);

        let err = SuseStrategy::new().group(&artifacts).unwrap_err();

        assert!(matches!(err, GroupingError::Incomplete { .. }));
    }

    #[test]
    fn artifact_without_version_is_malformed() {
        let artifacts = strings(&["kernel-devel.noarch.rpm"]);

        let err = SuseStrategy::new().group(&artifacts).unwrap_err();

        assert!(matches!(err, GroupingError::Malformed { .. }));
    }
}
