//! Minikube strategy
//!
//! Each minikube kernel config is paired with the upstream kernel source
//! archive for the kernel it names:
//!
//! ```text
//! [foo/v1.24.0/linux_defconfig?kernel=4.19.202]
//!   -> [[foo/v1.24.0/linux_defconfig?kernel=4.19.202,
//!        https://cdn.kernel.org/pub/linux/kernel/v4.x/linux-4.19.202.tar.xz]]
//! ```
//!
//! A listing where any entry lacks the `kernel=` token is treated as "no
//! conforming input" and yields no groups at all instead of an error.

use tracing::warn;

use crate::extractor::minikube::{MinikubeKernelExtractor, kernel_major};
use crate::extractor::traits::Extractor;
use crate::strategy::error::GroupingError;
use crate::strategy::kind::StrategyKind;
use crate::strategy::traits::{Group, Strategy};

pub struct MinikubeStrategy {
    extractor: MinikubeKernelExtractor,
    source_url_template: String,
}

impl MinikubeStrategy {
    pub fn new(source_url_template: impl Into<String>) -> Self {
        Self {
            extractor: MinikubeKernelExtractor::new(),
            source_url_template: source_url_template.into(),
        }
    }

    fn kernel_source_url(&self, kernel_version: &str) -> String {
        self.source_url_template
            .replace("{major}", kernel_major(kernel_version))
            .replace("{version}", kernel_version)
    }
}

impl Strategy for MinikubeStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Minikube
    }

    fn group(&self, artifacts: &[String]) -> Result<Vec<Group>, GroupingError> {
        let mut groups = Vec::with_capacity(artifacts.len());

        for artifact in artifacts {
            let Some(parsed) = self.extractor.extract(artifact) else {
                warn!(
                    "No kernel version in minikube artifact {}, skipping the whole listing",
                    artifact
                );
                return Ok(Vec::new());
            };

            if self.extractor.release(artifact).is_none() {
                return Err(GroupingError::Malformed {
                    artifact: artifact.clone(),
                    expected: "a /vX.Y.Z/ minikube release directory".to_string(),
                });
            }

            groups.push(vec![
                artifact.clone(),
                self.kernel_source_url(&parsed.kernel_version),
            ]);
        }

        Ok(groups)
    }
}
