//! Minikube kernel extractor
//!
//! Minikube artifacts are config URLs that carry the release directory and
//! the kernel they were built for, e.g.
//! `https://raw.githubusercontent.com/kubernetes/minikube/v1.24.0/deploy/iso/minikube-iso/board/coreos/minikube/linux_defconfig?kernel=4.19.202`.
//! The tokens are looked up in the whole identifier, not just the base name,
//! because the kernel token lives in the query string.

use regex::Regex;

use crate::extractor::path::base_name;
use crate::extractor::traits::Extractor;
use crate::extractor::types::ParsedArtifact;

pub struct MinikubeKernelExtractor {
    kernel_re: Regex,
    release_re: Regex,
}

impl MinikubeKernelExtractor {
    pub fn new() -> Self {
        Self {
            kernel_re: Regex::new(r"kernel=(\d+\.\d+\.\d+)").unwrap(),
            release_re: Regex::new(r"/(v\d+\.\d+\.\d+)/").unwrap(),
        }
    }

    /// Minikube release directory (e.g., "v1.24.0") embedded in the identifier
    pub fn release<'a>(&self, artifact: &'a str) -> Option<&'a str> {
        self.release_re
            .captures(artifact)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

impl Default for MinikubeKernelExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor for MinikubeKernelExtractor {
    fn extract(&self, artifact: &str) -> Option<ParsedArtifact> {
        let caps = self.kernel_re.captures(artifact)?;

        Some(ParsedArtifact {
            artifact: artifact.to_string(),
            base_name: base_name(artifact).to_string(),
            kernel_version: caps.get(1)?.as_str().to_string(),
            ..Default::default()
        })
    }
}

/// Major series of a kernel version (e.g., "4" for "4.19.202")
pub fn kernel_major(kernel_version: &str) -> &str {
    kernel_version
        .split_once('.')
        .map_or(kernel_version, |(major, _)| major)
}
