//! SUSE composite version extractor
//!
//! SUSE ships `kernel-<flavor>-devel-<ver>.<arch>.rpm` and the arch-independent
//! `kernel-devel-<ver>.noarch.rpm`. Both share one composite token that pairs
//! them, e.g. `5.3.18-24.9` in `kernel-default-devel-5.3.18-24.9.1.x86_64.rpm`
//! and `kernel-devel-5.3.18-24.9.1.noarch.rpm`. Some releases prefix the
//! release number with a letter tag or dated segments
//! (`4.12.14-lp151.28.91`, `5.3.18-150300.59.43`).

use regex::Regex;

use crate::extractor::path::base_name;
use crate::extractor::traits::Extractor;
use crate::extractor::types::ParsedArtifact;

pub struct SuseVersionExtractor {
    re: Regex,
}

impl SuseVersionExtractor {
    pub fn new() -> Self {
        Self {
            re: Regex::new(r"^.*?(\d+\.\d+\.\d+-[a-z]*(?:\d{6}\.)*\d+\.\d+).*$").unwrap(),
        }
    }
}

impl Default for SuseVersionExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor for SuseVersionExtractor {
    fn extract(&self, artifact: &str) -> Option<ParsedArtifact> {
        let name = base_name(artifact);
        let caps = self.re.captures(name)?;

        Some(ParsedArtifact {
            artifact: artifact.to_string(),
            base_name: name.to_string(),
            package_version: caps.get(1)?.as_str().to_string(),
            ..Default::default()
        })
    }
}
