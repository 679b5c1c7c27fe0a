//! Ubuntu revision extractor
//!
//! Ubuntu header packages embed `<version>.<revision>[~<backport>]_` in their
//! file names:
//! - `linux-headers-5.4.0-1031-aws_5.4.0-1031.33_amd64.deb`
//!   -> version `5.4.0-1031`, revision `33`
//! - `linux-headers-4.15.0-1021-gcp_4.15.0-1021.22~16.04.1_amd64.deb`
//!   -> version `4.15.0-1021`, revision `22`, backport `~16.04.1`

use regex::Regex;

use crate::extractor::path::base_name;
use crate::extractor::traits::Extractor;
use crate::extractor::types::ParsedArtifact;

pub struct UbuntuRevisionExtractor {
    re: Regex,
}

impl UbuntuRevisionExtractor {
    pub fn new() -> Self {
        Self {
            // Lazy prefix: the first `<version>.<revision>_` in the name wins
            re: Regex::new(r"^.*?(\d+\.\d+\.\d+-\d+)\.(\d+)(~[\d.]+)?_.*$").unwrap(),
        }
    }
}

impl Default for UbuntuRevisionExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor for UbuntuRevisionExtractor {
    fn extract(&self, artifact: &str) -> Option<ParsedArtifact> {
        let name = base_name(artifact);
        let caps = self.re.captures(name)?;

        Some(ParsedArtifact {
            artifact: artifact.to_string(),
            base_name: name.to_string(),
            kernel_version: caps.get(1)?.as_str().to_string(),
            package_version: caps.get(2)?.as_str().to_string(),
            backport: caps.get(3).map(|m| m.as_str().to_string()),
        })
    }
}
