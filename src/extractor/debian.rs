//! Debian kernel package extractors
//!
//! Debian (and Garden Linux, which follows it) ships kernel build inputs as
//! two families of `.deb` files:
//! - Build support: `linux-kbuild-5.10_5.10.46-4_amd64.deb`
//!   (kernel series `5.10`, package version `5.10.46-4`)
//! - Headers: `linux-headers-5.10.0-8-amd64_5.10.46-4_amd64.deb` and the
//!   arch-independent `linux-headers-5.10.0-8-common_5.10.46-4_all.deb`
//!   (kernel version `5.10.0-8`, package version `5.10.46-4`)
//!
//! Anything else in the listing is not ours and yields `None`.

use regex::Regex;

use crate::extractor::path::base_name;
use crate::extractor::traits::Extractor;
use crate::extractor::types::ParsedArtifact;

/// Extractor for `linux-kbuild-*` build-support packages
pub struct DebianBuildSupportExtractor {
    re: Regex,
}

impl DebianBuildSupportExtractor {
    pub fn new() -> Self {
        Self {
            re: Regex::new(r"^linux-kbuild-(\d+(?:\.\d+)*)_([^_]+)(?:_.*)?\.deb$").unwrap(),
        }
    }
}

impl Default for DebianBuildSupportExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor for DebianBuildSupportExtractor {
    fn extract(&self, artifact: &str) -> Option<ParsedArtifact> {
        extract_versions(&self.re, artifact)
    }
}

/// Extractor for `linux-headers-*` packages (arch-specific and common)
pub struct DebianHeaderExtractor {
    re: Regex,
}

impl DebianHeaderExtractor {
    pub fn new() -> Self {
        Self {
            // Garden Linux tags its ABI as "garden" instead of a number
            re: Regex::new(
                r"^linux-headers-(\d+(?:\.\d+)*-(?:\d+|garden))-[^_]+_([^_]+)(?:_.*)?\.deb$",
            )
            .unwrap(),
        }
    }
}

impl Default for DebianHeaderExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor for DebianHeaderExtractor {
    fn extract(&self, artifact: &str) -> Option<ParsedArtifact> {
        extract_versions(&self.re, artifact)
    }
}

fn extract_versions(re: &Regex, artifact: &str) -> Option<ParsedArtifact> {
    let name = base_name(artifact);
    let caps = re.captures(name)?;

    Some(ParsedArtifact {
        artifact: artifact.to_string(),
        base_name: name.to_string(),
        kernel_version: caps.get(1)?.as_str().to_string(),
        package_version: caps.get(2)?.as_str().to_string(),
        backport: None,
    })
}
