//! Debian strategy
//!
//! Builds one unit per arch-specific header package:
//! `[linux-kbuild, linux-headers-<arch>, linux-headers-common]`.
//!
//! The matching runs in four steps:
//! 1. Index `linux-kbuild-*` packages by package version (duplicates are a
//!    file clash) and by kernel series.
//! 2. Index `linux-headers-*` packages by file name, keeping the copy from
//!    the most trusted pool, then group them by kernel version and keep only
//!    the newest package version of each.
//! 3. Find the kbuild package: same package version and pool as the headers,
//!    or else the newest kbuild of the kernel version, truncated at `-`/`.`
//!    until a series matches (`5.10.0-8` -> `5.10.0` -> `5.10`).
//! 4. Split off the single common header package and emit one group per
//!    arch-specific header.

use std::sync::Arc;

use indexmap::IndexMap;
use tracing::{debug, info};

use crate::config::DebianConfig;
use crate::extractor::debian::{DebianBuildSupportExtractor, DebianHeaderExtractor};
use crate::extractor::traits::Extractor;
use crate::extractor::types::ParsedArtifact;
use crate::pool::{HostPoolResolver, PoolPriority, PoolResolver};
use crate::strategy::error::GroupingError;
use crate::strategy::kind::StrategyKind;
use crate::strategy::traits::{Group, Strategy};
use crate::version::{compare_versions, newest};

/// Smallest listing that can form a unit: kbuild, arch headers, common headers
const MIN_PACKAGES: usize = 3;

pub struct DebianStrategy {
    build_support: DebianBuildSupportExtractor,
    headers: DebianHeaderExtractor,
    pools: Arc<dyn PoolResolver>,
    priority: PoolPriority,
    common_marker: String,
}

/// kbuild packages of one listing
#[derive(Debug, Default)]
struct BuildSupportIndex {
    by_package_version: IndexMap<String, ParsedArtifact>,
    /// Newest package version first
    by_kernel_version: IndexMap<String, Vec<ParsedArtifact>>,
}

impl DebianStrategy {
    pub fn new(
        pools: Arc<dyn PoolResolver>,
        priority: PoolPriority,
        common_marker: impl Into<String>,
    ) -> Self {
        Self {
            build_support: DebianBuildSupportExtractor::new(),
            headers: DebianHeaderExtractor::new(),
            pools,
            priority,
            common_marker: common_marker.into(),
        }
    }

    pub fn from_config(config: &DebianConfig) -> Self {
        Self::new(
            Arc::new(HostPoolResolver),
            PoolPriority::new(config.trusted_pools.clone()),
            config.common_marker.clone(),
        )
    }

    fn index_build_support(&self, artifacts: &[String]) -> Result<BuildSupportIndex, GroupingError> {
        let mut index = BuildSupportIndex::default();

        for parsed in artifacts.iter().filter_map(|a| self.build_support.extract(a)) {
            if let Some(existing) = index.by_package_version.get(&parsed.package_version) {
                return Err(GroupingError::Clash {
                    key: format!("kbuild package version {}", parsed.package_version),
                    first: existing.artifact.clone(),
                    second: parsed.artifact,
                });
            }

            index
                .by_kernel_version
                .entry(parsed.kernel_version.clone())
                .or_default()
                .push(parsed.clone());
            index
                .by_package_version
                .insert(parsed.package_version.clone(), parsed);
        }

        for kbuilds in index.by_kernel_version.values_mut() {
            kbuilds.sort_by(|a, b| compare_versions(&b.package_version, &a.package_version));
        }

        Ok(index)
    }

    /// Header packages grouped by kernel version, newest package version first
    fn index_headers(&self, artifacts: &[String]) -> IndexMap<String, Vec<ParsedArtifact>> {
        let mut by_name: IndexMap<String, ParsedArtifact> = IndexMap::new();

        for parsed in artifacts.iter().filter_map(|a| self.headers.extract(a)) {
            match by_name.get_mut(&parsed.base_name) {
                Some(existing) => {
                    if self.priority.prefers(&parsed.artifact, &existing.artifact) {
                        debug!(
                            "Preferring {} over duplicate {}",
                            parsed.artifact, existing.artifact
                        );
                        *existing = parsed;
                    }
                }
                None => {
                    by_name.insert(parsed.base_name.clone(), parsed);
                }
            }
        }

        let mut by_kernel_version: IndexMap<String, Vec<ParsedArtifact>> = IndexMap::new();
        for parsed in by_name.into_values() {
            by_kernel_version
                .entry(parsed.kernel_version.clone())
                .or_default()
                .push(parsed);
        }

        for headers in by_kernel_version.values_mut() {
            headers.sort_by(|a, b| compare_versions(&b.package_version, &a.package_version));
        }

        by_kernel_version
    }

    /// Keep the headers of the newest package version; they must share a pool
    fn newest_headers(
        &self,
        mut headers: Vec<ParsedArtifact>,
    ) -> Result<Vec<ParsedArtifact>, GroupingError> {
        if headers.is_empty() {
            return Ok(headers);
        }
        let newest_version = headers[0].package_version.clone();
        headers.retain(|h| h.package_version == newest_version);

        let first = &headers[0];
        if let Some(stray) = headers
            .iter()
            .find(|h| !self.pools.same_pool(&first.artifact, &h.artifact))
        {
            return Err(GroupingError::CrossPool {
                first: first.artifact.clone(),
                first_pool: self.pools.pool_of(&first.artifact),
                second: stray.artifact.clone(),
                second_pool: self.pools.pool_of(&stray.artifact),
            });
        }

        Ok(headers)
    }

    fn find_build_support<'a>(
        &self,
        kernel_version: &str,
        headers: &[ParsedArtifact],
        index: &'a BuildSupportIndex,
    ) -> Result<&'a ParsedArtifact, GroupingError> {
        let mut candidates: Vec<&ParsedArtifact> = headers
            .iter()
            .filter_map(|header| {
                index
                    .by_package_version
                    .get(&header.package_version)
                    .filter(|kbuild| self.pools.same_pool(&header.artifact, &kbuild.artifact))
            })
            .collect();

        if candidates.is_empty() {
            let anchor = &headers[0];
            if let Some((series, kbuilds)) = fallback_keys(kernel_version)
                .find_map(|key| index.by_kernel_version.get(key).map(|k| (key, k)))
            {
                debug!(
                    "No kbuild for package version {}, falling back to kernel series {}",
                    anchor.package_version, series
                );
                candidates = kbuilds
                    .iter()
                    .filter(|kbuild| self.pools.same_pool(&anchor.artifact, &kbuild.artifact))
                    .collect();
            }
        }

        newest(&candidates, |kbuild| kbuild.package_version.as_str())
            .copied()
            .ok_or_else(|| GroupingError::Incomplete {
                key: kernel_version.to_string(),
                reason: format!(
                    "failed to find kbuild package, candidates are {:?}",
                    index.by_kernel_version.keys().collect::<Vec<_>>()
                ),
            })
    }

    /// Split headers into the optional common package and the arch-specific ones
    fn split_common<'a>(
        &self,
        kernel_version: &str,
        headers: &'a [ParsedArtifact],
    ) -> Result<(Option<&'a ParsedArtifact>, Vec<&'a ParsedArtifact>), GroupingError> {
        let mut common: Option<&ParsedArtifact> = None;
        let mut arch_specific = Vec::with_capacity(headers.len());

        for header in headers {
            if !header.base_name.contains(self.common_marker.as_str()) {
                arch_specific.push(header);
                continue;
            }
            if let Some(existing) = common {
                return Err(GroupingError::Clash {
                    key: format!("common header package of kernel version {}", kernel_version),
                    first: existing.artifact.clone(),
                    second: header.artifact.clone(),
                });
            }
            common = Some(header);
        }

        Ok((common, arch_specific))
    }
}

impl Strategy for DebianStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Debian
    }

    fn group(&self, artifacts: &[String]) -> Result<Vec<Group>, GroupingError> {
        if artifacts.len() < MIN_PACKAGES {
            return Err(GroupingError::Precondition {
                strategy: self.kind(),
                reason: format!(
                    "need at least {} packages, got {}",
                    MIN_PACKAGES,
                    artifacts.len()
                ),
            });
        }

        let build_support = self.index_build_support(artifacts)?;
        let mut groups = Vec::new();

        for (kernel_version, headers) in self.index_headers(artifacts) {
            let headers = self.newest_headers(headers)?;

            // e.g. linux-headers-5.6.0-2-common_5.6.14-2_all.deb without its arch package
            if headers.len() < 2 {
                debug!(
                    "Ignoring kernel version {} without arch specific headers",
                    kernel_version
                );
                continue;
            }

            let kbuild = self.find_build_support(&kernel_version, &headers, &build_support)?;
            let (common, arch_specific) = self.split_common(&kernel_version, &headers)?;

            for arch in arch_specific {
                let mut group = vec![kbuild.artifact.clone(), arch.artifact.clone()];
                if let Some(common) = common {
                    group.push(common.artifact.clone());
                }
                groups.push(group);
            }
        }

        info!(
            "Grouped {} debian artifacts into {} groups",
            artifacts.len(),
            groups.len()
        );
        Ok(groups)
    }
}

/// Kernel version followed by its truncations at each `-` or `.`, longest
/// first: `5.10.0-8` -> `5.10.0-8`, `5.10.0`, `5.10`, `5`.
fn fallback_keys(kernel_version: &str) -> impl Iterator<Item = &str> {
    let cuts: Vec<usize> = kernel_version
        .char_indices()
        .filter(|(_, c)| matches!(c, '-' | '.'))
        .map(|(idx, _)| idx)
        .collect();

    std::iter::once(kernel_version).chain(
        cuts.into_iter()
            .rev()
            .map(move |idx| &kernel_version[..idx]),
    )
}
