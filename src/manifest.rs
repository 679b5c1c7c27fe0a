//! Build manifest entries
//!
//! Downstream builders key every build unit by a checksum of its members, so
//! the same set of packages always maps to the same cache entry no matter
//! how the listing was ordered.

use indexmap::IndexMap;
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::strategy::traits::Group;

/// One buildable unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestEntry {
    #[serde(rename = "type")]
    pub kind: String,
    pub packages: Vec<String>,
    /// Filesystem-safe name of each package, in `packages` order
    pub labels: Vec<String>,
}

impl ManifestEntry {
    pub fn new(kind: &str, packages: Vec<String>) -> Self {
        Self {
            kind: kind.to_string(),
            labels: packages.iter().map(|p| simplify_url(p)).collect(),
            packages,
        }
    }
}

/// Build units keyed by package checksum, in grouping order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Manifest {
    entries: IndexMap<String, ManifestEntry>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a manifest from grouping output. Groups with the same member set
    /// collapse into one entry.
    pub fn from_groups(kind: &str, groups: Vec<Group>) -> Self {
        let mut manifest = Self::new();
        for group in groups {
            manifest.add(kind, group);
        }
        manifest
    }

    /// Add a unit under the checksum of its packages, returning the id
    pub fn add(&mut self, kind: &str, packages: Vec<String>) -> String {
        let id = checksum_packages(&packages);
        self.entries
            .insert(id.clone(), ManifestEntry::new(kind, packages));
        id
    }

    pub fn get(&self, id: &str) -> Option<&ManifestEntry> {
        self.entries.get(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Order-independent SHA-256 over a set of package identifiers
pub fn checksum_packages(packages: &[String]) -> String {
    let mut sorted: Vec<&str> = packages.iter().map(String::as_str).collect();
    sorted.sort_unstable();

    let mut hasher = Sha256::new();
    for package in sorted {
        hasher.update(package.as_bytes());
    }
    format!("{:x}", hasher.finalize())
}

/// Replace everything outside `[A-Za-z0-9_.-]` with `-`, one dash per
/// character, for use in file and bundle names.
pub fn simplify_url(url: &str) -> String {
    url.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-') {
                c
            } else {
                '-'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn checksum_is_independent_of_member_order() {
        assert_eq!(
            checksum_packages(&strings(&["a.deb", "b.deb"])),
            checksum_packages(&strings(&["b.deb", "a.deb"]))
        );
        assert_ne!(
            checksum_packages(&strings(&["a.deb", "b.deb"])),
            checksum_packages(&strings(&["a.deb", "c.deb"]))
        );
    }

    #[test]
    fn checksum_of_empty_set_is_sha256_of_nothing() {
        assert_eq!(
            checksum_packages(&[]),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn from_groups_keys_entries_by_checksum() {
        let groups = vec![strings(&["k.deb", "h.deb"]), strings(&["k.deb", "h2.deb"])];

        let manifest = Manifest::from_groups("debian", groups);

        assert_eq!(manifest.len(), 2);
        let id = checksum_packages(&strings(&["h.deb", "k.deb"]));
        assert_eq!(
            manifest.get(&id),
            Some(&ManifestEntry {
                kind: "debian".to_string(),
                packages: strings(&["k.deb", "h.deb"]),
                labels: strings(&["k.deb", "h.deb"]),
            })
        );
    }

    #[test]
    fn identical_member_sets_collapse() {
        let groups = vec![strings(&["a", "b"]), strings(&["b", "a"])];

        let manifest = Manifest::from_groups("single", groups);

        assert_eq!(manifest.len(), 1);
    }

    #[test]
    fn labels_are_filesystem_safe_package_names() {
        let entry = ManifestEntry::new(
            "minikube",
            strings(&[
                "https://storage/v1.24.0/linux_defconfig?kernel=4.19.202",
                "https://cdn.kernel.org/pub/linux/kernel/v4.x/linux-4.19.202.tar.xz",
            ]),
        );

        assert_eq!(
            entry.labels,
            vec![
                "https---storage-v1.24.0-linux_defconfig-kernel-4.19.202",
                "https---cdn.kernel.org-pub-linux-kernel-v4.x-linux-4.19.202.tar.xz",
            ]
        );
    }

    #[test]
    fn serializes_as_id_keyed_object() {
        let mut manifest = Manifest::new();
        let id = manifest.add("cos", strings(&["dir/kernel-src.tar.gz"]));

        let value = serde_json::to_value(&manifest).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                id: {
                    "type": "cos",
                    "packages": ["dir/kernel-src.tar.gz"],
                    "labels": ["dir-kernel-src.tar.gz"]
                }
            })
        );
    }

    #[rstest]
    #[case("", "")]
    #[case("popcorn", "popcorn")]
    #[case("hello world", "hello-world")]
    #[case("  hello  world  ", "--hello--world--")]
    #[case(
        "https://github.com/stackrox/kernel-packer",
        "https---github.com-stackrox-kernel-packer"
    )]
    #[case("Keep popping those 🌽 🤔 kernels", "Keep-popping-those-----kernels")]
    #[case("multi\nline\nstring", "multi-line-string")]
    fn simplify_url_replaces_unsafe_characters(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(simplify_url(input), expected);
    }
}
