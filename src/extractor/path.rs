//! Path helpers shared by extractors and strategies
//!
//! Artifact identifiers are always `/`-separated (URLs or POSIX paths), so
//! these work on plain strings instead of `std::path`.

/// Last path segment, ignoring trailing slashes.
pub fn base_name(artifact: &str) -> &str {
    let trimmed = artifact.trim_end_matches('/');
    trimmed.rsplit('/').next().unwrap_or(trimmed)
}

/// Everything before the last path segment, ignoring trailing slashes.
///
/// A bare file name lives in `"."`; a file at the root lives in `"/"`.
pub fn parent_dir(artifact: &str) -> &str {
    let trimmed = artifact.trim_end_matches('/');
    match trimmed.rfind('/') {
        Some(0) => "/",
        Some(idx) => &trimmed[..idx],
        None => ".",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(
        "http://deb.debian.org/debian/pool/main/l/linux/linux-kbuild-5.10_5.10.46-4_amd64.deb",
        "linux-kbuild-5.10_5.10.46-4_amd64.deb"
    )]
    #[case("dirA/kernel-src.tar.gz", "kernel-src.tar.gz")]
    #[case("kernel-src.tar.gz", "kernel-src.tar.gz")]
    #[case("dirA/sub/", "sub")]
    fn base_name_returns_last_segment(#[case] artifact: &str, #[case] expected: &str) {
        assert_eq!(base_name(artifact), expected);
    }

    #[rstest]
    #[case("dirA/kernel-src.tar.gz", "dirA")]
    #[case("gs://bucket/cos/12871.1160.0/kernel-headers.tgz", "gs://bucket/cos/12871.1160.0")]
    #[case("/kernel-src.tar.gz", "/")]
    #[case("kernel-src.tar.gz", ".")]
    #[case("dirA/kernel-src.tar.gz/", "dirA")]
    #[case("dirA/sub//", "dirA")]
    fn parent_dir_returns_directory(#[case] artifact: &str, #[case] expected: &str) {
        assert_eq!(parent_dir(artifact), expected);
    }
}
