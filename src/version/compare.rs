use std::cmp::Ordering;

/// Leading dotted-numeric run of a version string.
///
/// Ordering is component-wise; when one key is a prefix of the other the
/// shorter key is lower, which is exactly `Vec`'s lexicographic order.
///
/// Examples:
/// - "5.4.0-1048" -> [5, 4, 0]
/// - "24.9" -> [24, 9]
/// - "garden" -> no key
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct VersionKey(Vec<u64>);

impl VersionKey {
    pub fn parse(version: &str) -> Option<Self> {
        let mut components = Vec::new();

        for segment in version.split('.') {
            let digits = segment.bytes().take_while(u8::is_ascii_digit).count();
            if digits == 0 {
                break;
            }
            // Only overflow can fail here; saturate so huge components still sort high
            components.push(segment[..digits].parse::<u64>().unwrap_or(u64::MAX));
            if digits < segment.len() {
                break;
            }
        }

        if components.is_empty() {
            None
        } else {
            Some(Self(components))
        }
    }

    pub fn components(&self) -> &[u64] {
        &self.0
    }
}

/// Compare two version strings by their leading dotted-numeric run.
///
/// Strings without a numeric run are older than any that have one, so they
/// land last in newest-first order.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    match (VersionKey::parse(a), VersionKey::parse(b)) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => Ordering::Equal,
    }
}

pub fn version_less(a: &str, b: &str) -> bool {
    compare_versions(a, b) == Ordering::Less
}

/// Pick the newest item by version. The earliest item wins ties.
pub fn newest<'a, T>(items: &'a [T], version: impl Fn(&T) -> &str) -> Option<&'a T> {
    items.iter().reduce(|best, candidate| {
        if version_less(version(best), version(candidate)) {
            candidate
        } else {
            best
        }
    })
}
