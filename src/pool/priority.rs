//! Trusted pool ranking

/// Ordered list of trusted pool markers, highest priority first
///
/// An artifact is trusted when its identifier contains one of the markers;
/// its rank is the index of the first marker it contains.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PoolPriority {
    trusted: Vec<String>,
}

impl PoolPriority {
    pub fn new(trusted: Vec<String>) -> Self {
        Self { trusted }
    }

    /// Rank of the artifact's pool, `None` when untrusted. Lower is better.
    pub fn rank(&self, artifact: &str) -> Option<usize> {
        self.trusted
            .iter()
            .position(|marker| !marker.is_empty() && artifact.contains(marker.as_str()))
    }

    /// Whether `candidate` should displace `existing` as the copy of a
    /// duplicated file.
    ///
    /// A trusted copy is only displaced by a strictly better-ranked one; an
    /// untrusted copy is displaced by whatever comes later.
    pub fn prefers(&self, candidate: &str, existing: &str) -> bool {
        match (self.rank(candidate), self.rank(existing)) {
            (_, None) => true,
            (Some(candidate), Some(existing)) => candidate < existing,
            (None, Some(_)) => false,
        }
    }
}
