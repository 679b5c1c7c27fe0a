//! Names of the grouping strategies

use std::fmt;

/// Distribution convention a strategy implements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    /// Every artifact builds on its own
    Single,
    /// First artifact paired with each of the others
    OneToEach,
    /// First artifact plus each consecutive pair of the others
    OneToPairs,
    /// Ubuntu header pairs keyed by version and revision
    Pairs,
    /// SUSE arch/noarch pairs keyed by a composite version token
    Suse,
    /// Debian kbuild + headers + common headers
    Debian,
    /// Container-Optimized OS source directories
    Cos,
    /// Minikube configs plus the upstream kernel source archive
    Minikube,
}

impl StrategyKind {
    /// All kinds, in registry order
    pub const ALL: [StrategyKind; 8] = [
        StrategyKind::Single,
        StrategyKind::OneToEach,
        StrategyKind::OneToPairs,
        StrategyKind::Pairs,
        StrategyKind::Suse,
        StrategyKind::Debian,
        StrategyKind::Cos,
        StrategyKind::Minikube,
    ];

    /// Returns the stable name the strategy is registered under
    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::Single => "single",
            StrategyKind::OneToEach => "one-to-each",
            StrategyKind::OneToPairs => "one-to-pairs",
            StrategyKind::Pairs => "pairs",
            StrategyKind::Suse => "suse",
            StrategyKind::Debian => "debian",
            StrategyKind::Cos => "cos",
            StrategyKind::Minikube => "minikube",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for StrategyKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StrategyKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or(())
    }
}
