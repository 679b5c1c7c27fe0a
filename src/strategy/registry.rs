//! Name-indexed strategy lookup
//!
//! The CLI layer only knows strategy names; the registry maps them onto the
//! closed set of [`StrategyKind`]s and their configured implementations.

use std::sync::Arc;

use indexmap::IndexMap;

use crate::config::GrouperConfig;
use crate::strategy::error::GroupingError;
use crate::strategy::kind::StrategyKind;
use crate::strategy::strategies::{
    CosStrategy, DebianStrategy, MinikubeStrategy, OneToEachStrategy, OneToPairsStrategy,
    PairsStrategy, SingleStrategy, SuseStrategy,
};
use crate::strategy::traits::{Group, Strategy};

pub struct StrategyRegistry {
    strategies: IndexMap<StrategyKind, Arc<dyn Strategy>>,
}

impl StrategyRegistry {
    /// Create a registry holding every strategy, configured from `config`
    pub fn new(config: &GrouperConfig) -> Self {
        let strategies = StrategyKind::ALL
            .into_iter()
            .map(|kind| (kind, create_strategy(kind, config)))
            .collect();

        Self { strategies }
    }

    /// Look up a strategy by its registered name
    pub fn get(&self, name: &str) -> Result<&Arc<dyn Strategy>, GroupingError> {
        name.parse::<StrategyKind>()
            .ok()
            .and_then(|kind| self.strategies.get(&kind))
            .ok_or_else(|| GroupingError::UnknownStrategy(name.to_string()))
    }

    /// Look up a strategy by name and run it
    pub fn group(&self, name: &str, artifacts: &[String]) -> Result<Vec<Group>, GroupingError> {
        self.get(name)?.group(artifacts)
    }

    /// Registered names, in registry order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.strategies.keys().map(|kind| kind.as_str())
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::new(&GrouperConfig::default())
    }
}

fn create_strategy(kind: StrategyKind, config: &GrouperConfig) -> Arc<dyn Strategy> {
    match kind {
        StrategyKind::Single => Arc::new(SingleStrategy),
        StrategyKind::OneToEach => Arc::new(OneToEachStrategy),
        StrategyKind::OneToPairs => Arc::new(OneToPairsStrategy),
        StrategyKind::Pairs => Arc::new(PairsStrategy::new(
            config.pairs.supported_backports.clone(),
        )),
        StrategyKind::Suse => Arc::new(SuseStrategy::new()),
        StrategyKind::Debian => Arc::new(DebianStrategy::from_config(&config.debian)),
        StrategyKind::Cos => Arc::new(CosStrategy::new(config.cos.source_name.clone())),
        StrategyKind::Minikube => Arc::new(MinikubeStrategy::new(
            config.minikube.kernel_source_url_template.clone(),
        )),
    }
}
