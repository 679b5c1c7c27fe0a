//! Kernel package grouping engine
//!
//! Distributions publish kernel build inputs (headers, kbuild scaffolding,
//! arch-independent headers) under their own naming and versioning
//! conventions. This crate turns a flat listing of package URLs into
//! self-contained build units, one strategy per convention.
//!
//! # Modules
//!
//! - [`strategy`]: Grouping strategies and the name-indexed registry
//! - [`extractor`]: Per-convention file name patterns
//! - [`pool`]: Package pool identity and trusted pool ranking
//! - [`version`]: Version ordering for duplicate candidates
//! - [`manifest`]: Checksum-keyed build manifest entries
//! - [`config`]: Strategy configuration

pub mod config;
pub mod extractor;
pub mod manifest;
pub mod pool;
pub mod strategy;
pub mod version;

pub use strategy::{Group, GroupingError, Strategy, StrategyKind, StrategyRegistry};
