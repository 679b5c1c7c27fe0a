//! Grouping strategy layer
//!
//! Turns a flat artifact listing into build units, one strategy per
//! distribution convention.
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Registry   │────▶│  Strategy   │────▶│   Groups    │
//! │ (by name)   │     │(convention) │     │(build units)│
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                       │        │
//!                       ▼        ▼
//!               ┌───────────┐ ┌───────────┐
//!               │ Extractor │ │   Pool    │
//!               │ (fields)  │ │ Resolver  │
//!               └───────────┘ └───────────┘
//! ```
//!
//! # Modules
//!
//! - [`traits`]: `Strategy` trait and the `Group` type
//! - [`kind`]: Stable strategy names
//! - [`strategies`]: Concrete strategies (debian, pairs, suse, cos, ...)
//! - [`registry`]: Name-indexed lookup
//! - [`error`]: `GroupingError`

pub mod error;
pub mod kind;
pub mod registry;
pub mod strategies;
pub mod traits;

pub use error::GroupingError;
pub use kind::StrategyKind;
pub use registry::StrategyRegistry;
pub use traits::{Group, Strategy};
