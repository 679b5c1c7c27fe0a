//! Version ordering for package candidates
//!
//! Distribution package versions are not semver: `5.4.68-1`, `4.4.0-1031`,
//! `24.9` and `5.10.46-4+deb11u1` all show up. Candidates are ordered by their
//! leading dotted-numeric run only.
//!
//! # Modules
//!
//! - [`compare`]: Leading dotted-numeric comparison and the [`VersionKey`] type

pub mod compare;

pub use compare::{VersionKey, compare_versions, newest, version_less};
