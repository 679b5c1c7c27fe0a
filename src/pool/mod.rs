//! Package pool identity
//!
//! Distributions republish identical versions into several pools (a
//! security-updates mirror next to the general one) with independently built
//! files. Matching a header from one pool with build support from another
//! produces a broken build unit, so strategies ask the resolver before
//! pairing anything.
//!
//! # Modules
//!
//! - [`resolver`]: `PoolResolver` trait and the URL-host implementation
//! - [`priority`]: Ordered trusted pools for resolving duplicates

pub mod priority;
pub mod resolver;

pub use priority::PoolPriority;
pub use resolver::{HostPoolResolver, PoolResolver};
