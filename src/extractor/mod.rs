//! Pattern extractor layer
//! - traits.rs: Extractor trait definition
//! - types.rs: ParsedArtifact, the per-convention view of an artifact
//! - path.rs: base name / parent directory helpers
//! - debian.rs: linux-kbuild and linux-headers `.deb` names
//! - ubuntu.rs: `<version>.<revision>[~backport]_` names
//! - suse.rs: composite SUSE version tokens
//! - minikube.rs: `kernel=` tokens in minikube config URLs

pub mod debian;
pub mod minikube;
pub mod path;
pub mod suse;
pub mod traits;
pub mod types;
pub mod ubuntu;

pub use debian::{DebianBuildSupportExtractor, DebianHeaderExtractor};
pub use minikube::MinikubeKernelExtractor;
pub use path::{base_name, parent_dir};
pub use suse::SuseVersionExtractor;
pub use traits::Extractor;
pub use types::ParsedArtifact;
pub use ubuntu::UbuntuRevisionExtractor;
