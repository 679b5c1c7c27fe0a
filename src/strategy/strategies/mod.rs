//! Distribution-specific grouping strategies

pub mod cos;
pub mod debian;
pub mod minikube;
pub mod one_to_each;
pub mod one_to_pairs;
pub mod pairs;
pub mod single;
pub mod suse;

pub use cos::CosStrategy;
pub use debian::DebianStrategy;
pub use minikube::MinikubeStrategy;
pub use one_to_each::OneToEachStrategy;
pub use one_to_pairs::OneToPairsStrategy;
pub use pairs::PairsStrategy;
pub use single::SingleStrategy;
pub use suse::SuseStrategy;
