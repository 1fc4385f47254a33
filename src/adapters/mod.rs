// Adapters layer: concrete implementations of the domain ports (storage, assets, submission).

pub mod assets;
pub mod storage;
pub mod submission;

pub use assets::StaticAssets;
pub use storage::LocalStorage;
pub use submission::{HttpSubmission, SimulatedSubmission};
