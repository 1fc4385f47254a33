pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod navigation;
pub mod render;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::{HttpSubmission, LocalStorage, SimulatedSubmission, StaticAssets};
pub use config::SiteConfig;
pub use crate::core::{
    contact::{ContactForm, FormStatus},
    content::SiteContent,
    cursor::{Cursor, StageCursor},
    sequence::{Sequence, StageCollection},
    site::SiteBuilder,
};
pub use utils::error::{Result, SiteError};
