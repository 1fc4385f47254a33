pub mod contact;
pub mod content;
pub mod cursor;
pub mod journey;
pub mod listeners;
pub mod motion;
pub mod sequence;
pub mod session;
pub mod site;

pub use crate::domain::model::{ContactPayload, Identified, Stage, SubmissionOutcome};
pub use crate::domain::ports::{AssetResolver, Storage, SubmissionService};
pub use crate::utils::error::Result;
