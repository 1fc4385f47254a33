// Application layer: interactive sessions built on the core types.

pub mod explorer;

pub use explorer::{ExplorerCommand, JourneyExplorer};
