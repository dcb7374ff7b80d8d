//! Console assessment session: collect UPDRS responses, score them, and
//! report the severity label and narrative recommendation.

pub mod collector;
pub mod config;
pub mod pipeline;
pub mod report;

pub use collector::{CollectError, collect_responses};
pub use config::{ArtifactPaths, Cli};
pub use pipeline::run_session;
pub use report::{OutputFormat, Report};
