//! Job-runner entrypoint support: the generated defaults document and the
//! deep merge that folds a caller's job definitions over it.

pub mod defaults;
pub mod merge;

pub use defaults::{job_defaults, JobBase, SentrySettings};
pub use merge::deep_merge;
