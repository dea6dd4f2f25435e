//! rebase-guard - pull request history policy gate
//!
//! Validates a pull request's git history before merge:
//! - Rejects branches that contain merge commits
//! - Rejects branches that are not rebased onto the base branch
//!
//! The validator builds shell commands against a black-box `git` binary,
//! executes them through an injectable [`CommandExecutor`], and aggregates
//! every predicate's outcome into a single [`VerdictReport`].

pub mod context;
pub mod error;
pub mod predicate;
pub mod report;
pub mod runner;
pub mod telemetry;
pub mod validator;

// Re-export key types
pub use context::{Trigger, TriggerEnv, ValidationContext};
pub use error::{ConfigError, Result};
pub use predicate::Predicate;
pub use report::{FailureMessage, VerdictReport};
pub use runner::{CommandExecutor, PredicateOutcome, ShellExecutor};
pub use validator::HistoryValidator;
