//! Validation context and trigger resolution.

use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};

/// How the validation run was triggered.
///
/// The head branch reference is carried inside the variant, so a context
/// with a pull-request trigger always has one and any other context never
/// does.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Trigger {
    /// A pull-request-triggered run; carries the PR's head branch name.
    PullRequest { head_ref: String },

    /// Any other trigger (push, schedule, manual dispatch, ...).
    Other,
}

impl Trigger {
    /// Head branch reference, if this is a pull-request trigger.
    pub fn head_ref(&self) -> Option<&str> {
        match self {
            Trigger::PullRequest { head_ref } => Some(head_ref),
            Trigger::Other => None,
        }
    }
}

/// Snapshot of the trigger-related environment variables.
///
/// Captured once at startup so that context resolution itself is pure and
/// tests never have to mutate the process environment.
#[derive(Debug, Clone, Default)]
pub struct TriggerEnv {
    /// `GITHUB_EVENT_NAME`
    pub event_name: Option<String>,

    /// `GITHUB_HEAD_REF`
    pub head_ref: Option<String>,
}

impl TriggerEnv {
    /// Capture the trigger environment of the current process.
    pub fn capture() -> Self {
        Self {
            event_name: std::env::var("GITHUB_EVENT_NAME").ok(),
            head_ref: std::env::var("GITHUB_HEAD_REF").ok(),
        }
    }
}

/// Immutable per-run validation context.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationContext {
    /// Remote name prefixed onto the base branch in git commands.
    pub remote: String,

    /// Branch pull requests must be rebased onto, without remote prefix.
    pub base_branch: String,

    /// Trigger kind, with the PR head reference when applicable.
    pub trigger: Trigger,
}

impl ValidationContext {
    /// Resolve a validation context from configuration and the captured
    /// trigger environment.
    ///
    /// Fails with a [`ConfigError`] when the base branch is blank or a
    /// pull-request trigger arrives without a usable head reference. Both
    /// are configuration errors, not validator failures.
    pub fn resolve(base_branch: &str, remote: &str, env: &TriggerEnv) -> Result<Self> {
        if base_branch.trim().is_empty() {
            return Err(ConfigError::MissingBaseBranch);
        }
        if remote.trim().is_empty() {
            return Err(ConfigError::MissingRemote);
        }

        let trigger = if env.event_name.as_deref() == Some("pull_request") {
            match env.head_ref.as_deref() {
                Some(head_ref) if !head_ref.trim().is_empty() => Trigger::PullRequest {
                    head_ref: head_ref.to_string(),
                },
                _ => return Err(ConfigError::MissingHeadRef),
            }
        } else {
            Trigger::Other
        };

        Ok(Self {
            remote: remote.to_string(),
            base_branch: base_branch.to_string(),
            trigger,
        })
    }

    /// The remote-qualified base branch, e.g. `origin/main`.
    pub fn remote_base(&self) -> String {
        format!("{}/{}", self.remote, self.base_branch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(event: Option<&str>, head: Option<&str>) -> TriggerEnv {
        TriggerEnv {
            event_name: event.map(String::from),
            head_ref: head.map(String::from),
        }
    }

    #[test]
    fn test_resolve_pull_request_trigger() {
        let ctx =
            ValidationContext::resolve("main", "origin", &env(Some("pull_request"), Some("feature-x")))
                .expect("resolve failed");

        assert_eq!(ctx.base_branch, "main");
        assert_eq!(ctx.remote_base(), "origin/main");
        assert_eq!(ctx.trigger.head_ref(), Some("feature-x"));
    }

    #[test]
    fn test_resolve_non_pr_trigger_has_no_head_ref() {
        let ctx = ValidationContext::resolve("main", "origin", &env(Some("push"), Some("feature-x")))
            .expect("resolve failed");

        assert_eq!(ctx.trigger, Trigger::Other);
        assert_eq!(ctx.trigger.head_ref(), None);
    }

    #[test]
    fn test_resolve_missing_event_name_is_other() {
        let ctx = ValidationContext::resolve("main", "origin", &env(None, None)).expect("resolve failed");
        assert_eq!(ctx.trigger, Trigger::Other);
    }

    #[test]
    fn test_resolve_blank_base_branch_rejected() {
        let err = ValidationContext::resolve("  ", "origin", &env(None, None)).unwrap_err();
        assert!(matches!(err, ConfigError::MissingBaseBranch));
    }

    #[test]
    fn test_resolve_blank_remote_rejected() {
        let err = ValidationContext::resolve("main", "", &env(None, None)).unwrap_err();
        assert!(matches!(err, ConfigError::MissingRemote));
    }

    #[test]
    fn test_resolve_pr_without_head_ref_rejected() {
        let err =
            ValidationContext::resolve("main", "origin", &env(Some("pull_request"), None)).unwrap_err();
        assert!(matches!(err, ConfigError::MissingHeadRef));

        let err = ValidationContext::resolve("main", "origin", &env(Some("pull_request"), Some("")))
            .unwrap_err();
        assert!(matches!(err, ConfigError::MissingHeadRef));
    }
}
