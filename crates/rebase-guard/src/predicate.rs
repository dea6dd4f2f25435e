//! History predicate definitions and command construction.

use crate::context::{Trigger, ValidationContext};
use serde::{Deserialize, Serialize};

/// A single pass/fail history check: a shell command plus the fixed message
/// reported when it exits non-zero.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Predicate {
    /// Short name used in logs.
    pub name: String,

    /// Shell command; exit 0 means the check passed.
    pub command: String,

    /// Fixed message prefix reported on failure.
    pub failure_message: String,
}

impl Predicate {
    /// Check that no merge commits are reachable from HEAD that are not
    /// already on the remote base branch.
    ///
    /// When the run is pull-request-triggered, a checkout of the PR head
    /// branch is prepended so the log stage never runs against a synthetic
    /// merge commit created by the ambient checkout. The log stage is
    /// grouped in `{ ...; }` behind `&&` so a failed checkout fails the
    /// whole command and surfaces as this predicate's failure.
    ///
    /// The head ref is interpolated inside double quotes; refs containing
    /// `"` or `$` would break the quoting. Branch names arriving from the
    /// hosting platform do not contain either, matching the original
    /// action's behavior.
    pub fn no_merge_commits(ctx: &ValidationContext) -> Self {
        let remote_base = ctx.remote_base();
        let mut command = format!(
            "merges=\"$(git log --oneline {remote_base}...HEAD --merges)\"; \
             echo \"--- Merges ---\"; echo \"${{merges}}\"; [ -z \"${{merges}}\" ]"
        );

        if let Trigger::PullRequest { head_ref } = &ctx.trigger {
            command = format!("git checkout \"{head_ref}\" && {{ {command}; }}");
        }

        Self {
            name: "no_merge_commits".to_string(),
            command,
            failure_message: "Pull requests should not contain merge commits".to_string(),
        }
    }

    /// Check that HEAD is fast-forward-rebasable onto the remote base
    /// branch: the merge-base of the two must be the base's own tip.
    pub fn rebased_on_base(ctx: &ValidationContext) -> Self {
        let remote_base = ctx.remote_base();
        Self {
            name: "rebased_on_base".to_string(),
            command: format!(
                "[ \"$(git merge-base {remote_base} HEAD)\" = \"$(git rev-parse {remote_base})\" ]"
            ),
            failure_message: format!("Pull request must be rebased on to {}", ctx.base_branch),
        }
    }
}
