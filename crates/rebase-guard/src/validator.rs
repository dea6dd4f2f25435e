//! History validation: predicate construction, execution and aggregation.

use crate::context::{Trigger, ValidationContext};
use crate::predicate::Predicate;
use crate::report::{FailureMessage, VerdictReport};
use crate::runner::CommandExecutor;
use std::sync::Arc;
use tracing::{debug, info};

/// Runs the history predicates against a working tree and aggregates their
/// outcomes into a [`VerdictReport`].
///
/// Holds no state across runs; a failing predicate is a definitive verdict,
/// never retried.
pub struct HistoryValidator {
    executor: Arc<dyn CommandExecutor>,
}

impl HistoryValidator {
    pub fn new(executor: Arc<dyn CommandExecutor>) -> Self {
        Self { executor }
    }

    /// Validate the working tree against the given context.
    ///
    /// Both predicates always execute - the rebase check never
    /// short-circuits on a merge-check failure, so the report lists every
    /// violated predicate.
    pub async fn validate(&self, ctx: &ValidationContext) -> VerdictReport {
        match &ctx.trigger {
            Trigger::PullRequest { head_ref } => {
                info!(head_ref = %head_ref, "PR detected, checking out PR branch head before checking for merge commits");
            }
            Trigger::Other => {
                info!("PR not detected, skipping checkout");
            }
        }

        let predicates = [
            Predicate::no_merge_commits(ctx),
            Predicate::rebased_on_base(ctx),
        ];

        let mut report = VerdictReport::default();
        for predicate in &predicates {
            self.execute(predicate, &mut report).await;
        }
        report
    }

    /// Execute one predicate and fold its outcome into the report.
    ///
    /// A command that cannot be launched at all (missing shell or git
    /// binary) is reported through the same failure path as a non-zero
    /// exit, not as a distinct fatal category.
    async fn execute(&self, predicate: &Predicate, report: &mut VerdictReport) {
        debug!(predicate = %predicate.name, command = %predicate.command, "executing predicate");

        let outcome = match self.executor.run(&predicate.command).await {
            Ok(outcome) => outcome,
            Err(e) => {
                report.record_failure(
                    FailureMessage::new(&predicate.failure_message)
                        .detail(format!("failed to run command: {e}")),
                );
                return;
            }
        };

        if !outcome.stdout.is_empty() {
            info!(predicate = %predicate.name, "{}", outcome.stdout.trim_end());
        }

        if outcome.passed() {
            info!(predicate = %predicate.name, "check passed");
        } else {
            report.record_failure(
                FailureMessage::new(&predicate.failure_message)
                    .detail(format!(
                        "command `{}` exited with code {}",
                        predicate.command, outcome.exit_code
                    ))
                    .stderr(&outcome.stderr),
            );
        }
    }
}
