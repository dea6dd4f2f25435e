//! Verdict aggregation and failure-message composition.

use serde::{Deserialize, Serialize};

/// Aggregated pass/fail result of all predicates for one validation run.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct VerdictReport {
    /// Whether any predicate failed.
    pub failed: bool,

    /// Composed failure messages, in predicate execution order (empty when
    /// the run passed).
    pub messages: Vec<String>,
}

impl VerdictReport {
    /// Record a predicate failure.
    pub fn record_failure(&mut self, message: FailureMessage) {
        self.failed = true;
        self.messages.push(message.render());
    }

    /// Whether every predicate passed.
    pub fn passed(&self) -> bool {
        !self.failed
    }
}

/// Failure message builder: a fixed prefix followed by zero or more detail
/// lines. Blank details are dropped so the rendered message only carries
/// lines that say something.
#[derive(Debug, Clone)]
pub struct FailureMessage {
    prefix: String,
    details: Vec<String>,
}

impl FailureMessage {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            details: Vec::new(),
        }
    }

    /// Append a detail line, skipped when blank.
    pub fn detail(mut self, line: impl Into<String>) -> Self {
        let line = line.into();
        if !line.trim().is_empty() {
            self.details.push(line.trim_end().to_string());
        }
        self
    }

    /// Append the command's standard error text, skipped when blank.
    pub fn stderr(self, stderr: &str) -> Self {
        if stderr.trim().is_empty() {
            self
        } else {
            self.detail(format!("ERROR: {}", stderr.trim_end()))
        }
    }

    /// Render the message, one line per non-empty part.
    pub fn render(self) -> String {
        let mut lines = vec![self.prefix];
        lines.extend(self.details);
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report_passes() {
        let report = VerdictReport::default();
        assert!(report.passed());
        assert!(report.messages.is_empty());
    }

    #[test]
    fn test_record_failure_sets_failed() {
        let mut report = VerdictReport::default();
        report.record_failure(FailureMessage::new("Pull request must be rebased on to main"));

        assert!(report.failed);
        assert_eq!(report.messages, vec!["Pull request must be rebased on to main"]);
    }

    #[test]
    fn test_failures_keep_order() {
        let mut report = VerdictReport::default();
        report.record_failure(FailureMessage::new("first"));
        report.record_failure(FailureMessage::new("second"));

        assert_eq!(report.messages, vec!["first", "second"]);
    }

    #[test]
    fn test_message_prefix_only() {
        let rendered = FailureMessage::new("prefix").render();
        assert_eq!(rendered, "prefix");
    }

    #[test]
    fn test_message_with_details_one_per_line() {
        let rendered = FailureMessage::new("prefix")
            .detail("command `git log` exited with code 1")
            .stderr("fatal: bad revision\n")
            .render();

        assert_eq!(
            rendered,
            "prefix\ncommand `git log` exited with code 1\nERROR: fatal: bad revision"
        );
    }

    #[test]
    fn test_blank_details_are_dropped() {
        let rendered = FailureMessage::new("prefix").detail("   ").stderr("").render();
        assert_eq!(rendered, "prefix");
    }
}
