//! Pass/fail reporting for a check run.

use std::fmt::Write;

use crate::runner::{CaseOutcome, CaseStatus};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    outcomes: Vec<CaseOutcome>,
}

impl Report {
    pub fn new(outcomes: Vec<CaseOutcome>) -> Self {
        Self { outcomes }
    }

    pub fn outcomes(&self) -> &[CaseOutcome] {
        &self.outcomes
    }

    pub fn outcome(&self, id: &str) -> Option<&CaseOutcome> {
        self.outcomes.iter().find(|outcome| outcome.id == id)
    }

    pub fn passed(&self) -> usize {
        self.count(CaseStatus::Passed)
    }

    pub fn failed(&self) -> usize {
        self.count(CaseStatus::Failed)
    }

    pub fn skipped(&self) -> usize {
        self.count(CaseStatus::Skipped)
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    pub fn failures(&self) -> impl Iterator<Item = &CaseOutcome> {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.status == CaseStatus::Failed)
    }

    fn count(&self, status: CaseStatus) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.status == status)
            .count()
    }

    /// One line per case, failure messages indented underneath, then a summary.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for outcome in &self.outcomes {
            match outcome.status {
                CaseStatus::Passed => {
                    let _ = writeln!(out, "[PASS] {}", outcome.id);
                }
                CaseStatus::Failed => {
                    let _ = writeln!(out, "[FAIL] {}", outcome.id);
                    if let Some(message) = &outcome.message {
                        for line in message.lines() {
                            let _ = writeln!(out, "        {line}");
                        }
                    }
                }
                CaseStatus::Skipped => match &outcome.message {
                    Some(reason) => {
                        let _ = writeln!(out, "[SKIP] {} ({reason})", outcome.id);
                    }
                    None => {
                        let _ = writeln!(out, "[SKIP] {}", outcome.id);
                    }
                },
            }
        }
        let _ = write!(
            out,
            "\nSummary: {} passed, {} failed, {} skipped",
            self.passed(),
            self.failed(),
            self.skipped()
        );
        out
    }
}
