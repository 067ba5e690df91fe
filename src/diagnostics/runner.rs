//! Running a suite of diagnostics

use std::time::Instant;

use tracing::{debug, warn};

use super::check::{Diagnostic, Outcome, Verdict};

/// Collected outcomes of a diagnostics run
#[derive(Debug, Default)]
pub struct DiagnosticsReport {
    /// Outcomes in run order, keyed by diagnostic name
    pub outcomes: Vec<(String, Outcome)>,
    pub passed: usize,
    pub warned: usize,
    pub failed: usize,
}

impl DiagnosticsReport {
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    /// Returns true if nothing failed
    pub fn is_healthy(&self) -> bool {
        self.failed == 0
    }

    pub fn has_warnings(&self) -> bool {
        self.warned > 0
    }

    /// Process exit code: 0 = all pass, 1 = any fail, 2 = warnings only
    pub fn exit_code(&self) -> i32 {
        if self.failed > 0 {
            1
        } else if self.warned > 0 {
            2
        } else {
            0
        }
    }

    fn record(&mut self, name: &str, outcome: Outcome) {
        match outcome.verdict {
            Verdict::Pass => self.passed += 1,
            Verdict::Warn => self.warned += 1,
            Verdict::Fail => self.failed += 1,
        }
        self.outcomes.push((name.to_string(), outcome));
    }
}

/// Runs registered diagnostics in order
#[derive(Default)]
pub struct DiagnosticsRunner {
    diagnostics: Vec<Box<dyn Diagnostic>>,
}

impl DiagnosticsRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to add a diagnostic
    pub fn with<D: Diagnostic + 'static>(mut self, diagnostic: D) -> Self {
        self.diagnostics.push(Box::new(diagnostic));
        self
    }

    pub fn run(self) -> DiagnosticsReport {
        let mut report = DiagnosticsReport::default();

        for diagnostic in self.diagnostics {
            let name = diagnostic.name();
            let started = Instant::now();
            let outcome = diagnostic.run().with_elapsed(started.elapsed());

            if outcome.verdict.is_fail() {
                warn!(diagnostic = name, summary = %outcome.summary, "Diagnostic failed");
            } else {
                debug!(diagnostic = name, verdict = ?outcome.verdict, "Diagnostic finished");
            }
            report.record(name, outcome);
        }

        report
    }
}
