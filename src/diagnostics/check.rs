//! Diagnostic trait and outcomes

use std::time::Duration;

use colored::Colorize;

/// Verdict of one diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    /// Usable, but something looks off
    Warn,
    Fail,
}

impl Verdict {
    /// Returns true for Pass or Warn
    pub fn is_ok(self) -> bool {
        !self.is_fail()
    }

    pub fn is_fail(self) -> bool {
        matches!(self, Verdict::Fail)
    }

    /// Colored label for terminal output
    pub fn label(self) -> String {
        match self {
            Verdict::Pass => "PASS".green().to_string(),
            Verdict::Warn => "WARN".yellow().to_string(),
            Verdict::Fail => "FAIL".red().to_string(),
        }
    }
}

/// Outcome of one diagnostic
#[derive(Debug, Clone)]
pub struct Outcome {
    pub verdict: Verdict,
    pub summary: String,
    /// One entry per step the diagnostic went through
    pub notes: Vec<String>,
    pub elapsed: Duration,
}

impl Outcome {
    fn with_verdict(verdict: Verdict, summary: impl Into<String>) -> Self {
        Self {
            verdict,
            summary: summary.into(),
            notes: Vec::new(),
            elapsed: Duration::ZERO,
        }
    }

    pub fn pass(summary: impl Into<String>) -> Self {
        Self::with_verdict(Verdict::Pass, summary)
    }

    pub fn warn(summary: impl Into<String>) -> Self {
        Self::with_verdict(Verdict::Warn, summary)
    }

    pub fn fail(summary: impl Into<String>) -> Self {
        Self::with_verdict(Verdict::Fail, summary)
    }

    pub fn with_notes(mut self, notes: Vec<String>) -> Self {
        self.notes = notes;
        self
    }

    pub fn with_elapsed(mut self, elapsed: Duration) -> Self {
        self.elapsed = elapsed;
        self
    }
}

/// Self-test a host can run before trusting the recognizer
pub trait Diagnostic {
    /// Short name shown in the report
    fn name(&self) -> &'static str;

    fn run(&self) -> Outcome;

    /// What the diagnostic exercises
    fn description(&self) -> Option<&'static str> {
        None
    }
}
