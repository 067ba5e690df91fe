//! Self-diagnostics for hosts embedding the recognizer
//!
//! Useful for:
//! - Validating configuration profiles at startup or in CI
//! - Confirming each enabled detector recognizes its gesture with the
//!   configured thresholds
//! - Reporting which build is running
//!
//! # Example
//!
//! ```no_run
//! use touch_gestures::config::GestureConfig;
//! use touch_gestures::diagnostics::{DiagnosticsRunner, checks::*};
//! use touch_gestures::gesture::GestureKind;
//!
//! let report = DiagnosticsRunner::new()
//!     .with(ConfigDiagnostic::new())
//!     .with(GestureDiagnostic::new(GestureKind::Swipe, GestureConfig::default()))
//!     .run();
//!
//! if report.is_healthy() {
//!     println!("Recognizer operational");
//! }
//! ```

pub mod check;
pub mod checks;
pub mod report;
pub mod runner;

pub use check::{Diagnostic, Outcome, Verdict};
pub use report::{format_report, print_report};
pub use runner::{DiagnosticsReport, DiagnosticsRunner};

use crate::config::GestureConfig;

/// Runs every built-in diagnostic against `config`
pub fn run_all(config: &GestureConfig) -> DiagnosticsReport {
    let [long_press, swipe, pinch] = checks::GestureDiagnostic::all(config);
    DiagnosticsRunner::new()
        .with(checks::ConfigDiagnostic::new())
        .with(long_press)
        .with(swipe)
        .with(pinch)
        .with(checks::BuildDiagnostic::new())
        .run()
}
