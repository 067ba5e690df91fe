//! Integration tests for the diagnostics suite

use touch_gestures::config::GestureConfig;
use touch_gestures::diagnostics::{self, Diagnostic, DiagnosticsRunner, checks::*};
use touch_gestures::gesture::GestureKind;

#[test]
fn test_all_diagnostics() {
    let report = diagnostics::run_all(&GestureConfig::default());

    if !report.is_healthy() {
        eprintln!("\n{}", diagnostics::format_report(&report));
    }

    assert!(
        report.is_healthy(),
        "Diagnostics failed: {} failures, {} warnings",
        report.failed,
        report.warned
    );
    assert_eq!(report.total(), 5);
}

#[test]
fn test_config_diagnostic() {
    let outcome = ConfigDiagnostic::new().run();
    assert!(
        outcome.verdict.is_ok(),
        "Config diagnostic failed: {}",
        outcome.summary
    );
}

#[test]
fn test_config_diagnostic_missing_profile_uses_defaults() {
    let outcome = ConfigDiagnostic::with_profiles(vec!["no-such-profile"]).run();
    assert!(outcome.verdict.is_ok(), "{}", outcome.summary);
}

#[test]
fn test_gesture_diagnostics_with_debug_profile() {
    let config = GestureConfig::load("debug").expect("debug profile loads");
    for kind in [GestureKind::LongPress, GestureKind::Swipe, GestureKind::Pinch] {
        let outcome = GestureDiagnostic::new(kind, config.clone()).run();
        assert!(
            outcome.verdict.is_ok(),
            "{:?} diagnostic failed: {}",
            kind,
            outcome.summary
        );
    }
}

#[test]
fn test_build_diagnostic() {
    let outcome = BuildDiagnostic::new().run();
    assert!(outcome.verdict.is_ok());
    assert!(outcome.summary.starts_with(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_runner_counts_outcomes() {
    let report = DiagnosticsRunner::new()
        .with(ConfigDiagnostic::new())
        .with(BuildDiagnostic::new())
        .run();

    assert_eq!(report.total(), 2);
    assert_eq!(report.passed + report.warned + report.failed, report.total());
}

#[test]
fn test_report_exit_codes() {
    let report = DiagnosticsRunner::new().with(BuildDiagnostic::new()).run();
    assert_eq!(report.exit_code(), 0);

    let report = DiagnosticsRunner::new()
        .with(ConfigDiagnostic::with_profiles(vec![]))
        .run();
    assert_eq!(report.exit_code(), 0);
}

#[test]
fn test_format_report_lists_every_diagnostic() {
    let report = diagnostics::run_all(&GestureConfig::default());
    let text = diagnostics::format_report(&report);
    for name in ["Configuration", "Long-press detector", "Swipe detector", "Pinch detector"] {
        assert!(text.contains(name), "missing {name} in report");
    }
}
