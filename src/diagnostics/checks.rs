//! Built-in diagnostics

use crate::build_info;
use crate::config::GestureConfig;
use crate::gesture::{GestureEvent, GestureKind, GestureRecognizer};
use crate::input::PointerSample;

use super::check::{Diagnostic, Outcome};

/// Loads and validates every configuration profile
pub struct ConfigDiagnostic {
    profiles: Vec<&'static str>,
}

impl ConfigDiagnostic {
    pub fn new() -> Self {
        Self {
            profiles: vec!["debug", "release"],
        }
    }

    pub fn with_profiles(profiles: Vec<&'static str>) -> Self {
        Self { profiles }
    }
}

impl Default for ConfigDiagnostic {
    fn default() -> Self {
        Self::new()
    }
}

impl Diagnostic for ConfigDiagnostic {
    fn name(&self) -> &'static str {
        "Configuration"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Loads each profile from files and environment and validates thresholds")
    }

    fn run(&self) -> Outcome {
        let mut notes = Vec::new();
        let mut failures = 0;
        let mut idle_profiles = 0;

        for profile in &self.profiles {
            match GestureConfig::load(profile) {
                Ok(config) => {
                    if !config.enabled.any() {
                        idle_profiles += 1;
                    }
                    notes.push(format!(
                        "✓ '{profile}': long_press={} samples, swipe={} px/sample, {:?}",
                        config.long_press_threshold, config.swipe_threshold, config.enabled
                    ));
                }
                Err(e) => {
                    failures += 1;
                    notes.push(format!("✗ '{profile}': {e}"));
                }
            }
        }

        if failures > 0 {
            Outcome::fail(format!("{failures} profile(s) failed to load")).with_notes(notes)
        } else if idle_profiles > 0 {
            Outcome::warn(format!("{idle_profiles} profile(s) enable no gesture")).with_notes(notes)
        } else {
            Outcome::pass(format!("{} profiles validated", self.profiles.len())).with_notes(notes)
        }
    }
}

/// Drives a scripted touch sequence through a fresh recognizer and expects
/// exactly one gesture of the given kind
pub struct GestureDiagnostic {
    kind: GestureKind,
    config: GestureConfig,
}

impl GestureDiagnostic {
    pub fn new(kind: GestureKind, config: GestureConfig) -> Self {
        Self { kind, config }
    }

    /// Diagnostics for all three gestures
    pub fn all(config: &GestureConfig) -> [Self; 3] {
        [
            Self::new(GestureKind::LongPress, config.clone()),
            Self::new(GestureKind::Swipe, config.clone()),
            Self::new(GestureKind::Pinch, config.clone()),
        ]
    }

    /// Touch sequence that must produce one gesture of this kind
    fn script(&self) -> Vec<PointerSample> {
        match self.kind {
            GestureKind::LongPress => {
                let still = self.config.long_press_threshold as usize + 1;
                let mut samples = vec![PointerSample::press(0, 100, 100)];
                samples.extend(std::iter::repeat_n(PointerSample::moved(0, 100, 100), still));
                samples.push(PointerSample::release(0, 100, 100));
                samples
            }
            GestureKind::Swipe => {
                let travel = (self.config.swipe_threshold.max(0) + 1) * 4;
                let mut samples = vec![PointerSample::press(0, 0, 0)];
                samples.extend((1..=4).map(|i| PointerSample::moved(0, travel * i / 4, 0)));
                samples.push(PointerSample::release(0, travel, 0));
                samples
            }
            GestureKind::Pinch => vec![
                PointerSample::press(0, 0, 0),
                PointerSample::press(1, 0, 100),
                PointerSample::moved(1, 0, 110),
                PointerSample::moved(1, 0, 150),
                PointerSample::release(1, 0, 150),
            ],
        }
    }

    fn enabled(&self) -> bool {
        match self.kind {
            GestureKind::LongPress => self.config.enabled.long_press,
            GestureKind::Swipe => self.config.enabled.swipe,
            GestureKind::Pinch => self.config.enabled.pinch,
        }
    }
}

impl Diagnostic for GestureDiagnostic {
    fn name(&self) -> &'static str {
        match self.kind {
            GestureKind::LongPress => "Long-press detector",
            GestureKind::Swipe => "Swipe detector",
            GestureKind::Pinch => "Pinch detector",
        }
    }

    fn description(&self) -> Option<&'static str> {
        Some("Replays a scripted touch sequence and checks the recognized gesture")
    }

    fn run(&self) -> Outcome {
        if !self.enabled() {
            return Outcome::warn(format!("'{}' disabled in profile", self.kind.channel()));
        }

        let script = self.script();
        let mut recognizer =
            GestureRecognizer::new(self.config.clone(), Vec::<GestureEvent>::new());
        recognizer.dispatch_all(script.iter().copied());
        let events = recognizer.dispose();

        let mut notes = vec![format!("replayed {} samples", script.len())];
        notes.extend(events.iter().map(|e| format!("→ {e}")));

        match events.as_slice() {
            [event] if event.kind() == self.kind => {
                Outcome::pass(format!("recognized {}", event.channel())).with_notes(notes)
            }
            [] => Outcome::fail("no gesture recognized").with_notes(notes),
            _ => Outcome::fail(format!(
                "expected one {}, got {}",
                self.kind.channel(),
                events.len()
            ))
            .with_notes(notes),
        }
    }
}

/// Reports the build metadata embedded at compile time
#[derive(Default)]
pub struct BuildDiagnostic;

impl BuildDiagnostic {
    pub fn new() -> Self {
        Self
    }
}

impl Diagnostic for BuildDiagnostic {
    fn name(&self) -> &'static str {
        "Build Info"
    }

    fn run(&self) -> Outcome {
        let notes = vec![
            format!("Built: {}", build_info::BUILD_TIMESTAMP),
            format!("Target: {}", build_info::CARGO_TARGET_TRIPLE),
            format!("Opt level: {}", build_info::CARGO_OPT_LEVEL),
            format!(
                "Rustc: {} ({})",
                build_info::RUSTC_SEMVER,
                build_info::RUSTC_CHANNEL
            ),
        ];
        Outcome::pass(build_info::version_string()).with_notes(notes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EnabledGestures;
    use crate::diagnostics::Verdict;

    #[test]
    fn test_gesture_diagnostics_pass_with_defaults() {
        for diagnostic in GestureDiagnostic::all(&GestureConfig::default()) {
            let outcome = diagnostic.run();
            assert_eq!(outcome.verdict, Verdict::Pass, "{}: {:?}", diagnostic.name(), outcome);
        }
    }

    #[test]
    fn test_gesture_diagnostics_follow_thresholds() {
        let config = GestureConfig::default()
            .with_long_press_threshold(120)
            .with_swipe_threshold(300);
        for diagnostic in GestureDiagnostic::all(&config) {
            assert!(diagnostic.run().verdict.is_ok());
        }
    }

    #[test]
    fn test_disabled_gesture_warns() {
        let config = GestureConfig::default().with_enabled(EnabledGestures::none());
        let outcome = GestureDiagnostic::new(GestureKind::Pinch, config).run();
        assert_eq!(outcome.verdict, Verdict::Warn);
    }
}
