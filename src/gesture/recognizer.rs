//! Sample routing from the pointer source to detectors and the sink

use tracing::{debug, info, trace};

use super::detector::{GestureDetector, Propagation, SharedTouchState};
use super::events::GestureEvent;
use super::long_press::LongPressDetector;
use super::pinch::PinchDetector;
use super::swipe::SwipeDetector;
use crate::config::GestureConfig;
use crate::input::PointerSample;

/// Receiver of recognized gestures
pub trait GestureSink {
    fn publish(&mut self, event: GestureEvent);
}

impl GestureSink for Vec<GestureEvent> {
    fn publish(&mut self, event: GestureEvent) {
        self.push(event);
    }
}

impl<F> GestureSink for F
where
    F: FnMut(GestureEvent),
{
    fn publish(&mut self, event: GestureEvent) {
        self(event)
    }
}

/// Session-scoped set of gesture detectors wired to one sink
///
/// Constructed once with a fixed configuration. The host feeds every pointer
/// sample to [`dispatch`](Self::dispatch) and stops propagating the sample
/// itself when the result is [`Propagation::Consume`].
pub struct GestureRecognizer<S: GestureSink> {
    config: GestureConfig,
    /// Registered detectors, sorted by priority (highest first)
    detectors: Vec<Box<dyn GestureDetector>>,
    shared: SharedTouchState,
    sink: S,
    samples_seen: u64,
    gestures_emitted: u64,
}

impl<S: GestureSink> GestureRecognizer<S> {
    /// Creates a recognizer with the detectors enabled in `config`
    pub fn new(config: GestureConfig, sink: S) -> Self {
        info!(
            profile = %config.profile,
            ?config.enabled,
            long_press_threshold = config.long_press_threshold,
            swipe_threshold = config.swipe_threshold,
            "Starting gesture recognizer"
        );

        let mut recognizer = Self {
            detectors: Vec::new(),
            shared: SharedTouchState::new(),
            sink,
            samples_seen: 0,
            gestures_emitted: 0,
            config,
        };

        if recognizer.config.enabled.long_press {
            let threshold = recognizer.config.long_press_threshold;
            recognizer.register_detector(Box::new(LongPressDetector::new(threshold)));
        }
        if recognizer.config.enabled.swipe {
            let threshold = recognizer.config.swipe_threshold;
            recognizer.register_detector(Box::new(SwipeDetector::new(threshold)));
        }
        if recognizer.config.enabled.pinch {
            recognizer.register_detector(Box::new(PinchDetector::new()));
        }

        recognizer
    }

    /// Register an additional detector
    ///
    /// Detectors are kept sorted by priority (highest first). Detectors with
    /// equal priority keep registration order.
    pub fn register_detector(&mut self, detector: Box<dyn GestureDetector>) {
        debug!(
            name = detector.name(),
            priority = detector.priority(),
            "Registering detector"
        );
        self.detectors.push(detector);
        self.detectors.sort_by_key(|d| std::cmp::Reverse(d.priority()));
    }

    /// Offer one sample to every detector in priority order
    ///
    /// Stops at the first detector that consumes the sample.
    pub fn dispatch(&mut self, sample: PointerSample) -> Propagation {
        self.samples_seen += 1;
        trace!(
            slot = sample.slot.0,
            kind = %sample.kind,
            x = sample.x,
            y = sample.y,
            "Dispatching sample"
        );

        for detector in &mut self.detectors {
            let recognition = detector.handle_sample(&sample, &mut self.shared);

            if let Some(event) = recognition.gesture {
                debug!(detector = detector.name(), %event, "Publishing gesture");
                self.gestures_emitted += 1;
                self.sink.publish(event);
            }

            if recognition.propagation.is_consumed() {
                // Sample consumed, stop propagation
                return Propagation::Consume;
            }
        }

        Propagation::Propagate
    }

    /// Dispatch a batch of samples in order
    pub fn dispatch_all<I>(&mut self, samples: I)
    where
        I: IntoIterator<Item = PointerSample>,
    {
        for sample in samples {
            self.dispatch(sample);
        }
    }

    /// Return every detector to idle, e.g. after the host lost input focus
    pub fn reset(&mut self) {
        for detector in &mut self.detectors {
            detector.reset();
        }
        self.shared = SharedTouchState::new();
    }

    /// Tear the recognizer down and hand back the sink
    pub fn dispose(self) -> S {
        info!(
            samples = self.samples_seen,
            gestures = self.gestures_emitted,
            "Stopping gesture recognizer"
        );
        self.sink
    }

    /// Configuration this recognizer was built with
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Returns true while the pinch detector is in pinch mode
    pub fn pinch_active(&self) -> bool {
        self.shared.pinch_active()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Get number of registered detectors
    pub fn detector_count(&self) -> usize {
        self.detectors.len()
    }

    /// Get a reference to a detector by name
    pub fn get_detector(&self, name: &str) -> Option<&dyn GestureDetector> {
        self.detectors
            .iter()
            .find(|d| d.name() == name)
            .map(|b| b.as_ref())
    }

    /// Gets a typed reference to a specific detector
    pub fn get_detector_typed<T: 'static>(&self, name: &str) -> Option<&T> {
        self.get_detector(name)
            .and_then(|d| d.as_any().downcast_ref::<T>())
    }

    /// Get debug information about all detectors
    pub fn debug_detectors(&self) -> Vec<(String, u32)> {
        self.detectors
            .iter()
            .map(|d| (d.name().to_string(), d.priority()))
            .collect()
    }

    /// Samples dispatched since construction
    pub fn samples_seen(&self) -> u64 {
        self.samples_seen
    }

    /// Gestures published since construction
    pub fn gestures_emitted(&self) -> u64 {
        self.gestures_emitted
    }
}

#[cfg(test)]
mod tests {
    use std::any::Any;

    use super::*;
    use crate::config::EnabledGestures;
    use crate::gesture::Recognition;

    /// Consumes every sample it sees
    struct Greedy;

    impl GestureDetector for Greedy {
        fn name(&self) -> &str {
            "greedy"
        }

        fn priority(&self) -> u32 {
            100
        }

        fn handle_sample(
            &mut self,
            _sample: &PointerSample,
            _shared: &mut SharedTouchState,
        ) -> Recognition {
            Recognition::consume()
        }

        fn reset(&mut self) {}

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    #[test]
    fn test_enabled_detectors_are_registered_by_priority() {
        let recognizer =
            GestureRecognizer::new(GestureConfig::default(), Vec::<GestureEvent>::new());
        assert_eq!(
            recognizer.debug_detectors(),
            vec![
                ("pinch".to_string(), 40),
                ("long_press".to_string(), 30),
                ("swipe".to_string(), 20),
            ]
        );

        let config = GestureConfig::default().with_enabled(EnabledGestures {
            long_press: false,
            swipe: true,
            pinch: false,
        });
        let recognizer = GestureRecognizer::new(config, Vec::<GestureEvent>::new());
        assert_eq!(recognizer.detector_count(), 1);
        assert!(recognizer.get_detector("swipe").is_some());
        assert!(recognizer.get_detector("pinch").is_none());
    }

    #[test]
    fn test_consumed_sample_stops_propagation() {
        let mut recognizer =
            GestureRecognizer::new(GestureConfig::default(), Vec::<GestureEvent>::new());
        recognizer.register_detector(Box::new(Greedy));

        assert_eq!(
            recognizer.dispatch(PointerSample::press(0, 0, 0)),
            Propagation::Consume
        );
        let long_press = recognizer
            .get_detector_typed::<LongPressDetector>("long_press")
            .unwrap();
        assert!(!long_press.is_tracking());
    }

    #[test]
    fn test_closure_sink() {
        let mut seen = Vec::new();
        {
            let config = GestureConfig::default().with_long_press_threshold(1);
            let mut recognizer =
                GestureRecognizer::new(config, |event: GestureEvent| seen.push(event));
            recognizer.dispatch_all([
                PointerSample::press(0, 3, 4),
                PointerSample::moved(0, 3, 4),
                PointerSample::moved(0, 3, 4),
            ]);
            assert_eq!(recognizer.gestures_emitted(), 1);
            assert_eq!(recognizer.samples_seen(), 3);
        }
        assert_eq!(seen, vec![GestureEvent::LongPress { x: 3, y: 4 }]);
    }

    #[test]
    fn test_reset_returns_to_idle() {
        let mut recognizer =
            GestureRecognizer::new(GestureConfig::default(), Vec::<GestureEvent>::new());
        recognizer.dispatch_all([PointerSample::press(0, 0, 0), PointerSample::press(1, 0, 50)]);
        assert!(recognizer.pinch_active());

        recognizer.reset();
        assert!(!recognizer.pinch_active());
        let pinch = recognizer.get_detector_typed::<PinchDetector>("pinch").unwrap();
        assert!(!pinch.is_active());
    }

    #[test]
    fn test_dispose_returns_sink() {
        let config = GestureConfig::default().with_long_press_threshold(1);
        let mut recognizer = GestureRecognizer::new(config, Vec::<GestureEvent>::new());
        recognizer.dispatch_all([
            PointerSample::press(0, 1, 1),
            PointerSample::moved(0, 1, 1),
            PointerSample::moved(0, 1, 1),
        ]);
        let events = recognizer.dispose();
        assert_eq!(events, vec![GestureEvent::LongPress { x: 1, y: 1 }]);
    }
}
