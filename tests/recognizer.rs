//! End-to-end recognition through the public API

use touch_gestures::config::{EnabledGestures, GestureConfig};
use touch_gestures::gesture::{
    GestureEvent, GestureRecognizer, PinchDetector, Propagation, SwipeDetector,
};
use touch_gestures::input::{PointerSample, parse_trace};

const THRESHOLD: u32 = 5;

fn recognizer() -> GestureRecognizer<Vec<GestureEvent>> {
    let config = GestureConfig::default().with_long_press_threshold(THRESHOLD);
    GestureRecognizer::new(config, Vec::new())
}

fn still_moves(x: i32, y: i32, count: u32) -> Vec<PointerSample> {
    (0..count).map(|_| PointerSample::moved(0, x, y)).collect()
}

#[test]
fn test_long_press_fires_once() {
    let mut recognizer = recognizer();
    recognizer.dispatch(PointerSample::press(0, 10, 10));
    recognizer.dispatch_all(still_moves(10, 10, THRESHOLD + 1));
    assert_eq!(recognizer.sink(), &vec![GestureEvent::LongPress { x: 10, y: 10 }]);

    recognizer.dispatch(PointerSample::moved(0, 10, 10));
    assert_eq!(recognizer.sink().len(), 1);
}

#[test]
fn test_long_press_restarts_after_slide() {
    let mut recognizer = recognizer();
    recognizer.dispatch(PointerSample::press(0, 10, 10));
    recognizer.dispatch(PointerSample::moved(0, 11, 10));
    recognizer.dispatch_all(still_moves(11, 10, THRESHOLD + 1));
    assert_eq!(recognizer.sink(), &vec![GestureEvent::LongPress { x: 11, y: 10 }]);
}

#[test]
fn test_long_press_sample_is_consumed() {
    let mut recognizer = recognizer();
    recognizer.dispatch(PointerSample::press(0, 1, 1));
    for _ in 0..THRESHOLD {
        assert_eq!(
            recognizer.dispatch(PointerSample::moved(0, 1, 1)),
            Propagation::Propagate
        );
    }
    assert_eq!(
        recognizer.dispatch(PointerSample::moved(0, 1, 1)),
        Propagation::Consume
    );
}

#[test]
fn test_slow_swipe_is_ignored() {
    let mut recognizer = recognizer();
    recognizer.dispatch(PointerSample::press(0, 0, 0));
    recognizer.dispatch_all((1..=5).map(|i| PointerSample::moved(0, i * 20, i)));
    assert_eq!(
        recognizer.dispatch(PointerSample::release(0, 100, 0)),
        Propagation::Propagate
    );
    assert!(recognizer.sink().is_empty());
}

#[test]
fn test_fast_swipe_is_recognized() {
    let mut recognizer = recognizer();
    recognizer.dispatch(PointerSample::press(0, 0, 0));
    recognizer.dispatch_all((1..=5).map(|i| PointerSample::moved(0, i * 200, 0)));
    assert_eq!(
        recognizer.dispatch(PointerSample::release(0, 1000, 0)),
        Propagation::Consume
    );

    match recognizer.sink().as_slice() {
        [GestureEvent::Swipe {
            x: 0,
            y: 0,
            angle,
            velocity: 200,
        }] => assert!(angle.abs() < 1e-9),
        other => panic!("expected one swipe, got {other:?}"),
    }
}

#[test]
fn test_press_release_without_moves_is_not_a_swipe() {
    let mut recognizer = recognizer();
    recognizer.dispatch(PointerSample::press(0, 0, 0));
    recognizer.dispatch(PointerSample::release(0, 5000, 0));
    assert!(recognizer.sink().is_empty());
}

#[test]
fn test_pinch_emits_constant_delta() {
    let mut recognizer = recognizer();
    recognizer.dispatch(PointerSample::press(0, 100, 100));
    recognizer.dispatch(PointerSample::press(1, 100, 200));
    assert!(recognizer.pinch_active());

    // Baseline, then four steps of +15px
    for step in 0..5 {
        let y = 200 + step * 15;
        assert_eq!(
            recognizer.dispatch(PointerSample::moved(1, 100, y)),
            Propagation::Consume
        );
    }
    let deltas: Vec<i32> = recognizer
        .sink()
        .iter()
        .map(|e| match e {
            GestureEvent::Pinch { delta, .. } => *delta,
            other => panic!("unexpected {other:?}"),
        })
        .collect();
    assert_eq!(deltas, vec![15, 15, 15, 15]);

    // Same distance again: consumed, nothing published
    assert_eq!(
        recognizer.dispatch(PointerSample::moved(1, 100, 260)),
        Propagation::Consume
    );
    assert_eq!(recognizer.sink().len(), 4);
}

#[test]
fn test_pinch_suppresses_swipe() {
    let mut recognizer = recognizer();
    recognizer.dispatch(PointerSample::press(0, 0, 0));
    recognizer.dispatch(PointerSample::moved(0, 10, 0));
    recognizer.dispatch(PointerSample::press(1, 0, 300));

    recognizer.dispatch_all((1..=3).map(|i| PointerSample::moved(0, i * 400, 0)));
    recognizer.dispatch(PointerSample::release(0, 2000, 0));

    assert!(
        !recognizer
            .sink()
            .iter()
            .any(|e| matches!(e, GestureEvent::Swipe { .. }))
    );
    let swipe = recognizer
        .get_detector_typed::<SwipeDetector>("swipe")
        .unwrap();
    assert_eq!(swipe.start(), None);
}

#[test]
fn test_swipe_rearms_after_pinch_ends() {
    let mut recognizer = recognizer();
    recognizer.dispatch_all([
        PointerSample::press(0, 0, 0),
        PointerSample::press(1, 0, 100),
        PointerSample::release(1, 0, 100),
        PointerSample::release(0, 0, 0),
    ]);
    assert!(!recognizer.pinch_active());

    recognizer.dispatch(PointerSample::press(0, 0, 0));
    recognizer.dispatch(PointerSample::moved(0, 0, -300));
    recognizer.dispatch(PointerSample::release(0, 0, -600));
    assert!(matches!(
        recognizer.sink().as_slice(),
        [GestureEvent::Swipe { velocity: 600, .. }]
    ));
}

#[test]
fn test_second_finger_after_swipe_is_not_a_pinch() {
    let mut recognizer = recognizer();
    recognizer.dispatch_all([PointerSample::press(0, 0, 0), PointerSample::moved(0, 500, 0)]);
    assert_eq!(
        recognizer.dispatch(PointerSample::release(0, 1000, 0)),
        Propagation::Consume
    );

    recognizer.dispatch(PointerSample::press(1, 0, 100));
    assert!(!recognizer.pinch_active());
    assert_eq!(
        recognizer.dispatch(PointerSample::moved(1, 0, 200)),
        Propagation::Propagate
    );
    assert!(matches!(
        recognizer.sink().as_slice(),
        [GestureEvent::Swipe { velocity: 1000, .. }]
    ));
}

#[test]
fn test_pinch_baseline_keeps_finger_position() {
    let mut recognizer = recognizer();
    recognizer.dispatch_all([
        PointerSample::press(0, 0, 0),
        PointerSample::press(1, 0, 100),
        PointerSample::moved(1, 0, 110),
    ]);

    // Measured against the second finger's press position: no change
    assert_eq!(
        recognizer.dispatch(PointerSample::moved(0, 0, -10)),
        Propagation::Consume
    );
    assert!(recognizer.sink().is_empty());
}

#[test]
fn test_unknown_slots_are_ignored() {
    let mut recognizer = recognizer();
    recognizer.dispatch_all([
        PointerSample::press(5, 0, 0),
        PointerSample::moved(5, 900, 0),
        PointerSample::release(5, 1800, 0),
    ]);
    assert!(recognizer.sink().is_empty());
    let pinch = recognizer
        .get_detector_typed::<PinchDetector>("pinch")
        .unwrap();
    assert!(!pinch.is_active());
}

#[test]
fn test_disabled_detectors_stay_silent() {
    let config = GestureConfig::default().with_enabled(EnabledGestures {
        long_press: true,
        swipe: false,
        pinch: false,
    });
    let mut recognizer = GestureRecognizer::new(config, Vec::<GestureEvent>::new());
    recognizer.dispatch(PointerSample::press(0, 0, 0));
    recognizer.dispatch(PointerSample::moved(0, 500, 0));
    recognizer.dispatch(PointerSample::release(0, 1000, 0));
    assert!(recognizer.sink().is_empty());
}

#[test]
fn test_demo_traces() {
    let cases = [
        (include_str!("../demos/swipe_right.trace"), "swipe"),
        (include_str!("../demos/pinch_out.trace"), "pinch"),
        (include_str!("../demos/long_press.trace"), "longpress"),
    ];

    for (trace, channel) in cases {
        let samples = parse_trace(trace).unwrap();
        let mut recognizer =
            GestureRecognizer::new(GestureConfig::default(), Vec::<GestureEvent>::new());
        recognizer.dispatch_all(samples);
        let events = recognizer.dispose();
        assert!(!events.is_empty(), "no gesture in {channel} trace");
        assert!(
            events.iter().all(|e| e.channel() == channel),
            "{channel} trace produced {events:?}"
        );
    }
}
