//! End-to-end modulation pipeline: host-style envelope data driven
//! through the block position tracker, evaluator, and display layer.

use approx::assert_relative_eq;
use std::sync::Arc;
use strobe::{
    analyze, catalog, evaluate_batch, snap_value, AnalysisSlot, BlockTracker, Breakpoint,
    EnvelopeData, EnvelopeParameter, InstanceGroupRegistry, PreprocessCallbacks, PreprocessWorker,
    SampleInfo, TweakDomain, BLOCK_SIZE,
};

#[test]
fn envelope_modulates_across_blocks() {
    let points = [
        Breakpoint::new(0, 0.0),
        Breakpoint::new(128, 1.0),
        Breakpoint::new(256, 0.0),
    ];
    strobe::validate_breakpoints(&points).unwrap();

    let data = EnvelopeData::new(&points, 0.0, 1.0, 0.0);
    let mut tracker = BlockTracker::default();
    let mut out = [0.0f32; BLOCK_SIZE];

    // Two contiguous blocks walking the envelope forward
    let first: Vec<i64> = (0..64).collect();
    tracker.begin_block(1, &first, 0);
    evaluate_batch(&data, tracker.positions(), &mut out);
    assert_relative_eq!(out[0], 0.0);
    assert_relative_eq!(out[32], 0.25);

    let second: Vec<i64> = (64..128).collect();
    assert!(!tracker.begin_block(2, &second, 0));
    evaluate_batch(&data, tracker.positions(), &mut out);
    assert_relative_eq!(out[63], 127.0 / 128.0);

    // The host skips a buffer, then loops back to the start
    assert!(tracker.begin_block(4, &first, 0));
    evaluate_batch(&data, tracker.positions(), &mut out);
    assert_relative_eq!(out[0], 0.0);
    assert_relative_eq!(out[32], 0.25);
}

#[test]
fn data_offset_shifts_the_envelope() {
    let points = [Breakpoint::new(0, 0.0), Breakpoint::new(100, 1.0)];
    let data = EnvelopeData::new(&points, 0.0, 1.0, 0.0);

    let mut tracker = BlockTracker::default();
    let raw: Vec<i64> = (1000..1064).collect();
    tracker.begin_block(1, &raw, 1000);

    let mut out = [0.0f32; BLOCK_SIZE];
    evaluate_batch(&data, tracker.positions(), &mut out);

    assert_relative_eq!(out[0], 0.0);
    assert_relative_eq!(out[50], 0.5);
}

#[test]
fn catalog_envelope_displays_evaluated_values() {
    let param = catalog::amp_envelope();
    let envelope = EnvelopeParameter::new(&param).unwrap();

    let points = [Breakpoint::new(0, 0.0), Breakpoint::new(100, 1.0)];
    let data = EnvelopeData::new(&points, 0.0, 1.0, envelope.default_value());

    assert_eq!(envelope.display(envelope.evaluate(&data, 0)), "Silent");
    assert_eq!(envelope.display(envelope.evaluate(&data, 100)), "0.0 dB");
}

#[test]
fn tweakers_round_trip_displayed_values() {
    let pan = TweakDomain::Pan.tweaker();
    assert_eq!(pan.display(-0.5), "50% L");
    assert_eq!(pan.display(0.0), "Center");

    let speed = TweakDomain::Speed.tweaker();
    assert_eq!(speed.display(0.5), "1/2");
}

#[test]
fn snap_blends_toward_the_grid() {
    assert_relative_eq!(snap_value(3.4, 1.0, 0.0), 3.4);
    assert_relative_eq!(snap_value(3.4, 1.0, 1.0), 3.0);
}

#[test]
fn preprocessed_analysis_feeds_shared_groups() {
    let registry: InstanceGroupRegistry<AnalysisSlot> = InstanceGroupRegistry::new();

    // All four siblings of the group see the same slot
    let slot = registry.acquire(0, AnalysisSlot::empty);
    let siblings: Vec<_> = (0..3).map(|_| registry.acquire(0, || unreachable!())).collect();
    assert!(siblings.iter().all(|s| Arc::ptr_eq(s, &slot)));

    let worker = PreprocessWorker::new(4);
    let info = SampleInfo {
        id: 42,
        num_channels: 1,
        num_frames: 1024,
        sample_rate: 44100,
    };
    let frames = Arc::new(vec![0.25f32; 1024]);
    assert!(worker.submit(
        info.clone(),
        Arc::clone(&frames),
        Arc::clone(&slot),
        PreprocessCallbacks::noop()
    ));

    // Synchronous path agrees with what the worker will publish
    let expected = analyze(&info, &frames, &PreprocessCallbacks::noop()).unwrap();

    for _ in 0..500 {
        if slot.ready() {
            break;
        }
        std::thread::sleep(std::time::Duration::from_millis(2));
    }

    let published = slot.load().expect("worker did not publish analysis");
    assert_eq!(*published, expected);
}
