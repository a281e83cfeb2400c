//! Image sink behavior against a mock store: rate limiting, the two-phase
//! write, and per-frame failure containment.

use growrig::{Error, FrameOutcome, ImageFrame, ImageSink, ImageSinkConfig, StoreError};

use crate::mock_store::MockStore;

fn rgb_frame(width: u32, height: u32) -> ImageFrame {
    ImageFrame {
        width,
        height,
        encoding: "rgb8".to_string(),
        data: vec![0x40; (width * height * 3) as usize],
    }
}

fn sink_with_interval(secs: f64) -> ImageSink {
    let mut config = ImageSinkConfig::new("environment_1", "/cameras/top/image_raw");
    config.min_update_interval_secs = secs;
    ImageSink::new(&config).unwrap()
}

#[test]
fn frames_are_rate_limited_to_the_configured_interval() {
    let mut sink = sink_with_interval(10.0);
    let mut store = MockStore::new();
    let frame = rgb_frame(4, 4);

    let outcomes: Vec<_> = [0.0, 4.0, 9.0, 11.0]
        .into_iter()
        .map(|t| sink.on_frame(&frame, t, &mut store).unwrap())
        .collect();

    assert!(matches!(outcomes[0], FrameOutcome::Persisted { .. }));
    assert_eq!(outcomes[1], FrameOutcome::RateLimited);
    assert_eq!(outcomes[2], FrameOutcome::RateLimited);
    assert!(matches!(outcomes[3], FrameOutcome::Persisted { .. }));

    assert_eq!(store.records.len(), 2);
    assert_eq!(store.records[0].1.timestamp, 0.0);
    assert_eq!(store.records[1].1.timestamp, 11.0);
    assert_eq!(store.attachments.len(), 2);
}

#[test]
fn persisted_record_and_attachment_shape() {
    let mut sink = sink_with_interval(0.0);
    let mut store = MockStore::new();

    let outcome = sink
        .on_frame(&rgb_frame(8, 2), 1234.5, &mut store)
        .unwrap();
    let FrameOutcome::Persisted { id, revision } = outcome else {
        panic!("expected persisted frame");
    };

    let point = store.record_for(&id).unwrap();
    assert_eq!(point.environment, "environment_1");
    assert_eq!(point.variable, "aerial_image");
    assert!(!point.is_desired);
    assert_eq!(point.value, None);
    assert_eq!(point.timestamp, 1234.5);

    let attachment = &store.attachments[0];
    assert_eq!(attachment.id, id);
    assert_eq!(attachment.revision, revision);
    assert_eq!(attachment.name, "image");
    assert_eq!(attachment.content_type, "image/png");
    // PNG signature on the attached bytes.
    assert_eq!(&attachment.bytes[..4], &[0x89, b'P', b'N', b'G']);
}

#[test]
fn unsupported_encoding_is_fatal_for_that_frame_only() {
    let mut sink = sink_with_interval(0.0);
    let mut store = MockStore::new();

    let bad = ImageFrame {
        width: 2,
        height: 2,
        encoding: "bayer_grbg8".to_string(),
        data: vec![0; 4],
    };
    assert_eq!(
        sink.on_frame(&bad, 0.0, &mut store),
        Err(Error::UnsupportedEncoding("bayer_grbg8".to_string()))
    );
    assert!(store.records.is_empty());

    // The sink keeps running for supported frames.
    let outcome = sink.on_frame(&rgb_frame(2, 2), 1.0, &mut store).unwrap();
    assert!(matches!(outcome, FrameOutcome::Persisted { .. }));
}

#[test]
fn truncated_payload_is_rejected_without_a_write() {
    let mut sink = sink_with_interval(0.0);
    let mut store = MockStore::new();

    let mut frame = rgb_frame(4, 4);
    frame.data.truncate(10);
    assert!(matches!(
        sink.on_frame(&frame, 0.0, &mut store),
        Err(Error::BadFrame(_))
    ));
    assert!(store.records.is_empty());
    assert!(store.attachments.is_empty());
}

#[test]
fn record_write_failure_drops_the_frame() {
    let mut sink = sink_with_interval(0.0);
    let mut store = MockStore::new();
    store.fail_create = Some(StoreError::Unreachable);

    assert_eq!(
        sink.on_frame(&rgb_frame(2, 2), 0.0, &mut store),
        Err(Error::Store(StoreError::Unreachable))
    );
    assert!(store.attachments.is_empty());
}

#[test]
fn attachment_failure_leaves_an_orphan_record() {
    let mut sink = sink_with_interval(0.0);
    let mut store = MockStore::new();
    store.fail_attach = Some(StoreError::Conflict);

    let err = sink
        .on_frame(&rgb_frame(2, 2), 0.0, &mut store)
        .unwrap_err();
    let Error::PartialPersistence { id } = err else {
        panic!("expected partial persistence, got {err}");
    };

    // The record survives with no attachment — no compensating delete.
    assert!(store.record_for(&id).is_some());
    assert!(store.attachments.is_empty());

    // And the sink continues on the next eligible frame.
    store.fail_attach = None;
    let outcome = sink.on_frame(&rgb_frame(2, 2), 1.0, &mut store).unwrap();
    assert!(matches!(outcome, FrameOutcome::Persisted { .. }));
}

#[test]
fn rgba_frames_are_supported() {
    let mut sink = sink_with_interval(0.0);
    let mut store = MockStore::new();

    let frame = ImageFrame {
        width: 2,
        height: 2,
        encoding: "rgba8".to_string(),
        data: vec![0xFF; 16],
    };
    let outcome = sink.on_frame(&frame, 0.0, &mut store).unwrap();
    assert!(matches!(outcome, FrameOutcome::Persisted { .. }));
}
