//! Integration tests for mock backends

use mouse2joy::backend::{
    Axis, EventSource, Gamepad, MockGamepad, MockSource, PadEvent, SourceEvent,
};

#[test]
fn test_mock_source_plays_back_script() {
    let mut source = MockSource::new(vec![
        SourceEvent::Relative { axis: Axis::X, delta: 3 },
        SourceEvent::Other,
    ]);

    assert!(matches!(
        source.next_event(),
        Ok(Some(SourceEvent::Relative { axis: Axis::X, delta: 3 }))
    ));
    assert!(matches!(source.next_event(), Ok(Some(SourceEvent::Other))));

    // Exhausted streams stay exhausted
    assert!(matches!(source.next_event(), Ok(None)));
    assert!(matches!(source.next_event(), Ok(None)));
}

#[test]
fn test_failing_mock_source_reports_read_error() {
    let mut source = MockSource::failing(vec![]);
    assert!(source.next_event().is_err());
}

#[test]
fn test_mock_gamepad_records_commits() {
    let mut pad = MockGamepad::new();

    assert!(pad
        .emit_frame(&[PadEvent::Axis { axis: Axis::Y, value: -42 }])
        .is_ok());
    assert!(pad.emit_frame(&[]).is_ok());

    let frames = pad.frames();
    assert_eq!(frames.len(), 2);
    assert_eq!(frames[0], vec![PadEvent::Axis { axis: Axis::Y, value: -42 }]);
    assert!(frames[1].is_empty());
}

#[test]
fn test_mock_gamepad_clones_share_one_recording() {
    let mut pad = MockGamepad::new();
    let observer = pad.clone();

    pad.emit_frame(&[]).unwrap();
    pad.emit_frame(&[]).unwrap();

    assert_eq!(observer.frames().len(), 2);
}
