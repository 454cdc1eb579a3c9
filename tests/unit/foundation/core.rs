use super::*;

#[test]
fn frame_range_contains_boundaries() {
    let r = FrameRange::new(FrameIndex(2), FrameIndex(5)).unwrap();
    assert!(!r.contains(FrameIndex(1)));
    assert!(r.contains(FrameIndex(2)));
    assert!(r.contains(FrameIndex(4)));
    assert!(!r.contains(FrameIndex(5)));
}

#[test]
fn frame_range_rejects_inverted_bounds() {
    assert!(FrameRange::new(FrameIndex(5), FrameIndex(2)).is_err());
    assert!(FrameRange::new(FrameIndex(5), FrameIndex(5)).unwrap().is_empty());
}

#[test]
fn back_to_back_ranges_do_not_overlap() {
    let a = FrameRange::with_len(0, 30);
    let b = FrameRange::with_len(30, 30);
    assert!(!a.overlaps(b));
    assert!(a.overlaps(FrameRange::with_len(29, 2)));
}

#[test]
fn intersect_clips_to_shared_frames() {
    let a = FrameRange::with_len(10, 20);
    let b = FrameRange::with_len(25, 100);
    assert_eq!(a.intersect(b), FrameRange::with_len(25, 5));
    assert!(a.intersect(FrameRange::with_len(100, 5)).is_empty());
}

#[test]
fn fps_rejects_zero_terms() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(30, 0).is_err());
    assert!(Fps { num: 30, den: 0 }.validate().is_err());
}

#[test]
fn fps_converts_frames_to_seconds() {
    let fps = Fps::new(30, 1).unwrap();
    assert_eq!(fps.frames_to_secs(375), 12.5);
    assert_eq!(fps.frame_offset_to_secs(-15.0), -0.5);
}

#[test]
fn canvas_rejects_zero_dimensions() {
    assert!(
        Canvas {
            width: 0,
            height: 10
        }
        .validate()
        .is_err()
    );
    assert!(
        Canvas {
            width: 720,
            height: 1280
        }
        .validate()
        .is_ok()
    );
}
