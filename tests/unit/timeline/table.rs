use super::*;

fn shipped() -> Vec<SceneSpec> {
    vec![
        SceneSpec::new(SceneId::TypingPill, 0, 30),
        SceneSpec::new(SceneId::ModelSelection, 30, 30),
        SceneSpec::new(SceneId::PromptInput, 60, 30),
        SceneSpec::new(SceneId::ThinkToggle, 90, 60),
        SceneSpec::new(SceneId::DocumentCards, 150, 30),
        SceneSpec::new(SceneId::StreamingText, 180, 90),
        SceneSpec::new(SceneId::CallToAction, 270, 105),
    ]
}

#[test]
fn shipped_table_spans_375_frames() {
    let tl = Timeline::new(shipped()).unwrap();
    assert_eq!(tl.total_frames(), 375);
    assert_eq!(tl.specs().len(), 7);
}

#[test]
fn every_frame_has_exactly_one_scene() {
    let tl = Timeline::new(shipped()).unwrap();
    for f in 0..375u64 {
        let active = tl.active_scenes_at(FrameIndex(f));
        assert_eq!(active.len(), 1, "frame {f}");
        let a = active[0];
        assert!(a.local_frame < a.range.len_frames());
        assert_eq!(a.range.start.0 + a.local_frame, f);
    }
}

#[test]
fn boundaries_are_half_open() {
    let tl = Timeline::new(shipped()).unwrap();
    let at_29 = tl.active_scenes_at(FrameIndex(29));
    let at_30 = tl.active_scenes_at(FrameIndex(30));
    assert_eq!(at_29[0].id, SceneId::TypingPill);
    assert_eq!(at_29[0].local_frame, 29);
    assert_eq!(at_30[0].id, SceneId::ModelSelection);
    assert_eq!(at_30[0].local_frame, 0);
    assert_eq!(tl.active_scenes_at(FrameIndex(374))[0].local_frame, 104);
}

#[test]
fn frames_past_the_end_are_empty() {
    let tl = Timeline::new(shipped()).unwrap();
    assert!(tl.active_scenes_at(FrameIndex(375)).is_empty());
    assert!(tl.active_scenes_at(FrameIndex(u64::MAX)).is_empty());
}

#[test]
fn rows_are_sorted_on_construction() {
    let mut rows = shipped();
    rows.reverse();
    let tl = Timeline::new(rows).unwrap();
    assert_eq!(tl.specs()[0].id, SceneId::TypingPill);
    assert_eq!(
        tl.range_of(SceneId::StreamingText),
        Some(FrameRange::with_len(180, 90))
    );
}

#[test]
fn overlap_is_rejected() {
    let mut rows = shipped();
    rows[1].start = 25;
    let err = Timeline::new(rows).unwrap_err();
    assert!(err.to_string().contains("overlap"), "{err}");
    assert!(err.to_string().contains("frames 25..30"), "{err}");
}

#[test]
fn span_covers_the_whole_table() {
    let timeline = Timeline::new(shipped()).unwrap();
    assert_eq!(timeline.span(), FrameRange::with_len(0, 375));
}

#[test]
fn gap_is_rejected() {
    let mut rows = shipped();
    rows[6].start = 280;
    let err = Timeline::new(rows).unwrap_err();
    assert!(err.to_string().contains("gap"), "{err}");
}

#[test]
fn late_start_zero_duration_and_duplicates_are_rejected() {
    let mut rows = shipped();
    rows[0].start = 1;
    rows[0].duration = 29;
    assert!(Timeline::new(rows).is_err());

    let mut rows = shipped();
    rows[2].duration = 0;
    assert!(Timeline::new(rows).is_err());

    let mut rows = shipped();
    rows[1].id = SceneId::TypingPill;
    assert!(Timeline::new(rows).is_err());

    assert!(Timeline::new(Vec::new()).is_err());
}

#[test]
fn scene_ids_serialize_snake_case() {
    assert_eq!(
        serde_json::to_string(&SceneId::CallToAction).unwrap(),
        "\"call_to_action\""
    );
    for id in SceneId::ALL {
        assert_eq!(serde_json::to_value(id).unwrap(), id.as_str());
    }
}
