use super::*;
use crate::composition::model::Composition;

fn cfg(range: FrameRange) -> SinkConfig {
    SinkConfig {
        composition_id: "Main".to_owned(),
        width: 720,
        height: 1280,
        fps: Fps::new(30, 1).unwrap(),
        font_family: "Inter".to_owned(),
        range,
    }
}

#[test]
fn in_memory_sink_stamps_pushed_index() {
    let comp = Composition::shipped().unwrap();
    let state = comp.eval_frame(FrameIndex(40)).unwrap();
    let mut sink = InMemorySink::new();
    sink.begin(cfg(FrameRange::with_len(40, 2))).unwrap();
    sink.push_frame(FrameIndex(40), &state).unwrap();
    sink.push_frame(FrameIndex(41), &state).unwrap();
    sink.end().unwrap();

    assert_eq!(sink.config().unwrap().font_family, "Inter");
    let frames = sink.into_frames();
    assert_eq!(frames.len(), 2);
    assert_eq!(frames[0], state);
    assert_eq!(frames[1].frame, FrameIndex(41));
    assert_eq!(frames[1].layers, state.layers);
}

#[test]
fn begin_resets_captured_frames() {
    let comp = Composition::shipped().unwrap();
    let state = comp.eval_frame(FrameIndex(0)).unwrap();
    let mut sink = InMemorySink::new();
    sink.begin(cfg(FrameRange::with_len(0, 1))).unwrap();
    sink.push_frame(FrameIndex(0), &state).unwrap();
    sink.begin(cfg(FrameRange::with_len(0, 1))).unwrap();
    assert!(sink.frames().is_empty());
}

#[test]
fn json_lines_sink_writes_one_object_per_frame() {
    let comp = Composition::shipped().unwrap();
    let a = comp.eval_frame(FrameIndex(300)).unwrap();
    let mut sink = JsonLinesSink::new(Vec::<u8>::new());
    sink.begin(cfg(FrameRange::with_len(300, 2))).unwrap();
    sink.push_frame(FrameIndex(300), &a).unwrap();
    sink.push_frame(FrameIndex(301), &a).unwrap();
    sink.end().unwrap();
    assert_eq!(sink.lines_written(), 2);

    let text = String::from_utf8(sink.into_inner()).unwrap();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    let first: FrameState = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(first.frame, FrameIndex(300));
    assert_eq!(first.node_count(), a.node_count());
    assert_eq!(
        first.primary().unwrap().root.find("label").unwrap().text_content(),
        Some("Available now")
    );
    let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
    assert_eq!(second["frame"], 301);
    assert_eq!(second["layers"][0]["scene"], "call_to_action");
}
