use super::*;

fn fps30() -> Fps {
    Fps::new(30, 1).unwrap()
}

#[test]
fn text_reveals_in_two_steps() {
    assert_eq!(sample(0, fps30()).text, "");
    assert_eq!(sample(4, fps30()).text, "");
    assert_eq!(sample(5, fps30()).text, "G");
    assert_eq!(sample(6, fps30()).text, "G");
    assert_eq!(sample(14, fps30()).text, "G");
    assert_eq!(sample(15, fps30()).text, "G P");
    assert_eq!(sample(29, fps30()).text, "G P");
}

#[test]
fn cursor_blinks_every_eight_frames() {
    let visible: Vec<bool> = (0..32).map(|f| sample(f, fps30()).cursor_visible).collect();
    assert!(visible[0..8].iter().all(|v| *v));
    assert!(visible[8..16].iter().all(|v| !*v));
    assert!(visible[16..24].iter().all(|v| *v));
    assert!(visible[24..32].iter().all(|v| !*v));
}

#[test]
fn pill_scale_springs_in() {
    assert_eq!(sample(0, fps30()).pill_scale, 0.0);
    assert!(sample(10, fps30()).pill_scale > 0.5);
}

#[test]
fn tree_carries_text_cursor_and_scale() {
    let state = sample(9, fps30());
    let node = state.to_node();
    let pill = node.find("pill").unwrap();
    assert_eq!(pill.style.scale, state.pill_scale);
    assert_eq!(node.find("typed").unwrap().text_content(), Some("G"));
    assert_eq!(node.find("cursor").unwrap().style.opacity, 0.0);
}
