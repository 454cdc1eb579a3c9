use super::*;

#[test]
fn char_prefix_counts_chars_not_bytes() {
    assert_eq!(char_prefix("• Go", 0), "");
    assert_eq!(char_prefix("• Go", 1), "•");
    assert_eq!(char_prefix("• Go", 3), "• G");
    assert_eq!(char_prefix("• Go", 99), "• Go");
}

#[test]
fn every_scene_animates_its_whole_window() {
    let fps = Fps::new(30, 1).unwrap();
    for id in SceneId::ALL {
        for f in 0..120 {
            let node = id.animate(f, fps).unwrap();
            assert_eq!(node.name, id.as_str());
            assert_eq!(node.children()[0].name, "background");
        }
    }
}

#[test]
fn animators_are_idempotent() {
    let fps = Fps::new(30, 1).unwrap();
    for id in SceneId::ALL {
        for f in [0, 7, 15, 19, 46, 59, 89, 104] {
            assert_eq!(id.animate(f, fps).unwrap(), id.animate(f, fps).unwrap());
        }
    }
}
