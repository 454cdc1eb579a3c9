use super::*;

fn fps30() -> Fps {
    Fps::new(30, 1).unwrap()
}

#[test]
fn phases_switch_at_25_and_45() {
    assert_eq!(ThinkPhase::at(0), ThinkPhase::Deeper);
    assert_eq!(ThinkPhase::at(24), ThinkPhase::Deeper);
    assert_eq!(ThinkPhase::at(25), ThinkPhase::Faster);
    assert_eq!(ThinkPhase::at(44), ThinkPhase::Faster);
    assert_eq!(ThinkPhase::at(45), ThinkPhase::Toggle);
    assert_eq!(ThinkPhase::at(59), ThinkPhase::Toggle);
}

#[test]
fn toggle_is_idle_before_its_phase() {
    for f in [0u64, 10, 30, 44] {
        let state = sample(f, fps30()).unwrap();
        assert_eq!(state.toggle_progress, 0.0);
        assert_eq!(state.toggle_opacity, 0.0);
        assert!(state.to_node().find("toggle").is_none());
    }
    let at_start = sample(45, fps30()).unwrap();
    assert_eq!(at_start.toggle_progress, 0.0);
    assert_eq!(at_start.knob_x(), 3.0);
}

#[test]
fn knob_slides_right_during_toggle_phase() {
    let state = sample(55, fps30()).unwrap();
    assert!(state.toggle_progress > 0.5);
    let node = state.to_node();
    let knob = node.find("knob").unwrap();
    assert!((knob.style.translate.x - (3.0 + 28.0 * state.toggle_progress)).abs() < 1e-12);
    assert_eq!(knob.style.translate.y, 3.0);
}

#[test]
fn entrance_offset_eases_out_and_clamps() {
    assert_eq!(sample(0, fps30()).unwrap().headline_offset_y, 30.0);
    let mid = sample(5, fps30()).unwrap().headline_offset_y;
    // Ease-out covers more than a linear third of the distance after a third of the time.
    assert!(mid < 20.0 && mid > 0.0);
    assert_eq!(sample(15, fps30()).unwrap().headline_offset_y, 0.0);
    assert_eq!(sample(40, fps30()).unwrap().headline_offset_y, 0.0);
}

#[test]
fn zoom_out_runs_over_the_last_ten_frames() {
    assert_eq!(sample(0, fps30()).unwrap().zoom, 1.0);
    assert_eq!(sample(50, fps30()).unwrap().zoom, 1.0);
    assert!((sample(55, fps30()).unwrap().zoom - 0.925).abs() < 1e-12);
    assert_eq!(sample(60, fps30()).unwrap().zoom, 0.85);
    assert_eq!(sample(90, fps30()).unwrap().zoom, 0.85);
}

#[test]
fn headline_word_tracks_phase() {
    let deeper = sample(10, fps30()).unwrap().to_node();
    assert_eq!(deeper.find("word").unwrap().text_content(), Some("deeper"));
    let faster = sample(30, fps30()).unwrap().to_node();
    assert_eq!(faster.find("word").unwrap().text_content(), Some("faster"));
    assert_eq!(faster.find("think").unwrap().text_content(), Some("Think "));
}
