use super::*;

fn fps30() -> Fps {
    Fps::new(30, 1).unwrap()
}

#[test]
fn tap_pulse_is_a_rectangular_window() {
    for f in 0..30u64 {
        let state = sample(f, fps30());
        if (15..20).contains(&f) {
            assert_eq!(state.tap_multiplier, 0.97, "frame {f}");
        } else {
            assert_eq!(state.tap_multiplier, 1.0, "frame {f}");
        }
    }
}

#[test]
fn tap_multiplies_the_spring() {
    for f in [14u64, 15, 17, 19, 20] {
        let state = sample(f, fps30());
        assert_eq!(state.card_scale(), state.card_spring * state.tap_multiplier);
    }
    let pressed = sample(16, fps30());
    assert!(pressed.card_scale() < pressed.card_spring);
}

#[test]
fn card_node_uses_final_scale() {
    let state = sample(17, fps30());
    let node = state.to_node();
    assert_eq!(node.find("card").unwrap().style.scale, state.card_scale());
    assert_eq!(node.find("title").unwrap().text_content(), Some("GPT-5"));
    assert!(node.find("check").is_some());
}
