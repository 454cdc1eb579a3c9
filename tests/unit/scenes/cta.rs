use super::*;

fn fps30() -> Fps {
    Fps::new(30, 1).unwrap()
}

#[test]
fn float_never_decays() {
    for f in [0u64, 20, 39, 100, 1_000] {
        let state = sample(f, fps30());
        assert_eq!(state.float_y, (f as f64 * 0.08).sin() * 4.0);
    }
    // Near the peak a full thousand frames later the amplitude is intact.
    let peak = (0..2_000u64)
        .map(|f| sample(f, fps30()).float_y)
        .skip(1_000)
        .fold(f64::MIN, f64::max);
    assert!(peak > 3.99);
}

#[test]
fn button_grows_from_zero() {
    let start = sample(0, fps30());
    assert_eq!(start.button_scale, 0.0);
    assert_eq!(start.float_y, 0.0);
    assert!(sample(10, fps30()).button_scale > 0.8);
}

#[test]
fn translation_is_scaled_with_the_button() {
    let state = sample(12, fps30());
    let node = state.to_node();
    let button = node.find("button").unwrap();
    assert_eq!(button.style.scale, state.button_scale);
    assert_eq!(button.style.translate.y, state.float_y * state.button_scale);
    assert_eq!(
        node.find("label").unwrap().text_content(),
        Some("Available now")
    );
    assert!(node.find("arrow").is_some());
}
