use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        FramelineError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        FramelineError::animation("x")
            .to_string()
            .contains("animation error:")
    );
    assert!(
        FramelineError::evaluation("x")
            .to_string()
            .contains("evaluation error:")
    );
    assert!(
        FramelineError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = FramelineError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
