use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        NaviCueError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        NaviCueError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn unknown_variant_lists_expected_values() {
    let err = NaviCueError::unknown_variant("form", "Volcano", &["cosmos", "ocean"]);
    let msg = err.to_string();
    assert!(msg.contains("unknown form 'Volcano'"));
    assert!(msg.contains("cosmos, ocean"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = NaviCueError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
