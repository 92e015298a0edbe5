use super::*;

#[test]
fn every_curve_pins_endpoints() {
    for ease in Ease::ALL {
        assert!(ease.apply(0.0).abs() < 1e-12, "{ease:?} at 0");
        assert!((ease.apply(1.0) - 1.0).abs() < 1e-12, "{ease:?} at 1");
    }
}

#[test]
fn inputs_are_clamped() {
    for ease in Ease::ALL {
        assert_eq!(ease.apply(-3.0), ease.apply(0.0));
        assert_eq!(ease.apply(4.0), ease.apply(1.0));
        assert_eq!(ease.apply(f64::NAN), ease.apply(0.0));
    }
}

#[test]
fn in_out_curves_hit_midpoint() {
    for ease in [Ease::InOutQuad, Ease::InOutCubic, Ease::InOutSine] {
        assert!((ease.apply(0.5) - 0.5).abs() < 1e-12, "{ease:?}");
    }
}

#[test]
fn serialized_names_are_snake_case() {
    assert_eq!(
        serde_json::to_string(&Ease::InOutSine).unwrap(),
        "\"in_out_sine\""
    );
    let e: Ease = serde_json::from_str("\"out_expo\"").unwrap();
    assert_eq!(e, Ease::OutExpo);
}
