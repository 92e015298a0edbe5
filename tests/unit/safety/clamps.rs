use super::*;

const SAMPLES: [f64; 14] = [
    f64::NAN,
    f64::INFINITY,
    f64::NEG_INFINITY,
    -1e300,
    -5.0,
    -0.0,
    0.0,
    0.25,
    0.5,
    1.0,
    10.9,
    11.0,
    72.0,
    1e300,
];

#[test]
fn clamps_are_idempotent() {
    for f in [clamp_font_px, clamp_opacity, clamp_stroke_px] {
        for v in SAMPLES {
            let once = f(v);
            assert_eq!(f(once).to_bits(), once.to_bits(), "input {v}");
        }
    }
}

#[test]
fn nan_clamps_like_zero() {
    for f in [clamp_font_px, clamp_opacity, clamp_stroke_px] {
        assert_eq!(f(f64::NAN).to_bits(), f(0.0).to_bits());
    }
}

#[test]
fn outputs_are_always_finite_and_in_range() {
    for v in SAMPLES {
        let font = clamp_font_px(v);
        assert!((MIN_FONT_PX..=MAX_FONT_PX).contains(&font));
        let op = clamp_opacity(v);
        assert!((0.0..=1.0).contains(&op));
        let stroke = clamp_stroke_px(v);
        assert!((MIN_STROKE_PX..=MAX_STROKE_PX).contains(&stroke));
    }
}

#[test]
fn specific_boundaries() {
    assert_eq!(clamp_font_px(9.0), 11.0);
    assert_eq!(clamp_font_px(14.0), 14.0);
    assert_eq!(clamp_opacity(f64::INFINITY), 0.0);
    assert_eq!(clamp_opacity(1.7), 1.0);
    assert_eq!(clamp_opacity(-0.0).to_bits(), 0.0f64.to_bits());
    assert_eq!(clamp_stroke_px(0.01), MIN_STROKE_PX);
}

#[test]
fn context_records_changes_and_warns_once_per_field() {
    let mut ctx = ClampContext::new();
    assert_eq!(ctx.font_px("caption", 14.0), 14.0);
    assert!(ctx.events().is_empty());

    assert_eq!(ctx.font_px("caption", 8.0), MIN_FONT_PX);
    assert_eq!(ctx.font_px("caption", 9.0), MIN_FONT_PX);
    assert_eq!(ctx.opacity("glow", f64::NAN), 0.0);

    assert_eq!(ctx.events().len(), 3);
    assert_eq!(ctx.warned_fields(), 2);
    assert_eq!(ctx.events()[0].kind, ClampKind::FontPx);
    assert_eq!(ctx.events()[2].field, "glow");
}

#[test]
fn contexts_do_not_share_state() {
    let mut a = ClampContext::new();
    a.stroke_px("ring", 0.0);
    let b = ClampContext::new();
    assert_eq!(a.warned_fields(), 1);
    assert_eq!(b.warned_fields(), 0);
}
