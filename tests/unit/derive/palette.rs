use super::*;

const MECHANISMS: [&str; 7] = [
    "",
    "Metacognition",
    "Somatic Regulation",
    "Self-Compassion",
    "Values Clarification",
    "exposure",
    "🜂 unknown mechanism 🜄",
];

fn all_palettes() -> Vec<(SignatureKey, KbeAxis, &'static str, Palette)> {
    let mut out = Vec::new();
    for sig in SignatureKey::ALL {
        for kbe in KbeAxis::ALL {
            for m in MECHANISMS {
                out.push((sig, kbe, m, derive_palette(sig, &Mechanism::new(m), kbe)));
            }
        }
    }
    out
}

#[test]
fn palette_is_pure() {
    let m = Mechanism::new("Metacognition");
    let a = derive_palette(SignatureKey::PatternGlitch, &m, KbeAxis::Knowing);
    let b = derive_palette(SignatureKey::PatternGlitch, &m, KbeAxis::Knowing);
    assert_eq!(a, b);
}

#[test]
fn contrast_and_hue_separation_hold_everywhere() {
    for (sig, kbe, m, p) in all_palettes() {
        p.validate()
            .unwrap_or_else(|e| panic!("{sig}/{kbe}/{m:?}: {e}"));
        assert!(hue_distance(p.primary.h, p.accent.h) >= MIN_ACCENT_HUE_DISTANCE);
        assert!(contrast_ratio(p.text, p.background.top) >= MIN_TEXT_CONTRAST);
        assert!(contrast_ratio(p.text, p.background.bottom) >= MIN_TEXT_CONTRAST);
        assert!(
            contrast_ratio(p.text_secondary, p.background.bottom) >= MIN_SECONDARY_TEXT_CONTRAST
        );
    }
}

#[test]
fn mechanism_changes_saturation_or_lightness_but_not_hue() {
    let base = derive_palette(
        SignatureKey::SacredOrdinary,
        &Mechanism::new("Metacognition"),
        KbeAxis::Believing,
    );
    let other = derive_palette(
        SignatureKey::SacredOrdinary,
        &Mechanism::new("Somatic Regulation"),
        KbeAxis::Believing,
    );
    assert_eq!(base.primary.h, other.primary.h);
    assert!(base.primary.s != other.primary.s || base.primary.l != other.primary.l);
}

#[test]
fn kbe_pulls_hue_cooler_or_warmer() {
    let m = Mechanism::default();
    let sig = SignatureKey::SensoryCinema; // hue 12
    let knowing = derive_palette(sig, &m, KbeAxis::Knowing);
    let believing = derive_palette(sig, &m, KbeAxis::Believing);
    let embodying = derive_palette(sig, &m, KbeAxis::Embodying);
    assert_eq!(believing.primary.h, 12.0);
    // Knowing moves toward 220 (the short way round from 12 is downward through 0).
    assert_eq!(knowing.primary.h, 2.0);
    // Embodying moves toward 30.
    assert_eq!(embodying.primary.h, 24.0);
    assert!(embodying.primary_glow.a > knowing.primary_glow.a);
}

#[test]
fn close_accent_offsets_are_rotated() {
    let (hue, rotations) = separate_accent_hue(150.0, 162.0);
    assert_eq!(rotations, 1);
    assert_eq!(hue, 199.0);

    let (hue, rotations) = separate_accent_hue(100.0, 300.0);
    assert_eq!(rotations, 0);
    assert_eq!(hue, 300.0);

    let p = derive_palette(
        SignatureKey::PatternGlitch,
        &Mechanism::default(),
        KbeAxis::Believing,
    );
    assert!(hue_distance(p.primary.h, p.accent.h) >= MIN_ACCENT_HUE_DISTANCE);
}

#[test]
fn validate_rejects_broken_palettes() {
    let mut p = derive_palette(
        SignatureKey::WitnessRitual,
        &Mechanism::default(),
        KbeAxis::Believing,
    );
    p.accent = p.primary;
    assert!(p.validate().is_err());

    let mut p = derive_palette(
        SignatureKey::WitnessRitual,
        &Mechanism::default(),
        KbeAxis::Believing,
    );
    p.text = p.background.top;
    assert!(p.validate().is_err());
}
