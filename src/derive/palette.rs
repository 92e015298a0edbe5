use crate::{
    foundation::color::{Hsla, contrast_ratio},
    foundation::error::{NaviCueError, NaviCueResult},
    foundation::math::{hue_distance, shift_hue_toward, signed_unit_from_bits, wrap_hue},
    taxonomy::{axes::KbeAxis, mechanism::Mechanism, signature::Mood, signature::SignatureKey},
};

/// Minimum circular distance between primary and accent hues, in degrees.
pub const MIN_ACCENT_HUE_DISTANCE: f64 = 30.0;
/// Fixed rotation applied to the accent hue while it is too close to the primary.
pub const ACCENT_ROTATION_STEP: f64 = 37.0;
/// Minimum WCAG contrast of `text` against each background stop.
pub const MIN_TEXT_CONTRAST: f64 = 7.0;
/// Minimum WCAG contrast of `text_secondary` against each background stop.
pub const MIN_SECONDARY_TEXT_CONTRAST: f64 = 4.5;

const MECHANISM_SAT_NUDGE: f64 = 0.08;
const MECHANISM_LIGHT_NUDGE: f64 = 0.06;
const MAX_ACCENT_ROTATIONS: usize = 12;
const CONTRAST_LIFT_STEP: f64 = 0.02;

/// Two-stop vertical background gradient.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BackgroundGradient {
    /// First stop.
    pub top: Hsla,
    /// Second stop.
    pub bottom: Hsla,
    /// CSS gradient angle in degrees.
    pub angle_deg: f64,
}

/// Derived color roles for one specimen.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Palette {
    /// Mood class of the signature's hue family.
    pub mood: Mood,
    /// Main identity color.
    pub primary: Hsla,
    /// Translucent primary for washes and fills.
    pub primary_faint: Hsla,
    /// Lifted, translucent primary for glows.
    pub primary_glow: Hsla,
    /// Secondary identity color, hue-separated from primary.
    pub accent: Hsla,
    /// Translucent accent for glows.
    pub accent_glow: Hsla,
    /// Body text.
    pub text: Hsla,
    /// Secondary text.
    pub text_secondary: Hsla,
    /// Hints and captions; not contrast-bearing.
    pub text_faint: Hsla,
    /// Background gradient.
    pub background: BackgroundGradient,
}

struct KbeProfile {
    hue_pull: Option<(f64, f64)>, // (target hue, max degrees)
    sat_mult: f64,
    light_shift: f64,
    glow_alpha: f64,
    faint_alpha: f64,
}

fn kbe_profile(kbe: KbeAxis) -> KbeProfile {
    match kbe {
        KbeAxis::Knowing => KbeProfile {
            hue_pull: Some((220.0, 10.0)),
            sat_mult: 0.90,
            light_shift: 0.04,
            glow_alpha: 0.35,
            faint_alpha: 0.12,
        },
        KbeAxis::Believing => KbeProfile {
            hue_pull: None,
            sat_mult: 1.00,
            light_shift: 0.0,
            glow_alpha: 0.45,
            faint_alpha: 0.15,
        },
        KbeAxis::Embodying => KbeProfile {
            hue_pull: Some((30.0, 12.0)),
            sat_mult: 1.10,
            light_shift: -0.03,
            glow_alpha: 0.55,
            faint_alpha: 0.18,
        },
    }
}

/// Rotate `candidate` by [`ACCENT_ROTATION_STEP`] until it is far enough from `primary`.
///
/// Returns the resolved hue and the number of rotations applied.
pub(crate) fn separate_accent_hue(primary: f64, candidate: f64) -> (f64, usize) {
    let mut hue = wrap_hue(candidate);
    for rotations in 0..MAX_ACCENT_ROTATIONS {
        if hue_distance(primary, hue) >= MIN_ACCENT_HUE_DISTANCE {
            return (hue, rotations);
        }
        hue = wrap_hue(hue + ACCENT_ROTATION_STEP);
    }
    (wrap_hue(primary + 180.0), MAX_ACCENT_ROTATIONS)
}

fn min_contrast(color: Hsla, bg: &BackgroundGradient) -> f64 {
    contrast_ratio(color, bg.top).min(contrast_ratio(color, bg.bottom))
}

/// Raise lightness until `color` reaches `min` contrast against both background stops.
fn lift_for_contrast(mut color: Hsla, bg: &BackgroundGradient, min: f64, role: &str) -> Hsla {
    let start = color.l;
    while min_contrast(color, bg) < min && color.l < 1.0 {
        color = color.with_lightness(color.l + CONTRAST_LIFT_STEP);
    }
    if color.l != start {
        tracing::debug!(role, from = start, to = color.l, "lifted text lightness for contrast");
    }
    color
}

/// Derive the palette for `(signature, mechanism, kbe)`.
///
/// Pure: no seed is involved. The mechanism nudges saturation and lightness only; the hue
/// family is fixed by the signature and pulled slightly cooler or warmer by `kbe`.
pub fn derive_palette(signature: SignatureKey, mechanism: &Mechanism, kbe: KbeAxis) -> Palette {
    let family = signature.hue_family();
    let profile = kbe_profile(kbe);

    let h = mechanism.stable_hash();
    let sat = family.saturation + signed_unit_from_bits(h, 0) * MECHANISM_SAT_NUDGE;
    let light = family.lightness + signed_unit_from_bits(h, 16) * MECHANISM_LIGHT_NUDGE;

    let hue = match profile.hue_pull {
        Some((target, amount)) => shift_hue_toward(family.hue, target, amount),
        None => wrap_hue(family.hue),
    };
    let sat = (sat * profile.sat_mult).clamp(0.15, 0.95);
    let light = (light + profile.light_shift).clamp(0.45, 0.78);

    let primary = Hsla::new(hue, sat, light, 1.0);
    let primary_faint = primary.with_alpha(profile.faint_alpha);
    let primary_glow = Hsla::new(
        hue,
        (sat + 0.10).min(1.0),
        (light + 0.10).min(0.90),
        profile.glow_alpha,
    );

    let (accent_hue, rotations) = separate_accent_hue(primary.h, primary.h + family.accent_offset);
    if rotations > 0 {
        tracing::debug!(
            signature = %signature,
            rotations,
            accent_hue,
            "rotated accent hue away from primary"
        );
    }
    let accent = Hsla::new(accent_hue, (sat * 0.9).max(0.15), light, 1.0);
    let accent_glow = accent.with_alpha(profile.glow_alpha * 0.8);

    let background = BackgroundGradient {
        top: Hsla::new(hue, 0.35, 0.07, 1.0),
        bottom: Hsla::new(hue, 0.30, 0.12, 1.0),
        angle_deg: 180.0,
    };

    let text = lift_for_contrast(
        Hsla::new(hue, 0.15, 0.90, 1.0),
        &background,
        MIN_TEXT_CONTRAST,
        "text",
    );
    let text_secondary = lift_for_contrast(
        Hsla::new(hue, 0.12, 0.72, 1.0),
        &background,
        MIN_SECONDARY_TEXT_CONTRAST,
        "text_secondary",
    );
    let text_faint = Hsla::new(hue, 0.10, 0.55, 0.60);

    Palette {
        mood: family.mood,
        primary,
        primary_faint,
        primary_glow,
        accent,
        accent_glow,
        text,
        text_secondary,
        text_faint,
        background,
    }
}

impl Palette {
    /// Check the hue-separation and contrast invariants.
    pub fn validate(&self) -> NaviCueResult<()> {
        let d = hue_distance(self.primary.h, self.accent.h);
        if d < MIN_ACCENT_HUE_DISTANCE {
            return Err(NaviCueError::validation(format!(
                "accent hue is {d:.1}° from primary (minimum {MIN_ACCENT_HUE_DISTANCE}°)"
            )));
        }
        for (role, color, min) in [
            ("text", self.text, MIN_TEXT_CONTRAST),
            (
                "text_secondary",
                self.text_secondary,
                MIN_SECONDARY_TEXT_CONTRAST,
            ),
        ] {
            let c = min_contrast(color, &self.background);
            if c < min {
                return Err(NaviCueError::validation(format!(
                    "{role} contrast {c:.2} is below {min}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/derive/palette.rs"]
mod tests;
