use super::ClosedSet;

/// Primary visual-identity axis of a specimen.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum SignatureKey {
    /// Warm, everyday-made-holy.
    SacredOrdinary,
    /// Quiet observance and ritual repetition.
    WitnessRitual,
    /// Exact, spare, lyrical.
    PoeticPrecision,
    /// Measured wonder.
    ScienceXSoul,
    /// Paradox and open questions.
    KoanParadox,
    /// Broken patterns, interference.
    PatternGlitch,
    /// Rich, filmic sensation.
    SensoryCinema,
    /// Absence, memory, faint presence of others.
    RelationalGhost,
}

/// Mood class attached to each signature's hue family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    /// Earthy and steady.
    Grounded,
    /// Hushed and devotional.
    Reverent,
    /// Crisp and exact.
    Precise,
    /// Bright, clear, curious.
    Luminous,
    /// Ambivalent and unresolved.
    Paradoxical,
    /// Jittery and electric.
    Glitched,
    /// Saturated and dramatic.
    Cinematic,
    /// Pale and distant.
    Spectral,
}

/// Static hue family of a signature.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HueFamily {
    /// Base hue in degrees.
    pub hue: f64,
    /// Base saturation.
    pub saturation: f64,
    /// Base lightness of the primary role.
    pub lightness: f64,
    /// Nominal accent offset from the base hue, in degrees.
    pub accent_offset: f64,
    /// Mood class.
    pub mood: Mood,
}

impl SignatureKey {
    /// Every signature, in canonical order.
    pub const ALL: [SignatureKey; 8] = [
        SignatureKey::SacredOrdinary,
        SignatureKey::WitnessRitual,
        SignatureKey::PoeticPrecision,
        SignatureKey::ScienceXSoul,
        SignatureKey::KoanParadox,
        SignatureKey::PatternGlitch,
        SignatureKey::SensoryCinema,
        SignatureKey::RelationalGhost,
    ];

    /// The signature's hue family. This table is the canonical color identity.
    pub fn hue_family(self) -> HueFamily {
        let (hue, saturation, lightness, accent_offset, mood) = match self {
            Self::SacredOrdinary => (38.0, 0.55, 0.62, 160.0, Mood::Grounded),
            Self::WitnessRitual => (265.0, 0.40, 0.66, 140.0, Mood::Reverent),
            Self::PoeticPrecision => (205.0, 0.48, 0.64, 18.0, Mood::Precise),
            Self::ScienceXSoul => (175.0, 0.52, 0.58, 110.0, Mood::Luminous),
            Self::KoanParadox => (300.0, 0.35, 0.68, 180.0, Mood::Paradoxical),
            Self::PatternGlitch => (150.0, 0.62, 0.56, 12.0, Mood::Glitched),
            Self::SensoryCinema => (12.0, 0.60, 0.60, 200.0, Mood::Cinematic),
            Self::RelationalGhost => (230.0, 0.28, 0.70, 95.0, Mood::Spectral),
        };
        HueFamily {
            hue,
            saturation,
            lightness,
            accent_offset,
            mood,
        }
    }
}

impl ClosedSet for SignatureKey {
    const AXIS: &'static str = "signature";

    fn all() -> &'static [Self] {
        &Self::ALL
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::SacredOrdinary => "sacred_ordinary",
            Self::WitnessRitual => "witness_ritual",
            Self::PoeticPrecision => "poetic_precision",
            Self::ScienceXSoul => "science_x_soul",
            Self::KoanParadox => "koan_paradox",
            Self::PatternGlitch => "pattern_glitch",
            Self::SensoryCinema => "sensory_cinema",
            Self::RelationalGhost => "relational_ghost",
        }
    }
}

super::closed_set_traits!(SignatureKey);
