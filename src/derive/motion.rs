use crate::{animation::ease::Ease, taxonomy::signature::SignatureKey};

/// Entry/exit timing of a specimen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MotionConfig {
    /// Duration of the entry animation.
    pub entry_duration_ms: u32,
    /// Named curve for the entry animation.
    pub entry_ease: Ease,
    /// Delay between staggered elements during entry.
    pub stagger_ms: u32,
    /// Duration of the exit animation.
    pub exit_duration_ms: u32,
}

/// Static motion table, one row per signature. No fallback arm.
pub fn derive_motion(signature: SignatureKey) -> MotionConfig {
    let (entry_duration_ms, entry_ease, stagger_ms, exit_duration_ms) = match signature {
        SignatureKey::SacredOrdinary => (1400, Ease::OutCubic, 120, 900),
        SignatureKey::WitnessRitual => (1800, Ease::InOutSine, 160, 1200),
        SignatureKey::PoeticPrecision => (1100, Ease::OutQuart, 80, 700),
        SignatureKey::ScienceXSoul => (1200, Ease::InOutCubic, 90, 800),
        SignatureKey::KoanParadox => (2000, Ease::InOutQuad, 200, 1400),
        SignatureKey::PatternGlitch => (650, Ease::OutExpo, 40, 400),
        SignatureKey::SensoryCinema => (1600, Ease::OutQuad, 140, 1000),
        SignatureKey::RelationalGhost => (2200, Ease::InOutSine, 180, 1500),
    };
    MotionConfig {
        entry_duration_ms,
        entry_ease,
        stagger_ms,
        exit_duration_ms,
    }
}
