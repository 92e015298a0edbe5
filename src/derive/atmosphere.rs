use crate::{
    animation::ease::Ease,
    derive::palette::Palette,
    foundation::color::Hsla,
    foundation::math::{lerp, quantize},
    safety::clamps::{clamp_opacity, clamp_stroke_px},
    taxonomy::{form::Form, signature::SignatureKey},
};

/// Shape of the ambient layer behind a specimen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AtmosphereArchetype {
    /// A single soft glow that swells with the breath.
    BreathingGlow,
    /// Particles orbiting a center.
    RadialParticles,
    /// Layered horizontal wave lines.
    WaveLines,
    /// Sparks drifting upward.
    RisingSparks,
    /// A lattice of nodes pulsing in turn.
    GridPulse,
    /// Slow, sparse motes.
    FloatingMotes,
    /// A motionless glow.
    StaticGlow,
    /// Rings expanding from the center.
    ConcentricRings,
    /// Dense, swirling particles.
    TurbulentField,
}

/// How ambient elements move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotionStyle {
    /// No translation.
    Still,
    /// Slow random drift.
    Drift,
    /// Circular paths.
    Orbit,
    /// Sinusoidal undulation.
    Undulate,
    /// Upward travel.
    Rise,
    /// In-place scale/opacity pulses.
    Pulse,
    /// Vortex-like rotation.
    Swirl,
    /// Radial growth.
    Expand,
}

/// Breathing rhythm parameters; the renderer samples [`BreathConfig::progress_at`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BreathConfig {
    /// Full inhale + exhale cycle.
    pub cycle_ms: u32,
    /// Fraction of the cycle spent inhaling, in `(0, 1)`.
    pub inhale_ratio: f64,
    /// Curve applied to both halves of the cycle.
    pub ease: Ease,
    /// Opacity at the bottom of the exhale.
    pub min_opacity: f64,
    /// Opacity at the top of the inhale.
    pub max_opacity: f64,
}

impl BreathConfig {
    /// Breath progress in `[0, 1]` at `elapsed_ms` (0 = fully exhaled, 1 = fully inhaled).
    pub fn progress_at(&self, elapsed_ms: f64) -> f64 {
        if !elapsed_ms.is_finite() || self.cycle_ms == 0 {
            return 0.0;
        }
        let cycle = f64::from(self.cycle_ms);
        let phase = elapsed_ms.rem_euclid(cycle) / cycle;
        let inhale = self.inhale_ratio.clamp(0.05, 0.95);
        if phase < inhale {
            self.ease.apply(phase / inhale)
        } else {
            self.ease.apply(1.0 - (phase - inhale) / (1.0 - inhale))
        }
    }

    /// Opacity of the breathing element at `elapsed_ms`.
    pub fn opacity_at(&self, elapsed_ms: f64) -> f64 {
        clamp_opacity(lerp(
            self.min_opacity,
            self.max_opacity,
            self.progress_at(elapsed_ms),
        ))
    }
}

/// Ambient behavior descriptor consumed by render layers.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AtmosphereConfig {
    /// Archetype selected by the form.
    pub archetype: AtmosphereArchetype,
    /// Movement of ambient elements.
    pub motion_style: MotionStyle,
    /// Number of particles, lines or rings (0 for glow archetypes).
    pub particle_count: u32,
    /// Travel speed in px/s.
    pub particle_speed: f64,
    /// Particle diameter in px.
    pub particle_size_px: f64,
    /// Main ambient color.
    pub particle_color: Hsla,
    /// Secondary ambient color.
    pub secondary_color: Hsla,
    /// Blur radius of glows in px.
    pub glow_radius_px: f64,
    /// Stroke width for line-based archetypes.
    pub stroke_width_px: f64,
    /// Resting opacity of the ambient layer.
    pub base_opacity: f64,
    /// Breathing rhythm.
    pub breath: BreathConfig,
}

struct ArchetypeRanges {
    count: (u32, u32),
    speed: (f64, f64),
    size_px: (f64, f64),
    cycle_ms: (u32, u32), // (calm, energetic)
    stroke_px: (f64, f64),
    glow_px: (f64, f64),
    opacity: (f64, f64),
    style: MotionStyle,
    ease: Ease,
}

/// Archetype for each form.
pub fn archetype_for(form: Form) -> AtmosphereArchetype {
    match form {
        Form::Practice => AtmosphereArchetype::BreathingGlow,
        Form::Cosmos => AtmosphereArchetype::RadialParticles,
        Form::Ocean => AtmosphereArchetype::WaveLines,
        Form::Ember => AtmosphereArchetype::RisingSparks,
        Form::Circuit => AtmosphereArchetype::GridPulse,
        Form::Garden => AtmosphereArchetype::FloatingMotes,
        Form::Mirror => AtmosphereArchetype::StaticGlow,
        Form::Threshold => AtmosphereArchetype::ConcentricRings,
        Form::Storm => AtmosphereArchetype::TurbulentField,
        Form::Stillness => AtmosphereArchetype::StaticGlow,
    }
}

fn ranges(archetype: AtmosphereArchetype) -> ArchetypeRanges {
    use AtmosphereArchetype as A;
    let r = |count, speed, size_px, cycle_ms, stroke_px, glow_px, opacity, style, ease| {
        ArchetypeRanges {
            count,
            speed,
            size_px,
            cycle_ms,
            stroke_px,
            glow_px,
            opacity,
            style,
            ease,
        }
    };
    match archetype {
        A::BreathingGlow => r(
            (0, 0),
            (0.0, 0.0),
            (0.0, 0.0),
            (6000, 4000),
            (1.0, 1.5),
            (60.0, 120.0),
            (0.35, 0.60),
            MotionStyle::Expand,
            Ease::InOutSine,
        ),
        A::RadialParticles => r(
            (40, 120),
            (4.0, 14.0),
            (1.0, 3.0),
            (9000, 5000),
            (0.5, 1.0),
            (8.0, 20.0),
            (0.40, 0.80),
            MotionStyle::Orbit,
            Ease::InOutSine,
        ),
        A::WaveLines => r(
            (3, 8),
            (10.0, 30.0),
            (8.0, 24.0),
            (8000, 4500),
            (1.0, 2.0),
            (6.0, 14.0),
            (0.30, 0.60),
            MotionStyle::Undulate,
            Ease::InOutQuad,
        ),
        A::RisingSparks => r(
            (20, 70),
            (12.0, 40.0),
            (1.5, 3.5),
            (5000, 2800),
            (0.5, 1.0),
            (10.0, 24.0),
            (0.50, 0.90),
            MotionStyle::Rise,
            Ease::OutQuad,
        ),
        A::GridPulse => r(
            (16, 64),
            (0.0, 6.0),
            (2.0, 4.0),
            (4000, 2200),
            (0.75, 1.25),
            (4.0, 10.0),
            (0.25, 0.55),
            MotionStyle::Pulse,
            Ease::InOutCubic,
        ),
        A::FloatingMotes => r(
            (15, 50),
            (2.0, 8.0),
            (2.0, 5.0),
            (10000, 6000),
            (0.5, 1.0),
            (10.0, 18.0),
            (0.35, 0.70),
            MotionStyle::Drift,
            Ease::InOutSine,
        ),
        A::StaticGlow => r(
            (0, 0),
            (0.0, 0.0),
            (0.0, 0.0),
            (12000, 8000),
            (0.75, 1.0),
            (80.0, 140.0),
            (0.25, 0.45),
            MotionStyle::Still,
            Ease::InOutSine,
        ),
        A::ConcentricRings => r(
            (3, 7),
            (3.0, 9.0),
            (0.0, 0.0),
            (7000, 4000),
            (0.75, 1.75),
            (6.0, 12.0),
            (0.30, 0.60),
            MotionStyle::Expand,
            Ease::OutCubic,
        ),
        A::TurbulentField => r(
            (60, 160),
            (20.0, 60.0),
            (1.0, 2.5),
            (3500, 2000),
            (0.5, 1.0),
            (6.0, 16.0),
            (0.45, 0.85),
            MotionStyle::Swirl,
            Ease::InOutQuad,
        ),
    }
}

/// `(energy, density)` of a signature, both in `[0, 1]`.
pub fn signature_energy(signature: SignatureKey) -> (f64, f64) {
    match signature {
        SignatureKey::SacredOrdinary => (0.35, 0.45),
        SignatureKey::WitnessRitual => (0.20, 0.35),
        SignatureKey::PoeticPrecision => (0.45, 0.30),
        SignatureKey::ScienceXSoul => (0.55, 0.60),
        SignatureKey::KoanParadox => (0.30, 0.50),
        SignatureKey::PatternGlitch => (0.90, 0.80),
        SignatureKey::SensoryCinema => (0.70, 0.75),
        SignatureKey::RelationalGhost => (0.15, 0.25),
    }
}

/// Derive ambient behavior. Pure and seed-free: everything follows from the inputs.
pub fn derive_atmosphere(
    palette: &Palette,
    signature: SignatureKey,
    form: Form,
) -> AtmosphereConfig {
    let archetype = archetype_for(form);
    let r = ranges(archetype);
    let (energy, density) = signature_energy(signature);

    let count = lerp(f64::from(r.count.0), f64::from(r.count.1), density).round() as u32;
    let cycle_ms = lerp(f64::from(r.cycle_ms.0), f64::from(r.cycle_ms.1), energy).round() as u32;
    let base_opacity = clamp_opacity(quantize(lerp(r.opacity.0, r.opacity.1, energy)));

    AtmosphereConfig {
        archetype,
        motion_style: r.style,
        particle_count: count,
        particle_speed: quantize(lerp(r.speed.0, r.speed.1, energy)),
        // Denser fields use smaller particles.
        particle_size_px: quantize(lerp(r.size_px.1, r.size_px.0, density)),
        particle_color: palette.primary_glow,
        secondary_color: palette.accent_glow,
        glow_radius_px: quantize(lerp(r.glow_px.1, r.glow_px.0, density)),
        stroke_width_px: clamp_stroke_px(quantize(lerp(r.stroke_px.0, r.stroke_px.1, density))),
        base_opacity,
        breath: BreathConfig {
            cycle_ms,
            inhale_ratio: quantize(0.40 + 0.10 * (1.0 - energy)),
            ease: r.ease,
            min_opacity: clamp_opacity(quantize(base_opacity * 0.5)),
            max_opacity: base_opacity,
        },
    }
}

#[cfg(test)]
#[path = "../../tests/unit/derive/atmosphere.rs"]
mod tests;
