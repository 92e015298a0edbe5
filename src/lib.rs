//! NaviCue is a deterministic compositor for guided micro-interaction specimens.
//!
//! Given a handful of discrete semantic inputs ([`CompositorInput`]) it derives a complete,
//! internally consistent design bundle ([`NaviCueBundle`]): color palette, ambient atmosphere,
//! motion timing and a seeded composition (scene, entry pattern, interaction shape, ...).
//!
//! # Pipeline overview
//!
//! 1. **Palette**: `(signature, mechanism, kbe) -> Palette` ([`derive_palette`])
//! 2. **Atmosphere**: `(palette, signature, form) -> AtmosphereConfig` ([`derive_atmosphere`])
//! 3. **Motion**: `signature -> MotionConfig` ([`derive_motion`])
//! 4. **Compose**: seed the PRNG from `specimen_seed` and select every composition field from
//!    compatibility tables, then clamp and validate ([`compose_navicue`])
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: no IO, no clock, no global state. The same input yields a bit-identical
//!   bundle in every process.
//! - **Closed inputs**: unknown labels are rejected with [`NaviCueError::UnknownVariant`].
//! - **Safe outputs**: font floors, opacity and stroke bounds and text contrast are enforced.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod compositor;
mod derive;
mod foundation;
mod prng;
mod safety;
mod taxonomy;

/// Specimen catalogs: series definitions, expansion, variety accounting.
pub mod catalog;

pub use animation::ease::Ease;
pub use catalog::{Catalog, MAX_CATALOG_LEN, MAX_SERIES_LEN, SeriesSpec, VarietyReport};
pub use compositor::candidates::{
    AtmosphereMode, ColorTemperature, EntryPattern, InteractionShape, Scene, TransitionStyle,
    TypographyMood, atmosphere_modes_for, clashes, color_temperatures_for, entry_patterns_for,
    interaction_shapes_for, scenes_for, sealed_tail, transition_styles_for, typography_moods_for,
};
pub use compositor::compose::{compose_navicue, compose_navicue_with};
pub use compositor::input::{Composition, CompositorInput, NaviCueBundle, TypeScale};
pub use derive::atmosphere::{
    AtmosphereArchetype, AtmosphereConfig, BreathConfig, MotionStyle, archetype_for,
    derive_atmosphere, signature_energy,
};
pub use derive::motion::{MotionConfig, derive_motion};
pub use derive::palette::{
    ACCENT_ROTATION_STEP, BackgroundGradient, MIN_ACCENT_HUE_DISTANCE,
    MIN_SECONDARY_TEXT_CONTRAST, MIN_TEXT_CONTRAST, Palette, derive_palette,
};
pub use foundation::color::{Hsla, Rgba8, contrast_ratio};
pub use foundation::error::{NaviCueError, NaviCueResult};
pub use prng::seed::Seed;
pub use safety::clamps::{
    ClampContext, ClampEvent, ClampKind, MAX_FONT_PX, MAX_STROKE_PX, MIN_FONT_PX, MIN_STROKE_PX,
    clamp_font_px, clamp_opacity, clamp_stroke_px,
};
pub use taxonomy::axes::{InteractionHook, KbeAxis, TimeContext};
pub use taxonomy::form::Form;
pub use taxonomy::mechanism::Mechanism;
pub use taxonomy::signature::{HueFamily, Mood, SignatureKey};
pub use taxonomy::{ClosedSet, parse_closed};
