//! Candidate lists for every composition field, keyed by the input that constrains them.
//!
//! Each list is ordered from the open/varied end to the resolved/intensified end. Sealed
//! specimens only draw from the tail of each list (see [`sealed_tail`]).

use crate::{
    derive::atmosphere::AtmosphereArchetype,
    taxonomy::{
        axes::{InteractionHook, KbeAxis, TimeContext},
        form::Form,
    },
};

/// Layout scene.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Scene {
    /// Open ground in a wood.
    Clearing,
    /// Bare, level field.
    Plain,
    /// Close, warm interior.
    Hearth,
    /// Raised focal point.
    Altar,
    /// Diffuse cloud of light.
    Nebula,
    /// Bodies circling a center.
    Orbit,
    /// Scattered linked points.
    Constellation,
    /// Empty dark field.
    Void,
    /// Edge of water and land.
    Shoreline,
    /// Small enclosed water.
    Tidepool,
    /// Distant line of sky.
    Horizon,
    /// Deep, dim water.
    Depths,
    /// Hot working space.
    Forge,
    /// Slow, contained heat.
    Kiln,
    /// Regular grid.
    Lattice,
    /// Text-first console.
    Terminal,
    /// Long receding passage.
    Corridor,
    /// Single centered figure.
    Center,
    /// Cluster of growth.
    Grove,
    /// Rows of small beginnings.
    Seedbed,
    /// Still reflecting surface.
    Pool,
    /// Mirrored double.
    Reflection,
    /// Span between two sides.
    Bridge,
    /// Framed opening.
    Doorway,
    /// Sudden turbulent weather.
    Squall,
    /// Calm center of a storm.
    Eye,
}

/// Ambient behavior mode layered on the atmosphere archetype.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum AtmosphereMode {
    /// Steady background presence.
    Ambient,
    /// Slow wandering motion.
    Drifting,
    /// Swells with the breath cycle.
    Breathing,
    /// Rhythmic beats.
    Pulsing,
    /// Continuous directional flow.
    Flowing,
    /// Brief bright flashes.
    Sparking,
    /// Rotational turbulence.
    Swirling,
    /// Outward glow.
    Radiant,
    /// Barely moving.
    Hushed,
}

/// How the specimen's content arrives.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum EntryPattern {
    /// Opacity in.
    Fade,
    /// Rise out of the background.
    Emerge,
    /// Open out from a fold.
    Unfold,
    /// Pieces gather to the center.
    Converge,
    /// Pieces fly in from all sides.
    Scatter,
    /// Grow outward from a point.
    Bloom,
    /// Arrive in concentric waves.
    Ripple,
    /// Travel up into place.
    Rise,
    /// Flash into view.
    Ignite,
    /// Build from parts in sequence.
    Assemble,
    /// Blur to sharp.
    Focus,
    /// Brighten slowly from dark.
    Dawn,
    /// Travel down into place.
    Descend,
}

/// Concrete gesture shape; every shape belongs to exactly one hook.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum InteractionShape {
    /// One tap.
    SingleTap,
    /// Several taps in order.
    TapSequence,
    /// Taps matching a beat.
    TapRhythm,
    /// Tap to uncover content.
    TapToReveal,
    /// Press and keep holding.
    PressAndHold,
    /// Hold until a meter fills.
    HoldToFill,
    /// Hold, then let go on cue.
    HoldAndRelease,
    /// Long uninterrupted hold.
    SustainedHold,
    /// Drag an item onto a target.
    DragToTarget,
    /// Trace a path.
    DragPath,
    /// Pull items together.
    DragToGather,
    /// Drag an item away to let it go.
    DragToRelease,
    /// Flick an item off screen.
    SwipeAway,
    /// Swipe items into groups.
    SwipeToSort,
    /// Swipe to uncover content.
    SwipeReveal,
    /// Swipe to clear the field.
    SwipeToClear,
    /// Type a single word.
    TypeWord,
    /// Type a short phrase.
    TypePhrase,
    /// Type a name for something.
    TypeToName,
    /// Type a commitment.
    TypeToCommit,
    /// Follow a paced breath.
    BreathPace,
    /// Count breaths.
    BreathCount,
    /// Hold the breath on cue.
    BreathHold,
    /// Match breath to motion.
    BreathSync,
    /// Watch an event unfold.
    Witness,
    /// Stay with one image.
    Dwell,
    /// Follow a moving element.
    TrackMotion,
    /// Watch a still scene.
    StillWatch,
}

/// Overall color temperature grading.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ColorTemperature {
    /// No cast.
    Neutral,
    /// Orange cast.
    Warm,
    /// Pale pink-gold.
    Dawn,
    /// Blue cast.
    Cool,
    /// High-key daylight.
    Bright,
    /// Violet-orange low light.
    Dusk,
    /// Deep amber.
    Golden,
    /// Dark blue-black.
    Deep,
    /// Silver-blue night.
    Moonlit,
}

/// Typographic voice.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum TypographyMood {
    /// Small, light, quiet.
    Whisper,
    /// Classic book serif.
    Serif,
    /// Monospaced, technical.
    Mono,
    /// Bold statement.
    Declarative,
    /// Soft rounded sans.
    Rounded,
    /// Script, personal.
    Handwritten,
    /// Large display type.
    Monumental,
}

/// How the specimen leaves.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum TransitionStyle {
    /// Break into noise and vanish.
    Dissolve,
    /// Fade into the next view.
    Crossfade,
    /// Come to rest, then fade.
    Settle,
    /// Float out of frame.
    Drift,
    /// Close through a circular mask.
    Iris,
    /// Fall into the center.
    Collapse,
    /// Swept away by a tint.
    Wash,
    /// Flare outward and vanish.
    Bloom,
    /// Break into shards.
    Shatter,
}

/// The resolved end of a candidate list: its last `ceil(n / 2)` entries.
pub fn sealed_tail<T>(list: &[T]) -> &[T] {
    let keep = list.len().div_ceil(2);
    &list[list.len() - keep..]
}

/// Scenes compatible with a form.
pub fn scenes_for(form: Form) -> &'static [Scene] {
    use Scene::*;
    match form {
        Form::Practice => &[Clearing, Plain, Hearth, Altar],
        Form::Cosmos => &[Nebula, Orbit, Constellation, Void],
        Form::Ocean => &[Shoreline, Tidepool, Horizon, Depths],
        Form::Ember => &[Hearth, Forge, Kiln, Altar],
        Form::Circuit => &[Lattice, Terminal, Corridor, Center],
        Form::Garden => &[Grove, Seedbed, Clearing, Center],
        Form::Mirror => &[Pool, Reflection, Corridor, Void],
        Form::Threshold => &[Corridor, Bridge, Doorway, Horizon],
        Form::Storm => &[Squall, Plain, Eye, Center],
        Form::Stillness => &[Plain, Pool, Void, Center],
    }
}

/// Entry patterns compatible with a form. Every list has even length; selection is stratified
/// by seed parity.
pub fn entry_patterns_for(form: Form) -> &'static [EntryPattern] {
    use EntryPattern::*;
    match form {
        Form::Practice => &[Fade, Emerge, Unfold, Converge],
        Form::Cosmos => &[Scatter, Emerge, Converge, Bloom],
        Form::Ocean => &[Ripple, Rise, Emerge, Converge],
        Form::Ember => &[Ignite, Rise, Bloom, Converge],
        Form::Circuit => &[Assemble, Scatter, Focus, Converge],
        Form::Garden => &[Emerge, Unfold, Bloom, Dawn],
        Form::Mirror => &[Fade, Focus, Ripple, Converge],
        Form::Threshold => &[Descend, Unfold, Focus, Dawn],
        Form::Storm => &[Scatter, Ignite, Descend, Focus],
        Form::Stillness => &[Fade, Emerge, Dawn, Focus],
    }
}

/// Interaction shapes compatible with a hook.
pub fn interaction_shapes_for(hook: InteractionHook) -> &'static [InteractionShape] {
    use InteractionShape::*;
    match hook {
        InteractionHook::Tap => &[SingleTap, TapSequence, TapRhythm, TapToReveal],
        InteractionHook::Hold => &[PressAndHold, HoldToFill, HoldAndRelease, SustainedHold],
        InteractionHook::Drag => &[DragToTarget, DragPath, DragToGather, DragToRelease],
        InteractionHook::Swipe => &[SwipeAway, SwipeToSort, SwipeReveal, SwipeToClear],
        InteractionHook::Type => &[TypeWord, TypePhrase, TypeToName, TypeToCommit],
        InteractionHook::Breathe => &[BreathPace, BreathCount, BreathHold, BreathSync],
        InteractionHook::Observe => &[Witness, Dwell, TrackMotion, StillWatch],
    }
}

impl InteractionShape {
    /// The only hook this shape can serve.
    pub fn hook(self) -> InteractionHook {
        use InteractionShape::*;
        match self {
            SingleTap | TapSequence | TapRhythm | TapToReveal => InteractionHook::Tap,
            PressAndHold | HoldToFill | HoldAndRelease | SustainedHold => InteractionHook::Hold,
            DragToTarget | DragPath | DragToGather | DragToRelease => InteractionHook::Drag,
            SwipeAway | SwipeToSort | SwipeReveal | SwipeToClear => InteractionHook::Swipe,
            TypeWord | TypePhrase | TypeToName | TypeToCommit => InteractionHook::Type,
            BreathPace | BreathCount | BreathHold | BreathSync => InteractionHook::Breathe,
            Witness | Dwell | TrackMotion | StillWatch => InteractionHook::Observe,
        }
    }
}

/// Atmosphere modes compatible with an archetype.
pub fn atmosphere_modes_for(archetype: AtmosphereArchetype) -> &'static [AtmosphereMode] {
    use AtmosphereArchetype as A;
    use AtmosphereMode::*;
    match archetype {
        A::BreathingGlow => &[Ambient, Breathing, Radiant],
        A::RadialParticles => &[Drifting, Swirling, Radiant],
        A::WaveLines => &[Flowing, Breathing, Hushed],
        A::RisingSparks => &[Sparking, Drifting, Radiant],
        A::GridPulse => &[Pulsing, Flowing, Hushed],
        A::FloatingMotes => &[Drifting, Breathing, Hushed],
        A::StaticGlow => &[Ambient, Hushed],
        A::ConcentricRings => &[Pulsing, Breathing, Radiant],
        A::TurbulentField => &[Swirling, Sparking, Hushed],
    }
}

/// Color temperatures compatible with a time of day.
pub fn color_temperatures_for(chrono: TimeContext) -> &'static [ColorTemperature] {
    use ColorTemperature::*;
    match chrono {
        TimeContext::Morning => &[Neutral, Warm, Dawn],
        TimeContext::Midday => &[Cool, Neutral, Bright],
        TimeContext::Evening => &[Warm, Dusk, Golden],
        TimeContext::Night => &[Cool, Deep, Moonlit],
    }
}

/// Typography moods compatible with a KBE axis value.
pub fn typography_moods_for(kbe: KbeAxis) -> &'static [TypographyMood] {
    use TypographyMood::*;
    match kbe {
        KbeAxis::Knowing => &[Mono, Serif, Declarative],
        KbeAxis::Believing => &[Whisper, Serif, Monumental],
        KbeAxis::Embodying => &[Handwritten, Rounded, Whisper],
    }
}

/// Transition styles compatible with a form.
pub fn transition_styles_for(form: Form) -> &'static [TransitionStyle] {
    use TransitionStyle::*;
    match form {
        Form::Practice => &[Dissolve, Crossfade, Settle],
        Form::Cosmos => &[Drift, Iris, Collapse],
        Form::Ocean => &[Wash, Dissolve, Settle],
        Form::Ember => &[Bloom, Dissolve, Collapse],
        Form::Circuit => &[Shatter, Crossfade, Collapse],
        Form::Garden => &[Drift, Bloom, Settle],
        Form::Mirror => &[Crossfade, Iris, Dissolve],
        Form::Threshold => &[Iris, Wash, Settle],
        Form::Storm => &[Shatter, Wash, Settle],
        Form::Stillness => &[Dissolve, Settle],
    }
}

/// Entry/transition pairs that mirror each other too closely to read as an arc.
pub fn clashes(entry: EntryPattern, transition: TransitionStyle) -> bool {
    matches!(
        (entry, transition),
        (EntryPattern::Fade, TransitionStyle::Dissolve)
            | (EntryPattern::Bloom, TransitionStyle::Bloom)
            | (EntryPattern::Scatter, TransitionStyle::Shatter)
            | (EntryPattern::Ripple, TransitionStyle::Wash)
    )
}

/// Base `(display, body, caption)` sizes in px for a typography mood, before jitter and clamps.
pub fn base_type_scale(mood: TypographyMood) -> (f64, f64, f64) {
    match mood {
        TypographyMood::Whisper => (28.0, 14.0, 10.0),
        TypographyMood::Serif => (34.0, 17.0, 12.0),
        TypographyMood::Mono => (30.0, 15.0, 12.0),
        TypographyMood::Declarative => (40.0, 18.0, 12.0),
        TypographyMood::Rounded => (32.0, 16.0, 12.0),
        TypographyMood::Handwritten => (36.0, 17.0, 11.5),
        TypographyMood::Monumental => (48.0, 18.0, 12.0),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compositor/candidates.rs"]
mod tests;
