use crate::{
    compositor::candidates::{
        AtmosphereMode, ColorTemperature, EntryPattern, InteractionShape, Scene, TransitionStyle,
        TypographyMood,
    },
    derive::{atmosphere::AtmosphereConfig, motion::MotionConfig, palette::Palette},
    foundation::error::{NaviCueError, NaviCueResult},
    taxonomy::{
        axes::{InteractionHook, KbeAxis, TimeContext},
        form::Form,
        mechanism::Mechanism,
        signature::SignatureKey,
    },
};

/// Everything the compositor needs to derive one specimen.
///
/// Accepts both snake_case and the camelCase spellings used by specimen sources:
///
/// ```
/// let input: navicue::CompositorInput = serde_json::from_str(r#"{
///     "signature": "sacred_ordinary", "form": "Practice", "chrono": "morning",
///     "kbe": "b", "hook": "tap", "specimenSeed": 1031, "isSeal": false
/// }"#).unwrap();
/// assert_eq!(input.specimen_seed, 1031);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompositorInput {
    /// Primary visual identity.
    pub signature: SignatureKey,
    /// Narrative form.
    pub form: Form,
    /// Time-of-day context.
    pub chrono: TimeContext,
    /// Knowing / believing / embodying profile.
    pub kbe: KbeAxis,
    /// Gesture the specimen asks for.
    pub hook: InteractionHook,
    /// Stable, globally unique specimen id; also the PRNG seed.
    #[serde(alias = "specimenSeed")]
    pub specimen_seed: i64,
    /// Capstone of its series.
    #[serde(default, alias = "isSeal")]
    pub is_seal: bool,
    /// Mechanism label; nudges the palette.
    #[serde(default)]
    pub mechanism: Mechanism,
}

impl CompositorInput {
    /// Unsealed input with an empty mechanism.
    pub fn new(
        signature: SignatureKey,
        form: Form,
        chrono: TimeContext,
        kbe: KbeAxis,
        hook: InteractionHook,
        specimen_seed: i64,
    ) -> Self {
        Self {
            signature,
            form,
            chrono,
            kbe,
            hook,
            specimen_seed,
            is_seal: false,
            mechanism: Mechanism::default(),
        }
    }

    /// Set the seal flag.
    pub fn sealed(mut self, is_seal: bool) -> Self {
        self.is_seal = is_seal;
        self
    }

    /// Set the mechanism label.
    pub fn with_mechanism(mut self, mechanism: impl Into<Mechanism>) -> Self {
        self.mechanism = mechanism.into();
        self
    }

    /// Same input with a different seed.
    pub fn with_seed(mut self, specimen_seed: i64) -> Self {
        self.specimen_seed = specimen_seed;
        self
    }

    /// Parse an input from a JSON string.
    pub fn from_json_str(s: &str) -> NaviCueResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| NaviCueError::serde(format!("parse compositor input JSON: {e}")))
    }
}

/// Rendered type sizes in px, after safety clamps.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TypeScale {
    /// Headline size.
    pub display_px: f64,
    /// Body copy size.
    pub body_px: f64,
    /// Caption and hint size.
    pub caption_px: f64,
}

/// Seed-dependent composition choices for one specimen.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Composition {
    /// Layout scene.
    pub scene: Scene,
    /// Ambient mode.
    pub atmosphere_mode: AtmosphereMode,
    /// Entry choreography.
    pub entry_pattern: EntryPattern,
    /// Gesture shape; always compatible with the input hook.
    pub interaction_shape: InteractionShape,
    /// Color grading.
    pub color_temperature: ColorTemperature,
    /// Typographic voice.
    pub typography_mood: TypographyMood,
    /// Exit choreography.
    pub transition_style: TransitionStyle,
    /// Type sizes.
    pub type_scale: TypeScale,
    /// Overall intensity in `[0, 1]`; sealed specimens are fully intensified.
    pub intensity: f64,
    /// Whether this is a sealed capstone composition.
    pub sealed: bool,
}

/// Full compositor output.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct NaviCueBundle {
    /// Color roles.
    pub palette: Palette,
    /// Ambient behavior.
    pub atmosphere: AtmosphereConfig,
    /// Entry/exit timing.
    pub motion: MotionConfig,
    /// Seeded composition.
    pub composition: Composition,
}

impl NaviCueBundle {
    /// The `(scene, entry pattern, interaction shape)` triple used for variety accounting.
    pub fn variety_key(&self) -> (Scene, EntryPattern, InteractionShape) {
        (
            self.composition.scene,
            self.composition.entry_pattern,
            self.composition.interaction_shape,
        )
    }
}
