use super::ClosedSet;

/// Narrative form; selects the atmosphere archetype and the scene family.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum Form {
    /// A repeated, embodied practice.
    Practice,
    /// Stars, orbits, scale.
    Cosmos,
    /// Tides and waves.
    Ocean,
    /// Heat, sparks, kindling.
    Ember,
    /// Signals and logic.
    Circuit,
    /// Growth and tending.
    Garden,
    /// Reflection and self-regard.
    Mirror,
    /// Crossing points and doorways.
    Threshold,
    /// Turbulence and weather.
    Storm,
    /// Quiet and rest.
    Stillness,
}

impl Form {
    /// Every form, in canonical order.
    pub const ALL: [Form; 10] = [
        Form::Practice,
        Form::Cosmos,
        Form::Ocean,
        Form::Ember,
        Form::Circuit,
        Form::Garden,
        Form::Mirror,
        Form::Threshold,
        Form::Storm,
        Form::Stillness,
    ];
}

impl ClosedSet for Form {
    const AXIS: &'static str = "form";

    fn all() -> &'static [Self] {
        &Self::ALL
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Practice => "practice",
            Self::Cosmos => "cosmos",
            Self::Ocean => "ocean",
            Self::Ember => "ember",
            Self::Circuit => "circuit",
            Self::Garden => "garden",
            Self::Mirror => "mirror",
            Self::Threshold => "threshold",
            Self::Storm => "storm",
            Self::Stillness => "stillness",
        }
    }
}

super::closed_set_traits!(Form);
