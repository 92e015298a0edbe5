use super::ClosedSet;

/// Knowing / believing / embodying intensity profile.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum KbeAxis {
    /// Cooler, sharper.
    Knowing,
    /// Neutral.
    Believing,
    /// Warmer, softer.
    Embodying,
}

impl KbeAxis {
    /// Every axis value, in canonical order.
    pub const ALL: [KbeAxis; 3] = [KbeAxis::Knowing, KbeAxis::Believing, KbeAxis::Embodying];
}

impl ClosedSet for KbeAxis {
    const AXIS: &'static str = "kbe";

    fn all() -> &'static [Self] {
        &Self::ALL
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Knowing => "knowing",
            Self::Believing => "believing",
            Self::Embodying => "embodying",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Knowing => &["k"],
            Self::Believing => &["b"],
            Self::Embodying => &["e"],
        }
    }
}

super::closed_set_traits!(KbeAxis);

/// Time-of-day context ("chrono").
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum TimeContext {
    /// Dawn to late morning.
    Morning,
    /// Around noon and the afternoon.
    Midday,
    /// Dusk.
    Evening,
    /// After dark.
    Night,
}

impl TimeContext {
    /// Every time context, in canonical order.
    pub const ALL: [TimeContext; 4] = [
        TimeContext::Morning,
        TimeContext::Midday,
        TimeContext::Evening,
        TimeContext::Night,
    ];
}

impl ClosedSet for TimeContext {
    const AXIS: &'static str = "chrono";

    fn all() -> &'static [Self] {
        &Self::ALL
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Midday => "midday",
            Self::Evening => "evening",
            Self::Night => "night",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Morning => &["dawn"],
            Self::Midday => &["afternoon", "noon"],
            Self::Evening => &["dusk"],
            Self::Night => &["late_night"],
        }
    }
}

super::closed_set_traits!(TimeContext);

/// The gesture a specimen asks of the user.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum InteractionHook {
    /// A single touch.
    Tap,
    /// Press and keep pressing.
    Hold,
    /// Move something along a path.
    Drag,
    /// A quick directional flick.
    Swipe,
    /// Enter text.
    Type,
    /// Pace with the breath.
    Breathe,
    /// Watch without touching.
    Observe,
}

impl InteractionHook {
    /// Every hook, in canonical order.
    pub const ALL: [InteractionHook; 7] = [
        InteractionHook::Tap,
        InteractionHook::Hold,
        InteractionHook::Drag,
        InteractionHook::Swipe,
        InteractionHook::Type,
        InteractionHook::Breathe,
        InteractionHook::Observe,
    ];
}

impl ClosedSet for InteractionHook {
    const AXIS: &'static str = "hook";

    fn all() -> &'static [Self] {
        &Self::ALL
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Tap => "tap",
            Self::Hold => "hold",
            Self::Drag => "drag",
            Self::Swipe => "swipe",
            Self::Type => "type",
            Self::Breathe => "breathe",
            Self::Observe => "observe",
        }
    }
}

super::closed_set_traits!(InteractionHook);
