use std::collections::BTreeSet;

/// Minimum rendered type size, in CSS pixels.
pub const MIN_FONT_PX: f64 = 11.0;
/// Maximum rendered type size, in CSS pixels.
pub const MAX_FONT_PX: f64 = 200.0;
/// Minimum visible stroke width, in CSS pixels.
pub const MIN_STROKE_PX: f64 = 0.5;
/// Maximum stroke width, in CSS pixels.
pub const MAX_STROKE_PX: f64 = 64.0;

/// Raise a font size to the legibility floor. Non-finite input yields the floor.
pub fn clamp_font_px(v: f64) -> f64 {
    if !v.is_finite() {
        return MIN_FONT_PX;
    }
    v.clamp(MIN_FONT_PX, MAX_FONT_PX)
}

/// Clamp an opacity into `[0, 1]`. Non-finite input yields `0`.
pub fn clamp_opacity(v: f64) -> f64 {
    if !v.is_finite() {
        return 0.0;
    }
    let c = v.clamp(0.0, 1.0);
    // -0.0 would serialize differently from 0.0.
    if c == 0.0 { 0.0 } else { c }
}

/// Keep a stroke width visible. Non-finite input yields the minimum.
pub fn clamp_stroke_px(v: f64) -> f64 {
    if !v.is_finite() {
        return MIN_STROKE_PX;
    }
    v.clamp(MIN_STROKE_PX, MAX_STROKE_PX)
}

/// Which clamp adjusted a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClampKind {
    /// [`clamp_font_px`].
    FontPx,
    /// [`clamp_opacity`].
    Opacity,
    /// [`clamp_stroke_px`].
    StrokePx,
}

/// One value changed by a clamp.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ClampEvent {
    /// Name of the clamped field (e.g. `composition.type_scale.caption_px`).
    pub field: String,
    /// Clamp that fired.
    pub kind: ClampKind,
    /// Value before clamping (may be NaN/∞).
    pub input: f64,
    /// Value after clamping.
    pub output: f64,
}

/// Caller-owned record of clamp adjustments.
///
/// Each distinct field warns through `tracing` only once per context; all adjustments are kept
/// in [`ClampContext::events`]. Nothing here is process-global: drop the context to reset it.
#[derive(Debug, Default)]
pub struct ClampContext {
    events: Vec<ClampEvent>,
    warned: BTreeSet<String>,
}

impl ClampContext {
    /// Fresh, empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adjustments recorded so far, in call order.
    pub fn events(&self) -> &[ClampEvent] {
        &self.events
    }

    /// Number of distinct fields that have warned.
    pub fn warned_fields(&self) -> usize {
        self.warned.len()
    }

    /// Clamp a font size, recording the change.
    pub fn font_px(&mut self, field: &str, v: f64) -> f64 {
        self.apply(field, ClampKind::FontPx, v, clamp_font_px)
    }

    /// Clamp an opacity, recording the change.
    pub fn opacity(&mut self, field: &str, v: f64) -> f64 {
        self.apply(field, ClampKind::Opacity, v, clamp_opacity)
    }

    /// Clamp a stroke width, recording the change.
    pub fn stroke_px(&mut self, field: &str, v: f64) -> f64 {
        self.apply(field, ClampKind::StrokePx, v, clamp_stroke_px)
    }

    fn apply(&mut self, field: &str, kind: ClampKind, v: f64, f: fn(f64) -> f64) -> f64 {
        let out = f(v);
        if out.to_bits() == v.to_bits() {
            return out;
        }
        if self.warned.insert(field.to_owned()) {
            tracing::warn!(field, ?kind, input = v, output = out, "value clamped for rendering");
        }
        self.events.push(ClampEvent {
            field: field.to_owned(),
            kind,
            input: v,
            output: out,
        });
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/safety/clamps.rs"]
mod tests;
