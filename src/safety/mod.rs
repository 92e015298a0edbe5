//! Total clamping functions applied to every render-facing number.

pub(crate) mod clamps;
