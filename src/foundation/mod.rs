//! Shared building blocks: errors, hashing and hue math, colors.

pub(crate) mod color;
pub(crate) mod error;
pub(crate) mod math;
