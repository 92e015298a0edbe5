//! Pure derivations from semantic inputs: palette, atmosphere, motion.

pub(crate) mod atmosphere;
pub(crate) mod motion;
pub(crate) mod palette;
