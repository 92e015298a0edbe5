//! Seeded composition of a full NaviCue bundle.

pub(crate) mod candidates;
pub(crate) mod compose;
pub(crate) mod input;
