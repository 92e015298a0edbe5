//! Deterministic, explicitly threaded pseudo-random numbers.

pub(crate) mod seed;
