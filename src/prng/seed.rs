use crate::foundation::math::hash_str;

/// State of the SplitMix64 generator.
///
/// `Seed` is `Copy` and every draw returns the successor seed, so callers thread state
/// explicitly and no draw ever mutates shared state:
///
/// ```
/// use navicue::Seed;
///
/// let s0 = Seed::from_i64(1031);
/// let (a, s1) = s0.next();
/// let (b, _) = s1.next();
/// assert_eq!((a, b), (Seed::from_i64(1031).next().0, s1.next().0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Seed(u64);

impl Seed {
    /// State used for the integer seed `0`.
    ///
    /// Every non-zero seed keeps its own bits as state, so the positive seed
    /// `0x5EED_C0DE_D15E_A5E0` reaches this state too: it and seed `0` share one stream.
    pub const ZERO_REPLACEMENT: u64 = 0x5EED_C0DE_D15E_A5E0;

    const GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

    /// Raw state; no normalization.
    pub fn from_raw(state: u64) -> Self {
        Self(state)
    }

    /// Normalize an integer seed.
    ///
    /// `0` maps to [`Seed::ZERO_REPLACEMENT`] and so aliases that seed. Negative values are
    /// reinterpreted as their two's-complement `u64`, so `-1` and `1` stay distinct.
    pub fn from_i64(seed: i64) -> Self {
        if seed == 0 {
            Self(Self::ZERO_REPLACEMENT)
        } else {
            Self(seed as u64)
        }
    }

    /// Seed keyed by a string label (FNV-1a over its UTF-8 bytes).
    pub fn from_key(key: &str) -> Self {
        Self(hash_str(key))
    }

    /// Raw generator state.
    pub fn state(self) -> u64 {
        self.0
    }

    /// Next 64 random bits.
    pub fn next_u64(self) -> (u64, Self) {
        let state = self.0.wrapping_add(Self::GAMMA);
        let mut z = state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        (z ^ (z >> 31), Self(state))
    }

    /// Uniform value in `[0, 1)` with 53 bits of precision.
    pub fn next(self) -> (f64, Self) {
        let (v, s) = self.next_u64();
        ((v >> 11) as f64 * (1.0 / ((1u64 << 53) as f64)), s)
    }

    /// Uniform value in `[lo, hi)`; reversed bounds are swapped.
    pub fn range_f64(self, lo: f64, hi: f64) -> (f64, Self) {
        let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
        let (u, s) = self.next();
        (lo + (hi - lo) * u, s)
    }

    /// Uniform integer in `[lo, hi]` (inclusive); reversed bounds are swapped.
    pub fn range_int(self, lo: i64, hi: i64) -> (i64, Self) {
        let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
        let span = (hi as i128 - lo as i128 + 1) as u128;
        let (v, s) = self.next_u64();
        let offset = ((u128::from(v) * span) >> 64) as i128;
        ((lo as i128 + offset) as i64, s)
    }

    /// Uniform index in `[0, len)`. `len == 0` yields `None`.
    pub fn pick_index(self, len: usize) -> Option<(usize, Self)> {
        if len == 0 {
            return None;
        }
        let (v, s) = self.next_u64();
        let idx = ((u128::from(v) * len as u128) >> 64) as usize;
        Some((idx, s))
    }

    /// Uniformly pick one element of `items`. Empty slices yield `None`.
    pub fn pick<T>(self, items: &[T]) -> Option<(&T, Self)> {
        let (idx, s) = self.pick_index(items.len())?;
        Some((&items[idx], s))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/prng/seed.rs"]
mod tests;
