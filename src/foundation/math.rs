/// FNV-1a, 64-bit. Stable across platforms; used for every label hash in the crate.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Fnv1a64(u64);

impl Fnv1a64 {
    pub(crate) const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01B3;

    pub(crate) fn new_default() -> Self {
        Self(Self::OFFSET_BASIS)
    }

    pub(crate) fn write_bytes(&mut self, bytes: &[u8]) {
        let mut h = self.0;
        for &b in bytes {
            h ^= u64::from(b);
            h = h.wrapping_mul(Self::PRIME);
        }
        self.0 = h;
    }

    pub(crate) fn finish(self) -> u64 {
        self.0
    }
}

/// FNV-1a over the exact UTF-8 bytes of `s`, no normalization.
pub(crate) fn hash_str(s: &str) -> u64 {
    let mut h = Fnv1a64::new_default();
    h.write_bytes(s.as_bytes());
    h.finish()
}

/// Map 16 bits of `h` (starting at `shift`) to `[-1, 1]`.
pub(crate) fn signed_unit_from_bits(h: u64, shift: u32) -> f64 {
    let bits = (h >> shift) & 0xffff;
    (bits as f64 / 65535.0) * 2.0 - 1.0
}

pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t.clamp(0.0, 1.0)
}

/// Round to 4 decimals so derived values print and compare identically everywhere.
pub(crate) fn quantize(v: f64) -> f64 {
    (v * 10_000.0).round() / 10_000.0
}

/// Wrap any finite hue into `[0, 360)`.
pub(crate) fn wrap_hue(h: f64) -> f64 {
    let w = h.rem_euclid(360.0);
    if w >= 360.0 { 0.0 } else { w }
}

/// Shortest circular distance between two hues, in `[0, 180]`.
pub(crate) fn hue_distance(a: f64, b: f64) -> f64 {
    let d = (wrap_hue(a) - wrap_hue(b)).abs();
    if d > 180.0 { 360.0 - d } else { d }
}

/// Move `hue` toward `target` along the shortest arc by at most `amount` degrees.
pub(crate) fn shift_hue_toward(hue: f64, target: f64, amount: f64) -> f64 {
    let hue = wrap_hue(hue);
    let dist = hue_distance(hue, target);
    let step = amount.max(0.0).min(dist);
    let forward = wrap_hue(target - hue) <= 180.0;
    if forward {
        wrap_hue(hue + step)
    } else {
        wrap_hue(hue - step)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
