use crate::foundation::math::{quantize, wrap_hue};

/// A color in HSL space with straight alpha.
///
/// `h` is in degrees `[0, 360)`, `s`, `l` and `a` are normalized to `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Hsla {
    /// Hue in degrees.
    pub h: f64,
    /// Saturation.
    pub s: f64,
    /// Lightness.
    pub l: f64,
    /// Straight alpha.
    pub a: f64,
}

/// Straight-alpha RGBA8, the form most render surfaces consume.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha.
    pub a: u8,
}

impl Hsla {
    /// Build a normalized color; components are wrapped/clamped and quantized.
    pub fn new(h: f64, s: f64, l: f64, a: f64) -> Self {
        fn unit(v: f64) -> f64 {
            if v.is_finite() {
                quantize(v.clamp(0.0, 1.0))
            } else {
                0.0
            }
        }
        let h = if h.is_finite() {
            quantize(wrap_hue(h))
        } else {
            0.0
        };
        Self {
            h: wrap_hue(h),
            s: unit(s),
            l: unit(l),
            a: unit(a),
        }
    }

    /// Same color with a different alpha.
    pub fn with_alpha(self, a: f64) -> Self {
        Self::new(self.h, self.s, self.l, a)
    }

    /// Same color with a different lightness.
    pub fn with_lightness(self, l: f64) -> Self {
        Self::new(self.h, self.s, l, self.a)
    }

    /// Convert to normalized sRGB `(r, g, b)` in `[0, 1]`.
    pub fn to_rgb(self) -> (f64, f64, f64) {
        let h = self.h / 360.0;
        let s = self.s.clamp(0.0, 1.0);
        let l = self.l.clamp(0.0, 1.0);

        if s == 0.0 {
            return (l, l, l);
        }

        fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
            if t < 0.0 {
                t += 1.0;
            }
            if t > 1.0 {
                t -= 1.0;
            }
            if t < 1.0 / 6.0 {
                return p + (q - p) * 6.0 * t;
            }
            if t < 1.0 / 2.0 {
                return q;
            }
            if t < 2.0 / 3.0 {
                return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
            }
            p
        }

        let q = if l < 0.5 {
            l * (1.0 + s)
        } else {
            l + s - l * s
        };
        let p = 2.0 * l - q;

        (
            hue_to_rgb(p, q, h + 1.0 / 3.0),
            hue_to_rgb(p, q, h),
            hue_to_rgb(p, q, h - 1.0 / 3.0),
        )
    }

    /// Convert to straight-alpha RGBA8.
    pub fn to_rgba8(self) -> Rgba8 {
        fn to_u8(x: f64) -> u8 {
            (x.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        let (r, g, b) = self.to_rgb();
        Rgba8 {
            r: to_u8(r),
            g: to_u8(g),
            b: to_u8(b),
            a: to_u8(self.a),
        }
    }

    /// `#rrggbb`, or `#rrggbbaa` when not fully opaque.
    pub fn to_hex(self) -> String {
        let c = self.to_rgba8();
        if c.a == 255 {
            format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", c.r, c.g, c.b, c.a)
        }
    }

    /// WCAG relative luminance of the opaque color.
    pub fn relative_luminance(self) -> f64 {
        fn linear(c: f64) -> f64 {
            if c <= 0.039_28 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        let (r, g, b) = self.to_rgb();
        0.2126 * linear(r) + 0.7152 * linear(g) + 0.0722 * linear(b)
    }
}

/// WCAG contrast ratio between two opaque colors, in `[1, 21]`.
pub fn contrast_ratio(a: Hsla, b: Hsla) -> f64 {
    let la = a.relative_luminance();
    let lb = b.relative_luminance();
    let (hi, lo) = if la >= lb { (la, lb) } else { (lb, la) };
    (hi + 0.05) / (lo + 0.05)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/color.rs"]
mod tests;
