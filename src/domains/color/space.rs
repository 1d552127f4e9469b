//! Color space conversions.
//!
//! Pure closed-form conversions between the four representations the
//! toolbox exposes: hex, RGB, HSL and CMYK. All functions are free of
//! side effects; rounding is to the nearest integer, so round trips
//! hold within one unit per channel.

use rand::Rng;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::error::ColorError;

// ============================================================================
// Value types
// ============================================================================

/// Additive RGB triplet, channels in [0,255].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Validate raw integer channels into a triplet.
    pub fn from_components(r: i64, g: i64, b: i64) -> Result<Self, ColorError> {
        let channel = |channel: &'static str, value: i64| {
            u8::try_from(value).map_err(|_| ColorError::ChannelOutOfRange { channel, value })
        };
        Ok(Self {
            r: channel("r", r)?,
            g: channel("g", g)?,
            b: channel("b", b)?,
        })
    }
}

/// Cylindrical HSL representation: hue in degrees [0,360),
/// saturation and lightness in integer percent [0,100].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

/// Subtractive CMYK representation, components in integer percent [0,100].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Cmyk {
    pub c: u8,
    pub m: u8,
    pub y: u8,
    pub k: u8,
}

/// One perceptual color carried redundantly in all four representations.
///
/// Invariant: at any observable point all four fields describe the same
/// color within integer rounding tolerance. Constructors recompute every
/// derived field, so a `Color` can only be built consistent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Color {
    /// Lowercase `#rrggbb`.
    pub hex: String,
    pub rgb: Rgb,
    pub hsl: Hsl,
    pub cmyk: Cmyk,
}

impl Color {
    /// Build a color from an RGB triplet, deriving the other representations.
    pub fn from_rgb(rgb: Rgb) -> Self {
        Self {
            hex: rgb_to_hex(rgb),
            rgb,
            hsl: rgb_to_hsl(rgb),
            cmyk: rgb_to_cmyk(rgb),
        }
    }

    /// Parse a hex string (`#rrggbb`, leading `#` optional, case-insensitive).
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        Ok(Self::from_rgb(hex_to_rgb(hex)?))
    }

    /// Build a color from HSL components after range validation.
    ///
    /// The stored HSL is recomputed from the derived RGB, so it may differ
    /// from the input by rounding; this keeps the cross-format invariant.
    pub fn from_hsl(h: i64, s: i64, l: i64) -> Result<Self, ColorError> {
        if !(0..360).contains(&h) {
            return Err(ColorError::ComponentOutOfRange {
                component: "h",
                value: h,
            });
        }
        for (component, value) in [("s", s), ("l", l)] {
            if !(0..=100).contains(&value) {
                return Err(ColorError::ComponentOutOfRange { component, value });
            }
        }
        let hsl = Hsl {
            h: h as u16,
            s: s as u8,
            l: l as u8,
        };
        Ok(Self::from_rgb(hsl_to_rgb(hsl)))
    }

    /// A uniformly random 24-bit color.
    pub fn random() -> Self {
        let mut rng = rand::thread_rng();
        Self::from_rgb(Rgb {
            r: rng.r#gen(),
            g: rng.r#gen(),
            b: rng.r#gen(),
        })
    }

    /// The channel-wise complement (255 - channel).
    pub fn inverted(&self) -> Self {
        Self::from_rgb(Rgb {
            r: 255 - self.rgb.r,
            g: 255 - self.rgb.g,
            b: 255 - self.rgb.b,
        })
    }

    /// Shift lightness by `delta` percent points, clamped to [0,100].
    ///
    /// Hue and saturation are carried over from the current HSL before the
    /// shift, matching how the lighten/darken actions behave.
    pub fn adjust_lightness(&self, delta: i16) -> Self {
        let l = (self.hsl.l as i16 + delta).clamp(0, 100) as u8;
        Self::from_rgb(hsl_to_rgb(Hsl { l, ..self.hsl }))
    }
}

// ============================================================================
// Conversions
// ============================================================================

/// Parse a 6-digit hex color into an RGB triplet.
///
/// Accepts an optional leading `#`. Anything else (wrong length, non-hex
/// characters, 3-digit shorthand) is rejected.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, ColorError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorError::invalid_hex(hex));
    }

    let channel = |range| u8::from_str_radix(&digits[range], 16);
    Ok(Rgb {
        r: channel(0..2).map_err(|_| ColorError::invalid_hex(hex))?,
        g: channel(2..4).map_err(|_| ColorError::invalid_hex(hex))?,
        b: channel(4..6).map_err(|_| ColorError::invalid_hex(hex))?,
    })
}

/// Format an RGB triplet as lowercase `#rrggbb`.
pub fn rgb_to_hex(rgb: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b)
}

/// Convert RGB to HSL with the standard max/min channel algorithm.
///
/// Achromatic input (r = g = b) yields hue 0 and saturation 0.
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = rgb.r as f64 / 255.0;
    let g = rgb.g as f64 / 255.0;
    let b = rgb.b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl {
            h: 0,
            s: 0,
            l: (l * 100.0).round() as u8,
        };
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    // Piecewise hue by whichever channel is maximal.
    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    } / 6.0;

    Hsl {
        h: ((h * 360.0).round() as u16) % 360,
        s: (s * 100.0).round() as u8,
        l: (l * 100.0).round() as u8,
    }
}

/// Convert HSL back to RGB via the standard hue-to-RGB helper.
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let h = hsl.h as f64 / 360.0;
    let s = hsl.s as f64 / 100.0;
    let l = hsl.l as f64 / 100.0;

    if hsl.s == 0 {
        let v = (l * 255.0).round() as u8;
        return Rgb { r: v, g: v, b: v };
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    let channel = |t| (hue_to_rgb(p, q, t) * 255.0).round() as u8;
    Rgb {
        r: channel(h + 1.0 / 3.0),
        g: channel(h),
        b: channel(h - 1.0 / 3.0),
    }
}

fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Convert RGB to CMYK percentages.
///
/// Pure black is special-cased to `{0,0,0,100}` since the general formula
/// divides by `1 - k`.
pub fn rgb_to_cmyk(rgb: Rgb) -> Cmyk {
    let c = 1.0 - rgb.r as f64 / 255.0;
    let m = 1.0 - rgb.g as f64 / 255.0;
    let y = 1.0 - rgb.b as f64 / 255.0;
    let k = c.min(m).min(y);

    if k >= 1.0 {
        return Cmyk {
            c: 0,
            m: 0,
            y: 0,
            k: 100,
        };
    }

    let percent = |v: f64| (((v - k) / (1.0 - k)) * 100.0).round() as u8;
    Cmyk {
        c: percent(c),
        m: percent(m),
        y: percent(y),
        k: (k * 100.0).round() as u8,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_rgb_valid() {
        assert_eq!(hex_to_rgb("#6366f1").unwrap(), Rgb { r: 99, g: 102, b: 241 });
        assert_eq!(hex_to_rgb("6366F1").unwrap(), Rgb { r: 99, g: 102, b: 241 });
        assert_eq!(hex_to_rgb("#FFFFFF").unwrap(), Rgb { r: 255, g: 255, b: 255 });
        assert_eq!(hex_to_rgb("#000000").unwrap(), Rgb { r: 0, g: 0, b: 0 });
    }

    #[test]
    fn test_hex_to_rgb_invalid() {
        assert!(hex_to_rgb("invalidstring").is_err());
        assert!(hex_to_rgb("#fff").is_err()); // shorthand unsupported
        assert!(hex_to_rgb("#12345").is_err());
        assert!(hex_to_rgb("#1234567").is_err());
        assert!(hex_to_rgb("#gggggg").is_err());
        assert!(hex_to_rgb("").is_err());
    }

    #[test]
    fn test_rgb_to_hex_lowercase() {
        assert_eq!(rgb_to_hex(Rgb { r: 99, g: 102, b: 241 }), "#6366f1");
        assert_eq!(rgb_to_hex(Rgb { r: 0, g: 0, b: 0 }), "#000000");
    }

    #[test]
    fn test_rgb_to_hsl_achromatic() {
        let hsl = rgb_to_hsl(Rgb { r: 128, g: 128, b: 128 });
        assert_eq!(hsl.h, 0);
        assert_eq!(hsl.s, 0);
        assert_eq!(hsl.l, 50);
    }

    #[test]
    fn test_rgb_to_hsl_primaries() {
        assert_eq!(rgb_to_hsl(Rgb { r: 255, g: 0, b: 0 }), Hsl { h: 0, s: 100, l: 50 });
        assert_eq!(rgb_to_hsl(Rgb { r: 0, g: 255, b: 0 }), Hsl { h: 120, s: 100, l: 50 });
        assert_eq!(rgb_to_hsl(Rgb { r: 0, g: 0, b: 255 }), Hsl { h: 240, s: 100, l: 50 });
    }

    #[test]
    fn test_hsl_to_rgb_achromatic() {
        assert_eq!(hsl_to_rgb(Hsl { h: 0, s: 0, l: 100 }), Rgb { r: 255, g: 255, b: 255 });
        assert_eq!(hsl_to_rgb(Hsl { h: 0, s: 0, l: 0 }), Rgb { r: 0, g: 0, b: 0 });
        assert_eq!(hsl_to_rgb(Hsl { h: 42, s: 0, l: 50 }), Rgb { r: 128, g: 128, b: 128 });
    }

    #[test]
    fn test_cmyk_black_and_white() {
        assert_eq!(
            rgb_to_cmyk(Rgb { r: 0, g: 0, b: 0 }),
            Cmyk { c: 0, m: 0, y: 0, k: 100 }
        );
        assert_eq!(
            rgb_to_cmyk(Rgb { r: 255, g: 255, b: 255 }),
            Cmyk { c: 0, m: 0, y: 0, k: 0 }
        );
    }

    #[test]
    fn test_cmyk_mixed() {
        // #6366f1 per the original converter
        let cmyk = rgb_to_cmyk(Rgb { r: 99, g: 102, b: 241 });
        assert_eq!(cmyk, Cmyk { c: 59, m: 58, y: 0, k: 5 });
    }

    #[test]
    fn test_hsl_round_trip_within_tolerance() {
        for hex in ["#6366f1", "#8b5cf6", "#ec4899", "#ef4444", "#22c55e", "#06b6d4"] {
            let rgb = hex_to_rgb(hex).unwrap();
            let back = hsl_to_rgb(rgb_to_hsl(rgb));
            assert!((rgb.r as i16 - back.r as i16).abs() <= 1, "{hex} r");
            assert!((rgb.g as i16 - back.g as i16).abs() <= 1, "{hex} g");
            assert!((rgb.b as i16 - back.b as i16).abs() <= 1, "{hex} b");
        }
    }

    #[test]
    fn test_color_from_hex_consistency() {
        let color = Color::from_hex("#6366f1").unwrap();
        assert_eq!(color.hex, "#6366f1");
        assert_eq!(color.rgb, Rgb { r: 99, g: 102, b: 241 });
        assert_eq!(color.hsl, Hsl { h: 239, s: 84, l: 67 });
        assert_eq!(color.cmyk, Cmyk { c: 59, m: 58, y: 0, k: 5 });
    }

    #[test]
    fn test_color_from_hsl_validates_ranges() {
        assert!(Color::from_hsl(360, 50, 50).is_err());
        assert!(Color::from_hsl(-1, 50, 50).is_err());
        assert!(Color::from_hsl(180, 101, 50).is_err());
        assert!(Color::from_hsl(180, 50, 101).is_err());
        assert!(Color::from_hsl(180, 50, 50).is_ok());
    }

    #[test]
    fn test_inverted() {
        let color = Color::from_hex("#000000").unwrap();
        assert_eq!(color.inverted().hex, "#ffffff");

        let color = Color::from_hex("#6366f1").unwrap();
        assert_eq!(color.inverted().rgb, Rgb { r: 156, g: 153, b: 14 });
    }

    #[test]
    fn test_adjust_lightness_clamps() {
        let white = Color::from_hex("#ffffff").unwrap();
        assert_eq!(white.adjust_lightness(10).hsl.l, 100);

        let black = Color::from_hex("#000000").unwrap();
        assert_eq!(black.adjust_lightness(-10).hsl.l, 0);

        let mid = Color::from_hsl(200, 50, 50).unwrap();
        assert_eq!(mid.adjust_lightness(10).hsl.l, 60);
        assert_eq!(mid.adjust_lightness(-10).hsl.l, 40);
    }

    #[test]
    fn test_rgb_from_components_validates() {
        assert_eq!(Rgb::from_components(99, 102, 241).unwrap(), Rgb { r: 99, g: 102, b: 241 });
        assert!(Rgb::from_components(256, 0, 0).is_err());
        assert!(Rgb::from_components(0, -1, 0).is_err());
    }

    #[test]
    fn test_random_is_consistent() {
        let color = Color::random();
        let rebuilt = Color::from_rgb(color.rgb);
        assert_eq!(color, rebuilt);
    }
}
