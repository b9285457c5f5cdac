//! Colors for the visualization surface.
//!
//! Every diagram is specified in CSS `hsla()` terms (hue in degrees,
//! saturation/lightness/alpha as fractions). `Hsla::to_rgba` performs the
//! CSS Color 3 conversion once per primitive, so surfaces only ever see
//! straight (unpremultiplied) 8-bit RGBA.

/// RGBA color (0-255 per channel, straight alpha)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0, a: 255 };
    pub const WHITE: Self = Self { r: 255, g: 255, b: 255, a: 255 };
    pub const TRANSPARENT: Self = Self { r: 0, g: 0, b: 0, a: 0 };

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Same color, new fractional alpha.
    pub fn fade(self, alpha: f32) -> Self {
        Self { a: unit_to_u8(alpha), ..self }
    }

    /// Linear interpolation per channel, `t` in [0, 1].
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let m = |a: u8, b: u8| ((a as f32) * (1.0 - t) + (b as f32) * t).round() as u8;
        Self {
            r: m(self.r, other.r),
            g: m(self.g, other.g),
            b: m(self.b, other.b),
            a: m(self.a, other.a),
        }
    }
}

/// CSS-style `hsla(h, s%, l%, a)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsla {
    /// Hue in degrees; any value, wrapped into [0, 360).
    pub h: f32,
    /// Saturation, 0.0-1.0
    pub s: f32,
    /// Lightness, 0.0-1.0
    pub l: f32,
    /// Alpha, 0.0-1.0 (clamped on conversion)
    pub a: f32,
}

impl Hsla {
    pub const fn new(h: f32, s: f32, l: f32, a: f32) -> Self {
        Self { h, s, l, a }
    }

    pub fn to_rgba(self) -> Rgba {
        let h = self.h.rem_euclid(360.0) / 60.0;
        let s = self.s.clamp(0.0, 1.0);
        let l = self.l.clamp(0.0, 1.0);

        let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = chroma * (1.0 - (h % 2.0 - 1.0).abs());
        let m = l - chroma * 0.5;

        let (r, g, b) = match h as u32 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };

        Rgba {
            r: unit_to_u8(r + m),
            g: unit_to_u8(g + m),
            b: unit_to_u8(b + m),
            a: unit_to_u8(self.a),
        }
    }
}

impl From<Hsla> for Rgba {
    fn from(c: Hsla) -> Self {
        c.to_rgba()
    }
}

/// Shorthand for the `hsla(h, s%, l%, a)` calls that fill the renderers.
#[inline]
pub fn hsla(h: f32, s: f32, l: f32, a: f32) -> Rgba {
    Hsla::new(h, s, l, a).into()
}

#[inline]
fn unit_to_u8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_hues() {
        assert_eq!(hsla(0.0, 1.0, 0.5, 1.0), Rgba::rgb(255, 0, 0));
        assert_eq!(hsla(120.0, 1.0, 0.5, 1.0), Rgba::rgb(0, 255, 0));
        assert_eq!(hsla(240.0, 1.0, 0.5, 1.0), Rgba::rgb(0, 0, 255));
    }

    #[test]
    fn forest_green() {
        // hsla(120, 70%, 50%, 1)
        let c = hsla(120.0, 0.7, 0.5, 1.0);
        assert_eq!(c, Rgba::rgb(38, 217, 38));
    }

    #[test]
    fn hue_wraps() {
        assert_eq!(hsla(360.0, 0.7, 0.6, 1.0), hsla(0.0, 0.7, 0.6, 1.0));
        assert_eq!(hsla(-90.0, 0.7, 0.6, 1.0), hsla(270.0, 0.7, 0.6, 1.0));
        assert_eq!(hsla(725.0, 0.7, 0.6, 1.0), hsla(5.0, 0.7, 0.6, 1.0));
    }

    #[test]
    fn alpha_is_clamped() {
        assert_eq!(hsla(210.0, 0.7, 0.5, 1.4).a, 255);
        assert_eq!(hsla(210.0, 0.7, 0.5, -0.2).a, 0);
        assert_eq!(hsla(210.0, 0.7, 0.5, 0.2).a, 51);
    }

    #[test]
    fn grey_has_no_chroma() {
        let c = hsla(42.0, 0.0, 0.5, 1.0);
        assert_eq!(c.r, c.g);
        assert_eq!(c.g, c.b);
    }

    #[test]
    fn lerp_endpoints_and_middle() {
        let a = Rgba::rgb(0, 0, 0);
        let b = Rgba { r: 100, g: 200, b: 50, a: 255 };
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        let mid = a.lerp(b, 0.5);
        assert_eq!((mid.r, mid.g, mid.b), (50, 100, 25));
    }

    #[test]
    fn fade_keeps_channels() {
        let c = Rgba::rgb(59, 130, 246).fade(0.2);
        assert_eq!((c.r, c.g, c.b, c.a), (59, 130, 246, 51));
    }
}
