use crate::constants::{ACCENT_RGB, BACKGROUND_RGB};
use std::fmt;

/// 8-bit colour with a floating alpha in \[0, 1\], matching CSS `rgba()`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn rgb(rgb: [u8; 3]) -> Self {
        Self {
            r: rgb[0],
            g: rgb[1],
            b: rgb[2],
            a: 1.0,
        }
    }

    /// Same colour at the given alpha; out-of-range or NaN alphas clamp to \[0, 1\].
    #[inline]
    pub fn with_alpha(self, a: f32) -> Self {
        let a = if a.is_finite() { a.clamp(0.0, 1.0) } else { 0.0 };
        Self { a, ..self }
    }

    #[inline]
    pub fn transparent(self) -> Self {
        self.with_alpha(0.0)
    }

    pub fn to_css(&self) -> String {
        self.to_string()
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({},{},{},{:.4})", self.r, self.g, self.b, self.a)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    /// Every stroke and fill of the blueprint.
    pub accent: Rgba,
    /// Only surfaces that own their background paint it (the canvas overlay brings its own CSS).
    pub background: Rgba,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            accent: Rgba::rgb(ACCENT_RGB),
            background: Rgba::rgb(BACKGROUND_RGB),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_string_matches_canvas_syntax() {
        let c = Rgba::rgb([194, 164, 126]).with_alpha(0.5);
        assert_eq!(c.to_css(), "rgba(194,164,126,0.5000)");
        assert_eq!(c.to_hex(), "#c2a47e");
    }

    #[test]
    fn alpha_is_clamped() {
        let c = Rgba::rgb([1, 2, 3]);
        assert_eq!(c.with_alpha(3.0).a, 1.0);
        assert_eq!(c.with_alpha(-1.0).a, 0.0);
        assert_eq!(c.with_alpha(f32::NAN).a, 0.0);
    }
}
