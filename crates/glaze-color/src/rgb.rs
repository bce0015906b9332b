#![forbid(unsafe_code)]

//! RGB color value types and channel math.
//!
//! Channels are `f32` in `[0, 1]`. Colors are plain `Copy` values: every
//! operation returns a fresh color, nothing is mutated in place.

use thiserror::Error;

/// Errors from parsing a hex color string.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ColorError {
    /// The string did not contain exactly six hex digits.
    #[error("hex color must have six digits, got {0}")]
    BadLength(usize),
    /// A character outside `[0-9a-fA-F]` was found.
    #[error("hex color contains a non-hex digit")]
    BadDigit,
}

/// An RGB color with `f32` channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
}

/// A color paired with an alpha scalar.
///
/// No compositing is performed here; the consumer applies the alpha itself.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba {
    /// The underlying color, unchanged from the input.
    pub color: Rgb,
    /// Opacity in `[0, 1]`, taken as given.
    pub alpha: f32,
}

impl Rgb {
    /// Pure black.
    pub const BLACK: Rgb = Rgb {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    /// Pure white.
    pub const WHITE: Rgb = Rgb {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };

    /// Create a color, clamping each channel into `[0, 1]`.
    #[inline]
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
        }
    }

    /// Create a color from 8-bit channels (`k / 255`).
    #[inline]
    pub const fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Parse a `"#RRGGBB"` or `"RRGGBB"` hex string.
    pub fn from_hex(s: &str) -> Result<Self, ColorError> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if !digits.is_ascii() {
            return Err(ColorError::BadDigit);
        }
        if digits.len() != 6 {
            return Err(ColorError::BadLength(digits.len()));
        }
        let channel = |range: core::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| ColorError::BadDigit)
        };
        Ok(Self::from_u8(
            channel(0..2)?,
            channel(2..4)?,
            channel(4..6)?,
        ))
    }

    /// Format as `"#RRGGBB"` uppercase hex.
    ///
    /// Each channel is `round(channel * 255)` with round-half-up, so a 0.5
    /// channel formats as `80` (127.5 rounds to 128). Exact on the 8-bit
    /// grid: `from_u8` values round-trip.
    pub fn to_hex(&self) -> String {
        format!(
            "#{:02X}{:02X}{:02X}",
            channel_to_u8(self.r),
            channel_to_u8(self.g),
            channel_to_u8(self.b)
        )
    }

    /// Move each channel toward 1.0 by `amount` of its remaining distance.
    ///
    /// `amount` is clamped into `[0, 1]` first. `lighten(0)` is the
    /// identity, `lighten(1)` is pure white.
    #[must_use]
    pub fn lighten(&self, amount: f32) -> Self {
        let amount = amount.clamp(0.0, 1.0);
        Self::new(
            self.r + (1.0 - self.r) * amount,
            self.g + (1.0 - self.g) * amount,
            self.b + (1.0 - self.b) * amount,
        )
    }

    /// Scale each channel down by `amount`.
    ///
    /// `amount` is clamped into `[0, 1]` first. `darken(0)` is the identity,
    /// `darken(1)` is pure black.
    #[must_use]
    pub fn darken(&self, amount: f32) -> Self {
        let amount = amount.clamp(0.0, 1.0);
        Self::new(
            self.r * (1.0 - amount),
            self.g * (1.0 - amount),
            self.b * (1.0 - amount),
        )
    }

    /// Perceptual luminance: `0.299 r + 0.587 g + 0.114 b`.
    #[inline]
    pub fn luminance(&self) -> f32 {
        0.299 * self.r + 0.587 * self.g + 0.114 * self.b
    }

    /// Black or white, whichever reads against this background.
    ///
    /// Returns [`Rgb::BLACK`] only when luminance is strictly greater than
    /// 0.5; a background at exactly 0.5 gets white. The strict comparison is
    /// part of the contract.
    pub fn contrast_text(&self) -> Rgb {
        if self.luminance() > 0.5 {
            Rgb::BLACK
        } else {
            Rgb::WHITE
        }
    }

    /// Pair this color with an alpha scalar.
    ///
    /// Pure pass-through: the color is returned unchanged alongside the
    /// given alpha, for the caller to composite itself.
    #[inline]
    pub const fn with_alpha(self, alpha: f32) -> Rgba {
        Rgba { color: self, alpha }
    }

    /// Linear interpolation toward `other`, per channel.
    ///
    /// `t` is clamped into `[0, 1]`; 0 yields `self`, 1 yields `other`.
    #[must_use]
    pub fn mix(&self, other: Rgb, t: f32) -> Rgb {
        // The two-product form is exact at both endpoints.
        let t = t.clamp(0.0, 1.0);
        Rgb::new(
            self.r * (1.0 - t) + other.r * t,
            self.g * (1.0 - t) + other.g * t,
            self.b * (1.0 - t) + other.b * t,
        )
    }
}

#[inline]
fn channel_to_u8(c: f32) -> u8 {
    // f32::round is round-half-away-from-zero, which is round-half-up for
    // the non-negative clamped range.
    (c.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_hex_formats_extremes_and_midpoint() {
        assert_eq!(Rgb::BLACK.to_hex(), "#000000");
        assert_eq!(Rgb::WHITE.to_hex(), "#FFFFFF");
        // 0.5 * 255 = 127.5 rounds half-up to 128 = 0x80.
        assert_eq!(Rgb::new(0.5, 0.5, 0.5).to_hex(), "#808080");
    }

    #[test]
    fn to_hex_is_exact_on_the_8_bit_grid() {
        for k in [0u8, 1, 9, 15, 16, 127, 128, 200, 254, 255] {
            let hex = Rgb::from_u8(k, k, k).to_hex();
            assert_eq!(hex, format!("#{k:02X}{k:02X}{k:02X}"));
        }
    }

    #[test]
    fn from_hex_accepts_leading_hash_and_bare_digits() {
        assert_eq!(Rgb::from_hex("#FF0000"), Ok(Rgb::from_u8(255, 0, 0)));
        assert_eq!(Rgb::from_hex("00ff00"), Ok(Rgb::from_u8(0, 255, 0)));
    }

    #[test]
    fn from_hex_rejects_bad_input() {
        assert_eq!(Rgb::from_hex("#FFF"), Err(ColorError::BadLength(3)));
        assert_eq!(Rgb::from_hex(""), Err(ColorError::BadLength(0)));
        assert_eq!(Rgb::from_hex("#GGGGGG"), Err(ColorError::BadDigit));
        assert_eq!(Rgb::from_hex("#££0000"), Err(ColorError::BadDigit));
    }

    #[test]
    fn new_clamps_out_of_range_channels() {
        let color = Rgb::new(-0.5, 1.5, 0.25);
        assert_eq!(color, Rgb { r: 0.0, g: 1.0, b: 0.25 });
    }

    #[test]
    fn lighten_zero_is_identity_and_one_is_white() {
        let color = Rgb::from_u8(40, 90, 160);
        assert_eq!(color.lighten(0.0), color);
        assert_eq!(color.lighten(1.0), Rgb::WHITE);
    }

    #[test]
    fn darken_zero_is_identity_and_one_is_black() {
        let color = Rgb::from_u8(40, 90, 160);
        assert_eq!(color.darken(0.0), color);
        assert_eq!(color.darken(1.0), Rgb::BLACK);
    }

    #[test]
    fn lighten_moves_toward_white_by_remaining_distance() {
        let color = Rgb::new(0.0, 0.5, 1.0);
        let lighter = color.lighten(0.5);
        assert_eq!(lighter, Rgb { r: 0.5, g: 0.75, b: 1.0 });
    }

    #[test]
    fn darken_scales_channels() {
        let color = Rgb::new(1.0, 0.5, 0.0);
        let darker = color.darken(0.5);
        assert_eq!(darker, Rgb { r: 0.5, g: 0.25, b: 0.0 });
    }

    #[test]
    fn out_of_range_amounts_are_clamped_not_rejected() {
        let color = Rgb::from_u8(40, 90, 160);
        assert_eq!(color.lighten(-2.0), color);
        assert_eq!(color.lighten(5.0), Rgb::WHITE);
        assert_eq!(color.darken(-2.0), color);
        assert_eq!(color.darken(5.0), Rgb::BLACK);
    }

    #[test]
    fn repeated_lighten_is_not_idempotent() {
        let color = Rgb::new(0.2, 0.2, 0.2);
        let once = color.lighten(0.1);
        let twice = once.lighten(0.1);
        assert_ne!(once, twice);
    }

    #[test]
    fn contrast_text_uses_strict_threshold() {
        assert_eq!(Rgb::WHITE.contrast_text(), Rgb::BLACK);
        assert_eq!(Rgb::BLACK.contrast_text(), Rgb::WHITE);
        // Exactly 0.5 luminance falls to the white branch.
        assert_eq!(Rgb::new(0.5, 0.5, 0.5).contrast_text(), Rgb::WHITE);
        assert_eq!(Rgb::new(0.6, 0.6, 0.6).contrast_text(), Rgb::BLACK);
    }

    #[test]
    fn luminance_weighs_green_heaviest() {
        let green = Rgb::new(0.0, 1.0, 0.0).luminance();
        let red = Rgb::new(1.0, 0.0, 0.0).luminance();
        let blue = Rgb::new(0.0, 0.0, 1.0).luminance();
        assert!(green > red && red > blue);
        assert!((green - 0.587).abs() < 1e-6);
    }

    #[test]
    fn mix_endpoints_and_midpoint() {
        let a = Rgb::new(0.0, 0.0, 0.0);
        let b = Rgb::new(1.0, 0.5, 0.0);
        assert_eq!(a.mix(b, 0.0), a);
        assert_eq!(a.mix(b, 1.0), b);
        assert_eq!(a.mix(b, 0.5), Rgb { r: 0.5, g: 0.25, b: 0.0 });
    }

    #[test]
    fn with_alpha_is_pass_through() {
        let color = Rgb::from_u8(10, 20, 30);
        let paired = color.with_alpha(0.5);
        assert_eq!(paired.color, color);
        assert_eq!(paired.alpha, 0.5);
    }
}
