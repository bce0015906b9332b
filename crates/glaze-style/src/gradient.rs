#![forbid(unsafe_code)]

//! Piecewise gradients built from ordered color stops.
//!
//! A [`Gradient`] is an ordered sequence of `(position, color)` keypoints.
//! Construction validates the sequence shapes (at least two colors,
//! matching lengths when positions are supplied); positions themselves are
//! taken as given, so monotonicity and bounds stay the caller's
//! responsibility.

use glaze_color::Rgb;
use thiserror::Error;

/// Errors from gradient construction.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GradientError {
    /// A gradient needs at least two colors.
    #[error("gradient needs at least two colors, got {0}")]
    TooFewColors(usize),
    /// The colors and positions sequences must pair up one to one.
    #[error("colors and positions length mismatch: {colors} colors, {positions} positions")]
    LengthMismatch { colors: usize, positions: usize },
}

/// One gradient keypoint.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GradientStop {
    /// Position along the gradient, nominally in `[0, 1]`.
    pub position: f32,
    /// Color at this position.
    pub color: Rgb,
}

/// An ordered sequence of gradient keypoints.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gradient {
    stops: Vec<GradientStop>,
}

impl Gradient {
    /// Build a gradient with evenly distributed stops.
    ///
    /// Stop `i` lands at exactly `i / (N - 1)`, so the first stop is 0.0
    /// and the last is 1.0.
    pub fn evenly_spaced(colors: &[Rgb]) -> Result<Gradient, GradientError> {
        if colors.len() < 2 {
            return Err(GradientError::TooFewColors(colors.len()));
        }
        let last = (colors.len() - 1) as f32;
        let stops = colors
            .iter()
            .enumerate()
            .map(|(i, &color)| GradientStop {
                position: i as f32 / last,
                color,
            })
            .collect();
        Ok(Gradient { stops })
    }

    /// Build a gradient pairing each color with the given position.
    ///
    /// Requires at least two colors and matching sequence lengths.
    /// Positions are paired as given; no monotonicity or bounds checks.
    pub fn with_positions(colors: &[Rgb], positions: &[f32]) -> Result<Gradient, GradientError> {
        if colors.len() < 2 {
            return Err(GradientError::TooFewColors(colors.len()));
        }
        if colors.len() != positions.len() {
            return Err(GradientError::LengthMismatch {
                colors: colors.len(),
                positions: positions.len(),
            });
        }
        let stops = colors
            .iter()
            .zip(positions)
            .map(|(&color, &position)| GradientStop { position, color })
            .collect();
        Ok(Gradient { stops })
    }

    /// The keypoints, in construction order.
    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }

    /// Evaluate the gradient at `t` by piecewise-linear interpolation.
    ///
    /// Assumes non-decreasing stop positions; `t` outside the covered
    /// range clamps to the nearest end.
    pub fn sample(&self, t: f32) -> Rgb {
        let first = self.stops[0];
        let last = self.stops[self.stops.len() - 1];
        if t <= first.position {
            return first.color;
        }
        if t >= last.position {
            return last.color;
        }
        for pair in self.stops.windows(2) {
            let (lo, hi) = (pair[0], pair[1]);
            if t <= hi.position {
                let span = hi.position - lo.position;
                if span <= 0.0 {
                    return hi.color;
                }
                return lo.color.mix(hi.color, (t - lo.position) / span);
            }
        }
        last.color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb = Rgb::from_u8(255, 0, 0);
    const GREEN: Rgb = Rgb::from_u8(0, 255, 0);
    const BLUE: Rgb = Rgb::from_u8(0, 0, 255);

    #[test]
    fn three_colors_land_at_exact_positions() {
        let gradient = Gradient::evenly_spaced(&[RED, GREEN, BLUE]).unwrap();
        let stops = gradient.stops();
        assert_eq!(stops.len(), 3);
        assert_eq!(stops[0].position, 0.0);
        assert_eq!(stops[1].position, 0.5);
        assert_eq!(stops[2].position, 1.0);
        assert_eq!(stops[0].color, RED);
        assert_eq!(stops[1].color, GREEN);
        assert_eq!(stops[2].color, BLUE);
    }

    #[test]
    fn two_colors_span_zero_to_one() {
        let gradient = Gradient::evenly_spaced(&[RED, BLUE]).unwrap();
        assert_eq!(gradient.stops()[0].position, 0.0);
        assert_eq!(gradient.stops()[1].position, 1.0);
    }

    #[test]
    fn too_few_colors_is_rejected() {
        assert_eq!(
            Gradient::evenly_spaced(&[RED]),
            Err(GradientError::TooFewColors(1))
        );
        assert_eq!(
            Gradient::evenly_spaced(&[]),
            Err(GradientError::TooFewColors(0))
        );
        assert_eq!(
            Gradient::with_positions(&[RED], &[0.0]),
            Err(GradientError::TooFewColors(1))
        );
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        assert_eq!(
            Gradient::with_positions(&[RED, GREEN, BLUE], &[0.0, 1.0]),
            Err(GradientError::LengthMismatch {
                colors: 3,
                positions: 2
            })
        );
    }

    #[test]
    fn explicit_positions_are_taken_as_given() {
        // Non-monotonic on purpose; construction does not reorder or reject.
        let gradient = Gradient::with_positions(&[RED, BLUE], &[0.9, 0.1]).unwrap();
        assert_eq!(gradient.stops()[0].position, 0.9);
        assert_eq!(gradient.stops()[1].position, 0.1);
    }

    #[test]
    fn sample_hits_stops_and_midpoints() {
        let gradient = Gradient::evenly_spaced(&[Rgb::BLACK, Rgb::WHITE]).unwrap();
        assert_eq!(gradient.sample(0.0), Rgb::BLACK);
        assert_eq!(gradient.sample(1.0), Rgb::WHITE);
        let mid = gradient.sample(0.5);
        assert!((mid.r - 0.5).abs() < 1e-6);
        assert!((mid.g - 0.5).abs() < 1e-6);
        assert!((mid.b - 0.5).abs() < 1e-6);
    }

    #[test]
    fn sample_clamps_outside_the_covered_range() {
        let gradient = Gradient::with_positions(&[RED, BLUE], &[0.25, 0.75]).unwrap();
        assert_eq!(gradient.sample(-1.0), RED);
        assert_eq!(gradient.sample(0.0), RED);
        assert_eq!(gradient.sample(1.0), BLUE);
        assert_eq!(gradient.sample(2.0), BLUE);
    }

    #[test]
    fn error_messages_name_the_shapes() {
        let err = Gradient::with_positions(&[RED, GREEN, BLUE], &[0.0]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "colors and positions length mismatch: 3 colors, 1 positions"
        );
    }
}
