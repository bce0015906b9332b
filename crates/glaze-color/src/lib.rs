#![forbid(unsafe_code)]

//! Color value types and pure color math for Glaze.
//!
//! # Role in Glaze
//! `glaze-color` is the lowest-level vocabulary crate: immutable RGB value
//! types plus the handful of derivations the styling layer needs (hex
//! formatting, lighten/darken, luminance, contrast-text selection, channel
//! mixing). It has no dependencies on the rest of the workspace.
//!
//! # How it fits in the system
//! `glaze-style` stores these values in palettes and computes widget styles
//! from them. Everything here is a pure function over `Copy` value types, so
//! the styling layer stays deterministic and aliasing-free.

/// RGB color value types and channel math.
pub mod rgb;

pub use rgb::{ColorError, Rgb, Rgba};
