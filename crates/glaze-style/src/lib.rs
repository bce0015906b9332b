#![forbid(unsafe_code)]

//! Theming and style resolution for the Glaze plugin UI.
//!
//! # Role in Glaze
//! `glaze-style` is the styling engine: it owns the semantic palette, the
//! named theme overlays, and the derivation of widget styles from
//! interaction state. The UI layer calls in per render and consumes plain
//! value records; nothing here calls back out.
//!
//! # This crate provides
//! - [`Palette`] and [`Role`] for semantic color slots, with
//!   [`Palette::DEFAULT`] as the canonical dark palette.
//! - [`ThemeId`] and [`PaletteOverlay`] for layered theme resolution, plus
//!   [`resolve_named`] for the string boundary with its defined fallback.
//! - [`ButtonState`]/[`InputState`] to [`ButtonStyle`]/[`InputStyle`]
//!   resolution for the two widget archetypes.
//! - [`Gradient`] construction and sampling.
//! - A process-wide active theme ([`set_theme`], [`current_theme`],
//!   [`current_palette`]) for applications that want one.
//!
//! # How it fits in the system
//! Color math lives in `glaze-color`; this crate composes it. Every
//! resolution returns a fresh `Copy` value, so resolved themes and styles
//! are ephemeral per-render data with no aliasing between callers.

/// Piecewise gradients built from ordered color stops.
pub mod gradient;
/// Interaction-state-dependent widget styles.
pub mod interactive;
/// Semantic color roles and the default palette.
pub mod palette;
/// Theme resolution: named overlays on the default palette.
pub mod theme;

pub use gradient::{Gradient, GradientError, GradientStop};
pub use interactive::{ButtonState, ButtonStyle, InputState, InputStyle};
pub use palette::{Palette, Role, RoleValue};
pub use theme::{
    PaletteOverlay, ThemeId, current_palette, current_theme, resolve_named, set_theme,
};
