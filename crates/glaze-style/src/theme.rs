#![forbid(unsafe_code)]

//! Theme resolution: named overlays on the default palette.
//!
//! A theme is a [`PaletteOverlay`] layered on [`Palette::DEFAULT`]: only the
//! entries an overlay defines replace the default values, everything else
//! falls through. [`ThemeId`] enumerates the known variants, so "unknown
//! theme" exists only at the string boundary ([`resolve_named`]), where it
//! is a defined fallback to the default palette, never an error.
//!
//! The module also keeps a process-wide active theme for applications that
//! want one place to flip between variants; the resolver itself never reads
//! it.

use std::sync::{Arc, LazyLock};

use arc_swap::ArcSwap;
use glaze_color::Rgb;

use crate::palette::Palette;

/// Built-in theme identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ThemeId {
    /// Dark studio theme (the default; its overlay is empty).
    #[default]
    Dark,
    /// Light theme.
    Light,
    /// High-contrast accessibility theme.
    HighContrast,
}

impl ThemeId {
    /// Every known theme.
    pub const ALL: [ThemeId; 3] = [ThemeId::Dark, ThemeId::Light, ThemeId::HighContrast];

    /// Theme name as the UI configuration spells it.
    pub const fn name(self) -> &'static str {
        match self {
            ThemeId::Dark => "dark",
            ThemeId::Light => "light",
            ThemeId::HighContrast => "highContrast",
        }
    }

    /// Parse a theme name.
    ///
    /// Case-insensitive and tolerant of `-`/`_`/space separators, so
    /// `"highContrast"`, `"high-contrast"`, and `"HIGH_CONTRAST"` all
    /// resolve. Returns `None` for anything else.
    pub fn from_name(name: &str) -> Option<ThemeId> {
        let mut key = String::with_capacity(name.len());
        for c in name.chars() {
            if matches!(c, '-' | '_' | ' ') {
                continue;
            }
            key.extend(c.to_lowercase());
        }
        match key.as_str() {
            "dark" => Some(ThemeId::Dark),
            "light" => Some(ThemeId::Light),
            "highcontrast" => Some(ThemeId::HighContrast),
            _ => None,
        }
    }

    /// The overlay for this theme. Total: every variant has one.
    pub const fn overlay(self) -> &'static PaletteOverlay {
        match self {
            ThemeId::Dark => &DARK_OVERLAY,
            ThemeId::Light => &LIGHT_OVERLAY,
            ThemeId::HighContrast => &HIGH_CONTRAST_OVERLAY,
        }
    }

    /// Resolve this theme to a complete palette.
    ///
    /// Always a fresh copy of [`Palette::DEFAULT`] with the overlay
    /// applied; callers can never alias each other's palettes.
    pub fn palette(self) -> Palette {
        self.overlay().apply(Palette::DEFAULT)
    }
}

/// A partial palette: only the set entries override the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PaletteOverlay {
    pub background: Option<Rgb>,
    pub surface: Option<Rgb>,
    pub surface_raised: Option<Rgb>,
    pub primary: Option<Rgb>,
    pub primary_dim: Option<Rgb>,
    pub border: Option<Rgb>,
    pub border_light: Option<Rgb>,
    pub text: Option<Rgb>,
    pub text_dim: Option<Rgb>,
    pub text_disabled: Option<Rgb>,
    pub success: Option<Rgb>,
    pub warning: Option<Rgb>,
    pub error: Option<Rgb>,
    pub hover_alpha: Option<f32>,
    pub disabled_alpha: Option<f32>,
}

impl PaletteOverlay {
    /// The identity overlay: nothing set, everything falls through.
    pub const EMPTY: PaletteOverlay = PaletteOverlay {
        background: None,
        surface: None,
        surface_raised: None,
        primary: None,
        primary_dim: None,
        border: None,
        border_light: None,
        text: None,
        text_dim: None,
        text_disabled: None,
        success: None,
        warning: None,
        error: None,
        hover_alpha: None,
        disabled_alpha: None,
    };

    /// Layer this overlay on a base palette. Set entries win per role;
    /// unset entries keep the base value.
    pub const fn apply(&self, base: Palette) -> Palette {
        Palette {
            background: unwrap_or(self.background, base.background),
            surface: unwrap_or(self.surface, base.surface),
            surface_raised: unwrap_or(self.surface_raised, base.surface_raised),
            primary: unwrap_or(self.primary, base.primary),
            primary_dim: unwrap_or(self.primary_dim, base.primary_dim),
            border: unwrap_or(self.border, base.border),
            border_light: unwrap_or(self.border_light, base.border_light),
            text: unwrap_or(self.text, base.text),
            text_dim: unwrap_or(self.text_dim, base.text_dim),
            text_disabled: unwrap_or(self.text_disabled, base.text_disabled),
            success: unwrap_or(self.success, base.success),
            warning: unwrap_or(self.warning, base.warning),
            error: unwrap_or(self.error, base.error),
            hover_alpha: unwrap_or_f32(self.hover_alpha, base.hover_alpha),
            disabled_alpha: unwrap_or_f32(self.disabled_alpha, base.disabled_alpha),
        }
    }
}

// Option::unwrap_or is not const-callable on generic T.
const fn unwrap_or(value: Option<Rgb>, default: Rgb) -> Rgb {
    match value {
        Some(v) => v,
        None => default,
    }
}

const fn unwrap_or_f32(value: Option<f32>, default: f32) -> f32 {
    match value {
        Some(v) => v,
        None => default,
    }
}

/// Dark is the default palette itself.
const DARK_OVERLAY: PaletteOverlay = PaletteOverlay::EMPTY;

const LIGHT_OVERLAY: PaletteOverlay = PaletteOverlay {
    background: Some(Rgb::from_u8(240, 240, 240)),
    surface: Some(Rgb::from_u8(255, 255, 255)),
    surface_raised: Some(Rgb::from_u8(246, 246, 246)),
    primary: None,
    primary_dim: None,
    border: Some(Rgb::from_u8(200, 200, 200)),
    border_light: Some(Rgb::from_u8(160, 160, 160)),
    text: Some(Rgb::from_u8(40, 40, 40)),
    text_dim: Some(Rgb::from_u8(120, 120, 120)),
    text_disabled: Some(Rgb::from_u8(170, 170, 170)),
    success: None,
    warning: None,
    error: None,
    hover_alpha: None,
    disabled_alpha: None,
};

const HIGH_CONTRAST_OVERLAY: PaletteOverlay = PaletteOverlay {
    background: Some(Rgb::from_u8(0, 0, 0)),
    surface: Some(Rgb::from_u8(0, 0, 0)),
    surface_raised: Some(Rgb::from_u8(20, 20, 20)),
    primary: Some(Rgb::from_u8(255, 255, 0)),
    primary_dim: Some(Rgb::from_u8(200, 200, 0)),
    border: Some(Rgb::from_u8(255, 255, 255)),
    border_light: Some(Rgb::from_u8(255, 255, 255)),
    text: Some(Rgb::from_u8(255, 255, 255)),
    text_dim: Some(Rgb::from_u8(230, 230, 230)),
    text_disabled: Some(Rgb::from_u8(128, 128, 128)),
    success: None,
    warning: None,
    error: Some(Rgb::from_u8(255, 64, 64)),
    hover_alpha: None,
    disabled_alpha: Some(0.6),
};

/// Resolve a theme by name, falling back to the default palette.
///
/// An unrecognized name is not an error: the caller gets the default
/// palette and the miss is logged at `debug`.
pub fn resolve_named(name: &str) -> Palette {
    match ThemeId::from_name(name) {
        Some(id) => id.palette(),
        None => {
            tracing::debug!(theme = name, "unknown theme name; falling back to default palette");
            Palette::DEFAULT
        }
    }
}

#[derive(Clone, Copy)]
struct ActiveTheme {
    id: ThemeId,
    palette: Palette,
}

static ACTIVE: LazyLock<ArcSwap<ActiveTheme>> = LazyLock::new(|| {
    ArcSwap::from_pointee(ActiveTheme {
        id: ThemeId::Dark,
        palette: ThemeId::Dark.palette(),
    })
});

/// Set the process-wide active theme.
pub fn set_theme(id: ThemeId) {
    ACTIVE.store(Arc::new(ActiveTheme {
        id,
        palette: id.palette(),
    }));
}

/// The currently active theme.
pub fn current_theme() -> ThemeId {
    ACTIVE.load().id
}

/// A copy of the currently active palette.
pub fn current_palette() -> Palette {
    ACTIVE.load().palette
}
