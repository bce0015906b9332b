#![forbid(unsafe_code)]

//! Semantic color roles and the default palette.
//!
//! A [`Palette`] is the complete set of named color and opacity roles the UI
//! layer consumes. It is a plain `Copy` record: resolving a theme hands each
//! caller an independent copy, so one caller can never alias another's
//! palette. [`Palette::DEFAULT`] is the canonical dark studio palette;
//! themed variants are produced by overlaying it (see the theme module).

use glaze_color::Rgb;

/// The complete mapping of semantic roles to color/opacity values.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Palette {
    /// Window and editor backdrop.
    pub background: Rgb,
    /// Default widget fill.
    pub surface: Rgb,
    /// Elevated widget fill (popups, dropdowns).
    pub surface_raised: Rgb,
    /// Accent for primary actions and focus rings.
    pub primary: Rgb,
    /// Muted accent for secondary emphasis.
    pub primary_dim: Rgb,
    /// Default widget outline.
    pub border: Rgb,
    /// Outline for hovered or highlighted widgets.
    pub border_light: Rgb,
    /// Primary text.
    pub text: Rgb,
    /// Secondary text and placeholders.
    pub text_dim: Rgb,
    /// Text on disabled widgets.
    pub text_disabled: Rgb,
    /// Positive status accent.
    pub success: Rgb,
    /// Cautionary status accent.
    pub warning: Rgb,
    /// Error status accent and invalid-input outline.
    pub error: Rgb,
    /// Opacity of hover overlays, in `[0, 1]`.
    pub hover_alpha: f32,
    /// Opacity applied to disabled widgets, in `[0, 1]`.
    pub disabled_alpha: f32,
}

impl Palette {
    /// The canonical dark studio palette.
    pub const DEFAULT: Palette = Palette {
        background: Rgb::from_u8(46, 46, 46),
        surface: Rgb::from_u8(56, 56, 56),
        surface_raised: Rgb::from_u8(66, 66, 66),
        primary: Rgb::from_u8(0, 162, 255),
        primary_dim: Rgb::from_u8(0, 116, 189),
        border: Rgb::from_u8(34, 34, 34),
        border_light: Rgb::from_u8(88, 88, 88),
        text: Rgb::from_u8(204, 204, 204),
        text_dim: Rgb::from_u8(153, 153, 153),
        text_disabled: Rgb::from_u8(102, 102, 102),
        success: Rgb::from_u8(70, 201, 126),
        warning: Rgb::from_u8(255, 176, 0),
        error: Rgb::from_u8(255, 82, 82),
        hover_alpha: 0.08,
        disabled_alpha: 0.4,
    };

    /// Look up a role by tag.
    ///
    /// Total over [`Role`]; every palette answers for every role.
    pub const fn get(&self, role: Role) -> RoleValue {
        match role {
            Role::Background => RoleValue::Color(self.background),
            Role::Surface => RoleValue::Color(self.surface),
            Role::SurfaceRaised => RoleValue::Color(self.surface_raised),
            Role::Primary => RoleValue::Color(self.primary),
            Role::PrimaryDim => RoleValue::Color(self.primary_dim),
            Role::Border => RoleValue::Color(self.border),
            Role::BorderLight => RoleValue::Color(self.border_light),
            Role::Text => RoleValue::Color(self.text),
            Role::TextDim => RoleValue::Color(self.text_dim),
            Role::TextDisabled => RoleValue::Color(self.text_disabled),
            Role::Success => RoleValue::Color(self.success),
            Role::Warning => RoleValue::Color(self.warning),
            Role::Error => RoleValue::Color(self.error),
            Role::HoverAlpha => RoleValue::Scalar(self.hover_alpha),
            Role::DisabledAlpha => RoleValue::Scalar(self.disabled_alpha),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Semantic role tags, one per [`Palette`] field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Background,
    Surface,
    SurfaceRaised,
    Primary,
    PrimaryDim,
    Border,
    BorderLight,
    Text,
    TextDim,
    TextDisabled,
    Success,
    Warning,
    Error,
    HoverAlpha,
    DisabledAlpha,
}

impl Role {
    /// Every role, in palette field order.
    pub const ALL: [Role; 15] = [
        Role::Background,
        Role::Surface,
        Role::SurfaceRaised,
        Role::Primary,
        Role::PrimaryDim,
        Role::Border,
        Role::BorderLight,
        Role::Text,
        Role::TextDim,
        Role::TextDisabled,
        Role::Success,
        Role::Warning,
        Role::Error,
        Role::HoverAlpha,
        Role::DisabledAlpha,
    ];

    /// Role name as the UI configuration spells it.
    pub const fn name(self) -> &'static str {
        match self {
            Role::Background => "background",
            Role::Surface => "surface",
            Role::SurfaceRaised => "surfaceRaised",
            Role::Primary => "primary",
            Role::PrimaryDim => "primaryDim",
            Role::Border => "border",
            Role::BorderLight => "borderLight",
            Role::Text => "text",
            Role::TextDim => "textDim",
            Role::TextDisabled => "textDisabled",
            Role::Success => "success",
            Role::Warning => "warning",
            Role::Error => "error",
            Role::HoverAlpha => "hoverAlpha",
            Role::DisabledAlpha => "disabledAlpha",
        }
    }
}

/// A resolved role value: a color or an opacity scalar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RoleValue {
    Color(Rgb),
    Scalar(f32),
}
