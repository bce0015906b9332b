#![forbid(unsafe_code)]

//! Interaction-state-dependent widget styles.
//!
//! Two widget archetypes are styled here: button-like and input-like. Both
//! resolvers are pure transforms from a palette plus a flag record to a
//! fresh style record; there is no state machine and nothing is cached. The
//! flags are independent booleans evaluated in a fixed order, and that order
//! is the override-precedence contract:
//!
//! - buttons: hover, then active, then disabled. Background transforms
//!   stack (hover's lightening feeds active's darkening), while later
//!   stages win outright for the fields they assign.
//! - inputs: hover, then focused, then error. Only the border changes, so
//!   error always wins when several flags are up.

use glaze_color::Rgb;

use crate::palette::Palette;

/// Interaction flags for a button-like widget. Missing flags are false.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ButtonState {
    pub hover: bool,
    pub active: bool,
    pub disabled: bool,
}

/// Interaction flags for an input-like widget. Missing flags are false.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InputState {
    pub hover: bool,
    pub focused: bool,
    pub error: bool,
}

/// Resolved visual properties for a button-like widget.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ButtonStyle {
    pub background: Rgb,
    pub border: Rgb,
    pub text: Rgb,
    pub hover: bool,
    pub active: bool,
    pub disabled: bool,
}

/// Resolved visual properties for an input-like widget.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InputStyle {
    pub background: Rgb,
    pub border: Rgb,
    pub text: Rgb,
    pub placeholder: Rgb,
    pub hover: bool,
    pub focused: bool,
    pub error: bool,
}

impl Palette {
    /// Resolve the style for a button-like widget.
    ///
    /// Base is `surface`/`border`/`text`. Stages apply hover, active,
    /// disabled in that order; `active` darkens whatever background the
    /// hover stage produced, and `disabled` darkens further and always
    /// wins for `text`.
    pub fn button_style(&self, state: ButtonState) -> ButtonStyle {
        let mut style = ButtonStyle {
            background: self.surface,
            border: self.border,
            text: self.text,
            hover: false,
            active: false,
            disabled: false,
        };
        if state.hover {
            style.background = style.background.lighten(0.1);
            style.hover = true;
        }
        if state.active {
            style.background = style.background.darken(0.1);
            style.border = self.primary;
            style.active = true;
        }
        if state.disabled {
            style.background = style.background.darken(0.2);
            style.text = self.text_disabled;
            style.disabled = true;
        }
        style
    }

    /// Resolve the style for an input-like widget.
    ///
    /// Only the border varies with state: hover takes `border_light`,
    /// focus takes `primary` over hover, error takes `error` over both.
    pub fn input_style(&self, state: InputState) -> InputStyle {
        let mut style = InputStyle {
            background: self.surface,
            border: self.border,
            text: self.text,
            placeholder: self.text_dim,
            hover: false,
            focused: false,
            error: false,
        };
        if state.hover {
            style.border = self.border_light;
            style.hover = true;
        }
        if state.focused {
            style.border = self.primary;
            style.focused = true;
        }
        if state.error {
            style.border = self.error;
            style.error = true;
        }
        style
    }
}
