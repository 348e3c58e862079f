use std::sync::OnceLock;

use crate::tokens::{
    AnimationTokens, BreakpointScale, ColorTokens, RadiusScale, ShadowScale, SpacingScale,
    TypographyTokens, ZIndexScale, ANIMATIONS, BORDER_RADIUS, BREAKPOINTS, COLORS, SHADOWS,
    SPACING, TYPOGRAPHY, Z_INDEX,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Theme {
    pub colors: ColorTokens,
    pub typography: TypographyTokens,
    pub spacing: SpacingScale,
    pub border_radius: RadiusScale,
    pub shadows: ShadowScale,
    pub animations: AnimationTokens,
    pub z_index: ZIndexScale,
    pub breakpoints: BreakpointScale,
}

impl Theme {
    pub const fn assemble() -> Self {
        Self {
            colors: COLORS,
            typography: TYPOGRAPHY,
            spacing: SPACING,
            border_radius: BORDER_RADIUS,
            shadows: SHADOWS,
            animations: ANIMATIONS,
            z_index: Z_INDEX,
            breakpoints: BREAKPOINTS,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::assemble()
    }
}

// Assembled on first read, then shared by every caller for the process lifetime.
// There is no setter surface; a different token set means a different build.
pub fn theme() -> &'static Theme {
    static THEME: OnceLock<Theme> = OnceLock::new();
    THEME.get_or_init(Theme::assemble)
}

pub fn colors() -> &'static ColorTokens {
    &theme().colors
}

pub fn typography() -> &'static TypographyTokens {
    &theme().typography
}

pub fn spacing() -> &'static SpacingScale {
    &theme().spacing
}

pub fn border_radius() -> &'static RadiusScale {
    &theme().border_radius
}

pub fn shadows() -> &'static ShadowScale {
    &theme().shadows
}

pub fn animations() -> &'static AnimationTokens {
    &theme().animations
}

pub fn z_index() -> &'static ZIndexScale {
    &theme().z_index
}

pub fn breakpoints() -> &'static BreakpointScale {
    &theme().breakpoints
}
