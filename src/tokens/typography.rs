use super::KeyedScale;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FontStack {
    families: &'static [&'static str],
}

impl FontStack {
    pub const fn new(families: &'static [&'static str]) -> Self {
        Self { families }
    }

    pub const fn preferred(&self) -> &'static str {
        self.families[0]
    }

    pub fn families(&self) -> impl Iterator<Item = &'static str> {
        self.families.iter().copied()
    }

    pub fn css(&self) -> String {
        self.families.join(", ")
    }
}

pub const FONT_SANS: FontStack = FontStack::new(&[
    "var(--font-geist-sans)",
    "var(--font-inter)",
    "system-ui",
    "sans-serif",
]);

pub const FONT_MONO: FontStack = FontStack::new(&[
    "var(--font-geist-mono)",
    "ui-monospace",
    "SFMono-Regular",
    "monospace",
]);

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FontFamilyTokens {
    pub sans: FontStack,
    pub mono: FontStack,
}

pub const FONT_SIZE_STEPS: usize = 13;
pub type FontSizeScale = KeyedScale<&'static str, FONT_SIZE_STEPS>;

pub const FONT_SIZES: FontSizeScale = KeyedScale::new([
    ("xs", "0.75rem"),
    ("sm", "0.875rem"),
    ("base", "1rem"),
    ("lg", "1.125rem"),
    ("xl", "1.25rem"),
    ("2xl", "1.5rem"),
    ("3xl", "1.875rem"),
    ("4xl", "2.25rem"),
    ("5xl", "3rem"),
    ("6xl", "3.75rem"),
    ("7xl", "4.5rem"),
    ("8xl", "6rem"),
    ("9xl", "8rem"),
]);

pub const FONT_WEIGHT_STEPS: usize = 9;
pub type FontWeightScale = KeyedScale<u16, FONT_WEIGHT_STEPS>;

pub const FONT_WEIGHTS: FontWeightScale = KeyedScale::new([
    ("thin", 100),
    ("extralight", 200),
    ("light", 300),
    ("normal", 400),
    ("medium", 500),
    ("semibold", 600),
    ("bold", 700),
    ("extrabold", 800),
    ("black", 900),
]);

pub const LINE_HEIGHT_STEPS: usize = 6;
pub type LineHeightScale = KeyedScale<&'static str, LINE_HEIGHT_STEPS>;

pub const LINE_HEIGHTS: LineHeightScale = KeyedScale::new([
    ("none", "1"),
    ("tight", "1.25"),
    ("snug", "1.375"),
    ("normal", "1.5"),
    ("relaxed", "1.625"),
    ("loose", "2"),
]);

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TypographyTokens {
    pub font_family: FontFamilyTokens,
    pub font_size: FontSizeScale,
    pub font_weight: FontWeightScale,
    pub line_height: LineHeightScale,
}

pub const TYPOGRAPHY: TypographyTokens = TypographyTokens {
    font_family: FontFamilyTokens {
        sans: FONT_SANS,
        mono: FONT_MONO,
    },
    font_size: FONT_SIZES,
    font_weight: FONT_WEIGHTS,
    line_height: LINE_HEIGHTS,
};
