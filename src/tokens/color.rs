use indexmap::IndexMap;

pub const SHADE_STOPS: usize = 11;
pub type ColorScale = [&'static str; SHADE_STOPS];

pub const SHADE_KEYS: [&'static str; SHADE_STOPS] = [
    "50", "100", "200", "300", "400", "500", "600", "700", "800", "900", "950",
];

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ScaleKey {
    Orange,
    Blue,
    Gray,
}

impl ScaleKey {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Orange => "orange",
            Self::Blue => "blue",
            Self::Gray => "gray",
        }
    }
}

pub const SCALE_KEYS: [ScaleKey; 3] = [ScaleKey::Orange, ScaleKey::Blue, ScaleKey::Gray];

pub struct ScaleCatalog;

impl ScaleCatalog {
    pub const fn scale(key: ScaleKey) -> ColorScale {
        match key {
            ScaleKey::Orange => [
                "#fff7ed", "#ffedd5", "#fed7aa", "#fdba74", "#fb923c", "#f97316", "#ea580c",
                "#c2410c", "#9a3412", "#7c2d12", "#431407",
            ],
            ScaleKey::Blue => [
                "#eff6ff", "#dbeafe", "#bfdbfe", "#93c5fd", "#60a5fa", "#3b82f6", "#2563eb",
                "#1d4ed8", "#1e40af", "#1e3a8a", "#172554",
            ],
            ScaleKey::Gray => [
                "#f9fafb", "#f3f4f6", "#e5e7eb", "#d1d5db", "#9ca3af", "#6b7280", "#4b5563",
                "#374151", "#1f2937", "#111827", "#030712",
            ],
        }
    }

    pub fn store() -> IndexMap<ScaleKey, ColorScale> {
        let mut scale_store = IndexMap::new();
        for key in SCALE_KEYS {
            scale_store.insert(key, Self::scale(key));
        }
        scale_store
    }
}

pub fn shade(scale: &ColorScale, key: &str) -> Option<&'static str> {
    SHADE_KEYS
        .iter()
        .position(|candidate| *candidate == key)
        .map(|index| scale[index])
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SemanticPalette {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub destructive: &'static str,
    pub success: &'static str,
    pub warning: &'static str,
    pub info: &'static str,
    pub background: &'static str,
    pub foreground: &'static str,
}

pub const SEMANTIC: SemanticPalette = SemanticPalette {
    primary: ScaleCatalog::scale(ScaleKey::Orange)[5],
    secondary: ScaleCatalog::scale(ScaleKey::Blue)[5],
    destructive: "#ef4444",
    success: "#22c55e",
    warning: "#eab308",
    info: ScaleCatalog::scale(ScaleKey::Blue)[5],
    background: "#0a0a0a",
    foreground: "#fafafa",
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ColorTokens {
    pub orange: ColorScale,
    pub blue: ColorScale,
    pub gray: ColorScale,
    pub semantic: SemanticPalette,
}

pub const COLORS: ColorTokens = ColorTokens {
    orange: ScaleCatalog::scale(ScaleKey::Orange),
    blue: ScaleCatalog::scale(ScaleKey::Blue),
    gray: ScaleCatalog::scale(ScaleKey::Gray),
    semantic: SEMANTIC,
};
