use crate::contracts::ClassRecipe;
use crate::style::ClassList;

const BASE: &str = "inline-flex items-center rounded-md border font-semibold transition-colors";
const STATE: &str = "focus:outline-none focus:ring-2 focus:ring-ring focus:ring-offset-2";

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum BadgeVariant {
    Default,
    Secondary,
    Destructive,
    Outline,
}

impl BadgeVariant {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Secondary => "secondary",
            Self::Destructive => "destructive",
            Self::Outline => "outline",
        }
    }

    pub const fn classes(self) -> &'static str {
        match self {
            Self::Default => {
                "border-transparent bg-primary text-primary-foreground shadow hover:bg-primary/80"
            }
            Self::Secondary => {
                "border-transparent bg-secondary text-secondary-foreground hover:bg-secondary/80"
            }
            Self::Destructive => {
                "border-transparent bg-destructive text-destructive-foreground shadow hover:bg-destructive/80"
            }
            Self::Outline => "text-foreground",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        BADGE_VARIANTS
            .into_iter()
            .find(|variant| variant.as_str() == name)
    }
}

pub const BADGE_VARIANTS: [BadgeVariant; 4] = [
    BadgeVariant::Default,
    BadgeVariant::Secondary,
    BadgeVariant::Destructive,
    BadgeVariant::Outline,
];

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum BadgeSize {
    Sm,
    Default,
    Lg,
}

impl BadgeSize {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Default => "default",
            Self::Lg => "lg",
        }
    }

    pub const fn classes(self) -> &'static str {
        match self {
            Self::Sm => "px-2 py-px text-xs",
            Self::Default => "px-2.5 py-0.5 text-xs",
            Self::Lg => "px-3 py-1 text-sm",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        BADGE_SIZES.into_iter().find(|size| size.as_str() == name)
    }
}

pub const BADGE_SIZES: [BadgeSize; 3] = [BadgeSize::Sm, BadgeSize::Default, BadgeSize::Lg];

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Badge {
    variant: BadgeVariant,
    size: BadgeSize,
    class: Option<String>,
}

impl Badge {
    pub fn new() -> Self {
        Self {
            variant: BadgeVariant::Default,
            size: BadgeSize::Default,
            class: None,
        }
    }

    pub fn variant(mut self, value: BadgeVariant) -> Self {
        self.variant = value;
        self
    }

    pub fn variant_name(mut self, name: impl AsRef<str>) -> Self {
        let name = name.as_ref();
        self.variant = BadgeVariant::from_name(name).unwrap_or_else(|| {
            tracing::debug!(name, "unknown badge variant, keeping default");
            BadgeVariant::Default
        });
        self
    }

    pub fn size(mut self, value: BadgeSize) -> Self {
        self.size = value;
        self
    }

    pub fn size_name(mut self, name: impl AsRef<str>) -> Self {
        let name = name.as_ref();
        self.size = BadgeSize::from_name(name).unwrap_or_else(|| {
            tracing::debug!(name, "unknown badge size, keeping default");
            BadgeSize::Default
        });
        self
    }

    pub fn class(mut self, value: impl Into<String>) -> Self {
        self.class = Some(value.into());
        self
    }
}

impl Default for Badge {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassRecipe for Badge {
    fn class_list(&self) -> ClassList {
        let mut list = ClassList::new()
            .fragment(BASE)
            .fragment(STATE)
            .fragment(self.variant.classes())
            .fragment(self.size.classes());
        if let Some(class) = &self.class {
            list = list.fragment(class.clone());
        }
        list
    }
}
