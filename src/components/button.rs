use crate::contracts::ClassRecipe;
use crate::style::ClassList;

const BASE: &str =
    "inline-flex items-center justify-center gap-2 whitespace-nowrap rounded-md text-sm font-medium transition-colors";
const STATE: &str =
    "focus-visible:outline-none focus-visible:ring-1 focus-visible:ring-ring disabled:pointer-events-none disabled:opacity-50";
const DISABLED: &str = "pointer-events-none opacity-50";
const LOADING: &str = "cursor-wait";

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ButtonVariant {
    Default,
    Destructive,
    Outline,
    Secondary,
    Ghost,
    Link,
}

impl ButtonVariant {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Destructive => "destructive",
            Self::Outline => "outline",
            Self::Secondary => "secondary",
            Self::Ghost => "ghost",
            Self::Link => "link",
        }
    }

    pub const fn classes(self) -> &'static str {
        match self {
            Self::Default => "bg-primary text-primary-foreground shadow hover:bg-primary/90",
            Self::Destructive => {
                "bg-destructive text-destructive-foreground shadow-sm hover:bg-destructive/90"
            }
            Self::Outline => {
                "border border-input bg-background shadow-sm hover:bg-accent hover:text-accent-foreground"
            }
            Self::Secondary => "bg-secondary text-secondary-foreground shadow-sm hover:bg-secondary/80",
            Self::Ghost => "hover:bg-accent hover:text-accent-foreground",
            Self::Link => "text-primary underline-offset-4 hover:underline",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        BUTTON_VARIANTS
            .into_iter()
            .find(|variant| variant.as_str() == name)
    }
}

pub const BUTTON_VARIANTS: [ButtonVariant; 6] = [
    ButtonVariant::Default,
    ButtonVariant::Destructive,
    ButtonVariant::Outline,
    ButtonVariant::Secondary,
    ButtonVariant::Ghost,
    ButtonVariant::Link,
];

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ButtonSize {
    Default,
    Sm,
    Lg,
    Icon,
}

impl ButtonSize {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Sm => "sm",
            Self::Lg => "lg",
            Self::Icon => "icon",
        }
    }

    pub const fn classes(self) -> &'static str {
        match self {
            Self::Default => "h-9 px-4 py-2",
            Self::Sm => "h-8 rounded-md px-3 text-xs",
            Self::Lg => "h-10 rounded-md px-8",
            Self::Icon => "h-9 w-9",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        BUTTON_SIZES.into_iter().find(|size| size.as_str() == name)
    }
}

pub const BUTTON_SIZES: [ButtonSize; 4] = [
    ButtonSize::Default,
    ButtonSize::Sm,
    ButtonSize::Lg,
    ButtonSize::Icon,
];

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Button {
    variant: ButtonVariant,
    size: ButtonSize,
    disabled: bool,
    loading: bool,
    class: Option<String>,
}

impl Button {
    pub fn new() -> Self {
        Self {
            variant: ButtonVariant::Default,
            size: ButtonSize::Default,
            disabled: false,
            loading: false,
            class: None,
        }
    }

    pub fn variant(mut self, value: ButtonVariant) -> Self {
        self.variant = value;
        self
    }

    // Unrecognized names keep the default recipe rather than failing; styling
    // utilities are forgiving at this boundary.
    pub fn variant_name(mut self, name: impl AsRef<str>) -> Self {
        let name = name.as_ref();
        self.variant = ButtonVariant::from_name(name).unwrap_or_else(|| {
            tracing::debug!(name, "unknown button variant, keeping default");
            ButtonVariant::Default
        });
        self
    }

    pub fn size(mut self, value: ButtonSize) -> Self {
        self.size = value;
        self
    }

    pub fn size_name(mut self, name: impl AsRef<str>) -> Self {
        let name = name.as_ref();
        self.size = ButtonSize::from_name(name).unwrap_or_else(|| {
            tracing::debug!(name, "unknown button size, keeping default");
            ButtonSize::Default
        });
        self
    }

    pub fn disabled(mut self, value: bool) -> Self {
        self.disabled = value;
        self
    }

    pub fn loading(mut self, value: bool) -> Self {
        self.loading = value;
        self
    }

    pub fn class(mut self, value: impl Into<String>) -> Self {
        self.class = Some(value.into());
        self
    }
}

impl Default for Button {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassRecipe for Button {
    fn class_list(&self) -> ClassList {
        let mut list = ClassList::new()
            .fragment(BASE)
            .fragment(STATE)
            .fragment(self.variant.classes())
            .fragment(self.size.classes());
        if self.disabled {
            list = list.fragment(DISABLED);
        }
        if self.loading {
            list = list.fragment(LOADING);
        }
        if let Some(class) = &self.class {
            list = list.fragment(class.clone());
        }
        list
    }
}

crate::impl_disableable!(Button);
