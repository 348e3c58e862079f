pub use crate::components::{
    Badge, BadgeSize, BadgeVariant, Button, ButtonSize, ButtonVariant, BADGE_SIZES,
    BADGE_VARIANTS, BUTTON_SIZES, BUTTON_VARIANTS,
};
pub use crate::contracts::{ClassRecipe, Disableable};
pub use crate::style::ClassList;
pub use crate::theme::{theme, Theme};
