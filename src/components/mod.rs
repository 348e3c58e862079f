pub mod badge;
pub mod button;

pub use badge::{Badge, BadgeSize, BadgeVariant, BADGE_SIZES, BADGE_VARIANTS};
pub use button::{Button, ButtonSize, ButtonVariant, BUTTON_SIZES, BUTTON_VARIANTS};

#[cfg(test)]
mod test_class_composition;
#[cfg(test)]
mod test_semantic_contract;
