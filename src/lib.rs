pub mod components;
pub mod contracts;
pub mod foundation;
pub mod prelude;
pub mod style;
pub mod theme;
pub mod tokens;


pub use components::{Badge, BadgeSize, BadgeVariant, Button, ButtonSize, ButtonVariant};
pub use contracts::{ClassRecipe, Disableable};
pub use style::ClassList;
pub use theme::{
    animations, border_radius, breakpoints, colors, shadows, spacing, theme, typography, z_index,
    Theme,
};
