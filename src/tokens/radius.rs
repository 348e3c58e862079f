use super::KeyedScale;

pub const RADIUS_STEPS: usize = 9;
pub type RadiusScale = KeyedScale<&'static str, RADIUS_STEPS>;

pub const BORDER_RADIUS: RadiusScale = KeyedScale::new([
    ("none", "0px"),
    ("sm", "0.125rem"),
    ("default", "0.25rem"),
    ("md", "0.375rem"),
    ("lg", "0.5rem"),
    ("xl", "0.75rem"),
    ("2xl", "1rem"),
    ("3xl", "1.5rem"),
    ("full", "9999px"),
]);
