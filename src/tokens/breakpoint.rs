use super::KeyedScale;

pub const BREAKPOINT_STEPS: usize = 5;
pub type BreakpointScale = KeyedScale<&'static str, BREAKPOINT_STEPS>;

pub const BREAKPOINTS: BreakpointScale = KeyedScale::new([
    ("sm", "640px"),
    ("md", "768px"),
    ("lg", "1024px"),
    ("xl", "1280px"),
    ("2xl", "1536px"),
]);
