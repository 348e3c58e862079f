use super::KeyedScale;

pub const DURATION_STEPS: usize = 8;
pub type DurationScale = KeyedScale<&'static str, DURATION_STEPS>;

pub const DURATIONS: DurationScale = KeyedScale::new([
    ("75", "75ms"),
    ("100", "100ms"),
    ("150", "150ms"),
    ("200", "200ms"),
    ("300", "300ms"),
    ("500", "500ms"),
    ("700", "700ms"),
    ("1000", "1000ms"),
]);

pub const EASING_STEPS: usize = 4;
pub type EasingScale = KeyedScale<&'static str, EASING_STEPS>;

pub const EASINGS: EasingScale = KeyedScale::new([
    ("linear", "linear"),
    ("in", "cubic-bezier(0.4, 0, 1, 1)"),
    ("out", "cubic-bezier(0, 0, 0.2, 1)"),
    ("in-out", "cubic-bezier(0.4, 0, 0.2, 1)"),
]);

pub const KEYFRAME_STEPS: usize = 5;
pub type KeyframeScale = KeyedScale<&'static str, KEYFRAME_STEPS>;

pub const KEYFRAMES: KeyframeScale = KeyedScale::new([
    ("none", "none"),
    ("spin", "spin 1s linear infinite"),
    ("ping", "ping 1s cubic-bezier(0, 0, 0.2, 1) infinite"),
    ("pulse", "pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite"),
    ("bounce", "bounce 1s infinite"),
]);

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AnimationTokens {
    pub duration: DurationScale,
    pub easing: EasingScale,
    pub keyframes: KeyframeScale,
}

pub const ANIMATIONS: AnimationTokens = AnimationTokens {
    duration: DURATIONS,
    easing: EASINGS,
    keyframes: KEYFRAMES,
};
