use super::KeyedScale;

pub const Z_INDEX_STEPS: usize = 7;
pub type ZIndexScale = KeyedScale<&'static str, Z_INDEX_STEPS>;

pub const Z_INDEX: ZIndexScale = KeyedScale::new([
    ("0", "0"),
    ("10", "10"),
    ("20", "20"),
    ("30", "30"),
    ("40", "40"),
    ("50", "50"),
    ("auto", "auto"),
]);
