use indexmap::IndexMap;

pub mod animation;
pub mod breakpoint;
pub mod color;
pub mod layer;
pub mod radius;
pub mod shadow;
pub mod spacing;
pub mod typography;

pub use animation::*;
pub use breakpoint::*;
pub use color::*;
pub use layer::*;
pub use radius::*;
pub use shadow::*;
pub use spacing::*;
pub use typography::*;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct KeyedScale<V, const N: usize> {
    entries: [(&'static str, V); N],
}

impl<V: Copy, const N: usize> KeyedScale<V, N> {
    pub const fn new(entries: [(&'static str, V); N]) -> Self {
        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<V> {
        self.entries
            .iter()
            .find(|(candidate, _)| *candidate == key)
            .map(|(_, value)| *value)
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|(key, _)| *key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, V)> {
        self.entries.iter().copied()
    }

    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    pub fn store(&self) -> IndexMap<&'static str, V> {
        self.entries.iter().copied().collect()
    }
}

#[cfg(feature = "serde")]
impl<V: serde::Serialize, const N: usize> serde::Serialize for KeyedScale<V, N> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(N))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
