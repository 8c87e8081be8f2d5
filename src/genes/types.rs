//! Trait keys and key/value pairs.

use super::value::{TraitPrimitive, TraitValue};
use std::fmt;
use std::hash::Hash;

/// Capability set required of a trait key.
///
/// Implemented automatically; `u8`, `usize`, `String` and `&'static str`
/// are the usual choices.
pub trait TraitKey: Eq + Hash + Clone + fmt::Debug + Send + Sync {}

impl<K> TraitKey for K where K: Eq + Hash + Clone + fmt::Debug + Send + Sync {}

/// A single evolvable attribute: an immutable `(key, value)` pair.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trait<K: TraitKey, T: TraitPrimitive> {
    key: K,
    value: TraitValue<T>,
}

impl<K: TraitKey, T: TraitPrimitive> Trait<K, T> {
    /// Creates a trait from a key and a raw primitive.
    pub fn new(key: K, value: T) -> Self {
        Self::with_value(key, TraitValue::new(value))
    }

    /// Creates a trait from a key and an already wrapped value.
    pub fn with_value(key: K, value: TraitValue<T>) -> Self {
        Self { key, value }
    }

    /// The trait key.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The trait value.
    pub fn value(&self) -> TraitValue<T> {
        self.value
    }

    /// Returns `true` if both traits share a key, whatever their values.
    pub fn same_key(&self, other: &Self) -> bool {
        self.key == other.key
    }

    /// Splits the trait into its parts.
    pub fn into_parts(self) -> (K, TraitValue<T>) {
        (self.key, self.value)
    }
}

impl<K: TraitKey, T: TraitPrimitive> fmt::Display for Trait<K, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.key, self.value)
    }
}
