//! Immutable gene sets.

use super::types::{Trait, TraitKey};
use super::value::{TraitPrimitive, TraitValue};
use crate::error::{GeneError, Result};
use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// An individual's genome: an ordered, immutable collection of traits.
///
/// Traits keep their construction order. A key index gives O(1)
/// lookup. Keys are unique: when construction sees a key twice, the
/// later value replaces the earlier one in place.
///
/// Nothing hands out mutable access, so the order and the index can
/// never drift apart after construction.
///
/// # Examples
///
/// ```
/// use traitor::genes::{GeneSet, Trait};
///
/// let genes = GeneSet::new([Trait::new("speed", 3), Trait::new("size", 7)]);
/// assert_eq!(genes.count(), 2);
/// assert_eq!(genes.get(1).unwrap().key(), &"size");
/// assert_eq!(genes.value("speed").unwrap().into_inner(), 3);
/// assert!(genes.try_get("colour").is_none());
/// ```
#[derive(Clone)]
pub struct GeneSet<K: TraitKey, T: TraitPrimitive> {
    traits: Vec<Trait<K, T>>,
    index: HashMap<K, usize>,
}

impl<K: TraitKey, T: TraitPrimitive> GeneSet<K, T> {
    /// Builds a gene set from a sequence of traits.
    pub fn new<I>(traits: I) -> Self
    where
        I: IntoIterator<Item = Trait<K, T>>,
    {
        let iter = traits.into_iter();
        let (lower, _) = iter.size_hint();
        let mut set = Self {
            traits: Vec::with_capacity(lower),
            index: HashMap::with_capacity(lower),
        };

        for t in iter {
            match set.index.get(t.key()) {
                Some(&pos) => set.traits[pos] = t,
                None => {
                    set.index.insert(t.key().clone(), set.traits.len());
                    set.traits.push(t);
                }
            }
        }

        set
    }

    /// Builds a gene set from a sequence that may be absent.
    ///
    /// # Errors
    /// [`GeneError::InvalidArgument`] if `traits` is `None`.
    pub fn try_from_traits<I>(traits: Option<I>) -> Result<Self>
    where
        I: IntoIterator<Item = Trait<K, T>>,
    {
        traits
            .map(Self::new)
            .ok_or_else(|| GeneError::InvalidArgument("traits must be present".into()))
    }

    /// The empty gene set.
    pub fn empty() -> Self {
        Self {
            traits: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Number of traits.
    pub fn count(&self) -> usize {
        self.traits.len()
    }

    /// Same as [`count`](Self::count).
    pub fn len(&self) -> usize {
        self.count()
    }

    /// Returns `true` if the set has no traits.
    pub fn is_empty(&self) -> bool {
        self.traits.is_empty()
    }

    /// Returns the trait at `index` in construction order.
    ///
    /// # Errors
    /// [`GeneError::OutOfRange`] if `index >= count()`.
    pub fn get(&self, index: usize) -> Result<&Trait<K, T>> {
        self.traits.get(index).ok_or(GeneError::OutOfRange {
            index,
            count: self.count(),
        })
    }

    /// Returns the value stored under `key`.
    ///
    /// # Errors
    /// [`GeneError::KeyNotFound`] if the key is not expressed. Use
    /// [`try_get`](Self::try_get) when absence is expected.
    pub fn value<Q>(&self, key: &Q) -> Result<TraitValue<T>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + fmt::Debug + ?Sized,
    {
        self.try_get(key)
            .ok_or_else(|| GeneError::KeyNotFound(format!("{key:?}")))
    }

    /// Returns the value stored under `key`, if any.
    pub fn try_get<Q>(&self, key: &Q) -> Option<TraitValue<T>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(key).map(|&pos| self.traits[pos].value())
    }

    /// Returns `true` if the set expresses `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    /// All keys, in no particular order.
    ///
    /// Use [`iter`](Self::iter) when construction order matters.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.index.keys()
    }

    /// Iterates traits in construction order.
    pub fn iter(&self) -> std::slice::Iter<'_, Trait<K, T>> {
        self.traits.iter()
    }
}

impl<K: TraitKey, T: TraitPrimitive> Default for GeneSet<K, T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<K: TraitKey, T: TraitPrimitive> FromIterator<Trait<K, T>> for GeneSet<K, T> {
    fn from_iter<I: IntoIterator<Item = Trait<K, T>>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a, K: TraitKey, T: TraitPrimitive> IntoIterator for &'a GeneSet<K, T> {
    type Item = &'a Trait<K, T>;
    type IntoIter = std::slice::Iter<'a, Trait<K, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Order-independent: same count, and every trait on the left has an
/// equal value under the same key on the right.
impl<K: TraitKey, T: TraitPrimitive> PartialEq for GeneSet<K, T> {
    fn eq(&self, other: &Self) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }
        if self.count() != other.count() {
            return false;
        }
        self.traits
            .iter()
            .all(|t| other.try_get(t.key()) == Some(t.value()))
    }
}

impl<K: TraitKey, T: TraitPrimitive> fmt::Debug for GeneSet<K, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.traits.iter().map(|t| (t.key(), t.value())))
            .finish()
    }
}

#[cfg(feature = "serde")]
impl<K, T> serde::Serialize for GeneSet<K, T>
where
    K: TraitKey + serde::Serialize,
    T: TraitPrimitive + serde::Serialize,
{
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.traits.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, K, T> serde::Deserialize<'de> for GeneSet<K, T>
where
    K: TraitKey + serde::Deserialize<'de>,
    T: TraitPrimitive + serde::Deserialize<'de>,
{
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        <Vec<Trait<K, T>> as serde::Deserialize>::deserialize(deserializer).map(Self::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn foo() -> GeneSet<String, i32> {
        GeneSet::new([Trait::new("foo".to_string(), 9)])
    }

    #[test]
    fn test_absent_sequence_is_invalid() {
        let r = GeneSet::<String, i32>::try_from_traits(None::<Vec<Trait<String, i32>>>);
        assert!(matches!(r, Err(GeneError::InvalidArgument(_))));

        let r = GeneSet::try_from_traits(Some(vec![Trait::new(1u8, 1)]));
        assert_eq!(r.map(|g| g.count()), Ok(1));
    }

    #[test]
    fn test_contains_key() {
        let genes = foo();
        assert!(genes.contains_key("foo"));
        assert!(!genes.contains_key("bar"));
    }

    #[test]
    fn test_try_get() {
        let genes = foo();
        assert_eq!(genes.try_get("foo"), Some(TraitValue::new(9)));
        assert_eq!(genes.try_get("bar"), None);
    }

    #[test]
    fn test_value_by_key() {
        let genes = foo();
        assert_eq!(genes.value("foo"), Ok(TraitValue::new(9)));
        assert_eq!(
            genes.value("bar"),
            Err(GeneError::KeyNotFound("\"bar\"".into()))
        );
    }

    #[test]
    fn test_keys() {
        let genes = GeneSet::new([Trait::new(1u8, 0), Trait::new(2u8, 0), Trait::new(3u8, 0)]);
        let mut keys: Vec<u8> = genes.keys().copied().collect();
        keys.sort_unstable();
        assert_eq!(keys, vec![1, 2, 3]);
    }

    #[test]
    fn test_count() {
        assert_eq!(foo().count(), 1);
        assert_eq!(GeneSet::<String, i32>::empty().count(), 0);
        assert!(GeneSet::<String, i32>::default().is_empty());
    }

    #[test]
    fn test_get_out_of_range() {
        let empty = GeneSet::<String, i32>::empty();
        assert_eq!(
            empty.get(0),
            Err(GeneError::OutOfRange { index: 0, count: 0 })
        );
        assert_eq!(
            foo().get(1),
            Err(GeneError::OutOfRange { index: 1, count: 1 })
        );
    }

    #[test]
    fn test_get_by_position() {
        let genes = GeneSet::new([Trait::new("foo", 123)]);
        assert_eq!(genes.get(0), Ok(&Trait::new("foo", 123)));
    }

    #[test]
    fn test_duplicate_key_last_value_first_position() {
        let genes = GeneSet::new([
            Trait::new('a', 1),
            Trait::new('b', 2),
            Trait::new('a', 3),
        ]);
        assert_eq!(genes.count(), 2);
        assert_eq!(genes.get(0), Ok(&Trait::new('a', 3)));
        assert_eq!(genes.get(1), Ok(&Trait::new('b', 2)));
    }

    #[test]
    fn test_iteration_is_ordered_and_restartable() {
        let genes: GeneSet<u8, i32> = (0..5u8).rev().map(|k| Trait::new(k, k as i32)).collect();
        let first: Vec<u8> = genes.iter().map(|t| *t.key()).collect();
        let second: Vec<u8> = (&genes).into_iter().map(|t| *t.key()).collect();
        assert_eq!(first, vec![4, 3, 2, 1, 0]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_equality() {
        let a = GeneSet::new([Trait::new(1u8, 1), Trait::new(2u8, 2)]);
        let b = GeneSet::new([Trait::new(2u8, 2), Trait::new(1u8, 1)]);
        let c = GeneSet::new([Trait::new(1u8, 1), Trait::new(2u8, 3)]);
        let d = GeneSet::new([Trait::new(1u8, 1)]);
        assert_eq!(a, a);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
        assert_eq!(GeneSet::<u8, i32>::empty(), GeneSet::empty());
    }

    #[test]
    fn test_debug_format() {
        let genes = GeneSet::new([Trait::new(1u8, 10), Trait::new(0u8, 20)]);
        assert_eq!(format!("{genes:?}"), "{1: TraitValue(10), 0: TraitValue(20)}");
    }

    proptest! {
        #[test]
        fn prop_equality_ignores_order(
            (traits, permuted) in proptest::collection::hash_map(any::<u16>(), any::<i32>(), 0..32)
                .prop_map(|m| m.into_iter().map(|(k, v)| Trait::new(k, v)).collect::<Vec<_>>())
                .prop_flat_map(|traits| (Just(traits.clone()), Just(traits).prop_shuffle())),
        ) {
            prop_assert_eq!(GeneSet::new(traits), GeneSet::new(permuted));
        }

        #[test]
        fn prop_lookup_matches_construction(
            entries in proptest::collection::hash_map(any::<u8>(), any::<i64>(), 0..64),
        ) {
            let genes: GeneSet<u8, i64> =
                entries.iter().map(|(&k, &v)| Trait::new(k, v)).collect();
            prop_assert_eq!(genes.count(), entries.len());
            for (k, v) in &entries {
                prop_assert_eq!(genes.try_get(k).map(TraitValue::into_inner), Some(*v));
            }
        }
    }
}
