//! Results of the novel-trait factory.

use super::types::{Trait, TraitKey};
use super::value::TraitPrimitive;

/// Discriminant of a [`NovelResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NovelKind {
    /// No change.
    None,
    /// A trait is added.
    Add,
    /// A trait is removed.
    Remove,
}

/// What a novel-trait factory wants done to a gene set.
#[derive(Debug, Clone, PartialEq)]
pub enum NovelResult<K: TraitKey, T: TraitPrimitive> {
    /// Leave the gene set alone.
    None,

    /// Add this trait unless its key is already expressed.
    Add(Trait<K, T>),

    /// Remove whatever trait has this key. The value is carried along
    /// for symmetry with `Add` and is otherwise ignored.
    Remove(Trait<K, T>),
}

impl<K: TraitKey, T: TraitPrimitive> NovelResult<K, T> {
    /// Builds an `Add` result.
    pub fn add(key: K, value: T) -> Self {
        NovelResult::Add(Trait::new(key, value))
    }

    /// Builds a `Remove` result.
    pub fn remove(key: K, value: T) -> Self {
        NovelResult::Remove(Trait::new(key, value))
    }

    /// The "nothing this time" result.
    pub fn none() -> Self {
        NovelResult::None
    }

    /// Which variant this is, without the carried trait.
    pub fn kind(&self) -> NovelKind {
        match self {
            NovelResult::None => NovelKind::None,
            NovelResult::Add(_) => NovelKind::Add,
            NovelResult::Remove(_) => NovelKind::Remove,
        }
    }

    /// The carried trait, if any.
    pub fn trait_ref(&self) -> Option<&Trait<K, T>> {
        match self {
            NovelResult::None => None,
            NovelResult::Add(t) | NovelResult::Remove(t) => Some(t),
        }
    }
}

impl<K: TraitKey, T: TraitPrimitive> Default for NovelResult<K, T> {
    fn default() -> Self {
        NovelResult::None
    }
}
