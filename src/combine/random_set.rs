//! Lazy generator of random gene sets.

use super::combiner::GeneCombiner;
use crate::error::Result;
use crate::genes::{GeneSet, TraitKey, TraitPrimitive};

/// Endless iterator returned by
/// [`GeneCombiner::create_random_sets`].
///
/// Never returns `None`; take as many sets as needed. Recreate it to
/// start over. A factory error is yielded as an `Err` item and does not
/// end the iteration.
#[derive(Debug)]
pub struct RandomSets<'a, K: TraitKey, T: TraitPrimitive> {
    combiner: &'a GeneCombiner<K, T>,
    min_traits: usize,
    max_traits: usize,
}

impl<'a, K: TraitKey, T: TraitPrimitive> RandomSets<'a, K, T> {
    pub(crate) fn new(combiner: &'a GeneCombiner<K, T>, min_traits: usize, max_traits: usize) -> Self {
        Self {
            combiner,
            min_traits,
            max_traits,
        }
    }
}

impl<K: TraitKey, T: TraitPrimitive> Iterator for RandomSets<'_, K, T> {
    type Item = Result<GeneSet<K, T>>;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.combiner.random_set(self.min_traits, self.max_traits))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<K: TraitKey, T: TraitPrimitive> std::iter::FusedIterator for RandomSets<'_, K, T> {}
