//! The novel-trait factory seam.

use crate::error::{GeneError, Result};
use crate::genes::{NovelResult, TraitKey, TraitPrimitive};

/// Proposes a trait to add to, or remove from, a gene set.
///
/// `used_keys` are the keys the gene set under construction already
/// expresses. Any `Fn(&[&K]) -> NovelResult<K, T> + Send + Sync` closure
/// is a factory:
///
/// ```
/// use traitor::combine::NovelTraitFactory;
/// use traitor::genes::NovelResult;
///
/// let next_free = |used: &[&u8]| NovelResult::add(used.len() as u8, 0);
/// let r: NovelResult<u8, i32> = next_free.create(&[&0, &1]).unwrap();
/// assert_eq!(r, NovelResult::add(2, 0));
/// ```
pub trait NovelTraitFactory<K: TraitKey, T: TraitPrimitive>: Send + Sync {
    /// Produces the next novel result.
    ///
    /// # Errors
    /// Implementations may refuse; the error propagates to the caller of
    /// `combine` or of the random-set iterator.
    fn create(&self, used_keys: &[&K]) -> Result<NovelResult<K, T>>;
}

impl<K, T, F> NovelTraitFactory<K, T> for F
where
    K: TraitKey,
    T: TraitPrimitive,
    F: Fn(&[&K]) -> NovelResult<K, T> + Send + Sync,
{
    fn create(&self, used_keys: &[&K]) -> Result<NovelResult<K, T>> {
        Ok(self(used_keys))
    }
}

/// Factory for combiners built without novel-trait support.
///
/// Those combiners run with a zero novel-trait threshold, so `combine`
/// never reaches the factory. Anything that does call it gets
/// [`GeneError::Unsupported`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NoNovelTraits;

impl<K: TraitKey, T: TraitPrimitive> NovelTraitFactory<K, T> for NoNovelTraits {
    fn create(&self, _used_keys: &[&K]) -> Result<NovelResult<K, T>> {
        Err(GeneError::Unsupported)
    }
}
