//! Crossover, mutation and novel-trait injection.
//!
//! [`GeneCombiner`] turns one or more parent gene sets into a child:
//! per-key parent selection → threshold mutation → optional novel trait.

use super::config::CombinerConfig;
use super::random_set::RandomSets;
use super::types::{NoNovelTraits, NovelTraitFactory};
use crate::error::{GeneError, Result};
use crate::genes::{GeneSet, NovelResult, Probability, Trait, TraitKey, TraitPrimitive, TraitValue};
use crate::mutators::Mutator;
use crate::random::{RandomSource, RngSource};
use log::{debug, trace};
use std::collections::HashSet;

/// One independent combination for [`GeneCombiner::combine_batch`]:
/// the initial gene set and the additional parents.
pub type CombineJob<'a, K, T> = (&'a GeneSet<K, T>, &'a [&'a GeneSet<K, T>]);

/// Combines parent gene sets into children.
///
/// Holds a random source, a novel-trait factory, a mutator and two
/// integer thresholds derived once at construction. It has no mutable
/// state of its own, so `combine` may run concurrently from many
/// threads as long as the injected random source tolerates it
/// ([`RngSource`] does).
///
/// # Usage
///
/// ```
/// use traitor::combine::GeneCombiner;
/// use traitor::genes::{GeneSet, Probability, Trait};
/// use traitor::random::CycleSource;
///
/// let combiner = GeneCombiner::mutation_only(
///     CycleSource::constant(1),
///     |v: i32| v + 1,
///     Probability::IDENTITY,
/// )
/// .unwrap();
///
/// let mother = GeneSet::empty();
/// let father = GeneSet::new([Trait::new(1u8, 1)]);
/// let child = combiner.combine(&mother, &[&father]).unwrap();
/// assert_eq!(child.value(&1).unwrap().into_inner(), 2);
/// ```
pub struct GeneCombiner<K: TraitKey, T: TraitPrimitive> {
    random: Box<dyn RandomSource>,
    factory: Box<dyn NovelTraitFactory<K, T>>,
    mutator: Box<dyn Mutator<T>>,
    mutation_threshold: usize,
    novel_threshold: usize,
    novel_attempts: usize,
}

impl<K: TraitKey, T: TraitPrimitive> GeneCombiner<K, T> {
    /// Creates a combiner with every collaborator supplied.
    ///
    /// # Errors
    /// [`GeneError::Overflow`] if either chance overflows its threshold.
    pub fn new(
        random: impl RandomSource + 'static,
        factory: impl NovelTraitFactory<K, T> + 'static,
        mutator: impl Mutator<T> + 'static,
        mutation_chance: Probability,
        novel_trait_chance: Probability,
    ) -> Result<Self> {
        let config = CombinerConfig::default()
            .with_mutation_chance(mutation_chance)
            .with_novel_trait_chance(novel_trait_chance);
        Self::build(Box::new(random), Box::new(factory), Box::new(mutator), &config)
    }

    /// Like [`new`](Self::new), with an OS-seeded [`RngSource`].
    pub fn with_entropy(
        factory: impl NovelTraitFactory<K, T> + 'static,
        mutator: impl Mutator<T> + 'static,
        mutation_chance: Probability,
        novel_trait_chance: Probability,
    ) -> Result<Self> {
        Self::new(
            RngSource::from_entropy(),
            factory,
            mutator,
            mutation_chance,
            novel_trait_chance,
        )
    }

    /// Creates a combiner that never produces novel traits.
    ///
    /// The novel-trait chance is fixed to [`Probability::ZERO`] and the
    /// factory is [`NoNovelTraits`].
    pub fn mutation_only(
        random: impl RandomSource + 'static,
        mutator: impl Mutator<T> + 'static,
        mutation_chance: Probability,
    ) -> Result<Self> {
        Self::new(random, NoNovelTraits, mutator, mutation_chance, Probability::ZERO)
    }

    /// Like [`mutation_only`](Self::mutation_only), with an OS-seeded
    /// [`RngSource`].
    pub fn mutation_only_with_entropy(
        mutator: impl Mutator<T> + 'static,
        mutation_chance: Probability,
    ) -> Result<Self> {
        Self::mutation_only(RngSource::from_entropy(), mutator, mutation_chance)
    }

    /// Creates a combiner from a [`CombinerConfig`].
    ///
    /// The random source is an [`RngSource`] seeded from `config.seed`.
    ///
    /// # Errors
    /// Whatever [`CombinerConfig::validate`] reports.
    pub fn from_config(
        config: &CombinerConfig,
        factory: impl NovelTraitFactory<K, T> + 'static,
        mutator: impl Mutator<T> + 'static,
    ) -> Result<Self> {
        Self::build(
            Box::new(RngSource::from_seed_option(config.seed)),
            Box::new(factory),
            Box::new(mutator),
            config,
        )
    }

    fn build(
        random: Box<dyn RandomSource>,
        factory: Box<dyn NovelTraitFactory<K, T>>,
        mutator: Box<dyn Mutator<T>>,
        config: &CombinerConfig,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            random,
            factory,
            mutator,
            mutation_threshold: config.mutation_chance.threshold()?,
            novel_threshold: config.novel_trait_chance.threshold()?,
            novel_attempts: config.novel_attempts,
        })
    }

    /// Modulo threshold for mutation; 0 means disabled.
    pub fn mutation_threshold(&self) -> usize {
        self.mutation_threshold
    }

    /// Modulo threshold for novel traits; 0 means disabled.
    pub fn novel_threshold(&self) -> usize {
        self.novel_threshold
    }

    /// Draws against `threshold`. A zero threshold never draws.
    fn fires(&self, threshold: usize) -> bool {
        threshold > 0 && self.random.next() % threshold == 0
    }

    /// Produces a child from `initial` and any number of further parents.
    ///
    /// For every key expressed by any input, in first-seen order, one of
    /// the `parents.len() + 1` inputs is drawn with equal odds. If that
    /// input lacks the key the trait is dropped from the child. Otherwise
    /// its value is inherited and possibly mutated. Finally the
    /// novel-trait factory may add a fresh key or remove an existing one.
    ///
    /// An empty `parents` slice is asexual reproduction.
    ///
    /// # Errors
    /// Propagates any error from the novel-trait factory.
    pub fn combine(
        &self,
        initial: &GeneSet<K, T>,
        parents: &[&GeneSet<K, T>],
    ) -> Result<GeneSet<K, T>> {
        let mut seen = HashSet::new();
        let keys: Vec<&K> = std::iter::once(initial)
            .chain(parents.iter().copied())
            .flat_map(|g| g.iter().map(Trait::key))
            .filter(|k| seen.insert(*k))
            .collect();

        let mut result: Vec<Trait<K, T>> = Vec::with_capacity(keys.len());

        for key in keys {
            let index = self.random.next() % (parents.len() + 1);
            let source = if index == 0 { initial } else { parents[index - 1] };

            let Some(mut value) = source.try_get(key) else {
                trace!("parent {index} does not express {key:?}, trait dropped");
                continue;
            };

            if self.fires(self.mutation_threshold) {
                let mutated = TraitValue::new(self.mutator.mutate(value.into_inner()));
                trace!("mutated {key:?}: {value} -> {mutated}");
                value = mutated;
            }

            result.push(Trait::with_value(key.clone(), value));
        }

        if self.fires(self.novel_threshold) {
            let novel = {
                let used: Vec<&K> = result.iter().map(Trait::key).collect();
                self.factory.create(&used)?
            };

            match novel {
                NovelResult::Add(t) => {
                    if result.iter().any(|r| r.same_key(&t)) {
                        debug!("novel trait {t} already expressed, ignored");
                    } else {
                        debug!("novel trait {t} added");
                        result.push(t);
                    }
                }
                NovelResult::Remove(t) => {
                    debug!("trait {:?} removed as novel change", t.key());
                    result.retain(|r| !r.same_key(&t));
                }
                NovelResult::None => {}
            }
        }

        Ok(GeneSet::new(result))
    }

    /// [`combine`](Self::combine) for inputs that may be absent.
    ///
    /// # Errors
    /// [`GeneError::InvalidArgument`] if `initial` or `parents` is `None`,
    /// before anything is drawn.
    pub fn try_combine(
        &self,
        initial: Option<&GeneSet<K, T>>,
        parents: Option<&[&GeneSet<K, T>]>,
    ) -> Result<GeneSet<K, T>> {
        let initial = initial
            .ok_or_else(|| GeneError::InvalidArgument("initial must be present".into()))?;
        let parents = parents
            .ok_or_else(|| GeneError::InvalidArgument("parents must be present".into()))?;
        self.combine(initial, parents)
    }

    /// Runs many independent combinations.
    ///
    /// With the `parallel` feature the jobs are spread over rayon's
    /// thread pool; results keep job order either way.
    pub fn combine_batch(&self, jobs: &[CombineJob<'_, K, T>]) -> Result<Vec<GeneSet<K, T>>> {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            jobs.par_iter()
                .map(|(initial, parents)| self.combine(initial, parents))
                .collect()
        }

        #[cfg(not(feature = "parallel"))]
        {
            jobs.iter()
                .map(|(initial, parents)| self.combine(initial, parents))
                .collect()
        }
    }

    /// Returns an endless iterator of freshly synthesised gene sets.
    ///
    /// Each set is filled by calling the novel-trait factory. The slot
    /// count is drawn uniformly from `min_traits..=max_traits`. A slot
    /// accepts only an `Add` whose key is new to the set, and it is
    /// abandoned after [`CombinerConfig::novel_attempts`] tries, so sets
    /// can come out smaller than the drawn count.
    ///
    /// # Errors
    /// [`GeneError::InvalidArgument`] if `min_traits > max_traits`.
    /// Factory errors are yielded as items.
    pub fn create_random_sets(
        &self,
        min_traits: usize,
        max_traits: usize,
    ) -> Result<RandomSets<'_, K, T>> {
        if min_traits > max_traits {
            return Err(GeneError::InvalidArgument(format!(
                "min_traits ({min_traits}) exceeds max_traits ({max_traits})"
            )));
        }
        Ok(RandomSets::new(self, min_traits, max_traits))
    }

    /// Builds a single random gene set; see
    /// [`create_random_sets`](Self::create_random_sets).
    pub(crate) fn random_set(&self, min_traits: usize, max_traits: usize) -> Result<GeneSet<K, T>> {
        // The drawn count is a target; sets often come out smaller.
        let slots = self.random.next_in_inclusive(min_traits..=max_traits);
        let mut traits: Vec<Trait<K, T>> = Vec::new();

        for slot in 0..slots {
            let mut filled = false;

            for _ in 0..self.novel_attempts {
                let candidate = {
                    let used: Vec<&K> = traits.iter().map(Trait::key).collect();
                    self.factory.create(&used)?
                };

                let NovelResult::Add(t) = candidate else {
                    continue;
                };
                if traits.iter().any(|x| x.same_key(&t)) {
                    continue;
                }

                traits.push(t);
                filled = true;
                break;
            }

            if !filled {
                debug!(
                    "random set slot {slot} skipped after {} attempts",
                    self.novel_attempts
                );
            }
        }

        Ok(GeneSet::new(traits))
    }
}

impl<K: TraitKey, T: TraitPrimitive> std::fmt::Debug for GeneCombiner<K, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneCombiner")
            .field("mutation_threshold", &self.mutation_threshold)
            .field("novel_threshold", &self.novel_threshold)
            .field("novel_attempts", &self.novel_attempts)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Tests
// ============================================================================
