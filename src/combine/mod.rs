//! Gene-set combination.
//!
//! [`GeneCombiner`] is the crossover operator: given an initial gene set
//! and any number of further parents it produces a child by per-key
//! parent selection, threshold mutation and optional novel-trait
//! injection or removal.
//!
//! # Collaborators
//!
//! The combiner owns no policy of its own. It is assembled from:
//!
//! - a [`RandomSource`](crate::random::RandomSource) for every draw
//! - a [`Mutator`](crate::mutators::Mutator) applied to inherited values
//! - a [`NovelTraitFactory`] proposing traits no parent has
//!
//! # Key Types
//!
//! - [`CombinerConfig`]: chances, attempt budget and seed
//! - [`GeneCombiner`]: `combine`, `combine_batch`, `create_random_sets`
//! - [`RandomSets`]: the endless random gene-set iterator
//!
//! # Thresholds
//!
//! A [`Probability`](crate::genes::Probability) `(n, d)` becomes the
//! integer threshold `n * d`. A feature fires when
//! `random() % threshold == 0`, and a zero threshold disables it.

mod combiner;
mod config;
mod random_set;
mod types;

pub use combiner::{CombineJob, GeneCombiner};
pub use config::CombinerConfig;
pub use random_set::RandomSets;
pub use types::{NoNovelTraits, NovelTraitFactory};
