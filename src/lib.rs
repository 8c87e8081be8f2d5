//! Generic gene-set combinator for evolutionary search.
//!
//! Builds child genomes from parent genomes and nothing more:
//!
//! - **Genes**: typed trait values ([`genes::TraitValue`]) keyed by an
//!   identifier, collected into immutable [`genes::GeneSet`]s.
//! - **Combination**: [`combine::GeneCombiner`] performs per-key crossover
//!   over any number of parents, threshold-based mutation, and
//!   threshold-based novel-trait injection or removal.
//! - **Random sources**: injected through [`random::RandomSource`] so
//!   seeding and thread affinity stay with the caller.
//! - **Mutators**: any `Fn(T) -> T`, or a stock [`mutators::Mutator`].
//!
//! Fitness evaluation, selection and the generational loop are the
//! caller's business; see `demos/hello_world.rs` for one such loop.
//!
//! # Example
//!
//! ```
//! use traitor::combine::GeneCombiner;
//! use traitor::genes::{GeneSet, NovelResult, Probability, Trait};
//! use traitor::random::RngSource;
//!
//! let combiner = GeneCombiner::new(
//!     RngSource::seeded(42),
//!     |used: &[&u32]| -> NovelResult<u32, f64> { NovelResult::add(used.len() as u32, 0.5) },
//!     |v: f64| v * 1.1,
//!     Probability::one_in(10),
//!     Probability::one_in(100),
//! )
//! .unwrap();
//!
//! let a = GeneSet::new([Trait::new(0, 1.0), Trait::new(1, 2.0)]);
//! let b = GeneSet::new([Trait::new(1, 3.0), Trait::new(2, 4.0)]);
//! let child = combiner.combine(&a, &[&b]).unwrap();
//! assert!(child.count() <= 4);
//! ```
//!
//! # Features
//!
//! - `parallel`: [`combine::GeneCombiner::combine_batch`] runs on rayon
//! - `serde`: `Serialize`/`Deserialize` for gene types and
//!   [`combine::CombinerConfig`]

pub mod combine;
pub mod error;
pub mod genes;
pub mod mutators;
pub mod random;

pub use error::{GeneError, Result};
