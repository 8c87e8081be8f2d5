//! Gene data model.
//!
//! Everything the combinator reads and produces is built from these types.
//! All of them are immutable once constructed.
//!
//! # Key Types
//!
//! - [`Probability`]: numerator/denominator chance, with [`Probability::ZERO`]
//!   and [`Probability::IDENTITY`]
//! - [`TraitValue`]: explicit wrapper around a primitive value
//! - [`Trait`]: a `(key, value)` pair
//! - [`GeneSet`]: an ordered, keyed collection of traits
//! - [`NovelResult`]: what a novel-trait factory asks for
//!
//! # Capability Traits
//!
//! - [`TraitKey`]: bound on keys (`Eq + Hash + Clone + Debug`)
//! - [`TraitPrimitive`]: bound on values (`PartialEq + PartialOrd + Display`)

mod gene_set;
mod novel;
mod probability;
mod types;
mod value;

pub use gene_set::GeneSet;
pub use novel::{NovelKind, NovelResult};
pub use probability::Probability;
pub use types::{Trait, TraitKey};
pub use value::{TraitPrimitive, TraitValue};
