//! Combinator configuration.
//!
//! [`CombinerConfig`] holds the chances and seeding that control a
//! [`GeneCombiner`](super::GeneCombiner).

use crate::error::{GeneError, Result};
use crate::genes::Probability;

/// Configuration for a [`GeneCombiner`](super::GeneCombiner).
///
/// # Defaults
///
/// ```
/// use traitor::combine::CombinerConfig;
/// use traitor::genes::Probability;
///
/// let config = CombinerConfig::default();
/// assert_eq!(config.mutation_chance, Probability::ZERO);
/// assert_eq!(config.novel_attempts, 10);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use traitor::combine::CombinerConfig;
/// use traitor::genes::Probability;
///
/// let config = CombinerConfig::default()
///     .with_mutation_chance(Probability::one_in(10))
///     .with_novel_trait_chance(Probability::one_in(50))
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombinerConfig {
    /// Chance that an inherited value is mutated.
    ///
    /// Becomes the threshold `numerator * denominator`; a value mutates
    /// when a draw modulo the threshold is zero. [`Probability::ZERO`]
    /// disables mutation.
    pub mutation_chance: Probability,

    /// Chance that a combination consults the novel-trait factory.
    ///
    /// Same threshold semantics as `mutation_chance`.
    pub novel_trait_chance: Probability,

    /// Factory calls per slot before a random-set slot is abandoned.
    pub novel_attempts: usize,

    /// Seed for the built-in random source.
    ///
    /// `None` seeds from the operating system.
    pub seed: Option<u64>,
}

impl Default for CombinerConfig {
    fn default() -> Self {
        Self {
            mutation_chance: Probability::ZERO,
            novel_trait_chance: Probability::ZERO,
            novel_attempts: 10,
            seed: None,
        }
    }
}

impl CombinerConfig {
    /// Sets the mutation chance.
    pub fn with_mutation_chance(mut self, chance: Probability) -> Self {
        self.mutation_chance = chance;
        self
    }

    /// Sets the novel-trait chance.
    pub fn with_novel_trait_chance(mut self, chance: Probability) -> Self {
        self.novel_trait_chance = chance;
        self
    }

    /// Sets the per-slot attempt budget for random sets.
    pub fn with_novel_attempts(mut self, attempts: usize) -> Self {
        self.novel_attempts = attempts;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// - [`GeneError::Overflow`] if either chance overflows its threshold
    /// - [`GeneError::InvalidArgument`] if `novel_attempts` is zero
    pub fn validate(&self) -> Result<()> {
        self.mutation_chance.threshold()?;
        self.novel_trait_chance.threshold()?;
        if self.novel_attempts == 0 {
            return Err(GeneError::InvalidArgument(
                "novel_attempts must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CombinerConfig::default();
        assert_eq!(config.mutation_chance, Probability::ZERO);
        assert_eq!(config.novel_trait_chance, Probability::ZERO);
        assert_eq!(config.novel_attempts, 10);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = CombinerConfig::default()
            .with_mutation_chance(Probability::one_in(10))
            .with_novel_trait_chance(Probability::IDENTITY)
            .with_novel_attempts(3)
            .with_seed(7);

        assert_eq!(config.mutation_chance, Probability::new(1, 10));
        assert_eq!(config.novel_trait_chance, Probability::IDENTITY);
        assert_eq!(config.novel_attempts, 3);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_validate_overflow() {
        let big = Probability::new(u32::MAX, u32::MAX);
        let config = CombinerConfig::default().with_mutation_chance(big);
        assert_eq!(config.validate(), Err(GeneError::Overflow(big)));

        let config = CombinerConfig::default().with_novel_trait_chance(big);
        assert_eq!(config.validate(), Err(GeneError::Overflow(big)));
    }

    #[test]
    fn test_validate_zero_attempts() {
        let config = CombinerConfig::default().with_novel_attempts(0);
        assert!(matches!(
            config.validate(),
            Err(GeneError::InvalidArgument(_))
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_load_from_json() {
        let json = r#"{
            "mutation_chance": { "numerator": 1, "denominator": 10 },
            "seed": 42
        }"#;
        let config: CombinerConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.mutation_chance, Probability::one_in(10));
        assert_eq!(config.novel_trait_chance, Probability::ZERO);
        assert_eq!(config.novel_attempts, 10);
        assert_eq!(config.seed, Some(42));
    }
}
