//! Chance representation used to configure mutation and novel traits.

use crate::error::{GeneError, Result};
use std::fmt;

/// A chance expressed as a numerator/denominator pair.
///
/// The combinator does not interpret this as the fraction
/// `numerator / denominator`. It multiplies the two into an integer
/// threshold `N` and fires when `random() % N == 0`, which is a true
/// "one in N" chance only when `numerator == 1`. Prefer
/// [`Probability::one_in`] for anything other than the constants.
///
/// # Examples
///
/// ```
/// use traitor::genes::Probability;
///
/// let p = Probability::one_in(10);
/// assert_eq!(p.threshold().unwrap(), 10);
/// assert_eq!(Probability::ZERO.threshold().unwrap(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Probability {
    /// Numerator of the chance.
    pub numerator: u32,

    /// Denominator of the chance. `1` is the conventional "no fraction" form.
    pub denominator: u32,
}

impl Probability {
    /// Never fires. `(0, 1)` rather than `(0, 0)` so the derived
    /// threshold is zero without any division by zero downstream.
    pub const ZERO: Probability = Probability::new(0, 1);

    /// Always fires.
    pub const IDENTITY: Probability = Probability::new(1, 1);

    /// Creates a probability from its two parts.
    pub const fn new(numerator: u32, denominator: u32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Shorthand for `(1, n)`: fires roughly once every `n` draws.
    pub const fn one_in(n: u32) -> Self {
        Self::new(1, n)
    }

    /// Returns the modulo threshold `numerator * denominator`.
    ///
    /// # Errors
    /// [`GeneError::Overflow`] if the product does not fit in a `u32`.
    pub fn threshold(&self) -> Result<usize> {
        self.numerator
            .checked_mul(self.denominator)
            .map(|t| t as usize)
            .ok_or(GeneError::Overflow(*self))
    }

    /// Returns `true` if the derived threshold is zero.
    pub fn is_disabled(&self) -> bool {
        self.numerator == 0 || self.denominator == 0
    }
}

impl Default for Probability {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<(u32, u32)> for Probability {
    fn from((numerator, denominator): (u32, u32)) -> Self {
        Self::new(numerator, denominator)
    }
}

impl fmt::Display for Probability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.numerator, self.denominator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(Probability::ZERO, Probability::new(0, 1));
        assert_eq!(Probability::IDENTITY, Probability::new(1, 1));
        assert_eq!(Probability::default(), Probability::ZERO);
        assert!(Probability::ZERO.is_disabled());
        assert!(!Probability::IDENTITY.is_disabled());
    }

    #[test]
    fn test_threshold_is_product() {
        assert_eq!(Probability::ZERO.threshold(), Ok(0));
        assert_eq!(Probability::IDENTITY.threshold(), Ok(1));
        assert_eq!(Probability::one_in(10).threshold(), Ok(10));
        // Not 2/3: the divisor is the product.
        assert_eq!(Probability::new(2, 3).threshold(), Ok(6));
    }

    #[test]
    fn test_threshold_overflow() {
        let p = Probability::new(u32::MAX, 2);
        assert_eq!(p.threshold(), Err(GeneError::Overflow(p)));
        assert!(Probability::new(u32::MAX, 1).threshold().is_ok());
    }

    #[test]
    fn test_from_tuple_and_display() {
        let p: Probability = (1, 10).into();
        assert_eq!(p, Probability::one_in(10));
        assert_eq!(p.to_string(), "1 / 10");
    }
}
