//! Strongly typed trait values.

use std::any::Any;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Capability set required of a trait value's underlying type.
///
/// Equality, ordering and formatting are required together. Implemented
/// automatically for every type that has them, so `i32`, `f64`, `u8`,
/// `char` and friends work out of the box.
pub trait TraitPrimitive:
    Copy + PartialEq + PartialOrd + fmt::Display + fmt::Debug + Send + Sync + 'static
{
}

impl<T> TraitPrimitive for T where
    T: Copy + PartialEq + PartialOrd + fmt::Display + fmt::Debug + Send + Sync + 'static
{
}

/// A trait value wrapping a primitive of type `T`.
///
/// Keeps gene values distinct from raw application numbers: going in
/// and out of the wrapper is always an explicit call, never a coercion.
///
/// ```
/// use traitor::genes::TraitValue;
///
/// let v = TraitValue::new(9);
/// assert_eq!(v.into_inner(), 9);
/// assert!(TraitValue::new(10) > v);
/// assert_eq!(format!("{:.2}", TraitValue::new(2.5_f64)), "2.50");
/// ```
#[derive(Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TraitValue<T: TraitPrimitive>(T);

impl<T: TraitPrimitive> TraitValue<T> {
    /// Wraps a primitive.
    pub const fn new(value: T) -> Self {
        Self(value)
    }

    /// Returns a copy of the wrapped primitive.
    pub fn get(&self) -> T {
        self.0
    }

    /// Unwraps into the primitive.
    pub fn into_inner(self) -> T {
        self.0
    }

    /// Three-way comparison as `-1`, `0` or `1`.
    ///
    /// Returns `None` when the underlying values are incomparable
    /// (e.g. a NaN float).
    pub fn compare(&self, other: &Self) -> Option<i32> {
        self.partial_cmp(other).map(|o| o as i32)
    }

    /// Equality against a value of unknown type.
    ///
    /// Anything that is not a `TraitValue<T>` is simply not equal.
    pub fn equals_any(&self, other: &dyn Any) -> bool {
        other
            .downcast_ref::<TraitValue<T>>()
            .is_some_and(|o| self == o)
    }
}

impl<T: TraitPrimitive> From<T> for TraitValue<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<T: TraitPrimitive> PartialEq for TraitValue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T: TraitPrimitive + Eq> Eq for TraitValue<T> {}

impl<T: TraitPrimitive> PartialOrd for TraitValue<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl<T: TraitPrimitive + Ord> Ord for TraitValue<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<T: TraitPrimitive + Hash> Hash for TraitValue<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<T: TraitPrimitive> fmt::Display for TraitValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl<T: TraitPrimitive> fmt::Debug for TraitValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TraitValue").field(&self.0).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_explicit_round_trip() {
        let v = TraitValue::new(9);
        assert_eq!(v.get(), 9);
        assert_eq!(v.into_inner(), 9);
        assert_eq!(TraitValue::from(9), v);
    }

    proptest! {
        #[test]
        fn prop_round_trip_i64(v in any::<i64>()) {
            let t = TraitValue::new(v);
            prop_assert_eq!(t.get(), v);
            prop_assert_eq!(TraitValue::from(v), t);
            prop_assert_eq!(t.into_inner(), v);
        }

        #[test]
        fn prop_round_trip_f64(v in proptest::num::f64::NORMAL | proptest::num::f64::ZERO) {
            let t = TraitValue::new(v);
            prop_assert_eq!(t.get(), v);
            prop_assert_eq!(TraitValue::from(v), t);
            prop_assert_eq!(t.into_inner(), v);
        }
    }

    #[test]
    fn test_equality() {
        assert_eq!(TraitValue::new(9), TraitValue::new(9));
        assert_ne!(TraitValue::new(9), TraitValue::new(18));
    }

    #[test]
    fn test_compare() {
        assert_eq!(TraitValue::new(9).compare(&TraitValue::new(9)), Some(0));
        assert_eq!(TraitValue::new(10).compare(&TraitValue::new(9)), Some(1));
        assert_eq!(TraitValue::new(9).compare(&TraitValue::new(10)), Some(-1));
        assert_eq!(
            TraitValue::new(f64::NAN).compare(&TraitValue::new(1.0)),
            None
        );
        assert_eq!(TraitValue::new(3).cmp(&TraitValue::new(2)), Ordering::Greater);
    }

    #[test]
    fn test_equals_any() {
        let v = TraitValue::new(9);
        let same: Box<dyn Any> = Box::new(TraitValue::new(9));
        let other_value: Box<dyn Any> = Box::new(TraitValue::new(18));
        let raw: Box<dyn Any> = Box::new(9);
        let other_type: Box<dyn Any> = Box::new(TraitValue::new(9_i64));

        assert!(v.equals_any(same.as_ref()));
        assert!(!v.equals_any(other_value.as_ref()));
        assert!(!v.equals_any(raw.as_ref()));
        assert!(!v.equals_any(other_type.as_ref()));
    }

    #[test]
    fn test_formatting_delegates() {
        assert_eq!(TraitValue::new(42).to_string(), "42");
        assert_eq!(format!("{:>4}", TraitValue::new(7)), "   7");
        assert_eq!(format!("{:?}", TraitValue::new('x')), "TraitValue('x')");
    }
}
