//! Value mutators.
//!
//! A [`Mutator`] maps an inherited value to its mutated replacement. Any
//! `Fn(T) -> T + Send + Sync` closure is a mutator; the structs below are
//! stock choices that carry their own [`RngSource`].

use crate::genes::TraitPrimitive;
use crate::random::RngSource;

/// Maps an old trait value to a new one.
pub trait Mutator<T: TraitPrimitive>: Send + Sync {
    /// Returns the mutated replacement for `value`.
    fn mutate(&self, value: T) -> T;
}

impl<T, F> Mutator<T> for F
where
    T: TraitPrimitive,
    F: Fn(T) -> T + Send + Sync,
{
    fn mutate(&self, value: T) -> T {
        self(value)
    }
}

/// Bell curve `(a·e)^(-(x - b)² / (2c)²)` with `a = 1`, `b = 0`, `c = 0.2`.
fn gauss(x: f64) -> f64 {
    const C: f64 = 0.2;
    std::f64::consts::E.powf(-(x * x) / ((2.0 * C) * (2.0 * C)))
}

/// Random sign applied to a magnitude.
fn signed(rng: &RngSource, magnitude: f64) -> f64 {
    if rng.next_bool() {
        magnitude
    } else {
        -magnitude
    }
}

/// Adds or subtracts one, with equal odds.
#[derive(Debug)]
pub struct StepMutator {
    rng: RngSource,
}

impl StepMutator {
    /// Creates a mutator drawing its coin flips from `rng`.
    pub fn new(rng: RngSource) -> Self {
        Self { rng }
    }
}

impl Default for StepMutator {
    fn default() -> Self {
        Self::new(RngSource::from_entropy())
    }
}

impl Mutator<i32> for StepMutator {
    fn mutate(&self, value: i32) -> i32 {
        if self.rng.next_bool() {
            value.saturating_add(1)
        } else {
            value.saturating_sub(1)
        }
    }
}

/// Steps by a bell-shaped magnitude in `[1, 3]` with a random sign.
///
/// Small steps are the most likely. Integers step by 1, 2 or 3.
#[derive(Debug)]
pub struct GaussianMutator {
    rng: RngSource,
}

impl GaussianMutator {
    /// Creates a mutator drawing step sizes and signs from `rng`.
    pub fn new(rng: RngSource) -> Self {
        Self { rng }
    }

    fn step(&self) -> f64 {
        let x = self.rng.next_f64() * 2.0 - 1.0;
        signed(&self.rng, 1.0 + (1.0 - gauss(x)) * 2.0)
    }
}

impl Default for GaussianMutator {
    fn default() -> Self {
        Self::new(RngSource::from_entropy())
    }
}

impl Mutator<i32> for GaussianMutator {
    fn mutate(&self, value: i32) -> i32 {
        value.saturating_add(self.step().round() as i32)
    }
}

impl Mutator<f32> for GaussianMutator {
    fn mutate(&self, value: f32) -> f32 {
        value + self.step() as f32
    }
}

impl Mutator<f64> for GaussianMutator {
    fn mutate(&self, value: f64) -> f64 {
        value + self.step()
    }
}

/// Adds or subtracts the square of the value: `x ± x²`.
#[derive(Debug)]
pub struct ExponentialMutator {
    rng: RngSource,
}

impl ExponentialMutator {
    /// Creates a mutator drawing signs from `rng`.
    pub fn new(rng: RngSource) -> Self {
        Self { rng }
    }
}

impl Default for ExponentialMutator {
    fn default() -> Self {
        Self::new(RngSource::from_entropy())
    }
}

impl Mutator<f64> for ExponentialMutator {
    fn mutate(&self, value: f64) -> f64 {
        value + signed(&self.rng, value * value)
    }
}
