//! Random number sources injected into the combinator.
//!
//! The combinator only needs non-negative integers. Which generator
//! produces them, how it is seeded and which thread owns it are the
//! caller's choice:
//!
//! - any `Fn() -> usize + Send + Sync` closure (e.g. `|| 0` in tests)
//! - [`RngSource`]: a seeded or OS-seeded [`StdRng`] behind a mutex
//! - [`CycleSource`]: replays a fixed sequence, for deterministic runs

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::{Range, RangeInclusive};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// A source of non-negative random integers.
///
/// Implementations must be shareable across threads; the combinator
/// calls them through `&self`.
pub trait RandomSource: Send + Sync {
    /// Returns the next random integer.
    fn next(&self) -> usize;

    /// Returns a random integer in the half-open `range`.
    ///
    /// An empty range yields `range.start`. The default reduces
    /// [`next`](Self::next) modulo the range width.
    fn next_in(&self, range: Range<usize>) -> usize {
        if range.is_empty() {
            return range.start;
        }
        range.start + self.next() % (range.end - range.start)
    }

    /// Returns a random integer in the closed `range`, so `usize::MAX`
    /// is reachable.
    ///
    /// An empty range yields its start.
    fn next_in_inclusive(&self, range: RangeInclusive<usize>) -> usize {
        let (start, end) = range.into_inner();
        if start > end {
            return start;
        }
        match (end - start).checked_add(1) {
            Some(width) => start + self.next() % width,
            None => self.next(),
        }
    }
}

impl<F> RandomSource for F
where
    F: Fn() -> usize + Send + Sync,
{
    fn next(&self) -> usize {
        self()
    }
}

/// A [`StdRng`] shared behind a mutex.
///
/// Cheap enough for the combinator's handful of draws per trait. For
/// heavy parallel use, give each worker its own source instead.
#[derive(Debug)]
pub struct RngSource {
    rng: Mutex<StdRng>,
}

impl RngSource {
    /// Creates a reproducible source from `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    /// Creates a source seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    /// Seeded when `seed` is `Some`, OS-seeded otherwise.
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::seeded(s),
            None => Self::from_entropy(),
        }
    }

    /// Wraps an already constructed generator.
    pub fn from_rng(rng: StdRng) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }

    /// Runs `f` with exclusive access to the generator.
    ///
    /// A poisoned lock is recovered: the generator state is still valid.
    pub fn with_rng<R>(&self, f: impl FnOnce(&mut StdRng) -> R) -> R {
        let mut guard = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut guard)
    }

    /// Uniform `f64` in `[0, 1)`.
    pub fn next_f64(&self) -> f64 {
        self.with_rng(|rng| rng.random::<f64>())
    }

    /// Fair coin flip.
    pub fn next_bool(&self) -> bool {
        self.with_rng(|rng| rng.random_bool(0.5))
    }
}

impl RandomSource for RngSource {
    fn next(&self) -> usize {
        self.with_rng(|rng| rng.random::<u32>() as usize)
    }

    fn next_in(&self, range: Range<usize>) -> usize {
        if range.is_empty() {
            return range.start;
        }
        self.with_rng(|rng| rng.random_range(range))
    }

    fn next_in_inclusive(&self, range: RangeInclusive<usize>) -> usize {
        if range.is_empty() {
            return *range.start();
        }
        self.with_rng(|rng| rng.random_range(range))
    }
}

/// Replays a fixed sequence of values forever.
///
/// ```
/// use traitor::random::{CycleSource, RandomSource};
///
/// let src = CycleSource::new(vec![3, 1]);
/// assert_eq!((src.next(), src.next(), src.next()), (3, 1, 3));
/// ```
#[derive(Debug)]
pub struct CycleSource {
    values: Vec<usize>,
    cursor: AtomicUsize,
}

impl CycleSource {
    /// Cycles through `values`. An empty sequence always yields 0.
    pub fn new(values: Vec<usize>) -> Self {
        Self {
            values,
            cursor: AtomicUsize::new(0),
        }
    }

    /// Always yields `value`.
    pub fn constant(value: usize) -> Self {
        Self::new(vec![value])
    }

    /// Number of values drawn so far.
    pub fn draws(&self) -> usize {
        self.cursor.load(Ordering::Relaxed)
    }
}

impl RandomSource for CycleSource {
    fn next(&self) -> usize {
        if self.values.is_empty() {
            return 0;
        }
        let i = self.cursor.fetch_add(1, Ordering::Relaxed);
        self.values[i % self.values.len()]
    }
}
