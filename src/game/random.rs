//! Random source used by the lifelines.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The only randomness the game needs. Tests swap in scripted sequences.
pub trait RandomSource {
    /// Uniform integer in `low..=high`.
    fn range(&mut self, low: usize, high: usize) -> usize;

    /// `true` with probability `p`.
    fn chance(&mut self, p: f64) -> bool;

    /// Uniformly picks one element, or `None` for an empty slice.
    fn choose<T: Copy>(&mut self, items: &[T]) -> Option<T>
    where
        Self: Sized,
    {
        if items.is_empty() {
            return None;
        }
        Some(items[self.range(0, items.len() - 1)])
    }
}

/// `rand`'s standard generator, seeded from the OS or a fixed seed.
pub struct StdRandom {
    rng: StdRng,
}

impl StdRandom {
    pub fn from_os() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for StdRandom {
    fn range(&mut self, low: usize, high: usize) -> usize {
        self.rng.random_range(low..=high)
    }

    fn chance(&mut self, p: f64) -> bool {
        self.rng.random_bool(p.clamp(0.0, 1.0))
    }
}

/// Replays fixed answers. `range` clamps each scripted value into the
/// requested bounds and falls back to `low` once the script runs out.
#[cfg(test)]
pub(crate) struct ScriptedRandom {
    ranges: std::collections::VecDeque<usize>,
    chances: std::collections::VecDeque<bool>,
}

#[cfg(test)]
impl ScriptedRandom {
    pub(crate) fn new(ranges: &[usize], chances: &[bool]) -> Self {
        Self {
            ranges: ranges.iter().copied().collect(),
            chances: chances.iter().copied().collect(),
        }
    }
}

#[cfg(test)]
impl RandomSource for ScriptedRandom {
    fn range(&mut self, low: usize, high: usize) -> usize {
        self.ranges.pop_front().map_or(low, |value| value.clamp(low, high))
    }

    fn chance(&mut self, _p: f64) -> bool {
        self.chances.pop_front().unwrap_or(false)
    }
}
