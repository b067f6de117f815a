//! Random sources for the simulated sensors.
//!
//! Every randomized output in the crate (detections, calibration, maintenance)
//! draws through [`SensorNoise`], so callers decide whether readings come from
//! a seeded RNG or from a script.
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use std::collections::VecDeque;

pub trait SensorNoise {
    /// Index of the pool entry to report. Pools are never empty.
    fn pick_index(&mut self, pool: &[&str]) -> usize;

    /// Uniform float in `min..=max`.
    fn uniform(&mut self, min: f64, max: f64) -> f64;

    /// Uniform integer in `min..=max`.
    fn integer(&mut self, min: u8, max: u8) -> u8;
}

impl<N: SensorNoise + ?Sized> SensorNoise for &mut N {
    fn pick_index(&mut self, pool: &[&str]) -> usize {
        (**self).pick_index(pool)
    }

    fn uniform(&mut self, min: f64, max: f64) -> f64 {
        (**self).uniform(min, max)
    }

    fn integer(&mut self, min: u8, max: u8) -> u8 {
        (**self).integer(min, max)
    }
}

/// Noise backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomNoise<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomNoise<R> {
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

/// ChaCha-backed noise used by the front ends.
pub type ChaChaNoise = RandomNoise<ChaCha20Rng>;

impl RandomNoise<ChaCha20Rng> {
    /// Deterministic noise for replays and tests.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self::new(ChaCha20Rng::seed_from_u64(seed))
    }

    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(ChaCha20Rng::from_entropy())
    }
}

impl<R: Rng> SensorNoise for RandomNoise<R> {
    fn pick_index(&mut self, pool: &[&str]) -> usize {
        if pool.is_empty() {
            return 0;
        }
        self.rng.gen_range(0..pool.len())
    }

    fn uniform(&mut self, min: f64, max: f64) -> f64 {
        if min >= max {
            return min;
        }
        self.rng.gen_range(min..=max)
    }

    fn integer(&mut self, min: u8, max: u8) -> u8 {
        if min >= max {
            return min;
        }
        self.rng.gen_range(min..=max)
    }
}

/// Replays queued readings in order.
///
/// Picks name the substance to report; when a queue runs dry the source falls
/// back to the first pool entry, the range minimum, or the integer minimum.
#[derive(Debug, Clone, Default)]
pub struct ScriptedNoise {
    picks: VecDeque<String>,
    floats: VecDeque<f64>,
    integers: VecDeque<u8>,
}

impl ScriptedNoise {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a single detection: the substance reported and its confidence.
    #[must_use]
    pub fn detection(substance: &str, confidence: f64) -> Self {
        Self::new().with_pick(substance).with_float(confidence)
    }

    #[must_use]
    pub fn with_pick(mut self, substance: &str) -> Self {
        self.picks.push_back(substance.to_string());
        self
    }

    #[must_use]
    pub fn with_float(mut self, value: f64) -> Self {
        self.floats.push_back(value);
        self
    }

    #[must_use]
    pub fn with_integer(mut self, value: u8) -> Self {
        self.integers.push_back(value);
        self
    }
}

impl SensorNoise for ScriptedNoise {
    fn pick_index(&mut self, pool: &[&str]) -> usize {
        self.picks
            .pop_front()
            .and_then(|wanted| pool.iter().position(|s| *s == wanted))
            .unwrap_or(0)
    }

    fn uniform(&mut self, min: f64, _max: f64) -> f64 {
        self.floats.pop_front().unwrap_or(min)
    }

    fn integer(&mut self, min: u8, _max: u8) -> u8 {
        self.integers.pop_front().unwrap_or(min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_noise_is_deterministic_and_in_range() {
        let mut a = RandomNoise::from_seed(1337);
        let mut b = RandomNoise::from_seed(1337);
        for _ in 0..200 {
            let x = a.uniform(0.6, 1.0);
            assert!((x - b.uniform(0.6, 1.0)).abs() < f64::EPSILON);
            assert!((0.6..=1.0).contains(&x));
            let n = a.integer(85, 100);
            assert_eq!(n, b.integer(85, 100));
            assert!((85..=100).contains(&n));
        }
    }

    #[test]
    fn pick_index_covers_pool() {
        let pool = ["a", "b", "c"];
        let mut noise = RandomNoise::from_seed(7);
        let mut seen = [false; 3];
        for _ in 0..100 {
            seen[noise.pick_index(&pool)] = true;
        }
        assert!(seen.iter().all(|hit| *hit));
    }

    #[test]
    fn scripted_noise_replays_then_falls_back() {
        let mut noise = ScriptedNoise::detection("Fe", 0.99).with_integer(93);
        let pool = ["CO2", "Fe"];
        assert_eq!(noise.pick_index(&pool), 1);
        assert!((noise.uniform(0.6, 1.0) - 0.99).abs() < f64::EPSILON);
        assert_eq!(noise.integer(85, 100), 93);

        assert_eq!(noise.pick_index(&pool), 0);
        assert!((noise.uniform(0.6, 1.0) - 0.6).abs() < f64::EPSILON);
        assert_eq!(noise.integer(85, 100), 85);
    }

    #[test]
    fn scripted_pick_outside_pool_uses_first_entry() {
        let mut noise = ScriptedNoise::new().with_pick("H2O");
        assert_eq!(noise.pick_index(&["CO2", "Fe"]), 0);
    }
}
