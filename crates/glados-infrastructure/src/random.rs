use rand::Rng;
use std::time::Duration;

/// Pluggable randomness for user-agent choice and start-up jitter
pub trait RandomSource: Send + Sync {
    /// Uniform index in `0..len`; returns 0 when `len` is 0
    fn index(&self, len: usize) -> usize;

    /// Uniform duration in `[min, max]` at millisecond granularity
    fn duration_between(&self, min: Duration, max: Duration) -> Duration;
}

fn pick_index<R: Rng + ?Sized>(rng: &mut R, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    rng.gen_range(0..len)
}

fn pick_duration<R: Rng + ?Sized>(rng: &mut R, min: Duration, max: Duration) -> Duration {
    if max <= min {
        return min;
    }
    let low = min.as_millis() as u64;
    let high = max.as_millis() as u64;
    Duration::from_millis(rng.gen_range(low..=high))
}

/// Thread-local RNG, used in production
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn index(&self, len: usize) -> usize {
        pick_index(&mut rand::thread_rng(), len)
    }

    fn duration_between(&self, min: Duration, max: Duration) -> Duration {
        pick_duration(&mut rand::thread_rng(), min, max)
    }
}

#[cfg(test)]
pub(crate) use seeded::SeededRandom;
