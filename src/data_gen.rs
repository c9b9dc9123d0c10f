use crate::Key;
use crate::error::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::thread_rng;
use rand_distr::{Distribution, Normal, Uniform};

// default = 64k keys
const DEFAULT_COUNT: usize = 1 << 16;

pub fn generate_normal(count: usize, mean: f64, std_dev: f64) -> Result<Vec<Key>> {
    let normal = Normal::new(mean, std_dev)?;
    let mut rng = thread_rng();

    Ok((0..count)
        .map(|_| {
            let sample: f64 = normal.sample(&mut rng);
            sample.clamp(Key::MIN as f64, Key::MAX as f64) as Key
        })
        .collect())
}

pub fn generate_uniform(count: usize, min: Key, max: Key) -> Vec<Key> {
    let uniform = Uniform::new_inclusive(min, max);
    let mut rng = thread_rng();

    (0..count).map(|_| uniform.sample(&mut rng)).collect()
}

// same draw every run for a given seed
pub fn generate_uniform_seeded(count: usize, min: Key, max: Key, seed: u64) -> Vec<Key> {
    let uniform = Uniform::new_inclusive(min, max);
    let mut rng = StdRng::seed_from_u64(seed);

    (0..count).map(|_| uniform.sample(&mut rng)).collect()
}

/// up to `count` distinct keys starting at `start`, shuffled
pub fn generate_distinct_shuffled(count: usize, start: Key, seed: u64) -> Vec<Key> {
    let mut keys = generate_ascending(count, start);
    let mut rng = StdRng::seed_from_u64(seed);
    keys.shuffle(&mut rng);
    keys
}

/// up to `count` keys from `start` upward, stopping at `Key::MAX`
pub fn generate_ascending(count: usize, start: Key) -> Vec<Key> {
    (start..=Key::MAX).take(count).collect()
}

/// up to `count` keys from `start` downward, stopping at `Key::MIN`
pub fn generate_descending(count: usize, start: Key) -> Vec<Key> {
    (Key::MIN..=start).rev().take(count).collect()
}

pub fn generate_smooth(count: Option<usize>) -> Vec<Key> {
    let count = count.unwrap_or(DEFAULT_COUNT);
    let std_dev = (i32::MAX / 3) as f64;
    let normal = Normal::new(0.0, std_dev).expect("std_dev is finite and positive");
    let mut rng = thread_rng();

    (0..count)
        .map(|_| normal.sample(&mut rng).round() as Key)
        .collect()
}
