//! Input patterns for testing and benchmarking the sorts.
//!
//! All patterns are `i32`. Within one process every pattern draws from the same seed unless
//! [`disable_fixed_seed`] was called, so a failing test can be reproduced from the printed seed.

use std::sync::atomic::{AtomicBool, Ordering};

use rand::distributions::Uniform;
use rand::prelude::*;

use once_cell::sync::OnceCell;

// --- Public ---

pub fn random(size: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    let mut rng = new_rng();

    (0..size).map(|_| rng.gen::<i32>()).collect()
}

pub fn random_uniform<R>(size: usize, range: R) -> Vec<i32>
where
    R: Into<Uniform<i32>>,
{
    // :.:.:.::

    let mut rng = new_rng();
    let dist: Uniform<i32> = range.into();

    (0..size).map(|_| dist.sample(&mut rng)).collect()
}

pub fn random_random_size(max_size: usize) -> Vec<i32> {
    // Like `random`, but the length itself is random with `max_size` as maximum.

    let size = new_rng().gen_range(0..=max_size);
    random(size)
}

pub fn all_equal(size: usize) -> Vec<i32> {
    // ......
    // ::::::

    vec![66; size]
}

pub fn ascending(size: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..size as i32).collect()
}

pub fn descending(size: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..size as i32).rev().collect()
}

pub fn saw_mixed(size: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.    .::.    .:
    // :::.:::..::::::..:::

    if size == 0 {
        return Vec::new();
    }

    let mut vals = random(size);
    let chunk_size = (size / saw_count.max(1)).max(1);
    let mut rng = new_rng();

    for chunk in vals.chunks_mut(chunk_size) {
        if rng.gen::<bool>() {
            chunk.sort();
        } else {
            chunk.sort_by_key(|&e| std::cmp::Reverse(e));
        }
    }

    vals
}

pub fn pipe_organ(size: usize) -> Vec<i32> {
    //   .:.
    // .:::::.

    let mut vals = random(size);

    let (first_half, second_half) = vals.split_at_mut(size / 2);
    first_half.sort();
    second_half.sort_by_key(|&e| std::cmp::Reverse(e));

    vals
}

/// Looks up a pattern by name, for command line use. Saw patterns use `log2(size)` saws.
pub fn by_name(name: &str) -> Option<fn(usize) -> Vec<i32>> {
    let pattern_fn: fn(usize) -> Vec<i32> = match name {
        "random" => random,
        "random_binary" => |size| random_uniform(size, 0..=1),
        "all_equal" => all_equal,
        "ascending" => ascending,
        "descending" => descending,
        "saw_mixed" => |size| saw_mixed(size, ((size as f64).log2().round()) as usize),
        "pipe_organ" => pipe_organ,
        _ => return None,
    };

    Some(pattern_fn)
}

static USE_FIXED_SEED: AtomicBool = AtomicBool::new(true);

pub fn disable_fixed_seed() {
    USE_FIXED_SEED.store(false, Ordering::Release);
}

pub fn random_init_seed() -> u64 {
    if USE_FIXED_SEED.load(Ordering::Acquire) {
        static SEED: OnceCell<u64> = OnceCell::new();
        *SEED.get_or_init(|| thread_rng().gen())
    } else {
        thread_rng().gen()
    }
}

// --- Private ---

fn new_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}
