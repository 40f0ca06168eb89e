//! Stress tests for the sorted chain.
//!
//! These tests verify:
//! 1. The ordering invariant survives large random workloads
//! 2. `len()` always agrees with the materialized snapshot
//! 3. Results are deterministic across runs with the same seed
//! 4. Interleaved removals keep the structure consistent
//!
//! ## Running
//!
//! ```bash
//! cargo test --release --test stress_test -- --nocapture
//! ```

use std::time::Instant;

use sortchain::SortedChain;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

// ============================================================================
// TEST CONSTANTS
// ============================================================================

/// Random workload size; general placement walks make this quadratic, so it
/// stays modest enough for debug builds
const RANDOM_INSERT_COUNT: usize = 10_000;

/// Workload size for the pre-sorted fast-path runs
const FAST_PATH_INSERT_COUNT: usize = 50_000;

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Generate deterministic values for stress testing.
///
/// Uses a seeded RNG for reproducibility. Same seed, same values.
fn generate_values(count: usize, seed: u64) -> Vec<i64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count).map(|_| rng.gen_range(-1_000_000i64..=1_000_000)).collect()
}

/// Walk the chain and check it is non-decreasing and sized consistently.
fn assert_sorted(chain: &SortedChain<i64>) {
    let values = chain.to_vec();
    for pair in values.windows(2) {
        assert!(pair[0] <= pair[1], "ordering violated: {} > {}", pair[0], pair[1]);
    }
    assert_eq!(values.len(), chain.len(), "len() disagrees with snapshot");
}

// ============================================================================
// STRESS TESTS
// ============================================================================

/// Insert a large random batch and verify the full set of invariants.
#[test]
fn stress_random_inserts() {
    let values = generate_values(RANDOM_INSERT_COUNT, 42);

    let start = Instant::now();
    let mut chain = SortedChain::with_capacity(RANDOM_INSERT_COUNT);
    for &v in &values {
        chain.insert(v).unwrap();
    }
    let elapsed = start.elapsed();
    println!("inserted {} random values in {:.2?}", RANDOM_INSERT_COUNT, elapsed);

    assert_eq!(chain.len(), RANDOM_INSERT_COUNT);
    assert_sorted(&chain);

    // the snapshot is exactly the input multiset, sorted
    let mut expected = values;
    expected.sort_unstable();
    assert_eq!(chain.to_vec(), expected);
    assert_eq!(chain.first().unwrap(), &expected[0]);
    assert_eq!(chain.last().unwrap(), &expected[expected.len() - 1]);
}

/// Pre-sorted input exercises the tail fast path for every insert; reversed
/// input exercises the head fast path. Both should handle a much larger
/// batch comfortably.
#[test]
fn stress_fast_path_inserts() {
    let start = Instant::now();
    let mut ascending = SortedChain::with_capacity(FAST_PATH_INSERT_COUNT);
    for v in 0..FAST_PATH_INSERT_COUNT as i64 {
        ascending.insert(v).unwrap();
    }
    println!(
        "inserted {} ascending values in {:.2?}",
        FAST_PATH_INSERT_COUNT,
        start.elapsed()
    );
    assert_eq!(ascending.len(), FAST_PATH_INSERT_COUNT);
    assert_eq!(ascending.first().unwrap(), &0);
    assert_eq!(ascending.last().unwrap(), &(FAST_PATH_INSERT_COUNT as i64 - 1));

    let start = Instant::now();
    let mut descending = SortedChain::with_capacity(FAST_PATH_INSERT_COUNT);
    for v in (0..FAST_PATH_INSERT_COUNT as i64).rev() {
        descending.insert(v).unwrap();
    }
    println!(
        "inserted {} descending values in {:.2?}",
        FAST_PATH_INSERT_COUNT,
        start.elapsed()
    );
    assert_eq!(descending.to_vec(), ascending.to_vec());
}

/// Interleave removals with a mirror model and verify both agree.
#[test]
fn stress_interleaved_removes() {
    let values = generate_values(5_000, 7);
    let probes = generate_values(5_000, 8);

    let mut chain = SortedChain::with_capacity(values.len());
    for &v in &values {
        chain.insert(v).unwrap();
    }

    // mirror the chain with a plain sorted vector
    let mut model = values;
    model.sort_unstable();

    for &probe in &probes {
        let expected = match model.binary_search(&probe) {
            Ok(index) => {
                model.remove(index);
                true
            }
            Err(_) => false,
        };
        assert_eq!(chain.remove(&probe), expected, "disagreement on {probe}");
    }

    assert_eq!(chain.len(), model.len());
    assert_eq!(chain.to_vec(), model);
    assert_sorted(&chain);
}

/// Same seed, same snapshot: the container is deterministic.
#[test]
fn stress_deterministic_snapshot() {
    let run = |seed: u64| {
        let mut chain = SortedChain::new();
        for v in generate_values(2_000, seed) {
            chain.insert(v).unwrap();
        }
        chain.to_vec()
    };

    assert_eq!(run(1234), run(1234));
    assert_ne!(run(1234), run(4321));
}

/// Membership probes against a large chain, including absent values that
/// the early-exit search should reject quickly.
#[test]
fn stress_membership_probes() {
    let mut chain = SortedChain::with_capacity(RANDOM_INSERT_COUNT);
    // even values only, so every odd probe is absent
    for v in 0..RANDOM_INSERT_COUNT as i64 {
        chain.insert(v * 2).unwrap();
    }

    let start = Instant::now();
    for v in 0..1_000i64 {
        assert!(chain.contains(&(v * 2)));
        assert!(!chain.contains(&(v * 2 + 1)));
    }
    println!("2000 membership probes in {:.2?}", start.elapsed());
}
