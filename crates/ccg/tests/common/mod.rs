// this file is named mod.rs (rather than common.rs) so that the test runner
// doesn't treat it as a standalone integration-test crate. See
// https://doc.rust-lang.org/book/ch11-03-test-organization.html#submodules-in-integration-tests

// a couple of helpers are only used by some of the test binaries
#![allow(dead_code)]

use rand::distr::{Distribution, Uniform};
use rand_xoshiro::Xoshiro256PlusPlus;
use rand_xoshiro::rand_core::SeedableRng;

/// An owned batch of randomly placed, randomly labeled events.
pub struct OwnedSpikeTrain {
    pub times: Vec<f64>,
    pub labels: Vec<u32>,
}

/// setup an OwnedSpikeTrain with `n` events spread over `duration` seconds
/// and labels drawn from `1..=n_labels`
pub fn setup_spike_train(seed: u64, n: usize, n_labels: u32, duration: f64) -> OwnedSpikeTrain {
    let mut my_rng = Xoshiro256PlusPlus::seed_from_u64(seed);

    let time_dist = Uniform::try_from(0.0..duration).unwrap();
    let label_dist = Uniform::try_from(1..=n_labels).unwrap();

    let mut times: Vec<f64> = (0..n).map(|_| time_dist.sample(&mut my_rng)).collect();
    times.sort_by(f64::total_cmp);
    let labels: Vec<u32> = (0..n).map(|_| label_dist.sample(&mut my_rng)).collect();

    OwnedSpikeTrain { times, labels }
}

/// Counts every ordered in-window pair the slow, obvious way and returns the
/// flat `[label1][label2][bin]` grid.
///
/// The window rule is applied per pair rather than through a sorted-order
/// early exit: a pair whose candidate sits *before* the center is kept up to
/// and including the window edge, while a candidate *after* the center is
/// kept strictly inside it.
pub fn naive_counts(
    times: &[f64],
    labels: &[u32],
    bin_size: f64,
    half_bins: u32,
    n_labels: usize,
) -> Vec<u64> {
    let n_bins = 1 + 2 * half_bins as usize;
    let window_edge = bin_size * (half_bins as f64 + 0.5);
    let mut counts = vec![0_u64; n_bins * n_labels * n_labels];
    for center in 0..times.len() {
        for other in 0..times.len() {
            if other == center {
                continue;
            }
            let gap = (times[other] - times[center]).abs();
            let included = if other < center {
                gap <= window_edge
            } else {
                gap < window_edge
            };
            if !included {
                continue;
            }
            let lag = times[other] - times[center];
            let bin = (half_bins as i64 + (0.5 + lag / bin_size).floor() as i64) as usize;
            let index = n_bins * n_labels * (labels[center] as usize - 1)
                + n_bins * (labels[other] as usize - 1)
                + bin;
            counts[index] += 1;
        }
    }
    counts
}
