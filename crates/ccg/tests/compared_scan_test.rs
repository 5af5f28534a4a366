mod common;

use ccg::{CorrelogramBuilder, process_spike_train};

// todo: we can get rid of the test module in integration tests
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_matches_naive_reference() {
        // (seed, n, n_labels, duration, bin_size, half_bins)
        let cases = [
            (4242322117_u64, 300_usize, 3_u32, 0.5_f64, 0.002_f64, 7_u32),
            // densely packed events of a single unit
            (987654321012345, 200, 1, 0.05, 0.001, 5),
            // sparse events on a wide lag axis
            (31415926535897, 64, 5, 10.0, 0.010, 12),
        ];
        for (seed, n, n_labels, duration, bin_size, half_bins) in cases {
            let train = common::setup_spike_train(seed, n, n_labels, duration);
            let mut correlogram = CorrelogramBuilder::new()
                .bin_size(bin_size)
                .half_bins(half_bins)
                .label_count(n_labels)
                .build()
                .unwrap();
            process_spike_train(&mut correlogram, &train.times, &train.labels).unwrap();

            let expected = common::naive_counts(
                &train.times,
                &train.labels,
                bin_size,
                half_bins,
                n_labels as usize,
            );
            assert_eq!(correlogram.counts(), expected.as_slice(), "seed {seed}");
        }
    }

    #[test]
    fn test_replaying_recorded_pairs_reproduces_the_counts() {
        // the recorded pairs fully determine the counts: push every pair
        // back through the binning rule and compare grids
        let train = common::setup_spike_train(777000777000777, 250, 4, 0.4);
        let bin_size = 0.001;
        let half_bins = 9_u32;
        let mut correlogram = CorrelogramBuilder::new()
            .bin_size(bin_size)
            .half_bins(half_bins)
            .label_count(4)
            .record_pairs()
            .build()
            .unwrap();
        process_spike_train(&mut correlogram, &train.times, &train.labels).unwrap();
        assert!(correlogram.n_pairs().unwrap() > 0);

        let n_bins = correlogram.n_bins();
        let mut replayed = vec![0_u64; n_bins * 4 * 4];
        for pair in correlogram.pairs().unwrap().chunks_exact(2) {
            let (center, other) = (pair[0] as usize, pair[1] as usize);
            assert_ne!(center, other);
            let lag = train.times[other] - train.times[center];
            let bin = (half_bins as i64 + (0.5 + lag / bin_size).floor() as i64) as usize;
            let index = n_bins * 4 * (train.labels[center] as usize - 1)
                + n_bins * (train.labels[other] as usize - 1)
                + bin;
            replayed[index] += 1;
        }
        assert_eq!(correlogram.counts(), replayed.as_slice());
    }
}
