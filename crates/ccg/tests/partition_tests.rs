mod common;

use ccg::{Correlogram, CorrelogramBuilder, process_center_range, process_spike_train};

// todo: we can get rid of the test module in integration tests
#[cfg(test)]
mod tests {
    use super::*;

    fn make_builder() -> CorrelogramBuilder {
        CorrelogramBuilder::new()
            .bin_size(0.002)
            .half_bins(6)
            .record_pairs()
    }

    #[test]
    fn test_center_partitions_compose_to_the_full_result() {
        // split the centers across 4 values (the way a threaded caller
        // would), then merge and compare against the unrestricted run
        let train = common::setup_spike_train(6148914691236517205, 500, 3, 0.8);
        let mut full = make_builder().build().unwrap();
        process_spike_train(&mut full, &train.times, &train.labels).unwrap();

        let cuts = [0_usize, 137, 260, 411, 500];
        let mut parts: Vec<Correlogram> = Vec::new();
        for bounds in cuts.windows(2) {
            let mut part = make_builder().build().unwrap();
            process_center_range(&mut part, &train.times, &train.labels, bounds[0]..bounds[1])
                .unwrap();
            parts.push(part);
        }

        let mut merged = parts.remove(0);
        for part in &parts {
            merged.merge(part).unwrap();
        }
        assert_eq!(merged.total_increments(), full.total_increments());
        assert_eq!(merged.counts(), full.counts());
        assert_eq!(merged.pairs(), full.pairs());
    }

    #[test]
    fn test_sequential_center_ranges_into_one_value() {
        let train = common::setup_spike_train(40992764608243448, 320, 2, 0.5);
        let mut full = make_builder().build().unwrap();
        process_spike_train(&mut full, &train.times, &train.labels).unwrap();

        let mut chunked = make_builder().build().unwrap();
        let mut start = 0;
        while start < train.times.len() {
            let end = (start + 100).min(train.times.len());
            process_center_range(&mut chunked, &train.times, &train.labels, start..end).unwrap();
            start = end;
        }
        assert_eq!(chunked.counts(), full.counts());
        assert_eq!(chunked.pairs(), full.pairs());
    }

    #[test]
    fn test_empty_center_range_is_a_no_op() {
        let times = [0.0, 0.001, 0.002];
        let labels = [1_u32, 2, 1];
        let mut correlogram = make_builder().build().unwrap();
        process_center_range(&mut correlogram, &times, &labels, 2..2).unwrap();
        // sizing happened (the batch wasn't empty) but nothing was counted
        assert_eq!(correlogram.n_labels(), 2);
        assert_eq!(correlogram.total_increments(), 0);
        assert!(correlogram.pairs().unwrap().is_empty());
    }
}
