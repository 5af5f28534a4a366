use ccg::{Correlogram, CorrelogramBuilder, process_spike_train};
use criterion::{BatchSize, BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::distr::{Distribution, Uniform};
use rand_xoshiro::Xoshiro256PlusPlus;
use rand_xoshiro::rand_core::SeedableRng;

/// generate a sorted random batch with a steady event rate
fn setup_batch(n: usize, n_labels: u32, mean_rate: f64, seed: u64) -> (Vec<f64>, Vec<u32>) {
    let mut my_rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let duration = n as f64 / mean_rate;
    let time_dist = Uniform::try_from(0.0..duration).unwrap();
    let label_dist = Uniform::try_from(1..=n_labels).unwrap();
    let mut times: Vec<f64> = (0..n).map(|_| time_dist.sample(&mut my_rng)).collect();
    times.sort_by(f64::total_cmp);
    let labels: Vec<u32> = (0..n).map(|_| label_dist.sample(&mut my_rng)).collect();
    (times, labels)
}

fn criterion_benchmark(c: &mut Criterion) {
    let counts_only = || -> Correlogram {
        CorrelogramBuilder::new()
            .bin_size(0.001)
            .half_bins(25)
            .label_count(8)
            .build()
            .unwrap()
    };
    let with_pairs = || -> Correlogram {
        CorrelogramBuilder::new()
            .bin_size(0.001)
            .half_bins(25)
            .label_count(8)
            .record_pairs()
            .build()
            .unwrap()
    };

    let mut group = c.benchmark_group("process_spike_train");
    for i in [10usize, 12, 14].into_iter() {
        let n_events = 1_usize << i;
        // a steady 500 events/s keeps the mean in-window neighbor count flat
        // across sizes
        let batch = setup_batch(n_events, 8, 500.0, 8226533417_u64);

        group.throughput(Throughput::Elements(n_events as u64));
        group.bench_with_input(
            BenchmarkId::new("CountsOnly", n_events),
            &batch,
            |b, (times, labels)| {
                b.iter_batched_ref(
                    counts_only,
                    |correlogram: &mut Correlogram| {
                        process_spike_train(correlogram, times, labels)
                    },
                    BatchSize::LargeInput, // we may be able to use BatchSize::SmallInput
                )
            },
        );

        group.bench_with_input(
            BenchmarkId::new("WithPairs", n_events),
            &batch,
            |b, (times, labels)| {
                b.iter_batched_ref(
                    with_pairs,
                    |correlogram: &mut Correlogram| {
                        process_spike_train(correlogram, times, labels)
                    },
                    BatchSize::LargeInput, // we may be able to use BatchSize::SmallInput
                )
            },
        );
    }
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
