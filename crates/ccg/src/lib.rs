/*!
Computes multi-unit cross-correlograms (and auto-correlograms) from sorted
spike trains.

A spike train here is a pair of index-aligned arrays: event times (sorted in
non-decreasing order) and 1-based integer labels naming the unit that fired.
For every ordered pair of events whose time separation fits the configured
lag window, the calculation adds one count to a cell of a dense
`[label1][label2][bin]` grid, and can record the contributing event indices
alongside. The planes along the grid's diagonal are the auto-correlograms;
everything off the diagonal describes relative timing between two units
(synchrony, lead/lag structure, refractory gaps).

# Quick start

```
use ccg::{CorrelogramBuilder, process_spike_train};

let times = [0.010, 0.012, 0.030, 0.031];
let labels = [1_u32, 2, 1, 2];

let mut correlogram = CorrelogramBuilder::new()
    .bin_size(0.001)
    .half_bins(5)
    .build()?;
process_spike_train(&mut correlogram, &times, &labels)?;

// the (1, 2) histogram covers lags from -5.5 ms to +5.5 ms in 11 bins
let hist = correlogram.histogram(1, 2);
assert_eq!(hist.iter().sum::<u64>(), 2);
# Ok::<(), ccg::Error>(())
```

# Crate structure

The arithmetic all lives in [`ccg_nostd_internal`], which works without
`std` and without allocating. This crate layers owned buffers, a builder,
and typed errors on top. The internal view types and the scan itself are
re-exported for callers that manage their own storage.
*/

#![deny(rustdoc::broken_intra_doc_links)]

mod correlogram;
mod error;
mod func;
mod recorder;

pub use ccg_nostd_internal::{
    CountGridViewMut, DiscardPairs, LagBinning, PairSink, SlicePairWriter, SpikeTrain,
    accumulate_pairs,
};
pub use correlogram::{Correlogram, CorrelogramBuilder};
pub use error::Error;
pub use func::{process_center_range, process_spike_train};
pub use recorder::PairRecorder;
