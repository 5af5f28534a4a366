/*!
Core building blocks for spike-train correlogram calculations.

Everything in this crate works without `std` and without allocating: inputs
and outputs are caller-owned slices wrapped in validated view types, and the
scan itself is a free function over those views. The `ccg` crate layers owned
buffers, a builder, and typed errors on top of this one; the actual
arithmetic all lives here.
*/

#![no_std]

mod bins;
mod grid;
mod pairs;
mod scan;
mod spikes;

pub use bins::LagBinning;
pub use grid::CountGridViewMut;
pub use pairs::{DiscardPairs, PairSink, SlicePairWriter};
pub use scan::accumulate_pairs;
pub use spikes::SpikeTrain;
