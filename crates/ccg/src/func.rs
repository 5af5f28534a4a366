//! Declares the functions that actually drive a calculation.
//!
//! Both functions call into a private method of [`Correlogram`], so they
//! could just as well be methods themselves. They are standalone on purpose.
//! The correlogram value is the calculation's *output*, and loading it up
//! with every way of feeding data in is how output types grow into "god
//! objects". Keeping the drivers here also leaves room for more entry points
//! (event streams delivered chunk by chunk, center ranges pre-partitioned
//! across threads) without ever touching the accumulator's surface.

use crate::correlogram::Correlogram;
use crate::error::Error;
use core::ops::Range;

/// Accumulates every windowed, ordered pair of events in a batch into
/// `correlogram`.
///
/// `times` and `labels` are index-aligned, so event `i` is
/// `(times[i], labels[i])`. The times must be finite and sorted in
/// non-decreasing order, and every label must be at least 1. For each
/// ordered pair whose time separation fits the configured window, the count
/// cell `(center's label, other's label, bin of t_other - t_center)` gains
/// one count, and the pair is recorded when recording is configured.
///
/// A validation error leaves the correlogram untouched. A pair-capacity
/// error leaves the counts and recorded pairs partial but consistent with
/// each other.
pub fn process_spike_train(
    correlogram: &mut Correlogram,
    times: &[f64],
    labels: &[u32],
) -> Result<(), Error> {
    correlogram.apply_batch(times, labels, None)
}

/// Like [`process_spike_train`], but only the events with indices in
/// `centers` act as window centers.
///
/// Candidate events still come from the whole batch, so processing
/// consecutive center ranges into one correlogram (or into several that are
/// merged afterward) reproduces the unrestricted calculation exactly, count
/// for count and pair for pair.
pub fn process_center_range(
    correlogram: &mut Correlogram,
    times: &[f64],
    labels: &[u32],
    centers: Range<usize>,
) -> Result<(), Error> {
    correlogram.apply_batch(times, labels, Some(centers))
}
