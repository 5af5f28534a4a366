//! Implements the owned correlogram accumulator and its builder.

use crate::error::Error;
use crate::recorder::PairRecorder;
use ccg_nostd_internal::{
    CountGridViewMut, DiscardPairs, LagBinning, SpikeTrain, accumulate_pairs,
};
use core::ops::Range;
use ndarray::ArrayView3;

/// A configured correlogram accumulation: the lag binning, the owned count
/// grid, and (optionally) the recorded pairs.
///
/// Values are created through [`CorrelogramBuilder`] and filled by
/// [`crate::process_spike_train`] / [`crate::process_center_range`]. The
/// count grid only ever grows by increments, so one value can absorb any
/// number of batches, be [`merged`](Correlogram::merge) with values filled
/// from disjoint center ranges, and be [`reset`](Correlogram::reset) for
/// reuse.
///
/// # Label capacity
/// The grid is dense over the labels `1..=n_labels`, sized either by the
/// builder's `label_count` or by the largest label of the first non-empty
/// batch. Every later batch must fit that capacity. Dense sizing wastes
/// memory when label values are sparse or large; remapping labels to a
/// compact range beforehand is the caller's job.
pub struct Correlogram {
    binning: LagBinning,
    /// 0 means the grid hasn't been sized yet
    n_labels: usize,
    counts: Vec<u64>,
    recorder: Option<PairRecorder>,
}

impl Correlogram {
    /// the width of a single lag bin
    pub fn bin_size(&self) -> f64 {
        self.binning.bin_size()
    }

    /// the number of bins on each side of the central (zero-lag) bin
    pub fn half_bins(&self) -> u32 {
        self.binning.half_bins()
    }

    /// the total number of lag bins per `(label1, label2)` histogram
    pub fn n_bins(&self) -> usize {
        self.binning.n_bins()
    }

    /// the absolute lag beyond which a pair of events is never counted
    pub fn window_edge(&self) -> f64 {
        self.binning.window_edge()
    }

    /// The grid's label capacity. This is 0 until the first non-empty batch
    /// when no `label_count` was configured.
    pub fn n_labels(&self) -> usize {
        self.n_labels
    }

    /// The counts as a flat slice of length `n_bins * n_labels * n_labels`,
    /// laid out in row-major `[label1][label2][bin]` order.
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// The counts as a `(n_labels, n_labels, n_bins)` view.
    ///
    /// The view's axes index from 0, so the counts for the label pair
    /// `(a, b)` sit in the plane `[a - 1, b - 1, ..]`.
    pub fn counts_view(&self) -> ArrayView3<'_, u64> {
        ArrayView3::from_shape(
            (self.n_labels, self.n_labels, self.n_bins()),
            self.counts.as_slice(),
        )
        .expect("There must be a bug: the counts no longer match their shape")
    }

    /// One label pair's histogram: the contiguous slice of `n_bins` counts
    /// for `(label1, label2)`.
    ///
    /// # Panics
    /// Panics when either label is 0 or exceeds the grid's capacity.
    pub fn histogram(&self, label1: u32, label2: u32) -> &[u64] {
        let n_bins = self.n_bins();
        let start = n_bins * self.plane_offset(label1, label2);
        &self.counts[start..start + n_bins]
    }

    /// A single cell's count.
    ///
    /// # Panics
    /// Panics when either label is out of range or `bin >= n_bins()`.
    pub fn count(&self, label1: u32, label2: u32, bin: usize) -> u64 {
        self.histogram(label1, label2)[bin]
    }

    /// The signed lag at the center of each bin, index-aligned with every
    /// [`histogram`](Correlogram::histogram) slice.
    pub fn lag_bin_centers(&self) -> Vec<f64> {
        (0..self.n_bins())
            .map(|bin| self.binning.bin_center(bin))
            .collect()
    }

    /// the total number of count increments across the whole grid
    pub fn total_increments(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// The recorded pairs as a flat slice (two entries per pair), when pair
    /// recording was configured.
    pub fn pairs(&self) -> Option<&[u32]> {
        self.recorder.as_ref().map(|recorder| recorder.as_flat())
    }

    /// the number of recorded pairs, when pair recording was configured
    pub fn n_pairs(&self) -> Option<usize> {
        self.recorder.as_ref().map(|recorder| recorder.n_pairs())
    }

    /// Consumes the correlogram, handing back the flat counts and (when
    /// recording was configured) the flat pair storage.
    pub fn into_parts(self) -> (Vec<u64>, Option<Vec<u32>>) {
        (self.counts, self.recorder.map(PairRecorder::into_flat))
    }

    /// Zeroes the counts and clears the recorded pairs, retaining the
    /// allocations, the binning, and the grid's label capacity.
    pub fn reset(&mut self) {
        self.counts.fill(0);
        if let Some(recorder) = &mut self.recorder {
            recorder.clear();
        }
    }

    /// Folds another correlogram's counts (and pairs) into this one.
    ///
    /// The two must agree about the binning, the label capacity, and the
    /// pair-recording configuration. Pairs are concatenated in argument
    /// order, which preserves center-major order whenever `other` covers the
    /// later center range.
    pub fn merge(&mut self, other: &Correlogram) -> Result<(), Error> {
        // todo: when exactly one side is still unsized, we could adopt the
        // sized operand's capacity instead of refusing
        if self.binning != other.binning {
            return Err(Error::merge_mismatch("their lag binnings differ"));
        }
        if self.n_labels != other.n_labels {
            return Err(Error::merge_mismatch("their label capacities differ"));
        }
        let limit_of = |recorder: &Option<PairRecorder>| {
            recorder.as_ref().map(|recorder| recorder.limit())
        };
        if limit_of(&self.recorder) != limit_of(&other.recorder) {
            return Err(Error::merge_mismatch(
                "their pair-recording configurations differ",
            ));
        }
        for (cell, extra) in self.counts.iter_mut().zip(other.counts.iter()) {
            *cell += extra;
        }
        if let (Some(mine), Some(theirs)) = (&mut self.recorder, &other.recorder) {
            mine.extend_from(theirs);
        }
        Ok(())
    }

    /// Sizes the grid on first use, or checks a later batch against the
    /// established capacity.
    pub(crate) fn ensure_label_capacity(&mut self, max_label: u32) -> Result<(), Error> {
        let needed = max_label as usize;
        if self.n_labels == 0 {
            let n_bins = self.binning.n_bins();
            let Some(total) = needed
                .checked_mul(needed)
                .and_then(|squared| squared.checked_mul(n_bins))
            else {
                return Err(Error::grid_size(needed, n_bins));
            };
            self.counts = vec![0; total];
            self.n_labels = needed;
            Ok(())
        } else if needed > self.n_labels {
            Err(Error::label_capacity(max_label, self.n_labels))
        } else {
            Ok(())
        }
    }

    /// Accumulates one batch, optionally restricted to a range of center
    /// indices.
    ///
    /// Validation failures leave `self` untouched (apart from grid sizing,
    /// which only writes zeros). A pair-capacity failure leaves the counts
    /// and the recorded pairs partial but consistent with each other.
    pub(crate) fn apply_batch(
        &mut self,
        times: &[f64],
        labels: &[u32],
        centers: Option<Range<usize>>,
    ) -> Result<(), Error> {
        let spikes = validated_spike_train(times, labels)?;
        if let Some(range) = &centers {
            if range.start > range.end || range.end > spikes.len() {
                return Err(Error::center_range(range.start, range.end, spikes.len()));
            }
        }
        if spikes.is_empty() {
            return Ok(());
        }
        self.ensure_label_capacity(spikes.max_label())?;

        let binning = self.binning;
        let n_labels = self.n_labels;
        let n_bins = binning.n_bins();
        let centers = centers.unwrap_or(0..spikes.len());

        let mut grid = CountGridViewMut::from_flat_slice(&mut self.counts, n_labels, n_bins)
            .map_err(Error::internal)?;
        let scan_result = match &mut self.recorder {
            Some(recorder) => accumulate_pairs(&mut grid, &spikes, &binning, centers, recorder),
            None => accumulate_pairs(&mut grid, &spikes, &binning, centers, &mut DiscardPairs),
        };

        scan_result.map_err(|message| match &self.recorder {
            Some(recorder) if recorder.overflowed() => Error::pair_capacity(
                recorder
                    .limit()
                    .expect("There must be a bug: an unbounded recorder reported overflow"),
            ),
            _ => Error::internal(message),
        })
    }

    fn plane_offset(&self, label1: u32, label2: u32) -> usize {
        if label1 == 0
            || label1 as usize > self.n_labels
            || label2 == 0
            || label2 as usize > self.n_labels
        {
            panic!(
                "the labels ({}, {}) fall outside the grid's capacity of {} labels",
                label1, label2, self.n_labels
            );
        }
        self.n_labels * (label1 as usize - 1) + (label2 as usize - 1)
    }
}

/// Checks a batch's invariants, reporting the first violation with a typed
/// error (the internal constructor only knows how to say "no").
fn validated_spike_train<'a>(times: &'a [f64], labels: &'a [u32]) -> Result<SpikeTrain<'a>, Error> {
    if times.len() != labels.len() {
        return Err(Error::length_mismatch(times.len(), labels.len()));
    }
    if times.len() > u32::MAX as usize {
        return Err(Error::integer_range(
            "the event count",
            times.len() as u64,
            0,
            u32::MAX as u64,
        ));
    }
    if let Some(index) = labels.iter().position(|&label| label == 0) {
        return Err(Error::invalid_label(index));
    }
    if let Some(index) = times.iter().position(|time| !time.is_finite()) {
        return Err(Error::non_finite_time(index, times[index]));
    }
    if let Some(offset) = times.windows(2).position(|pair| pair[1] < pair[0]) {
        return Err(Error::unsorted_times(offset + 1));
    }
    SpikeTrain::new(times, labels).map_err(Error::internal)
}

/// Builds [`Correlogram`] values.
///
/// `bin_size` and `half_bins` must be specified. Everything else has a
/// default: no preset label capacity and no pair recording.
#[derive(Clone, Default)]
pub struct CorrelogramBuilder {
    bin_size: Option<f64>,
    half_bins: Option<u32>,
    label_count: Option<u32>,
    record_pairs: bool,
    pair_limit: Option<usize>,
}

impl CorrelogramBuilder {
    pub fn new() -> CorrelogramBuilder {
        Self::default()
    }

    /// set the width of a single lag bin (in the same units as the event
    /// times)
    pub fn bin_size(mut self, bin_size: f64) -> Self {
        self.bin_size = Some(bin_size);
        self
    }

    /// set the number of bins on each side of the central (zero-lag) bin
    pub fn half_bins(mut self, half_bins: u32) -> Self {
        self.half_bins = Some(half_bins);
        self
    }

    /// Pre-sizes the grid for the labels `1..=label_count` instead of sizing
    /// it from the first non-empty batch.
    pub fn label_count(mut self, label_count: u32) -> Self {
        self.label_count = Some(label_count);
        self
    }

    /// Records the contributing `(center, other)` event-index pairs
    /// alongside the counts.
    pub fn record_pairs(mut self) -> Self {
        self.record_pairs = true;
        self
    }

    /// Like [`record_pairs`](CorrelogramBuilder::record_pairs), but refuses
    /// to record more than `max_pairs` pairs. The batch that would cross the
    /// limit fails with a capacity error instead.
    pub fn record_pairs_with_limit(mut self, max_pairs: usize) -> Self {
        self.record_pairs = true;
        self.pair_limit = Some(max_pairs);
        self
    }

    pub fn build(self) -> Result<Correlogram, Error> {
        let Some(bin_size) = self.bin_size else {
            return Err(Error::unset_parameter("bin_size"));
        };
        let Some(half_bins) = self.half_bins else {
            return Err(Error::unset_parameter("half_bins"));
        };
        if !bin_size.is_finite() || bin_size <= 0.0 {
            return Err(Error::bin_size(bin_size));
        }
        let binning = LagBinning::new(bin_size, half_bins).map_err(Error::internal)?;
        if self.pair_limit == Some(0) {
            return Err(Error::integer_range("the pair limit", 0, 1, u64::MAX));
        }
        let recorder = if self.record_pairs {
            Some(match self.pair_limit {
                Some(limit) => PairRecorder::with_limit(limit),
                None => PairRecorder::new(),
            })
        } else {
            None
        };

        let mut correlogram = Correlogram {
            binning,
            n_labels: 0,
            counts: Vec::new(),
            recorder,
        };
        if let Some(label_count) = self.label_count {
            if label_count == 0 {
                return Err(Error::integer_range("label_count", 0, 1, u32::MAX as u64));
            }
            correlogram.ensure_label_capacity(label_count)?;
        }
        Ok(correlogram)
    }
}
