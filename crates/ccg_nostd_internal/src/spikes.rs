//! Implements the borrowed view over a batch of spike events.

/// A sorted sequence of timestamped, labeled events.
///
/// Events are stored as two parallel slices: `times` (finite, sorted in
/// non-decreasing order) and `labels` (unit identifiers). Index alignment is
/// what ties them together, so event `i` is `(times[i], labels[i])`. Labels
/// start at 1; the value 0 is reserved to mean "unset" and is rejected here
/// so that downstream code never has to consider it.
#[derive(Clone, Debug)]
pub struct SpikeTrain<'a> {
    times: &'a [f64],
    labels: &'a [u32],
    max_label: u32,
}

impl<'a> SpikeTrain<'a> {
    /// create a new instance
    ///
    /// The event count is capped at `u32::MAX` so that an event index always
    /// fits in one entry of a recorded pair. Times must be finite: a NaN
    /// never compares ordered (so it would slip through the sortedness
    /// check), and a pair of equal infinities has a NaN time gap.
    pub fn new(times: &'a [f64], labels: &'a [u32]) -> Result<SpikeTrain<'a>, &'static str> {
        if times.len() != labels.len() {
            Err("times and labels must have the same length")
        } else if times.len() > u32::MAX as usize {
            Err("the number of events must not exceed u32::MAX")
        } else if labels.contains(&0) {
            Err("labels must all be at least 1 (the value 0 means \"unset\")")
        } else if times.iter().any(|time| !time.is_finite()) {
            Err("times must all be finite")
        } else if times.windows(2).any(|pair| pair[1] < pair[0]) {
            Err("times must be sorted in non-decreasing order")
        } else {
            let max_label = labels.iter().copied().max().unwrap_or(0);
            Ok(Self {
                times,
                labels,
                max_label,
            })
        }
    }

    /// the number of events
    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// the time of event `index`
    pub fn time(&self, index: usize) -> f64 {
        self.times[index]
    }

    /// the label of event `index`
    pub fn label(&self, index: usize) -> u32 {
        self.labels[index]
    }

    /// the largest label in the batch (0 when the batch is empty)
    pub fn max_label(&self) -> u32 {
        self.max_label
    }
}
