//! Implements the owned, growable pair buffer.

use ccg_nostd_internal::PairSink;

/// An append-only buffer of `(center, other)` event-index pairs.
///
/// Storage is a flat `Vec<u32>` holding two entries per pair, in append
/// order. Nothing is allocated until the first append, and growth is the
/// vector's usual amortized doubling. A recorder built with
/// [`PairRecorder::with_limit`] instead refuses appends past the limit, so a
/// runaway calculation fails early rather than eating memory.
pub struct PairRecorder {
    flat: Vec<u32>,
    limit: Option<usize>,
    overflowed: bool,
}

impl PairRecorder {
    /// create an unbounded recorder
    pub fn new() -> PairRecorder {
        Self {
            flat: Vec::new(),
            limit: None,
            overflowed: false,
        }
    }

    /// create a recorder that refuses to hold more than `max_pairs` pairs
    pub fn with_limit(max_pairs: usize) -> PairRecorder {
        Self {
            flat: Vec::new(),
            limit: Some(max_pairs),
            overflowed: false,
        }
    }

    /// the number of recorded pairs
    pub fn n_pairs(&self) -> usize {
        self.flat.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.flat.is_empty()
    }

    /// the configured pair limit, if any
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// whether an append was ever refused at the limit
    pub fn overflowed(&self) -> bool {
        self.overflowed
    }

    /// the recorded pairs as a flat slice, two entries per pair
    pub fn as_flat(&self) -> &[u32] {
        &self.flat
    }

    /// iterate over the recorded pairs in append order
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.flat.chunks_exact(2).map(|pair| (pair[0], pair[1]))
    }

    /// Drops every recorded pair, retaining the allocation and the limit.
    pub fn clear(&mut self) {
        self.flat.clear();
        self.overflowed = false;
    }

    /// Consumes the recorder, returning the flat pair storage.
    pub fn into_flat(self) -> Vec<u32> {
        self.flat
    }

    pub(crate) fn extend_from(&mut self, other: &PairRecorder) {
        self.flat.extend_from_slice(&other.flat);
    }
}

impl Default for PairRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl PairSink for PairRecorder {
    fn record(&mut self, center: u32, other: u32) -> Result<(), &'static str> {
        // >= rather than == because a merge may push the length past the
        // limit
        if self.limit.is_some_and(|limit| self.n_pairs() >= limit) {
            self.overflowed = true;
            return Err("the pair recorder reached its configured limit");
        }
        self.flat.push(center);
        self.flat.push(other);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grows_and_iterates_in_order() {
        let mut recorder = PairRecorder::new();
        assert!(recorder.is_empty());
        recorder.record(3, 2).unwrap();
        recorder.record(3, 4).unwrap();
        recorder.record(4, 3).unwrap();
        assert_eq!(recorder.n_pairs(), 3);
        assert_eq!(recorder.as_flat(), &[3, 2, 3, 4, 4, 3]);
        let pairs: Vec<(u32, u32)> = recorder.iter().collect();
        assert_eq!(pairs, vec![(3, 2), (3, 4), (4, 3)]);
    }

    #[test]
    fn limit_refuses_and_flags() {
        let mut recorder = PairRecorder::with_limit(2);
        recorder.record(0, 1).unwrap();
        recorder.record(1, 0).unwrap();
        assert!(recorder.record(1, 2).is_err());
        assert!(recorder.overflowed());
        assert_eq!(recorder.n_pairs(), 2);

        // clearing resets the flag but keeps the limit
        recorder.clear();
        assert!(!recorder.overflowed());
        assert!(recorder.record(5, 6).is_ok());
        assert_eq!(recorder.limit(), Some(2));
    }

    #[test]
    fn into_flat_hands_back_storage() {
        let mut recorder = PairRecorder::new();
        recorder.record(9, 8).unwrap();
        assert_eq!(recorder.into_flat(), vec![9, 8]);
    }
}
