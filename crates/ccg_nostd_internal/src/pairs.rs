//! Implements the seam through which the scan reports contributing pairs.

/// Receives the `(center, other)` event-index pairs that contribute counts
/// to a correlogram.
///
/// The scan reports every pair in the order it discovers them, immediately
/// before incrementing the matching count cell. A sink that refuses an
/// append therefore stops the calculation with the recorded pairs and the
/// written counts still in lockstep.
pub trait PairSink {
    /// Record one contributing pair. An `Err` aborts the calculation.
    fn record(&mut self, center: u32, other: u32) -> Result<(), &'static str>;
}

/// A sink that ignores every pair, for count-only calculations.
pub struct DiscardPairs;

impl PairSink for DiscardPairs {
    fn record(&mut self, _center: u32, _other: u32) -> Result<(), &'static str> {
        Ok(())
    }
}

/// A sink that fills a caller-allocated slice, two entries per pair.
///
/// Appends are refused once the slice can't hold another pair, so the write
/// never runs past the end. [`SlicePairWriter::overflowed`] reports whether
/// that ever happened.
pub struct SlicePairWriter<'a> {
    buf: &'a mut [u32],
    len: usize,
    overflowed: bool,
}

impl<'a> SlicePairWriter<'a> {
    pub fn new(buf: &'a mut [u32]) -> SlicePairWriter<'a> {
        Self {
            buf,
            len: 0,
            overflowed: false,
        }
    }

    /// the number of pairs recorded so far
    pub fn n_pairs(&self) -> usize {
        self.len / 2
    }

    /// the filled prefix of the slice
    pub fn as_flat(&self) -> &[u32] {
        &self.buf[..self.len]
    }

    /// whether an append was ever refused for lack of space
    pub fn overflowed(&self) -> bool {
        self.overflowed
    }
}

impl PairSink for SlicePairWriter<'_> {
    fn record(&mut self, center: u32, other: u32) -> Result<(), &'static str> {
        if self.len + 2 > self.buf.len() {
            self.overflowed = true;
            return Err("the pair buffer is full");
        }
        self.buf[self.len] = center;
        self.buf[self.len + 1] = other;
        self.len += 2;
        Ok(())
    }
}
