//! Implements the mutable view over a correlogram's count storage.

use ndarray::ArrayViewMut3;

/// Mutable view over a dense `[label1][label2][bin]` grid of pair counts.
///
/// The grid wraps a flat, caller-owned `&mut [u64]` of length
/// `n_bins * n_labels * n_labels`, laid out in row-major order with `label1`
/// outermost and the bin index innermost. In other words, the flat index of
/// the cell `(label1, label2, bin)` is
/// `n_bins * n_labels * (label1 - 1) + n_bins * (label2 - 1) + bin`. Labels
/// here are the 1-based identifiers carried by the events themselves.
///
/// # Note
/// Wrapping [`ArrayViewMut3`] instead of using it directly buys us one
/// thing: every reference to the ndarray package stays contained in this
/// file.
pub struct CountGridViewMut<'a> {
    data: ArrayViewMut3<'a, u64>,
    n_labels: usize,
    n_bins: usize,
}

impl<'a> CountGridViewMut<'a> {
    /// Wraps a flat slice whose length must be `n_bins * n_labels * n_labels`.
    pub fn from_flat_slice(
        data: &'a mut [u64],
        n_labels: usize,
        n_bins: usize,
    ) -> Result<CountGridViewMut<'a>, &'static str> {
        let Some(expected_len) = n_labels
            .checked_mul(n_labels)
            .and_then(|squared| squared.checked_mul(n_bins))
        else {
            return Err("n_bins * n_labels * n_labels overflows usize");
        };
        if data.len() != expected_len {
            return Err("the slice's length must equal n_bins * n_labels * n_labels");
        }
        let data = ArrayViewMut3::from_shape((n_labels, n_labels, n_bins), data)
            .expect("There must be a bug: the length check above should make this infallible");
        Ok(Self {
            data,
            n_labels,
            n_bins,
        })
    }

    /// the number of distinct labels the grid can hold counts for
    pub fn n_labels(&self) -> usize {
        self.n_labels
    }

    /// the number of lag bins per `(label1, label2)` histogram
    pub fn n_bins(&self) -> usize {
        self.n_bins
    }

    /// The index of a cell within the wrapped flat slice.
    ///
    /// # Panics
    /// Panics when the coordinates fall outside the grid.
    pub fn flat_index(&self, label1: u32, label2: u32, bin: usize) -> usize {
        self.verify_in_range(label1, label2, bin);
        self.n_bins * self.n_labels * (label1 as usize - 1) + self.n_bins * (label2 as usize - 1)
            + bin
    }

    /// Adds one count to a cell, identified by 1-based labels and a bin
    /// index.
    ///
    /// # Panics
    /// Panics when the coordinates fall outside the grid. An out-of-range
    /// coordinate at this level means the caller's sizing and the binning
    /// arithmetic disagree, and carrying on would corrupt a neighboring
    /// cell.
    pub fn increment(&mut self, label1: u32, label2: u32, bin: usize) {
        self.verify_in_range(label1, label2, bin);
        self.data[[label1 as usize - 1, label2 as usize - 1, bin]] += 1;
    }

    /// Reads a cell, identified by 1-based labels and a bin index.
    ///
    /// # Panics
    /// Panics when the coordinates fall outside the grid.
    pub fn get(&self, label1: u32, label2: u32, bin: usize) -> u64 {
        self.verify_in_range(label1, label2, bin);
        self.data[[label1 as usize - 1, label2 as usize - 1, bin]]
    }

    fn verify_in_range(&self, label1: u32, label2: u32, bin: usize) {
        if label1 == 0
            || label1 as usize > self.n_labels
            || label2 == 0
            || label2 as usize > self.n_labels
            || bin >= self.n_bins
        {
            panic!(
                "count-grid coordinates out of range: label1={}, label2={}, bin={} \
                 (the grid holds {} labels and {} bins)",
                label1, label2, bin, self.n_labels, self.n_bins
            );
        }
    }
}
