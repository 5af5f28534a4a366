//! Implements machinery for discretizing the signed lag axis.

/// Computes the floor of `x` as an integer.
///
/// `f64::floor` lives in `std` rather than `core`, so we can't use it in
/// this crate. The cast truncates toward zero, which only disagrees with
/// floor for negative non-integer values.
///
/// The caller is responsible for keeping `x` within the range of `i64` (the
/// cast saturates outside of it).
fn floor_i64(x: f64) -> i64 {
    let truncated = x as i64;
    if truncated as f64 > x {
        truncated - 1
    } else {
        truncated
    }
}

/// Uniform binning of the signed lag axis of a correlogram.
///
/// The axis holds `half_bins` bins on each side of a central bin, for
/// `1 + 2 * half_bins` bins in total, and bin `half_bins` is centered on
/// zero lag. A signed lag maps to the bin whose center is nearest, with
/// half-way ties resolved toward the more positive bin. Lags further from
/// zero than [`LagBinning::window_edge`] fall outside every bin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LagBinning {
    bin_size: f64,
    half_bins: u32,
}

impl LagBinning {
    /// create a new instance
    pub fn new(bin_size: f64, half_bins: u32) -> Result<LagBinning, &'static str> {
        if !bin_size.is_finite() {
            Err("bin_size must be finite")
        } else if bin_size <= 0.0 {
            Err("bin_size must be greater than zero")
        } else {
            Ok(Self {
                bin_size,
                half_bins,
            })
        }
    }

    /// the width of a single bin (in the same units as the event times)
    pub fn bin_size(&self) -> f64 {
        self.bin_size
    }

    /// the number of bins on each side of the central bin
    pub fn half_bins(&self) -> u32 {
        self.half_bins
    }

    /// the total number of bins
    pub fn n_bins(&self) -> usize {
        1 + 2 * self.half_bins as usize
    }

    /// The absolute lag beyond which a pair of events can't land in any bin,
    /// `bin_size * (half_bins + 0.5)`.
    pub fn window_edge(&self) -> f64 {
        self.bin_size * (self.half_bins as f64 + 0.5)
    }

    /// Maps a signed lag to a bin index, `half_bins + round(lag / bin_size)`
    /// with round-half-up tie breaking. Returns `None` when the lag rounds
    /// past either end of the axis, and for a NaN lag.
    pub fn bin_index(&self, lag: f64) -> Option<usize> {
        // the range check runs in f64 so that NaN and lags far beyond the
        // axis never reach the integer cast inside floor_i64
        let shifted = 0.5 + lag / self.bin_size;
        let in_axis = -(self.half_bins as f64) <= shifted && shifted < self.half_bins as f64 + 1.0;
        if !in_axis {
            return None;
        }
        Some((self.half_bins as i64 + floor_i64(shifted)) as usize)
    }

    /// the signed lag at the center of a bin
    pub fn bin_center(&self, bin: usize) -> f64 {
        (bin as f64 - self.half_bins as f64) * self.bin_size
    }
}
