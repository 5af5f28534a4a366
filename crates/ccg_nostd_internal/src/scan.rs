//! Implements the nested scan at the heart of every correlogram calculation.

use crate::bins::LagBinning;
use crate::grid::CountGridViewMut;
use crate::pairs::PairSink;
use crate::spikes::SpikeTrain;
use core::ops::Range;

/// Accumulates windowed event pairs into `counts`, reporting each pair to
/// `sink` just before its count is written.
///
/// Every event in `centers` acts in turn as the center of a lag window. The
/// scan walks backward from the center until the time gap first exceeds
/// [`LagBinning::window_edge`], then forward until the gap first reaches it,
/// and for every candidate in between adds one count to the cell
/// `(center's label, candidate's label, bin(t_candidate - t_center))`.
/// Sorted times are what make it safe to stop each walk at the first
/// out-of-window candidate.
///
/// The two stopping tests are deliberately not mirror images of each other.
/// A pair sitting exactly at the window edge is kept by the backward walk
/// (`>`) and dropped by the forward walk (`>=`), which is what routes such a
/// pair to the outermost negative-lag bin rather than off the end of the
/// axis. The asymmetry is part of the calculation's contract and must not be
/// "fixed" for symmetry's sake.
///
/// Restricting `centers` to a sub-range of `0..spikes.len()` computes
/// exactly that slice of the full calculation. Candidates still come from
/// the whole batch, so consecutive sub-ranges compose to the full result,
/// count for count and pair for pair.
///
/// # Panics
/// Panics if a candidate inside the window maps to a bin or a grid cell
/// that is out of range. That means the window arithmetic and the grid
/// sizing disagree, and carrying on would corrupt a neighboring cell.
pub fn accumulate_pairs<S: PairSink>(
    counts: &mut CountGridViewMut<'_>,
    spikes: &SpikeTrain<'_>,
    binning: &LagBinning,
    centers: Range<usize>,
    sink: &mut S,
) -> Result<(), &'static str> {
    if counts.n_bins() != binning.n_bins() {
        return Err("the count grid and the lag binning disagree about n_bins");
    }
    if (spikes.max_label() as usize) > counts.n_labels() {
        return Err("the count grid is too small for the batch's largest label");
    }
    if centers.start > centers.end || centers.end > spikes.len() {
        return Err("the center range must lie within 0..spikes.len()");
    }

    let window_edge = binning.window_edge();
    for center in centers {
        let t_center = spikes.time(center);

        // backward walk: the edge-straddling pair is kept
        for other in (0..center).rev() {
            if t_center - spikes.time(other) > window_edge {
                break;
            }
            add_contribution(counts, spikes, binning, center, other, sink)?;
        }

        // forward walk: the edge-straddling pair is dropped
        for other in (center + 1)..spikes.len() {
            if spikes.time(other) - t_center >= window_edge {
                break;
            }
            add_contribution(counts, spikes, binning, center, other, sink)?;
        }
    }
    Ok(())
}

fn add_contribution<S: PairSink>(
    counts: &mut CountGridViewMut<'_>,
    spikes: &SpikeTrain<'_>,
    binning: &LagBinning,
    center: usize,
    other: usize,
    sink: &mut S,
) -> Result<(), &'static str> {
    let lag = spikes.time(other) - spikes.time(center);
    let Some(bin) = binning.bin_index(lag) else {
        panic!(
            "a windowed pair maps outside the lag axis: t_center={}, t_other={}, lag={}, \
             window_edge={}, n_bins={}",
            spikes.time(center),
            spikes.time(other),
            lag,
            binning.window_edge(),
            binning.n_bins()
        );
    };
    // recording first keeps the sink and the counts in lockstep if it fails
    sink.record(center as u32, other as u32)?;
    counts.increment(spikes.label(center), spikes.label(other), bin);
    Ok(())
}
