// The layout here follows a simple rule: `ccg_nostd_internal` reports
// problems as `&'static str` (it can't allocate), while everything that can
// reach a user of this crate gets wrapped in a single opaque `Error` holding
// a private kind enum. Keeping the enum private means that adding a new kind
// of error is never a breaking change.
//
// After this crate's own validation has run, the internal crate's checks
// should never fire. The `Internal` kind exists to wrap them anyway, so a
// bug shows up as a strange error message instead of a silent mismatch.
//
// The jiff crate has a whole discussion about error-type design. It's worth
// a read before extending this module.

#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
}

/// The underlying internal error type
#[non_exhaustive]
#[derive(Clone, Debug)]
enum ErrorKind {
    /// An error that occurs when a non-finite or non-positive bin size is
    /// specified
    BinSize(BinSizeError),
    /// An error that occurs when a center range doesn't fit within the batch
    CenterRange(CenterRangeError),
    /// An error that occurs when a count grid would be too large to address
    GridSize(GridSizeError),
    /// An error that occurs when an integer lies outside of the acceptable
    /// range of values
    IntegerRange(IntegerRangeError),
    /// An error that occurs within `ccg_nostd_internal`
    ///
    /// This wraps the stringly errors of `ccg_nostd_internal`. This crate
    /// performs its own validation before calling into the internal crate,
    /// so one of these escaping means there is a bug worth reporting.
    Internal(InternalError),
    /// An error that occurs when an event carries the reserved label 0
    InvalidLabel(InvalidLabelError),
    /// An error that occurs when a batch holds a label larger than the count
    /// grid's capacity
    LabelCapacity(LabelCapacityError),
    /// An error that occurs when `times` and `labels` have different lengths
    LengthMismatch(LengthMismatchError),
    /// An error that occurs when two correlograms with differing
    /// configurations are merged
    MergeMismatch(MergeMismatchError),
    /// An error that occurs when an event time is NaN or infinite
    NonFiniteTime(NonFiniteTimeError),
    /// An error that occurs when pair recording reaches its configured
    /// capacity
    PairCapacity(PairCapacityError),
    /// An error that occurs when a required builder parameter was never
    /// specified
    UnsetParameter(UnsetParameterError),
    /// An error that occurs when event times aren't sorted
    UnsortedTimes(UnsortedTimesError),
}

// define constructor methods for Error
impl Error {
    /// produce an error indicating that a non-finite or non-positive bin
    /// size was specified
    pub(crate) fn bin_size(value: f64) -> Self {
        Error {
            kind: ErrorKind::BinSize(BinSizeError { value }),
        }
    }

    /// produce an error indicating that a center range doesn't fit within
    /// the batch
    pub(crate) fn center_range(start: usize, end: usize, n_events: usize) -> Self {
        Error {
            kind: ErrorKind::CenterRange(CenterRangeError {
                start,
                end,
                n_events,
            }),
        }
    }

    /// produce an error indicating that a count grid would be too large to
    /// address
    pub(crate) fn grid_size(n_labels: usize, n_bins: usize) -> Self {
        Error {
            kind: ErrorKind::GridSize(GridSizeError { n_labels, n_bins }),
        }
    }

    /// produce an error indicating that an integer lies outside the
    /// acceptable range of values
    pub(crate) fn integer_range(
        description: &'static str,
        actual: u64,
        min_val: u64,
        max_val: u64,
    ) -> Self {
        Error {
            kind: ErrorKind::IntegerRange(IntegerRangeError {
                description,
                actual,
                min_val,
                max_val,
            }),
        }
    }

    /// wraps an internal error string
    pub(crate) fn internal(message: &'static str) -> Self {
        Error {
            kind: ErrorKind::Internal(InternalError(message)),
        }
    }

    /// produce an error indicating that an event carries the reserved
    /// label 0
    pub(crate) fn invalid_label(index: usize) -> Self {
        Error {
            kind: ErrorKind::InvalidLabel(InvalidLabelError { index }),
        }
    }

    /// produce an error indicating that a batch holds a label larger than
    /// the count grid's capacity
    pub(crate) fn label_capacity(max_label: u32, n_labels: usize) -> Self {
        Error {
            kind: ErrorKind::LabelCapacity(LabelCapacityError {
                max_label,
                n_labels,
            }),
        }
    }

    /// produce an error indicating that `times` and `labels` have different
    /// lengths
    pub(crate) fn length_mismatch(n_times: usize, n_labels: usize) -> Self {
        Error {
            kind: ErrorKind::LengthMismatch(LengthMismatchError { n_times, n_labels }),
        }
    }

    /// produce an error indicating that two correlograms with differing
    /// configurations were merged
    pub(crate) fn merge_mismatch(what: &'static str) -> Self {
        Error {
            kind: ErrorKind::MergeMismatch(MergeMismatchError { what }),
        }
    }

    /// produce an error indicating that an event time is NaN or infinite
    pub(crate) fn non_finite_time(index: usize, value: f64) -> Self {
        Error {
            kind: ErrorKind::NonFiniteTime(NonFiniteTimeError { index, value }),
        }
    }

    /// produce an error indicating that pair recording reached its
    /// configured capacity
    pub(crate) fn pair_capacity(limit: usize) -> Self {
        Error {
            kind: ErrorKind::PairCapacity(PairCapacityError { limit }),
        }
    }

    /// produce an error indicating that a required builder parameter was
    /// never specified
    pub(crate) fn unset_parameter(name: &'static str) -> Self {
        Error {
            kind: ErrorKind::UnsetParameter(UnsetParameterError { name }),
        }
    }

    /// produce an error indicating that event times aren't sorted
    pub(crate) fn unsorted_times(index: usize) -> Self {
        Error {
            kind: ErrorKind::UnsortedTimes(UnsortedTimesError { index }),
        }
    }

    /// Reports whether this error says that pair recording reached its
    /// configured capacity.
    ///
    /// This is the one failure a caller may want to handle specially: the
    /// counts and pairs accumulated before the cutoff remain consistent with
    /// each other, so the partial result is still meaningful.
    pub fn is_pair_capacity(&self) -> bool {
        matches!(self.kind, ErrorKind::PairCapacity(_))
    }
}

impl std::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        self.kind.fmt(f)
    }
}

impl std::error::Error for ErrorKind {}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match *self {
            ErrorKind::BinSize(ref err) => err.fmt(f),
            ErrorKind::CenterRange(ref err) => err.fmt(f),
            ErrorKind::GridSize(ref err) => err.fmt(f),
            ErrorKind::IntegerRange(ref err) => err.fmt(f),
            ErrorKind::Internal(ref err) => err.fmt(f),
            ErrorKind::InvalidLabel(ref err) => err.fmt(f),
            ErrorKind::LabelCapacity(ref err) => err.fmt(f),
            ErrorKind::LengthMismatch(ref err) => err.fmt(f),
            ErrorKind::MergeMismatch(ref err) => err.fmt(f),
            ErrorKind::NonFiniteTime(ref err) => err.fmt(f),
            ErrorKind::PairCapacity(ref err) => err.fmt(f),
            ErrorKind::UnsetParameter(ref err) => err.fmt(f),
            ErrorKind::UnsortedTimes(ref err) => err.fmt(f),
        }
    }
}

/// An error that occurs when a non-finite or non-positive bin size is
/// specified
#[derive(Clone, Debug)]
struct BinSizeError {
    value: f64,
}

impl std::error::Error for BinSizeError {}

impl core::fmt::Display for BinSizeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "bin_size has a value of {}. The value should be finite and \
             greater than zero",
            self.value
        )
    }
}

/// An error that occurs when a center range doesn't fit within the batch
#[derive(Clone, Debug)]
struct CenterRangeError {
    start: usize,
    end: usize,
    n_events: usize,
}

impl std::error::Error for CenterRangeError {}

impl core::fmt::Display for CenterRangeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "the center range {}..{} does not fit within 0..{} (the batch's \
             event count)",
            self.start, self.end, self.n_events
        )
    }
}

/// An error that occurs when a count grid would be too large to address
#[derive(Clone, Debug)]
struct GridSizeError {
    n_labels: usize,
    n_bins: usize,
}

impl std::error::Error for GridSizeError {}

impl core::fmt::Display for GridSizeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "a count grid for {} labels and {} bins has more cells than \
             usize can address",
            self.n_labels, self.n_bins
        )
    }
}

/// An error that occurs when an integer lies outside of the acceptable
/// range of values
#[derive(Clone, Debug)]
struct IntegerRangeError {
    description: &'static str,
    actual: u64,
    min_val: u64,
    max_val: u64,
}

impl std::error::Error for IntegerRangeError {}

impl core::fmt::Display for IntegerRangeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "{} has a value of {}. The value should be no less than {} and \
             not exceed {}",
            self.description, self.actual, self.min_val, self.max_val
        )
    }
}

/// Wraps the string errors from `ccg_nostd_internal`. These shouldn't be
/// reachable once this crate's own validation has run
#[derive(Clone)]
struct InternalError(&'static str);

impl std::error::Error for InternalError {}

impl core::fmt::Display for InternalError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "internal error (probably a bug): {}", self.0)
    }
}

impl core::fmt::Debug for InternalError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Debug::fmt(&self.0, f)
    }
}

/// An error that occurs when an event carries the reserved label 0
#[derive(Clone, Debug)]
struct InvalidLabelError {
    index: usize,
}

impl std::error::Error for InvalidLabelError {}

impl core::fmt::Display for InvalidLabelError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "event {} has the label 0, which is reserved to mean \"unset\"",
            self.index
        )
    }
}

/// An error that occurs when a batch holds a label larger than the count
/// grid's capacity
#[derive(Clone, Debug)]
struct LabelCapacityError {
    max_label: u32,
    n_labels: usize,
}

impl std::error::Error for LabelCapacityError {}

impl core::fmt::Display for LabelCapacityError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "the batch holds the label {} but the count grid was sized for \
             labels 1..={}",
            self.max_label, self.n_labels
        )
    }
}

/// An error that occurs when `times` and `labels` have different lengths
#[derive(Clone, Debug)]
struct LengthMismatchError {
    n_times: usize,
    n_labels: usize,
}

impl std::error::Error for LengthMismatchError {}

impl core::fmt::Display for LengthMismatchError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "times holds {} entries and labels holds {} entries. They must \
             be index-aligned",
            self.n_times, self.n_labels
        )
    }
}

/// An error that occurs when two correlograms with differing configurations
/// are merged
#[derive(Clone, Debug)]
struct MergeMismatchError {
    what: &'static str,
}

impl std::error::Error for MergeMismatchError {}

impl core::fmt::Display for MergeMismatchError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "the correlograms can't be merged: {}", self.what)
    }
}

/// An error that occurs when an event time is NaN or infinite
#[derive(Clone, Debug)]
struct NonFiniteTimeError {
    index: usize,
    value: f64,
}

impl std::error::Error for NonFiniteTimeError {}

impl core::fmt::Display for NonFiniteTimeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "the time at index {} is {}. Every event time must be finite",
            self.index, self.value
        )
    }
}

/// An error that occurs when pair recording reaches its configured capacity
#[derive(Clone, Debug)]
struct PairCapacityError {
    limit: usize,
}

impl std::error::Error for PairCapacityError {}

impl core::fmt::Display for PairCapacityError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "pair recording stopped at the configured limit of {} pairs. \
             The counts and pairs written so far are consistent with each \
             other",
            self.limit
        )
    }
}

/// An error that occurs when a required builder parameter was never
/// specified
#[derive(Clone, Debug)]
struct UnsetParameterError {
    name: &'static str,
}

impl std::error::Error for UnsetParameterError {}

impl core::fmt::Display for UnsetParameterError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "the {} parameter was never specified", self.name)
    }
}

/// An error that occurs when event times aren't sorted
#[derive(Clone, Debug)]
struct UnsortedTimesError {
    index: usize,
}

impl std::error::Error for UnsortedTimesError {}

impl core::fmt::Display for UnsortedTimesError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "times must be sorted in non-decreasing order. The entry at \
             index {} is smaller than its predecessor",
            self.index
        )
    }
}
