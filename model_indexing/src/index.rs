//! Index algebra and shape resolution
//!
//! An index list is a plain slice of [`Index`] values. Positions are 1-based
//! and stored as `i64`, so a zero or negative position coming from a model
//! program is reported as out of range rather than wrapped.

// SAFETY: i64→usize casts below are guarded by `.max(0)` or an explicit
// non-negative check.
#![allow(clippy::cast_sign_loss)]

use std::fmt;

/// One addressing primitive of an index list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Index {
    /// A single position `x[n]`
    Single(i64),
    /// An explicit list of positions `x[ns]`; duplicates and any order allowed
    Multiple(Vec<i64>),
    /// Everything from `min` to the end `x[min:]`
    Min(i64),
    /// Everything from the start to `max` `x[:max]`
    Max(i64),
    /// Contiguous range between `min` and `max` (`min <= max`).
    ///
    /// When `ascending` is false the logical range runs from `max` down to
    /// `min`, so the value is consumed in reverse.
    MinMax { min: i64, max: i64, ascending: bool },
    /// The whole dimension `x[:]`
    All,
}

/// Physical contiguous range selected by a range index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Lowest 1-based position in the range
    pub first: i64,
    /// Number of positions
    pub len: usize,
    /// Whether the logical order runs from the highest position down
    pub reversed: bool,
}

impl Span {
    /// Highest 1-based position in the range
    pub fn last(&self) -> i64 {
        self.first.saturating_add(self.len as i64 - 1)
    }

    /// 0-based storage offset of the first position.
    ///
    /// Only meaningful once `first` has been validated.
    pub fn offset(&self) -> usize {
        self.first.saturating_sub(1).max(0) as usize
    }
}

impl Index {
    /// Build a min-max range from two endpoints in source order.
    ///
    /// `from <= to` gives an ascending range, otherwise the range is
    /// descending (`x[4:2]` selects 4, 3, 2).
    pub fn min_max(from: i64, to: i64) -> Self {
        Index::MinMax {
            min: from.min(to),
            max: from.max(to),
            ascending: from <= to,
        }
    }

    /// Number of positions selected in a dimension of size `extent`
    pub fn resolved_size(&self, extent: usize) -> usize {
        match self {
            Index::Single(_) => 1,
            Index::Multiple(ns) => ns.len(),
            Index::Min(min) => (extent as i64)
                .saturating_sub(*min)
                .saturating_add(1)
                .max(0) as usize,
            Index::Max(max) => (*max).max(0) as usize,
            Index::MinMax { min, max, .. } => {
                max.abs_diff(*min).saturating_add(1).min(i64::MAX as u64) as usize
            }
            Index::All => extent,
        }
    }

    /// 1-based position of the `k`-th selected element (0-based `k`).
    ///
    /// `k` must be below `resolved_size`; a `Multiple` index panics otherwise.
    /// Positions saturate at the `i64` limits, so extreme endpoints still
    /// reach the range check.
    pub fn position_at(&self, k: usize) -> i64 {
        let step = i64::try_from(k).unwrap_or(i64::MAX);
        match self {
            Index::Single(n) => *n,
            Index::Multiple(ns) => ns[k],
            Index::Min(min) => min.saturating_add(step),
            Index::Max(_) | Index::All => step.saturating_add(1),
            Index::MinMax {
                min,
                ascending: true,
                ..
            } => min.saturating_add(step),
            Index::MinMax {
                max,
                ascending: false,
                ..
            } => max.saturating_sub(step),
        }
    }

    /// Contiguous range selected by `Min`, `Max`, `MinMax` and `All`.
    ///
    /// Derived from the first and last `position_at`, so bulk copies over the
    /// span visit exactly the positions the generic path would.
    pub fn span(&self, extent: usize) -> Option<Span> {
        if matches!(self, Index::Single(_) | Index::Multiple(_)) {
            return None;
        }
        let len = self.resolved_size(extent);
        if len == 0 {
            return Some(Span {
                first: 1,
                len: 0,
                reversed: false,
            });
        }
        let head = self.position_at(0);
        let tail = self.position_at(len - 1);
        Some(Span {
            first: head.min(tail),
            len,
            reversed: head > tail,
        })
    }

    /// Short label of the index kind, as reported in trace events
    pub fn kind(&self) -> &'static str {
        match self {
            Index::Single(_) => "uni",
            Index::Multiple(_) => "multi",
            Index::Min(_) => "min",
            Index::Max(_) => "max",
            Index::MinMax {
                ascending: true, ..
            } => "min_max",
            Index::MinMax {
                ascending: false, ..
            } => "reverse_min_max",
            Index::All => "omni",
        }
    }
}

/// Number of positions `index` selects in a dimension of size `extent`
pub fn resolved_size(index: &Index, extent: usize) -> usize {
    index.resolved_size(extent)
}

/// 1-based position of the `k`-th element selected by `index`
pub fn position_at(index: &Index, k: usize) -> i64 {
    index.position_at(k)
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Index::Single(n) => write!(f, "{n}"),
            Index::Multiple(ns) => {
                write!(f, "[")?;
                for (i, n) in ns.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{n}")?;
                }
                write!(f, "]")
            }
            Index::Min(min) => write!(f, "{min}:"),
            Index::Max(max) => write!(f, ":{max}"),
            Index::MinMax {
                min,
                max,
                ascending: true,
            } => write!(f, "{min}:{max}"),
            Index::MinMax {
                min,
                max,
                ascending: false,
            } => write!(f, "{max}:{min}"),
            Index::All => write!(f, ":"),
        }
    }
}
