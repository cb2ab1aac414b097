//! Numeric ranges that remember whether their bounds are integers.
//!
//! A preset's output range decides quantization for the whole pipeline:
//! a range is integer-typed iff *both* of its bounds are integers, and
//! [`Range::is_int`] is the only place that rule lives. Samplers truncate
//! and formatters render bare integers based on this one predicate.

use std::fmt;

/// One bound of a [`Range`], carrying its numeric kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    /// An integer bound.
    Int(i64),
    /// A floating-point bound.
    Float(f64),
}

impl Bound {
    /// The bound as an f64, whatever its kind.
    #[inline]
    pub fn value(self) -> f64 {
        match self {
            Bound::Int(v) => v as f64,
            Bound::Float(v) => v,
        }
    }
}

impl From<i64> for Bound {
    fn from(v: i64) -> Self {
        Bound::Int(v)
    }
}

impl From<f64> for Bound {
    fn from(v: f64) -> Self {
        Bound::Float(v)
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::Int(v) => write!(f, "{v}"),
            Bound::Float(v) => write!(f, "{v}"),
        }
    }
}

/// An inclusive `[lo, hi]` range with typed bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    /// Lower bound.
    pub lo: Bound,
    /// Upper bound.
    pub hi: Bound,
}

impl Range {
    /// Creates a range from two bounds.
    pub const fn new(lo: Bound, hi: Bound) -> Self {
        Self { lo, hi }
    }

    /// Creates an integer-typed range.
    pub const fn int(lo: i64, hi: i64) -> Self {
        Self {
            lo: Bound::Int(lo),
            hi: Bound::Int(hi),
        }
    }

    /// Creates a float-typed range.
    pub const fn float(lo: f64, hi: f64) -> Self {
        Self {
            lo: Bound::Float(lo),
            hi: Bound::Float(hi),
        }
    }

    /// Whether this range is integer-typed.
    ///
    /// True iff both bounds are [`Bound::Int`]. This single predicate
    /// governs quantization and numeric text formatting everywhere.
    #[inline]
    pub fn is_int(&self) -> bool {
        matches!((self.lo, self.hi), (Bound::Int(_), Bound::Int(_)))
    }

    /// Lower bound as f64.
    #[inline]
    pub fn lo(&self) -> f64 {
        self.lo.value()
    }

    /// Upper bound as f64.
    #[inline]
    pub fn hi(&self) -> f64 {
        self.hi.value()
    }

    /// Whether the range is non-degenerate (`lo < hi`).
    #[inline]
    pub fn is_well_formed(&self) -> bool {
        self.lo() < self.hi()
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lo, self.hi)
    }
}
