//! Closed numeric intervals and shift-into-bounds.
//!
//! An [`Interval`] is the 1D building block of the fitting algorithm: each
//! box axis becomes an interval that is translated back inside the frame's
//! extent on that axis, reporting which bound edge(s) it ends up touching.

/// A closed interval `[lo, hi]` on the real line.
///
/// Invariant: `lo <= hi`. [`Interval::new`] trusts the caller;
/// [`Interval::from_array`] validates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Interval {
    lo: f64,
    hi: f64,
}

/// Interval construction error.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum IntervalError {
    /// Endpoints were given in the wrong order (`lo > hi`).
    Inverted { lo: f64, hi: f64 },
}

/// Result of trying to translate an interval inside a bound.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ShiftOutcome {
    /// The interval fits, possibly after translation. Edge flags report
    /// exact-equality contact with the bound's endpoints.
    Fits {
        /// The translated interval (equal to the input when it already fit).
        shifted: Interval,
        /// Low endpoint sits exactly on `bound.lo`.
        touches_lo: bool,
        /// High endpoint sits exactly on `bound.hi`.
        touches_hi: bool,
    },
    /// Wider than the bound — no translation can make it fit.
    /// The caller must rescale before shifting again.
    TooWide,
}

impl Interval {
    /// Create an interval. Callers must keep `lo <= hi`.
    pub const fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    /// Create an interval from `[lo, hi]`, validating endpoint order.
    pub fn from_array([lo, hi]: [f64; 2]) -> Result<Self, IntervalError> {
        if lo > hi {
            return Err(IntervalError::Inverted { lo, hi });
        }
        Ok(Self { lo, hi })
    }

    /// Low endpoint.
    pub const fn lo(&self) -> f64 {
        self.lo
    }

    /// High endpoint.
    pub const fn hi(&self) -> f64 {
        self.hi
    }

    /// Extent `hi - lo`.
    pub fn width(&self) -> f64 {
        self.hi - self.lo
    }

    /// Endpoints as `[lo, hi]`.
    pub const fn to_array(&self) -> [f64; 2] {
        [self.lo, self.hi]
    }

    /// Translate this interval so it lies inside `bound`, if possible.
    ///
    /// An interval wider than the bound cannot fit and yields
    /// [`ShiftOutcome::TooWide`]. Otherwise at most one endpoint overruns
    /// the bound (both overrunning would require `width > bound.width`);
    /// the interval is translated toward the interior with the overrunning
    /// endpoint pinned exactly onto the bound, so edge detection by
    /// equality stays exact under floating point.
    ///
    /// ```
    /// use boxfit::interval::{Interval, ShiftOutcome};
    ///
    /// let outcome = Interval::new(5.0, 15.0).shift_into(Interval::new(0.0, 10.0));
    /// assert_eq!(
    ///     outcome,
    ///     ShiftOutcome::Fits {
    ///         shifted: Interval::new(0.0, 10.0),
    ///         touches_lo: true,
    ///         touches_hi: true,
    ///     }
    /// );
    /// ```
    pub fn shift_into(self, bound: Interval) -> ShiftOutcome {
        if self.width() > bound.width() {
            return ShiftOutcome::TooWide;
        }
        let shifted = if self.lo < bound.lo {
            Interval::new(bound.lo, bound.lo + self.width())
        } else if self.hi > bound.hi {
            Interval::new(bound.hi - self.width(), bound.hi)
        } else {
            self
        };
        ShiftOutcome::Fits {
            shifted,
            touches_lo: shifted.lo == bound.lo,
            touches_hi: shifted.hi == bound.hi,
        }
    }
}
