// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Interval Limits
//!
//! A `Limit<T>` is one boundary of an interval: it sits on the lower or the
//! upper side, is either open or closed, and may be infinite (no value at
//! all). Infinite limits are always open; there is no point for them to
//! include.
//!
//! ## Ordering
//!
//! Limits form a total order that places every boundary where it "reaches":
//!
//! - an infinite lower limit is below everything, an infinite upper limit
//!   above everything, and two infinite limits on the same side are equal;
//! - finite limits with different values compare by value;
//! - at the same value, a closed lower limit is below an open one, a closed
//!   upper limit is above an open one, and any lower limit is below any
//!   upper limit.
//!
//! ```rust
//! use tempus_core::math::limit::Limit;
//!
//! let closed = Limit::lower(5, true);
//! let open = Limit::lower(5, false);
//! assert!(closed < open);
//! assert!(Limit::unbounded_lower() < closed);
//! assert!(Limit::upper(5, false) < Limit::upper(5, true));
//! assert!(open < Limit::upper(5, false));
//! ```

use std::cmp::Ordering;

/// The side of an interval a limit bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Side {
    Lower,
    Upper,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Lower => write!(f, "lower"),
            Side::Upper => write!(f, "upper"),
        }
    }
}

/// One boundary of an interval.
///
/// # Invariants
///
/// An infinite limit (`value == None`) is never closed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Limit<T> {
    value: Option<T>,
    closed: bool,
    side: Side,
}

impl<T> Limit<T> {
    /// Creates a limit on `side`. A `None` value yields an infinite limit,
    /// which is forced open.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempus_core::math::limit::{Limit, Side};
    ///
    /// let lim: Limit<i32> = Limit::new(Side::Upper, None, true);
    /// assert!(lim.is_infinite());
    /// assert!(!lim.is_closed());
    /// ```
    #[inline]
    pub fn new(side: Side, value: Option<T>, closed: bool) -> Self {
        let closed = closed && value.is_some();
        Self {
            value,
            closed,
            side,
        }
    }

    /// Creates a finite lower limit.
    #[inline]
    pub fn lower(value: T, closed: bool) -> Self {
        Self::new(Side::Lower, Some(value), closed)
    }

    /// Creates a finite upper limit.
    #[inline]
    pub fn upper(value: T, closed: bool) -> Self {
        Self::new(Side::Upper, Some(value), closed)
    }

    /// Creates an infinite limit on `side`.
    #[inline]
    pub fn unbounded(side: Side) -> Self {
        Self::new(side, None, false)
    }

    /// Creates an infinite lower limit.
    #[inline]
    pub fn unbounded_lower() -> Self {
        Self::unbounded(Side::Lower)
    }

    /// Creates an infinite upper limit.
    #[inline]
    pub fn unbounded_upper() -> Self {
        Self::unbounded(Side::Upper)
    }

    /// Returns the boundary value, or `None` for an infinite limit.
    #[inline]
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Consumes the limit and returns its boundary value.
    #[inline]
    pub fn into_value(self) -> Option<T> {
        self.value
    }

    #[inline]
    pub const fn side(&self) -> Side {
        self.side
    }

    #[inline]
    pub const fn is_lower(&self) -> bool {
        matches!(self.side, Side::Lower)
    }

    #[inline]
    pub const fn is_upper(&self) -> bool {
        matches!(self.side, Side::Upper)
    }

    /// Returns `true` if the boundary value belongs to the interval.
    #[inline]
    pub const fn is_closed(&self) -> bool {
        self.closed
    }

    #[inline]
    pub const fn is_open(&self) -> bool {
        !self.closed
    }

    #[inline]
    pub const fn is_infinite(&self) -> bool {
        self.value.is_none()
    }

    #[inline]
    pub const fn is_finite(&self) -> bool {
        self.value.is_some()
    }

    /// Position of a finite limit relative to other finite limits at the
    /// same value.
    #[inline]
    const fn rank(&self) -> u8 {
        match (self.side, self.closed) {
            (Side::Lower, true) => 0,
            (Side::Lower, false) => 1,
            (Side::Upper, false) => 2,
            (Side::Upper, true) => 3,
        }
    }
}

impl<T> Limit<T>
where
    T: Ord,
{
    /// Returns `true` if this limit cuts `value` off its interval.
    ///
    /// An infinite limit never excludes anything.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempus_core::math::limit::Limit;
    ///
    /// let lower = Limit::lower(5, false);
    /// assert!(lower.excludes(&4));
    /// assert!(lower.excludes(&5));
    /// assert!(!lower.excludes(&6));
    /// ```
    #[inline]
    pub fn excludes(&self, value: &T) -> bool {
        let Some(bound) = self.value.as_ref() else {
            return false;
        };
        match (self.side, value.cmp(bound)) {
            (_, Ordering::Equal) => !self.closed,
            (Side::Lower, ord) => ord == Ordering::Less,
            (Side::Upper, ord) => ord == Ordering::Greater,
        }
    }
}

impl<T> Ord for Limit<T>
where
    T: Ord,
{
    fn cmp(&self, other: &Self) -> Ordering {
        match (&self.value, &other.value) {
            (None, None) => self.side.cmp(&other.side),
            (None, Some(_)) => match self.side {
                Side::Lower => Ordering::Less,
                Side::Upper => Ordering::Greater,
            },
            (Some(_), None) => match other.side {
                Side::Lower => Ordering::Greater,
                Side::Upper => Ordering::Less,
            },
            (Some(a), Some(b)) => a.cmp(b).then_with(|| self.rank().cmp(&other.rank())),
        }
    }
}

impl<T> PartialOrd for Limit<T>
where
    T: Ord,
{
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
