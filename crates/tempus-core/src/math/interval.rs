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

use crate::math::{
    error::IntervalError,
    limit::{Limit, Side},
};
use crate::num::step::Offset;
use smallvec::SmallVec;
use std::{
    cmp::{Ordering, max, min},
    hash::{Hash, Hasher},
    iter::FusedIterator,
    ops::{Bound, RangeBounds},
};

/// A contiguous range over a totally ordered type.
///
/// Each end is bounded by a [`Limit`] that is open, closed, or infinite.
/// The interval `(v, v)` is the canonical empty interval; half-open
/// intervals with equal finite ends (`[v, v)`, `(v, v]`) are normalized to
/// the singleton `[v, v]` on construction.
///
/// # Invariants
///
/// `lower` is a lower limit, `upper` is an upper limit, and
/// `lower <= upper` under limit ordering.
///
/// # Examples
///
/// ```rust
/// # use tempus_core::math::interval::Interval;
///
/// let a = Interval::closed(0, 10);
/// let b = Interval::open(5, 15);
/// assert!(a.intersects(&b));
/// assert_eq!(a.intersect(&b), Interval::over(Some(5), false, Some(10), true));
/// ```
#[derive(Clone, Copy)]
pub struct Interval<T> {
    lower: Limit<T>,
    upper: Limit<T>,
}

impl<T> Interval<T>
where
    T: Ord,
{
    /// Creates an interval from two limits.
    ///
    /// # Panics
    ///
    /// Panics if the limits sit on the wrong sides or if `lower > upper`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempus_core::math::{interval::Interval, limit::Limit};
    ///
    /// let iv = Interval::new(Limit::lower(1, true), Limit::unbounded_upper());
    /// assert!(iv.includes(&1_000_000));
    /// ```
    #[inline]
    pub fn new(lower: Limit<T>, upper: Limit<T>) -> Self {
        match Self::try_new(lower, upper) {
            Ok(iv) => iv,
            Err(e) => panic!("{}", e),
        }
    }

    /// Creates an interval from two limits if they describe a valid range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempus_core::math::{error::IntervalError, interval::Interval, limit::Limit};
    ///
    /// assert!(Interval::try_new(Limit::lower(1, true), Limit::upper(2, true)).is_ok());
    /// assert_eq!(
    ///     Interval::try_new(Limit::lower(3, true), Limit::upper(2, true)),
    ///     Err(IntervalError::InvalidRange)
    /// );
    /// ```
    pub fn try_new(lower: Limit<T>, upper: Limit<T>) -> Result<Self, IntervalError> {
        if !lower.is_lower() {
            return Err(IntervalError::MisplacedLimit {
                expected: Side::Lower,
            });
        }
        if !upper.is_upper() {
            return Err(IntervalError::MisplacedLimit {
                expected: Side::Upper,
            });
        }
        if lower > upper {
            return Err(IntervalError::InvalidRange);
        }
        Ok(Self::new_unchecked(lower, upper))
    }

    /// Creates an interval from optional end values, `None` meaning
    /// unbounded on that side.
    ///
    /// # Panics
    ///
    /// Panics if `lower > upper`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempus_core::math::interval::Interval;
    ///
    /// let iv = Interval::over(Some(5), false, Some(5), true);
    /// assert!(iv.is_single_element());
    /// assert_eq!(iv, Interval::closed(5, 5));
    /// ```
    #[inline]
    pub fn over(lower: Option<T>, lower_closed: bool, upper: Option<T>, upper_closed: bool) -> Self {
        Self::new(
            Limit::new(Side::Lower, lower, lower_closed),
            Limit::new(Side::Upper, upper, upper_closed),
        )
    }

    /// Fallible counterpart of [`Interval::over`].
    #[inline]
    pub fn try_over(
        lower: Option<T>,
        lower_closed: bool,
        upper: Option<T>,
        upper_closed: bool,
    ) -> Result<Self, IntervalError> {
        Self::try_new(
            Limit::new(Side::Lower, lower, lower_closed),
            Limit::new(Side::Upper, upper, upper_closed),
        )
    }

    /// Creates the closed interval `[lower, upper]`.
    ///
    /// # Panics
    ///
    /// Panics if `lower > upper`.
    #[inline]
    pub fn closed(lower: T, upper: T) -> Self {
        Self::over(Some(lower), true, Some(upper), true)
    }

    /// Creates the open interval `(lower, upper)`.
    ///
    /// # Panics
    ///
    /// Panics if `lower > upper`.
    #[inline]
    pub fn open(lower: T, upper: T) -> Self {
        Self::over(Some(lower), false, Some(upper), false)
    }

    /// Creates `[lower, ∞)`.
    #[inline]
    pub fn and_more(lower: T) -> Self {
        Self::new_unchecked(Limit::lower(lower, true), Limit::unbounded_upper())
    }

    /// Creates `(lower, ∞)`.
    #[inline]
    pub fn more_than(lower: T) -> Self {
        Self::new_unchecked(Limit::lower(lower, false), Limit::unbounded_upper())
    }

    /// Creates `(-∞, upper]`.
    #[inline]
    pub fn up_to(upper: T) -> Self {
        Self::new_unchecked(Limit::unbounded_lower(), Limit::upper(upper, true))
    }

    /// Creates `(-∞, upper)`.
    #[inline]
    pub fn under(upper: T) -> Self {
        Self::new_unchecked(Limit::unbounded_lower(), Limit::upper(upper, false))
    }

    /// Creates the interval spanning every value.
    #[inline]
    pub fn all() -> Self {
        Self::new_unchecked(Limit::unbounded_lower(), Limit::unbounded_upper())
    }

    /// Creates an interval without validating the limit order in release
    /// builds. Singleton normalization is still applied.
    pub(crate) fn new_unchecked(lower: Limit<T>, upper: Limit<T>) -> Self {
        debug_assert!(
            lower.is_lower() && upper.is_upper() && lower <= upper,
            "Invalid interval: limits are misplaced or out of order"
        );
        let half_open_point = matches!(
            (lower.value(), upper.value()),
            (Some(l), Some(u)) if l == u && lower.is_closed() != upper.is_closed()
        );
        if half_open_point {
            return Self {
                lower: Limit::new(Side::Lower, lower.into_value(), true),
                upper: Limit::new(Side::Upper, upper.into_value(), true),
            };
        }
        Self { lower, upper }
    }

    /// Returns the lower limit.
    #[inline]
    pub fn lower(&self) -> &Limit<T> {
        &self.lower
    }

    /// Returns the upper limit.
    #[inline]
    pub fn upper(&self) -> &Limit<T> {
        &self.upper
    }

    /// Returns the lower end value, or `None` if unbounded below.
    ///
    /// For an empty interval this is the anchor it was created with, which
    /// carries no meaning beyond fixing the position.
    #[inline]
    pub fn lower_limit(&self) -> Option<&T> {
        self.lower.value()
    }

    /// Returns the upper end value, or `None` if unbounded above.
    #[inline]
    pub fn upper_limit(&self) -> Option<&T> {
        self.upper.value()
    }

    /// Returns `true` if the interval is bounded below.
    #[inline]
    pub fn has_lower_limit(&self) -> bool {
        self.lower.is_finite()
    }

    /// Returns `true` if the interval is bounded above.
    #[inline]
    pub fn has_upper_limit(&self) -> bool {
        self.upper.is_finite()
    }

    /// Returns `true` if the lower end value belongs to the interval.
    #[inline]
    pub fn includes_lower_limit(&self) -> bool {
        self.lower.is_closed()
    }

    /// Returns `true` if the upper end value belongs to the interval.
    #[inline]
    pub fn includes_upper_limit(&self) -> bool {
        self.upper.is_closed()
    }

    /// Returns `true` if both ends are included. Unbounded ends never are.
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.lower.is_closed() && self.upper.is_closed()
    }

    /// Returns `true` if neither end is included.
    #[inline]
    pub fn is_open(&self) -> bool {
        self.lower.is_open() && self.upper.is_open()
    }

    /// Returns `true` if exactly one end is included.
    #[inline]
    pub fn is_half_open(&self) -> bool {
        self.lower.is_closed() != self.upper.is_closed()
    }

    /// Returns `true` if the interval contains no points.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempus_core::math::interval::Interval;
    ///
    /// assert!(Interval::open(5, 5).is_empty());
    /// assert!(!Interval::closed(5, 5).is_empty());
    /// assert!(!Interval::open(5, 6).is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.has_equal_finite_ends() && self.is_open()
    }

    /// Returns `true` if the interval contains exactly one point.
    #[inline]
    pub fn is_single_element(&self) -> bool {
        self.has_equal_finite_ends() && self.is_closed()
    }

    #[inline]
    fn has_equal_finite_ends(&self) -> bool {
        matches!((self.lower.value(), self.upper.value()), (Some(l), Some(u)) if l == u)
    }

    /// Returns `true` if `value` lies within the interval.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempus_core::math::interval::Interval;
    ///
    /// let iv = Interval::over(Some(0), true, Some(10), false);
    /// assert!(iv.includes(&0));
    /// assert!(iv.includes(&9));
    /// assert!(!iv.includes(&10));
    /// assert!(Interval::up_to(3).includes(&i32::MIN));
    /// ```
    #[inline]
    pub fn includes(&self, value: &T) -> bool {
        !self.lower.excludes(value) && !self.upper.excludes(value)
    }

    /// Returns `true` if every point of the interval lies below `value`.
    #[inline]
    pub fn is_before(&self, value: &T) -> bool {
        self.upper.excludes(value)
    }

    /// Returns `true` if every point of the interval lies above `value`.
    #[inline]
    pub fn is_after(&self, value: &T) -> bool {
        self.lower.excludes(value)
    }

    #[inline]
    fn greater_of_lower_limits<'a>(&'a self, other: &'a Self) -> &'a Limit<T> {
        max(&self.lower, &other.lower)
    }

    #[inline]
    fn lesser_of_upper_limits<'a>(&'a self, other: &'a Self) -> &'a Limit<T> {
        min(&self.upper, &other.upper)
    }

    /// Returns `true` if the two intervals share at least one point.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempus_core::math::interval::Interval;
    ///
    /// let a = Interval::over(Some(0), true, Some(5), false);
    /// assert!(!a.intersects(&Interval::closed(5, 10)));
    /// assert!(Interval::closed(0, 5).intersects(&Interval::closed(5, 10)));
    /// ```
    pub fn intersects(&self, other: &Self) -> bool {
        let lower = self.greater_of_lower_limits(other);
        let upper = self.lesser_of_upper_limits(other);
        match (lower.value(), upper.value()) {
            (Some(l), Some(u)) => match l.cmp(u) {
                Ordering::Less => true,
                Ordering::Greater => false,
                Ordering::Equal => self.includes(l) && other.includes(l),
            },
            // Both intervals are unbounded on at least one common side, so
            // that side cannot separate them.
            _ => true,
        }
    }

    /// Returns `true` if every point of `other` is a point of `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempus_core::math::interval::Interval;
    ///
    /// assert!(Interval::closed(0, 10).covers(&Interval::open(0, 10)));
    /// assert!(!Interval::open(0, 10).covers(&Interval::closed(0, 10)));
    /// ```
    pub fn covers(&self, other: &Self) -> bool {
        let lower_pass = match other.lower.value() {
            None => self.lower.is_infinite(),
            Some(v) => {
                self.includes(v) || (self.lower.value() == Some(v) && other.lower.is_open())
            }
        };
        let upper_pass = match other.upper.value() {
            None => self.upper.is_infinite(),
            Some(v) => {
                self.includes(v) || (self.upper.value() == Some(v) && other.upper.is_open())
            }
        };
        lower_pass && upper_pass
    }
}

impl<T> Interval<T>
where
    T: Ord + Clone,
{
    /// Creates the singleton interval `[value, value]`.
    #[inline]
    pub fn single_element(value: T) -> Self {
        Self::closed(value.clone(), value)
    }

    /// Creates the empty interval `(anchor, anchor)`.
    ///
    /// The anchor only fixes the position reported by the limit accessors.
    #[inline]
    pub fn empty(anchor: T) -> Self {
        Self::open(anchor.clone(), anchor)
    }

    /// Calculates the intersection of two intervals.
    ///
    /// Each end of the result is closed only if both operands include it.
    /// Disjoint operands produce an empty interval.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempus_core::math::interval::Interval;
    ///
    /// let a = Interval::closed(0, 10);
    /// let b = Interval::over(Some(5), true, Some(15), false);
    /// assert_eq!(a.intersect(&b), Interval::closed(5, 10));
    /// assert!(a.intersect(&Interval::closed(20, 30)).is_empty());
    /// ```
    pub fn intersect(&self, other: &Self) -> Self {
        let lower = self.greater_of_lower_limits(other);
        let upper = self.lesser_of_upper_limits(other);

        if let (Some(l), Some(u)) = (lower.value(), upper.value()) {
            if l > u {
                return Self::empty(l.clone());
            }
        }

        let lower_closed = lower
            .value()
            .is_some_and(|v| self.includes(v) && other.includes(v));
        let upper_closed = upper
            .value()
            .is_some_and(|v| self.includes(v) && other.includes(v));

        Self::new_unchecked(
            Limit::new(Side::Lower, lower.value().cloned(), lower_closed),
            Limit::new(Side::Upper, upper.value().cloned(), upper_closed),
        )
    }

    /// Returns the points strictly between two intervals.
    ///
    /// Returns `None` if the intervals intersect. Intervals that touch
    /// without sharing a point yield an empty gap.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempus_core::math::interval::Interval;
    ///
    /// let a = Interval::over(Some(3), true, Some(5), false);
    /// let b = Interval::over(Some(10), true, Some(20), false);
    /// assert_eq!(a.gap(&b), Some(Interval::over(Some(5), true, Some(10), false)));
    /// assert_eq!(b.gap(&a), a.gap(&b));
    /// assert_eq!(a.gap(&Interval::closed(4, 6)), None);
    /// ```
    pub fn gap(&self, other: &Self) -> Option<Self> {
        if self.intersects(other) {
            return None;
        }

        // Non-intersecting intervals cannot share an unbounded side, so both
        // values below are finite.
        let lower = self.lesser_of_upper_limits(other).value()?;
        let upper = self.greater_of_lower_limits(other).value()?;

        let lower_closed = !(self.includes(lower) || other.includes(lower));
        let upper_closed = !(self.includes(upper) || other.includes(upper));

        Some(Self::new_unchecked(
            Limit::lower(lower.clone(), lower_closed),
            Limit::upper(upper.clone(), upper_closed),
        ))
    }

    /// Returns the points of `other` that are not points of `self`, as zero,
    /// one or two intervals ordered from low to high.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempus_core::math::interval::Interval;
    ///
    /// let hole = Interval::closed(4, 6);
    /// let base = Interval::closed(0, 10);
    /// let pieces = hole.complement_relative_to(&base);
    /// assert_eq!(pieces.len(), 2);
    /// assert_eq!(pieces[0], Interval::over(Some(0), true, Some(4), false));
    /// assert_eq!(pieces[1], Interval::over(Some(6), false, Some(10), true));
    ///
    /// // Disjoint: `other` is returned unchanged.
    /// let far = Interval::closed(10, 20);
    /// let near = Interval::closed(1, 5);
    /// assert_eq!(far.complement_relative_to(&near).as_slice(), &[near]);
    /// ```
    pub fn complement_relative_to(&self, other: &Self) -> SmallVec<Self, 2> {
        if !self.intersects(other) {
            return smallvec::smallvec![other.clone()];
        }

        let mut result = SmallVec::new();
        if self.lower > other.lower {
            result.push(Self::new_unchecked(
                other.lower.clone(),
                Limit::new(
                    Side::Upper,
                    self.lower.value().cloned(),
                    !self.lower.is_closed(),
                ),
            ));
        }
        if self.upper < other.upper {
            result.push(Self::new_unchecked(
                Limit::new(
                    Side::Lower,
                    self.upper.value().cloned(),
                    !self.upper.is_closed(),
                ),
                other.upper.clone(),
            ));
        }
        result
    }

    /// Returns the smallest interval containing both operands.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempus_core::math::interval::Interval;
    ///
    /// let a = Interval::over(Some(0), false, Some(2), true);
    /// let b = Interval::closed(5, 8);
    /// assert_eq!(a.span(&b), Interval::over(Some(0), false, Some(8), true));
    /// ```
    pub fn span(&self, other: &Self) -> Self {
        Self::new_unchecked(
            min(&self.lower, &other.lower).clone(),
            max(&self.upper, &other.upper).clone(),
        )
    }

    /// Iterates the included points from the lower end upward, advancing
    /// by `increment`.
    ///
    /// The iterator ends once a point leaves the interval or the next step
    /// overflows; an interval without an upper limit yields points until
    /// overflow.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::Unbounded`] if there is no lower limit and
    /// [`IntervalError::NonAdvancingStep`] if `increment` does not move a
    /// point upward.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempus_core::math::interval::Interval;
    ///
    /// let iv = Interval::over(Some(0), false, Some(10), true);
    /// let points: Vec<_> = iv.step_by(3).unwrap().collect();
    /// assert_eq!(points, vec![3, 6, 9]);
    /// ```
    pub fn step_by<D>(&self, increment: D) -> Result<Steps<T, D>, IntervalError>
    where
        T: Offset<D>,
    {
        let start = self
            .lower
            .value()
            .ok_or(IntervalError::Unbounded(Side::Lower))?;
        if let Some(next) = start.checked_forward(&increment) {
            if next <= *start {
                return Err(IntervalError::NonAdvancingStep);
            }
        }
        let first = if self.lower.is_closed() {
            Some(start.clone())
        } else {
            start.checked_forward(&increment)
        };
        Ok(Steps {
            next: first,
            end: self.upper.clone(),
            increment,
        })
    }

    /// Iterates the included points from the upper end downward, moving
    /// back by `increment`.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::Unbounded`] if there is no upper limit and
    /// [`IntervalError::NonAdvancingStep`] if `increment` does not move a
    /// point downward.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempus_core::math::{error::IntervalError, interval::Interval, limit::Side};
    ///
    /// let iv = Interval::closed(1, 4);
    /// let points: Vec<_> = iv.step_by_rev(1).unwrap().collect();
    /// assert_eq!(points, vec![4, 3, 2, 1]);
    ///
    /// let err = Interval::and_more(1).step_by_rev(1).unwrap_err();
    /// assert_eq!(err, IntervalError::Unbounded(Side::Upper));
    /// ```
    pub fn step_by_rev<D>(&self, increment: D) -> Result<Steps<T, D>, IntervalError>
    where
        T: Offset<D>,
    {
        let start = self
            .upper
            .value()
            .ok_or(IntervalError::Unbounded(Side::Upper))?;
        if let Some(next) = start.checked_backward(&increment) {
            if next >= *start {
                return Err(IntervalError::NonAdvancingStep);
            }
        }
        let first = if self.upper.is_closed() {
            Some(start.clone())
        } else {
            start.checked_backward(&increment)
        };
        Ok(Steps {
            next: first,
            end: self.lower.clone(),
            increment,
        })
    }
}

/// An iterator over the points of an [`Interval`] taken at a fixed
/// increment. Created by [`Interval::step_by`] and [`Interval::step_by_rev`].
#[derive(Debug, Clone)]
pub struct Steps<T, D> {
    next: Option<T>,
    end: Limit<T>,
    increment: D,
}

impl<T, D> Iterator for Steps<T, D>
where
    T: Ord + Offset<D>,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        if self.end.excludes(&current) {
            return None;
        }
        self.next = match self.end.side() {
            Side::Upper => current.checked_forward(&self.increment),
            Side::Lower => current.checked_backward(&self.increment),
        };
        Some(current)
    }
}

impl<T, D> FusedIterator for Steps<T, D> where T: Ord + Offset<D> {}

impl<T> PartialEq for Interval<T>
where
    T: Ord,
{
    fn eq(&self, other: &Self) -> bool {
        match (self.is_empty(), other.is_empty()) {
            (true, true) => return true,
            (true, false) | (false, true) => return false,
            (false, false) => {}
        }
        match (self.is_single_element(), other.is_single_element()) {
            (true, true) => self.lower_limit() == other.lower_limit(),
            (true, false) | (false, true) => false,
            (false, false) => self.lower == other.lower && self.upper == other.upper,
        }
    }
}

impl<T> Eq for Interval<T> where T: Ord {}

impl<T> Hash for Interval<T>
where
    T: Ord + Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        // All empty intervals are equal regardless of their anchor.
        if self.is_empty() {
            state.write_u8(0);
            return;
        }
        state.write_u8(1);
        self.lower.hash(state);
        self.upper.hash(state);
    }
}

impl<T> std::fmt::Debug for Interval<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Interval")
            .field("lower", &self.lower)
            .field("upper", &self.upper)
            .finish()
    }
}

impl<T> std::fmt::Display for Interval<T>
where
    T: Ord + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "{{}}");
        }
        if self.is_single_element() {
            if let Some(v) = self.lower_limit() {
                return write!(f, "{{{}}}", v);
            }
        }
        write!(f, "{}", if self.lower.is_closed() { "[" } else { "(" })?;
        match self.lower_limit() {
            Some(v) => write!(f, "{}", v)?,
            None => write!(f, "Infinity")?,
        }
        write!(f, ", ")?;
        match self.upper_limit() {
            Some(v) => write!(f, "{}", v)?,
            None => write!(f, "Infinity")?,
        }
        write!(f, "{}", if self.upper.is_closed() { "]" } else { ")" })
    }
}

impl<T> RangeBounds<T> for Interval<T> {
    fn start_bound(&self) -> Bound<&T> {
        match self.lower.value() {
            None => Bound::Unbounded,
            Some(v) if self.lower.is_closed() => Bound::Included(v),
            Some(v) => Bound::Excluded(v),
        }
    }

    fn end_bound(&self) -> Bound<&T> {
        match self.upper.value() {
            None => Bound::Unbounded,
            Some(v) if self.upper.is_closed() => Bound::Included(v),
            Some(v) => Bound::Excluded(v),
        }
    }
}

/// A range holding no values (`v..v`, `5..3`) becomes an empty interval
/// anchored at its start.
impl<T> From<std::ops::Range<T>> for Interval<T>
where
    T: Ord + Clone,
{
    #[inline]
    fn from(range: std::ops::Range<T>) -> Self {
        if range.start >= range.end {
            return Self::empty(range.start);
        }
        Self::over(Some(range.start), true, Some(range.end), false)
    }
}

/// A reversed range (`5..=3`) becomes an empty interval anchored at its
/// start.
impl<T> From<std::ops::RangeInclusive<T>> for Interval<T>
where
    T: Ord + Clone,
{
    #[inline]
    fn from(range: std::ops::RangeInclusive<T>) -> Self {
        let (start, end) = range.into_inner();
        if start > end {
            return Self::empty(start);
        }
        Self::closed(start, end)
    }
}

impl<T> From<std::ops::RangeFrom<T>> for Interval<T>
where
    T: Ord,
{
    #[inline]
    fn from(range: std::ops::RangeFrom<T>) -> Self {
        Self::and_more(range.start)
    }
}

impl<T> From<std::ops::RangeTo<T>> for Interval<T>
where
    T: Ord,
{
    #[inline]
    fn from(range: std::ops::RangeTo<T>) -> Self {
        Self::under(range.end)
    }
}

impl<T> From<std::ops::RangeToInclusive<T>> for Interval<T>
where
    T: Ord,
{
    #[inline]
    fn from(range: std::ops::RangeToInclusive<T>) -> Self {
        Self::up_to(range.end)
    }
}

impl<T> From<std::ops::RangeFull> for Interval<T>
where
    T: Ord,
{
    #[inline]
    fn from(_: std::ops::RangeFull) -> Self {
        Self::all()
    }
}
