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

//! # Interval Sequences
//!
//! `IntervalSequence` is a mutable collection of intervals kept in the order
//! of a configurable comparator. It does not require its elements to be
//! disjoint; duplicates and overlaps are kept as given. On top of the
//! sorted order it derives:
//!
//! - the `extent`, the smallest interval enclosing every element;
//! - the `gaps` between neighbouring elements;
//! - the `intersections` of neighbouring elements.
//!
//! Gaps and intersections only look at adjacent pairs in sorted order.
//!
//! ## Ordering
//!
//! The default comparator, [`LowerEndFirst`], sorts by ascending lower limit
//! and breaks ties by descending upper limit, so a wider interval precedes
//! a narrower one starting at the same point. [`UpperEndFirst`] sorts by the
//! upper limit first. Any `Fn(&I, &I) -> Ordering` closure works as well.
//!
//! ```rust
//! use tempus_collections::sequence::IntervalSequence;
//! use tempus_core::math::interval::Interval;
//!
//! let mut seq = IntervalSequence::new();
//! seq.add(Interval::closed(4, 5));
//! seq.add(Interval::closed(1, 2));
//! seq.add(Interval::closed(8, 9));
//!
//! assert_eq!(seq.extent().unwrap(), Interval::closed(1, 9));
//! let gaps: Vec<_> = seq.gaps().into_iter().collect();
//! assert_eq!(gaps, vec![Interval::open(2, 4), Interval::open(5, 8)]);
//! ```

use std::cmp::Ordering;
use tempus_core::math::{error::IntervalError, kind::IntervalType};

/// A strategy for ordering the elements of an [`IntervalSequence`].
pub trait IntervalComparator<I> {
    fn compare(&self, a: &I, b: &I) -> Ordering;
}

impl<I, F> IntervalComparator<I> for F
where
    F: Fn(&I, &I) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &I, b: &I) -> Ordering {
        self(a, b)
    }
}

#[inline]
fn directed(ordering: Ordering, inverse: bool) -> Ordering {
    if inverse { ordering.reverse() } else { ordering }
}

/// Orders intervals by lower limit, then by upper limit.
///
/// The default sorts lower limits ascending and upper limits descending.
///
/// # Examples
///
/// ```rust
/// # use tempus_collections::sequence::{IntervalComparator, LowerEndFirst};
/// # use tempus_core::math::interval::Interval;
/// use std::cmp::Ordering;
///
/// let cmp = LowerEndFirst::new();
/// let wide = Interval::closed(1, 9);
/// let narrow = Interval::closed(1, 3);
/// assert_eq!(cmp.compare(&wide, &narrow), Ordering::Less);
///
/// let ascending = LowerEndFirst::new().inverse_upper(false);
/// assert_eq!(ascending.compare(&wide, &narrow), Ordering::Greater);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LowerEndFirst {
    inverse_lower: bool,
    inverse_upper: bool,
}

impl LowerEndFirst {
    #[inline]
    pub const fn new() -> Self {
        Self {
            inverse_lower: false,
            inverse_upper: true,
        }
    }

    /// Sorts lower limits descending when `inverse` is `true`.
    #[inline]
    pub const fn inverse_lower(mut self, inverse: bool) -> Self {
        self.inverse_lower = inverse;
        self
    }

    /// Sorts upper limits descending when `inverse` is `true`.
    #[inline]
    pub const fn inverse_upper(mut self, inverse: bool) -> Self {
        self.inverse_upper = inverse;
        self
    }
}

impl Default for LowerEndFirst {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<I> IntervalComparator<I> for LowerEndFirst
where
    I: IntervalType,
{
    fn compare(&self, a: &I, b: &I) -> Ordering {
        let (a, b) = (a.as_interval(), b.as_interval());
        directed(a.lower().cmp(b.lower()), self.inverse_lower)
            .then_with(|| directed(a.upper().cmp(b.upper()), self.inverse_upper))
    }
}

/// Orders intervals by upper limit, then by lower limit.
///
/// The default sorts both limits ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct UpperEndFirst {
    inverse_upper: bool,
    inverse_lower: bool,
}

impl UpperEndFirst {
    #[inline]
    pub const fn new() -> Self {
        Self {
            inverse_upper: false,
            inverse_lower: false,
        }
    }

    #[inline]
    pub const fn inverse_upper(mut self, inverse: bool) -> Self {
        self.inverse_upper = inverse;
        self
    }

    #[inline]
    pub const fn inverse_lower(mut self, inverse: bool) -> Self {
        self.inverse_lower = inverse;
        self
    }
}

impl<I> IntervalComparator<I> for UpperEndFirst
where
    I: IntervalType,
{
    fn compare(&self, a: &I, b: &I) -> Ordering {
        let (a, b) = (a.as_interval(), b.as_interval());
        directed(a.upper().cmp(b.upper()), self.inverse_upper)
            .then_with(|| directed(a.lower().cmp(b.lower()), self.inverse_lower))
    }
}

/// A sorted, mutable collection of intervals.
///
/// # Invariants
///
/// `intervals` is sorted by `comparator`; elements that compare equal keep
/// their insertion order.
#[derive(Debug, Clone)]
pub struct IntervalSequence<I, C = LowerEndFirst> {
    intervals: Vec<I>,
    comparator: C,
}

impl<I> IntervalSequence<I, LowerEndFirst>
where
    I: IntervalType,
{
    /// Creates an empty sequence using the default [`LowerEndFirst`] order.
    #[inline]
    pub fn new() -> Self {
        Self::with_comparator(LowerEndFirst::new())
    }
}

impl<I> Default for IntervalSequence<I, LowerEndFirst>
where
    I: IntervalType,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<I, C> IntervalSequence<I, C>
where
    I: IntervalType,
    C: IntervalComparator<I>,
{
    /// Creates an empty sequence ordered by `comparator`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempus_collections::sequence::IntervalSequence;
    /// # use tempus_core::math::interval::Interval;
    ///
    /// let mut seq = IntervalSequence::with_comparator(|a: &Interval<i32>, b: &Interval<i32>| {
    ///     b.lower().cmp(a.lower())
    /// });
    /// seq.add(Interval::closed(1, 2));
    /// seq.add(Interval::closed(5, 6));
    /// assert_eq!(seq.first(), Some(&Interval::closed(5, 6)));
    /// ```
    #[inline]
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            intervals: Vec::new(),
            comparator,
        }
    }

    /// Returns the comparator that orders the elements.
    #[inline]
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Inserts `interval` at its sorted position, after any elements that
    /// compare equal to it.
    pub fn add(&mut self, interval: I) {
        let at = self
            .intervals
            .partition_point(|e| self.comparator.compare(e, &interval) != Ordering::Greater);
        self.intervals.insert(at, interval);
        log::trace!(
            "interval sequence: inserted at position {} of {}",
            at,
            self.intervals.len()
        );
    }

    #[inline]
    pub fn clear(&mut self) {
        self.intervals.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    #[inline]
    pub fn first(&self) -> Option<&I> {
        self.intervals.first()
    }

    #[inline]
    pub fn last(&self) -> Option<&I> {
        self.intervals.last()
    }

    /// Returns the elements in sorted order.
    #[inline]
    pub fn as_slice(&self) -> &[I] {
        &self.intervals
    }

    /// Iterates the elements in sorted order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, I> {
        self.intervals.iter()
    }

    /// Returns the smallest interval enclosing every element, built as the
    /// type of the first element.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::EmptySequence`] if the sequence is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempus_collections::sequence::IntervalSequence;
    /// # use tempus_core::math::{error::IntervalError, interval::Interval};
    ///
    /// let mut seq = IntervalSequence::new();
    /// assert_eq!(seq.extent(), Err(IntervalError::EmptySequence));
    /// seq.add(Interval::closed(2, 3));
    /// seq.add(Interval::closed(-5, -2));
    /// seq.add(Interval::closed(10, 10));
    /// assert_eq!(seq.extent(), Ok(Interval::closed(-5, 10)));
    /// ```
    pub fn extent(&self) -> Result<I, IntervalError> {
        let (first, rest) = self
            .intervals
            .split_first()
            .ok_or(IntervalError::EmptySequence)?;
        Ok(rest.iter().fold(first.clone(), |acc, iv| acc.span(iv)))
    }
}

impl<I, C> IntervalSequence<I, C>
where
    I: IntervalType,
    C: IntervalComparator<I> + Clone,
{
    /// Returns the non-empty gaps between neighbouring elements, as a new
    /// sequence with the same comparator.
    ///
    /// Only adjacent elements are compared; a gap between two elements may
    /// still be covered by a third element that sorts elsewhere.
    pub fn gaps(&self) -> Self {
        self.adjacent_pairs(|a, b| a.gap(b).filter(|g| !g.is_empty()))
    }

    /// Returns the non-empty intersections of neighbouring elements, as a
    /// new sequence with the same comparator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempus_collections::sequence::IntervalSequence;
    /// # use tempus_core::math::interval::Interval;
    ///
    /// let seq: IntervalSequence<_> = [Interval::closed(0, 5), Interval::closed(3, 8)]
    ///     .into_iter()
    ///     .collect();
    /// let overlaps: Vec<_> = seq.intersections().into_iter().collect();
    /// assert_eq!(overlaps, vec![Interval::closed(3, 5)]);
    /// ```
    pub fn intersections(&self) -> Self {
        self.adjacent_pairs(|a, b| Some(a.intersect(b)).filter(|iv| !iv.is_empty()))
    }

    fn adjacent_pairs<F>(&self, pair: F) -> Self
    where
        F: Fn(&I, &I) -> Option<I>,
    {
        let mut result = Self::with_comparator(self.comparator().clone());
        if self.intervals.len() < 2 {
            return result;
        }
        for w in self.intervals.windows(2) {
            if let Some(iv) = pair(&w[0], &w[1]) {
                result.add(iv);
            }
        }
        result
    }
}

impl<I, C> Extend<I> for IntervalSequence<I, C>
where
    I: IntervalType,
    C: IntervalComparator<I>,
{
    fn extend<T: IntoIterator<Item = I>>(&mut self, iter: T) {
        for interval in iter {
            self.add(interval);
        }
    }
}

impl<I> FromIterator<I> for IntervalSequence<I, LowerEndFirst>
where
    I: IntervalType,
{
    fn from_iter<T: IntoIterator<Item = I>>(iter: T) -> Self {
        let mut seq = Self::new();
        seq.extend(iter);
        seq
    }
}

impl<I, C> IntoIterator for IntervalSequence<I, C> {
    type Item = I;
    type IntoIter = std::vec::IntoIter<I>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.into_iter()
    }
}

impl<'a, I, C> IntoIterator for &'a IntervalSequence<I, C> {
    type Item = &'a I;
    type IntoIter = std::slice::Iter<'a, I>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}
