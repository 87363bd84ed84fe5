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

//! # Interval Types
//!
//! Domain code often wraps `Interval<T>` in its own types (a calendar
//! interval, a time-of-day window) and wants every algebra result to come
//! back as that same wrapper. `IntervalType` captures this: an implementor
//! exposes its underlying interval and knows how to rebuild itself around a
//! new one. The provided methods run the algebra on the underlying interval
//! and pass each result through `new_of_same_type`.
//!
//! ## Usage
//!
//! ```rust
//! use tempus_core::math::{interval::Interval, kind::IntervalType};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Shift {
//!     crew: &'static str,
//!     hours: Interval<u32>,
//! }
//!
//! impl IntervalType for Shift {
//!     type Point = u32;
//!
//!     fn as_interval(&self) -> &Interval<u32> {
//!         &self.hours
//!     }
//!
//!     fn new_of_same_type(&self, interval: Interval<u32>) -> Self {
//!         Shift { crew: self.crew, hours: interval }
//!     }
//! }
//!
//! let day = Shift { crew: "A", hours: Interval::closed(8, 16) };
//! let late = Shift { crew: "B", hours: Interval::closed(12, 20) };
//! let overlap: Shift = day.intersect(&late);
//! assert_eq!(overlap.crew, "A");
//! assert_eq!(overlap.hours, Interval::closed(12, 16));
//! ```

use crate::math::interval::Interval;
use smallvec::SmallVec;

/// An interval-like type that can rebuild itself around a new interval.
///
/// Every algebra result produced through this trait is created by
/// [`IntervalType::new_of_same_type`] on one of the operands, so the
/// concrete type survives intersection, gap, complement, and span.
pub trait IntervalType: Clone {
    /// The endpoint type.
    type Point: Ord + Clone;

    /// Returns the underlying interval.
    fn as_interval(&self) -> &Interval<Self::Point>;

    /// Builds a value of the implementing type around `interval`.
    fn new_of_same_type(&self, interval: Interval<Self::Point>) -> Self;

    #[inline]
    fn includes(&self, value: &Self::Point) -> bool {
        self.as_interval().includes(value)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.as_interval().is_empty()
    }

    #[inline]
    fn is_single_element(&self) -> bool {
        self.as_interval().is_single_element()
    }

    #[inline]
    fn intersects(&self, other: &Self) -> bool {
        self.as_interval().intersects(other.as_interval())
    }

    #[inline]
    fn covers(&self, other: &Self) -> bool {
        self.as_interval().covers(other.as_interval())
    }

    /// See [`Interval::intersect`].
    #[inline]
    fn intersect(&self, other: &Self) -> Self {
        self.new_of_same_type(self.as_interval().intersect(other.as_interval()))
    }

    /// See [`Interval::gap`].
    #[inline]
    fn gap(&self, other: &Self) -> Option<Self> {
        self.as_interval()
            .gap(other.as_interval())
            .map(|iv| self.new_of_same_type(iv))
    }

    /// See [`Interval::complement_relative_to`]. When the operands are
    /// disjoint, `other` itself is returned.
    fn complement_relative_to(&self, other: &Self) -> SmallVec<Self, 2> {
        if !self.intersects(other) {
            return smallvec::smallvec![other.clone()];
        }
        self.as_interval()
            .complement_relative_to(other.as_interval())
            .into_iter()
            .map(|iv| other.new_of_same_type(iv))
            .collect()
    }

    /// See [`Interval::span`].
    #[inline]
    fn span(&self, other: &Self) -> Self {
        self.new_of_same_type(self.as_interval().span(other.as_interval()))
    }
}

impl<T> IntervalType for Interval<T>
where
    T: Ord + Clone,
{
    type Point = T;

    #[inline]
    fn as_interval(&self) -> &Interval<T> {
        self
    }

    #[inline]
    fn new_of_same_type(&self, interval: Interval<T>) -> Self {
        interval
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Tagged {
        tag: u8,
        interval: Interval<i32>,
    }

    impl IntervalType for Tagged {
        type Point = i32;

        fn as_interval(&self) -> &Interval<i32> {
            &self.interval
        }

        fn new_of_same_type(&self, interval: Interval<i32>) -> Self {
            Tagged {
                tag: self.tag,
                interval,
            }
        }
    }

    fn tagged(tag: u8, interval: Interval<i32>) -> Tagged {
        Tagged { tag, interval }
    }

    #[test]
    fn test_intersect_keeps_receiver_type() {
        let a = tagged(1, Interval::closed(0, 10));
        let b = tagged(2, Interval::closed(5, 15));
        let c = a.intersect(&b);
        assert_eq!(c.tag, 1);
        assert_eq!(c.interval, Interval::closed(5, 10));

        let empty = a.intersect(&tagged(2, Interval::closed(20, 30)));
        assert_eq!(empty.tag, 1);
        assert!(IntervalType::is_empty(&empty));
    }

    #[test]
    fn test_gap_and_span() {
        let a = tagged(3, Interval::closed(0, 2));
        let b = tagged(4, Interval::closed(6, 8));
        let gap = a.gap(&b).unwrap();
        assert_eq!(gap.tag, 3);
        assert_eq!(gap.interval, Interval::open(2, 6));
        assert!(a.gap(&a).is_none());

        let span = b.span(&a);
        assert_eq!(span.tag, 4);
        assert_eq!(span.interval, Interval::closed(0, 8));
    }

    #[test]
    fn test_complement_pieces_take_other_type() {
        let hole = tagged(5, Interval::closed(4, 6));
        let base = tagged(6, Interval::closed(0, 10));
        let pieces = hole.complement_relative_to(&base);
        assert_eq!(pieces.len(), 2);
        assert!(pieces.iter().all(|p| p.tag == 6));
        assert_eq!(pieces[0].interval, Interval::over(Some(0), true, Some(4), false));
        assert_eq!(pieces[1].interval, Interval::over(Some(6), false, Some(10), true));

        let far = tagged(7, Interval::closed(20, 30));
        assert_eq!(far.complement_relative_to(&base).as_slice(), &[base.clone()]);
    }

    #[test]
    fn test_predicates_delegate() {
        let a = tagged(1, Interval::closed(0, 10));
        let b = tagged(1, Interval::open(0, 10));
        assert!(a.covers(&b));
        assert!(!b.covers(&a));
        assert!(a.intersects(&b));
        assert!(IntervalType::includes(&a, &0));
        assert!(!IntervalType::includes(&b, &0));
        assert!(IntervalType::is_single_element(&tagged(0, Interval::closed(1, 1))));
    }

    #[test]
    fn test_plain_interval_is_its_own_type() {
        fn via_trait<I: IntervalType>(a: &I, b: &I) -> I {
            a.intersect(b)
        }
        let r = via_trait(&Interval::closed(0, 4), &Interval::closed(2, 6));
        assert_eq!(r, Interval::closed(2, 4));
    }
}
