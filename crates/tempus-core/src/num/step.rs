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

//! # Stepping by a Domain Increment
//!
//! Endpoint types that can be moved by some increment, such as integers by
//! integers or calendar dates by a day count. Used to walk the points of an
//! interval; see `Interval::step_by`.
//!
//! ```rust
//! use tempus_core::num::step::Offset;
//!
//! assert_eq!(5i32.checked_forward(&3), Some(8));
//! assert_eq!(5i32.checked_backward(&3), Some(2));
//! assert_eq!(250u8.checked_forward(&10), None);
//! ```

use num_traits::{CheckedAdd, CheckedSub};

/// A value that can be moved forward or backward by an increment of type `D`.
///
/// Both methods return `None` when the result is not representable.
///
/// # Examples
///
/// ```rust
/// # use tempus_core::num::step::Offset;
///
/// #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
/// struct Day(u32);
///
/// struct Days(u32);
///
/// impl Offset<Days> for Day {
///     fn checked_forward(&self, by: &Days) -> Option<Self> {
///         self.0.checked_add(by.0).map(Day)
///     }
///     fn checked_backward(&self, by: &Days) -> Option<Self> {
///         self.0.checked_sub(by.0).map(Day)
///     }
/// }
///
/// assert_eq!(Day(3).checked_forward(&Days(7)), Some(Day(10)));
/// assert_eq!(Day(3).checked_backward(&Days(7)), None);
/// ```
pub trait Offset<D>: Sized {
    /// Moves the value forward by `increment`.
    fn checked_forward(&self, increment: &D) -> Option<Self>;

    /// Moves the value backward by `increment`.
    fn checked_backward(&self, increment: &D) -> Option<Self>;
}

impl<T> Offset<T> for T
where
    T: CheckedAdd + CheckedSub,
{
    #[inline]
    fn checked_forward(&self, increment: &T) -> Option<Self> {
        self.checked_add(increment)
    }

    #[inline]
    fn checked_backward(&self, increment: &T) -> Option<Self> {
        self.checked_sub(increment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_offsets() {
        assert_eq!((-3i64).checked_forward(&5), Some(2));
        assert_eq!((-3i64).checked_backward(&5), Some(-8));
        assert_eq!(i8::MAX.checked_forward(&1), None);
        assert_eq!(i8::MIN.checked_backward(&1), None);
    }

    #[test]
    fn test_unsigned_offsets() {
        assert_eq!(0u16.checked_backward(&1), None);
        assert_eq!(u16::MAX.checked_backward(&1), Some(u16::MAX - 1));
        assert_eq!(usize::MAX.checked_forward(&1), None);
    }
}
