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

//! # Tempus Core
//!
//! The interval algebra underneath the Tempus date and time value objects.
//! An interval is a contiguous range over any totally ordered type, with
//! lower and upper ends that are independently open, closed, or unbounded.
//!
//! ## Modules
//!
//! - `math`: `Limit`, `Interval` and the `IntervalType` factory trait:
//!   membership, overlap and covering predicates, intersection, gap,
//!   complement relative to another interval, and stepping over points.
//! - `num`: The `Offset` trait for endpoint types that can be moved by a
//!   domain increment.
//!
//! ## Example
//!
//! ```rust
//! use tempus_core::math::interval::Interval;
//!
//! let workday = Interval::over(Some(9), true, Some(17), false);
//! let meeting = Interval::closed(16, 18);
//! assert!(workday.intersects(&meeting));
//! assert_eq!(workday.intersect(&meeting).to_string(), "[16, 17)");
//! ```
//!
//! Sorted sequences of intervals and interval-keyed maps live in the
//! `tempus-collections` crate.

pub mod math;
pub mod num;
