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

//! # Interval Algebra
//!
//! Generic interval primitives over any totally ordered endpoint type.
//!
//! ## Submodules
//!
//! - `limit`: One boundary of an interval (`Limit<T>`), open, closed or
//!   infinite, with a total order that places each boundary where it reaches.
//! - `interval`: `Interval<T>` with validated construction, membership,
//!   overlap and covering predicates, set algebra (intersection, gap,
//!   complement relative to another interval, span), discrete stepping, and
//!   conversions from `std::ops` ranges.
//! - `kind`: The `IntervalType` trait, which lets wrapper types reuse the
//!   algebra while every result is rebuilt as the wrapper.
//! - `error`: `IntervalError`, the error type for construction and for
//!   queries that need bounded or non-empty input.
//!
//! Refer to each submodule for detailed APIs and examples.

pub mod error;
pub mod interval;
pub mod kind;
pub mod limit;
