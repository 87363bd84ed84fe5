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

//! # Tempus Collections
//!
//! Collections built on the interval algebra of `tempus-core`.
//!
//! ## Modules
//!
//! - `sequence`: `IntervalSequence`, intervals kept in comparator order,
//!   with the extent, the gaps and the intersections of neighbours.
//! - `map`: The `IntervalMap` trait and `LinearIntervalMap`, which maps
//!   disjoint key intervals to values and splits stored regions when a new
//!   key overwrites part of them.
//!
//! Both are generic over [`IntervalType`](tempus_core::math::kind::IntervalType),
//! so derived intervals keep the caller's wrapper type.

pub mod map;
pub mod sequence;
