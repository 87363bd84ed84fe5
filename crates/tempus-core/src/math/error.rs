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

//! Errors raised by interval construction and interval-derived queries.

use crate::math::limit::Side;

/// The error type for interval construction and for queries that need a
/// bounded or non-empty input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntervalError {
    /// The lower limit lies above the upper limit.
    InvalidRange,
    /// A limit was supplied on the wrong side of the interval.
    MisplacedLimit {
        /// The side the limit was expected to bound.
        expected: Side,
    },
    /// An aggregate was requested from a sequence without elements.
    EmptySequence,
    /// The operation needs a finite limit on the given side.
    Unbounded(Side),
    /// The supplied increment does not move a point forward.
    NonAdvancingStep,
}

impl std::fmt::Display for IntervalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRange => write!(
                f,
                "Invalid interval: lower limit must not be greater than upper limit"
            ),
            Self::MisplacedLimit { expected } => {
                write!(f, "Invalid interval: expected a limit on the {} side", expected)
            }
            Self::EmptySequence => write!(f, "The interval sequence is empty"),
            Self::Unbounded(side) => {
                write!(f, "The interval has no {} limit", side)
            }
            Self::NonAdvancingStep => write!(f, "The increment does not advance"),
        }
    }
}

impl std::error::Error for IntervalError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            IntervalError::InvalidRange.to_string(),
            "Invalid interval: lower limit must not be greater than upper limit"
        );
        assert_eq!(
            IntervalError::MisplacedLimit {
                expected: Side::Upper
            }
            .to_string(),
            "Invalid interval: expected a limit on the upper side"
        );
        assert_eq!(
            IntervalError::Unbounded(Side::Lower).to_string(),
            "The interval has no lower limit"
        );
        assert_eq!(
            IntervalError::EmptySequence.to_string(),
            "The interval sequence is empty"
        );
    }

    #[test]
    fn test_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(IntervalError::NonAdvancingStep);
        assert_eq!(err.to_string(), "The increment does not advance");
    }
}
