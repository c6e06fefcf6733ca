// Copyright 2026 the Varistroke Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by outline computation.

use thiserror::Error;

/// Reasons an outline could not be computed.
///
/// Degenerate but well-formed input (an empty spline, a zero-length curve,
/// dashes that miss the spline) is not an error: it produces an empty or
/// placeholder outline instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OutlineError {
    /// The scale factor is not a finite positive number.
    #[error("scale factor must be finite and positive, got {0}")]
    InvalidScale(f64),

    /// An input value is NaN or infinite.
    #[error("non-finite value in {0}")]
    NonFinite(&'static str),

    /// A width profile that should be sorted is not.
    #[error("width profile is not sorted at index {index}")]
    UnsortedProfile {
        /// Index of the first point out of order.
        index: usize,
    },

    /// The sampling walk did not reach the end of the spline.
    #[error("sampling walk stalled after {steps} steps")]
    WalkStalled {
        /// Number of steps taken.
        steps: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn messages() {
        assert_eq!(
            OutlineError::InvalidScale(-1.0).to_string(),
            "scale factor must be finite and positive, got -1"
        );
        assert_eq!(
            OutlineError::UnsortedProfile { index: 3 }.to_string(),
            "width profile is not sorted at index 3"
        );
    }
}
