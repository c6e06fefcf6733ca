// Copyright 2026 the Varistroke Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Float shims and numeric constants shared by the outline pipeline.

#![allow(missing_docs)]

/// Defines a trait that chooses between libstd or libm implementations of float methods.
macro_rules! define_float_funcs {
    ($(
        fn $name:ident(self $(,$arg:ident: $arg_ty:ty)*) -> $ret:ty
        => $lname:ident;
    )+) => {
        #[cfg(not(feature = "std"))]
        pub(crate) trait FloatFuncs : Sized {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret;)+
        }

        #[cfg(not(feature = "std"))]
        impl FloatFuncs for f64 {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret {
                #[cfg(feature = "libm")]
                return libm::$lname(self $(,$arg as _)*);

                #[cfg(not(feature = "libm"))]
                compile_error!("varistroke requires either the `std` or `libm` feature")
            })+
        }
    }
}

define_float_funcs! {
    fn abs(self) -> Self => fabs;
    fn atan2(self, other: Self) -> Self => atan2;
    fn cos(self) -> Self => cos;
    fn floor(self) -> Self => floor;
    fn sqrt(self) -> Self => sqrt;
    fn tan(self) -> Self => tan;
}

/// Number of samples taken per spline segment, both for walking and for
/// measuring arc length.
pub const SAMPLES: usize = 50;

/// Tangent magnitude multiplier for the Hermite curve of a rounded tip.
pub const ROUND_END_FACTOR: f64 = 4.0;

/// Turning magnitude above which a sharp cusp uses a full line intersection.
pub const CUSP_THRESHOLD: f64 = 0.40;

/// Upper bound of the length multiplier of a sharp cusp spike.
pub const SPIKE_AMOUNT: f64 = 4.0;

/// Position tolerance of the walk.
pub const EPSILON: f64 = 0.000_000_001;

/// Parameter offset used when a tangent is replaced by the derivative
/// near a segment end.
pub const CUSP_TANGENT_ADJUST: f64 = 0.025;
