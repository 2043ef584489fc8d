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

//! # Scalar Bounds
//!
//! The numeric abstraction every [`Block`](crate::math::block::Block) is
//! generic over. Any `Copy` numeric type with a partial order qualifies, so
//! blocks work equally over integer timestamps, minute offsets or floating
//! point hours.
//!
//! The helpers in this module (`partial_min`, `partial_max`, `clamp`) mirror
//! `std::cmp::{min, max}` and `Ord::clamp` but only require `PartialOrd`,
//! which is what floating point types provide.

use crate::num::ops::saturating_arithmetic::{SaturatingAddVal, SaturatingSubVal};
use num_traits::Num;
use std::cmp::Ordering;

/// A totally ordered numeric value that can bound a block.
///
/// This trait is blanket-implemented for every `Copy + PartialOrd + Num`
/// type with saturating addition and subtraction, which covers all primitive
/// integers and floats.
///
/// Values that do not compare (such as `f64::NAN`) violate the total order
/// the algebra relies on. Debug builds reject them on construction.
///
/// # Examples
///
/// ```rust
/// # use freebusy_core::num::scalar::Scalar;
///
/// fn accepts_scalar<T: Scalar>(_: T) {}
///
/// accepts_scalar(5i64);
/// accepts_scalar(2.5f32);
/// accepts_scalar(10u16);
/// ```
pub trait Scalar: Copy + PartialOrd + Num + SaturatingAddVal + SaturatingSubVal {}

impl<T> Scalar for T where T: Copy + PartialOrd + Num + SaturatingAddVal + SaturatingSubVal {}

/// Returns the smaller of two values, preferring `a` when they compare equal
/// or are incomparable.
///
/// # Examples
///
/// ```rust
/// # use freebusy_core::num::scalar::partial_min;
///
/// assert_eq!(partial_min(3, 7), 3);
/// assert_eq!(partial_min(2.5, -1.0), -1.0);
/// ```
#[inline]
pub fn partial_min<T>(a: T, b: T) -> T
where
    T: PartialOrd,
{
    if b < a { b } else { a }
}

/// Returns the larger of two values, preferring `a` when they compare equal
/// or are incomparable.
///
/// # Examples
///
/// ```rust
/// # use freebusy_core::num::scalar::partial_max;
///
/// assert_eq!(partial_max(3, 7), 7);
/// assert_eq!(partial_max(2.5, -1.0), 2.5);
/// ```
#[inline]
pub fn partial_max<T>(a: T, b: T) -> T
where
    T: PartialOrd,
{
    if b > a { b } else { a }
}

/// Restricts `value` to the closed range `[lo, hi]`.
///
/// The caller must ensure `lo <= hi`.
///
/// # Examples
///
/// ```rust
/// # use freebusy_core::num::scalar::clamp;
///
/// assert_eq!(clamp(15, 0, 10), 10);
/// assert_eq!(clamp(-3, 0, 10), 0);
/// assert_eq!(clamp(4, 0, 10), 4);
/// ```
#[inline]
pub fn clamp<T>(value: T, lo: T, hi: T) -> T
where
    T: PartialOrd,
{
    debug_assert!(!(hi < lo), "called `clamp` with `lo` greater than `hi`");
    partial_min(partial_max(value, lo), hi)
}

/// Returns `value`, or zero if `value` is negative.
#[inline]
pub fn non_negative<T>(value: T) -> T
where
    T: Scalar,
{
    partial_max(value, T::zero())
}

/// Compares two values, treating incomparable pairs as equal.
///
/// Intended as a sort key for scalar-bounded data where the total order is a
/// caller contract.
#[inline]
pub fn cmp_partial<T>(a: &T, b: &T) -> Ordering
where
    T: PartialOrd,
{
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}
