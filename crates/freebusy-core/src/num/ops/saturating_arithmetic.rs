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

use core::ops::{Add, Sub};

macro_rules! saturating_impl_binary_val {
    ($trait_name:ident, $method:ident, $t:ty, $src_method:ident) => {
        impl $trait_name for $t {
            #[inline(always)]
            fn $method(self, v: Self) -> Self {
                <$t>::$src_method(self, v)
            }
        }
    };
}

macro_rules! float_impl_binary_val {
    ($trait_name:ident, $method:ident, $t:ty, $op:tt) => {
        impl $trait_name for $t {
            #[inline(always)]
            fn $method(self, v: Self) -> Self {
                self $op v
            }
        }
    };
}

/// Saturating addition by value (no references).
///
/// Integers clamp at their numeric bounds instead of overflowing. Floats use
/// plain addition, which rounds to infinity rather than wrapping.
///
/// # Examples
///
/// ```rust
/// # use freebusy_core::num::ops::saturating_arithmetic::SaturatingAddVal;
///
/// assert_eq!(250u8.saturating_add_val(10), 255);
/// assert_eq!(i64::MAX.saturating_add_val(1), i64::MAX);
/// assert_eq!(1.5f64.saturating_add_val(1.0), 2.5);
/// ```
pub trait SaturatingAddVal: Sized + Add<Self, Output = Self> {
    /// Performs saturating addition by value.
    fn saturating_add_val(self, v: Self) -> Self;
}

saturating_impl_binary_val!(SaturatingAddVal, saturating_add_val, u8, saturating_add);
saturating_impl_binary_val!(SaturatingAddVal, saturating_add_val, u16, saturating_add);
saturating_impl_binary_val!(SaturatingAddVal, saturating_add_val, u32, saturating_add);
saturating_impl_binary_val!(SaturatingAddVal, saturating_add_val, u64, saturating_add);
saturating_impl_binary_val!(SaturatingAddVal, saturating_add_val, usize, saturating_add);
saturating_impl_binary_val!(SaturatingAddVal, saturating_add_val, u128, saturating_add);

saturating_impl_binary_val!(SaturatingAddVal, saturating_add_val, i8, saturating_add);
saturating_impl_binary_val!(SaturatingAddVal, saturating_add_val, i16, saturating_add);
saturating_impl_binary_val!(SaturatingAddVal, saturating_add_val, i32, saturating_add);
saturating_impl_binary_val!(SaturatingAddVal, saturating_add_val, i64, saturating_add);
saturating_impl_binary_val!(SaturatingAddVal, saturating_add_val, isize, saturating_add);
saturating_impl_binary_val!(SaturatingAddVal, saturating_add_val, i128, saturating_add);

float_impl_binary_val!(SaturatingAddVal, saturating_add_val, f32, +);
float_impl_binary_val!(SaturatingAddVal, saturating_add_val, f64, +);

/// Saturating subtraction by value (no references).
///
/// Integers clamp at their numeric bounds instead of under/overflowing.
/// Floats use plain subtraction.
///
/// # Examples
///
/// ```rust
/// # use freebusy_core::num::ops::saturating_arithmetic::SaturatingSubVal;
///
/// assert_eq!(5u8.saturating_sub_val(10), 0);
/// assert_eq!(i64::MIN.saturating_sub_val(1), i64::MIN);
/// assert_eq!(1.5f64.saturating_sub_val(2.0), -0.5);
/// ```
pub trait SaturatingSubVal: Sized + Sub<Self, Output = Self> {
    /// Performs saturating subtraction by value.
    fn saturating_sub_val(self, v: Self) -> Self;
}

saturating_impl_binary_val!(SaturatingSubVal, saturating_sub_val, u8, saturating_sub);
saturating_impl_binary_val!(SaturatingSubVal, saturating_sub_val, u16, saturating_sub);
saturating_impl_binary_val!(SaturatingSubVal, saturating_sub_val, u32, saturating_sub);
saturating_impl_binary_val!(SaturatingSubVal, saturating_sub_val, u64, saturating_sub);
saturating_impl_binary_val!(SaturatingSubVal, saturating_sub_val, usize, saturating_sub);
saturating_impl_binary_val!(SaturatingSubVal, saturating_sub_val, u128, saturating_sub);

saturating_impl_binary_val!(SaturatingSubVal, saturating_sub_val, i8, saturating_sub);
saturating_impl_binary_val!(SaturatingSubVal, saturating_sub_val, i16, saturating_sub);
saturating_impl_binary_val!(SaturatingSubVal, saturating_sub_val, i32, saturating_sub);
saturating_impl_binary_val!(SaturatingSubVal, saturating_sub_val, i64, saturating_sub);
saturating_impl_binary_val!(SaturatingSubVal, saturating_sub_val, isize, saturating_sub);
saturating_impl_binary_val!(SaturatingSubVal, saturating_sub_val, i128, saturating_sub);

float_impl_binary_val!(SaturatingSubVal, saturating_sub_val, f32, -);
float_impl_binary_val!(SaturatingSubVal, saturating_sub_val, f64, -);
