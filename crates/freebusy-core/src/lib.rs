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

//! # Freebusy Core
//!
//! Closed-block arithmetic for free/busy scheduling. A [`Block`] is an
//! immutable `[start, end]` range over any numeric scalar (integer timestamps,
//! minute offsets, floating point hours). Blocks can be combined, subtracted,
//! trimmed, padded and merged, which is everything needed to work out which
//! parts of a day are covered, overlapping, or still free.
//!
//! ## Modules
//!
//! - `math`: The `Block` type with normalization, predicates, transforms, the
//!   `add`/`subtract` operators, collection `merge`, the closed `Topology`
//!   classification those operators dispatch on, and `[start, end]` parsing.
//! - `algorithm`: Sweeps over canonical (sorted, non-overlapping) block
//!   slices: in-place merge, linear subtraction, free-time queries, coverage
//!   and point lookup.
//! - `num`: The `Scalar` bound and `PartialOrd`-only comparison helpers.
//!
//! ## Example
//!
//! ```rust
//! use freebusy_core::math::block::Block;
//!
//! let merged = Block::merge([Block::new(9, 11), Block::new(10, 12), Block::new(14, 15)]);
//! assert_eq!(merged, vec![Block::new(9, 12), Block::new(14, 15)]);
//!
//! let free = Block::new(8, 18) - &merged[..];
//! assert_eq!(free, vec![Block::new(8, 9), Block::new(12, 14), Block::new(15, 18)]);
//! ```
//!
//! [`Block`]: crate::math::block::Block

pub mod algorithm;
pub mod math;
pub mod num;
