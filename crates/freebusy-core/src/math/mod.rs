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

//! # Block Algebra
//!
//! Closed-block primitives for free/busy scheduling: which parts of a window
//! are covered, overlapping, or left free once other blocks are applied.
//!
//! ## Submodules
//!
//! - `block`: The generic `[start, end]` block type with normalization,
//!   predicates (inclusion, containment, overlap), transforms (union, split,
//!   trim, limit, pad), the `add`/`subtract` operators and collection `merge`.
//! - `topology`: A closed classification of how two blocks relate, which every
//!   combining operation dispatches on.
//! - `parse`: `FromStr` support for the `[start, end]` text form.
//!
//! ## Motivation
//!
//! Both bounds are inclusive, so a zero-length block is a meaningful point in
//! time. Blocks touching at an endpoint share that point and coalesce when
//! added or merged.

pub mod block;
pub mod parse;
pub mod topology;
