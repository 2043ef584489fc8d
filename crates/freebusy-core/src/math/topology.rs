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

//! # Block Topology
//!
//! Classifies how one block sits relative to another. The classification is
//! computed once and every combining operation (`add`, `subtract`) dispatches
//! on the result with an exhaustive `match`, so no pairing of blocks can fall
//! between two cases or into two cases at once.
//!
//! Variants describe `other` as seen from `block`, where "start" is the lower
//! bound and "end" the upper bound of `block`:
//!
//! ```text
//! block:            [=========]
//! Identical         [=========]
//! Disjoint    [==]               [==]
//! TouchesStart [====]
//! TouchesEnd                  [====]
//! OverlapsStart  [=====]
//! OverlapsEnd            [=========]
//! Surrounds            [==]
//! CoveredBy       [=============]
//! ```

use crate::{math::block::Block, num::scalar::Scalar};

/// The relative position of `other` with respect to a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topology {
    /// Both endpoints are equal.
    Identical,
    /// No shared point.
    Disjoint,
    /// `other` ends exactly at the block's start and shares only that point.
    TouchesStart,
    /// `other` starts exactly at the block's end and shares only that point.
    TouchesEnd,
    /// `other` overlaps the lower part of the block without covering it.
    /// This includes `other` being covered while sharing the block's start.
    OverlapsStart,
    /// `other` overlaps the upper part of the block without covering it.
    /// This includes `other` being covered while sharing the block's end.
    OverlapsEnd,
    /// `other` lies strictly inside the block with no shared endpoint.
    Surrounds,
    /// `other` covers the whole block and is not identical to it.
    CoveredBy,
}

impl Topology {
    /// Classifies `other` relative to `block`.
    ///
    /// Each step is only reached when every earlier one failed, so exactly one
    /// variant is produced for any pair.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use freebusy_core::math::{block::Block, topology::Topology};
    ///
    /// let day = Block::new(0, 24);
    /// assert_eq!(Topology::classify(day, Block::new(8, 12)), Topology::Surrounds);
    /// assert_eq!(Topology::classify(day, Block::new(20, 30)), Topology::OverlapsEnd);
    /// assert_eq!(Topology::classify(day, Block::new(-4, 0)), Topology::TouchesStart);
    /// assert_eq!(Topology::classify(day, Block::new(30, 40)), Topology::Disjoint);
    /// ```
    pub fn classify<T>(block: Block<T>, other: Block<T>) -> Self
    where
        T: Scalar,
    {
        let (start, end) = (block.start(), block.end());
        let (other_start, other_end) = (other.start(), other.end());

        if block == other {
            Topology::Identical
        } else if other_end < start || other_start > end {
            Topology::Disjoint
        } else if other_start <= start && other_end >= end {
            Topology::CoveredBy
        } else if other_start > start && other_end < end {
            Topology::Surrounds
        } else if other_start > start {
            // Not covered and not surrounded, so `other_end >= end`.
            if other_start == end {
                Topology::TouchesEnd
            } else {
                Topology::OverlapsEnd
            }
        } else if other_end == start {
            Topology::TouchesStart
        } else {
            Topology::OverlapsStart
        }
    }

    /// Returns `true` if the two blocks share at least one point.
    #[inline]
    pub const fn shares_points(self) -> bool {
        !matches!(self, Topology::Disjoint)
    }

    /// Returns `true` if the two blocks share exactly one endpoint and nothing else.
    #[inline]
    pub const fn is_touching(self) -> bool {
        matches!(self, Topology::TouchesStart | Topology::TouchesEnd)
    }

    /// Returns `true` if one block contains the other, endpoints allowed to coincide.
    #[inline]
    pub const fn is_containment(self) -> bool {
        matches!(
            self,
            Topology::Identical | Topology::Surrounds | Topology::CoveredBy
        )
    }
}

impl std::fmt::Display for Topology {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Topology::Identical => "identical",
            Topology::Disjoint => "disjoint",
            Topology::TouchesStart => "touches start",
            Topology::TouchesEnd => "touches end",
            Topology::OverlapsStart => "overlaps start",
            Topology::OverlapsEnd => "overlaps end",
            Topology::Surrounds => "surrounds",
            Topology::CoveredBy => "covered by",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn b(s: i64, e: i64) -> Block<i64> {
        Block::new(s, e)
    }

    #[test]
    fn test_classify_identical() {
        assert_eq!(Topology::classify(b(0, 10), b(0, 10)), Topology::Identical);
        assert_eq!(Topology::classify(b(5, 5), b(5, 5)), Topology::Identical);
    }

    #[test]
    fn test_classify_disjoint() {
        assert_eq!(Topology::classify(b(0, 10), b(11, 20)), Topology::Disjoint);
        assert_eq!(Topology::classify(b(0, 10), b(-9, -1)), Topology::Disjoint);
    }

    #[test]
    fn test_classify_touching() {
        assert_eq!(Topology::classify(b(0, 10), b(-5, 0)), Topology::TouchesStart);
        assert_eq!(Topology::classify(b(0, 10), b(10, 15)), Topology::TouchesEnd);
        // Zero-length blocks sitting on an endpoint only touch.
        assert_eq!(Topology::classify(b(0, 10), b(0, 0)), Topology::TouchesStart);
        assert_eq!(Topology::classify(b(0, 10), b(10, 10)), Topology::TouchesEnd);
    }

    #[test]
    fn test_classify_partial_overlap() {
        assert_eq!(Topology::classify(b(0, 10), b(-5, 5)), Topology::OverlapsStart);
        assert_eq!(Topology::classify(b(0, 10), b(5, 15)), Topology::OverlapsEnd);
        // Covered by the block while sharing one endpoint.
        assert_eq!(Topology::classify(b(0, 10), b(0, 4)), Topology::OverlapsStart);
        assert_eq!(Topology::classify(b(0, 10), b(6, 10)), Topology::OverlapsEnd);
    }

    #[test]
    fn test_classify_containment() {
        assert_eq!(Topology::classify(b(0, 10), b(2, 8)), Topology::Surrounds);
        assert_eq!(Topology::classify(b(0, 10), b(5, 5)), Topology::Surrounds);
        assert_eq!(Topology::classify(b(2, 8), b(0, 10)), Topology::CoveredBy);
        assert_eq!(Topology::classify(b(0, 10), b(0, 12)), Topology::CoveredBy);
        assert_eq!(Topology::classify(b(5, 5), b(0, 5)), Topology::CoveredBy);
    }

    #[test]
    fn test_classify_agrees_with_predicates() {
        let blocks = [
            b(0, 0),
            b(0, 3),
            b(0, 10),
            b(2, 8),
            b(3, 3),
            b(3, 10),
            b(8, 12),
            b(10, 10),
            b(10, 20),
            b(-5, 0),
            b(-5, 15),
        ];
        for &block in &blocks {
            for &other in &blocks {
                let topology = Topology::classify(block, other);
                assert_eq!(
                    topology.shares_points(),
                    block.overlaps(other),
                    "{block} vs {other}: {topology}"
                );
                assert_eq!(
                    topology == Topology::Surrounds,
                    block.surrounds(other),
                    "{block} vs {other}: {topology}"
                );
                assert_eq!(
                    matches!(topology, Topology::CoveredBy | Topology::Identical),
                    other.covers(block),
                    "{block} vs {other}: {topology}"
                );
                if topology == Topology::Surrounds {
                    assert_eq!(Topology::classify(other, block), Topology::CoveredBy);
                }
            }
        }
    }

    #[test]
    fn test_helpers() {
        assert!(!Topology::Disjoint.shares_points());
        assert!(Topology::TouchesEnd.shares_points());
        assert!(Topology::TouchesStart.is_touching());
        assert!(!Topology::OverlapsStart.is_touching());
        assert!(Topology::CoveredBy.is_containment());
        assert!(!Topology::OverlapsEnd.is_containment());
    }

    #[test]
    fn test_display() {
        assert_eq!(Topology::Surrounds.to_string(), "surrounds");
        assert_eq!(Topology::TouchesStart.to_string(), "touches start");
    }
}
