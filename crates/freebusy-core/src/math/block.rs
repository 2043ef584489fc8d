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

use crate::{
    math::topology::Topology,
    num::ops::saturating_arithmetic::{SaturatingAddVal, SaturatingSubVal},
    num::scalar::{Scalar, clamp, cmp_partial, non_negative, partial_max, partial_min},
};
use smallvec::SmallVec;
use std::ops::{Add, BitAnd, BitOr, RangeInclusive, Sub};

/// A closed block `[start, end]` on a numeric axis, typically time.
///
/// Both bounds are inclusive. A block with `start == end` is a single point
/// and is a valid block. Blocks are immutable values: every operation that
/// "changes" a block returns a new one.
///
/// Ordering is lexicographic on `(start, end)`, which is the order used when
/// merging collections.
///
/// # Invariants
///
/// `start` is always less than or equal to `end`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Block<T> {
    start: T,
    end: T,
}

impl<T> Block<T>
where
    T: Scalar,
{
    /// Creates a new `Block` spanning `from` and `to`.
    ///
    /// The bounds are normalized, so the order of the arguments does not
    /// matter: `Block::new(a, b) == Block::new(b, a)`.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if the bounds do not compare (e.g. `NaN`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use freebusy_core::math::block::Block;
    ///
    /// let block = Block::new(12, 3);
    /// assert_eq!(block.start(), 3);
    /// assert_eq!(block.end(), 12);
    /// assert_eq!(block, Block::new(3, 12));
    /// ```
    #[inline]
    pub fn new(from: T, to: T) -> Self {
        debug_assert!(
            from.partial_cmp(&to).is_some(),
            "called `Block::new` with bounds that cannot be compared"
        );
        if to < from {
            Self {
                start: to,
                end: from,
            }
        } else {
            Self {
                start: from,
                end: to,
            }
        }
    }

    /// Creates a new `Block` only if `start <= end`.
    ///
    /// Unlike [`Block::new`], inverted bounds are rejected instead of swapped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use freebusy_core::math::block::Block;
    ///
    /// assert!(Block::try_new(0, 10).is_some());
    /// assert!(Block::try_new(10, 10).is_some());
    /// assert!(Block::try_new(10, 0).is_none());
    /// ```
    #[inline]
    pub fn try_new(start: T, end: T) -> Option<Self> {
        if start <= end {
            Some(Self { start, end })
        } else {
            None
        }
    }

    /// Creates a zero-length block at `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use freebusy_core::math::block::Block;
    ///
    /// let point = Block::point(7);
    /// assert_eq!(point.length(), 0);
    /// assert!(point.includes(7));
    /// ```
    #[inline]
    pub const fn point(value: T) -> Self {
        Self {
            start: value,
            end: value,
        }
    }

    /// Returns the lower bound (the "top" of a schedule).
    #[inline]
    pub const fn start(&self) -> T {
        self.start
    }

    /// Returns the upper bound (the "bottom" of a schedule).
    #[inline]
    pub const fn end(&self) -> T {
        self.end
    }

    /// Returns `end - start`, which is never negative.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use freebusy_core::math::block::Block;
    ///
    /// assert_eq!(Block::new(10, 25).length(), 15);
    /// assert_eq!(Block::new(1.5, 4.0).length(), 2.5);
    /// ```
    #[inline]
    pub fn length(&self) -> T {
        self.end - self.start
    }

    /// Returns the point halfway between the bounds.
    ///
    /// Integer scalars round toward `start`, i.e. down.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use freebusy_core::math::block::Block;
    ///
    /// assert_eq!(Block::new(0, 10).midpoint(), 5);
    /// assert_eq!(Block::new(-10, -4).midpoint(), -7);
    /// assert_eq!(Block::new(-10, -5).midpoint(), -8);
    /// ```
    #[inline]
    pub fn midpoint(&self) -> T {
        let two = T::one() + T::one();
        self.start + self.length() / two
    }

    /// Returns `true` if `value` lies within `[start, end]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use freebusy_core::math::block::Block;
    ///
    /// let block = Block::new(0, 10);
    /// assert!(block.includes(0));
    /// assert!(block.includes(10));
    /// assert!(!block.includes(11));
    /// ```
    #[inline]
    pub fn includes(&self, value: T) -> bool {
        self.start <= value && value <= self.end
    }

    /// Returns `true` if `other` lies strictly inside this block, sharing no endpoint.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use freebusy_core::math::block::Block;
    ///
    /// let block = Block::new(0, 10);
    /// assert!(block.surrounds(Block::new(2, 8)));
    /// assert!(!block.surrounds(Block::new(0, 8)));
    /// ```
    #[inline]
    pub fn surrounds(&self, other: Self) -> bool {
        other.start > self.start && other.end < self.end
    }

    /// Returns `true` if `other` lies inside this block, endpoints allowed to coincide.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use freebusy_core::math::block::Block;
    ///
    /// let block = Block::new(0, 10);
    /// assert!(block.covers(Block::new(0, 10)));
    /// assert!(block.covers(Block::new(0, 8)));
    /// assert!(!block.covers(Block::new(-1, 8)));
    /// ```
    #[inline]
    pub fn covers(&self, other: Self) -> bool {
        other.start >= self.start && other.end <= self.end
    }

    /// Returns `true` if this block starts at or before `other` and its end
    /// falls within `other`, i.e. it runs into `other` from below.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use freebusy_core::math::block::Block;
    ///
    /// assert!(Block::new(3, 8).intersects_top(Block::new(5, 12)));
    /// assert!(!Block::new(5, 12).intersects_top(Block::new(3, 8)));
    /// ```
    #[inline]
    pub fn intersects_top(&self, other: Self) -> bool {
        self.start <= other.start && other.includes(self.end)
    }

    /// Returns `true` if this block ends at or after `other` and its start
    /// falls within `other`, i.e. it runs into `other` from above.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use freebusy_core::math::block::Block;
    ///
    /// assert!(Block::new(5, 12).intersects_bottom(Block::new(3, 8)));
    /// assert!(!Block::new(3, 8).intersects_bottom(Block::new(5, 12)));
    /// ```
    #[inline]
    pub fn intersects_bottom(&self, other: Self) -> bool {
        self.end >= other.end && other.includes(self.start)
    }

    /// Returns `true` if the blocks share any point, including a single
    /// shared endpoint.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use freebusy_core::math::block::Block;
    ///
    /// let block = Block::new(0, 10);
    /// assert!(block.overlaps(Block::new(5, 15)));
    /// assert!(block.overlaps(Block::new(10, 15)));
    /// assert!(!block.overlaps(Block::new(11, 15)));
    /// ```
    #[inline]
    pub fn overlaps(&self, other: Self) -> bool {
        self.includes(other.start) || other.includes(self.start)
    }

    /// Classifies where `other` sits relative to this block.
    ///
    /// See [`Topology`] for the possible outcomes.
    #[inline]
    pub fn topology(&self, other: Self) -> Topology {
        Topology::classify(*self, other)
    }

    /// Returns the smallest block spanning both blocks.
    ///
    /// This always succeeds, even when the blocks are disjoint; the gap
    /// between them is then included. Use [`Block::add`] to keep disjoint
    /// blocks apart.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use freebusy_core::math::block::Block;
    ///
    /// assert_eq!(Block::new(0, 5).union(Block::new(10, 15)), Block::new(0, 15));
    /// ```
    #[inline]
    pub fn union(&self, other: Self) -> Self {
        Self {
            start: partial_min(self.start, other.start),
            end: partial_max(self.end, other.end),
        }
    }

    /// Returns the points shared by both blocks, or `None` if there are none.
    ///
    /// Blocks touching at one endpoint intersect in a single point.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use freebusy_core::math::block::Block;
    ///
    /// let block = Block::new(0, 10);
    /// assert_eq!(block.intersection(Block::new(5, 15)), Some(Block::new(5, 10)));
    /// assert_eq!(block.intersection(Block::new(10, 15)), Some(Block::point(10)));
    /// assert_eq!(block.intersection(Block::new(11, 15)), None);
    /// ```
    #[inline]
    pub fn intersection(&self, other: Self) -> Option<Self> {
        Self::try_new(
            partial_max(self.start, other.start),
            partial_min(self.end, other.end),
        )
    }

    /// Clamps this block to lie within `limiter`.
    ///
    /// Returns `None` when the blocks share no point, instead of an inverted
    /// block.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use freebusy_core::math::block::Block;
    ///
    /// let workday = Block::new(9, 17);
    /// assert_eq!(Block::new(7, 12).limited(workday), Some(Block::new(9, 12)));
    /// assert_eq!(Block::new(18, 20).limited(workday), None);
    /// ```
    #[inline]
    pub fn limited(&self, limiter: Self) -> Option<Self> {
        self.intersection(limiter)
    }

    /// Returns the open space between two disjoint blocks as a closed block.
    ///
    /// Returns `None` if the blocks share any point.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use freebusy_core::math::block::Block;
    ///
    /// let a = Block::new(0, 5);
    /// let b = Block::new(10, 15);
    /// assert_eq!(a.gap(b), Some(Block::new(5, 10)));
    /// assert_eq!(b.gap(a), Some(Block::new(5, 10)));
    /// assert_eq!(a.gap(Block::new(5, 8)), None);
    /// ```
    #[inline]
    pub fn gap(&self, other: Self) -> Option<Self> {
        if self.end < other.start {
            Some(Self {
                start: self.end,
                end: other.start,
            })
        } else if other.end < self.start {
            Some(Self {
                start: other.end,
                end: self.start,
            })
        } else {
            None
        }
    }

    /// Cuts `other` out of this block and returns the remainder on either side.
    ///
    /// The cut points are clamped into this block, so a misplaced `other`
    /// yields zero-length pieces rather than inverted ones. For an `other`
    /// strictly inside the block, the two pieces plus `other` reconstruct the
    /// block exactly.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use freebusy_core::math::block::Block;
    ///
    /// let (left, right) = Block::new(0, 10).split(Block::new(4, 6));
    /// assert_eq!(left, Block::new(0, 4));
    /// assert_eq!(right, Block::new(6, 10));
    /// ```
    #[inline]
    pub fn split(&self, other: Self) -> (Self, Self) {
        (
            self.trim_to(other.start),
            self.trim_from(other.end),
        )
    }

    /// Returns `[new_top, end]`, with `new_top` clamped into this block.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use freebusy_core::math::block::Block;
    ///
    /// assert_eq!(Block::new(0, 10).trim_from(4), Block::new(4, 10));
    /// assert_eq!(Block::new(0, 10).trim_from(40), Block::point(10));
    /// ```
    #[inline]
    pub fn trim_from(&self, new_top: T) -> Self {
        Self {
            start: clamp(new_top, self.start, self.end),
            end: self.end,
        }
    }

    /// Returns `[start, new_bottom]`, with `new_bottom` clamped into this block.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use freebusy_core::math::block::Block;
    ///
    /// assert_eq!(Block::new(0, 10).trim_to(4), Block::new(0, 4));
    /// assert_eq!(Block::new(0, 10).trim_to(-3), Block::point(0));
    /// ```
    #[inline]
    pub fn trim_to(&self, new_bottom: T) -> Self {
        Self {
            start: self.start,
            end: clamp(new_bottom, self.start, self.end),
        }
    }

    /// Expands the block outward by the given amounts.
    ///
    /// Negative amounts are treated as zero; padding never shrinks a block.
    /// Integer bounds saturate at the scalar's limits instead of wrapping, so
    /// the result always covers the original block.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use freebusy_core::math::block::Block;
    ///
    /// assert_eq!(Block::new(5, 10).padded(2, 3), Block::new(3, 13));
    /// assert_eq!(Block::new(5, 10).padded(-3, -1), Block::new(5, 10));
    /// assert_eq!(Block::new(0u8, 10).padded(5, 0), Block::new(0, 10));
    /// ```
    #[inline]
    pub fn padded(&self, top_padding: T, bottom_padding: T) -> Self {
        Self {
            start: self.start.saturating_sub_val(non_negative(top_padding)),
            end: self.end.saturating_add_val(non_negative(bottom_padding)),
        }
    }

    /// Adds two blocks, collapsing them into one when they share any point.
    ///
    /// # Returns
    ///
    /// * 1 block: if the blocks overlap, touch, or one contains the other.
    /// * 2 blocks: if the blocks are disjoint, ordered by start.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use freebusy_core::math::block::Block;
    ///
    /// let sum = Block::new(3, 8).add(Block::new(5, 12));
    /// assert_eq!(sum.as_slice(), &[Block::new(3, 12)]);
    ///
    /// let sum = Block::new(10, 15).add(Block::new(0, 5));
    /// assert_eq!(sum.as_slice(), &[Block::new(0, 5), Block::new(10, 15)]);
    /// ```
    pub fn add(&self, other: Self) -> SmallVec<Self, 2> {
        match self.topology(other) {
            Topology::Disjoint => {
                if other.start < self.start {
                    smallvec::smallvec![other, *self]
                } else {
                    smallvec::smallvec![*self, other]
                }
            }
            Topology::Identical | Topology::Surrounds => smallvec::smallvec![*self],
            Topology::CoveredBy => smallvec::smallvec![other],
            Topology::TouchesStart
            | Topology::TouchesEnd
            | Topology::OverlapsStart
            | Topology::OverlapsEnd => smallvec::smallvec![self.union(other)],
        }
    }

    /// Removes the part of this block that overlaps `other`.
    ///
    /// Endpoints shared with `other` are kept on the remaining pieces, so
    /// blocks that merely touch `other` come back unchanged.
    ///
    /// # Returns
    ///
    /// * 0 blocks: if `other` covers this block.
    /// * 1 block: if `other` clips one side, touches, or is disjoint.
    /// * 2 blocks: if `other` lies strictly inside, splitting this block.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use freebusy_core::math::block::Block;
    ///
    /// let rest = Block::new(5, 25).subtract(Block::new(10, 20));
    /// assert_eq!(rest.as_slice(), &[Block::new(5, 10), Block::new(20, 25)]);
    ///
    /// let rest = Block::new(5, 25).subtract(Block::new(20, 30));
    /// assert_eq!(rest.as_slice(), &[Block::new(5, 20)]);
    /// ```
    pub fn subtract(&self, other: Self) -> SmallVec<Self, 2> {
        match self.topology(other) {
            Topology::Identical | Topology::CoveredBy => SmallVec::new(),
            Topology::Disjoint | Topology::TouchesStart | Topology::TouchesEnd => {
                smallvec::smallvec![*self]
            }
            Topology::OverlapsEnd => {
                smallvec::smallvec![self.trim_to(partial_max(self.start, other.start))]
            }
            Topology::OverlapsStart => {
                smallvec::smallvec![self.trim_from(partial_min(self.end, other.end))]
            }
            Topology::Surrounds => {
                let (left, right) = self.split(other);
                smallvec::smallvec![left, right]
            }
        }
    }

    /// Removes every block in `others` from this block, in order.
    ///
    /// Each block of `others` is subtracted from every piece left over by the
    /// previous ones. The result is the ordered sequence of pieces of this
    /// block not covered by any block in `others`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use freebusy_core::math::block::Block;
    ///
    /// let day = Block::new(0, 24);
    /// let busy = [Block::new(9, 12), Block::new(13, 17)];
    /// assert_eq!(
    ///     day.subtract_all(&busy),
    ///     vec![Block::new(0, 9), Block::new(12, 13), Block::new(17, 24)]
    /// );
    /// ```
    pub fn subtract_all(&self, others: &[Self]) -> Vec<Self> {
        let mut remainder = vec![*self];
        for &other in others {
            if remainder.is_empty() {
                break;
            }
            remainder = remainder
                .into_iter()
                .flat_map(|piece| piece.subtract(other))
                .collect();
        }
        remainder
    }

    /// Coalesces a collection of blocks into the minimal sorted sequence of
    /// disjoint blocks covering the same points.
    ///
    /// Blocks touching at an endpoint are coalesced, so consecutive output
    /// blocks are always separated by a gap.
    ///
    /// # Complexity
    ///
    /// O(n log n) for sorting plus a linear sweep.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use freebusy_core::math::block::Block;
    ///
    /// let merged = Block::merge([
    ///     Block::new(13, 15),
    ///     Block::new(1, 3),
    ///     Block::new(2, 6),
    ///     Block::new(6, 8),
    /// ]);
    /// assert_eq!(merged, vec![Block::new(1, 8), Block::new(13, 15)]);
    /// ```
    pub fn merge<I>(blocks: I) -> Vec<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        let mut blocks: Vec<Self> = blocks.into_iter().collect();
        crate::algorithm::merge_in_place(&mut blocks);
        blocks
    }

    /// Compares two blocks by `(start, end)`, treating incomparable bounds as equal.
    #[inline]
    pub(crate) fn cmp_bounds(&self, other: &Self) -> std::cmp::Ordering {
        cmp_partial(&self.start, &other.start).then_with(|| cmp_partial(&self.end, &other.end))
    }
}

impl<T> Add for Block<T>
where
    T: Scalar,
{
    type Output = SmallVec<Self, 2>;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Block::add(&self, rhs)
    }
}

impl<T> Sub for Block<T>
where
    T: Scalar,
{
    type Output = SmallVec<Self, 2>;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.subtract(rhs)
    }
}

impl<T> Sub<&[Block<T>]> for Block<T>
where
    T: Scalar,
{
    type Output = Vec<Self>;

    #[inline]
    fn sub(self, rhs: &[Block<T>]) -> Self::Output {
        self.subtract_all(rhs)
    }
}

impl<T> BitAnd for Block<T>
where
    T: Scalar,
{
    type Output = Option<Self>;

    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection(rhs)
    }
}

impl<T> BitOr for Block<T>
where
    T: Scalar,
{
    type Output = Option<Self>;

    /// Returns the union if the blocks share a point, `None` otherwise.
    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        if self.overlaps(rhs) {
            Some(self.union(rhs))
        } else {
            None
        }
    }
}

impl<T> std::fmt::Display for Block<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

impl<T> std::ops::RangeBounds<T> for Block<T> {
    fn start_bound(&self) -> std::ops::Bound<&T> {
        std::ops::Bound::Included(&self.start)
    }

    fn end_bound(&self) -> std::ops::Bound<&T> {
        std::ops::Bound::Included(&self.end)
    }
}

impl<T> From<RangeInclusive<T>> for Block<T>
where
    T: Scalar,
{
    /// Converts a range, swapping reversed bounds like [`Block::new`].
    #[inline]
    fn from(range: RangeInclusive<T>) -> Self {
        let (start, end) = range.into_inner();
        Self::new(start, end)
    }
}

impl<T> From<Block<T>> for RangeInclusive<T> {
    #[inline]
    fn from(block: Block<T>) -> Self {
        block.start..=block.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ops::{Bound, RangeBounds};

    fn b(s: i64, e: i64) -> Block<i64> {
        Block::new(s, e)
    }

    #[test]
    fn test_construction_normalizes() {
        let block = b(20, 10);
        assert_eq!(block.start(), 10);
        assert_eq!(block.end(), 20);
        assert_eq!(block, b(10, 20));
        assert_eq!(block.length(), 10);
    }

    #[test]
    fn test_construction_point() {
        let block = b(10, 10);
        assert_eq!(block.length(), 0);
        assert_eq!(block, Block::point(10));
        assert!(block.includes(10));
    }

    #[test]
    fn test_try_new() {
        assert_eq!(Block::try_new(5, 10), Some(b(5, 10)));
        assert_eq!(Block::try_new(5, 5), Some(b(5, 5)));
        assert_eq!(Block::try_new(10, 5), None);
    }

    #[test]
    fn test_default() {
        let block: Block<i32> = Default::default();
        assert_eq!(block, Block::point(0));
    }

    #[test]
    fn test_ordering_is_lexicographic() {
        let mut blocks = vec![b(5, 9), b(1, 10), b(5, 6), b(1, 2)];
        blocks.sort();
        assert_eq!(blocks, vec![b(1, 2), b(1, 10), b(5, 6), b(5, 9)]);
    }

    #[test]
    fn test_includes() {
        let block = b(0, 10);
        assert!(block.includes(0));
        assert!(block.includes(5));
        assert!(block.includes(10));
        assert!(!block.includes(-1));
        assert!(!block.includes(11));
    }

    #[test]
    fn test_surrounds_and_covers() {
        let block = b(0, 10);

        assert!(block.surrounds(b(2, 8)));
        assert!(block.surrounds(b(5, 5)));
        assert!(!block.surrounds(b(0, 8)));
        assert!(!block.surrounds(b(2, 10)));
        assert!(!block.surrounds(block));

        assert!(block.covers(block));
        assert!(block.covers(b(0, 8)));
        assert!(block.covers(b(2, 10)));
        assert!(!block.covers(b(-1, 8)));
        assert!(!block.covers(b(2, 11)));
    }

    #[test]
    fn test_intersects_top_and_bottom() {
        let low = b(3, 8);
        let high = b(5, 12);

        assert!(low.intersects_top(high));
        assert!(!low.intersects_bottom(high));
        assert!(high.intersects_bottom(low));
        assert!(!high.intersects_top(low));

        // Touching counts: the end of `low` lies on the start of `other`.
        assert!(low.intersects_top(b(8, 10)));
        assert!(!low.intersects_top(b(9, 10)));
    }

    #[test]
    fn test_overlaps() {
        let block = b(0, 10);
        assert!(block.overlaps(b(-5, 0)));
        assert!(block.overlaps(b(5, 15)));
        assert!(block.overlaps(b(2, 8)));
        assert!(block.overlaps(b(-5, 15)));
        assert!(block.overlaps(b(10, 10)));
        assert!(!block.overlaps(b(11, 15)));
        assert!(!block.overlaps(b(-5, -1)));
    }

    #[test]
    fn test_union() {
        assert_eq!(b(0, 10).union(b(5, 15)), b(0, 15));
        assert_eq!(b(0, 10).union(b(2, 8)), b(0, 10));
        assert_eq!(b(0, 5).union(b(10, 15)), b(0, 15));
        assert_eq!(b(10, 15).union(b(0, 5)), b(0, 15));
    }

    #[test]
    fn test_intersection_and_limited() {
        let block = b(0, 10);
        assert_eq!(block.intersection(b(5, 15)), Some(b(5, 10)));
        assert_eq!(block.intersection(b(2, 8)), Some(b(2, 8)));
        assert_eq!(block.intersection(b(10, 20)), Some(Block::point(10)));
        assert_eq!(block.intersection(b(12, 20)), None);

        assert_eq!(b(-5, 5).limited(block), Some(b(0, 5)));
        assert_eq!(b(-5, 15).limited(block), Some(block));
        assert_eq!(b(20, 30).limited(block), None);
    }

    #[test]
    fn test_gap() {
        assert_eq!(b(0, 5).gap(b(10, 15)), Some(b(5, 10)));
        assert_eq!(b(10, 15).gap(b(0, 5)), Some(b(5, 10)));
        assert_eq!(b(0, 5).gap(b(5, 10)), None);
        assert_eq!(b(0, 5).gap(b(4, 6)), None);
    }

    #[test]
    fn test_midpoint() {
        assert_eq!(b(0, 10).midpoint(), 5);
        assert_eq!(b(0, 3).midpoint(), 1);
        assert_eq!(b(-10, -4).midpoint(), -7);
        // Odd lengths round toward the start.
        assert_eq!(b(-10, -5).midpoint(), -8);
        assert_eq!(b(5, 10).midpoint(), 7);
        assert_eq!(Block::new(1.0, 2.0).midpoint(), 1.5);
    }

    #[test]
    fn test_split_round_trip() {
        let block = b(0, 10);
        let cut = b(3, 7);
        let (left, right) = block.split(cut);
        assert_eq!(left, b(0, 3));
        assert_eq!(right, b(7, 10));
        assert_eq!(left.end(), cut.start());
        assert_eq!(cut.end(), right.start());
        assert_eq!(left.length() + cut.length() + right.length(), block.length());
    }

    #[test]
    fn test_split_clamps_out_of_range_cut() {
        let (left, right) = b(0, 10).split(b(8, 20));
        assert_eq!(left, b(0, 8));
        assert_eq!(right, Block::point(10));

        let (left, right) = b(0, 10).split(b(20, 30));
        assert_eq!(left, b(0, 10));
        assert_eq!(right, Block::point(10));
    }

    #[test]
    fn test_trim() {
        let block = b(0, 10);
        assert_eq!(block.trim_from(4), b(4, 10));
        assert_eq!(block.trim_to(4), b(0, 4));
        assert_eq!(block.trim_from(10), Block::point(10));
        assert_eq!(block.trim_to(0), Block::point(0));
        // Trims never grow a block.
        assert_eq!(block.trim_from(-5), block);
        assert_eq!(block.trim_to(15), block);
        assert_eq!(block.trim_from(15), Block::point(10));
        assert_eq!(block.trim_to(-5), Block::point(0));
    }

    #[test]
    fn test_padded() {
        assert_eq!(b(5, 10).padded(2, 3), b(3, 13));
        assert_eq!(b(5, 10).padded(0, 0), b(5, 10));
        assert_eq!(b(5, 10).padded(-3, -1), b(5, 10));
        assert_eq!(b(5, 10).padded(-3, 4), b(5, 14));
        assert_eq!(Block::new(1.0, 2.0).padded(0.5, -0.5), Block::new(0.5, 2.0));
    }

    #[test]
    fn test_padded_saturates_at_scalar_limits() {
        assert_eq!(Block::new(0u8, 10).padded(5, 0), Block::new(0, 10));
        assert_eq!(Block::new(2u8, 250).padded(5, 10), Block::new(0, u8::MAX));
        assert_eq!(Block::new(3u32, 7).padded(2, 1), Block::new(1, 8));

        let wide = Block::new(0i64, i64::MAX);
        assert_eq!(wide.padded(0, 1), wide);
        let wide = Block::new(i64::MIN, 0);
        assert_eq!(wide.padded(1, 0), wide);

        let padded = Block::new(i8::MIN + 1, i8::MAX - 1).padded(i8::MAX, i8::MAX);
        assert_eq!(padded, Block::new(i8::MIN, i8::MAX));
        assert!(padded.covers(Block::new(i8::MIN + 1, i8::MAX - 1)));
    }

    #[test]
    fn test_add() {
        // Partial overlap.
        assert_eq!((b(3, 8) + b(5, 12)).as_slice(), &[b(3, 12)]);
        assert_eq!((b(5, 12) + b(3, 8)).as_slice(), &[b(3, 12)]);
        // Touching.
        assert_eq!((b(0, 5) + b(5, 10)).as_slice(), &[b(0, 10)]);
        assert_eq!((b(5, 10) + b(0, 5)).as_slice(), &[b(0, 10)]);
        // Containment in both directions.
        assert_eq!((b(0, 10) + b(2, 8)).as_slice(), &[b(0, 10)]);
        assert_eq!((b(2, 8) + b(0, 10)).as_slice(), &[b(0, 10)]);
        assert_eq!((b(0, 10) + b(0, 4)).as_slice(), &[b(0, 10)]);
        // Identical.
        assert_eq!((b(0, 10) + b(0, 10)).as_slice(), &[b(0, 10)]);
    }

    #[test]
    fn test_add_disjoint_is_ordered() {
        assert_eq!((b(0, 5) + b(10, 15)).as_slice(), &[b(0, 5), b(10, 15)]);
        assert_eq!((b(10, 15) + b(0, 5)).as_slice(), &[b(0, 5), b(10, 15)]);
    }

    #[test]
    fn test_subtract() {
        let base = b(0, 10);

        // Identical.
        assert!((base - base).is_empty());
        // Covered.
        assert!((base - b(-5, 15)).is_empty());
        assert!((base - b(0, 15)).is_empty());
        // Disjoint.
        assert_eq!((base - b(12, 15)).as_slice(), &[base]);
        // Touching keeps the shared endpoint.
        assert_eq!((base - b(10, 15)).as_slice(), &[base]);
        assert_eq!((base - b(-5, 0)).as_slice(), &[base]);
        // Clip end.
        assert_eq!((base - b(8, 15)).as_slice(), &[b(0, 8)]);
        assert_eq!((base - b(8, 10)).as_slice(), &[b(0, 8)]);
        // Clip start.
        assert_eq!((base - b(-5, 2)).as_slice(), &[b(2, 10)]);
        assert_eq!((base - b(0, 2)).as_slice(), &[b(2, 10)]);
        // Hole.
        assert_eq!((base - b(4, 6)).as_slice(), &[b(0, 4), b(6, 10)]);
        assert_eq!((b(5, 25) - b(10, 20)).as_slice(), &[b(5, 10), b(20, 25)]);
    }

    #[test]
    fn test_subtract_point_blocks() {
        // A point strictly inside splits the block at that point.
        assert_eq!((b(0, 10) - Block::point(5)).as_slice(), &[b(0, 5), b(5, 10)]);
        // A point block is consumed by anything covering it.
        assert!((Block::point(5) - b(0, 5)).is_empty());
        assert!((Block::point(5) - Block::point(5)).is_empty());
        assert_eq!((Block::point(5) - b(6, 8)).as_slice(), &[Block::point(5)]);
    }

    #[test]
    fn test_subtract_all() {
        let day = b(0, 24);
        let busy = [b(20, 30), b(9, 12), b(13, 17), b(-3, 1)];
        assert_eq!(
            day - &busy[..],
            vec![b(1, 9), b(12, 13), b(17, 20)]
        );

        assert!(day.subtract_all(&[b(-1, 25)]).is_empty());
        assert_eq!(day.subtract_all(&[]), vec![day]);
    }

    #[test]
    fn test_subtract_all_overlapping_members() {
        let base = b(0, 10);
        let others = [b(2, 5), b(4, 7), b(6, 6)];
        assert_eq!(base.subtract_all(&others), vec![b(0, 2), b(7, 10)]);
    }

    #[test]
    fn test_merge() {
        let merged = Block::merge(vec![b(8, 10), b(1, 3), b(2, 6), b(15, 18), b(10, 11)]);
        assert_eq!(merged, vec![b(1, 6), b(8, 11), b(15, 18)]);
    }

    #[test]
    fn test_merge_edge_cases() {
        assert!(Block::<i64>::merge(Vec::new()).is_empty());
        assert_eq!(Block::merge([b(3, 4)]), vec![b(3, 4)]);
        assert_eq!(Block::merge([b(3, 4), b(3, 4)]), vec![b(3, 4)]);
        assert_eq!(Block::merge([Block::point(4), b(0, 4)]), vec![b(0, 4)]);
        assert_eq!(Block::merge([b(0, 100), b(10, 20), b(30, 40)]), vec![b(0, 100)]);
    }

    #[test]
    fn test_merge_floats() {
        let merged = Block::merge([
            Block::new(1.5, 2.5),
            Block::new(0.0, 1.0),
            Block::new(2.0, 3.0),
        ]);
        assert_eq!(merged, vec![Block::new(0.0, 1.0), Block::new(1.5, 3.0)]);
    }

    #[test]
    fn test_bit_operators() {
        assert_eq!(b(0, 10) & b(5, 15), Some(b(5, 10)));
        assert_eq!(b(0, 10) & b(11, 15), None);
        assert_eq!(b(0, 10) | b(10, 15), Some(b(0, 15)));
        assert_eq!(b(0, 10) | b(11, 15), None);
    }

    #[test]
    fn test_traits_display_debug() {
        let block = b(10, 20);
        assert_eq!(format!("{}", block), "[10, 20]");
        assert_eq!(format!("{:?}", block), "Block { start: 10, end: 20 }");
    }

    #[test]
    fn test_range_conversions() {
        let block = Block::from(3..=9);
        assert_eq!(block, b(3, 9));
        let reversed = Block::from(9..=3);
        assert_eq!(reversed, b(3, 9));
        let range: RangeInclusive<i64> = block.into();
        assert_eq!(range, 3..=9);
    }

    #[test]
    fn test_range_bounds() {
        let block = b(5, 10);
        match block.start_bound() {
            Bound::Included(&x) => assert_eq!(x, 5),
            _ => panic!("Wrong start bound"),
        }
        match block.end_bound() {
            Bound::Included(&x) => assert_eq!(x, 10),
            _ => panic!("Wrong end bound"),
        }
        assert!(block.contains(&10));
    }
}
