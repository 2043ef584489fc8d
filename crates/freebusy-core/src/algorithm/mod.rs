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

//! Collection algorithms over blocks.
//!
//! These routines work on slices of blocks kept in canonical form (sorted by
//! start, non-overlapping) and are the building blocks for free/busy queries:
//! coalescing busy blocks, cutting them out of a window, and looking up the
//! block that contains a given instant.

use crate::{math::block::Block, num::scalar::Scalar};

/// Checks whether the given blocks are sorted by start and pairwise disjoint,
/// i.e. consecutive blocks are separated by a gap.
///
/// This is the shape produced by [`Block::merge`].
#[inline(always)]
pub fn are_disjoint_and_sorted<T>(blocks: &[Block<T>]) -> bool
where
    T: Scalar,
{
    blocks.windows(2).all(|w| w[0].end() < w[1].start())
}

/// Checks whether the given blocks are sorted by start and overlap at most at
/// shared endpoints.
///
/// This is the shape produced by [`subtract_sorted`] and [`free_within`],
/// whose pieces may meet at a point that was cut out.
#[inline(always)]
pub fn are_sorted_and_non_overlapping<T>(blocks: &[Block<T>]) -> bool
where
    T: Scalar,
{
    blocks.windows(2).all(|w| w[0].end() <= w[1].start())
}

/// Returns the index of the first block whose start is `>= key`.
///
/// # Panics
///
/// In debug builds, this function will panic if `blocks` is not sorted and
/// non-overlapping.
#[inline]
pub fn lower_bound_start<T>(blocks: &[Block<T>], key: T) -> usize
where
    T: Scalar,
{
    debug_assert!(
        are_sorted_and_non_overlapping(blocks),
        "called `lower_bound_start` with blocks that are not sorted and non-overlapping"
    );
    blocks.partition_point(|block| block.start() < key)
}

/// Returns the index of the first block that includes `point`, if any.
///
/// # Panics
///
/// In debug builds, this function will panic if `blocks` is not sorted and
/// non-overlapping.
#[inline]
pub fn find_containing<T>(blocks: &[Block<T>], point: T) -> Option<usize>
where
    T: Scalar,
{
    debug_assert!(
        are_sorted_and_non_overlapping(blocks),
        "called `find_containing` with blocks that are not sorted and non-overlapping"
    );
    let index = blocks.partition_point(|block| block.end() < point);
    blocks
        .get(index)
        .filter(|block| block.includes(point))
        .map(|_| index)
}

/// Merges blocks in place, coalescing overlapping and touching blocks.
///
/// Sorts by `(start, end)`, then compacts in a single left-to-right pass: a
/// block sharing any point with the last kept block is folded into it,
/// anything else starts a new kept block.
///
/// Complexity:
/// - O(N log N) for sorting + O(N) for compaction.
pub fn merge_in_place<T>(blocks: &mut Vec<Block<T>>)
where
    T: Scalar,
{
    if blocks.is_empty() {
        return;
    }

    blocks.sort_unstable_by(|a, b| a.cmp_bounds(b));

    let mut write_index = 0;
    for read_index in 1..blocks.len() {
        let current = blocks[write_index];
        let next = blocks[read_index];

        if current.overlaps(next) {
            // Sorted input: `next` never starts before `current`, so the sum
            // of the two is their union.
            blocks[write_index] = current.union(next);
        } else {
            write_index += 1;
            blocks[write_index] = next;
        }
    }
    blocks.truncate(write_index + 1);

    debug_assert!(
        are_disjoint_and_sorted(blocks),
        "`merge_in_place` output is not disjoint and sorted"
    );
}

/// Computes `base` minus `exclusions` for canonical inputs, writing the
/// remaining pieces into `output` (which is cleared first).
///
/// Produces the same pieces as subtracting every exclusion from every base
/// block with [`Block::subtract_all`], but in a single linear sweep.
///
/// Invariants:
/// - `base` must be sorted and non-overlapping.
/// - `exclusions` must be sorted and disjoint (e.g. the output of
///   [`Block::merge`]).
///
/// Complexity:
/// - O(|base| + |exclusions|) in the common case.
pub fn subtract_sorted<T>(base: &[Block<T>], exclusions: &[Block<T>], output: &mut Vec<Block<T>>)
where
    T: Scalar,
{
    debug_assert!(
        are_sorted_and_non_overlapping(base),
        "called `subtract_sorted` with `base` not sorted or overlapping"
    );
    debug_assert!(
        are_disjoint_and_sorted(exclusions),
        "called `subtract_sorted` with `exclusions` not sorted or not disjoint"
    );

    output.clear();

    let mut blocked_index = 0usize;
    for &source in base {
        while blocked_index < exclusions.len() && exclusions[blocked_index].end() < source.start()
        {
            blocked_index += 1;
        }

        // The piece still exposed to later exclusions.
        let mut tail = Some(source);
        let mut scan_index = blocked_index;
        while let (Some(current), Some(&blocked)) = (tail, exclusions.get(scan_index)) {
            if blocked.start() > current.end() {
                break;
            }

            tail = None;
            for piece in current.subtract(blocked) {
                if piece.start() >= blocked.end() {
                    tail = Some(piece);
                } else {
                    output.push(piece);
                }
            }
            scan_index += 1;
        }

        if let Some(piece) = tail {
            output.push(piece);
        }
    }

    debug_assert!(
        are_sorted_and_non_overlapping(output),
        "`subtract_sorted` output is not sorted and non-overlapping"
    );
}

/// Returns the free parts of `window` once every block in `busy` is removed.
///
/// `busy` may be unsorted and overlapping. The result is sorted; pieces only
/// meet where a zero-length busy block was cut out.
///
/// # Examples
///
/// ```rust
/// # use freebusy_core::{algorithm::free_within, math::block::Block};
///
/// let workday = Block::new(9, 17);
/// let busy = [Block::new(12, 13), Block::new(8, 10), Block::new(15, 16), Block::new(12, 14)];
/// assert_eq!(
///     free_within(workday, &busy),
///     vec![Block::new(10, 12), Block::new(14, 15), Block::new(16, 17)]
/// );
/// ```
pub fn free_within<T>(window: Block<T>, busy: &[Block<T>]) -> Vec<Block<T>>
where
    T: Scalar,
{
    let merged = Block::merge(busy.iter().copied());
    let mut output = Vec::new();
    subtract_sorted(&[window], &merged, &mut output);
    output
}

/// Returns the total length covered by `blocks`, counting shared parts once.
///
/// # Examples
///
/// ```rust
/// # use freebusy_core::{algorithm::covered_length, math::block::Block};
///
/// let busy = [Block::new(0, 4), Block::new(2, 6), Block::new(10, 11)];
/// assert_eq!(covered_length(&busy), 7);
/// ```
pub fn covered_length<T>(blocks: &[Block<T>]) -> T
where
    T: Scalar,
{
    Block::merge(blocks.iter().copied())
        .iter()
        .fold(T::zero(), |total, block| total + block.length())
}
