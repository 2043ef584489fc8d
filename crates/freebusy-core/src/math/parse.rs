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

//! Text form of a block.
//!
//! Blocks display as `[start, end]` and parse back from that form. The parser
//! also accepts the inclusive range form `start..=end` and a bare
//! `start, end` pair, with arbitrary surrounding whitespace. Reversed bounds
//! are normalized exactly like [`Block::new`].

use crate::{math::block::Block, num::scalar::Scalar};
use std::str::FromStr;

/// Which bound of a block a token was meant to describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundSide {
    /// The lower bound, written first.
    Start,
    /// The upper bound, written second.
    End,
}

impl std::fmt::Display for BoundSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoundSide::Start => f.write_str("start"),
            BoundSide::End => f.write_str("end"),
        }
    }
}

/// Details about a bound that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseBoundError {
    /// The string token that failed to parse.
    pub token: String,
    /// The bound the token stood for.
    pub side: BoundSide,
    /// The name of the scalar type we tried to parse into (e.g., "i64").
    pub type_name: &'static str,
}

/// The error type for parsing a [`Block`] from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseBlockError {
    /// The input was empty or whitespace only.
    Empty,
    /// An opening `[` without a closing `]`, or the other way around.
    UnbalancedBracket,
    /// Neither `..=` nor `,` separates the two bounds.
    MissingSeparator,
    /// A bound could not be parsed into the scalar type.
    InvalidBound(ParseBoundError),
    /// The bounds parsed but cannot be ordered (e.g. `NaN`).
    Incomparable,
}

impl std::fmt::Display for ParseBlockError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseBlockError::Empty => write!(f, "cannot parse a block from empty input"),
            ParseBlockError::UnbalancedBracket => write!(f, "unbalanced brackets around block"),
            ParseBlockError::MissingSeparator => {
                write!(f, "expected `,` or `..=` between block bounds")
            }
            ParseBlockError::InvalidBound(e) => write!(
                f,
                "invalid {} bound `{}`: expected a value of type {}",
                e.side, e.token, e.type_name
            ),
            ParseBlockError::Incomparable => write!(f, "block bounds cannot be compared"),
        }
    }
}

impl std::error::Error for ParseBlockError {}

fn parse_bound<T>(token: &str, side: BoundSide) -> Result<T, ParseBlockError>
where
    T: FromStr,
{
    let token = token.trim();
    token.parse::<T>().map_err(|_| {
        ParseBlockError::InvalidBound(ParseBoundError {
            token: token.to_string(),
            side,
            type_name: std::any::type_name::<T>(),
        })
    })
}

impl<T> FromStr for Block<T>
where
    T: Scalar + FromStr,
{
    type Err = ParseBlockError;

    /// Parses `[a, b]`, `a..=b` or `a, b`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use freebusy_core::math::block::Block;
    ///
    /// let block: Block<i32> = "[9, 17]".parse().unwrap();
    /// assert_eq!(block, Block::new(9, 17));
    ///
    /// let block: Block<f64> = " 1.5..=0.5 ".parse().unwrap();
    /// assert_eq!(block, Block::new(0.5, 1.5));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseBlockError::Empty);
        }

        let inner = match (trimmed.strip_prefix('['), trimmed.ends_with(']')) {
            (Some(rest), true) => &rest[..rest.len() - 1],
            (None, false) => trimmed,
            _ => return Err(ParseBlockError::UnbalancedBracket),
        };

        let (start, end) = inner
            .split_once("..=")
            .or_else(|| inner.split_once(','))
            .ok_or(ParseBlockError::MissingSeparator)?;

        let start = parse_bound::<T>(start, BoundSide::Start)?;
        let end = parse_bound::<T>(end, BoundSide::End)?;
        if start.partial_cmp(&end).is_none() {
            return Err(ParseBlockError::Incomparable);
        }
        Ok(Block::new(start, end))
    }
}
