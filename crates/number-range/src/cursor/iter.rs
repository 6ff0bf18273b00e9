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

//! # Cursor Iteration
//!
//! `Cursor` is the minimal protocol a position needs to be walked: read the
//! current value, step once, and compare against an end position.
//! `CursorIter<C>` turns a begin/end pair of such cursors into a regular
//! `Iterator`, so ranges plug into `for` loops and iterator adaptors.
//!
//! ## Overflow
//!
//! `CursorIter` steps with `Cursor::try_advance`. When the next position is
//! not representable it lies beyond every bound of the type, so the walk is
//! over. This lets `[0, 10)` over `u32` be walked in reverse down to `0`
//! without wrapping around.
//!
//! ```rust
//! use number_range::cursor::forward::ForwardCursor;
//! use number_range::cursor::iter::CursorIter;
//!
//! let iter = CursorIter::new(ForwardCursor::with_step(1u8, 100), ForwardCursor::new(u8::MAX));
//! assert_eq!(iter.collect::<Vec<_>>(), vec![1, 101, 201]);
//! ```

use crate::num::scalar::RangeScalar;
use std::iter::FusedIterator;

/// The protocol shared by forward and reverse cursors.
pub trait Cursor: Copy {
    /// The scalar the cursor walks over.
    type Value: RangeScalar;

    /// Returns the current position.
    fn get(&self) -> Self::Value;

    /// Takes one step in the cursor's direction and returns the cursor.
    ///
    /// # Panics
    ///
    /// Panics if the new position is not representable.
    fn advance(&mut self) -> &mut Self;

    /// Takes one step in the cursor's direction if the result is representable.
    ///
    /// Returns `false` and leaves the cursor unchanged otherwise.
    fn try_advance(&mut self) -> bool;

    /// Returns `true` once `self` has reached or passed `end` in the cursor's direction.
    ///
    /// This is not an equivalence relation; `end` is expected to hold the bound.
    fn has_reached(&self, end: &Self) -> bool;

    /// Returns `true` while `self` has not yet reached `end`.
    #[inline]
    fn is_before(&self, end: &Self) -> bool {
        !self.has_reached(end)
    }
}

/// An iterator that walks a begin cursor until it reaches an end cursor.
///
/// # Examples
///
/// ```rust
/// # use number_range::cursor::iter::CursorIter;
/// # use number_range::cursor::reverse::ReverseCursor;
///
/// let iter = CursorIter::new(ReverseCursor::new(3u32), ReverseCursor::new(0));
/// assert_eq!(iter.collect::<Vec<_>>(), vec![3, 2, 1, 0]);
/// ```
#[derive(Debug, Clone)]
pub struct CursorIter<C>
where
    C: Cursor,
{
    current: C,
    end: C,
    exhausted: bool,
}

impl<C> CursorIter<C>
where
    C: Cursor,
{
    /// Creates an iterator walking from `begin` towards `end`.
    #[inline]
    pub fn new(begin: C, end: C) -> Self {
        Self {
            current: begin,
            end,
            exhausted: false,
        }
    }

    /// Creates an iterator that yields nothing.
    ///
    /// Used when a begin position cannot be represented at all.
    #[inline]
    pub fn exhausted(end: C) -> Self {
        Self {
            current: end,
            end,
            exhausted: true,
        }
    }

    /// Returns the cursor the next item will be read from.
    #[inline]
    pub fn cursor(&self) -> &C {
        &self.current
    }
}

impl<C> Iterator for CursorIter<C>
where
    C: Cursor,
{
    type Item = C::Value;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted || self.current.has_reached(&self.end) {
            self.exhausted = true;
            return None;
        }

        let value = self.current.get();
        if !self.current.try_advance() {
            self.exhausted = true;
        }
        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.exhausted || self.current.has_reached(&self.end) {
            (0, Some(0))
        } else {
            (1, None)
        }
    }
}

impl<C> FusedIterator for CursorIter<C> where C: Cursor {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::{forward::ForwardCursor, reverse::ReverseCursor};

    #[test]
    fn test_forward_walk() {
        let iter = CursorIter::new(ForwardCursor::new(2i32), ForwardCursor::new(6));
        assert_eq!(iter.collect::<Vec<_>>(), vec![2, 3, 4, 5]);
    }

    #[test]
    fn test_forward_walk_overshoots_end() {
        let iter = CursorIter::new(ForwardCursor::with_step(0i32, 4), ForwardCursor::new(10));
        assert_eq!(iter.collect::<Vec<_>>(), vec![0, 4, 8]);
    }

    #[test]
    fn test_reverse_walk() {
        let iter = CursorIter::new(ReverseCursor::with_step(9i64, 3), ReverseCursor::new(1));
        assert_eq!(iter.collect::<Vec<_>>(), vec![9, 6, 3]);
    }

    #[test]
    fn test_begin_past_end_yields_nothing() {
        let mut iter = CursorIter::new(ForwardCursor::new(7u16), ForwardCursor::new(3));
        assert_eq!(iter.size_hint(), (0, Some(0)));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_reverse_walk_to_unsigned_zero_terminates() {
        let iter = CursorIter::new(ReverseCursor::new(2u8), ReverseCursor::new(0));
        assert_eq!(iter.collect::<Vec<_>>(), vec![2, 1, 0]);
    }

    #[test]
    fn test_forward_walk_to_type_max_terminates() {
        let iter = CursorIter::new(
            ForwardCursor::with_step(250u8, 2),
            ForwardCursor::new(u8::MAX),
        );
        assert_eq!(iter.collect::<Vec<_>>(), vec![250, 252, 254]);
    }

    #[test]
    fn test_exhausted() {
        let mut iter = CursorIter::exhausted(ReverseCursor::new(0u32));
        assert_eq!(iter.size_hint(), (0, Some(0)));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_fused_iterator() {
        let mut iter = CursorIter::new(ReverseCursor::new(0u32), ReverseCursor::new(0));
        assert_eq!(iter.next(), Some(0));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);

        fn assert_fused<I: FusedIterator>(_: I) {}
        assert_fused(iter);
    }

    #[test]
    fn test_cursor_tracks_position() {
        let mut iter = CursorIter::new(ForwardCursor::with_step(0i32, 5), ForwardCursor::new(20));
        iter.next();
        iter.next();
        assert_eq!(iter.cursor().get(), 10);
    }

    #[test]
    fn test_generic_advance() {
        fn step_twice<C: Cursor>(mut cursor: C) -> C::Value {
            cursor.advance().advance();
            cursor.get()
        }

        assert_eq!(step_twice(ForwardCursor::with_step(1i32, 3)), 7);
        assert_eq!(step_twice(ReverseCursor::with_step(1i32, 3)), -5);
        assert_eq!(step_twice(ForwardCursor::new('x')), 'z');
    }

    #[test]
    fn test_composition() {
        let iter = CursorIter::new(ForwardCursor::new(1u64), ForwardCursor::new(5));
        let sum: u64 = iter.map(|v| v * v).sum();
        assert_eq!(sum, 1 + 4 + 9 + 16);
    }
}
