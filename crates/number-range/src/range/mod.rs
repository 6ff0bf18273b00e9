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

//! # Ranges
//!
//! Containers that hand out cursor pairs, and the adapter that flips a
//! container's reverse cursors into a regular begin/end pair.
//!
//! ## Submodules
//!
//! - `number_range`: `NumberRange<T>`, the stepped half-open range
//!   `[start, bound)`.
//! - `reversed`: `Reversed<'a, R>`, which borrows any `CursorRange` and
//!   iterates it backwards.
//! - `error`: `RangeError`, returned by the validating constructor.

pub mod error;
pub mod number_range;
pub mod reversed;

use crate::cursor::iter::{Cursor, CursorIter};

/// A container that produces forward and reverse cursor pairs.
///
/// Every call returns a fresh cursor; the container itself never changes
/// while it is walked.
pub trait CursorRange {
    /// Cursor type used for forward walks.
    type Forward: Cursor;
    /// Cursor type used for reverse walks.
    type Reverse: Cursor;

    /// Cursor at the first element of a forward walk.
    fn begin(&self) -> Self::Forward;
    /// Cursor holding the bound a forward walk stops at.
    fn end(&self) -> Self::Forward;
    /// Cursor at the first element of a reverse walk.
    fn rbegin(&self) -> Self::Reverse;
    /// Cursor holding the bound a reverse walk stops at.
    fn rend(&self) -> Self::Reverse;

    /// Iterator over the forward cursor pair.
    #[inline]
    fn forward_iter(&self) -> CursorIter<Self::Forward> {
        CursorIter::new(self.begin(), self.end())
    }

    /// Iterator over the reverse cursor pair.
    #[inline]
    fn reverse_iter(&self) -> CursorIter<Self::Reverse> {
        CursorIter::new(self.rbegin(), self.rend())
    }
}
