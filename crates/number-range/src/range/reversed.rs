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

//! # Reverse Adapter
//!
//! `Reversed<'a, R>` borrows a `CursorRange` and presents its reverse cursor
//! pair as a plain begin/end pair, so the same `for` loop body can walk a
//! range in either direction.
//!
//! ```rust
//! use number_range::{NumberRange, Reversed};
//!
//! fn collect<I: IntoIterator<Item = i32>>(values: I) -> Vec<i32> {
//!     values.into_iter().collect()
//! }
//!
//! let range = NumberRange::with_start(4, 1);
//! assert_eq!(collect(&range), vec![1, 2, 3]);
//! assert_eq!(collect(Reversed::new(&range)), vec![3, 2, 1]);
//! ```

use crate::cursor::iter::{Cursor, CursorIter};
use crate::range::CursorRange;

/// A borrowed view that walks a range backwards.
///
/// The adapter never copies the range; it cannot outlive it.
#[derive(Debug)]
pub struct Reversed<'a, R>
where
    R: ?Sized,
{
    range: &'a R,
}

impl<'a, R> Reversed<'a, R>
where
    R: ?Sized,
{
    /// Binds the adapter to `range`.
    #[inline]
    pub fn new(range: &'a R) -> Self {
        Self { range }
    }

    /// Returns the bound range.
    #[inline]
    pub fn range(&self) -> &'a R {
        self.range
    }
}

impl<R> Reversed<'_, R>
where
    R: CursorRange + ?Sized,
{
    /// Forwards to the range's `rbegin`.
    #[inline]
    pub fn begin(&self) -> R::Reverse {
        self.range.rbegin()
    }

    /// Forwards to the range's `rend`.
    #[inline]
    pub fn end(&self) -> R::Reverse {
        self.range.rend()
    }

    /// Iterator over the reverse walk.
    #[inline]
    pub fn iter(&self) -> CursorIter<R::Reverse> {
        self.range.reverse_iter()
    }
}

impl<R> Clone for Reversed<'_, R>
where
    R: ?Sized,
{
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Reversed<'_, R> where R: ?Sized {}

impl<'a, R> From<&'a R> for Reversed<'a, R>
where
    R: ?Sized,
{
    #[inline]
    fn from(range: &'a R) -> Self {
        Self::new(range)
    }
}

impl<R> IntoIterator for Reversed<'_, R>
where
    R: CursorRange + ?Sized,
{
    type Item = <R::Reverse as Cursor>::Value;
    type IntoIter = CursorIter<R::Reverse>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<R> IntoIterator for &Reversed<'_, R>
where
    R: CursorRange + ?Sized,
{
    type Item = <R::Reverse as Cursor>::Value;
    type IntoIter = CursorIter<R::Reverse>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
