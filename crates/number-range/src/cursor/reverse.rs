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

//! # Reverse Cursor
//!
//! The mirror image of `ForwardCursor`: advancing subtracts the step,
//! retreating adds it, and the walk ends once the cursor has fallen strictly
//! below the end cursor. The end cursor therefore holds the *inclusive* lower
//! bound of a reverse walk.

use crate::cursor::iter::Cursor;
use crate::num::scalar::RangeScalar;
use std::ops::{Deref, DerefMut};

/// A cursor that walks downwards by a fixed step.
///
/// Unlike `ForwardCursor`, this type is `Default`: zero with a step of one.
///
/// # Examples
///
/// ```rust
/// # use number_range::cursor::reverse::ReverseCursor;
///
/// let end = ReverseCursor::new(0);
/// let mut cursor = ReverseCursor::with_step(9, 2);
/// let mut seen = Vec::new();
/// while cursor.is_before(&end) {
///     seen.push(*cursor);
///     cursor.advance();
/// }
/// assert_eq!(seen, vec![9, 7, 5, 3, 1]);
/// ```
#[derive(Debug, Clone, Copy, Hash)]
pub struct ReverseCursor<T>
where
    T: RangeScalar,
{
    value: T,
    step: u32,
}

impl<T> ReverseCursor<T>
where
    T: RangeScalar,
{
    /// Creates a cursor at `value` with a step of one.
    #[inline]
    pub fn new(value: T) -> Self {
        Self::with_step(value, 1)
    }

    /// Creates a cursor at `value` with the given step.
    #[inline]
    pub fn with_step(value: T, step: u32) -> Self {
        Self { value, step }
    }

    /// Returns the current position.
    #[inline]
    pub fn get(&self) -> T {
        self.value
    }

    /// Returns the step.
    #[inline]
    pub fn step(&self) -> u32 {
        self.step
    }

    /// Moves the cursor down by one step and returns it.
    ///
    /// # Panics
    ///
    /// Panics if the new position is not representable by `T`.
    #[inline]
    pub fn advance(&mut self) -> &mut Self {
        self.value = self.value.backward(self.step);
        self
    }

    /// Moves the cursor down by one step and returns its previous state.
    ///
    /// # Panics
    ///
    /// Panics if the new position is not representable by `T`.
    #[inline]
    pub fn post_advance(&mut self) -> Self {
        let previous = *self;
        self.advance();
        previous
    }

    /// Moves the cursor up by one step and returns it.
    ///
    /// # Panics
    ///
    /// Panics if the new position is not representable by `T`.
    #[inline]
    pub fn retreat(&mut self) -> &mut Self {
        self.value = self.value.forward(self.step);
        self
    }

    /// Moves the cursor up by one step and returns its previous state.
    ///
    /// # Panics
    ///
    /// Panics if the new position is not representable by `T`.
    #[inline]
    pub fn post_retreat(&mut self) -> Self {
        let previous = *self;
        self.retreat();
        previous
    }

    /// Moves the cursor down if the new position is representable.
    ///
    /// Returns `false` and leaves the cursor untouched otherwise.
    #[inline]
    pub fn try_advance(&mut self) -> bool {
        match self.value.checked_backward(self.step) {
            Some(next) => {
                self.value = next;
                true
            }
            None => false,
        }
    }

    /// Returns `true` if this cursor's value is strictly less than `end`'s.
    #[inline]
    pub fn has_reached(&self, end: &Self) -> bool {
        self.value < end.value
    }

    /// Negation of `has_reached`.
    #[inline]
    pub fn is_before(&self, end: &Self) -> bool {
        !self.has_reached(end)
    }
}

impl<T> Default for ReverseCursor<T>
where
    T: RangeScalar,
{
    #[inline]
    fn default() -> Self {
        Self::new(T::zero())
    }
}

impl<T> Deref for ReverseCursor<T>
where
    T: RangeScalar,
{
    type Target = T;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl<T> DerefMut for ReverseCursor<T>
where
    T: RangeScalar,
{
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.value
    }
}

impl<T> Cursor for ReverseCursor<T>
where
    T: RangeScalar,
{
    type Value = T;

    #[inline]
    fn get(&self) -> T {
        self.value
    }

    #[inline]
    fn advance(&mut self) -> &mut Self {
        ReverseCursor::advance(self)
    }

    #[inline]
    fn try_advance(&mut self) -> bool {
        ReverseCursor::try_advance(self)
    }

    #[inline]
    fn has_reached(&self, end: &Self) -> bool {
        ReverseCursor::has_reached(self, end)
    }
}

impl<T> std::fmt::Display for ReverseCursor<T>
where
    T: RangeScalar + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (-{})", self.value, self.step)
    }
}
