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

//! # Forward Cursor
//!
//! An ascending cursor. Advancing adds the step, retreating subtracts it, and
//! the walk ends once the cursor has reached *or passed* the end cursor.
//!
//! ```rust
//! use number_range::cursor::forward::ForwardCursor;
//!
//! let end = ForwardCursor::new(10);
//! let mut cursor = ForwardCursor::with_step(0, 3);
//! let mut seen = Vec::new();
//! while cursor.is_before(&end) {
//!     seen.push(*cursor);
//!     cursor.advance();
//! }
//! assert_eq!(seen, vec![0, 3, 6, 9]);
//! assert_eq!(*cursor, 12);
//! ```

use crate::cursor::iter::Cursor;
use crate::num::scalar::RangeScalar;
use std::ops::{Deref, DerefMut};

/// A cursor that walks upwards by a fixed step.
///
/// Stepping performs no bounds checking. Use `try_advance` when the walk may
/// run into the limits of `T`.
#[derive(Debug, Clone, Copy, Hash)]
pub struct ForwardCursor<T>
where
    T: RangeScalar,
{
    value: T,
    step: u32,
}

impl<T> ForwardCursor<T>
where
    T: RangeScalar,
{
    /// Creates a cursor at `value` with a step of one.
    #[inline]
    pub fn new(value: T) -> Self {
        Self::with_step(value, 1)
    }

    /// Creates a cursor at `value` with the given step.
    ///
    /// The step is expected to be positive.
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

    /// Moves the cursor forward by one step and returns it.
    ///
    /// # Panics
    ///
    /// Panics if the new position is not representable by `T`.
    #[inline]
    pub fn advance(&mut self) -> &mut Self {
        self.value = self.value.forward(self.step);
        self
    }

    /// Moves the cursor forward by one step and returns its previous state.
    ///
    /// # Panics
    ///
    /// Panics if the new position is not representable by `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use number_range::cursor::forward::ForwardCursor;
    /// let mut cursor = ForwardCursor::with_step(5u32, 2);
    /// let previous = cursor.post_advance();
    /// assert_eq!(previous.get(), 5);
    /// assert_eq!(cursor.get(), 7);
    /// ```
    #[inline]
    pub fn post_advance(&mut self) -> Self {
        let previous = *self;
        self.advance();
        previous
    }

    /// Moves the cursor back by one step and returns it.
    ///
    /// # Panics
    ///
    /// Panics if the new position is not representable by `T`.
    #[inline]
    pub fn retreat(&mut self) -> &mut Self {
        self.value = self.value.backward(self.step);
        self
    }

    /// Moves the cursor back by one step and returns its previous state.
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

    /// Moves the cursor forward if the new position is representable.
    ///
    /// Returns `false` and leaves the cursor untouched otherwise.
    #[inline]
    pub fn try_advance(&mut self) -> bool {
        match self.value.checked_forward(self.step) {
            Some(next) => {
                self.value = next;
                true
            }
            None => false,
        }
    }

    /// Returns `true` if this cursor's value is greater than or equal to `end`'s.
    ///
    /// This is the loop-termination test against an end cursor holding the
    /// exclusive bound. It is not symmetric.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use number_range::cursor::forward::ForwardCursor;
    /// let end = ForwardCursor::new(10);
    /// assert!(ForwardCursor::new(10).has_reached(&end));
    /// assert!(ForwardCursor::new(11).has_reached(&end));
    /// assert!(!ForwardCursor::new(9).has_reached(&end));
    /// assert!(!end.has_reached(&ForwardCursor::new(11)));
    /// ```
    #[inline]
    pub fn has_reached(&self, end: &Self) -> bool {
        self.value >= end.value
    }

    /// Negation of `has_reached`.
    #[inline]
    pub fn is_before(&self, end: &Self) -> bool {
        !self.has_reached(end)
    }
}

impl<T> Deref for ForwardCursor<T>
where
    T: RangeScalar,
{
    type Target = T;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl<T> DerefMut for ForwardCursor<T>
where
    T: RangeScalar,
{
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.value
    }
}

impl<T> Cursor for ForwardCursor<T>
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
        ForwardCursor::advance(self)
    }

    #[inline]
    fn try_advance(&mut self) -> bool {
        ForwardCursor::try_advance(self)
    }

    #[inline]
    fn has_reached(&self, end: &Self) -> bool {
        ForwardCursor::has_reached(self, end)
    }
}

impl<T> std::fmt::Display for ForwardCursor<T>
where
    T: RangeScalar + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (+{})", self.value, self.step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction() {
        let cursor = ForwardCursor::new(4i32);
        assert_eq!(cursor.get(), 4);
        assert_eq!(cursor.step(), 1);

        let cursor = ForwardCursor::with_step(4i32, 3);
        assert_eq!(*cursor, 4);
        assert_eq!(cursor.step(), 3);
    }

    #[test]
    fn test_pre_advance_and_retreat() {
        let mut cursor = ForwardCursor::with_step(10i64, 5);
        assert_eq!(cursor.advance().get(), 15);
        assert_eq!(cursor.advance().advance().get(), 25);
        assert_eq!(cursor.retreat().get(), 20);
    }

    #[test]
    fn test_post_advance_and_retreat() {
        let mut cursor = ForwardCursor::with_step(10i64, 5);
        assert_eq!(cursor.post_advance().get(), 10);
        assert_eq!(cursor.get(), 15);
        assert_eq!(cursor.post_retreat().get(), 15);
        assert_eq!(cursor.get(), 10);
    }

    #[test]
    fn test_deref_mut_moves_position() {
        let mut cursor = ForwardCursor::new(1u32);
        *cursor = 8;
        cursor.advance();
        assert_eq!(*cursor, 9);
    }

    #[test]
    fn test_reached_or_passed_is_asymmetric() {
        let a = ForwardCursor::new(3);
        let b = ForwardCursor::new(7);
        assert!(b.has_reached(&a));
        assert!(!a.has_reached(&b));
        assert!(a.is_before(&b));
        assert!(!b.is_before(&a));
        // Equal positions count as reached from either side.
        assert!(a.has_reached(&ForwardCursor::new(3)));
    }

    #[test]
    fn test_end_step_is_ignored_by_comparison() {
        let end = ForwardCursor::with_step(10u8, 200);
        assert!(ForwardCursor::new(10u8).has_reached(&end));
        assert!(ForwardCursor::new(9u8).is_before(&end));
    }

    #[test]
    fn test_try_advance() {
        let mut cursor = ForwardCursor::with_step(250u8, 4);
        assert!(cursor.try_advance());
        assert_eq!(cursor.get(), 254);
        assert!(!cursor.try_advance());
        assert_eq!(cursor.get(), 254);
    }

    #[test]
    #[should_panic(expected = "left the representable range")]
    fn test_advance_overflow_panics() {
        let mut cursor = ForwardCursor::new(i8::MAX);
        cursor.advance();
    }

    #[test]
    fn test_char_cursor() {
        let mut cursor = ForwardCursor::with_step('a', 2);
        cursor.advance();
        assert_eq!(*cursor, 'c');
        assert!(cursor.has_reached(&ForwardCursor::new('b')));
    }

    #[test]
    fn test_display() {
        let cursor = ForwardCursor::with_step(3i32, 2);
        assert_eq!(format!("{}", cursor), "3 (+2)");
    }
}
