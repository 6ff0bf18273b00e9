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

//! # Number Range
//!
//! `NumberRange<T>` describes the stepped half-open range `[start, bound)`
//! and hands out the cursors that walk it.
//!
//! - Forward: `start, start + step, start + 2 * step, ...` while `< bound`.
//! - Reverse: `bound - 1, bound - 1 - step, ...` while `>= start`.
//!
//! The reverse walk always begins one unit below the bound, regardless of
//! the step. With a step greater than one it is therefore not necessarily
//! the forward walk reversed:
//!
//! ```rust
//! use number_range::NumberRange;
//!
//! let range = NumberRange::with_step(10, 0, 2);
//! assert_eq!(range.iter().collect::<Vec<_>>(), vec![0, 2, 4, 6, 8]);
//! assert_eq!(range.reversed().into_iter().collect::<Vec<_>>(), vec![9, 7, 5, 3, 1]);
//! ```
//!
//! ## Validation
//!
//! `new`, `with_start` and `with_step` accept any input. A start at or above
//! the bound yields an empty walk; a zero step yields a walk that never ends.
//! `try_new` rejects both up front.

use crate::cursor::forward::ForwardCursor;
use crate::cursor::iter::CursorIter;
use crate::cursor::reverse::ReverseCursor;
use crate::num::scalar::RangeScalar;
use crate::range::CursorRange;
use crate::range::error::RangeError;
use crate::range::reversed::Reversed;
use std::cmp::Ordering;

/// A stepped half-open range `[start, bound)`.
///
/// # Examples
///
/// ```rust
/// # use number_range::NumberRange;
///
/// let mut count = 5;
/// for value in NumberRange::with_start(10, 5) {
///     assert_eq!(value, count);
///     count += 1;
/// }
/// assert_eq!(count, 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NumberRange<T>
where
    T: RangeScalar,
{
    bound: T,
    start: T,
    step: u32,
}

impl<T> NumberRange<T>
where
    T: RangeScalar,
{
    /// Creates the range `[0, bound)` with a step of one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use number_range::NumberRange;
    /// let range = NumberRange::new(4u8);
    /// assert_eq!(range.iter().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
    /// ```
    #[inline]
    pub fn new(bound: T) -> Self {
        Self::with_step(bound, T::zero(), 1)
    }

    /// Creates the range `[start, bound)` with a step of one.
    #[inline]
    pub fn with_start(bound: T, start: T) -> Self {
        Self::with_step(bound, start, 1)
    }

    /// Creates the range `[start, bound)` walked in increments of `step`.
    ///
    /// Nothing is validated. The step is expected to be positive.
    #[inline]
    pub fn with_step(bound: T, start: T, step: u32) -> Self {
        if start.partial_cmp(&bound) != Some(Ordering::Less) {
            log::trace!("constructed an empty number range: start is not below the bound");
        }
        Self { bound, start, step }
    }

    /// Creates the range `[start, bound)` if the inputs describe a finite walk.
    ///
    /// # Errors
    ///
    /// Returns `RangeError::ZeroStep` if `step == 0` and
    /// `RangeError::StartAfterBound` if `start > bound`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use number_range::{NumberRange, RangeError};
    /// assert!(NumberRange::try_new(10, 0, 2).is_ok());
    /// assert!(NumberRange::try_new(10, 10, 1).is_ok());
    /// assert_eq!(NumberRange::try_new(10, 0, 0), Err(RangeError::ZeroStep));
    /// assert_eq!(NumberRange::try_new(10, 11, 1), Err(RangeError::StartAfterBound));
    /// ```
    pub fn try_new(bound: T, start: T, step: u32) -> Result<Self, RangeError> {
        let result = if step == 0 {
            Err(RangeError::ZeroStep)
        } else if start > bound {
            Err(RangeError::StartAfterBound)
        } else {
            Ok(Self::with_step(bound, start, step))
        };

        if let Err(err) = &result {
            log::debug!("rejected number range: {err}");
        }
        result
    }

    /// Returns the exclusive upper bound.
    #[inline]
    pub fn bound(&self) -> T {
        self.bound
    }

    /// Returns the inclusive lower bound.
    #[inline]
    pub fn start(&self) -> T {
        self.start
    }

    /// Returns the step.
    #[inline]
    pub fn step(&self) -> u32 {
        self.step
    }

    /// Returns `true` if neither a forward nor a reverse walk yields a value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use number_range::NumberRange;
    /// assert!(NumberRange::with_start(5, 5).is_empty());
    /// assert!(NumberRange::with_start(5, 9).is_empty());
    /// assert!(!NumberRange::new(1).is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start.partial_cmp(&self.bound) != Some(Ordering::Less)
    }

    /// Cursor at `start`, carrying the range's step.
    #[inline]
    pub fn begin(&self) -> ForwardCursor<T> {
        ForwardCursor::with_step(self.start, self.step)
    }

    /// Cursor at `bound`. It is only compared against, never advanced.
    #[inline]
    pub fn end(&self) -> ForwardCursor<T> {
        ForwardCursor::new(self.bound)
    }

    /// Cursor one unit below `bound`, carrying the range's step.
    ///
    /// # Panics
    ///
    /// Panics if `bound - 1` is not representable, e.g. a bound of `0u32`.
    /// `rev_iter` handles that case as an empty walk.
    #[inline]
    pub fn rbegin(&self) -> ReverseCursor<T> {
        ReverseCursor::with_step(self.bound.backward(1), self.step)
    }

    /// Cursor at `start`. It is only compared against, never advanced.
    #[inline]
    pub fn rend(&self) -> ReverseCursor<T> {
        ReverseCursor::new(self.start)
    }

    /// Iterator over the forward walk.
    #[inline]
    pub fn iter(&self) -> CursorIter<ForwardCursor<T>> {
        CursorIter::new(self.begin(), self.end())
    }

    /// Iterator over the reverse walk.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use number_range::NumberRange;
    /// let range = NumberRange::new(3u32);
    /// assert_eq!(range.rev_iter().collect::<Vec<_>>(), vec![2, 1, 0]);
    /// assert_eq!(NumberRange::new(0u32).rev_iter().count(), 0);
    /// ```
    #[inline]
    pub fn rev_iter(&self) -> CursorIter<ReverseCursor<T>> {
        match self.bound.checked_backward(1) {
            Some(last) => CursorIter::new(ReverseCursor::with_step(last, self.step), self.rend()),
            // Nothing lies below the bound, so nothing lies in [start, bound).
            None => CursorIter::exhausted(self.rend()),
        }
    }

    /// Borrows the range for reverse iteration.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use number_range::NumberRange;
    /// let range = NumberRange::with_start(10, 5);
    /// let mut count = 9;
    /// for value in range.reversed() {
    ///     assert_eq!(value, count);
    ///     count -= 1;
    /// }
    /// assert_eq!(count, 4);
    /// ```
    #[inline]
    pub fn reversed(&self) -> Reversed<'_, Self> {
        Reversed::new(self)
    }
}

impl<T> CursorRange for NumberRange<T>
where
    T: RangeScalar,
{
    type Forward = ForwardCursor<T>;
    type Reverse = ReverseCursor<T>;

    #[inline]
    fn begin(&self) -> Self::Forward {
        NumberRange::begin(self)
    }

    #[inline]
    fn end(&self) -> Self::Forward {
        NumberRange::end(self)
    }

    #[inline]
    fn rbegin(&self) -> Self::Reverse {
        NumberRange::rbegin(self)
    }

    #[inline]
    fn rend(&self) -> Self::Reverse {
        NumberRange::rend(self)
    }

    #[inline]
    fn forward_iter(&self) -> CursorIter<Self::Forward> {
        self.iter()
    }

    #[inline]
    fn reverse_iter(&self) -> CursorIter<Self::Reverse> {
        self.rev_iter()
    }
}

impl<T> IntoIterator for NumberRange<T>
where
    T: RangeScalar,
{
    type Item = T;
    type IntoIter = CursorIter<ForwardCursor<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for &NumberRange<T>
where
    T: RangeScalar,
{
    type Item = T;
    type IntoIter = CursorIter<ForwardCursor<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> From<std::ops::Range<T>> for NumberRange<T>
where
    T: RangeScalar,
{
    #[inline]
    fn from(range: std::ops::Range<T>) -> Self {
        Self::with_start(range.end, range.start)
    }
}

impl<T> std::fmt::Display for NumberRange<T>
where
    T: RangeScalar + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}) step {}", self.start, self.bound, self.step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_range_for() {
        let range = NumberRange::new(10);
        let mut count = 0;
        for value in range {
            assert_eq!(value, count);
            count += 1;
        }
        assert_eq!(count, 10);
    }

    #[test]
    fn test_reverse_range_for() {
        let range = NumberRange::new(10);
        let mut count = 9;
        for value in range.reversed() {
            assert_eq!(value, count);
            count -= 1;
        }
        assert_eq!(count, -1);
    }

    #[test]
    fn test_range_for_start_at_5() {
        let range = NumberRange::with_start(10, 5);
        assert_eq!(range.iter().collect::<Vec<_>>(), vec![5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_reverse_range_for_start_at_5() {
        let range = NumberRange::with_start(10, 5);
        assert_eq!(range.rev_iter().collect::<Vec<_>>(), vec![9, 8, 7, 6, 5]);
    }

    #[test]
    fn test_range_step_size_2() {
        let range = NumberRange::with_step(10, 0, 2);
        assert_eq!(range.iter().collect::<Vec<_>>(), vec![0, 2, 4, 6, 8]);
    }

    #[test]
    fn test_reverse_range_step_size_2_starts_below_bound() {
        let range = NumberRange::with_step(10, 0, 2);
        assert_eq!(range.rev_iter().collect::<Vec<_>>(), vec![9, 7, 5, 3, 1]);
    }

    #[test]
    fn test_range_with_char() {
        let range = NumberRange::with_start('Z', 'A');
        let expected: Vec<char> = ('A'..'Z').collect();
        assert_eq!(range.iter().collect::<Vec<_>>(), expected);
        assert_eq!(range.iter().last(), Some('Y'));
    }

    #[test]
    fn test_reverse_range_with_char() {
        let range = NumberRange::with_start('Z', 'A');
        let expected: Vec<char> = ('A'..'Z').rev().collect();
        assert_eq!(range.rev_iter().collect::<Vec<_>>(), expected);

        // Bound below start: nothing to walk in either direction.
        let inverted = NumberRange::with_start('A', 'Z');
        assert_eq!(inverted.rev_iter().count(), 0);
        assert_eq!(inverted.iter().count(), 0);
    }

    #[test]
    fn test_cursor_accessors() {
        let range = NumberRange::with_step(10i32, 2, 3);

        let begin = range.begin();
        assert_eq!(begin.get(), 2);
        assert_eq!(begin.step(), 3);

        let end = range.end();
        assert_eq!(end.get(), 10);
        assert_eq!(end.step(), 1);

        let rbegin = range.rbegin();
        assert_eq!(rbegin.get(), 9);
        assert_eq!(rbegin.step(), 3);

        let rend = range.rend();
        assert_eq!(rend.get(), 2);
        assert_eq!(rend.step(), 1);
    }

    #[test]
    fn test_manual_cursor_loop() {
        let range = NumberRange::with_step(10u32, 1, 4);
        let end = range.end();
        let mut cursor = range.begin();
        let mut seen = Vec::new();
        while cursor.is_before(&end) {
            seen.push(*cursor);
            cursor.advance();
        }
        assert_eq!(seen, vec![1, 5, 9]);
        // Overshoots the bound by step - 1 and still terminates.
        assert_eq!(*cursor, 13);
    }

    #[test]
    fn test_accessors_do_not_mutate() {
        let range = NumberRange::with_start(4i64, 1);
        let mut first = range.begin();
        first.advance().advance();
        assert_eq!(range.begin().get(), 1);
        assert_eq!(range.iter().count(), 3);
        assert_eq!(range.iter().count(), 3);
    }

    #[test]
    fn test_empty_and_inverted_ranges() {
        assert_eq!(NumberRange::new(0i32).iter().count(), 0);
        assert_eq!(NumberRange::new(0i32).rev_iter().count(), 0);
        assert_eq!(NumberRange::with_start(3i32, 8).iter().count(), 0);
        assert_eq!(NumberRange::with_start(3i32, 8).rev_iter().count(), 0);
    }

    #[test]
    fn test_unsigned_reverse_reaches_zero() {
        let range = NumberRange::new(5u8);
        assert_eq!(range.rev_iter().collect::<Vec<_>>(), vec![4, 3, 2, 1, 0]);

        let stepped = NumberRange::with_step(7usize, 0, 3);
        assert_eq!(stepped.rev_iter().collect::<Vec<_>>(), vec![6, 3, 0]);
    }

    #[test]
    fn test_unsigned_zero_bound_reverse_is_empty() {
        let range = NumberRange::new(0u16);
        assert_eq!(range.reversed().into_iter().count(), 0);
    }

    #[test]
    #[should_panic(expected = "left the representable range")]
    fn test_unsigned_zero_bound_rbegin_panics() {
        let _ = NumberRange::new(0u16).rbegin();
    }

    #[test]
    fn test_walk_up_to_type_max() {
        let range = NumberRange::with_start(u8::MAX, 250);
        assert_eq!(range.iter().collect::<Vec<_>>(), vec![250, 251, 252, 253, 254]);

        let stepped = NumberRange::with_step(u8::MAX, 200, 40);
        assert_eq!(stepped.iter().collect::<Vec<_>>(), vec![200, 240]);
    }

    #[test]
    fn test_signed_step_wider_than_type() {
        let range = NumberRange::with_step(127i8, -128, 200);
        assert_eq!(range.iter().collect::<Vec<_>>(), vec![-128, 72]);

        let range = NumberRange::with_step(101i8, -128, 200);
        assert_eq!(range.rev_iter().collect::<Vec<_>>(), vec![100, -100]);

        let mut cursor = ForwardCursor::with_step(-100i8, 200);
        cursor.advance();
        assert_eq!(*cursor, 100);
    }

    #[test]
    fn test_float_range() {
        let range = NumberRange::with_start(3.0f64, 0.5);
        assert_eq!(range.iter().collect::<Vec<_>>(), vec![0.5, 1.5, 2.5]);
        assert_eq!(range.rev_iter().collect::<Vec<_>>(), vec![2.0, 1.0]);
    }

    #[test]
    fn test_try_new() {
        let range = NumberRange::try_new(10i32, 5, 2).unwrap();
        assert_eq!(range.bound(), 10);
        assert_eq!(range.start(), 5);
        assert_eq!(range.step(), 2);

        assert!(NumberRange::try_new(10i32, 10, 1).unwrap().is_empty());
        assert_eq!(NumberRange::try_new(10i32, 0, 0), Err(RangeError::ZeroStep));
        assert_eq!(
            NumberRange::try_new(10i32, 11, 1),
            Err(RangeError::StartAfterBound)
        );
        // Zero step is reported first.
        assert_eq!(NumberRange::try_new(10i32, 11, 0), Err(RangeError::ZeroStep));
    }

    #[test]
    fn test_from_std_range() {
        let range = NumberRange::from(3u64..6);
        assert_eq!(range.start(), 3);
        assert_eq!(range.bound(), 6);
        assert_eq!(range.step(), 1);
        assert_eq!(range.iter().collect::<Vec<_>>(), vec![3, 4, 5]);
    }

    #[test]
    fn test_into_iterator_ref() {
        let range = NumberRange::new(3usize);
        for (count, value) in (&range).into_iter().enumerate() {
            assert_eq!(value, count);
        }
        // range is still usable here
        assert_eq!(range.bound(), 3);
    }

    #[test]
    fn test_cursor_range_trait() {
        fn collect_both<R>(range: &R) -> (Vec<i32>, Vec<i32>)
        where
            R: CursorRange<Forward = ForwardCursor<i32>, Reverse = ReverseCursor<i32>>,
        {
            (
                range.forward_iter().collect(),
                range.reverse_iter().collect(),
            )
        }

        let (forward, reverse) = collect_both(&NumberRange::with_start(4, 1));
        assert_eq!(forward, vec![1, 2, 3]);
        assert_eq!(reverse, vec![3, 2, 1]);
    }

    #[test]
    fn test_display() {
        let range = NumberRange::with_step(10, 5, 2);
        assert_eq!(format!("{}", range), "[5, 10) step 2");
    }

    #[test]
    fn test_random_ranges_match_std() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        for _ in 0..500 {
            let bound: i64 = rng.random_range(0..200);
            let start: i64 = rng.random_range(0..=bound + 5);
            let step: u32 = rng.random_range(1..10);
            let range = NumberRange::with_step(bound, start, step);

            let forward: Vec<i64> = (start..bound).step_by(step as usize).collect();
            let reverse: Vec<i64> = (start..bound).rev().step_by(step as usize).collect();

            assert_eq!(range.iter().collect::<Vec<_>>(), forward, "{range}");
            assert_eq!(range.rev_iter().collect::<Vec<_>>(), reverse, "{range}");
            assert_eq!(range.is_empty(), forward.is_empty(), "{range}");
        }
    }
}
