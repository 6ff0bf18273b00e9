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

//! # Range Scalars
//!
//! `RangeScalar` describes the values a range can walk over. Stepping is
//! always expressed as an unsigned `u32` distance, so the same step can be
//! applied to integers, floats, and characters alike.
//!
//! Two flavors of stepping exist:
//!
//! - `checked_forward` / `checked_backward` return `None` when the stepped
//!   value would leave the representable domain of the type.
//! - `forward` / `backward` assume the caller keeps the walk in range and
//!   panic otherwise. Floats never panic; they follow IEEE arithmetic.
//!
//! ## Characters
//!
//! `char` stepping skips the surrogate block `U+D800..=U+DFFF`, so every value
//! produced by a step is a valid `char`.
//!
//! ```rust
//! use number_range::num::scalar::RangeScalar;
//!
//! assert_eq!('A'.forward(2), 'C');
//! assert_eq!('\u{D7FF}'.forward(1), '\u{E000}');
//! assert_eq!(0u8.checked_backward(1), None);
//! ```

use num_traits::{NumCast, PrimInt};

/// A scalar value that a range cursor can step over.
pub trait RangeScalar: Copy + PartialOrd {
    /// Returns the zero-equivalent of the type (`0`, `0.0` or `'\0'`).
    fn zero() -> Self;

    /// Steps forward by `step`, returning `None` if the result is not representable.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use number_range::num::scalar::RangeScalar;
    /// assert_eq!(250u8.checked_forward(5), Some(255));
    /// assert_eq!(250u8.checked_forward(6), None);
    /// ```
    fn checked_forward(self, step: u32) -> Option<Self>;

    /// Steps backward by `step`, returning `None` if the result is not representable.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use number_range::num::scalar::RangeScalar;
    /// assert_eq!(5i8.checked_backward(10), Some(-5));
    /// assert_eq!(5u8.checked_backward(10), None);
    /// ```
    fn checked_backward(self, step: u32) -> Option<Self>;

    /// Steps forward by `step`.
    ///
    /// # Panics
    ///
    /// Panics if the result is not representable.
    #[inline]
    fn forward(self, step: u32) -> Self {
        match self.checked_forward(step) {
            Some(next) => next,
            None => panic!("stepping forward by {step} left the representable range"),
        }
    }

    /// Steps backward by `step`.
    ///
    /// # Panics
    ///
    /// Panics if the result is not representable.
    #[inline]
    fn backward(self, step: u32) -> Self {
        match self.checked_backward(step) {
            Some(next) => next,
            None => panic!("stepping backward by {step} left the representable range"),
        }
    }
}

// A step that does not fit into `T` only happens for types narrower than
// `u32`, whose values all fit into `i128`. The result may still fit into a
// signed `T` (`-100i8 + 200`), so the step is applied in `i128` instead.
#[inline(always)]
fn checked_forward_int<T>(value: T, step: u32) -> Option<T>
where
    T: PrimInt,
{
    match <T as NumCast>::from(step) {
        Some(step) => value.checked_add(&step),
        None => value
            .to_i128()
            .and_then(|value| value.checked_add(<i128 as From<u32>>::from(step)))
            .and_then(|next| <T as NumCast>::from(next)),
    }
}

#[inline(always)]
fn checked_backward_int<T>(value: T, step: u32) -> Option<T>
where
    T: PrimInt,
{
    match <T as NumCast>::from(step) {
        Some(step) => value.checked_sub(&step),
        None => value
            .to_i128()
            .and_then(|value| value.checked_sub(<i128 as From<u32>>::from(step)))
            .and_then(|next| <T as NumCast>::from(next)),
    }
}

macro_rules! impl_range_scalar_for_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl RangeScalar for $t {
                #[inline(always)]
                fn zero() -> Self {
                    <$t as num_traits::Zero>::zero()
                }

                #[inline(always)]
                fn checked_forward(self, step: u32) -> Option<Self> {
                    checked_forward_int(self, step)
                }

                #[inline(always)]
                fn checked_backward(self, step: u32) -> Option<Self> {
                    checked_backward_int(self, step)
                }
            }
        )*
    };
}

// Floats saturate to infinity and lose precision instead of overflowing.
// The checked variants report both as "not representable", otherwise a walk
// could stall on a value that no longer changes.
macro_rules! impl_range_scalar_for_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl RangeScalar for $t {
                #[inline(always)]
                fn zero() -> Self {
                    0.0
                }

                #[inline(always)]
                fn checked_forward(self, step: u32) -> Option<Self> {
                    let next = self + step as $t;
                    (next.is_finite() && next > self).then_some(next)
                }

                #[inline(always)]
                fn checked_backward(self, step: u32) -> Option<Self> {
                    let next = self - step as $t;
                    (next.is_finite() && next < self).then_some(next)
                }

                #[inline(always)]
                fn forward(self, step: u32) -> Self {
                    self + step as $t
                }

                #[inline(always)]
                fn backward(self, step: u32) -> Self {
                    self - step as $t
                }
            }
        )*
    };
}

impl_range_scalar_for_int!(u8, u16, u32, u64, u128, usize);
impl_range_scalar_for_int!(i8, i16, i32, i64, i128, isize);
impl_range_scalar_for_float!(f32, f64);

const SURROGATE_START: u32 = 0xD800;
const SURROGATE_END: u32 = 0xE000;
const SURROGATE_LEN: u32 = SURROGATE_END - SURROGATE_START;

impl RangeScalar for char {
    #[inline(always)]
    fn zero() -> Self {
        '\0'
    }

    #[inline]
    fn checked_forward(self, step: u32) -> Option<Self> {
        let start = self as u32;
        let mut next = start.checked_add(step)?;
        if start < SURROGATE_START && next >= SURROGATE_START {
            next = next.checked_add(SURROGATE_LEN)?;
        }
        char::from_u32(next)
    }

    #[inline]
    fn checked_backward(self, step: u32) -> Option<Self> {
        let start = self as u32;
        let mut next = start.checked_sub(step)?;
        if start >= SURROGATE_END && next < SURROGATE_END {
            next = next.checked_sub(SURROGATE_LEN)?;
        }
        char::from_u32(next)
    }
}
