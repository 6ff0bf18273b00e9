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
//! Stepped numeric ranges that plug into `for` loops and iterator adaptors,
//! walkable forwards and backwards, over integers, floats and `char`.
//!
//! ## Modules
//!
//! - `num`: The `RangeScalar` trait describing values a range can step over,
//!   with checked and unchecked stepping by an unsigned distance.
//! - `cursor`: `ForwardCursor<T>` and `ReverseCursor<T>`, bidirectional
//!   position holders with an asymmetric "has reached the bound" test, plus
//!   the `Cursor` protocol and the `CursorIter<C>` iterator that drives them.
//! - `range`: `NumberRange<T>`, the stepped half-open range `[start, bound)`
//!   producing begin/end and rbegin/rend cursors, the `CursorRange` trait, the
//!   borrowing `Reversed<'a, R>` adapter, and `RangeError`.
//!
//! ## Usage
//!
//! ```rust
//! use number_range::NumberRange;
//!
//! let range = NumberRange::with_step(10, 0, 2);
//!
//! let forward: Vec<i32> = range.iter().collect();
//! assert_eq!(forward, vec![0, 2, 4, 6, 8]);
//!
//! let mut backward = Vec::new();
//! for value in range.reversed() {
//!     backward.push(value);
//! }
//! assert_eq!(backward, vec![9, 7, 5, 3, 1]);
//! ```
//!
//! ## Caller Responsibilities
//!
//! The unchecked constructors and the cursor primitives do no validation.
//! An inverted range is simply empty, and stepping a cursor out of the range
//! of its scalar type panics. Iterators stop at the edge of the type instead.

pub mod cursor;
pub mod num;
pub mod range;

pub use cursor::forward::ForwardCursor;
pub use cursor::iter::{Cursor, CursorIter};
pub use cursor::reverse::ReverseCursor;
pub use num::scalar::RangeScalar;
pub use range::CursorRange;
pub use range::error::RangeError;
pub use range::number_range::NumberRange;
pub use range::reversed::Reversed;
