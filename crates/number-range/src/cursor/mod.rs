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

//! # Cursors
//!
//! Position-holding iteration objects. A cursor stores its current value and
//! a fixed step; it is advanced in place and compared against an end cursor
//! to decide when a walk is over.
//!
//! ## Submodules
//!
//! - `forward`: `ForwardCursor<T>`, which ascends and stops once it has
//!   reached or passed its end.
//! - `reverse`: `ReverseCursor<T>`, which descends and stops once it has
//!   fallen strictly below its end.
//! - `iter`: The `Cursor` protocol shared by both, and `CursorIter<C>`, which
//!   drives any begin/end cursor pair through Rust's `Iterator` protocol.
//!
//! ## Termination
//!
//! Neither cursor tests for exact equality with its end. A forward walk with
//! a step of 3 from 0 towards 10 visits 9 and then jumps to 12, which has
//! passed the end. This is why the comparisons are exposed as
//! `has_reached` / `is_before` rather than through `PartialEq`.

pub mod forward;
pub mod iter;
pub mod reverse;
