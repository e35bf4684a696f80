// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Monomorphization-forcing capability checks.
//!
//! Probing never hard-fails the build: an unsatisfied optional bound just
//! leaves a synthesized item out of the candidate set. These macros are the
//! opposite surface, the *explicitly requested* hard check. Each expands to a
//! `const` item that instantiates one of the [`require`] functions below, so
//! a false claim fails to compile at the assertion site with the unsatisfied
//! bound in the error, and a true claim compiles to nothing.
//!
//! [`require`]: require_cursor

use crate::{BidirectionalCursor, ContiguousCursor, Cursor, ForwardCursor,
            RandomAccessCursor, RangeFacade, ReadCursor, RefCursor, Sentinel};

/// Instantiable only when `C` is a cursor at all.
pub const fn require_cursor<C: Cursor>() {}

/// Instantiable only when `C` has forward strength.
pub const fn require_forward<C: ForwardCursor>() {}

/// Instantiable only when `C` has a user decrement.
pub const fn require_bidirectional<C: BidirectionalCursor>() {}

/// Instantiable only when `C` has the signed jump primitives.
pub const fn require_random_access<C: RandomAccessCursor>() {}

/// Instantiable only when `C` declares contiguous layout.
pub const fn require_contiguous<C: ContiguousCursor>() {}

/// Instantiable only when `C` yields elements by value.
pub const fn require_read_access<C: ReadCursor>() {}

/// Instantiable only when `C` lends elements out of storage.
pub const fn require_ref_access<'s, C: RefCursor<'s>>()
where
    <C as Cursor>::Item: 's,
{
}

/// Instantiable only when `C` yields `I` elements.
pub const fn require_item<C: Cursor<Item = I>, I>() {}

/// Instantiable only when `S` can bound a traversal of `C`.
pub const fn require_sentinel<C: Cursor, S: Sentinel<C>>() {}

/// Instantiable only when `R` is a common range (its two endpoints are the
/// same cursor type).
pub const fn require_common_range<R>()
where
    R: RangeFacade<End = <R as RangeFacade>::Cursor>,
{
}

/// Asserts at compile time that a cursor type has (at least) the named
/// strength.
///
/// The strength keyword is one of `single_pass`, `forward`, `bidirectional`,
/// `random_access`, `contiguous`. The check costs nothing at runtime and
/// holds anywhere items are legal, which makes it a declaration-site guard as
/// much as a test helper.
///
/// # Example Usage
/// ```
/// use r3bl_seq_facade::{Cursor, assert_cursor_strength};
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Turnstile {
///     count: u32,
/// }
///
/// impl Cursor for Turnstile {
///     type Item = u32;
///     fn step(&mut self) { self.count += 1; }
/// }
///
/// impl r3bl_seq_facade::ForwardCursor for Turnstile {}
///
/// assert_cursor_strength!(Turnstile, forward);
/// assert_cursor_strength!(Turnstile, single_pass);
/// ```
///
/// A false claim fails the build at the assertion site:
///
/// ```rust,compile_fail
/// use r3bl_seq_facade::{Cursor, assert_cursor_strength};
///
/// #[derive(Debug, PartialEq)]
/// struct Tally {
///     n: u8,
/// }
///
/// impl Cursor for Tally {
///     type Item = u8;
///     fn step(&mut self) { self.n += 1; }
/// }
///
/// // Compiler error - `Tally` does not implement `ForwardCursor`.
/// assert_cursor_strength!(Tally, forward);
/// ```
#[macro_export]
macro_rules! assert_cursor_strength {
    ($type:ty, single_pass) => {
        const _: () = {
            let _ = $crate::probe::require_cursor::<$type>;
        };
    };
    ($type:ty, forward) => {
        const _: () = {
            let _ = $crate::probe::require_forward::<$type>;
        };
    };
    ($type:ty, bidirectional) => {
        const _: () = {
            let _ = $crate::probe::require_bidirectional::<$type>;
        };
    };
    ($type:ty, random_access) => {
        const _: () = {
            let _ = $crate::probe::require_random_access::<$type>;
        };
    };
    ($type:ty, contiguous) => {
        const _: () = {
            let _ = $crate::probe::require_contiguous::<$type>;
        };
    };
}

/// Asserts at compile time that a cursor type yields the named element type.
///
/// # Example Usage
/// ```
/// use r3bl_seq_facade::{Cursor, assert_cursor_item};
///
/// #[derive(Debug, PartialEq)]
/// struct Dial {
///     digit: char,
/// }
///
/// impl Cursor for Dial {
///     type Item = char;
///     fn step(&mut self) {}
/// }
///
/// assert_cursor_item!(Dial, char);
/// ```
///
/// ```rust,compile_fail
/// use r3bl_seq_facade::{Cursor, assert_cursor_item};
///
/// #[derive(Debug, PartialEq)]
/// struct Dial {
///     digit: char,
/// }
///
/// impl Cursor for Dial {
///     type Item = char;
///     fn step(&mut self) {}
/// }
///
/// // Compiler error - `Dial` yields `char`, not `u8`.
/// assert_cursor_item!(Dial, u8);
/// ```
#[macro_export]
macro_rules! assert_cursor_item {
    ($type:ty, $item:ty) => {
        const _: () = {
            let _ = $crate::probe::require_item::<$type, $item>;
        };
    };
}

/// Asserts at compile time that a cursor type has the named access mode.
///
/// `by_value` checks for a [`ReadCursor`] impl, `by_ref` for a [`RefCursor`]
/// impl. Borrowing cursor types carry a lifetime parameter; assert on their
/// `'static` instantiation.
///
/// # Example Usage
/// ```
/// use r3bl_seq_facade::{Cursor, ReadCursor, assert_cursor_access};
///
/// #[derive(Debug, PartialEq)]
/// struct Metronome {
///     beat: u64,
/// }
///
/// impl Cursor for Metronome {
///     type Item = u64;
///     fn step(&mut self) { self.beat += 1; }
/// }
///
/// impl ReadCursor for Metronome {
///     fn read(&self) -> u64 { self.beat }
/// }
///
/// assert_cursor_access!(Metronome, by_value);
/// ```
///
/// ```rust,compile_fail
/// use r3bl_seq_facade::{Cursor, assert_cursor_access};
///
/// #[derive(Debug, PartialEq)]
/// struct Metronome {
///     beat: u64,
/// }
///
/// impl Cursor for Metronome {
///     type Item = u64;
///     fn step(&mut self) { self.beat += 1; }
/// }
///
/// // Compiler error - `Metronome` does not implement `RefCursor`.
/// assert_cursor_access!(Metronome, by_ref);
/// ```
///
/// [`ReadCursor`]: crate::ReadCursor
/// [`RefCursor`]: crate::RefCursor
#[macro_export]
macro_rules! assert_cursor_access {
    ($type:ty, by_value) => {
        const _: () = {
            let _ = $crate::probe::require_read_access::<$type>;
        };
    };
    ($type:ty, by_ref) => {
        const _: () = {
            let _ = $crate::probe::require_ref_access::<$type>;
        };
    };
}
