// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! [`IntoReadOnly`] - the one blessed conversion direction between a cursor
//! type and its read-only counterpart.

use super::base::Cursor;

/// Names the read-only counterpart of a cursor type and the consuming
/// conversion into it.
///
/// Sequences often come with a position pair: one type that can write (or
/// holds an exclusive borrow) and a read-only view of the same ground. Mixing
/// the two in one algorithm needs a conversion, and conversions between
/// related types are where ambiguity breeds: if both directions were ever
/// wired up, generic resolution comparing the pair would have two valid
/// paths.
///
/// Policy, enforced by construction: exactly one direction - writable into
/// read-only - is ever synthesized. This trait *is* that direction;
/// [`Position::into_read_only`] and [`create_read_only_interop!`] follow it
/// and nothing in this crate infers the reverse. If a declaration wants the
/// reverse it must write it explicitly, and trait coherence rejects any
/// attempt to wire the same pair twice as a duplicate impl.
///
/// Conversion is consuming (`self`, not `&self`) because giving up write
/// capability is a handoff: for exclusive-borrow cursors the conversion is
/// literally the release of exclusivity (`&'s mut [T]` becoming `&'s [T]`).
///
/// ## Examples
///
/// ```
/// use r3bl_seq_facade::{Cursor, IntoReadOnly};
///
/// #[derive(Debug, PartialEq)]
/// struct Head<'s> {
///     rest: &'s mut [u8],
/// }
///
/// #[derive(Debug, PartialEq, Clone)]
/// struct HeadView<'s> {
///     rest: &'s [u8],
/// }
///
/// impl Cursor for Head<'_> {
///     type Item = u8;
///     fn step(&mut self) {
///         let rest = std::mem::take(&mut self.rest);
///         self.rest = &mut rest[1..];
///     }
/// }
///
/// impl Cursor for HeadView<'_> {
///     type Item = u8;
///     fn step(&mut self) { self.rest = &self.rest[1..]; }
/// }
///
/// impl<'s> IntoReadOnly for Head<'s> {
///     type ReadOnly = HeadView<'s>;
///     fn into_read_only(self) -> HeadView<'s> { HeadView { rest: self.rest } }
/// }
///
/// let mut data = [1_u8, 2, 3];
/// let writer = Head { rest: &mut data };
/// let view = writer.into_read_only(); // Exclusivity released.
/// assert_eq!(view.rest, &[1, 2, 3]);
/// ```
///
/// [`Position::into_read_only`]: crate::Position::into_read_only
/// [`create_read_only_interop!`]: crate::create_read_only_interop
pub trait IntoReadOnly: Cursor {
    /// The read-only counterpart. Same element type, same ground.
    type ReadOnly: Cursor<Item = Self::Item>;

    /// Consume this cursor, releasing its write capability.
    fn into_read_only(self) -> Self::ReadOnly;
}
