// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Element access declarations: [`ReadCursor`] (by value) and [`RefCursor`]
//! (by reference). A cursor implements whichever mode its storage can honor;
//! implementing both is fine when reads are cheap.

use super::base::Cursor;
use crate::ElementProxy;

/// By-value element access: the cursor produces its element.
///
/// This is the access mode for cursors that compute elements on demand (a
/// counter, a repeating pattern, a decoder) or whose storage cannot be
/// borrowed from. Member access through such a position goes through
/// [`capture`], which wraps the produced value in an [`ElementProxy`].
///
/// ## Examples
///
/// ```
/// use r3bl_seq_facade::{Cursor, ReadCursor};
///
/// #[derive(Debug, PartialEq)]
/// struct Evens {
///     n: i64,
/// }
///
/// impl Cursor for Evens {
///     type Item = i64;
///     fn step(&mut self) { self.n += 2; }
/// }
///
/// impl ReadCursor for Evens {
///     fn read(&self) -> i64 { self.n }
/// }
///
/// let cursor = Evens { n: 4 };
/// assert_eq!(cursor.read(), 4);
/// assert!(cursor.capture().is_positive()); // Member access via the proxy.
/// ```
///
/// [`capture`]: ReadCursor::capture
pub trait ReadCursor: Cursor {
    /// Produce the element under the cursor. Primitive.
    fn read(&self) -> Self::Item;

    /// Member access through the position: produce the element and hold it in
    /// an [`ElementProxy`] for the duration of the access expression.
    ///
    /// Synthesized - never implement this by hand. For cursors that also have
    /// reference access, prefer [`RefCursor::current`], which involves no
    /// copy at all.
    #[must_use]
    fn capture(&self) -> ElementProxy<Self::Item> { ElementProxy::new(self.read()) }
}

/// By-reference element access: the cursor borrows its element from the
/// backing storage.
///
/// `'s` is the lifetime of that storage, not of the cursor value. This is the
/// load-bearing part of the signature: the borrow returned by [`current`]
/// stays valid after the cursor that produced it is gone, which is what lets
/// the synthesis layer hand out subscripts and range accessors computed
/// through short-lived jumped copies.
///
/// No proxy is ever constructed on this path; the borrow passes through as
/// is.
///
/// ## Examples
///
/// ```
/// use r3bl_seq_facade::{Cursor, RefCursor};
///
/// struct First<'s> {
///     items: &'s [u8],
/// }
///
/// impl PartialEq for First<'_> {
///     fn eq(&self, other: &Self) -> bool { std::ptr::eq(self.items, other.items) }
/// }
///
/// impl Cursor for First<'_> {
///     type Item = u8;
///     fn step(&mut self) { self.items = &self.items[1..]; }
/// }
///
/// impl<'s> RefCursor<'s> for First<'s> {
///     fn current(&self) -> &'s u8 { &self.items[0] }
/// }
///
/// let data = [7_u8, 8, 9];
/// let borrowed = {
///     let cursor = First { items: &data };
///     cursor.current() // Outlives `cursor`: it borrows `data`, not `cursor`.
/// };
/// assert_eq!(*borrowed, 7);
/// ```
///
/// [`current`]: RefCursor::current
pub trait RefCursor<'s>: Cursor
where
    Self::Item: 's,
{
    /// Borrow the element under the cursor from the backing storage.
    /// Primitive.
    fn current(&self) -> &'s Self::Item;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Clone)]
    struct TestRepeat {
        value: char,
    }

    impl Cursor for TestRepeat {
        type Item = char;
        fn step(&mut self) {}
    }

    impl ReadCursor for TestRepeat {
        fn read(&self) -> char { self.value }
    }

    #[test]
    fn test_read_produces_the_element() {
        let cursor = TestRepeat { value: 'z' };
        assert_eq!(cursor.read(), 'z');
    }

    #[test]
    fn test_capture_wraps_the_read_value() {
        let cursor = TestRepeat { value: 'q' };
        let proxy = cursor.capture();
        assert_eq!(*proxy, 'q');
        // Same observable result as reading into a manual temporary.
        let manual = cursor.read();
        assert_eq!(*proxy, manual);
    }

    #[derive(Debug)]
    struct TestSliceHead<'s> {
        items: &'s [i32],
    }

    impl PartialEq for TestSliceHead<'_> {
        fn eq(&self, other: &Self) -> bool { std::ptr::eq(self.items, other.items) }
    }

    impl Cursor for TestSliceHead<'_> {
        type Item = i32;
        fn step(&mut self) { self.items = &self.items[1..]; }
    }

    impl<'s> RefCursor<'s> for TestSliceHead<'s> {
        fn current(&self) -> &'s i32 { &self.items[0] }
    }

    #[test]
    fn test_current_borrows_storage_not_cursor() {
        let data = [1, 2, 3];
        let borrow = {
            let cursor = TestSliceHead { items: &data };
            cursor.current()
        };
        assert_eq!(*borrow, 1);
    }
}
