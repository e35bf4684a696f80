// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{self, Debug};

use crate::{BidirectionalCursor, ContiguousCursor, Cursor, CursorCaps,
            CursorProfile, ForwardCursor, RandomAccessCursor, ReadCursor,
            RefCursor, Strength};

/// A contiguous-strength cursor over a borrowed slice, written entirely in
/// safe code.
///
/// This is the full hand-spelled ladder for a generic type (generic
/// declarations cannot use [`create_random_access_basis!`], which wants a
/// concrete type). Element access is lent straight out of the slice, so the
/// borrows live as long as the storage, not the cursor.
///
/// Two cursors are equal when they sit at the same index *of the same
/// slice*; comparing cursors from unrelated slices answers position identity,
/// not element equality.
///
/// ```
/// use r3bl_seq_facade::{RandomAccessCursor, RefCursor,
///                       test_fixtures::SliceCursor};
///
/// let data = [3u8, 1, 4, 1, 5];
/// let cursor = SliceCursor::start_of(&data);
///
/// assert_eq!(cursor.current(), &3);
/// assert_eq!(cursor.at_ref(2), &4);
/// assert_eq!(cursor.distance_to(&SliceCursor::end_of(&data)), 5);
/// ```
///
/// [`create_random_access_basis!`]: crate::create_random_access_basis
pub struct SliceCursor<'s, T> {
    slice: &'s [T],
    idx: usize,
}

mod impl_core {
    #![allow(clippy::wildcard_imports)]
    use super::*;

    impl<'s, T> SliceCursor<'s, T> {
        /// Cursor at the first element.
        #[must_use]
        pub fn start_of(arg_slice: &'s [T]) -> Self {
            SliceCursor {
                slice: arg_slice,
                idx: 0,
            }
        }

        /// Cursor one past the last element.
        #[must_use]
        pub fn end_of(arg_slice: &'s [T]) -> Self {
            SliceCursor {
                slice: arg_slice,
                idx: arg_slice.len(),
            }
        }

        /// Index into the underlying slice.
        #[must_use]
        pub fn index(&self) -> usize { self.idx }
    }

    // Derives would demand `T: Clone`/`T: Debug` bounds the borrowed slice
    // never needs.
    impl<T> Clone for SliceCursor<'_, T> {
        fn clone(&self) -> Self { *self }
    }

    impl<T> Copy for SliceCursor<'_, T> {}

    impl<T> Debug for SliceCursor<'_, T> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "SliceCursor({} of {})", self.idx, self.slice.len())
        }
    }

    /// Position identity: same slice, same index.
    impl<T> PartialEq for SliceCursor<'_, T> {
        fn eq(&self, arg_other: &Self) -> bool {
            std::ptr::eq(self.slice, arg_other.slice) && self.idx == arg_other.idx
        }
    }

    impl<T> Eq for SliceCursor<'_, T> {}
}

mod impl_ladder {
    #![allow(clippy::wildcard_imports)]
    use super::*;

    impl<T> Cursor for SliceCursor<'_, T> {
        type Item = T;

        fn step(&mut self) { self.idx += 1; }
    }

    impl<T> ForwardCursor for SliceCursor<'_, T> {}

    impl<T> BidirectionalCursor for SliceCursor<'_, T> {
        fn step_back(&mut self) { self.idx -= 1; }
    }

    impl<T> RandomAccessCursor for SliceCursor<'_, T> {
        /// Jumps wrap rather than panic; the slice's bounds check still
        /// guards every access.
        fn advance_by(&mut self, arg_delta: isize) {
            self.idx = self.idx.wrapping_add_signed(arg_delta);
        }

        // Slice indexes never exceed `isize::MAX`.
        #[allow(clippy::cast_possible_wrap)]
        fn distance_to(&self, arg_other: &Self) -> isize {
            (arg_other.idx as isize) - (self.idx as isize)
        }
    }

    impl<T: Clone> ReadCursor for SliceCursor<'_, T> {
        fn read(&self) -> T { self.slice[self.idx].clone() }
    }

    impl<'s, T> RefCursor<'s> for SliceCursor<'s, T> {
        fn current(&self) -> &'s T { &self.slice[self.idx] }
    }

    // SAFETY: a slice is adjacent initialized elements by definition, and
    // `slice[idx..]` keeps the address in bounds or one past the end.
    unsafe impl<T> ContiguousCursor for SliceCursor<'_, T> {
        fn as_ptr(&self) -> *const T { self.slice[self.idx..].as_ptr() }
    }

    impl<T> CursorProfile for SliceCursor<'_, T> {
        const CAPS: CursorCaps = CursorCaps {
            read_access: true,
            ref_access: true,
            ..CursorCaps::for_strength(Strength::Contiguous)
        };
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::verify_profile;

    crate::assert_cursor_strength!(SliceCursor<'static, u8>, contiguous);
    crate::assert_cursor_item!(SliceCursor<'static, u8>, u8);
    crate::assert_cursor_access!(SliceCursor<'static, u8>, by_value);
    crate::assert_cursor_access!(SliceCursor<'static, u8>, by_ref);

    #[test]
    fn test_walks_the_slice_in_both_directions() {
        let data = [10u8, 20, 30];
        let mut cursor = SliceCursor::start_of(&data);
        assert_eq!(cursor.read(), 10);

        cursor.step();
        cursor.step();
        assert_eq!(cursor.read(), 30);

        cursor.step_back();
        assert_eq!(cursor.read(), 20);
    }

    #[test]
    fn test_jump_primitives_measure_and_move() {
        let data = [0u8; 8];
        let start = SliceCursor::start_of(&data);
        let end = SliceCursor::end_of(&data);

        assert_eq!(start.distance_to(&end), 8);
        assert_eq!(end.distance_to(&start), -8);
        assert_eq!(start.offset(8), end);
        assert_eq!(end.offset(-8), start);
    }

    #[test]
    fn test_equality_is_position_identity_not_element_equality() {
        let left = [1u8, 2, 3];
        let right = [1u8, 2, 3];
        let on_left = SliceCursor::start_of(&left);
        let on_right = SliceCursor::start_of(&right);

        assert_eq!(on_left, SliceCursor::start_of(&left));
        assert_ne!(on_left, on_right);
    }

    #[test]
    fn test_lent_borrows_outlive_the_cursor() {
        let data = ['x', 'y'];
        let first = {
            let cursor = SliceCursor::start_of(&data);
            cursor.current()
        };
        assert_eq!(first, &'x');
    }

    #[test]
    fn test_raw_view_points_into_the_slice() {
        let data = [5u8, 6, 7];
        let mut cursor = SliceCursor::start_of(&data);
        assert_eq!(cursor.as_ptr(), data.as_ptr());

        cursor.step();
        assert_eq!(cursor.as_ptr(), data[1..].as_ptr());

        let end = SliceCursor::end_of(&data);
        assert_eq!(end.as_ptr(), data[3..].as_ptr());
    }

    #[test]
    fn test_published_descriptor_survives_the_audit() {
        assert_eq!(verify_profile::<SliceCursor<'_, u8>>(), Ok(()));
    }
}
