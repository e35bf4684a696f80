// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{self, Debug};

use crate::{Cursor, CursorCaps, CursorProfile, ForwardCursor, IntoReadOnly,
            ReadCursor, Sentinel, Strength};

/// A writable forward cursor over raw memory, paired with
/// [`ConstPtrCursor`] as its read-only counterpart.
///
/// The pair is deliberately capped at forward strength even though pointers
/// could jump: it is the fixture for the write-then-release story, where a
/// mutating pass hands its position to readers via [`IntoReadOnly`].
///
/// Both cursor types are generic, so the interop impls (`From`, the mixed
/// `PartialEq` pair) are the hand-spelled form of what
/// [`create_read_only_interop!`] writes for concrete pairs.
///
/// Equality and forward traversal are the whole surface:
///
/// ```
/// use r3bl_seq_facade::{Cursor, ReadCursor, test_fixtures::PtrCursor};
///
/// let mut data = [3_u16, 5, 8];
/// // SAFETY: the cursor stays on `data` while in use.
/// let mut cursor = unsafe { PtrCursor::new(data.as_mut_ptr()) };
/// let origin = cursor;
///
/// cursor.step();
/// assert!(cursor != origin);
/// assert_eq!(cursor.read(), 5);
/// ```
///
/// Stepping back is a build error, not a runtime one:
///
/// ```compile_fail
/// use r3bl_seq_facade::{BidirectionalCursor, test_fixtures::PtrCursor};
///
/// fn retreat(arg_cursor: &mut PtrCursor<u8>) {
///     arg_cursor.step_back();
/// }
/// ```
///
/// and so is measuring a distance:
///
/// ```compile_fail
/// use r3bl_seq_facade::{RandomAccessCursor, test_fixtures::PtrCursor};
///
/// fn gap(arg_from: &PtrCursor<u8>, arg_to: &PtrCursor<u8>) -> isize {
///     arg_from.distance_to(arg_to)
/// }
/// ```
///
/// [`create_read_only_interop!`]: crate::create_read_only_interop
pub struct PtrCursor<T> {
    ptr: *mut T,
}

/// Read-only counterpart of [`PtrCursor`]. See [`IntoReadOnly`].
pub struct ConstPtrCursor<T> {
    ptr: *const T,
}

impl<T> PtrCursor<T> {
    /// Cursor at `arg_ptr`.
    ///
    /// # Safety
    ///
    /// Callers must guarantee, for as long as the cursor (or anything
    /// converted or cloned from it) is in use:
    ///
    /// - `arg_ptr` points into, or one past the end of, a single allocation
    ///   of `T`s;
    /// - the cursor is only ever stepped within that allocation, up to one
    ///   past its end;
    /// - positions that are read are initialized, and no other access to the
    ///   memory overlaps a write through [`write`].
    ///
    /// [`write`]: PtrCursor::write
    #[must_use]
    pub unsafe fn new(arg_ptr: *mut T) -> Self { PtrCursor { ptr: arg_ptr } }

    /// Store `arg_value` at the current position.
    pub fn write(&mut self, arg_value: T) {
        // SAFETY: the `new` contract makes in-bounds positions valid for
        // writes with no overlapping access.
        unsafe {
            self.ptr.write(arg_value);
        }
    }
}

impl<T> ConstPtrCursor<T> {
    /// Read-only cursor at `arg_ptr`.
    ///
    /// # Safety
    ///
    /// Same contract as [`PtrCursor::new`], minus the write clause.
    #[must_use]
    pub unsafe fn new(arg_ptr: *const T) -> Self {
        ConstPtrCursor { ptr: arg_ptr }
    }
}

mod impl_std {
    #![allow(clippy::wildcard_imports)]
    use super::*;

    // Hand-written so the impls do not demand `T: Clone`/`T: Debug` for a
    // field that is just an address.
    impl<T> Clone for PtrCursor<T> {
        fn clone(&self) -> Self { PtrCursor { ptr: self.ptr } }
    }

    impl<T> Copy for PtrCursor<T> {}

    impl<T> Clone for ConstPtrCursor<T> {
        fn clone(&self) -> Self { ConstPtrCursor { ptr: self.ptr } }
    }

    impl<T> Copy for ConstPtrCursor<T> {}

    impl<T> Debug for PtrCursor<T> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "PtrCursor({:p})", self.ptr)
        }
    }

    impl<T> Debug for ConstPtrCursor<T> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "ConstPtrCursor({:p})", self.ptr)
        }
    }

    impl<T> PartialEq for PtrCursor<T> {
        fn eq(&self, arg_other: &Self) -> bool {
            std::ptr::eq(self.ptr, arg_other.ptr)
        }
    }

    impl<T> Eq for PtrCursor<T> {}

    impl<T> PartialEq for ConstPtrCursor<T> {
        fn eq(&self, arg_other: &Self) -> bool {
            std::ptr::eq(self.ptr, arg_other.ptr)
        }
    }

    impl<T> Eq for ConstPtrCursor<T> {}
}

mod impl_ladder {
    #![allow(clippy::wildcard_imports)]
    use super::*;

    impl<T> Cursor for PtrCursor<T> {
        type Item = T;

        /// `wrapping_add` keeps stepping a safe operation; the `new`
        /// contract confines it to the allocation.
        fn step(&mut self) { self.ptr = self.ptr.wrapping_add(1); }
    }

    impl<T> ForwardCursor for PtrCursor<T> {}

    impl<T: Copy> ReadCursor for PtrCursor<T> {
        fn read(&self) -> T {
            // SAFETY: the `new` contract makes read positions initialized
            // and in bounds.
            unsafe { *self.ptr }
        }
    }

    impl<T> Cursor for ConstPtrCursor<T> {
        type Item = T;

        fn step(&mut self) { self.ptr = self.ptr.wrapping_add(1); }
    }

    impl<T> ForwardCursor for ConstPtrCursor<T> {}

    impl<T: Copy> ReadCursor for ConstPtrCursor<T> {
        fn read(&self) -> T {
            // SAFETY: the `new` contract makes read positions initialized
            // and in bounds.
            unsafe { *self.ptr }
        }
    }

    impl<T> CursorProfile for PtrCursor<T> {
        const CAPS: CursorCaps = CursorCaps::for_strength(Strength::Forward);
    }

    impl<T> CursorProfile for ConstPtrCursor<T> {
        const CAPS: CursorCaps = CursorCaps::for_strength(Strength::Forward);
    }
}

mod impl_interop {
    #![allow(clippy::wildcard_imports)]
    use super::*;

    impl<T> IntoReadOnly for PtrCursor<T> {
        type ReadOnly = ConstPtrCursor<T>;

        fn into_read_only(self) -> ConstPtrCursor<T> {
            ConstPtrCursor {
                ptr: self.ptr.cast_const(),
            }
        }
    }

    impl<T> From<PtrCursor<T>> for ConstPtrCursor<T> {
        fn from(arg_cursor: PtrCursor<T>) -> Self {
            arg_cursor.into_read_only()
        }
    }

    impl<T> PartialEq<ConstPtrCursor<T>> for PtrCursor<T> {
        fn eq(&self, arg_other: &ConstPtrCursor<T>) -> bool {
            std::ptr::eq(self.ptr, arg_other.ptr)
        }
    }

    impl<T> PartialEq<PtrCursor<T>> for ConstPtrCursor<T> {
        fn eq(&self, arg_other: &PtrCursor<T>) -> bool {
            std::ptr::eq(self.ptr, arg_other.ptr)
        }
    }

    /// A read-only position can bound a writable walk.
    impl<T> Sentinel<PtrCursor<T>> for ConstPtrCursor<T> {
        fn matches(&self, arg_cursor: &PtrCursor<T>) -> bool {
            std::ptr::eq(self.ptr, arg_cursor.ptr)
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{CursorIter, verify_profile};

    crate::assert_cursor_strength!(PtrCursor<u8>, forward);
    crate::assert_cursor_strength!(ConstPtrCursor<u8>, forward);
    crate::assert_cursor_access!(PtrCursor<u8>, by_value);

    #[test]
    fn test_write_then_release_then_read() {
        let mut data = [0_u32; 3];
        // SAFETY: the cursor only visits the three slots of `data`, and the
        // array is not otherwise touched while it is in use.
        let mut writer = unsafe { PtrCursor::new(data.as_mut_ptr()) };

        writer.write(7);
        writer.step();
        writer.write(8);
        writer.step();
        writer.write(9);

        let reader = writer.into_read_only();
        assert_eq!(reader.read(), 9);
        assert_eq!(data, [7, 8, 9]);
    }

    #[test]
    fn test_mixed_equality_compares_the_position() {
        let mut data = [1_u8, 2];
        // SAFETY: both cursors stay on `data`, reads only.
        let writer = unsafe { PtrCursor::new(data.as_mut_ptr()) };
        let reader: ConstPtrCursor<u8> = writer.into();

        assert_eq!(writer, reader);
        assert_eq!(reader, writer);

        let mut stepped = writer;
        stepped.step();
        assert_ne!(stepped, reader);
    }

    #[test]
    fn test_fetch_step_returns_the_prior_slot() {
        let mut data = [b'a', b'b'];
        // SAFETY: the cursor visits only the two slots of `data`, reads only.
        let mut cursor = unsafe { PtrCursor::new(data.as_mut_ptr()) };

        let before = cursor.fetch_step();
        assert_eq!(before.read(), b'a');
        assert_eq!(cursor.read(), b'b');
    }

    #[test]
    fn test_read_only_end_bounds_a_writable_walk() {
        let mut data = [10_u8, 20, 30, 40];
        let len = data.len();
        // SAFETY: the cursor walks `data` up to one past the end; the array
        // is not otherwise touched until the walk finishes.
        let start = unsafe { PtrCursor::new(data.as_mut_ptr()) };
        let end = {
            let mut one_past = start;
            for _ in 0..len {
                one_past.step();
            }
            one_past.into_read_only()
        };

        let walked: Vec<u8> = CursorIter::new(start, end).collect();
        assert_eq!(walked, [10, 20, 30, 40]);
    }

    #[test]
    fn test_published_descriptors_survive_the_audit() {
        assert_eq!(verify_profile::<PtrCursor<u8>>(), Ok(()));
        assert_eq!(verify_profile::<ConstPtrCursor<u8>>(), Ok(()));
    }
}
