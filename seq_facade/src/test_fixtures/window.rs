// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{self, Debug};
use std::ops::Index;

use super::slice_cursor::SliceCursor;
use crate::{RangeFacade, RefCursorIter};

/// A contiguous common range over a borrowed slice: the endpoints are
/// [`SliceCursor`]s and the whole-sequence surface comes from
/// [`RangeFacade`].
///
/// This is also where subscript *operator* sugar lives. `std::ops::Index`
/// ties the returned borrow to the receiver, which a concrete facade that
/// holds its storage borrow can honor (the slice outlives `&self`); the
/// storage-lifetime accessors (`at_ref`, `iter_ref`) stay available for
/// borrows that must outlive the facade itself.
///
/// ```
/// use r3bl_seq_facade::{RangeFacade, test_fixtures::Window};
///
/// let data = [1_i32, 2, 3, 4];
/// let window = Window::over(&data);
///
/// assert_eq!(window.len(), 4);
/// assert_eq!(window[2], 3);
/// assert_eq!(window.as_slice(), &data);
///
/// let doubled: Vec<i32> = window.iter().map(|n| n * 2).collect();
/// assert_eq!(doubled, [2, 4, 6, 8]);
/// ```
pub struct Window<'s, T> {
    slice: &'s [T],
}

impl<'s, T> Window<'s, T> {
    /// Range covering the whole of `arg_slice`.
    #[must_use]
    pub fn over(arg_slice: &'s [T]) -> Self { Window { slice: arg_slice } }
}

impl<T> Clone for Window<'_, T> {
    fn clone(&self) -> Self { *self }
}

impl<T> Copy for Window<'_, T> {}

impl<T> Debug for Window<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Window({} elements)", self.slice.len())
    }
}

impl<'s, T> RangeFacade for Window<'s, T> {
    type Cursor = SliceCursor<'s, T>;
    type End = SliceCursor<'s, T>;

    fn start(&self) -> SliceCursor<'s, T> { SliceCursor::start_of(self.slice) }

    fn end(&self) -> SliceCursor<'s, T> { SliceCursor::end_of(self.slice) }
}

impl<T> Index<usize> for Window<'_, T> {
    type Output = T;

    fn index(&self, arg_index: usize) -> &T { &self.slice[arg_index] }
}

/// Borrowed iteration; the yielded references live as long as the storage,
/// not the facade.
impl<'s, T> IntoIterator for &Window<'s, T> {
    type Item = &'s T;
    type IntoIter = RefCursorIter<'s, SliceCursor<'s, T>, SliceCursor<'s, T>>;

    fn into_iter(self) -> Self::IntoIter { self.iter_ref() }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_whole_sequence_surface_over_a_slice() {
        let data = [10_u8, 20, 30, 40, 50];
        let window = Window::over(&data);

        assert_eq!(window.len(), 5);
        assert!(!window.is_empty());
        assert_eq!(window.front(), Some(10));
        assert_eq!(window.back(), Some(50));
        assert_eq!(window.at(3), Some(40));
        assert_eq!(window.at(5), None);
        assert_eq!(window.at_ref(0), Some(&10));
    }

    #[test]
    fn test_subscript_operator_borrows_from_the_receiver() {
        let data = ["a", "b", "c"];
        let window = Window::over(&data);
        assert_eq!(window[0], "a");
        assert_eq!(&window[2], &"c");
    }

    #[test]
    fn test_borrowed_loop_references_outlive_the_facade() {
        let data = [1_u16, 2, 3];
        let collected = {
            let window = Window::over(&data);
            let mut refs = Vec::new();
            for element in &window {
                refs.push(element);
            }
            refs
        };
        assert_eq!(collected, [&1, &2, &3]);
    }

    #[test]
    fn test_raw_views_point_into_the_storage() {
        let data = [7_u8, 8, 9];
        let window = Window::over(&data);
        assert_eq!(window.as_ptr(), data.as_ptr());
        assert_eq!(window.as_slice(), &[7, 8, 9]);
    }

    #[test]
    fn test_empty_window_has_an_empty_surface() {
        let data: [u8; 0] = [];
        let window = Window::over(&data);

        assert!(window.is_empty());
        assert_eq!(window.len(), 0);
        assert_eq!(window.front(), None);
        assert_eq!(window.back(), None);
        assert!(window.as_slice().is_empty());
        assert_eq!(window.iter().count(), 0);
    }

    #[test]
    fn test_reversed_iteration_reads_back_to_front() {
        let data = [1_u8, 2, 3];
        let window = Window::over(&data);
        let reversed: Vec<u8> = window.iter().rev().collect();
        assert_eq!(reversed, [3, 2, 1]);
    }
}
