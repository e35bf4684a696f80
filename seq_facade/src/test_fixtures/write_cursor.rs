// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{self, Debug};

use super::slice_cursor::SliceCursor;
use crate::{Cursor, CursorCaps, CursorProfile, IntoReadOnly, ReadCursor,
            Sentinel, Strength};

/// A single-pass writing cursor over an exclusively borrowed slice.
///
/// Exclusive borrows cannot be duplicated, so this type is not `Clone` and
/// the ladder honestly stops at single-pass strength: the borrow checker is
/// doing what the multipass capability *means*. Converting with
/// [`IntoReadOnly`] releases the exclusivity, yielding a [`SliceCursor`]
/// over the not-yet-visited region - that conversion is the whole point of
/// the fixture.
///
/// ```
/// use r3bl_seq_facade::{IntoReadOnly, RefCursor,
///                       test_fixtures::WriteCursor};
///
/// let mut data = [0_u8; 4];
/// let mut writer = WriteCursor::start_of(&mut data);
/// writer.put(7).ok();
/// writer.put(8).ok();
///
/// let view = writer.into_read_only(); // Exclusivity released here.
/// assert_eq!(view.current(), &0); // First unwritten slot.
/// assert_eq!(data, [7, 8, 0, 0]);
/// ```
pub struct WriteCursor<'s, T> {
    rest: &'s mut [T],
}

impl<'s, T> WriteCursor<'s, T> {
    /// Cursor at the first element.
    #[must_use]
    pub fn start_of(arg_slice: &'s mut [T]) -> Self {
        WriteCursor { rest: arg_slice }
    }

    /// Store `arg_value` at the current position and advance.
    ///
    /// # Errors
    ///
    /// Past the end there is no slot; the value is handed back instead of
    /// being dropped silently.
    pub fn put(&mut self, arg_value: T) -> Result<(), T> {
        let rest = std::mem::take(&mut self.rest);
        match rest.split_first_mut() {
            Some((slot, tail)) => {
                *slot = arg_value;
                self.rest = tail;
                Ok(())
            }
            None => Err(arg_value),
        }
    }

    /// Slots not yet written or skipped.
    #[must_use]
    pub fn remaining(&self) -> usize { self.rest.len() }

    #[must_use]
    pub fn is_done(&self) -> bool { self.rest.is_empty() }
}

impl<T> Debug for WriteCursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WriteCursor({} left)", self.rest.len())
    }
}

/// Position identity: same first slot, same remaining length.
impl<T> PartialEq for WriteCursor<'_, T> {
    fn eq(&self, arg_other: &Self) -> bool {
        self.rest.as_ptr() == arg_other.rest.as_ptr()
            && self.rest.len() == arg_other.rest.len()
    }
}

impl<T> Eq for WriteCursor<'_, T> {}

impl<T> Cursor for WriteCursor<'_, T> {
    type Item = T;

    /// Skip the current slot without writing it. Stepping a drained cursor
    /// stays drained.
    fn step(&mut self) {
        let rest = std::mem::take(&mut self.rest);
        if let Some((_, tail)) = rest.split_first_mut() {
            self.rest = tail;
        }
    }
}

impl<T: Clone> ReadCursor for WriteCursor<'_, T> {
    fn read(&self) -> T { self.rest[0].clone() }
}

impl<'s, T> IntoReadOnly for WriteCursor<'s, T> {
    type ReadOnly = SliceCursor<'s, T>;

    /// The conversion is literally `&'s mut [T]` becoming `&'s [T]`.
    fn into_read_only(self) -> SliceCursor<'s, T> {
        let WriteCursor { rest } = self;
        SliceCursor::start_of(rest)
    }
}

// `create_read_only_interop!` needs `Clone` for the mixed comparisons, which
// a single-pass cursor does not have; `From` is the part that still applies.
impl<'s, T> From<WriteCursor<'s, T>> for SliceCursor<'s, T> {
    fn from(arg_cursor: WriteCursor<'s, T>) -> Self {
        arg_cursor.into_read_only()
    }
}

impl<T> CursorProfile for WriteCursor<'_, T> {
    const CAPS: CursorCaps = CursorCaps::for_strength(Strength::SinglePass);
}

/// Sentinel for [`WriteCursor`]: matches once every slot has been written or
/// skipped. An end *cursor* cannot exist here (it would alias the exclusive
/// borrow), which is exactly the case heterogeneous sentinels are for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Drained;

impl<'s, T> Sentinel<WriteCursor<'s, T>> for Drained {
    fn matches(&self, arg_cursor: &WriteCursor<'s, T>) -> bool {
        arg_cursor.is_done()
    }

    fn remaining(&self, arg_cursor: &WriteCursor<'s, T>) -> Option<usize> {
        Some(arg_cursor.remaining())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{CursorIter, RandomAccessCursor, verify_profile};

    crate::assert_cursor_strength!(WriteCursor<'static, u8>, single_pass);
    crate::assert_cursor_item!(WriteCursor<'static, u8>, u8);
    crate::assert_cursor_access!(WriteCursor<'static, u8>, by_value);

    #[test]
    fn test_put_fills_slots_in_order() {
        let mut data = [0_u8; 3];
        let mut writer = WriteCursor::start_of(&mut data);

        assert_eq!(writer.put(1), Ok(()));
        assert_eq!(writer.put(2), Ok(()));
        assert_eq!(writer.put(3), Ok(()));
        assert_eq!(writer.put(4), Err(4));

        assert_eq!(data, [1, 2, 3]);
    }

    #[test]
    fn test_step_skips_a_slot() {
        let mut data = [9_u8; 3];
        let mut writer = WriteCursor::start_of(&mut data);

        writer.put(1).ok();
        writer.step();
        writer.put(3).ok();

        assert_eq!(data, [1, 9, 3]);
    }

    #[test]
    fn test_stepping_past_the_end_stays_drained() {
        let mut data = [0_u8; 1];
        let mut writer = WriteCursor::start_of(&mut data);

        writer.step();
        writer.step();

        assert!(writer.is_done());
        assert_eq!(writer.remaining(), 0);
    }

    #[test]
    fn test_drained_sentinel_reports_an_exact_count() {
        let mut data = [5_u8, 6, 7];
        let writer = WriteCursor::start_of(&mut data);

        let mut walk = CursorIter::new(writer, Drained);
        assert_eq!(walk.size_hint(), (3, Some(3)));
        assert_eq!(walk.next(), Some(5));
        assert_eq!(walk.size_hint(), (2, Some(2)));
        assert_eq!(walk.collect::<Vec<u8>>(), [6, 7]);
    }

    #[test]
    fn test_release_hands_the_unvisited_region_to_readers() {
        let mut data = [1_u8, 2, 3, 4];
        let mut writer = WriteCursor::start_of(&mut data);
        writer.put(9).ok();

        let view: SliceCursor<'_, u8> = writer.into();
        assert_eq!(view.read(), 2);
        assert_eq!(view.at(2), 4);
    }

    #[test]
    fn test_equality_is_position_identity() {
        let mut left = [0_u8; 2];
        let mut right = [0_u8; 2];
        let on_left = WriteCursor::start_of(&mut left);
        let on_right = WriteCursor::start_of(&mut right);
        // Same shape and contents, different region.
        assert_ne!(on_left, on_right);

        let mut writer = on_left;
        writer.step();
        let mut probe = WriteCursor::start_of(writer.rest);
        assert_eq!(probe.remaining(), 1);
        probe.step();
        assert!(probe.is_done());
    }

    #[test]
    fn test_published_descriptor_survives_the_audit() {
        assert_eq!(verify_profile::<WriteCursor<'_, u8>>(), Ok(()));
    }
}
