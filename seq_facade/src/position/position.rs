// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{cmp::Ordering,
          ops::{Add, AddAssign, Deref, DerefMut, Sub, SubAssign}};

use crate::{BidirectionalCursor, Cursor, ForwardCursor, IntoReadOnly,
            RandomAccessCursor};

/// A place in a sequence, wrapped for operator syntax.
///
/// Any [`Cursor`] already *is* a position; the ladder's provided methods give
/// it the named operations (`offset`, `distance_to`, `at`). This newtype is
/// where the conventional operator spellings of those operations live, each
/// one synthesized from the wrapped cursor's primitives and available exactly
/// when the declared strength derives it:
///
/// - `==` at every strength, `<` `<=` `>` `>=` at random-access
/// - `position + n`, `n + position`, `position - n`, `+=`, `-=` at
///   random-access
/// - `position - position` is the signed element distance at random-access
///
/// Subscripting spells as [`at`] / [`at_ref`] (reachable straight through the
/// wrapper): `std::ops::Index` wants the returned borrow tied to the wrapper
/// itself, which is the one thing a lending cursor's storage-lifetime borrow
/// is not.
///
/// The wrapper derefs to the cursor, so primitives and provided methods pass
/// straight through. Construct one with [`pos()`] or [`Position::new`].
///
/// ```
/// use r3bl_seq_facade::{RandomAccessCursor, create_random_access_basis, pos};
///
/// #[derive(Debug, Clone, Copy)]
/// struct Slot {
///     i: isize,
/// }
///
/// impl RandomAccessCursor for Slot {
///     fn advance_by(&mut self, arg_delta: isize) { self.i += arg_delta; }
///     fn distance_to(&self, arg_other: &Self) -> isize { arg_other.i - self.i }
/// }
///
/// create_random_access_basis!(Slot, item: isize);
///
/// let origin = pos(Slot { i: 0 });
/// let ahead = origin + 3;
///
/// assert!(origin < ahead);
/// assert_eq!(ahead - origin, 3);
/// assert_eq!(ahead - 3, origin);
/// assert_eq!(origin + 3, 3 + origin);
/// ```
///
/// [`at`]: RandomAccessCursor::at
/// [`at_ref`]: RandomAccessCursor::at_ref
#[derive(Debug, Clone, Copy)]
pub struct Position<C: Cursor>(pub C);

/// Wrap a cursor as a [`Position`].
#[must_use]
pub fn pos<C: Cursor>(arg_cursor: C) -> Position<C> { Position(arg_cursor) }

mod impl_core {
    #![allow(clippy::wildcard_imports)]
    use super::*;

    impl<C: Cursor> Position<C> {
        #[must_use]
        pub fn new(arg_cursor: C) -> Self { Position(arg_cursor) }

        /// Unwrap back to the bare cursor.
        #[must_use]
        pub fn into_inner(self) -> C { self.0 }
    }

    impl<C: ForwardCursor> Position<C> {
        /// Fetch-and-step: returns this position, then advances it.
        #[must_use]
        pub fn fetch_step(&mut self) -> Position<C> { Position(self.0.fetch_step()) }
    }

    impl<C: BidirectionalCursor> Position<C> {
        /// Fetch-and-step-back: returns this position, then retreats it.
        #[must_use]
        pub fn fetch_step_back(&mut self) -> Position<C> {
            Position(self.0.fetch_step_back())
        }
    }

    impl<C: IntoReadOnly> Position<C> {
        /// Hand the place over to the read-only counterpart type.
        #[must_use]
        pub fn into_read_only(self) -> Position<C::ReadOnly> {
            Position(self.0.into_read_only())
        }
    }
}

mod impl_deref {
    #![allow(clippy::wildcard_imports)]
    use super::*;

    impl<C: Cursor> Deref for Position<C> {
        type Target = C;

        fn deref(&self) -> &Self::Target { &self.0 }
    }

    impl<C: Cursor> DerefMut for Position<C> {
        fn deref_mut(&mut self) -> &mut Self::Target { &mut self.0 }
    }
}

mod impl_cmp {
    #![allow(clippy::wildcard_imports)]
    use super::*;

    /// Positions compare exactly as their cursors compare. A hand-written
    /// cursor equality always wins over anything synthesized.
    impl<C: Cursor> PartialEq for Position<C> {
        fn eq(&self, arg_other: &Self) -> bool { self.0 == arg_other.0 }
    }

    /// Equality is a full equivalence from forward strength up: duplicate
    /// positions into the same sequence stay interchangeable.
    impl<C: ForwardCursor> Eq for Position<C> {}

    impl<C: RandomAccessCursor> PartialOrd for Position<C> {
        fn partial_cmp(&self, arg_other: &Self) -> Option<Ordering> {
            Some(self.cmp(arg_other))
        }
    }

    /// Sequence order, taken from the sign of the distance primitive.
    impl<C: RandomAccessCursor> Ord for Position<C> {
        fn cmp(&self, arg_other: &Self) -> Ordering {
            self.0.relative_order(&arg_other.0)
        }
    }
}

mod impl_arithmetic {
    #![allow(clippy::wildcard_imports)]
    use super::*;

    impl<C: RandomAccessCursor> Add<isize> for Position<C> {
        type Output = Position<C>;

        fn add(self, arg_delta: isize) -> Position<C> {
            Position(self.0.offset(arg_delta))
        }
    }

    /// `n + position`, same place as `position + n`.
    impl<C: RandomAccessCursor> Add<Position<C>> for isize {
        type Output = Position<C>;

        fn add(self, arg_position: Position<C>) -> Position<C> { arg_position + self }
    }

    impl<C: RandomAccessCursor> Sub<isize> for Position<C> {
        type Output = Position<C>;

        fn sub(self, arg_delta: isize) -> Position<C> {
            Position(self.0.offset(-arg_delta))
        }
    }

    /// `position - position`: how many steps carry the right operand to the
    /// left one. Negative when the left operand is behind.
    impl<C: RandomAccessCursor> Sub for Position<C> {
        type Output = isize;

        fn sub(self, arg_other: Position<C>) -> isize {
            arg_other.0.distance_to(&self.0)
        }
    }

    impl<C: RandomAccessCursor> AddAssign<isize> for Position<C> {
        fn add_assign(&mut self, arg_delta: isize) { self.0.advance_by(arg_delta); }
    }

    impl<C: RandomAccessCursor> SubAssign<isize> for Position<C> {
        fn sub_assign(&mut self, arg_delta: isize) { self.0.advance_by(-arg_delta); }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::ReadCursor;

    #[derive(Debug, Clone, Copy)]
    struct TestMark {
        i: isize,
    }

    impl RandomAccessCursor for TestMark {
        fn advance_by(&mut self, arg_delta: isize) { self.i += arg_delta; }
        fn distance_to(&self, arg_other: &Self) -> isize { arg_other.i - self.i }
    }

    crate::create_random_access_basis!(TestMark, item: isize);

    impl ReadCursor for TestMark {
        fn read(&self) -> isize { self.i * 10 }
    }

    fn mark(arg_i: isize) -> Position<TestMark> { pos(TestMark { i: arg_i }) }

    #[test]
    fn test_arithmetic_moves_and_measures() {
        let mut position = mark(2);
        position += 3;
        assert_eq!(position, mark(5));

        position -= 1;
        assert_eq!(position, mark(4));

        assert_eq!(position + 2, mark(6));
        assert_eq!(position - 2, mark(2));
        assert_eq!(2 + position, mark(6));

        assert_eq!(mark(7) - mark(4), 3);
        assert_eq!(mark(4) - mark(7), -3);
    }

    #[test]
    fn test_ordering_follows_sequence_order() {
        assert!(mark(1) < mark(2));
        assert!(mark(2) > mark(1));
        assert!(mark(3) <= mark(3));
        assert_eq!(mark(5).cmp(&mark(1)), Ordering::Greater);
        assert_eq!(mark(1).cmp(&mark(1)), Ordering::Equal);
    }

    #[test]
    fn test_fetch_step_returns_the_prior_position() {
        let mut position = mark(0);
        let before = position.fetch_step();
        assert_eq!(before, mark(0));
        assert_eq!(position, mark(1));

        let before = position.fetch_step_back();
        assert_eq!(before, mark(1));
        assert_eq!(position, mark(0));
    }

    #[test]
    fn test_cursor_methods_pass_through_the_wrapper() {
        let mut position = mark(3);
        position.step();
        assert_eq!(position.read(), 40);
        assert_eq!(position.at(2), 60);
        assert_eq!(position, mark(4));
    }

    #[derive(Debug, Clone, Copy)]
    struct TestMarkView {
        i: isize,
    }

    impl RandomAccessCursor for TestMarkView {
        fn advance_by(&mut self, arg_delta: isize) { self.i += arg_delta; }
        fn distance_to(&self, arg_other: &Self) -> isize { arg_other.i - self.i }
    }

    crate::create_random_access_basis!(TestMarkView, item: isize);

    impl IntoReadOnly for TestMark {
        type ReadOnly = TestMarkView;
        fn into_read_only(self) -> TestMarkView { TestMarkView { i: self.i } }
    }

    #[test]
    fn test_into_read_only_preserves_the_place() {
        let converted = mark(6).into_read_only();
        assert_eq!(converted, pos(TestMarkView { i: 6 }));
    }
}
