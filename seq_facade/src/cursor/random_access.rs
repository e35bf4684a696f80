// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The random-access and contiguous rungs of the cursor ladder - see
//! [`RandomAccessCursor`] and [`ContiguousCursor`].

use super::{access::{ReadCursor, RefCursor},
            traversal::BidirectionalCursor};
use std::cmp::Ordering;

/// Random-access strength: constant-time jumps and signed distance.
///
/// ## Purpose
///
/// This rung supplies the two primitives everything arithmetic hangs off:
///
/// - [`advance_by`] - move by a signed element count in one go.
/// - [`distance_to`] - how many steps from here to another position, signed.
///
/// From those two, the synthesis layer derives jumped copies ([`offset`]),
/// ordering ([`relative_order`]), and subscripting ([`at`] / [`at_ref`]) here,
/// plus the full operator surface (`+` `-` `+=` `-=` `<` `==` over
/// [`Position`]) one layer up. Every derived item has a default body; a
/// declaration with a faster path for one of them just overrides that method
/// and the override wins everywhere.
///
/// ## Distance orientation
///
/// `a.distance_to(b)` counts the steps that take `a` onto `b`:
///
/// ```text
/// sequence:   e0   e1   e2   e3   e4   e5
///                  ↑              ↑
///                  a              b
///
/// a.distance_to(b) = +3      b.distance_to(a) = -3
/// a < b  (the one with    the positive distance to the other comes first)
/// ```
///
/// ## Equality for distance-only declarations
///
/// Direct equality stays a required primitive at this strength (it is the
/// `PartialEq` supertrait of [`Cursor`]), but a declaration whose only honest
/// comparison primitive is distance does not have to hand-write it: the
/// [`create_random_access_basis!`] macro emits `PartialEq` as
/// `distance_to == 0`, along with the step and step-back impls, from the two
/// jump primitives.
///
/// ## Examples
///
/// ```
/// use r3bl_seq_facade::{RandomAccessCursor, create_random_access_basis};
///
/// #[derive(Debug, Clone, Copy)]
/// struct Tick {
///     n: isize,
/// }
///
/// impl RandomAccessCursor for Tick {
///     fn advance_by(&mut self, arg_delta: isize) { self.n += arg_delta; }
///     fn distance_to(&self, arg_other: &Self) -> isize { arg_other.n - self.n }
/// }
///
/// create_random_access_basis!(Tick, item: isize);
///
/// impl r3bl_seq_facade::ReadCursor for Tick {
///     fn read(&self) -> isize { self.n }
/// }
///
/// let start = Tick { n: 0 };
/// let ahead = start.offset(4);
/// assert_eq!(start.distance_to(&ahead), 4);
/// assert_eq!(start.at(4), 4);
/// assert_eq!(start.offset(4).offset(-4), start);
/// ```
///
/// [`advance_by`]: RandomAccessCursor::advance_by
/// [`distance_to`]: RandomAccessCursor::distance_to
/// [`offset`]: RandomAccessCursor::offset
/// [`relative_order`]: RandomAccessCursor::relative_order
/// [`at`]: RandomAccessCursor::at
/// [`at_ref`]: RandomAccessCursor::at_ref
/// [`Position`]: crate::Position
/// [`Cursor`]: crate::Cursor
/// [`create_random_access_basis!`]: crate::create_random_access_basis
pub trait RandomAccessCursor: BidirectionalCursor {
    /// Move by a signed element count in constant time. Primitive.
    fn advance_by(&mut self, arg_delta: isize);

    /// Signed number of steps that take `self` onto `arg_other`; positive
    /// when `arg_other` is ahead. Primitive.
    fn distance_to(&self, arg_other: &Self) -> isize;

    /// A copy of this position moved by `arg_delta`. Synthesized from
    /// [`advance_by`].
    ///
    /// [`advance_by`]: RandomAccessCursor::advance_by
    #[must_use]
    fn offset(&self, arg_delta: isize) -> Self {
        let mut copy = self.clone();
        copy.advance_by(arg_delta);
        copy
    }

    /// Ordering of `self` against `arg_other`, from the distance sign: the
    /// position with a positive distance to the other one comes first.
    /// Synthesized.
    #[must_use]
    fn relative_order(&self, arg_other: &Self) -> Ordering {
        0.cmp(&self.distance_to(arg_other))
    }

    /// Subscript, by value: the element `arg_delta` steps away. Synthesized
    /// as advance-a-copy-then-read.
    #[must_use]
    fn at(&self, arg_delta: isize) -> Self::Item
    where
        Self: ReadCursor,
    {
        self.offset(arg_delta).read()
    }

    /// Subscript, by reference: borrow the element `arg_delta` steps away.
    ///
    /// Sound even though the jumped copy is dropped on return: the borrow
    /// lives in the backing storage (`'s`), not in the copy.
    #[must_use]
    fn at_ref<'s>(&self, arg_delta: isize) -> &'s Self::Item
    where
        Self: RefCursor<'s>,
    {
        self.offset(arg_delta).current()
    }
}

/// Contiguous strength: random access over elements that sit adjacent in
/// memory.
///
/// This is a *layout declaration*, which the compiler cannot check - hence
/// the `unsafe`. It unlocks the raw views (`as_ptr` here, borrowed slices on
/// the range facade), which assume the declaration is honest.
///
/// # Safety
///
/// Implementors must guarantee, for every position reachable by traversal:
///
/// - [`as_ptr`] returns a pointer to the element the cursor rests on, valid
///   for reads as long as the backing storage is borrowed or owned;
/// - all reachable elements belong to one allocation, laid out one element
///   stride apart, in traversal order;
/// - [`advance_by`] over `n` elements moves the pointed-to address by exactly
///   `n` strides.
///
/// Declaring this for a type whose elements are computed or scattered is
/// undefined behavior territory, not a soft error.
///
/// [`as_ptr`]: ContiguousCursor::as_ptr
/// [`advance_by`]: RandomAccessCursor::advance_by
pub unsafe trait ContiguousCursor: RandomAccessCursor {
    /// Address of the element under the cursor. Primitive.
    fn as_ptr(&self) -> *const Self::Item;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BidirectionalCursor, Cursor, ForwardCursor, ReadCursor};
    use test_case::test_case;

    /// A random-access cursor over the squares of integers, with every
    /// primitive written by hand (no basis macro) so the derived methods are
    /// exercised against a fully manual declaration.
    #[derive(Debug, Clone, Copy, PartialEq)]
    struct TestSquares {
        n: isize,
    }

    impl Cursor for TestSquares {
        type Item = isize;
        fn step(&mut self) { self.n += 1; }
    }

    impl ForwardCursor for TestSquares {}

    impl BidirectionalCursor for TestSquares {
        fn step_back(&mut self) { self.n -= 1; }
    }

    impl RandomAccessCursor for TestSquares {
        fn advance_by(&mut self, arg_delta: isize) { self.n += arg_delta; }
        fn distance_to(&self, arg_other: &Self) -> isize { arg_other.n - self.n }
    }

    impl ReadCursor for TestSquares {
        fn read(&self) -> isize { self.n * self.n }
    }

    #[test_case(0, 5; "jump forward")]
    #[test_case(5, -5; "jump backward")]
    #[test_case(3, 0; "jump nowhere")]
    fn test_offset_then_distance_round_trip(start: isize, delta: isize) {
        let cursor = TestSquares { n: start };
        let jumped = cursor.offset(delta);
        assert_eq!(cursor.distance_to(&jumped), delta);
        assert_eq!(jumped.offset(-delta), cursor);
    }

    #[test]
    fn test_relative_order_follows_distance_sign() {
        let p = TestSquares { n: 2 };
        let q = TestSquares { n: 6 };
        assert_eq!(p.relative_order(&q), Ordering::Less);
        assert_eq!(q.relative_order(&p), Ordering::Greater);
        assert_eq!(p.relative_order(&p), Ordering::Equal);
    }

    #[test]
    fn test_subscript_equals_jump_then_read() {
        let cursor = TestSquares { n: 3 };
        assert_eq!(cursor.at(2), 25);
        assert_eq!(cursor.at(2), cursor.offset(2).read());
        assert_eq!(cursor.at(0), cursor.read());
    }

    #[test]
    fn test_offset_leaves_the_original_alone() {
        let cursor = TestSquares { n: 1 };
        let _jumped = cursor.offset(10);
        assert_eq!(cursor, TestSquares { n: 1 });
    }

    /// Override of a derived method must win over the default body.
    #[derive(Debug, Clone, Copy, PartialEq)]
    struct TestOverride {
        n: isize,
        offset_calls: usize,
    }

    impl Cursor for TestOverride {
        type Item = isize;
        fn step(&mut self) { self.n += 1; }
    }

    impl ForwardCursor for TestOverride {}

    impl BidirectionalCursor for TestOverride {
        fn step_back(&mut self) { self.n -= 1; }
    }

    impl RandomAccessCursor for TestOverride {
        fn advance_by(&mut self, arg_delta: isize) { self.n += arg_delta; }
        fn distance_to(&self, arg_other: &Self) -> isize { arg_other.n - self.n }

        fn offset(&self, arg_delta: isize) -> Self {
            Self {
                n: self.n + arg_delta,
                offset_calls: self.offset_calls + 1,
            }
        }
    }

    #[test]
    fn test_user_supplied_offset_is_preferred() {
        let cursor = TestOverride { n: 0, offset_calls: 0 };
        let jumped = cursor.offset(3);
        assert_eq!(jumped.n, 3);
        assert_eq!(jumped.offset_calls, 1);
    }
}
