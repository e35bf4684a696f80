// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The base [`Cursor`] trait (single-pass strength) and the [`Sentinel`]
//! end-marker relation.

/// A position inside a sequence, at single-pass strength.
///
/// This is the bottom rung of the cursor ladder. Implementing it declares
/// single-pass strength and supplies two of the three single-pass primitives:
///
/// - `step` - advance by exactly one element (this trait's required method).
/// - equality - the `PartialEq` supertrait. Derive it when comparing every
///   field is right; implement it by hand when only part of the state
///   identifies the position.
///
/// The third primitive, element access, is declared separately through
/// [`ReadCursor`] (by value) or [`RefCursor`] (by reference), because a type
/// picks exactly the access mode its storage can honor.
///
/// There is no duplication guarantee at this strength: a `&mut` traversal
/// consumes the only visitor. Copyability arrives one rung up, with
/// [`ForwardCursor`].
///
/// ## Examples
///
/// ```
/// use r3bl_seq_facade::Cursor;
///
/// #[derive(Debug, PartialEq)]
/// struct CountUp {
///     n: usize,
/// }
///
/// impl Cursor for CountUp {
///     type Item = usize;
///     fn step(&mut self) { self.n += 1; }
/// }
///
/// let mut cursor = CountUp { n: 0 };
/// cursor.step();
/// cursor.step();
/// assert_eq!(cursor, CountUp { n: 2 });
/// ```
///
/// [`ReadCursor`]: crate::ReadCursor
/// [`RefCursor`]: crate::RefCursor
/// [`ForwardCursor`]: crate::ForwardCursor
pub trait Cursor: Sized + PartialEq {
    /// Element type of the underlying sequence.
    type Item;

    /// Advance to the next element. Primitive.
    fn step(&mut self);
}

/// An end marker for a traversal by cursors of type `C`.
///
/// The sentinel may be the cursor type itself (the *common range* case - the
/// blanket impl below covers every cursor) or a different type that knows only
/// how to recognize the boundary, e.g. a counted stop or a terminator probe.
/// A sentinel is compared against a cursor for equality and nothing else; it
/// need not be steppable, and subtraction against it is never synthesized.
///
/// `matches` must be stable: once it returns `true` for a cursor value, it
/// keeps returning `true` for that value. Everything downstream that stops on
/// a sentinel (iteration, emptiness, the fused bridge) leans on this.
///
/// ## Examples
///
/// A heterogeneous sentinel that stops a counter at a limit:
///
/// ```
/// use r3bl_seq_facade::{Cursor, Sentinel};
///
/// #[derive(Debug, PartialEq)]
/// struct CountUp {
///     n: usize,
/// }
///
/// impl Cursor for CountUp {
///     type Item = usize;
///     fn step(&mut self) { self.n += 1; }
/// }
///
/// #[derive(Debug)]
/// struct Limit(usize);
///
/// impl Sentinel<CountUp> for Limit {
///     fn matches(&self, arg_cursor: &CountUp) -> bool { arg_cursor.n >= self.0 }
///
///     fn remaining(&self, arg_cursor: &CountUp) -> Option<usize> {
///         Some(self.0.saturating_sub(arg_cursor.n))
///     }
/// }
///
/// let mut cursor = CountUp { n: 0 };
/// let limit = Limit(2);
/// assert!(!limit.matches(&cursor));
/// assert_eq!(limit.remaining(&cursor), Some(2));
/// cursor.step();
/// cursor.step();
/// assert!(limit.matches(&cursor));
/// ```
pub trait Sentinel<C: Cursor> {
    /// Does `arg_cursor` sit at the boundary this sentinel marks?
    fn matches(&self, arg_cursor: &C) -> bool;

    /// How many steps separate `arg_cursor` from the boundary, when this
    /// sentinel can tell. `None` is the honest default; a counted sentinel
    /// overrides it and iteration picks the answer up as an exact size hint.
    fn remaining(&self, _arg_cursor: &C) -> Option<usize> { None }
}

/// Every cursor bounds traversals of its own type: start-equals-end is the
/// emptiness test for common ranges. `remaining` stays `None` here; strength
/// is not knowable for every `C`, and the random-access distance between two
/// endpoints is reachable through [`RandomAccessCursor::distance_to`] where
/// it exists.
///
/// [`RandomAccessCursor::distance_to`]: crate::RandomAccessCursor::distance_to
impl<C: Cursor> Sentinel<C> for C {
    fn matches(&self, arg_cursor: &C) -> bool { self == arg_cursor }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Clone)]
    struct TestCounter {
        n: usize,
    }

    impl Cursor for TestCounter {
        type Item = usize;
        fn step(&mut self) { self.n += 1; }
    }

    struct TestLimit(usize);

    impl Sentinel<TestCounter> for TestLimit {
        fn matches(&self, arg_cursor: &TestCounter) -> bool { arg_cursor.n >= self.0 }

        fn remaining(&self, arg_cursor: &TestCounter) -> Option<usize> {
            Some(self.0.saturating_sub(arg_cursor.n))
        }
    }

    #[test]
    fn test_step_advances_by_one() {
        let mut cursor = TestCounter { n: 5 };
        cursor.step();
        assert_eq!(cursor.n, 6);
    }

    #[test]
    fn test_cursor_is_its_own_sentinel() {
        let cursor = TestCounter { n: 3 };
        let end = TestCounter { n: 3 };
        let not_end = TestCounter { n: 4 };
        assert!(end.matches(&cursor));
        assert!(!not_end.matches(&cursor));
    }

    #[test]
    fn test_heterogeneous_sentinel_stops_traversal() {
        let mut cursor = TestCounter { n: 0 };
        let limit = TestLimit(3);
        let mut visited = 0;
        while !limit.matches(&cursor) {
            visited += 1;
            cursor.step();
        }
        assert_eq!(visited, 3);
    }

    #[test]
    fn test_remaining_defaults_to_unknown() {
        let cursor = TestCounter { n: 0 };
        let end = TestCounter { n: 9 };
        assert_eq!(Sentinel::remaining(&end, &cursor), None);
        assert_eq!(TestLimit(9).remaining(&cursor), Some(9));
    }
}
