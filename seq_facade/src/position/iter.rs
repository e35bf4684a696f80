// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The bridge from cursor/sentinel pairs to [`std::iter`].
//!
//! Cursors generalize `std` iterators (a position can be compared, stepped
//! back, measured), so the narrowing direction is mechanical: pair a cursor
//! with the sentinel that bounds it and drive `step` from `next`. Two
//! wrappers cover the two access modes. Both become double-ended when the
//! range is common (both endpoints the same cursor type) at bidirectional
//! strength, and both report an exact size hint whenever the sentinel can
//! count its [`remaining`] steps.
//!
//! [`remaining`]: Sentinel::remaining

use std::{iter::FusedIterator, marker::PhantomData};

use crate::{BidirectionalCursor, Cursor, RandomAccessCursor, ReadCursor,
            RefCursor, Sentinel};

/// Yields elements by value, walking a cursor until the sentinel matches.
///
/// ```
/// use r3bl_seq_facade::{Cursor, CursorIter, ReadCursor, Sentinel};
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
/// impl ReadCursor for CountUp {
///     fn read(&self) -> usize { self.n }
/// }
///
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
/// let iter = CursorIter::new(CountUp { n: 0 }, Limit(3));
/// assert_eq!(iter.size_hint(), (3, Some(3)));
/// assert_eq!(iter.collect::<Vec<_>>(), vec![0, 1, 2]);
/// ```
#[derive(Debug, Clone)]
pub struct CursorIter<C: Cursor, S: Sentinel<C>> {
    cursor: C,
    end: S,
}

impl<C: Cursor, S: Sentinel<C>> CursorIter<C, S> {
    #[must_use]
    pub fn new(arg_cursor: C, arg_end: S) -> Self {
        CursorIter {
            cursor: arg_cursor,
            end: arg_end,
        }
    }
}

impl<C: ReadCursor, S: Sentinel<C>> Iterator for CursorIter<C, S> {
    type Item = C::Item;

    fn next(&mut self) -> Option<C::Item> {
        if self.end.matches(&self.cursor) {
            return None;
        }
        let item = self.cursor.read();
        self.cursor.step();
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.end.remaining(&self.cursor) {
            Some(count) => (count, Some(count)),
            None => (0, None),
        }
    }
}

/// Common bidirectional ranges walk from the back by retreating the end
/// cursor.
impl<C> DoubleEndedIterator for CursorIter<C, C>
where
    C: ReadCursor + BidirectionalCursor,
{
    fn next_back(&mut self) -> Option<C::Item> {
        if self.cursor == self.end {
            return None;
        }
        self.end.step_back();
        Some(self.end.read())
    }
}

impl<C: RandomAccessCursor> CursorIter<C, C> {
    /// Remaining element count from the distance primitive. A cursor past
    /// its end reports zero.
    #[must_use]
    pub fn len(&self) -> usize {
        usize::try_from(self.cursor.distance_to(&self.end)).unwrap_or(0)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.cursor == self.end }
}

// Sentinels are stable and an exhausted walk stops stepping, so `None` is
// final.
impl<C: ReadCursor, S: Sentinel<C>> FusedIterator for CursorIter<C, S> {}

/// Yields borrowed elements, walking a cursor until the sentinel matches.
///
/// The borrows live as long as the underlying storage, not the iterator, so
/// collected references stay valid after the walk is over.
///
/// ```
/// use r3bl_seq_facade::{Cursor, RefCursor, RefCursorIter};
///
/// #[derive(Debug, PartialEq)]
/// struct Head<'s> {
///     slice: &'s [u8],
///     idx: usize,
/// }
///
/// impl<'s> Cursor for Head<'s> {
///     type Item = u8;
///     fn step(&mut self) { self.idx += 1; }
/// }
///
/// impl<'s> RefCursor<'s> for Head<'s> {
///     fn current(&self) -> &'s u8 { &self.slice[self.idx] }
/// }
///
/// let data = [10u8, 20, 30];
/// let start = Head { slice: &data, idx: 0 };
/// let end = Head { slice: &data, idx: 3 };
///
/// let refs: Vec<&u8> = RefCursorIter::new(start, end).collect();
/// assert_eq!(refs, vec![&10, &20, &30]);
/// ```
#[derive(Debug, Clone)]
pub struct RefCursorIter<'s, C, S>
where
    C: RefCursor<'s>,
    <C as Cursor>::Item: 's,
    S: Sentinel<C>,
{
    cursor: C,
    end: S,
    _storage: PhantomData<&'s ()>,
}

impl<'s, C, S> RefCursorIter<'s, C, S>
where
    C: RefCursor<'s>,
    <C as Cursor>::Item: 's,
    S: Sentinel<C>,
{
    #[must_use]
    pub fn new(arg_cursor: C, arg_end: S) -> Self {
        RefCursorIter {
            cursor: arg_cursor,
            end: arg_end,
            _storage: PhantomData,
        }
    }
}

impl<'s, C, S> Iterator for RefCursorIter<'s, C, S>
where
    C: RefCursor<'s>,
    <C as Cursor>::Item: 's,
    S: Sentinel<C>,
{
    type Item = &'s C::Item;

    fn next(&mut self) -> Option<&'s C::Item> {
        if self.end.matches(&self.cursor) {
            return None;
        }
        let item = self.cursor.current();
        self.cursor.step();
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.end.remaining(&self.cursor) {
            Some(count) => (count, Some(count)),
            None => (0, None),
        }
    }
}

impl<'s, C> DoubleEndedIterator for RefCursorIter<'s, C, C>
where
    C: RefCursor<'s> + BidirectionalCursor,
    <C as Cursor>::Item: 's,
{
    fn next_back(&mut self) -> Option<&'s C::Item> {
        if self.cursor == self.end {
            return None;
        }
        self.end.step_back();
        Some(self.end.current())
    }
}

impl<'s, C> RefCursorIter<'s, C, C>
where
    C: RefCursor<'s> + RandomAccessCursor,
    <C as Cursor>::Item: 's,
{
    #[must_use]
    pub fn len(&self) -> usize {
        usize::try_from(self.cursor.distance_to(&self.end)).unwrap_or(0)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.cursor == self.end }
}

impl<'s, C, S> FusedIterator for RefCursorIter<'s, C, S>
where
    C: RefCursor<'s>,
    <C as Cursor>::Item: 's,
    S: Sentinel<C>,
{
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Debug, Clone, Copy)]
    struct TestTick {
        i: isize,
    }

    impl RandomAccessCursor for TestTick {
        fn advance_by(&mut self, arg_delta: isize) { self.i += arg_delta; }
        fn distance_to(&self, arg_other: &Self) -> isize { arg_other.i - self.i }
    }

    crate::create_random_access_basis!(TestTick, item: isize);

    impl ReadCursor for TestTick {
        fn read(&self) -> isize { self.i * 10 }
    }

    #[test]
    fn test_common_range_yields_until_the_end_cursor() {
        let values: Vec<isize> =
            CursorIter::new(TestTick { i: 0 }, TestTick { i: 3 }).collect();
        assert_eq!(values, vec![0, 10, 20]);
    }

    #[test]
    fn test_common_range_reverses_at_bidirectional_strength() {
        let values: Vec<isize> =
            CursorIter::new(TestTick { i: 0 }, TestTick { i: 3 }).rev().collect();
        assert_eq!(values, vec![20, 10, 0]);
    }

    #[test]
    fn test_walking_both_ends_meets_in_the_middle() {
        let mut iter = CursorIter::new(TestTick { i: 0 }, TestTick { i: 3 });
        assert_eq!(iter.next(), Some(0));
        assert_eq!(iter.next_back(), Some(20));
        assert_eq!(iter.next(), Some(10));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn test_len_clamps_a_cursor_past_its_end_to_zero() {
        assert_eq!(CursorIter::new(TestTick { i: 1 }, TestTick { i: 4 }).len(), 3);
        assert_eq!(CursorIter::new(TestTick { i: 4 }, TestTick { i: 1 }).len(), 0);
    }

    #[test]
    fn test_exhausted_iteration_stays_exhausted() {
        let mut iter = CursorIter::new(TestTick { i: 0 }, TestTick { i: 1 });
        assert_eq!(iter.next(), Some(0));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    struct TestCap(isize);

    impl Sentinel<TestTick> for TestCap {
        fn matches(&self, arg_cursor: &TestTick) -> bool { arg_cursor.i >= self.0 }

        fn remaining(&self, arg_cursor: &TestTick) -> Option<usize> {
            usize::try_from(self.0 - arg_cursor.i).ok().or(Some(0))
        }
    }

    #[test]
    fn test_counted_sentinel_gives_an_exact_size_hint() {
        let mut iter = CursorIter::new(TestTick { i: 0 }, TestCap(3));
        assert_eq!(iter.size_hint(), (3, Some(3)));
        iter.next();
        assert_eq!(iter.size_hint(), (2, Some(2)));
    }

    #[test]
    fn test_self_sentinel_leaves_the_size_hint_open() {
        let iter = CursorIter::new(TestTick { i: 0 }, TestTick { i: 3 });
        assert_eq!(iter.size_hint(), (0, None));
    }

    #[derive(Debug, PartialEq, Clone, Copy)]
    struct TestSpanHead<'s> {
        slice: &'s [char],
        idx: usize,
    }

    impl Cursor for TestSpanHead<'_> {
        type Item = char;
        fn step(&mut self) { self.idx += 1; }
    }

    impl<'s> RefCursor<'s> for TestSpanHead<'s> {
        fn current(&self) -> &'s char { &self.slice[self.idx] }
    }

    #[test]
    fn test_borrowed_elements_outlive_the_iterator() {
        let data = ['a', 'b', 'c'];
        let refs: Vec<&char> = {
            let start = TestSpanHead {
                slice: &data,
                idx: 0,
            };
            let end = TestSpanHead {
                slice: &data,
                idx: 3,
            };
            RefCursorIter::new(start, end).collect()
        };
        assert_eq!(refs, vec![&'a', &'b', &'c']);
    }
}
