// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The forward and bidirectional rungs of the cursor ladder - see
//! [`ForwardCursor`] and [`BidirectionalCursor`].

use super::base::Cursor;

/// Forward strength: a cursor that can be duplicated.
///
/// Implementing this trait *is* the forward declaration. It adds no new
/// required method - the new obligation is the `Clone` supertrait, which is
/// what makes multi-pass traversal and the fetch-and-step form legal. A type
/// that declares forward strength without being `Clone` fails to compile at
/// this impl block, which is exactly where the contract says the error
/// belongs.
///
/// ## Examples
///
/// ```
/// use r3bl_seq_facade::{Cursor, ForwardCursor};
///
/// #[derive(Debug, PartialEq, Clone)]
/// struct CountUp {
///     n: usize,
/// }
///
/// impl Cursor for CountUp {
///     type Item = usize;
///     fn step(&mut self) { self.n += 1; }
/// }
///
/// impl ForwardCursor for CountUp {}
///
/// let mut cursor = CountUp { n: 0 };
/// let before = cursor.fetch_step();
/// assert_eq!(before, CountUp { n: 0 }); // Pre-mutation copy.
/// assert_eq!(cursor, CountUp { n: 1 }); // Original has advanced.
/// ```
pub trait ForwardCursor: Cursor + Clone {
    /// Fetch-and-step: copy the position, advance the original by one, return
    /// the copy.
    ///
    /// Synthesized at every strength from forward up - no declaration ever
    /// has to hand-write it.
    #[must_use]
    fn fetch_step(&mut self) -> Self {
        let before = self.clone();
        self.step();
        before
    }
}

/// Bidirectional strength: adds stepping backward.
///
/// ## Examples
///
/// ```
/// use r3bl_seq_facade::{BidirectionalCursor, Cursor, ForwardCursor};
///
/// #[derive(Debug, PartialEq, Clone)]
/// struct CountUp {
///     n: i64,
/// }
///
/// impl Cursor for CountUp {
///     type Item = i64;
///     fn step(&mut self) { self.n += 1; }
/// }
///
/// impl ForwardCursor for CountUp {}
///
/// impl BidirectionalCursor for CountUp {
///     fn step_back(&mut self) { self.n -= 1; }
/// }
///
/// let mut cursor = CountUp { n: 5 };
/// cursor.step_back();
/// assert_eq!(cursor.n, 4);
/// let before = cursor.fetch_step_back();
/// assert_eq!(before.n, 4);
/// assert_eq!(cursor.n, 3);
/// ```
pub trait BidirectionalCursor: ForwardCursor {
    /// Retreat by exactly one element. Primitive.
    fn step_back(&mut self);

    /// Fetch-and-step-back: copy the position, retreat the original by one,
    /// return the copy. Synthesized.
    #[must_use]
    fn fetch_step_back(&mut self) -> Self {
        let before = self.clone();
        self.step_back();
        before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Clone)]
    struct TestCounter {
        n: i64,
    }

    impl Cursor for TestCounter {
        type Item = i64;
        fn step(&mut self) { self.n += 1; }
    }

    impl ForwardCursor for TestCounter {}

    impl BidirectionalCursor for TestCounter {
        fn step_back(&mut self) { self.n -= 1; }
    }

    #[test]
    fn test_fetch_step_returns_pre_mutation_copy() {
        let mut cursor = TestCounter { n: 10 };
        let before = cursor.fetch_step();
        assert_eq!(before, TestCounter { n: 10 });
        assert_eq!(cursor, TestCounter { n: 11 });
    }

    #[test]
    fn test_fetch_step_matches_plain_step() {
        let mut fetched = TestCounter { n: 0 };
        let mut stepped = TestCounter { n: 0 };
        let _unused = fetched.fetch_step();
        stepped.step();
        assert_eq!(fetched, stepped);
    }

    #[test]
    fn test_step_back_then_step_restores_position() {
        let mut cursor = TestCounter { n: 7 };
        cursor.step_back();
        cursor.step();
        assert_eq!(cursor, TestCounter { n: 7 });

        cursor.step();
        cursor.step_back();
        assert_eq!(cursor, TestCounter { n: 7 });
    }

    #[test]
    fn test_fetch_step_back_returns_pre_mutation_copy() {
        let mut cursor = TestCounter { n: 3 };
        let before = cursor.fetch_step_back();
        assert_eq!(before, TestCounter { n: 3 });
        assert_eq!(cursor, TestCounter { n: 2 });
    }
}
