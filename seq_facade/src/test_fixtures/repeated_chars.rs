// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CursorCaps, CursorIter, CursorProfile, RandomAccessCursor,
            RangeFacade, ReadCursor, Strength, create_random_access_basis};

/// A random-access cursor over an endlessly repeating byte pattern.
///
/// The sequence has no storage: element `n` is computed as
/// `pattern[n % pattern.len()]`. That makes it the canonical *computed*
/// (discontiguous) random-access declaration, and a concrete type, so the
/// whole lower ladder comes from [`create_random_access_basis!`] - including
/// equality, synthesized as `distance_to == 0`.
///
/// Three steps ahead lands on the same *letter*, but not the same
/// *position*: equality comes from distance, so `offset(3)` compares
/// unequal even though it reads identically.
///
/// ```
/// use r3bl_seq_facade::{RandomAccessCursor, ReadCursor,
///                       test_fixtures::RepeatedChars};
///
/// let cursor = RepeatedChars::new("abc", 0);
/// assert_eq!(cursor.read(), b'a');
/// assert_eq!(cursor.at(4), b'b');
///
/// let ahead = cursor.offset(3);
/// assert_eq!(ahead.read(), cursor.read());
/// assert_ne!(ahead, cursor);
/// ```
///
/// [`create_random_access_basis!`]: crate::create_random_access_basis
#[derive(Debug, Clone, Copy)]
pub struct RepeatedChars {
    pattern: &'static [u8],
    offset: isize,
}

impl RepeatedChars {
    /// Cursor at signed position `arg_offset` of the repeated sequence.
    /// `arg_pattern` must be non-empty.
    #[must_use]
    pub fn new(arg_pattern: &'static str, arg_offset: isize) -> Self {
        debug_assert!(!arg_pattern.is_empty());
        RepeatedChars {
            pattern: arg_pattern.as_bytes(),
            offset: arg_offset,
        }
    }
}

impl RandomAccessCursor for RepeatedChars {
    fn advance_by(&mut self, arg_delta: isize) { self.offset += arg_delta; }

    fn distance_to(&self, arg_other: &Self) -> isize {
        arg_other.offset - self.offset
    }
}

create_random_access_basis!(RepeatedChars, item: u8);

impl ReadCursor for RepeatedChars {
    // `rem_euclid` keeps negative offsets on the pattern.
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    fn read(&self) -> u8 {
        let len = self.pattern.len() as isize;
        self.pattern[self.offset.rem_euclid(len) as usize]
    }
}

impl CursorProfile for RepeatedChars {
    /// No hand-written equality; the audit accepts distance as the
    /// comparison primitive at this strength.
    const CAPS: CursorCaps = CursorCaps {
        direct_equality: false,
        ..CursorCaps::for_strength(Strength::RandomAccess)
    };
}

/// The first `count` elements of a [`RepeatedChars`] sequence, as a common
/// range.
///
/// ```
/// use r3bl_seq_facade::{RangeFacade, test_fixtures::RepeatedCharsSpan};
///
/// let span = RepeatedCharsSpan::new("foo", 7);
/// let text: Vec<u8> = span.iter().collect();
/// assert_eq!(text, b"foofoof");
/// assert_eq!(span.len(), 7);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RepeatedCharsSpan {
    pattern: &'static str,
    count: usize,
}

impl RepeatedCharsSpan {
    /// `arg_pattern` must be non-empty.
    #[must_use]
    pub fn new(arg_pattern: &'static str, arg_count: usize) -> Self {
        RepeatedCharsSpan {
            pattern: arg_pattern,
            count: arg_count,
        }
    }
}

impl RangeFacade for RepeatedCharsSpan {
    type Cursor = RepeatedChars;
    type End = RepeatedChars;

    fn start(&self) -> RepeatedChars { RepeatedChars::new(self.pattern, 0) }

    #[allow(clippy::cast_possible_wrap)]
    fn end(&self) -> RepeatedChars {
        RepeatedChars::new(self.pattern, self.count as isize)
    }
}

impl IntoIterator for &RepeatedCharsSpan {
    type Item = u8;
    type IntoIter = CursorIter<RepeatedChars, RepeatedChars>;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}
