// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CursorIter, ForwardCursor, RangeFacade, ReadCursor, Sentinel};

/// The trivial range: a held start/end pair.
///
/// Anything that can hand out its endpoints is a range, but often the
/// endpoints are all there is. `Span` holds them and implements
/// [`RangeFacade`] by cloning them out, which is why it asks for forward
/// strength: a single-pass cursor cannot be handed out twice.
///
/// ```
/// use r3bl_seq_facade::{RandomAccessCursor, RangeFacade,
///                       ReadCursor, create_random_access_basis, span};
///
/// #[derive(Debug, Clone, Copy)]
/// struct Page {
///     n: isize,
/// }
///
/// impl RandomAccessCursor for Page {
///     fn advance_by(&mut self, arg_delta: isize) { self.n += arg_delta; }
///     fn distance_to(&self, arg_other: &Self) -> isize { arg_other.n - self.n }
/// }
///
/// create_random_access_basis!(Page, item: isize);
///
/// impl ReadCursor for Page {
///     fn read(&self) -> isize { self.n }
/// }
///
/// let pages = span(Page { n: 10 }, Page { n: 13 });
/// assert_eq!(pages.len(), 3);
/// assert_eq!(pages.back(), Some(12));
///
/// let mut seen = vec![];
/// for page in &pages {
///     seen.push(page);
/// }
/// assert_eq!(seen, vec![10, 11, 12]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Span<C, S = C>
where
    C: ForwardCursor,
    S: Sentinel<C> + Clone,
{
    start: C,
    end: S,
}

/// Pair a start cursor with its boundary as a [`Span`].
#[must_use]
pub fn span<C, S>(arg_start: C, arg_end: S) -> Span<C, S>
where
    C: ForwardCursor,
    S: Sentinel<C> + Clone,
{
    Span {
        start: arg_start,
        end: arg_end,
    }
}

impl<C, S> RangeFacade for Span<C, S>
where
    C: ForwardCursor,
    S: Sentinel<C> + Clone,
{
    type Cursor = C;
    type End = S;

    fn start(&self) -> C { self.start.clone() }
    fn end(&self) -> S { self.end.clone() }
}

impl<C, S> IntoIterator for &Span<C, S>
where
    C: ForwardCursor + ReadCursor,
    S: Sentinel<C> + Clone,
{
    type Item = C::Item;
    type IntoIter = CursorIter<C, S>;

    fn into_iter(self) -> CursorIter<C, S> { self.iter() }
}
