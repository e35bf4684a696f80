// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{BidirectionalCursor, ContiguousCursor, Cursor, CursorIter,
            RandomAccessCursor, ReadCursor, RefCursor, RefCursorIter, Sentinel};

/// A whole sequence described by its two endpoints.
///
/// Implementors supply exactly two things: where traversal starts
/// ([`start`]) and what bounds it ([`end`]). Every whole-sequence operation
/// is synthesized from that pair, each one appearing when the cursor's
/// declared strength derives it:
///
/// - [`is_empty`] and [`front`] / [`front_ref`] at any strength
/// - [`iter`] / [`iter_ref`], the `std::iter` bridge, at any strength
/// - [`back`] / [`back_ref`] on common ranges at bidirectional strength
/// - [`len`] and the bounds-checked [`at`] / [`at_ref`] on common ranges at
///   random-access strength
/// - [`as_ptr`] and [`as_slice`] at contiguous strength
///
/// A *common* range is one whose `End` is the cursor type itself. A
/// heterogeneous `End` (a counted stop, a terminator probe) still gets the
/// front-to-back operations; the back-anchored ones need an end you can
/// stand on.
///
/// Accessors return `Option` on emptiness and bounds misses. Nothing here
/// panics on its own; any failure originates in the cursor primitives.
///
/// ## Examples
///
/// ```
/// use r3bl_seq_facade::{RandomAccessCursor, RangeFacade, ReadCursor,
///                       create_random_access_basis};
///
/// #[derive(Debug, Clone, Copy)]
/// struct Step {
///     i: isize,
/// }
///
/// impl RandomAccessCursor for Step {
///     fn advance_by(&mut self, arg_delta: isize) { self.i += arg_delta; }
///     fn distance_to(&self, arg_other: &Self) -> isize { arg_other.i - self.i }
/// }
///
/// create_random_access_basis!(Step, item: isize);
///
/// impl ReadCursor for Step {
///     fn read(&self) -> isize { self.i * 10 }
/// }
///
/// struct Tens {
///     from: isize,
///     to: isize,
/// }
///
/// impl RangeFacade for Tens {
///     type Cursor = Step;
///     type End = Step;
///
///     fn start(&self) -> Step { Step { i: self.from } }
///     fn end(&self) -> Step { Step { i: self.to } }
/// }
///
/// let tens = Tens { from: 0, to: 4 };
/// assert!(!tens.is_empty());
/// assert_eq!(tens.len(), 4);
/// assert_eq!(tens.front(), Some(0));
/// assert_eq!(tens.back(), Some(30));
/// assert_eq!(tens.at(2), Some(20));
/// assert_eq!(tens.at(4), None);
/// assert_eq!(tens.iter().collect::<Vec<_>>(), vec![0, 10, 20, 30]);
/// ```
///
/// [`start`]: RangeFacade::start
/// [`end`]: RangeFacade::end
/// [`is_empty`]: RangeFacade::is_empty
/// [`front`]: RangeFacade::front
/// [`front_ref`]: RangeFacade::front_ref
/// [`iter`]: RangeFacade::iter
/// [`iter_ref`]: RangeFacade::iter_ref
/// [`back`]: RangeFacade::back
/// [`back_ref`]: RangeFacade::back_ref
/// [`len`]: RangeFacade::len
/// [`at`]: RangeFacade::at
/// [`at_ref`]: RangeFacade::at_ref
/// [`as_ptr`]: RangeFacade::as_ptr
/// [`as_slice`]: RangeFacade::as_slice
pub trait RangeFacade {
    /// The cursor type that walks this range.
    type Cursor: Cursor;

    /// The boundary type. The cursor type itself for a common range.
    type End: Sentinel<Self::Cursor>;

    /// A fresh cursor at the first element. Primitive.
    fn start(&self) -> Self::Cursor;

    /// The traversal boundary. Primitive.
    fn end(&self) -> Self::End;

    /// Start-at-the-boundary is the emptiness test.
    fn is_empty(&self) -> bool { self.end().matches(&self.start()) }

    /// Element count from the distance primitive. A start past its end
    /// reports zero.
    #[must_use]
    fn len(&self) -> usize
    where
        Self: RangeFacade<End = <Self as RangeFacade>::Cursor>,
        Self::Cursor: RandomAccessCursor,
    {
        usize::try_from(self.start().distance_to(&self.end())).unwrap_or(0)
    }

    /// The first element, unless the range is empty.
    fn front(&self) -> Option<<Self::Cursor as Cursor>::Item>
    where
        Self::Cursor: ReadCursor,
    {
        let cursor = self.start();
        if self.end().matches(&cursor) {
            None
        } else {
            Some(cursor.read())
        }
    }

    /// The first element borrowed from storage, unless the range is empty.
    fn front_ref<'s>(&self) -> Option<&'s <Self::Cursor as Cursor>::Item>
    where
        Self::Cursor: RefCursor<'s>,
    {
        let cursor = self.start();
        if self.end().matches(&cursor) {
            None
        } else {
            Some(cursor.current())
        }
    }

    /// The last element, unless the range is empty.
    fn back(&self) -> Option<<Self::Cursor as Cursor>::Item>
    where
        Self: RangeFacade<End = <Self as RangeFacade>::Cursor>,
        Self::Cursor: ReadCursor + BidirectionalCursor,
    {
        if self.is_empty() {
            return None;
        }
        let mut end = self.end();
        end.step_back();
        Some(end.read())
    }

    /// The last element borrowed from storage, unless the range is empty.
    fn back_ref<'s>(&self) -> Option<&'s <Self::Cursor as Cursor>::Item>
    where
        Self: RangeFacade<End = <Self as RangeFacade>::Cursor>,
        Self::Cursor: RefCursor<'s> + BidirectionalCursor,
    {
        if self.is_empty() {
            return None;
        }
        let mut end = self.end();
        end.step_back();
        Some(end.current())
    }

    /// The element `arg_index` places in, bounds-checked.
    fn at(&self, arg_index: usize) -> Option<<Self::Cursor as Cursor>::Item>
    where
        Self: RangeFacade<End = <Self as RangeFacade>::Cursor>,
        Self::Cursor: ReadCursor + RandomAccessCursor,
    {
        if arg_index >= self.len() {
            return None;
        }
        let delta = isize::try_from(arg_index).ok()?;
        Some(self.start().at(delta))
    }

    /// The element `arg_index` places in, borrowed from storage,
    /// bounds-checked.
    fn at_ref<'s>(&self, arg_index: usize) -> Option<&'s <Self::Cursor as Cursor>::Item>
    where
        Self: RangeFacade<End = <Self as RangeFacade>::Cursor>,
        Self::Cursor: RefCursor<'s> + RandomAccessCursor,
    {
        if arg_index >= self.len() {
            return None;
        }
        let delta = isize::try_from(arg_index).ok()?;
        Some(self.start().at_ref(delta))
    }

    /// Walk the whole range, yielding elements by value.
    fn iter(&self) -> CursorIter<Self::Cursor, Self::End>
    where
        Self::Cursor: ReadCursor,
    {
        CursorIter::new(self.start(), self.end())
    }

    /// Walk the whole range, yielding elements borrowed from storage.
    fn iter_ref<'s>(&self) -> RefCursorIter<'s, Self::Cursor, Self::End>
    where
        Self::Cursor: RefCursor<'s>,
    {
        RefCursorIter::new(self.start(), self.end())
    }

    /// Address of the first element. For an empty range this is the
    /// one-past-the-end address; read nothing through it.
    fn as_ptr(&self) -> *const <Self::Cursor as Cursor>::Item
    where
        Self::Cursor: ContiguousCursor,
    {
        self.start().as_ptr()
    }

    /// The whole range as a borrowed slice.
    fn as_slice(&self) -> &[<Self::Cursor as Cursor>::Item]
    where
        Self: RangeFacade<End = <Self as RangeFacade>::Cursor>,
        Self::Cursor: ContiguousCursor,
    {
        let ptr = self.start().as_ptr();
        let len = self.len();
        // SAFETY: `ContiguousCursor` guarantees `ptr` addresses `len`
        // adjacent initialized elements of storage this range keeps alive,
        // and the receiver-tied lifetime cannot outlive the range.
        unsafe { std::slice::from_raw_parts(ptr, len) }
    }
}
