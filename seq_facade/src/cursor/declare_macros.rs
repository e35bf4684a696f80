// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Generates the whole trait ladder below [`RandomAccessCursor`] from the two
/// jump primitives.
///
/// A random-access declaration only has two honest primitives: jump by a
/// signed distance and measure a signed distance. Everything weaker is
/// mechanical once those exist, so this macro writes the weaker impls for
/// you. It is used by concrete cursor declarations the same way the test
/// fixtures in this crate use it; generic declarations (with type or
/// lifetime parameters) spell the same impls out by hand.
///
/// # Parameters
/// - `$type`: The cursor type that already implements [`RandomAccessCursor`]
/// - `item: $item`: The element type the cursor yields ([`Cursor::Item`])
///
/// # Generated Implementations
/// - `impl Cursor for $type` (`step` forwards to `advance_by(1)`)
/// - `impl ForwardCursor for $type` (marker; copy-then-step comes provided)
/// - `impl BidirectionalCursor for $type` (`step_back` forwards to
///   `advance_by(-1)`)
/// - `impl PartialEq for $type` (`distance_to(other) == 0`)
///
/// # Type Requirements
/// The target type must implement:
/// - [`RandomAccessCursor`] (`advance_by` and `distance_to`; the provided
///   methods come along for free)
/// - `Clone` (the [`ForwardCursor`] supertrait)
///
/// Do not also derive `PartialEq`: the macro emits it, and two `PartialEq`
/// impls for the same type will not compile. A hand-written `PartialEq` and
/// *no* macro is the right call when field equality and distance equality
/// disagree.
///
/// # Example Usage
/// ```
/// use r3bl_seq_facade::{BidirectionalCursor, Cursor, RandomAccessCursor,
///                       create_random_access_basis};
///
/// #[derive(Debug, Clone, Copy)]
/// struct Beat {
///     n: isize,
/// }
///
/// impl RandomAccessCursor for Beat {
///     fn advance_by(&mut self, arg_delta: isize) { self.n += arg_delta; }
///     fn distance_to(&self, arg_other: &Self) -> isize { arg_other.n - self.n }
/// }
///
/// create_random_access_basis!(Beat, item: isize);
///
/// let mut cursor = Beat { n: 0 };
/// cursor.step();
/// assert_eq!(cursor, Beat { n: 1 });
///
/// cursor.step_back();
/// assert_eq!(cursor, Beat { n: 0 });
/// ```
///
/// [`Cursor::Item`]: crate::Cursor::Item
/// [`RandomAccessCursor`]: crate::RandomAccessCursor
/// [`ForwardCursor`]: crate::ForwardCursor
#[macro_export]
macro_rules! create_random_access_basis {
    ($type:ty, item: $item:ty) => {
        impl $crate::Cursor for $type {
            type Item = $item;

            fn step(&mut self) { $crate::RandomAccessCursor::advance_by(self, 1); }
        }

        impl $crate::ForwardCursor for $type {}

        impl $crate::BidirectionalCursor for $type {
            fn step_back(&mut self) { $crate::RandomAccessCursor::advance_by(self, -1); }
        }

        impl std::cmp::PartialEq for $type {
            fn eq(&self, arg_other: &Self) -> bool {
                $crate::RandomAccessCursor::distance_to(self, arg_other) == 0
            }
        }
    };
}

/// Wires up a mutable cursor and its read-only counterpart as one family.
///
/// [`IntoReadOnly`] gives the one-way conversion; this macro layers the
/// ergonomics a paired declaration wants on top of it, so that the two types
/// convert and compare the way a caller who thinks of them as "the same
/// place" expects. The reverse direction is deliberately absent, and writing
/// a second `IntoReadOnly` impl pointing back at the mutable type collides
/// with the one the pair already has.
///
/// # Parameters
/// - `$mut_ty => $ro_ty`: The mutable cursor type and the read-only cursor
///   type it converts into. The two must be distinct types, and
///   `<$mut_ty as IntoReadOnly>::ReadOnly` must be `$ro_ty`.
///
/// # Generated Implementations
/// - `impl From<$mut_ty> for $ro_ty` (forwards to
///   [`IntoReadOnly::into_read_only`])
/// - `impl PartialEq<$ro_ty> for $mut_ty` (converts a copy, then compares)
/// - `impl PartialEq<$mut_ty> for $ro_ty` (same comparison, flipped)
///
/// # Type Requirements
/// The mutable type must implement:
/// - [`IntoReadOnly`] with `ReadOnly = $ro_ty`
/// - `Clone` (mixed equality converts a copy; a single-pass cursor that
///   cannot be duplicated keeps `IntoReadOnly` but skips this macro)
///
/// # Example Usage
/// ```
/// use r3bl_seq_facade::{Cursor, IntoReadOnly, create_read_only_interop};
///
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// struct Editor {
///     n: u8,
/// }
///
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// struct Viewer {
///     n: u8,
/// }
///
/// impl Cursor for Editor {
///     type Item = u8;
///     fn step(&mut self) { self.n += 1; }
/// }
///
/// impl Cursor for Viewer {
///     type Item = u8;
///     fn step(&mut self) { self.n += 1; }
/// }
///
/// impl IntoReadOnly for Editor {
///     type ReadOnly = Viewer;
///     fn into_read_only(self) -> Viewer { Viewer { n: self.n } }
/// }
///
/// create_read_only_interop!(Editor => Viewer);
///
/// let editor = Editor { n: 3 };
/// assert_eq!(Viewer::from(editor), Viewer { n: 3 });
/// assert!(editor == Viewer { n: 3 });
/// assert!(Viewer { n: 3 } == editor);
/// ```
///
/// [`IntoReadOnly`]: crate::IntoReadOnly
/// [`IntoReadOnly::into_read_only`]: crate::IntoReadOnly::into_read_only
#[macro_export]
macro_rules! create_read_only_interop {
    ($mut_ty:ty => $ro_ty:ty) => {
        impl std::convert::From<$mut_ty> for $ro_ty {
            fn from(arg_cursor: $mut_ty) -> Self {
                $crate::IntoReadOnly::into_read_only(arg_cursor)
            }
        }

        impl std::cmp::PartialEq<$ro_ty> for $mut_ty {
            fn eq(&self, arg_other: &$ro_ty) -> bool {
                $crate::IntoReadOnly::into_read_only(std::clone::Clone::clone(self))
                    == *arg_other
            }
        }

        impl std::cmp::PartialEq<$mut_ty> for $ro_ty {
            fn eq(&self, arg_other: &$mut_ty) -> bool {
                *self
                    == $crate::IntoReadOnly::into_read_only(std::clone::Clone::clone(
                        arg_other,
                    ))
            }
        }
    };
}
