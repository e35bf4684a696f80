// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Ready-made cursor declarations, one per interesting spot in the design
//! space.
//!
//! These are real declarations, not mocks: the crate's own tests walk them,
//! and downstream crates can use them to try the synthesis layer against
//! something concrete before writing their own.
//!
//! | Fixture | Strength | Ground | Shows off |
//! |---------|----------|--------|-----------|
//! | [`WriteCursor`] | single-pass | `&mut [T]` | exclusivity capping the ladder, [`Drained`] sentinel, release via [`IntoReadOnly`] |
//! | [`PtrCursor`] / [`ConstPtrCursor`] | forward | raw memory | writable/read-only pairing, mixed comparisons, read-only sentinel |
//! | [`RepeatedChars`] | random-access | computed | [`create_random_access_basis!`], equality from distance |
//! | [`SliceCursor`] | contiguous | `&[T]` | full hand-spelled generic ladder, lent borrows, raw views |
//! | [`Window`] | contiguous | `&[T]` | range facade over storage it holds, operator sugar |
//!
//! [`IntoReadOnly`]: crate::IntoReadOnly
//! [`create_random_access_basis!`]: crate::create_random_access_basis

// Attach source files.
pub mod ptr_cursor;
pub mod repeated_chars;
pub mod slice_cursor;
pub mod window;
pub mod write_cursor;

// Re-export.
pub use ptr_cursor::*;
pub use repeated_chars::*;
pub use slice_cursor::*;
pub use window::*;
pub use write_cursor::*;
