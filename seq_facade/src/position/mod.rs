// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Position synthesis: operator syntax and `std::iter` interop for cursors.
//!
//! [`Position`] wraps any cursor and spells the derivable operations of its
//! strength as operators (comparison, signed arithmetic, distance), always
//! deferring to the cursor's own primitives. [`CursorIter`] and
//! [`RefCursorIter`] drive a cursor/sentinel pair as a standard iterator, one
//! per access mode.

// Attach source files.
pub mod iter;
pub mod position;

// Re-export.
pub use iter::*;
pub use position::*;
