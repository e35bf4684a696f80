// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The cursor trait ladder: declare primitives, inherit everything else.
//!
//! A cursor is a movable position inside some sequence. A type opts into a
//! traversal strength by implementing the matching trait, supplying only that
//! strength's required primitives as trait methods. Every derivable operation
//! for that strength arrives as a provided method, and a declaration that can
//! do better than the synthesized form simply defines the method itself;
//! method resolution prefers the impl's own definition over the default.
//!
//! The ladder, bottom to top:
//!
//! - [`Cursor`]: step forward, compare for equality ([`Strength::SinglePass`])
//! - [`ForwardCursor`]: adds `Clone` ([`Strength::Forward`])
//! - [`BidirectionalCursor`]: adds [`step_back`] ([`Strength::Bidirectional`])
//! - [`RandomAccessCursor`]: adds [`advance_by`] and [`distance_to`]
//!   ([`Strength::RandomAccess`])
//! - [`ContiguousCursor`]: adds [`as_ptr`], unsafely promising layout
//!   ([`Strength::Contiguous`])
//!
//! Element access is orthogonal to movement: [`ReadCursor`] yields elements
//! by value and [`RefCursor`] lends them out of the underlying storage. A
//! mutable/read-only pair of declarations is connected by [`IntoReadOnly`],
//! which is the only conversion direction this crate will synthesize.
//!
//! [`Strength::SinglePass`]: crate::Strength::SinglePass
//! [`Strength::Forward`]: crate::Strength::Forward
//! [`Strength::Bidirectional`]: crate::Strength::Bidirectional
//! [`Strength::RandomAccess`]: crate::Strength::RandomAccess
//! [`Strength::Contiguous`]: crate::Strength::Contiguous
//! [`step_back`]: BidirectionalCursor::step_back
//! [`advance_by`]: RandomAccessCursor::advance_by
//! [`distance_to`]: RandomAccessCursor::distance_to
//! [`as_ptr`]: ContiguousCursor::as_ptr

// Attach source files.
pub mod access;
pub mod base;
pub mod declare_macros;
pub mod random_access;
pub mod read_only;
pub mod traversal;

// Re-export.
pub use access::*;
pub use base::*;
pub use random_access::*;
pub use read_only::*;
pub use traversal::*;
