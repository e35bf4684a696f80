// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_seq_facade
//!
//! Declare the primitive operations of a sequence position once, and let the
//! crate synthesize the rest of the surface: stepping conveniences, operator
//! arithmetic and ordering, element access, iteration, and whole-sequence
//! range operations. You write the two or three operations only your type can
//! know; everything derivable arrives as provided methods, operator impls on
//! a wrapper, and `std::iter` bridges.
//!
//! The design has three rules, and everything in the crate is one of them
//! applied somewhere:
//!
//! 1. **Strength is declared, never inferred.** A cursor says which rung of
//!    the ladder it stands on by implementing that rung's trait. Each rung
//!    names its primitives as required methods and its derived operations as
//!    provided ones.
//! 2. **Absence is an answer.** Operations hang off the bounds they need, so
//!    a type that lacks a primitive simply does not offer what depends on it.
//!    Nothing fails at a distance; if a capability is *required*, the
//!    [`assert_cursor_strength!`] family turns its absence into a build
//!    error at the declaration site.
//! 3. **A user-supplied fast path always wins.** Every derived operation is a
//!    default method body; overriding it replaces the synthesized form
//!    everywhere, operators included.
//!
//! ## The ladder
//!
//! | Rung | Adds (primitives) | Buys (synthesized) |
//! |------|-------------------|--------------------|
//! | [`Cursor`] | `step`, equality | the floor everything stands on |
//! | [`ForwardCursor`] | `Clone` | [`fetch_step`], multipass walks |
//! | [`BidirectionalCursor`] | `step_back` | [`fetch_step_back`], reverse iteration |
//! | [`RandomAccessCursor`] | `advance_by`, `distance_to` | [`offset`], [`relative_order`], [`at`], [`at_ref`], full operator arithmetic on [`Position`] |
//! | [`ContiguousCursor`] | `as_ptr` (unsafe) | raw views, borrowed slices on ranges |
//!
//! Element access is a separate axis: [`ReadCursor`] hands elements out by
//! value, [`RefCursor`] lends them *from the backing storage*, so borrows
//! outlive the cursor that produced them.
//!
//! ## Declaring a cursor
//!
//! A random-access declaration is two methods and a macro call:
//!
//! ```
//! use r3bl_seq_facade::{Position, RandomAccessCursor, ReadCursor,
//!                       create_random_access_basis, pos};
//!
//! #[derive(Debug, Clone, Copy)]
//! struct Evens {
//!     n: isize,
//! }
//!
//! impl RandomAccessCursor for Evens {
//!     fn advance_by(&mut self, arg_delta: isize) { self.n += arg_delta; }
//!     fn distance_to(&self, arg_other: &Self) -> isize { arg_other.n - self.n }
//! }
//!
//! create_random_access_basis!(Evens, item: isize);
//!
//! impl ReadCursor for Evens {
//!     fn read(&self) -> isize { self.n * 2 }
//! }
//!
//! // The declaration above bought the whole operator surface:
//! let p = pos(Evens { n: 0 });
//! let q = p + 5;
//! assert!(p < q);
//! assert_eq!(q - p, 5);
//! assert_eq!(q.at(-1), 8);
//! ```
//!
//! ## Walking and ranges
//!
//! A walk is a cursor plus a [`Sentinel`], which does not have to be a second
//! cursor: any stopping rule works, and a counted rule can report
//! [`remaining`] so iterator size hints come out exact. [`CursorIter`] and
//! [`RefCursorIter`] bridge the pair into `std::iter`; [`RangeFacade`] asks a
//! type for both endpoints and synthesizes whole-sequence operations
//! (emptiness, length, front and back, bounds-checked subscripts, raw views)
//! from them; [`Span`] is the ready-made endpoint-pair facade.
//!
//! ## Pairs of cursor types
//!
//! Sequences often come with a writable position type and a read-only one.
//! [`IntoReadOnly`] blesses exactly one conversion direction (writable into
//! read-only), [`create_read_only_interop!`] wires `From` and the mixed
//! comparisons along it, and coherence rejects any second wiring of the same
//! pair.
//!
//! ## Capability reporting
//!
//! Bounds answer "can this type do X" for the compiler; [`CursorCaps`]
//! restates the declaration as `const` data for everyone else, and
//! [`verify_profile`] audits the descriptor against the contract table in
//! [`CONTRACTS`], reporting disagreement as a [`ContractViolation`]
//! diagnostic instead of a build failure.
//!
//! ## Module map
//!
//! | Module | Holds |
//! |--------|-------|
//! | [`contract`] | strength enum, contract table, violation diagnostics |
//! | [`cursor`] | the trait ladder, access traits, sentinels, declaration macros |
//! | [`position`] | the [`Position`] operator wrapper and the `std::iter` bridges |
//! | [`probe`] | capability descriptors, the audit, the assertion macros |
//! | [`proxy`] | [`ElementProxy`] for sequences whose elements have no address |
//! | [`range`] | [`RangeFacade`] and [`Span`] |
//! | [`test_fixtures`] | real declarations covering each interesting corner |
//!
//! [`fetch_step`]: ForwardCursor::fetch_step
//! [`fetch_step_back`]: BidirectionalCursor::fetch_step_back
//! [`offset`]: RandomAccessCursor::offset
//! [`relative_order`]: RandomAccessCursor::relative_order
//! [`at`]: RandomAccessCursor::at
//! [`at_ref`]: RandomAccessCursor::at_ref
//! [`remaining`]: Sentinel::remaining
//! [`assert_cursor_strength!`]: crate::assert_cursor_strength
//! [`create_read_only_interop!`]: crate::create_read_only_interop

// Production paths must propagate; tests may unwrap (workspace lint config).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules (re-exported below to provide clean public API).
pub mod contract;
pub mod cursor;
pub mod position;
pub mod probe;
pub mod proxy;
pub mod range;
pub mod test_fixtures;

// Re-export stable public API using glob imports for ergonomic, flat API
// surface.
pub use contract::*;
pub use cursor::*;
pub use position::*;
pub use probe::*;
pub use proxy::*;
pub use range::*;
