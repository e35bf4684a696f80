// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Capability probing, the descriptor mirror, and explicit assertions.
//!
//! Three related surfaces with one rule between them: *probing never fails
//! the build, asserting always can*.
//!
//! - Probing is implicit everywhere in this crate. Synthesized operations
//!   hang off optional bounds, so a cursor that lacks a primitive simply does
//!   not offer the operations derived from it. Absence is an answer.
//! - The [`CursorCaps`] descriptor restates a declaration as `const` data,
//!   with [`verify_profile`] as the runtime audit against the contract table.
//! - The [`assert_cursor_strength!`], [`assert_cursor_item!`], and
//!   [`assert_cursor_access!`] macros are the requested hard checks, built on
//!   the `require` functions in this module.
//!
//! [`assert_cursor_strength!`]: crate::assert_cursor_strength
//! [`assert_cursor_item!`]: crate::assert_cursor_item
//! [`assert_cursor_access!`]: crate::assert_cursor_access

// Attach source files.
pub mod assert_macros;
pub mod caps;

// Re-export.
pub use assert_macros::*;
pub use caps::*;
