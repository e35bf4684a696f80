// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Range synthesis: whole-sequence operations from an endpoint pair.
//!
//! [`RangeFacade`] asks a type for its two endpoints and synthesizes the
//! whole-sequence surface (emptiness, length, front/back, bounds-checked
//! element access, iteration, raw views) at whatever strength the cursor
//! declares. [`Span`] is the ready-made facade for a pair you already hold.

// Attach source files.
pub mod facade;
pub mod span;

// Re-export.
pub use facade::*;
pub use span::*;
