// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Proxy values: expression-scoped owning stand-ins for references, produced
//! when element access yields a value instead of a borrow.

// Attach source files.
pub mod element_proxy;

// Re-export.
pub use element_proxy::*;
