// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Category contracts: what each traversal strength takes and what it gives.
//!
//! A cursor type declares one of five [`Strength`] levels. The declaration
//! obliges the type to supply that level's *required primitives* and entitles
//! it to every operation in the level's *derivable* set, which the rest of
//! this crate synthesizes. The obligation/entitlement pairs are data, not
//! control flow: [`CONTRACTS`] holds one [`Contract`] row per strength.
//!
//! | Strength      | Required primitives                  | Derivable                                  |
//! |---------------|--------------------------------------|--------------------------------------------|
//! | single-pass   | access, step, equality               | member-access                              |
//! | forward       | + duplicate                          | + post-step                                |
//! | bidirectional | + step-back                          | + post-step-back                           |
//! | random-access | + advance-by, distance-to            | + subscript, arithmetic, relationals, distance |
//! | contiguous    | + raw-data                           | + raw views                                |
//!
//! Enforcement is the type system's job (the trait ladder in [`crate::cursor`]
//! makes an under-declared impl fail to compile at the declaration site). The
//! table backs the runtime *audit* in [`crate::probe`], which reports
//! disagreements as [`ContractViolation`] diagnostics.

// Attach source files.
pub mod strength;
pub mod table;
pub mod violation;

// Re-export.
pub use strength::*;
pub use table::*;
pub use violation::*;
