// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! [`ContractViolation`] - the diagnostic error produced when a capability
//! audit finds a declaration that does not honor its contract row.
//!
//! The synthesis layer itself has no runtime failure path (an illegal
//! declaration or call simply does not compile). This type exists for the
//! *audit* surface: test code and tooling that cross-check a declared
//! capability descriptor against [`CONTRACTS`] at runtime and want a proper
//! diagnostic when the two disagree.
//!
//! [`CONTRACTS`]: super::CONTRACTS

use super::{PrimitiveOp, Strength, SynthOp};
use miette::Diagnostic;

/// A capability descriptor failed its contract-table audit.
#[derive(Debug, PartialEq, Eq, Clone, Copy, thiserror::Error, Diagnostic)]
pub enum ContractViolation {
    /// The declared strength obliges a primitive the descriptor does not
    /// report.
    #[error("strength `{strength}` requires the `{missing}` primitive")]
    #[diagnostic(
        code(r3bl_seq_facade::contract::missing_primitive),
        help("implement the trait item backing `{missing}` or declare a weaker strength")
    )]
    MissingPrimitive {
        strength: Strength,
        missing: PrimitiveOp,
    },

    /// Contiguous strength was declared over a discontiguous layout.
    #[error("strength `contiguous` declared over a discontiguous layout")]
    #[diagnostic(
        code(r3bl_seq_facade::contract::layout_mismatch),
        help("only declare `ContiguousCursor` when elements are adjacent in memory")
    )]
    LayoutMismatch,

    /// An operation was requested that the declared strength cannot derive.
    #[error("`{op}` is not derivable at strength `{strength}`")]
    #[diagnostic(
        code(r3bl_seq_facade::contract::not_derivable),
        help("`{op}` needs a stronger declaration; see the contract table")
    )]
    NotDerivable { strength: Strength, op: SynthOp },
}
