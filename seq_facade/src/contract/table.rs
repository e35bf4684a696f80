// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The category contract table: for every [`Strength`], which primitives a
//! cursor type must supply and which operations the synthesis layer derives
//! from them. The table is `const` data ([`CONTRACTS`]) so the legality rules
//! live in one auditable place instead of being scattered through the
//! synthesized operations.

use super::Strength;
use strum_macros::Display;

/// A primitive operation a concrete cursor type supplies directly.
///
/// These name the *obligations* side of the contract. Each variant maps to a
/// required trait item in the cursor ladder:
///
/// | Variant        | Trait item                               |
/// |----------------|------------------------------------------|
/// | `Access`       | `ReadCursor::read` / `RefCursor::current` |
/// | `Step`         | `Cursor::step`                           |
/// | `Equality`     | `PartialEq` (supertrait of `Cursor`)     |
/// | `Duplicate`    | `Clone` (supertrait of `ForwardCursor`)  |
/// | `StepBack`     | `BidirectionalCursor::step_back`         |
/// | `AdvanceBy`    | `RandomAccessCursor::advance_by`         |
/// | `DistanceTo`   | `RandomAccessCursor::distance_to`        |
/// | `RawData`      | `ContiguousCursor::as_ptr`               |
#[derive(Debug, PartialEq, Eq, Clone, Copy, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum PrimitiveOp {
    /// Element access, by value or by reference.
    Access,
    /// Advance by exactly one element.
    Step,
    /// Direct equality between two positions.
    Equality,
    /// Copy the position itself.
    Duplicate,
    /// Retreat by exactly one element.
    StepBack,
    /// Advance by a signed element count in constant time.
    AdvanceBy,
    /// Signed distance to another position in constant time.
    DistanceTo,
    /// Address of the element under the position.
    RawData,
}

/// An operation the synthesis layer derives from primitives.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum SynthOp {
    /// Member access through the position (`capture` / proxy values).
    MemberAccess,
    /// Fetch-and-step: copy, advance the original, return the copy.
    PostStep,
    /// Fetch-and-step-back.
    PostStepBack,
    /// `at(n)` / `at_ref(n)` / `position[n]`.
    Subscript,
    /// `position + n`, `n + position`, `position - n`, `+=`, `-=`.
    Arithmetic,
    /// `<`, `<=`, `>`, `>=` from the distance sign.
    Relationals,
    /// `position - position`.
    Distance,
    /// Raw pointer and borrowed slice views.
    RawView,
}

/// One row of the contract table.
///
/// Rows are cumulative: the `required` and `derivable` slices of a strength
/// contain everything the weaker strengths list, plus that strength's own
/// additions, so a single row answers "what does this strength take and give"
/// without walking the ladder.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Contract {
    pub strength: Strength,
    pub required: &'static [PrimitiveOp],
    pub derivable: &'static [SynthOp],
}

impl Contract {
    /// Does this strength oblige the concrete type to supply `arg_op`?
    #[must_use]
    pub fn requires(&self, arg_op: PrimitiveOp) -> bool { self.required.contains(&arg_op) }

    /// Is `arg_op` legal to synthesize at this strength?
    #[must_use]
    pub fn can_derive(&self, arg_op: SynthOp) -> bool { self.derivable.contains(&arg_op) }
}

/// The full category contract table, one row per [`Strength`], ordered
/// weakest to strongest.
pub const CONTRACTS: [Contract; 5] = [
    Contract {
        strength: Strength::SinglePass,
        required: &[PrimitiveOp::Access, PrimitiveOp::Step, PrimitiveOp::Equality],
        derivable: &[SynthOp::MemberAccess],
    },
    Contract {
        strength: Strength::Forward,
        required: &[
            PrimitiveOp::Access,
            PrimitiveOp::Step,
            PrimitiveOp::Equality,
            PrimitiveOp::Duplicate,
        ],
        derivable: &[SynthOp::MemberAccess, SynthOp::PostStep],
    },
    Contract {
        strength: Strength::Bidirectional,
        required: &[
            PrimitiveOp::Access,
            PrimitiveOp::Step,
            PrimitiveOp::Equality,
            PrimitiveOp::Duplicate,
            PrimitiveOp::StepBack,
        ],
        derivable: &[SynthOp::MemberAccess, SynthOp::PostStep, SynthOp::PostStepBack],
    },
    Contract {
        strength: Strength::RandomAccess,
        required: &[
            PrimitiveOp::Access,
            PrimitiveOp::Step,
            PrimitiveOp::Equality,
            PrimitiveOp::Duplicate,
            PrimitiveOp::StepBack,
            PrimitiveOp::AdvanceBy,
            PrimitiveOp::DistanceTo,
        ],
        derivable: &[
            SynthOp::MemberAccess,
            SynthOp::PostStep,
            SynthOp::PostStepBack,
            SynthOp::Subscript,
            SynthOp::Arithmetic,
            SynthOp::Relationals,
            SynthOp::Distance,
        ],
    },
    Contract {
        strength: Strength::Contiguous,
        required: &[
            PrimitiveOp::Access,
            PrimitiveOp::Step,
            PrimitiveOp::Equality,
            PrimitiveOp::Duplicate,
            PrimitiveOp::StepBack,
            PrimitiveOp::AdvanceBy,
            PrimitiveOp::DistanceTo,
            PrimitiveOp::RawData,
        ],
        derivable: &[
            SynthOp::MemberAccess,
            SynthOp::PostStep,
            SynthOp::PostStepBack,
            SynthOp::Subscript,
            SynthOp::Arithmetic,
            SynthOp::Relationals,
            SynthOp::Distance,
            SynthOp::RawView,
        ],
    },
];

impl Strength {
    /// The contract row for this strength.
    ///
    /// ```
    /// use r3bl_seq_facade::{PrimitiveOp, Strength, SynthOp};
    ///
    /// let row = Strength::Forward.contract();
    /// assert!(row.requires(PrimitiveOp::Duplicate));
    /// assert!(!row.can_derive(SynthOp::Subscript));
    /// ```
    #[must_use]
    pub fn contract(self) -> &'static Contract { &CONTRACTS[self as usize] }
}
