// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! [`CursorCaps`] - a cursor declaration mirrored as plain `const` data.
//!
//! The trait ladder already enforces the contract at compile time; what it
//! cannot do is *report*. A declaration publishes its capabilities here as an
//! ordinary value so tests and tools can inspect presence and absence without
//! tripping a build failure, and can audit the mirror against [`CONTRACTS`]
//! with a real diagnostic on disagreement.
//!
//! [`CONTRACTS`]: crate::CONTRACTS

use crate::{ContractViolation, Cursor, PrimitiveOp, Strength, SynthOp};
use strum_macros::Display;

/// How the elements a cursor walks are arranged in memory.
///
/// `Contiguous` is the layout side of the [`ContiguousCursor`] declaration:
/// the trait impl is the promise, this variant is the promise restated as
/// data so [`CursorCaps::validate`] can cross-check the two.
///
/// [`ContiguousCursor`]: crate::ContiguousCursor
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum Layout {
    /// Elements may live anywhere; only the cursor knows how to reach them.
    Discontiguous,
    /// Elements sit adjacent in memory, addressable through a raw pointer.
    Contiguous,
}

/// The capability descriptor of one cursor declaration.
///
/// Every field mirrors something the type system already knows: which rung of
/// the ladder is implemented, which access traits, whether `PartialEq` is
/// hand-written or synthesized from distance. Mirroring it as a `const` value
/// makes absence observable (a `false` here is an answer, not an error) and
/// gives the runtime audit something to check against the contract table.
///
/// Build one with [`CursorCaps::for_strength`] and override the fields where
/// the declaration differs from the baseline:
///
/// ```
/// use r3bl_seq_facade::{CursorCaps, Layout, Strength};
///
/// const CAPS: CursorCaps = CursorCaps {
///     ref_access: true,
///     read_access: false,
///     ..CursorCaps::for_strength(Strength::Bidirectional)
/// };
///
/// assert!(CAPS.validate().is_ok());
/// assert_eq!(CAPS.layout, Layout::Discontiguous);
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct CursorCaps {
    /// The declared rung of the trait ladder.
    pub strength: Strength,
    /// The declared element layout.
    pub layout: Layout,
    /// `ReadCursor` is implemented (elements come out by value).
    pub read_access: bool,
    /// `RefCursor` is implemented (elements are lent from storage).
    pub ref_access: bool,
    /// `PartialEq` is supplied directly rather than synthesized as
    /// distance-is-zero.
    pub direct_equality: bool,
    /// The cursor itself can be copied (`Clone`).
    pub duplicate: bool,
    /// A user decrement exists (`step_back`).
    pub step_back: bool,
    /// Constant-time signed jumps exist (`advance_by`).
    pub advance_by: bool,
    /// Constant-time signed distance exists (`distance_to`).
    pub distance_to: bool,
}

impl CursorCaps {
    /// The baseline descriptor for a strength: exactly the primitives the
    /// contract row obliges, with by-value access and direct equality.
    #[must_use]
    pub const fn for_strength(arg_strength: Strength) -> CursorCaps {
        let rank = arg_strength as u8;
        CursorCaps {
            strength: arg_strength,
            layout: if rank >= Strength::Contiguous as u8 {
                Layout::Contiguous
            } else {
                Layout::Discontiguous
            },
            read_access: true,
            ref_access: false,
            direct_equality: true,
            duplicate: rank >= Strength::Forward as u8,
            step_back: rank >= Strength::Bidirectional as u8,
            advance_by: rank >= Strength::RandomAccess as u8,
            distance_to: rank >= Strength::RandomAccess as u8,
        }
    }

    /// Audit this descriptor against the contract row of its declared
    /// strength.
    ///
    /// Every primitive the row requires must be reported present. Two checks
    /// are indirect: the equality obligation is also satisfied by
    /// distance-is-zero synthesis, but only at random-access strength and
    /// above, and the raw-data obligation is satisfied by the layout
    /// declaration rather than a dedicated field.
    ///
    /// # Errors
    ///
    /// [`ContractViolation::MissingPrimitive`] for the first obligation the
    /// descriptor does not report, or [`ContractViolation::LayoutMismatch`]
    /// when the missing obligation is raw data.
    pub fn validate(&self) -> Result<(), ContractViolation> {
        for &required in self.strength.contract().required {
            let satisfied = match required {
                PrimitiveOp::Access => self.read_access || self.ref_access,
                // A `Cursor` impl cannot omit `step`.
                PrimitiveOp::Step => true,
                PrimitiveOp::Equality => {
                    self.direct_equality
                        || (self.distance_to
                            && self.strength.at_least(Strength::RandomAccess))
                }
                PrimitiveOp::Duplicate => self.duplicate,
                PrimitiveOp::StepBack => self.step_back,
                PrimitiveOp::AdvanceBy => self.advance_by,
                PrimitiveOp::DistanceTo => self.distance_to,
                PrimitiveOp::RawData => self.layout == Layout::Contiguous,
            };
            if !satisfied {
                return Err(match required {
                    PrimitiveOp::RawData => ContractViolation::LayoutMismatch,
                    _ => ContractViolation::MissingPrimitive {
                        strength: self.strength,
                        missing: required,
                    },
                });
            }
        }
        Ok(())
    }

    /// Is `arg_op` legal to synthesize for this declaration?
    ///
    /// # Errors
    ///
    /// [`ContractViolation::NotDerivable`] naming the declared strength and
    /// the refused operation.
    pub fn require_derivable(&self, arg_op: SynthOp) -> Result<(), ContractViolation> {
        if self.strength.contract().can_derive(arg_op) {
            Ok(())
        } else {
            Err(ContractViolation::NotDerivable {
                strength: self.strength,
                op: arg_op,
            })
        }
    }
}

/// A cursor declaration that publishes its [`CursorCaps`] descriptor.
///
/// ```
/// use r3bl_seq_facade::{Cursor, CursorCaps, CursorProfile, ReadCursor,
///                       Strength, verify_profile};
///
/// #[derive(Debug, PartialEq)]
/// struct Pager {
///     page: u32,
/// }
///
/// impl Cursor for Pager {
///     type Item = u32;
///     fn step(&mut self) { self.page += 1; }
/// }
///
/// impl ReadCursor for Pager {
///     fn read(&self) -> u32 { self.page }
/// }
///
/// impl CursorProfile for Pager {
///     const CAPS: CursorCaps = CursorCaps::for_strength(Strength::SinglePass);
/// }
///
/// assert!(verify_profile::<Pager>().is_ok());
/// ```
pub trait CursorProfile: Cursor {
    /// The declaration's capability descriptor, never mutated.
    const CAPS: CursorCaps;
}

/// Audit a declaration's published descriptor against the contract table.
///
/// # Errors
///
/// Whatever [`CursorCaps::validate`] reports for [`CursorProfile::CAPS`].
pub fn verify_profile<C: CursorProfile>() -> Result<(), ContractViolation> {
    C::CAPS.validate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    #[test]
    fn test_baseline_descriptors_pass_the_audit() {
        for strength in Strength::iter() {
            assert_eq!(CursorCaps::for_strength(strength).validate(), Ok(()));
        }
    }

    #[test]
    fn test_missing_step_back_is_reported() {
        let caps = CursorCaps {
            step_back: false,
            ..CursorCaps::for_strength(Strength::Bidirectional)
        };
        assert_eq!(
            caps.validate(),
            Err(ContractViolation::MissingPrimitive {
                strength: Strength::Bidirectional,
                missing: PrimitiveOp::StepBack,
            })
        );
    }

    #[test]
    fn test_missing_access_is_reported() {
        let caps = CursorCaps {
            read_access: false,
            ref_access: false,
            ..CursorCaps::for_strength(Strength::SinglePass)
        };
        assert_eq!(
            caps.validate(),
            Err(ContractViolation::MissingPrimitive {
                strength: Strength::SinglePass,
                missing: PrimitiveOp::Access,
            })
        );
    }

    #[test]
    fn test_distance_backed_equality_needs_random_access() {
        let strong = CursorCaps {
            direct_equality: false,
            ..CursorCaps::for_strength(Strength::RandomAccess)
        };
        assert_eq!(strong.validate(), Ok(()));

        let weak = CursorCaps {
            direct_equality: false,
            ..CursorCaps::for_strength(Strength::Forward)
        };
        assert_eq!(
            weak.validate(),
            Err(ContractViolation::MissingPrimitive {
                strength: Strength::Forward,
                missing: PrimitiveOp::Equality,
            })
        );
    }

    #[test]
    fn test_contiguous_strength_over_discontiguous_layout_is_a_mismatch() {
        let caps = CursorCaps {
            layout: Layout::Discontiguous,
            ..CursorCaps::for_strength(Strength::Contiguous)
        };
        assert_eq!(caps.validate(), Err(ContractViolation::LayoutMismatch));
    }

    #[test]
    fn test_contiguous_layout_without_the_strength_is_fine() {
        // Adjacent elements with no raw view declared is an honest, weaker
        // declaration.
        let caps = CursorCaps {
            layout: Layout::Contiguous,
            ..CursorCaps::for_strength(Strength::Forward)
        };
        assert_eq!(caps.validate(), Ok(()));
    }

    #[test]
    fn test_require_derivable_follows_the_table() {
        let forward = CursorCaps::for_strength(Strength::Forward);
        assert_eq!(forward.require_derivable(SynthOp::PostStep), Ok(()));
        assert_eq!(
            forward.require_derivable(SynthOp::Subscript),
            Err(ContractViolation::NotDerivable {
                strength: Strength::Forward,
                op: SynthOp::Subscript,
            })
        );

        let random_access = CursorCaps::for_strength(Strength::RandomAccess);
        assert_eq!(random_access.require_derivable(SynthOp::Subscript), Ok(()));
    }

    #[derive(Debug, PartialEq)]
    struct TestHonest {
        n: u8,
    }

    impl Cursor for TestHonest {
        type Item = u8;
        fn step(&mut self) { self.n += 1; }
    }

    impl CursorProfile for TestHonest {
        const CAPS: CursorCaps = CursorCaps::for_strength(Strength::SinglePass);
    }

    #[derive(Debug, PartialEq)]
    struct TestOverclaimed {
        n: u8,
    }

    impl Cursor for TestOverclaimed {
        type Item = u8;
        fn step(&mut self) { self.n += 1; }
    }

    impl CursorProfile for TestOverclaimed {
        const CAPS: CursorCaps = CursorCaps {
            step_back: false,
            ..CursorCaps::for_strength(Strength::Bidirectional)
        };
    }

    #[test]
    fn test_verify_profile_reads_the_published_descriptor() {
        assert_eq!(verify_profile::<TestHonest>(), Ok(()));
        assert_eq!(
            verify_profile::<TestOverclaimed>(),
            Err(ContractViolation::MissingPrimitive {
                strength: Strength::Bidirectional,
                missing: PrimitiveOp::StepBack,
            })
        );
    }
}
