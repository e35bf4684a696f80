// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! [`Strength`] - the five ordered traversal strength levels a cursor type can
//! declare, from weakest ([`SinglePass`]) to strongest ([`Contiguous`]).
//!
//! [`SinglePass`]: Strength::SinglePass
//! [`Contiguous`]: Strength::Contiguous

use strum_macros::{Display, EnumCount, EnumIter};

/// Declared traversal strength of a cursor type.
///
/// Each level's contract is a superset of the one below it, so the derived
/// `Ord` impl gives the natural "at least as strong as" ordering:
///
/// ```text
/// SinglePass < Forward < Bidirectional < RandomAccess < Contiguous
/// ```
///
/// The strength a concrete type declares decides which operations the
/// synthesis layer derives for it. Declaring a strength is done in the type
/// system (by implementing that rung of the cursor trait ladder); this enum is
/// the runtime-inspectable mirror of the declaration, used by the contract
/// table and the capability audit.
///
/// ## Examples
///
/// ```
/// use r3bl_seq_facade::Strength;
///
/// assert!(Strength::RandomAccess.at_least(Strength::Forward));
/// assert!(!Strength::Forward.at_least(Strength::Bidirectional));
/// assert_eq!(Strength::RandomAccess.to_string(), "random-access");
/// ```
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash, Display, EnumCount,
         EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum Strength {
    /// One forward traversal, once. No duplication guarantee: once a position
    /// has been stepped past an element there is no way back and no second
    /// visitor.
    SinglePass,

    /// Adds duplication (the type is `Clone`), making multi-pass algorithms
    /// and the fetch-and-step form legal.
    Forward,

    /// Adds stepping backward.
    Bidirectional,

    /// Adds constant-time jumps (`advance_by`) and signed distance
    /// (`distance_to`), unlocking arithmetic, ordering, and subscripting.
    RandomAccess,

    /// Random access over elements that are laid out contiguously in memory,
    /// adding raw data access and borrowed slice views.
    Contiguous,
}

impl Strength {
    /// Returns true when `self` provides every capability `arg_floor` does.
    #[must_use]
    pub fn at_least(self, arg_floor: Strength) -> bool { self >= arg_floor }

    /// The next weaker level, if any. `SinglePass` has none.
    #[must_use]
    pub fn weaker(self) -> Option<Strength> {
        match self {
            Strength::SinglePass => None,
            Strength::Forward => Some(Strength::SinglePass),
            Strength::Bidirectional => Some(Strength::Forward),
            Strength::RandomAccess => Some(Strength::Bidirectional),
            Strength::Contiguous => Some(Strength::RandomAccess),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_strength_ordering_is_total_and_ascending() {
        let all: Vec<Strength> = Strength::iter().collect();
        for pair in all.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_at_least_is_reflexive() {
        for strength in Strength::iter() {
            assert!(strength.at_least(strength));
        }
    }

    #[test]
    fn test_weaker_walks_down_the_ladder() {
        assert_eq!(Strength::Contiguous.weaker(), Some(Strength::RandomAccess));
        assert_eq!(Strength::Forward.weaker(), Some(Strength::SinglePass));
        assert_eq!(Strength::SinglePass.weaker(), None);
    }

    #[test]
    fn test_display_uses_kebab_case() {
        assert_eq!(Strength::SinglePass.to_string(), "single-pass");
        assert_eq!(Strength::Contiguous.to_string(), "contiguous");
    }
}
