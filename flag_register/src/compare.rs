//! Classifying how two registers of the same width relate.
//!
//! ```rust
//! use flag_register::{FlagRegister, Match, compare_registers};
//!
//! let a = FlagRegister::<u8>::from_raw(0b0000_0101);
//! let b = FlagRegister::<u8>::from_raw(0b0000_0011);
//! let c = FlagRegister::<u8>::from_raw(0b0000_1010);
//!
//! assert_eq!(compare_registers(&a, &a), Match::Exact);
//! assert_eq!(compare_registers(&a, &b), Match::Partial);
//! assert_eq!(compare_registers(&a, &c), Match::Disjoint);
//! ```

use crate::{FlagRegister, FlagWord};

/// Outcome of [`compare_registers`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Match {
    /// Every flag is identical, including two all-clear registers.
    Exact,
    /// At least one flag is set in both, but the registers differ.
    Partial,
    /// No flag is set in both.
    Disjoint,
}

impl Match {
    /// Classifies two raw words.
    pub fn of<T: FlagWord>(a: T, b: T) -> Self {
        if a == b {
            Match::Exact
        } else if (a & b) != T::ZERO {
            Match::Partial
        } else {
            Match::Disjoint
        }
    }

    /// Legacy numeric code: `1` exact, `-1` partial, `0` disjoint.
    pub const fn code(self) -> i8 {
        match self {
            Match::Exact => 1,
            Match::Partial => -1,
            Match::Disjoint => 0,
        }
    }

    /// `true` for [`Match::Exact`] and [`Match::Partial`].
    pub const fn is_match(self) -> bool {
        !matches!(self, Match::Disjoint)
    }
}

/// Compares the raw words of two registers of the same width.
///
/// Two all-clear registers are an exact match, not a disjoint one.
pub fn compare_registers<T: FlagWord>(a: &FlagRegister<T>, b: &FlagRegister<T>) -> Match {
    Match::of(a.raw_flags(), b.raw_flags())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reg(v: u8) -> FlagRegister<u8> {
        FlagRegister::from_raw(v)
    }

    #[test]
    fn empty_registers_match_exactly() {
        let a = FlagRegister::<u32>::new();
        let b = FlagRegister::<u32>::new();
        assert_eq!(compare_registers(&a, &b), Match::Exact);
    }

    #[test]
    fn classification() {
        assert_eq!(compare_registers(&reg(0b0101), &reg(0b0101)), Match::Exact);
        assert_eq!(compare_registers(&reg(0b0101), &reg(0b0011)), Match::Partial);
        assert_eq!(compare_registers(&reg(0b0101), &reg(0b1010)), Match::Disjoint);
    }

    #[test]
    fn empty_against_nonempty_is_disjoint() {
        assert_eq!(compare_registers(&reg(0), &reg(0b1000)), Match::Disjoint);
    }

    #[test]
    fn subset_is_partial() {
        assert_eq!(compare_registers(&reg(0b1111), &reg(0b0100)), Match::Partial);
    }

    #[test]
    fn legacy_codes() {
        assert_eq!(Match::Exact.code(), 1);
        assert_eq!(Match::Partial.code(), -1);
        assert_eq!(Match::Disjoint.code(), 0);
        assert!(Match::Partial.is_match());
        assert!(!Match::Disjoint.is_match());
    }
}
