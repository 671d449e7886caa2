#[cfg(feature = "std")]
use thiserror::Error;

/// Errors reported by the checked (`try_*`) flag accessors.
///
/// The unchecked accessors never fail: an out-of-range index is ignored by
/// mutators and reads as `false`.
#[cfg_attr(feature = "std", derive(Error))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagError {
    #[cfg_attr(
        feature = "std",
        error("Flag index {index} is out of range for a register of {capacity} flags")
    )]
    IndexOutOfRange { index: usize, capacity: usize },
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for FlagError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FlagError::IndexOutOfRange { index, capacity } => write!(
                f,
                "Flag index {} is out of range for a register of {} flags",
                index, capacity
            ),
        }
    }
}

#[cfg(not(feature = "std"))]
impl core::error::Error for FlagError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "alloc")]
    #[test]
    fn message_names_index_and_capacity() {
        use alloc::string::ToString;

        let err = FlagError::IndexOutOfRange {
            index: 40,
            capacity: 8,
        };
        assert_eq!(
            err.to_string(),
            "Flag index 40 is out of range for a register of 8 flags"
        );
    }
}
