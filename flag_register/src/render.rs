//! Allocation-free rendering of registers as '0'/'1' text.
//!
//! The rendered form is always exactly `capacity` characters, most
//! significant flag (index `N - 1`) first, flag 0 last.

use core::fmt;

use crate::FlagWord;

/// Writes `value` as `T::BITS` binary digits, MSB first.
///
/// With `invert` set every digit is flipped, so a set flag renders as '0'.
pub(crate) fn write_bits<T: FlagWord, W: fmt::Write>(
    out: &mut W,
    value: T,
    invert: bool,
) -> fmt::Result {
    for index in (0..T::BITS).rev() {
        let set = (value & T::bit(index)) != T::ZERO;
        out.write_char(if set != invert { '1' } else { '0' })?;
    }
    Ok(())
}

/// `Display` adapter returned by [`FlagRegister::binary`](crate::FlagRegister::binary).
#[derive(Clone, Copy, Debug)]
pub struct Binary<T: FlagWord> {
    pub(crate) value: T,
}

impl<T: FlagWord> fmt::Display for Binary<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_bits(f, self.value, false)
    }
}

/// `Display` adapter returned by
/// [`FlagRegister::inverse_binary`](crate::FlagRegister::inverse_binary).
#[derive(Clone, Copy, Debug)]
pub struct InverseBinary<T: FlagWord> {
    pub(crate) value: T,
}

impl<T: FlagWord> fmt::Display for InverseBinary<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_bits(f, self.value, true)
    }
}
