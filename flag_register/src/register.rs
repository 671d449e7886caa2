//! The fixed-width flag register.
//!
//! # Examples
//!
//! ```rust
//! use flag_register::FlagRegister;
//!
//! const BUTTON_PRESSED: usize = 0;
//! const LED_ON: usize = 3;
//!
//! let mut status = FlagRegister::<u8>::new();
//! status.set_flag(BUTTON_PRESSED);
//! status.set_flag(LED_ON);
//!
//! assert!(status.check_flag(LED_ON));
//! assert_eq!(status.raw_flags(), 0b0000_1001);
//! assert_eq!(status.binary().to_string(), "00001001");
//!
//! // Out-of-range indices are ignored and read as clear.
//! status.set_flag(40);
//! assert!(!status.check_flag(40));
//! assert_eq!(status.raw_flags(), 0b0000_1001);
//! ```

use core::fmt;

use bytemuck::{Pod, Zeroable};

use crate::render::{self, Binary, InverseBinary};
use crate::{FlagError, FlagWord};

#[cfg(feature = "alloc")]
use alloc::string::String;

type Result<T> = core::result::Result<T, FlagError>;

/// Up to 32 boolean flags packed into one `u8`, `u16` or `u32`.
///
/// The capacity is the bit width of `T` and never changes. The stored word
/// is the only state, so the register is a plain `Copy` value: construct it,
/// flip bits as events arrive and read the bits or the whole word back.
///
/// Index-taking operations never fail. Mutators ignore an index at or above
/// the capacity and [`check_flag`](Self::check_flag) reports it as `false`.
/// Use the `try_*` variants to tell a clear flag from a bad index.
///
/// To share a register with an interrupt handler use
/// [`SharedFlagRegister`](crate::SharedFlagRegister), or keep this type
/// behind the platform's critical section.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(transparent)]
pub struct FlagRegister<T: FlagWord> {
    flags: T,
}

// Safety: FlagRegister is a transparent wrapper around a Pod integer
unsafe impl<T: FlagWord> Zeroable for FlagRegister<T> {}

unsafe impl<T: FlagWord> Pod for FlagRegister<T> {}

impl<T: FlagWord> FlagRegister<T> {
    /// Number of flags held by every register of this width.
    pub const CAPACITY: usize = T::BITS;

    /// Creates a register with every flag clear.
    #[inline]
    pub const fn new() -> Self {
        Self { flags: T::ZERO }
    }

    /// Creates a register holding `flags`.
    #[inline]
    pub const fn from_raw(flags: T) -> Self {
        Self { flags }
    }

    /// Views a buffer of words as registers, without copying.
    ///
    /// ```rust
    /// use flag_register::FlagRegister;
    ///
    /// let words = [0b0000_0001u8, 0b1000_0000];
    /// let regs = FlagRegister::from_words(&words);
    /// assert!(regs[0].check_flag(0));
    /// assert!(regs[1].check_flag(7));
    /// ```
    #[inline]
    pub fn from_words(words: &[T]) -> &[Self] {
        bytemuck::cast_slice(words)
    }

    /// Mutable counterpart of [`from_words`](Self::from_words).
    #[inline]
    pub fn from_words_mut(words: &mut [T]) -> &mut [Self] {
        bytemuck::cast_slice_mut(words)
    }

    #[inline(always)]
    fn in_range(index: usize) -> bool {
        index < T::BITS
    }

    #[inline]
    fn checked(index: usize) -> Result<()> {
        if Self::in_range(index) {
            Ok(())
        } else {
            Err(FlagError::IndexOutOfRange {
                index,
                capacity: T::BITS,
            })
        }
    }

    /// Sets flag `index`. Out-of-range indices are ignored.
    #[inline]
    pub fn set_flag(&mut self, index: usize) {
        if Self::in_range(index) {
            self.flags = self.flags | T::bit(index);
        }
    }

    /// Clears flag `index`. Out-of-range indices are ignored.
    #[inline]
    pub fn clear_flag(&mut self, index: usize) {
        if Self::in_range(index) {
            self.flags = self.flags & !T::bit(index);
        }
    }

    /// Inverts flag `index`. Out-of-range indices are ignored.
    #[inline]
    pub fn toggle_flag(&mut self, index: usize) {
        if Self::in_range(index) {
            self.flags = self.flags ^ T::bit(index);
        }
    }

    /// Sets or clears flag `index` according to `value`.
    #[inline]
    pub fn set_flag_to(&mut self, index: usize, value: bool) {
        if value {
            self.set_flag(index)
        } else {
            self.clear_flag(index)
        }
    }

    /// Returns whether flag `index` is set.
    ///
    /// An out-of-range index reads as `false`, the same as a clear flag.
    #[inline]
    pub fn check_flag(&self, index: usize) -> bool {
        Self::in_range(index) && (self.flags & T::bit(index)) != T::ZERO
    }

    /// Like [`set_flag`](Self::set_flag), but reports an out-of-range index.
    pub fn try_set_flag(&mut self, index: usize) -> Result<()> {
        Self::checked(index)?;
        self.set_flag(index);
        Ok(())
    }

    /// Like [`clear_flag`](Self::clear_flag), but reports an out-of-range index.
    pub fn try_clear_flag(&mut self, index: usize) -> Result<()> {
        Self::checked(index)?;
        self.clear_flag(index);
        Ok(())
    }

    /// Like [`toggle_flag`](Self::toggle_flag), but reports an out-of-range index.
    pub fn try_toggle_flag(&mut self, index: usize) -> Result<()> {
        Self::checked(index)?;
        self.toggle_flag(index);
        Ok(())
    }

    /// Like [`check_flag`](Self::check_flag), but reports an out-of-range
    /// index instead of reading it as `false`.
    ///
    /// ```rust
    /// use flag_register::{FlagError, FlagRegister};
    ///
    /// let reg = FlagRegister::<u8>::new();
    /// assert_eq!(reg.try_check_flag(2), Ok(false));
    /// assert_eq!(
    ///     reg.try_check_flag(8),
    ///     Err(FlagError::IndexOutOfRange { index: 8, capacity: 8 })
    /// );
    /// ```
    pub fn try_check_flag(&self, index: usize) -> Result<bool> {
        Self::checked(index)?;
        Ok(self.check_flag(index))
    }

    /// Clears every flag.
    #[inline]
    pub fn clear_all_flags(&mut self) {
        self.flags = T::ZERO;
    }

    /// Sets every flag.
    #[inline]
    pub fn set_all_flags(&mut self) {
        self.flags = T::ALL;
    }

    /// Returns the whole register as its backing word.
    #[inline]
    pub fn raw_flags(&self) -> T {
        self.flags
    }

    /// Overwrites the whole register with `flags`.
    ///
    /// Not to be called while an interrupt handler may be writing the same
    /// register unless the caller holds a critical section.
    #[inline]
    pub fn set_flags(&mut self, flags: T) {
        self.flags = flags;
    }

    /// Number of flags this register holds: 8, 16 or 32.
    #[inline]
    pub const fn capacity(&self) -> usize {
        Self::CAPACITY
    }

    /// Number of set flags.
    #[inline]
    pub fn count_set(&self) -> usize {
        self.flags.count_set()
    }

    /// `true` if no flag is set.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.flags == T::ZERO
    }

    /// `true` if every flag is set.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.flags == T::ALL
    }

    /// Iterates over the indices of set flags, lowest first.
    pub fn iter_set(&self) -> SetFlags<T> {
        SetFlags::new(self.flags)
    }

    /// Renders the register as `capacity` '0'/'1' digits, MSB first.
    ///
    /// Does not allocate; the snapshot is taken when this is called.
    #[inline]
    pub fn binary(&self) -> Binary<T> {
        Binary { value: self.flags }
    }

    /// Like [`binary`](Self::binary) with every digit inverted.
    #[inline]
    pub fn inverse_binary(&self) -> InverseBinary<T> {
        InverseBinary { value: self.flags }
    }

    /// Returns the register as a `String` of '0'/'1', MSB first.
    ///
    /// ```rust
    /// use flag_register::FlagRegister;
    ///
    /// let mut reg = FlagRegister::<u8>::new();
    /// reg.set_flag(0);
    /// assert_eq!(reg.to_binary_string(), "00000001");
    /// assert_eq!(reg.to_inverse_binary_string(), "11111110");
    /// ```
    #[cfg(feature = "alloc")]
    pub fn to_binary_string(&self) -> String {
        self.render(false)
    }

    /// Returns the register as a `String` with every digit inverted.
    #[cfg(feature = "alloc")]
    pub fn to_inverse_binary_string(&self) -> String {
        self.render(true)
    }

    #[cfg(feature = "alloc")]
    fn render(&self, invert: bool) -> String {
        let snapshot = self.flags;
        let mut out = String::with_capacity(T::BITS);
        // Writing into a String cannot fail.
        let _ = render::write_bits(&mut out, snapshot, invert);
        out
    }
}

impl<T: FlagWord> Default for FlagRegister<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FlagWord> From<T> for FlagRegister<T> {
    fn from(flags: T) -> Self {
        Self::from_raw(flags)
    }
}

impl From<FlagRegister<u8>> for u8 {
    fn from(reg: FlagRegister<u8>) -> Self {
        reg.flags
    }
}

impl From<FlagRegister<u16>> for u16 {
    fn from(reg: FlagRegister<u16>) -> Self {
        reg.flags
    }
}

impl From<FlagRegister<u32>> for u32 {
    fn from(reg: FlagRegister<u32>) -> Self {
        reg.flags
    }
}

impl<T: FlagWord> fmt::Debug for FlagRegister<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FlagRegister({})", self.binary())
    }
}

impl<T: FlagWord> fmt::Display for FlagRegister<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render::write_bits(f, self.flags, false)
    }
}

impl<T: FlagWord> fmt::Binary for FlagRegister<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0b")?;
        }
        render::write_bits(f, self.flags, false)
    }
}

/// Iterator over the indices of set flags, see [`FlagRegister::iter_set`].
#[derive(Clone, Debug)]
pub struct SetFlags<T: FlagWord> {
    bits: T,
    next: usize,
}

impl<T: FlagWord> SetFlags<T> {
    fn new(bits: T) -> Self {
        Self { bits, next: 0 }
    }
}

impl<T: FlagWord> Iterator for SetFlags<T> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        while self.next < T::BITS {
            let index = self.next;
            self.next += 1;
            if (self.bits & T::bit(index)) != T::ZERO {
                return Some(index);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(T::BITS - self.next))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_clear() {
        let reg = FlagRegister::<u16>::new();
        assert_eq!(reg.raw_flags(), 0);
        assert!(reg.is_empty());
        assert_eq!(reg, FlagRegister::default());
    }

    #[test]
    fn set_clear_toggle() {
        let mut reg = FlagRegister::<u8>::new();
        reg.set_flag(2);
        reg.set_flag(5);
        assert_eq!(reg.raw_flags(), 0b0010_0100);

        reg.clear_flag(2);
        assert_eq!(reg.raw_flags(), 0b0010_0000);

        reg.toggle_flag(0);
        reg.toggle_flag(5);
        assert_eq!(reg.raw_flags(), 0b0000_0001);

        reg.set_flag_to(7, true);
        reg.set_flag_to(0, false);
        assert_eq!(reg.raw_flags(), 0b1000_0000);
    }

    #[test]
    fn out_of_range_is_ignored() {
        let mut reg = FlagRegister::<u8>::from_raw(0b1010_1010);
        reg.set_flag(8);
        reg.clear_flag(9);
        reg.toggle_flag(usize::MAX);
        assert_eq!(reg.raw_flags(), 0b1010_1010);

        reg.set_all_flags();
        assert!(!reg.check_flag(8));
        assert!(!reg.check_flag(40));
    }

    #[test]
    fn top_bit_of_each_width() {
        let mut a = FlagRegister::<u8>::new();
        let mut b = FlagRegister::<u16>::new();
        let mut c = FlagRegister::<u32>::new();
        a.set_flag(7);
        b.set_flag(15);
        c.set_flag(31);
        assert_eq!(a.raw_flags(), 0x80);
        assert_eq!(b.raw_flags(), 0x8000);
        assert_eq!(c.raw_flags(), 0x8000_0000);
        assert!(c.check_flag(31));
    }

    #[test]
    fn whole_register_ops() {
        let mut reg = FlagRegister::<u8>::new();
        reg.set_all_flags();
        assert_eq!(reg.raw_flags(), 255);
        assert!(reg.is_full());

        reg.clear_all_flags();
        assert_eq!(reg.raw_flags(), 0);

        reg.set_flags(0b0101_0101);
        assert_eq!(reg.raw_flags(), 0b0101_0101);
        assert_eq!(reg.count_set(), 4);
    }

    #[test]
    fn capacity_by_width() {
        assert_eq!(FlagRegister::<u8>::new().capacity(), 8);
        assert_eq!(FlagRegister::<u16>::new().capacity(), 16);
        assert_eq!(FlagRegister::<u32>::new().capacity(), 32);
        assert_eq!(FlagRegister::<u32>::CAPACITY, 32);
    }

    #[test]
    fn checked_accessors() -> Result<()> {
        let mut reg = FlagRegister::<u16>::new();
        reg.try_set_flag(15)?;
        assert_eq!(reg.try_check_flag(15), Ok(true));
        reg.try_toggle_flag(15)?;
        assert_eq!(reg.try_check_flag(15), Ok(false));
        reg.try_set_flag(3)?;
        reg.try_clear_flag(3)?;
        assert!(reg.is_empty());

        let err = FlagError::IndexOutOfRange {
            index: 16,
            capacity: 16,
        };
        assert_eq!(reg.try_set_flag(16), Err(err));
        assert_eq!(reg.try_clear_flag(16), Err(err));
        assert_eq!(reg.try_toggle_flag(16), Err(err));
        assert_eq!(reg.try_check_flag(16), Err(err));
        assert!(reg.is_empty());
        Ok(())
    }

    #[test]
    fn iter_set_ascending() {
        let reg = FlagRegister::<u16>::from_raw(0b1000_0000_0010_0101);
        let mut it = reg.iter_set();
        assert_eq!(it.next(), Some(0));
        assert_eq!(it.next(), Some(2));
        assert_eq!(it.next(), Some(5));
        assert_eq!(it.next(), Some(15));
        assert_eq!(it.next(), None);
        assert_eq!(FlagRegister::<u8>::new().iter_set().next(), None);
    }

    #[test]
    fn word_conversions() {
        let reg: FlagRegister<u16> = 0xBEEFu16.into();
        let raw: u16 = reg.into();
        assert_eq!(raw, 0xBEEF);
    }

    #[test]
    fn word_slice_views() {
        let mut words = [0u8; 3];
        {
            let regs = FlagRegister::from_words_mut(&mut words);
            regs[1].set_flag(4);
            regs[2].set_all_flags();
        }
        assert_eq!(words, [0, 0b0001_0000, 0xFF]);

        let regs = FlagRegister::from_words(&words);
        assert_eq!(regs.len(), 3);
        assert!(regs[1].check_flag(4));
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn binary_strings() {
        use alloc::format;

        let mut reg = FlagRegister::<u8>::new();
        reg.set_flag(0);
        assert_eq!(reg.to_binary_string(), "00000001");
        assert_eq!(reg.to_inverse_binary_string(), "11111110");
        assert_eq!(format!("{}", reg.binary()), "00000001");
        assert_eq!(format!("{}", reg.inverse_binary()), "11111110");
        assert_eq!(format!("{reg}"), "00000001");
        assert_eq!(format!("{reg:#b}"), "0b00000001");
        assert_eq!(format!("{reg:?}"), "FlagRegister(00000001)");

        let wide = FlagRegister::<u32>::new();
        assert_eq!(wide.to_binary_string().len(), 32);
        assert_eq!(wide.to_inverse_binary_string(), "1".repeat(32));
    }
}
